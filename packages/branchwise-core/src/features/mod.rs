//! Feature modules (leaves first)
//!
//! constraint -> synthesis -> path_exploration -> analysis -> oracle

pub mod analysis;
pub mod constraint;
pub mod oracle;
pub mod path_exploration;
pub mod synthesis;
