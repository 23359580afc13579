//! Oracle infrastructure

pub mod result_binder;
pub mod result_decoder;

pub use result_binder::bind_results;
pub use result_decoder::{decode_result, is_decodable, DecodeError};
