//! Analysis infrastructure (front-end adapters)

pub mod json_front_end;

pub use json_front_end::JsonFrontEnd;
