//! Oracle Module
//!
//! Sends synthesized arguments to the execution oracle and decodes its raw
//! output per the declared return type:
//!
//! - `bool`: `true` / `false`
//! - integers, floats: numeric literal
//! - `string`: JSON string, escape sequences unescaped
//! - `[]T`, `map[K]V`: generic JSON structure
//! - anything else (`complex64`, named types): `UnsupportedType`

pub mod infrastructure;

pub use infrastructure::{bind_results, decode_result, is_decodable, DecodeError};
