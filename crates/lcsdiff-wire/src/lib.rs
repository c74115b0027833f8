//! Wire encoding for text edit scripts.
//!
//! An update payload carries the version it depends on followed by a list of
//! length-prefixed changes. Integers inside a change use a compact VarInt.
//!
//! # Key Types
//!
//! - [`UpdatePayload`] -- Dependency plus ordered text changes
//! - [`encode_var_int`] / [`decode_var_int`] -- 1, 3, 5 or 9 byte unsigned integers

pub mod error;
pub mod payload;
pub mod varint;

pub use error::{WireError, WireResult};
pub use payload::UpdatePayload;
pub use varint::{decode_var_int, encode_var_int, var_int_len};
