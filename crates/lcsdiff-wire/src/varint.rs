//! Variable-length unsigned integers.
//!
//! Values up to 252 take one byte. Larger values take a marker byte followed
//! by a little-endian body: `0xFD` + u16, `0xFE` + u32, `0xFF` + u64.

use bytes::BufMut;

use crate::error::{WireError, WireResult};

const MARKER_U16: u8 = 0xFD;
const MARKER_U32: u8 = 0xFE;
const MARKER_U64: u8 = 0xFF;
const MAX_INLINE: u64 = 252;

/// Number of bytes `value` occupies when encoded.
pub fn var_int_len(value: u64) -> usize {
    if value <= MAX_INLINE {
        1
    } else if value <= u64::from(u16::MAX) {
        3
    } else if value <= u64::from(u32::MAX) {
        5
    } else {
        9
    }
}

/// Append the encoding of `value` to `buf`.
pub fn encode_var_int<B: BufMut>(value: u64, buf: &mut B) {
    if value <= MAX_INLINE {
        buf.put_u8(value as u8);
    } else if value <= u64::from(u16::MAX) {
        buf.put_u8(MARKER_U16);
        buf.put_u16_le(value as u16);
    } else if value <= u64::from(u32::MAX) {
        buf.put_u8(MARKER_U32);
        buf.put_u32_le(value as u32);
    } else {
        buf.put_u8(MARKER_U64);
        buf.put_u64_le(value);
    }
}

/// Decode the VarInt at the start of `data`. Returns `(value, bytes_consumed)`.
pub fn decode_var_int(data: &[u8]) -> WireResult<(u64, usize)> {
    let Some(&head) = data.first() else {
        return Err(WireError::Truncated {
            needed: 1,
            available: 0,
        });
    };
    let width = match head {
        MARKER_U16 => 2,
        MARKER_U32 => 4,
        MARKER_U64 => 8,
        inline => return Ok((u64::from(inline), 1)),
    };
    let needed = 1 + width;
    if data.len() < needed {
        return Err(WireError::Truncated {
            needed,
            available: data.len(),
        });
    }
    let mut body = [0u8; 8];
    body[..width].copy_from_slice(&data[1..needed]);
    Ok((u64::from_le_bytes(body), needed))
}
