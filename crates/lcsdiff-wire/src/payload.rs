//! Update payload framing.
//!
//! ```text
//! [4 bytes BE dependency]
//! repeat: [VarInt len][VarInt index][1 byte 'I' | 'D'][UTF-8 text]
//! ```
//!
//! `len` covers the index, the operation byte, and the text.

use bytes::{Buf, BufMut, Bytes, BytesMut};
use serde::{Deserialize, Serialize};
use tracing::debug;

use lcsdiff_core::{EditKind, TextEdit};

use crate::error::{WireError, WireResult};
use crate::varint::{decode_var_int, encode_var_int, var_int_len};

const DEPENDENCY_LEN: usize = 4;

/// A text edit script together with the version it applies on top of.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePayload {
    /// Version number the changes were computed against.
    pub dependency: u32,
    /// Changes in script order.
    pub changes: Vec<TextEdit>,
}

impl UpdatePayload {
    pub fn new(dependency: u32, changes: Vec<TextEdit>) -> Self {
        Self {
            dependency,
            changes,
        }
    }

    /// Size of the encoded payload in bytes.
    pub fn encoded_len(&self) -> usize {
        DEPENDENCY_LEN
            + self
                .changes
                .iter()
                .map(|c| {
                    let body = change_body_len(c);
                    var_int_len(body as u64) + body
                })
                .sum::<usize>()
    }

    /// Encode the payload.
    pub fn encode(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(self.encoded_len());
        buf.put_u32(self.dependency);
        for change in &self.changes {
            encode_var_int(change_body_len(change) as u64, &mut buf);
            encode_var_int(change.index as u64, &mut buf);
            buf.put_u8(change.kind.tag() as u8);
            buf.put_slice(change.text.as_bytes());
        }
        debug!(
            dependency = self.dependency,
            changes = self.changes.len(),
            bytes = buf.len(),
            "encoded update payload"
        );
        buf.freeze()
    }

    /// Decode a complete payload. Trailing partial changes are an error.
    pub fn decode(data: &[u8]) -> WireResult<Self> {
        if data.len() < DEPENDENCY_LEN {
            return Err(WireError::Truncated {
                needed: DEPENDENCY_LEN,
                available: data.len(),
            });
        }
        let mut buf = data;
        let dependency = buf.get_u32();

        let mut changes = Vec::new();
        while buf.has_remaining() {
            let (len, consumed) = decode_var_int(buf)?;
            buf.advance(consumed);
            let len = to_usize(len)?;
            if buf.remaining() < len {
                return Err(WireError::Truncated {
                    needed: len,
                    available: buf.remaining(),
                });
            }
            changes.push(decode_change(&buf[..len])?);
            buf.advance(len);
        }

        debug!(dependency, changes = changes.len(), bytes = data.len(), "decoded update payload");
        Ok(Self {
            dependency,
            changes,
        })
    }
}

fn change_body_len(change: &TextEdit) -> usize {
    var_int_len(change.index as u64) + 1 + change.text.len()
}

fn decode_change(frame: &[u8]) -> WireResult<TextEdit> {
    let (index, consumed) = decode_var_int(frame)
        .map_err(|_| WireError::Malformed(format!("{}-byte change has no room for its index", frame.len())))?;
    let index = to_usize(index)?;
    let Some(&op) = frame.get(consumed) else {
        return Err(WireError::Malformed(format!(
            "change at index {index} has no operation byte"
        )));
    };
    let kind = EditKind::from_tag(char::from(op)).ok_or(WireError::InvalidOperation(op))?;
    let text = std::str::from_utf8(&frame[consumed + 1..])
        .map_err(|source| WireError::InvalidUtf8 { index, source })?;
    Ok(TextEdit {
        kind,
        index,
        text: text.to_owned(),
    })
}

fn to_usize(value: u64) -> WireResult<usize> {
    usize::try_from(value).map_err(|_| WireError::Malformed(format!("{value} exceeds usize")))
}
