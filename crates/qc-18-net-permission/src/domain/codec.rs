//! # Entry Codec
//!
//! RLP encoding of whitelist entries and sentinel pointers.
//!
//! Entry layout: `[node_addr, prev, next]` where an absent link is the empty
//! string (`0x80`). A pointer slot holds the bare 20-byte address string.
//! A `None` encoding means "clear the slot".

use super::entities::{Address, PermissionEntry};
use rlp::{Decodable, DecoderError, Encodable, Rlp, RlpStream};

const ENTRY_FIELDS: usize = 3;

impl Encodable for Address {
    fn rlp_append(&self, s: &mut RlpStream) {
        s.append(&self.as_bytes().to_vec());
    }
}

impl Decodable for Address {
    fn decode(rlp: &Rlp) -> Result<Self, DecoderError> {
        if !rlp.is_data() {
            return Err(DecoderError::RlpExpectedToBeData);
        }
        Address::from_slice(rlp.data()?).ok_or(DecoderError::RlpInvalidLength)
    }
}

impl Encodable for PermissionEntry {
    fn rlp_append(&self, s: &mut RlpStream) {
        s.begin_list(ENTRY_FIELDS);
        s.append(&self.node_addr);
        append_optional(s, self.prev.as_ref());
        append_optional(s, self.next.as_ref());
    }
}

impl Decodable for PermissionEntry {
    fn decode(rlp: &Rlp) -> Result<Self, DecoderError> {
        if !rlp.is_list() {
            return Err(DecoderError::RlpExpectedToBeList);
        }
        if rlp.item_count()? != ENTRY_FIELDS {
            return Err(DecoderError::RlpIncorrectListLen);
        }
        Ok(Self {
            node_addr: rlp.val_at(0)?,
            prev: decode_optional(&rlp.at(1)?)?,
            next: decode_optional(&rlp.at(2)?)?,
        })
    }
}

fn append_optional(s: &mut RlpStream, value: Option<&Address>) {
    match value {
        Some(addr) => {
            s.append(addr);
        }
        None => {
            s.append_empty_data();
        }
    }
}

fn decode_optional(rlp: &Rlp) -> Result<Option<Address>, DecoderError> {
    if rlp.is_data() && rlp.data()?.is_empty() {
        return Ok(None);
    }
    rlp.as_val().map(Some)
}

/// Reject trailing bytes after the top-level item.
fn decode_exact<T: Decodable>(raw: &[u8]) -> Result<T, DecoderError> {
    let rlp = Rlp::new(raw);
    let info = rlp.payload_info()?;
    if info.header_len + info.value_len != raw.len() {
        return Err(DecoderError::RlpInconsistentLengthAndData);
    }
    rlp.as_val()
}

/// Encode an entry for storage, `None` when the slot should be cleared.
pub fn encode_entry(entry: &PermissionEntry) -> Option<Vec<u8>> {
    if entry.is_empty() {
        return None;
    }
    Some(rlp::encode(entry).to_vec())
}

/// Decode a stored entry. A missing or empty slot yields the empty entry.
pub fn decode_entry(raw: Option<&[u8]>) -> Result<PermissionEntry, DecoderError> {
    match raw {
        None => Ok(PermissionEntry::default()),
        Some(bytes) if bytes.is_empty() => Ok(PermissionEntry::default()),
        Some(bytes) => decode_exact(bytes),
    }
}

/// Encode a sentinel pointer, `None` when the slot should be cleared.
pub fn encode_pointer(pointer: Option<&Address>) -> Option<Vec<u8>> {
    pointer.map(|addr| rlp::encode(addr).to_vec())
}

/// Decode a sentinel pointer. A missing or empty slot yields `None`.
pub fn decode_pointer(raw: Option<&[u8]>) -> Result<Option<Address>, DecoderError> {
    match raw {
        None => Ok(None),
        Some(bytes) if bytes.is_empty() => Ok(None),
        Some(bytes) => decode_exact(bytes).map(Some),
    }
}
