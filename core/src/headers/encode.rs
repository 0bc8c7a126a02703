//! src/headers/encode.rs
//!
//! Container encoding.
//!
//! Design notes:
//! - Big-endian payload length, written with byteorder.
//! - Payloads longer than `u32::MAX` cannot be described and are rejected.

use byteorder::{BigEndian, ByteOrder};

use crate::headers::types::{Container, ContainerFlags, ContainerHeader};
use crate::types::FormatError;

/// Serialize a header into its fixed 9-byte form.
#[inline]
pub fn encode_header(h: &ContainerHeader) -> [u8; ContainerHeader::LEN] {
    let mut out = [0u8; ContainerHeader::LEN];
    out[0..4].copy_from_slice(&h.magic);           // 0..4 magic
    out[4] = h.flags.bits();                       // 4    flags
    BigEndian::write_u32(&mut out[5..9], h.payload_len); // 5..9 payload length
    out
}

/// Serialize `[header][payload]`.
///
/// # Errors
/// - `FormatError::PayloadTooLarge` if the payload does not fit a u32 length.
pub fn encode_container(flags: ContainerFlags, payload: &[u8]) -> Result<Vec<u8>, FormatError> {
    let payload_len = u32::try_from(payload.len())
        .map_err(|_| FormatError::PayloadTooLarge { len: payload.len() })?;

    let header = ContainerHeader::new(flags, payload_len);
    let mut out = Vec::with_capacity(ContainerHeader::LEN + payload.len());
    out.extend_from_slice(&encode_header(&header));
    out.extend_from_slice(payload);

    debug_assert_eq!(out.len(), ContainerHeader::LEN + payload.len());
    Ok(out)
}

impl Container {
    pub fn encode(&self) -> Result<Vec<u8>, FormatError> {
        encode_container(self.flags, &self.payload)
    }
}
