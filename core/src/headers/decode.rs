//! src/headers/decode.rs
//!
//! Container decoding.
//!
//! Design notes:
//! - Header checks run in wire order: size, magic, flags, then length.
//! - The declared payload length must equal the bytes that follow exactly;
//!   trailing garbage is as fatal as truncation.

use byteorder::{BigEndian, ByteOrder};

use crate::constants::MAGIC_CPSL;
use crate::headers::types::{Container, ContainerFlags, ContainerHeader};
use crate::types::FormatError;

/// Parse and validate the 9-byte header at the start of `buf`.
/// Does not look at the payload.
#[inline]
pub fn parse_header(buf: &[u8]) -> Result<ContainerHeader, FormatError> {
    if buf.len() < ContainerHeader::LEN {
        return Err(FormatError::TooShort { have: buf.len(), need: ContainerHeader::LEN });
    }

    let mut magic = [0u8; 4];
    magic.copy_from_slice(&buf[0..4]);
    if magic != MAGIC_CPSL {
        return Err(FormatError::InvalidMagic { have: magic, need: MAGIC_CPSL });
    }

    let raw = buf[4];
    let flags = ContainerFlags::from_bits(raw)
        .ok_or(FormatError::ReservedFlags(raw & !ContainerFlags::all().bits()))?;

    let payload_len = BigEndian::read_u32(&buf[5..9]);

    Ok(ContainerHeader { magic, flags, payload_len })
}

/// Parse a whole container, returning the header and a borrowed payload.
pub fn split_container(buf: &[u8]) -> Result<(ContainerHeader, &[u8]), FormatError> {
    let header = parse_header(buf)?;
    let payload = &buf[ContainerHeader::LEN..];
    if payload.len() != header.payload_len as usize {
        return Err(FormatError::LengthMismatch {
            declared: header.payload_len,
            actual: payload.len(),
        });
    }
    Ok((header, payload))
}

/// Parse a whole container into an owned `Container`.
pub fn decode_container(buf: &[u8]) -> Result<Container, FormatError> {
    let (header, payload) = split_container(buf)?;
    Ok(Container::new(header.flags, payload.to_vec()))
}
