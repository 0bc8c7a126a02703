//! headers/types.rs
//! Container envelope types.
//!
//! Notes:
//! - 9-byte fixed header: magic (4) + flags (1) + payload length (4, big-endian).
//! - Flag bits 2..7 are reserved for format extensions and must be zero.
//! - A `Container` owns its payload; nothing points back at its producer.

use bitflags::bitflags;

use crate::constants::{flags, CONTAINER_HEADER_LEN, MAGIC_CPSL};

bitflags! {
    /// Presence bits at header offset 4.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ContainerFlags: u8 {
        /// Payload is the original bytes verbatim.
        const STORED    = flags::STORED;
        /// Payload went through the keystream cipher.
        const ENCRYPTED = flags::ENCRYPTED;
    }
}

/// Decoded fixed-size header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerHeader {
    pub magic: [u8; 4],
    pub flags: ContainerFlags,
    pub payload_len: u32,
}

impl ContainerHeader {
    pub const LEN: usize = CONTAINER_HEADER_LEN;

    pub fn new(flags: ContainerFlags, payload_len: u32) -> Self {
        Self { magic: MAGIC_CPSL, flags, payload_len }
    }

    pub fn is_stored(&self) -> bool {
        self.flags.contains(ContainerFlags::STORED)
    }

    pub fn is_encrypted(&self) -> bool {
        self.flags.contains(ContainerFlags::ENCRYPTED)
    }
}

/// Header flags plus the payload they describe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub flags: ContainerFlags,
    pub payload: Vec<u8>,
}

impl Container {
    pub fn new(flags: ContainerFlags, payload: Vec<u8>) -> Self {
        Self { flags, payload }
    }

    pub fn is_stored(&self) -> bool {
        self.flags.contains(ContainerFlags::STORED)
    }

    pub fn is_encrypted(&self) -> bool {
        self.flags.contains(ContainerFlags::ENCRYPTED)
    }

    /// Total serialized size: header plus payload.
    pub fn encoded_len(&self) -> usize {
        ContainerHeader::LEN + self.payload.len()
    }
}

pub fn fmt_bytes(b: &[u8]) -> String {
    if b.iter().all(|&c| c.is_ascii_graphic() || c == b' ') {
        format!("b\"{}\"", String::from_utf8_lossy(b))
    } else {
        format!("0x{}", hex::encode(b))
    }
}
