//! crypto/keystream.rs
//! Symmetric XOR keystream driven by a 64-bit LCG.
//!
//! Design notes:
//! - state <- state * 6364136223846793005 + 1442695040888963407 (wrapping),
//!   advanced before each byte; the byte is the low 8 bits of the new state.
//! - The transform is its own inverse; encrypt and decrypt are the same call.
//! - Output length always equals input length.

use crate::crypto::kdf::derive_seed;

pub const LCG_MULTIPLIER: u64 = 6_364_136_223_846_793_005;
pub const LCG_INCREMENT: u64 = 1_442_695_040_888_963_407;

/// Byte generator seeded from a password.
#[derive(Debug, Clone)]
pub struct Keystream {
    state: u64,
}

impl Keystream {
    pub fn from_seed(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn from_password(password: &str) -> Self {
        Self::from_seed(derive_seed(password))
    }

    #[inline]
    pub fn next_byte(&mut self) -> u8 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        (self.state & 0xFF) as u8
    }

    /// XOR the keystream into `buf`, continuing from the current state.
    pub fn apply(&mut self, buf: &mut [u8]) {
        for b in buf.iter_mut() {
            *b ^= self.next_byte();
        }
    }
}

impl Iterator for Keystream {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        Some(self.next_byte())
    }
}

/// Encrypt or decrypt `data` under `password`.
pub fn transform(data: &[u8], password: &str) -> Vec<u8> {
    let mut out = data.to_vec();
    transform_in_place(&mut out, password);
    out
}

pub fn transform_in_place(data: &mut [u8], password: &str) {
    Keystream::from_password(password).apply(data);
}
