//! crypto/kdf.rs
//! Password to keystream seed.
//!
//! Design:
//! - FNV-1a 64 over the UTF-8 bytes of the password.
//! - Deterministic: the same password always yields the same seed.
//!
//! Security notes:
//! - This is obfuscation, not confidentiality. There is no salt, no work
//!   factor and no authentication tag.

/// FNV-1a 64-bit offset basis.
pub const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
/// FNV-1a 64-bit prime.
pub const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Derive the 64-bit keystream seed for `password`.
#[inline]
pub fn derive_seed(password: &str) -> u64 {
    password.as_bytes().iter().fold(FNV_OFFSET_BASIS, |hash, &b| {
        (hash ^ u64::from(b)).wrapping_mul(FNV_PRIME)
    })
}
