//! crypto/mod.rs
//! Password-keyed XOR keystream.
//!
//! Not a secure cipher: the keystream depends only on the low byte of the
//! derived seed, so it hides content from casual inspection and nothing more.

pub mod kdf;
pub mod keystream;

pub use kdf::*;
pub use keystream::*;
