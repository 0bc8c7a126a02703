//! pipeline/bytes.rs
//! In-memory container operations.
//!
//! Design notes:
//! - Encoding: select -> (optional) keystream -> container.
//! - Decoding: container -> mode check -> (optional) keystream -> payload decode.
//! - Once the payload has been decrypted, any parse failure is reported as
//!   `CapsuleError::Credential`; the format has no other wrong-password signal.

use tracing::debug;

use crate::compression::registry::StrategyRegistry;
use crate::compression::select::select;
use crate::compression::types::Algorithm;
use crate::config::SelectorConfig;
use crate::crypto::transform_in_place;
use crate::headers::{decode_payload, encode_container, probe_payload, split_container, ContainerFlags};
use crate::types::{CapsuleError, FormatError, ModeError};

/// A serialized container plus the encoding chosen for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    pub container: Vec<u8>,
    pub algorithm: Algorithm,
}

/// Original bytes recovered from a container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub data: Vec<u8>,
    pub algorithm: Algorithm,
}

pub fn compress_bytes(
    input: &[u8],
    config: &SelectorConfig,
    registry: &StrategyRegistry,
) -> Result<Encoded, CapsuleError> {
    seal(input, None, config, registry)
}

pub fn compress_encrypt_bytes(
    input: &[u8],
    password: &str,
    config: &SelectorConfig,
    registry: &StrategyRegistry,
) -> Result<Encoded, CapsuleError> {
    require_password(password)?;
    seal(input, Some(password), config, registry)
}

/// Decode a plain container.
///
/// # Errors
/// - `ModeError::EncryptedContainer` if the ENCRYPTED flag is set.
/// - `FormatError` for any structural problem.
pub fn decompress_bytes(container: &[u8], registry: &StrategyRegistry) -> Result<Decoded, CapsuleError> {
    let (header, payload) = split_container(container)?;
    if header.is_encrypted() {
        return Err(ModeError::EncryptedContainer.into());
    }
    Ok(open(header.flags, payload, registry)?)
}

/// Decrypt and decode an encrypted container.
///
/// # Errors
/// - `CapsuleError::EmptyPassword`.
/// - `ModeError::PlainContainer` if the ENCRYPTED flag is clear.
/// - `FormatError` for a bad header, `CapsuleError::Credential` for a payload
///   that does not parse once decrypted.
pub fn decrypt_decompress_bytes(
    container: &[u8],
    password: &str,
    registry: &StrategyRegistry,
) -> Result<Decoded, CapsuleError> {
    require_password(password)?;
    let (header, payload) = split_container(container)?;
    if !header.is_encrypted() {
        return Err(ModeError::PlainContainer.into());
    }

    let mut payload = payload.to_vec();
    transform_in_place(&mut payload, password);

    if header.is_stored() {
        return Ok(Decoded { data: payload, algorithm: Algorithm::Stored });
    }
    let (algorithm, data) = decode_payload(&payload, registry).map_err(CapsuleError::Credential)?;
    Ok(Decoded { data, algorithm })
}

/// Cheap check that `password` opens an encrypted container.
///
/// Returns false for empty passwords, malformed or plain containers, and
/// payloads whose decrypted prefix does not parse. Stored payloads carry no
/// structure to check and always validate.
pub fn validate_password_bytes(container: &[u8], password: &str, registry: &StrategyRegistry) -> bool {
    if password.is_empty() {
        return false;
    }
    let Ok((header, payload)) = split_container(container) else {
        return false;
    };
    if !header.is_encrypted() {
        return false;
    }
    if header.is_stored() {
        return true;
    }

    let mut payload = payload.to_vec();
    transform_in_place(&mut payload, password);
    match probe_payload(&payload, registry) {
        Ok(_) => true,
        Err(e) => {
            debug!(error = %e, "password probe rejected payload");
            false
        }
    }
}

fn seal(
    input: &[u8],
    password: Option<&str>,
    config: &SelectorConfig,
    registry: &StrategyRegistry,
) -> Result<Encoded, CapsuleError> {
    let mut result = select(input, config, registry);

    let mut flags = ContainerFlags::empty();
    if result.used_stored_fallback {
        flags |= ContainerFlags::STORED;
    }
    if let Some(password) = password {
        transform_in_place(&mut result.payload, password);
        flags |= ContainerFlags::ENCRYPTED;
    }

    let container = encode_container(flags, &result.payload)?;
    Ok(Encoded { container, algorithm: result.algorithm })
}

fn open(flags: ContainerFlags, payload: &[u8], registry: &StrategyRegistry) -> Result<Decoded, FormatError> {
    if flags.contains(ContainerFlags::STORED) {
        return Ok(Decoded { data: payload.to_vec(), algorithm: Algorithm::Stored });
    }
    let (algorithm, data) = decode_payload(payload, registry)?;
    Ok(Decoded { data, algorithm })
}

fn require_password(password: &str) -> Result<(), CapsuleError> {
    if password.is_empty() {
        return Err(CapsuleError::EmptyPassword);
    }
    Ok(())
}
