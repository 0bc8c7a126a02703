/// Magic tag opening every container.
/// "CPSL" = capsule container
pub const MAGIC_CPSL: [u8; 4] = *b"CPSL";

/// Fixed container header: magic (4) + flags (1) + payload length (4).
pub const CONTAINER_HEADER_LEN: usize = 4 + 1 + 4;

/// Flag bits stored in the container header (offset 4).
pub mod flags {
    pub const STORED: u8    = 0x01;
    pub const ENCRYPTED: u8 = 0x02;
}

/// First payload bytes that identify a marker-less (legacy) LZSS stream.
/// Token flags are always 0 or 1, so no strategy may register these markers.
pub const RESERVED_MARKERS: [u8; 2] = [0x00, 0x01];

/// Selector defaults (overridable through `CapsuleConfig`).
pub const DEFAULT_STORED_RATIO: f64 = 0.98;
pub const DEFAULT_ENTROPY_THRESHOLD: f64 = 7.8;
pub const DEFAULT_LARGE_INPUT_BYTES: usize = 32 * 1024 * 1024; // 32 MiB
pub const DEFAULT_ENTROPY_SAMPLE_BYTES: usize = 1_000_000;
pub const DEFAULT_FAST_DEFLATE_LEVEL: u32 = 1;

/// Default location of the append-only operation log.
pub const DEFAULT_LOG_FILE: &str = "operations.log";

/// Number of leading tokens inspected when validating a password.
pub const PASSWORD_PROBE_TOKENS: usize = 16;

/// Bytes decoded from a generic-compressor payload when validating a password.
pub const PASSWORD_PROBE_BYTES: usize = 4096;
