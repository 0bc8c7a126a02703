/// Stable strategy markers (first byte of every non-stored payload).
pub mod marker_ids {
    pub const LZSS: u8    = 0x4C; // 'L'
    pub const DEFLATE: u8 = 0x44; // 'D'
    pub const ZSTD: u8    = 0x5A; // 'Z'
}

/// LZSS sliding-window parameters.
///
/// The decoder never consults these; only the encoder does. Changing
/// `LZSS_MIN_MATCH` therefore changes compression ratio, never recoverability.
pub const LZSS_WINDOW_SIZE: usize = 4096;
pub const LZSS_LOOKAHEAD: usize = 18;
pub const LZSS_MIN_MATCH: usize = 4;

/// Token flag bytes on the wire.
pub const TOKEN_FLAG_REFERENCE: u8 = 0;
pub const TOKEN_FLAG_LITERAL: u8 = 1;

/// Encoded token sizes (flag included).
pub const LITERAL_TOKEN_LEN: usize = 2;
pub const REFERENCE_TOKEN_LEN: usize = 4;

/// Levels used by the registered generic strategies.
pub const DEFAULT_LEVEL_DEFLATE: u32 = 9;
pub const DEFAULT_LEVEL_ZSTD: i32 = 19;
