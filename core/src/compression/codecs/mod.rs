//! compression/codecs/mod.rs
//! Concrete compression strategies.
//!
//! - `lzss`: the match-based codec (marker 'L'), self-checked during selection.
//! - `deflate`: raw DEFLATE via flate2 (marker 'D'), also the fast-path compressor.
//! - `zstd`: Zstandard frames (marker 'Z').

pub mod deflate;
pub mod lzss;
pub mod zstd;

pub use deflate::DeflateStrategy;
pub use lzss::LzssStrategy;
pub use self::zstd::ZstdStrategy;
