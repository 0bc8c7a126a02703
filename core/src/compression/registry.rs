//! compression/registry.rs
//! Read-only strategy registry.
//!
//! The default registry is built once per process and handed out as
//! `&'static`; nothing mutates it afterwards.

use std::sync::OnceLock;

use crate::compression::codecs::{DeflateStrategy, LzssStrategy, ZstdStrategy};
use crate::compression::types::{CompressionStrategy, RegistryError};
use crate::constants::RESERVED_MARKERS;

pub struct StrategyRegistry {
    strategies: Vec<Box<dyn CompressionStrategy>>,
}

impl StrategyRegistry {
    /// Build a registry, rejecting reserved or duplicate markers.
    /// Order is significant: on equal output sizes the earlier strategy wins.
    pub fn new(strategies: Vec<Box<dyn CompressionStrategy>>) -> Result<Self, RegistryError> {
        if strategies.is_empty() {
            return Err(RegistryError::Empty);
        }
        let mut seen = [false; 256];
        for s in &strategies {
            let m = s.marker();
            if RESERVED_MARKERS.contains(&m) {
                return Err(RegistryError::ReservedMarker(m));
            }
            if seen[m as usize] {
                return Err(RegistryError::DuplicateMarker(m));
            }
            seen[m as usize] = true;
        }
        Ok(Self { strategies })
    }

    /// LZSS, DEFLATE (best), Zstd.
    pub fn builtin() -> Self {
        Self {
            strategies: vec![
                Box::new(LzssStrategy::new()),
                Box::new(DeflateStrategy::default()),
                Box::new(ZstdStrategy::default()),
            ],
        }
    }

    /// Process-wide default registry.
    pub fn global() -> &'static StrategyRegistry {
        static REGISTRY: OnceLock<StrategyRegistry> = OnceLock::new();
        REGISTRY.get_or_init(StrategyRegistry::builtin)
    }

    pub fn by_marker(&self, marker: u8) -> Option<&dyn CompressionStrategy> {
        self.strategies
            .iter()
            .find(|s| s.marker() == marker)
            .map(|s| s.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn CompressionStrategy> {
        self.strategies.iter().map(|s| s.as_ref())
    }

    pub fn markers(&self) -> Vec<u8> {
        self.strategies.iter().map(|s| s.marker()).collect()
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl std::fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.strategies.iter().map(|s| s.name()))
            .finish()
    }
}
