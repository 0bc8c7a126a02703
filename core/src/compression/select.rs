//! compression/select.rs
//! Strategy selection with stored fallback.
//!
//! Design notes:
//! - Large (>= 32 MiB) or high-entropy (> 7.8 bits/byte) inputs only try the
//!   fast DEFLATE level; everything else races every registered strategy.
//! - Strategies flagged `requires_self_check` are decoded and compared with
//!   the input before they may win. A mismatch discards the candidate.
//! - A winner must be strictly below `stored_ratio * input_len`, otherwise the
//!   input is stored verbatim.
//! - Selection never fails: a strategy error only removes that candidate.
//! - The fast path needs a registered DEFLATE strategy to decode its output;
//!   without one the input is stored.

use tracing::{debug, warn};

use crate::compression::analysis::sampled_entropy;
use crate::compression::codecs::DeflateStrategy;
use crate::compression::constants::marker_ids;
use crate::compression::registry::StrategyRegistry;
use crate::compression::types::{Algorithm, CompressionResult, CompressionStrategy};
use crate::config::SelectorConfig;

/// Pick the smallest acceptable encoding of `input`.
pub fn select(
    input: &[u8],
    config: &SelectorConfig,
    registry: &StrategyRegistry,
) -> CompressionResult {
    if input.is_empty() {
        return CompressionResult::stored(input);
    }

    let limit = config.stored_ratio * input.len() as f64;
    let entropy = sampled_entropy(input, config.entropy_sample_bytes);

    if input.len() >= config.large_input_bytes || entropy > config.entropy_threshold {
        debug!(len = input.len(), entropy, "fast path: single low-effort deflate pass");
        if registry.by_marker(marker_ids::DEFLATE).is_none() {
            debug!("deflate not registered; storing");
            return CompressionResult::stored(input);
        }
        let fast = DeflateStrategy::new(config.fast_level);
        let candidate = marked_output(&fast, input);
        return finish(input, candidate, limit);
    }

    let mut best: Option<(Vec<u8>, Algorithm)> = None;
    for strategy in registry.iter() {
        let Some((marked, algorithm)) = marked_output(strategy, input) else {
            continue;
        };

        if strategy.requires_self_check() && !self_check(strategy, &marked[1..], input) {
            continue;
        }

        debug!(strategy = strategy.name(), size = marked.len(), "candidate");
        let better = best.as_ref().map_or(true, |(b, _)| marked.len() < b.len());
        if better {
            best = Some((marked, algorithm));
        }
    }

    finish(input, best, limit)
}

fn finish(input: &[u8], best: Option<(Vec<u8>, Algorithm)>, limit: f64) -> CompressionResult {
    match best {
        Some((payload, algorithm)) if (payload.len() as f64) < limit => {
            debug!(%algorithm, from = input.len(), to = payload.len(), "selected");
            CompressionResult { used_stored_fallback: false, algorithm, payload }
        }
        _ => {
            debug!(len = input.len(), "no candidate beat the stored threshold");
            CompressionResult::stored(input)
        }
    }
}

/// `[marker][compressed bytes]`, or `None` if the strategy failed.
fn marked_output(strategy: &dyn CompressionStrategy, input: &[u8]) -> Option<(Vec<u8>, Algorithm)> {
    match strategy.compress(input) {
        Ok(body) => {
            let mut marked = Vec::with_capacity(body.len() + 1);
            marked.push(strategy.marker());
            marked.extend_from_slice(&body);
            let algorithm = Algorithm::Compressed {
                marker: strategy.marker(),
                name: strategy.name(),
            };
            Some((marked, algorithm))
        }
        Err(e) => {
            warn!(strategy = strategy.name(), error = %e, "strategy failed; candidate skipped");
            None
        }
    }
}

fn self_check(strategy: &dyn CompressionStrategy, body: &[u8], original: &[u8]) -> bool {
    match strategy.decompress(body) {
        Ok(decoded) if decoded == original => true,
        Ok(decoded) => {
            warn!(
                strategy = strategy.name(),
                expected = original.len(),
                got = decoded.len(),
                "self-check mismatch; candidate discarded"
            );
            false
        }
        Err(e) => {
            warn!(strategy = strategy.name(), error = %e, "self-check decode failed; candidate discarded");
            false
        }
    }
}
