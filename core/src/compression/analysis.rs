//! Byte-frequency analysis and Shannon entropy estimation.

/// Occurrence count of each byte value.
#[derive(Debug, Clone)]
pub struct FrequencyTable {
    pub byte: [u64; 256],
    pub total: u64,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self { byte: [0u64; 256], total: 0 }
    }

    pub fn count(&mut self, input: &[u8]) {
        for &b in input {
            self.byte[b as usize] += 1;
        }
        self.total += input.len() as u64;
    }

    /// Number of distinct byte values seen.
    pub fn used(&self) -> usize {
        self.byte.iter().filter(|&&c| c > 0).count()
    }

    /// Shannon entropy in bits per byte (0.0 for an empty table).
    pub fn entropy(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let total = self.total as f64;
        self.byte
            .iter()
            .filter(|&&c| c > 0)
            .map(|&c| {
                let p = c as f64 / total;
                -p * p.log2()
            })
            .sum()
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

pub fn shannon_entropy(input: &[u8]) -> f64 {
    let mut freq = FrequencyTable::new();
    freq.count(input);
    freq.entropy()
}

/// Entropy of the first `sample` bytes of `input`.
pub fn sampled_entropy(input: &[u8], sample: usize) -> f64 {
    shannon_entropy(&input[..input.len().min(sample)])
}
