//! Codec configuration.

use crate::error::{Error, Result};

/// Bits charged per input symbol when computing the compression ratio.
pub const DEFAULT_BASELINE_SYMBOL_BITS: u32 = 16;

/// Tunables for [`HuffmanCodec`](crate::HuffmanCodec).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// Fixed width of an uncompressed symbol, the denominator unit of
    /// `compression_ratio`.
    pub baseline_symbol_bits: u32,
}

impl CodecConfig {
    /// Default configuration: 16 bits per uncompressed symbol.
    pub fn new() -> Self {
        Self {
            baseline_symbol_bits: DEFAULT_BASELINE_SYMBOL_BITS,
        }
    }

    /// Set the per-symbol baseline width.
    pub fn with_baseline_symbol_bits(mut self, bits: u32) -> Self {
        self.baseline_symbol_bits = bits;
        self
    }

    /// Reject configurations the codec cannot use.
    ///
    /// # Errors
    /// Returns `Error::InvalidConfig` if `baseline_symbol_bits` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.baseline_symbol_bits == 0 {
            return Err(Error::InvalidConfig("baseline_symbol_bits must be non-zero"));
        }
        Ok(())
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_sixteen_bits() {
        assert_eq!(CodecConfig::default().baseline_symbol_bits, 16);
        assert!(CodecConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_width_rejected() {
        let config = CodecConfig::new().with_baseline_symbol_bits(0);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }
}
