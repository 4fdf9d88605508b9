//! Huffman text codec.
//!
//! Builds an optimal prefix code for a character alphabet and encodes text
//! into strings of `0`/`1` characters.
//!
//! # Historical Context
//!
//! David Huffman (1952) developed this algorithm as a term paper at MIT.
//! It was the first practical algorithm for constructing optimal prefix codes.
//!
//! # Construction
//!
//! Every distinct symbol starts as a leaf keyed by its frequency in an
//! [`IndexedMinHeap`]. The two lightest nodes are repeatedly extracted and
//! merged under a new internal node (first extracted on the left), which is
//! pushed back keyed by the combined weight. The last node standing is the
//! root. Left edges emit `0`, right edges emit `1`.
//!
//! Equal weights are broken by heap position, so bit patterns are only
//! reproducible for the same seeding order. Symbols are seeded in ascending
//! code-point order. Code lengths are optimal either way.

use std::collections::BTreeMap;

use log::{debug, trace};

use crate::config::CodecConfig;
use crate::error::{Error, Result};
use crate::heap::IndexedMinHeap;

/// Huffman tree node. Internal nodes own their children.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Leaf {
        symbol: char,
        freq: u64,
    },
    Internal {
        left: Box<Node>,
        right: Box<Node>,
        freq: u64,
    },
}

impl Node {
    fn freq(&self) -> u64 {
        match self {
            Node::Leaf { freq, .. } => *freq,
            Node::Internal { freq, .. } => *freq,
        }
    }

    fn build_codes(&self, prefix: String, codes: &mut BTreeMap<char, String>) {
        match self {
            Node::Leaf { symbol, .. } => {
                codes.insert(*symbol, prefix);
            }
            Node::Internal { left, right, .. } => {
                let mut left_prefix = prefix.clone();
                left_prefix.push('0');
                left.build_codes(left_prefix, codes);

                let mut right_prefix = prefix;
                right_prefix.push('1');
                right.build_codes(right_prefix, codes);
            }
        }
    }
}

/// Greedy Huffman construction over `freqs`, which must hold at least two
/// symbols.
///
/// Heap values are slot ids into `pending`; a subtree is moved out of its
/// slot when extracted, so every node ends up with exactly one owner.
fn build_tree(freqs: &BTreeMap<char, u64>) -> Result<Node> {
    let mut pending: Vec<Option<Node>> = Vec::with_capacity(2 * freqs.len());
    let mut heap = IndexedMinHeap::with_capacity(freqs.len());

    for (&symbol, &freq) in freqs {
        heap.add(freq, pending.len()).map_err(heap_fault)?;
        pending.push(Some(Node::Leaf { symbol, freq }));
    }

    while heap.size() > 1 {
        let (_, left) = heap.extract_min().map_err(heap_fault)?.into_parts();
        let (_, right) = heap.extract_min().map_err(heap_fault)?.into_parts();
        let left = take_slot(&mut pending, left)?;
        let right = take_slot(&mut pending, right)?;

        // Cannot overflow: the caller checked the total weight fits in u64.
        let freq = left.freq() + right.freq();
        trace!("merge {} + {} -> {}", left.freq(), right.freq(), freq);

        heap.add(freq, pending.len()).map_err(heap_fault)?;
        pending.push(Some(Node::Internal {
            left: Box::new(left),
            right: Box::new(right),
            freq,
        }));
    }

    let (_, root) = heap.extract_min().map_err(heap_fault)?.into_parts();
    take_slot(&mut pending, root)
}

/// Slot ids are fresh and each is extracted once, so every slot is full when taken.
fn take_slot(pending: &mut [Option<Node>], id: usize) -> Result<Node> {
    pending
        .get_mut(id)
        .and_then(Option::take)
        .ok_or(Error::Internal("tree slot taken twice"))
}

fn heap_fault(_: Error) -> Error {
    Error::Internal("merge heap out of step with pending nodes")
}

/// Huffman encoder/decoder over a fixed character alphabet.
///
/// Also keeps running totals of symbols in and bits out across successful
/// [`compress`](Self::compress) calls.
#[derive(Debug, Clone)]
pub struct HuffmanCodec {
    root: Node,
    codes: BTreeMap<char, String>,
    freqs: BTreeMap<char, u64>,
    expected_len: f64,
    input_symbols: u64,
    output_bits: u64,
    config: CodecConfig,
}

impl HuffmanCodec {
    /// Build a codec from the character counts of `sample`.
    ///
    /// # Errors
    /// Returns `Error::EmptyInput` for an empty sample and
    /// `Error::AlphabetTooSmall` if it has a single distinct character.
    pub fn from_sample(sample: &str) -> Result<Self> {
        Self::from_sample_with_config(sample, CodecConfig::default())
    }

    /// [`from_sample`](Self::from_sample) with an explicit configuration.
    pub fn from_sample_with_config(sample: &str, config: CodecConfig) -> Result<Self> {
        if sample.is_empty() {
            return Err(Error::EmptyInput);
        }
        let mut freqs = BTreeMap::new();
        for c in sample.chars() {
            *freqs.entry(c).or_insert(0u64) += 1;
        }
        if freqs.len() < 2 {
            return Err(Error::AlphabetTooSmall(freqs.len()));
        }
        Self::build(freqs, config)
    }

    /// Build a codec from an explicit frequency table.
    ///
    /// Repeated symbols accumulate their frequencies.
    ///
    /// # Errors
    /// Returns `Error::EmptyInput` for an empty table,
    /// `Error::AlphabetTooSmall` for fewer than two distinct symbols,
    /// `Error::NonPositiveFrequency` for a zero entry, and
    /// `Error::FrequencyOverflow` if the weights do not fit in `u64`.
    pub fn from_frequencies<I>(table: I) -> Result<Self>
    where
        I: IntoIterator<Item = (char, u64)>,
    {
        Self::from_frequencies_with_config(table, CodecConfig::default())
    }

    /// [`from_frequencies`](Self::from_frequencies) with an explicit configuration.
    pub fn from_frequencies_with_config<I>(table: I, config: CodecConfig) -> Result<Self>
    where
        I: IntoIterator<Item = (char, u64)>,
    {
        let mut freqs: BTreeMap<char, u64> = BTreeMap::new();
        let mut zero = None;
        for (symbol, freq) in table {
            if freq == 0 && zero.is_none() {
                zero = Some(symbol);
            }
            let slot = freqs.entry(symbol).or_insert(0);
            *slot = slot.checked_add(freq).ok_or(Error::FrequencyOverflow)?;
        }

        if freqs.is_empty() {
            return Err(Error::EmptyInput);
        }
        if freqs.len() < 2 {
            return Err(Error::AlphabetTooSmall(freqs.len()));
        }
        if let Some(symbol) = zero {
            return Err(Error::NonPositiveFrequency(symbol));
        }
        Self::build(freqs, config)
    }

    fn build(freqs: BTreeMap<char, u64>, config: CodecConfig) -> Result<Self> {
        config.validate()?;

        let total = freqs
            .values()
            .try_fold(0u64, |acc, &f| acc.checked_add(f))
            .ok_or(Error::FrequencyOverflow)?;

        let root = build_tree(&freqs)?;
        let mut codes = BTreeMap::new();
        root.build_codes(String::new(), &mut codes);

        let weighted: u128 = freqs
            .iter()
            .map(|(symbol, &f)| f as u128 * codes.get(symbol).map_or(0, String::len) as u128)
            .sum();
        let expected_len = weighted as f64 / total as f64;

        debug!(
            "built huffman code: {} symbols, total weight {}, max code length {}",
            freqs.len(),
            total,
            codes.values().map(String::len).max().unwrap_or(0)
        );

        Ok(Self {
            root,
            codes,
            freqs,
            expected_len,
            input_symbols: 0,
            output_bits: 0,
            config,
        })
    }

    /// Encode `input` into a string of `0`/`1` characters.
    ///
    /// Empty input returns an empty string and does not touch the counters.
    ///
    /// # Errors
    /// Returns `Error::UnknownSymbol` if `input` holds a character outside
    /// the alphabet. Nothing is recorded in that case.
    pub fn compress(&mut self, input: &str) -> Result<String> {
        if input.is_empty() {
            return Ok(String::new());
        }

        let mut out = String::new();
        let mut symbols = 0u64;
        for (position, symbol) in input.chars().enumerate() {
            let code = self
                .codes
                .get(&symbol)
                .ok_or(Error::UnknownSymbol { symbol, position })?;
            out.push_str(code);
            symbols += 1;
        }

        self.input_symbols += symbols;
        self.output_bits += out.len() as u64;
        trace!("compressed {} symbols into {} bits", symbols, out.len());
        Ok(out)
    }

    /// Decode a string of `0`/`1` characters produced by this codec.
    ///
    /// # Errors
    /// Returns `Error::InvalidBit` for any character other than `0` or `1`,
    /// and `Error::Undecodable` if the bits end partway through a symbol.
    pub fn decompress(&self, bits: &str) -> Result<String> {
        let mut out = String::new();
        let mut curr = &self.root;
        let mut consumed = 0;

        for (position, bit) in bits.chars().enumerate() {
            let go_right = match bit {
                '0' => false,
                '1' => true,
                found => return Err(Error::InvalidBit { found, position }),
            };
            curr = match curr {
                Node::Internal { left, right, .. } => {
                    if go_right {
                        right.as_ref()
                    } else {
                        left.as_ref()
                    }
                }
                Node::Leaf { .. } => return Err(Error::Undecodable { position }),
            };

            if let Node::Leaf { symbol, .. } = curr {
                out.push(*symbol);
                curr = &self.root;
            }
            consumed = position + 1;
        }

        if !std::ptr::eq(curr, &self.root) {
            return Err(Error::Undecodable { position: consumed });
        }
        Ok(out)
    }

    /// Total output bits over total input bits, with each input symbol
    /// costed at `baseline_symbol_bits` (16 by default).
    ///
    /// # Errors
    /// Returns `Error::NothingCompressed` until a non-empty `compress` has
    /// succeeded.
    pub fn compression_ratio(&self) -> Result<f64> {
        if self.output_bits == 0 {
            return Err(Error::NothingCompressed);
        }
        let baseline = self.input_symbols as f64 * f64::from(self.config.baseline_symbol_bits);
        Ok(self.output_bits as f64 / baseline)
    }

    /// Frequency-weighted mean code length of the alphabet.
    pub fn expected_encoding_length(&self) -> f64 {
        self.expected_len
    }

    /// Code assigned to `symbol`.
    pub fn code(&self, symbol: char) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    /// The full symbol-to-code table.
    pub fn codebook(&self) -> &BTreeMap<char, String> {
        &self.codes
    }

    /// Weight the codec was built with for `symbol`.
    pub fn frequency(&self, symbol: char) -> Option<u64> {
        self.freqs.get(&symbol).copied()
    }

    /// Number of distinct symbols.
    pub fn alphabet_len(&self) -> usize {
        self.codes.len()
    }

    /// Length of the longest code, i.e. the tree depth.
    pub fn max_code_len(&self) -> usize {
        self.codes.values().map(String::len).max().unwrap_or(0)
    }

    /// Symbols consumed by successful `compress` calls so far.
    pub fn input_symbols(&self) -> u64 {
        self.input_symbols
    }

    /// Bits produced by successful `compress` calls so far.
    pub fn output_bits(&self) -> u64 {
        self.output_bits
    }

    /// Configuration in effect.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }
}

impl TryFrom<&str> for HuffmanCodec {
    type Error = Error;

    fn try_from(sample: &str) -> Result<Self> {
        Self::from_sample(sample)
    }
}
