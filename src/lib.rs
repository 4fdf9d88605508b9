//! # Huffman coding over an indexed min-heap
//!
//! *Optimal prefix codes for text, built with a decrease-key priority queue.*
//!
//! ## Intuition First
//!
//! Morse code gives the most common letters the shortest signals. Huffman
//! coding does the same thing optimally: given how often each symbol occurs,
//! it assigns bit-strings so that frequent symbols get short codes, rare ones
//! get long codes, and no code is a prefix of another. The last property is
//! what lets a decoder split a bit stream back into symbols without delimiters.
//!
//! ## The Problem
//!
//! Fixed-width encodings spend the same number of bits on every symbol. For
//! skewed distributions most of those bits carry no information. We want the
//! binary prefix code minimising the expected code length
//!
//! ```text
//! L = Σ_s p_s · len(code(s))
//! ```
//!
//! Huffman's greedy merge of the two lightest subtrees achieves the minimum.
//! The only data structure it needs is a min-priority queue.
//!
//! ## Historical Context
//!
//! ```text
//! 1948  Shannon     Entropy as the fundamental limit
//! 1952  Huffman     Minimum-redundancy codes via greedy merging
//! 1964  Williams    Binary heap (heapsort)
//! 1984  Fredman     Fibonacci heaps: decrease-key as a first-class operation
//! ```
//!
//! ## Complexity Analysis
//!
//! - **Heap**: O(log n) `add`, `extract_min`, `decrease_key`; O(1) `contains_value`.
//! - **Construction**: O(k log k) for an alphabet of k symbols.
//! - **Encode**: O(output bits). **Decode**: O(input bits), one tree edge per bit.
//!
//! ## Failure Modes
//!
//! 1. **Tie-breaking**: equal weights merge in heap-position order. Code lengths
//!    are optimal, but bit patterns differ between implementations that break
//!    ties differently.
//! 2. **Degenerate alphabets**: a single symbol has no binary code and is rejected.
//!
//! ## Example
//!
//! ```rust
//! use huffheap::HuffmanCodec;
//!
//! let mut codec = HuffmanCodec::from_frequencies([
//!     ('a', 5), ('b', 9), ('c', 12), ('d', 13), ('e', 16), ('f', 45),
//! ])?;
//! assert_eq!(codec.compress("a")?, "1100");
//! assert_eq!(codec.decompress("11011100")?, "ba");
//! # Ok::<(), huffheap::Error>(())
//! ```
//!
//! ## References
//!
//! - Huffman, D. A. (1952). "A Method for the Construction of Minimum-Redundancy Codes."
//! - Cormen, T. H., et al. *Introduction to Algorithms*, ch. 6 (heaps) and 16.3 (Huffman codes).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod heap;
pub mod huffman;

pub use config::CodecConfig;
pub use error::{Error, ErrorKind, Result};
pub use heap::{Entry, IndexedMinHeap};
pub use huffman::HuffmanCodec;
