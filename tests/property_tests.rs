use huffheap::{Error, ErrorKind, HuffmanCodec, IndexedMinHeap};
use proptest::prelude::*;
use std::collections::BTreeMap;

fn alphabet_strategy() -> impl Strategy<Value = BTreeMap<char, u64>> {
    prop::collection::btree_map(
        prop::char::range('!', '~').prop_union(prop::char::range('\u{e0}', '\u{ff}')),
        1u64..500,
        2..24,
    )
}

proptest! {
    #[test]
    fn test_codec_roundtrip(
        freqs in alphabet_strategy(),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 0..200),
    ) {
        let symbols: Vec<char> = freqs.keys().copied().collect();
        let mut codec = HuffmanCodec::from_frequencies(freqs.clone()).unwrap();

        let input: String = picks.iter().map(|i| *i.get(&symbols)).collect();
        let bits = codec.compress(&input).unwrap();
        prop_assert!(bits.chars().all(|c| c == '0' || c == '1'));
        prop_assert_eq!(codec.decompress(&bits).unwrap(), input.clone());
        prop_assert_eq!(codec.input_symbols(), input.chars().count() as u64);
        prop_assert_eq!(codec.output_bits(), bits.len() as u64);
    }

    #[test]
    fn test_expected_length_matches_codebook(freqs in alphabet_strategy()) {
        let codec = HuffmanCodec::from_frequencies(freqs.clone()).unwrap();
        let total: u64 = freqs.values().sum();
        let weighted: u64 = freqs
            .iter()
            .map(|(s, f)| f * codec.code(*s).unwrap().len() as u64)
            .sum();
        let expected = weighted as f64 / total as f64;
        prop_assert!((codec.expected_encoding_length() - expected).abs() < 1e-12);

        // Kraft equality holds for a full binary tree.
        let kraft: f64 = codec
            .codebook()
            .values()
            .map(|c| 0.5f64.powi(c.len() as i32))
            .sum();
        prop_assert!((kraft - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_sample_codec_roundtrips_its_own_sample(sample in "[a-h ]{2,120}") {
        match HuffmanCodec::from_sample(&sample) {
            Ok(mut codec) => {
                let bits = codec.compress(&sample).unwrap();
                prop_assert_eq!(codec.decompress(&bits).unwrap(), sample);
                prop_assert!(codec.compression_ratio().unwrap() <= 1.0);
            }
            Err(e) => prop_assert_eq!(e, Error::AlphabetTooSmall(1)),
        }
    }

    #[test]
    fn test_failed_decrease_key_leaves_heap_unchanged(
        keys in prop::collection::vec(0i32..100, 1..40),
        target in any::<prop::sample::Index>(),
        bump in 0i32..10,
    ) {
        let mut heap = IndexedMinHeap::new();
        for (v, &k) in keys.iter().enumerate() {
            heap.add(k, v).unwrap();
        }
        let before: Vec<_> = heap.iter().cloned().collect();

        let v = target.index(keys.len());
        let err = heap.decrease_key(&v, keys[v] + bump).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        prop_assert_eq!(err, Error::KeyNotDecreased);

        let after: Vec<_> = heap.iter().cloned().collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn test_heap_sorts(keys in prop::collection::vec(any::<i64>(), 0..100)) {
        let mut heap = IndexedMinHeap::with_capacity(keys.len());
        for (v, &k) in keys.iter().enumerate() {
            heap.add(k, v).unwrap();
        }
        let mut out = Vec::new();
        while let Ok(entry) = heap.extract_min() {
            out.push(*entry.key());
        }
        let mut sorted = keys.clone();
        sorted.sort();
        prop_assert_eq!(out, sorted);
    }
}

#[test]
fn test_error_families() {
    let mut codec = HuffmanCodec::from_sample("ab").unwrap();
    assert_eq!(
        codec.compression_ratio().unwrap_err().kind(),
        ErrorKind::IllegalState
    );
    assert_eq!(
        codec.compress("abc").unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
    assert_eq!(
        codec.decompress("2").unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );

    let mut heap: IndexedMinHeap<u32, char> = IndexedMinHeap::new();
    assert_eq!(heap.extract_min().unwrap_err().kind(), ErrorKind::NotFound);
    assert_eq!(
        heap.decrease_key(&'x', 1).unwrap_err().kind(),
        ErrorKind::NotFound
    );
}
