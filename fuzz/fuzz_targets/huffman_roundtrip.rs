#![no_main]
use huffheap::HuffmanCodec;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (String, String, String)| {
    let (sample, input, bits) = data;

    let mut codec = match HuffmanCodec::from_sample(&sample) {
        Ok(codec) => codec,
        Err(_) => return,
    };

    // Arbitrary bit strings must fail cleanly, never panic
    let _ = codec.decompress(&bits);

    let before = (codec.input_symbols(), codec.output_bits());
    match codec.compress(&input) {
        Ok(encoded) => {
            assert_eq!(codec.decompress(&encoded).unwrap(), input);
        }
        Err(_) => {
            assert_eq!((codec.input_symbols(), codec.output_bits()), before);
        }
    }

    // The sample itself is always encodable
    let encoded = codec.compress(&sample).unwrap();
    assert_eq!(codec.decompress(&encoded).unwrap(), sample);
});
