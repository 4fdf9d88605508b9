use huffheap::HuffmanCodec;

fn main() {
    let sample = "it was the best of times, it was the worst of times, \
                  it was the age of wisdom, it was the age of foolishness";
    let input = sample.repeat(200);

    let mut codec = match HuffmanCodec::from_sample(sample) {
        Ok(codec) => codec,
        Err(e) => {
            eprintln!("huffman_flame: {e}");
            std::process::exit(1);
        }
    };

    for _ in 0..1000 {
        let bits = codec.compress(&input).expect("sample symbols are in the alphabet");
        let decoded = codec.decompress(&bits).expect("own output decodes");
        assert_eq!(decoded.len(), input.len());
    }

    if let Ok(ratio) = codec.compression_ratio() {
        println!("compression ratio: {ratio:.4}");
    }
}
