#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut compressed = Vec::new();
    huff::compress(data, &mut compressed).unwrap();

    let mut restored = Vec::new();
    huff::decompress(compressed.as_slice(), &mut restored).unwrap();

    assert_eq!(data, restored.as_slice());
});
