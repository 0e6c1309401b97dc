//! Edge case tests for the inflate and deflate drivers.

use oxizip_core::{ErrorKind, OxiZipError, compress_bound};
use oxizip_flate::{deflate, deflate_to_vec, inflate, inflate_to_vec};

fn roundtrip(input: &[u8]) -> Vec<u8> {
    let compressed = deflate_to_vec(input).unwrap();
    inflate_to_vec(&compressed, input.len()).unwrap()
}

#[test]
fn test_empty_input() {
    let mut compressed = [0u8; 32];
    let len = deflate(&mut compressed, b"").unwrap();
    // header and checksum at least
    assert!(len >= 6);

    let mut out = [0u8; 0];
    inflate(&mut out, &compressed[..len]).unwrap();
}

#[test]
fn test_empty_stream_with_nonzero_capacity() {
    let compressed = deflate_to_vec(b"").unwrap();
    let mut out = [0u8; 1];
    let err = inflate(&mut out, &compressed).unwrap_err();
    assert!(matches!(
        err,
        OxiZipError::UnexpectedEndOfStream {
            expected: 1,
            produced: 0
        }
    ));
}

#[test]
fn test_single_byte() {
    assert_eq!(roundtrip(b"A"), b"A");
}

#[test]
fn test_all_zeros() {
    let input = vec![0u8; 1000];
    let compressed = deflate_to_vec(&input).unwrap();
    assert_eq!(inflate_to_vec(&compressed, input.len()).unwrap(), input);
    // All zeros should compress very well
    assert!(compressed.len() < input.len() / 10);
}

#[test]
fn test_alternating_pattern() {
    let input: Vec<u8> = (0..1000)
        .map(|i| if i % 2 == 0 { b'A' } else { b'B' })
        .collect();
    assert_eq!(roundtrip(&input), input);
}

#[test]
fn test_large_input() {
    let mut input = Vec::with_capacity(1024 * 1024);
    let pattern = b"The quick brown fox jumps over the lazy dog. ";
    while input.len() < 1024 * 1024 {
        input.extend_from_slice(pattern);
    }
    input.truncate(1024 * 1024);

    let decompressed = roundtrip(&input);
    assert_eq!(decompressed.len(), 1024 * 1024);
    assert_eq!(decompressed, input);
}

#[test]
fn test_incompressible_fits_bound() {
    // LCG noise
    let mut state = 0x1234_5678u32;
    let input: Vec<u8> = (0..100_000)
        .map(|_| {
            state = state.wrapping_mul(1_103_515_245).wrapping_add(12345);
            (state >> 16) as u8
        })
        .collect();

    let mut out = vec![0u8; compress_bound(input.len())];
    let len = deflate(&mut out, &input).unwrap();
    assert!(len <= compress_bound(input.len()));
    assert_eq!(inflate_to_vec(&out[..len], input.len()).unwrap(), input);
}

#[test]
fn test_long_distance_match() {
    let mut input = vec![0u8; 32768];
    let pattern = b"PATTERN_TO_MATCH";
    input[0..pattern.len()].copy_from_slice(pattern);
    input[32768 - pattern.len()..32768].copy_from_slice(pattern);
    assert_eq!(roundtrip(&input), input);
}

#[test]
fn test_capacity_larger_than_content() {
    let input = b"exact size matters";
    let compressed = deflate_to_vec(input).unwrap();
    let mut out = vec![0u8; input.len() + 1];
    let err = inflate(&mut out, &compressed).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedEndOfStream);
    assert!(err.to_string().contains("Unexpected end of stream"));
}

fn assert_output_full(input: &[u8], capacity: usize) {
    let compressed = deflate_to_vec(input).unwrap();
    let mut out = vec![0u8; capacity];
    let err = inflate(&mut out, &compressed).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Internal, "capacity {capacity}: {err}");
    assert!(
        err.to_string().contains("output buffer full"),
        "capacity {capacity}: {err}"
    );
}

#[test]
fn test_capacity_smaller_than_content() {
    // one byte short: the engine has usually taken all input by then
    for n in [100, 5000, 100_000] {
        assert_output_full(&vec![b'z'; n], n - 1);
    }
}

#[test]
fn test_capacity_half_of_random_content() {
    let mut seed = 12345u32;
    let input: Vec<u8> = (0..100_000)
        .map(|_| {
            seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
            (seed >> 16) as u8
        })
        .collect();
    assert_output_full(&input, 50_000);
}

#[test]
fn test_corrupted_header() {
    let mut compressed = deflate_to_vec(b"some text to compress").unwrap();
    compressed[0] = 0x00;
    let mut out = [0u8; 21];
    let err = inflate(&mut out, &compressed).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CorruptedData);
}

#[test]
fn test_corrupted_checksum() {
    let input = b"The quick brown fox jumps over the lazy dog";
    let mut compressed = deflate_to_vec(input).unwrap();
    let last = compressed.len() - 1;
    compressed[last] ^= 0x01;
    let mut out = vec![0u8; input.len()];
    let err = inflate(&mut out, &compressed).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CorruptedData);
}

fn adler32(data: &[u8]) -> u32 {
    let (mut a, mut b) = (1u32, 0u32);
    for &byte in data {
        a = (a + u32::from(byte)) % 65521;
        b = (b + a) % 65521;
    }
    (b << 16) | a
}

/// A zlib stream holding `data` in one stored block.
fn stored_stream(data: &[u8]) -> Vec<u8> {
    let len = u16::try_from(data.len()).unwrap();
    let mut stream = vec![0x78, 0x01, 0x01];
    stream.extend_from_slice(&len.to_le_bytes());
    stream.extend_from_slice(&(!len).to_le_bytes());
    stream.extend_from_slice(data);
    stream.extend_from_slice(&adler32(data).to_be_bytes());
    stream
}

#[test]
fn test_flipped_bits_in_body() {
    let input: Vec<u8> = b"Lorem ipsum dolor sit amet, consectetur adipiscing elit. "
        .iter()
        .copied()
        .cycle()
        .take(4000)
        .collect();
    let stream = stored_stream(&input);
    assert_eq!(inflate_to_vec(&stream, input.len()).unwrap(), input);

    // payload starts after the 2-byte header and 5-byte block header
    for pos in [7, stream.len() / 2, stream.len() - 5] {
        for bit in [0x01u8, 0x10, 0x80] {
            let mut corrupt = stream.clone();
            corrupt[pos] ^= bit;
            let mut out = vec![0u8; input.len()];
            let err = inflate(&mut out, &corrupt).unwrap_err();
            assert_eq!(
                err.kind(),
                ErrorKind::CorruptedData,
                "byte {pos} bit {bit:#04x}: {err}"
            );
        }
    }
}

#[test]
fn test_stored_block_length_mismatch() {
    let input = b"stored block payload";
    let mut stream = stored_stream(input);
    // NLEN no longer complements LEN
    stream[5] ^= 0x01;
    let mut out = vec![0u8; input.len()];
    let err = inflate(&mut out, &stream).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CorruptedData);
}

#[test]
fn test_reserved_block_type() {
    let input = b"The quick brown fox jumps over the lazy dog";
    let mut compressed = deflate_to_vec(input).unwrap();
    // BTYPE bits of the first block header set to the reserved value 11
    compressed[2] |= 0x06;
    let mut out = vec![0u8; input.len()];
    let err = inflate(&mut out, &compressed).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CorruptedData);
}

#[test]
fn test_undersized_deflate_output() {
    let input = vec![b'a'; 64 * 1024];
    let mut out = [0u8; 1];
    let err = deflate(&mut out, &input).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BufferTooSmall);
    assert!(err.to_string().contains("Buffer too small"));
}

#[test]
fn test_deflate_output_exactly_fits() {
    let input = b"hello hello hello hello";
    let compressed = deflate_to_vec(input).unwrap();

    let mut exact = vec![0u8; compressed.len()];
    assert_eq!(deflate(&mut exact, input).unwrap(), compressed.len());
    assert_eq!(exact, compressed);

    let mut short = vec![0u8; compressed.len() - 1];
    let err = deflate(&mut short, input).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BufferTooSmall);
}

#[test]
fn test_trailing_input_ignored() {
    let input = b"payload";
    let mut compressed = deflate_to_vec(input).unwrap();
    compressed.extend_from_slice(b"trailing garbage");
    assert_eq!(inflate_to_vec(&compressed, input.len()).unwrap(), input);
}

#[test]
fn test_concurrent_calls() {
    let handles: Vec<_> = (0..8u8)
        .map(|n| {
            std::thread::spawn(move || {
                let input: Vec<u8> = (0..20_000u32).map(|i| (i % 251) as u8 ^ n).collect();
                for _ in 0..10 {
                    assert_eq!(roundtrip(&input), input);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
