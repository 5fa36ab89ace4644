use std::io::Cursor;

use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

use lznamco::{decode, encode_to_vec, DecodeError};

fn roundtrip(input: &[u8]) {
    let encoded = encode_to_vec(input).unwrap();
    assert_eq!(
        &encoded[..2],
        &(input.len() as u16).to_be_bytes(),
        "header must carry the plaintext length big-endian"
    );
    let decoded = decode(Cursor::new(&encoded)).unwrap();
    assert_eq!(decoded, input);
}

#[test]
fn roundtrip_empty() {
    roundtrip(&[]);
}

#[test]
fn roundtrip_single_byte() {
    roundtrip(&[0x00]);
    roundtrip(&[0xFF]);
}

#[test]
fn roundtrip_text() {
    roundtrip(b"the quick brown fox jumps over the lazy dog, the quick brown fox");
}

#[test]
fn roundtrip_token_counts_off_the_group_boundary() {
    // Token counts 1..=20 cover partial, exact, and overfull groups; the
    // trailing partial group must not be dropped.
    for len in 0..=20 {
        let input: Vec<u8> = (0..len as u8).collect();
        roundtrip(&input);
    }
}

#[test]
fn roundtrip_highly_compressible() {
    let mut input = Vec::new();
    for _ in 0..100 {
        input.extend_from_slice(b"TILESET0");
    }
    let encoded = encode_to_vec(&input).unwrap();
    assert!(
        encoded.len() < input.len(),
        "repetitive asset data must actually shrink ({} vs {})",
        encoded.len(),
        input.len()
    );
    assert_eq!(decode(Cursor::new(&encoded)).unwrap(), input);
}

#[test]
fn roundtrip_incompressible() {
    let mut rng = StdRng::seed_from_u64(0x4C5A);
    let input: Vec<u8> = (0..4096).map(|_| rng.gen()).collect();
    roundtrip(&input);
}

#[test]
fn roundtrip_sparse_zero_runs() {
    // Long zero runs exercise matches against the window's initial fill.
    let mut rng = StdRng::seed_from_u64(7);
    let mut input = vec![0u8; 2048];
    for _ in 0..64 {
        let at = rng.gen_range(0..input.len());
        input[at] = rng.gen();
    }
    roundtrip(&input);
}

#[test]
fn roundtrip_window_wrap() {
    // More than 4096 bytes forces the window cursor to lap itself.
    let input: Vec<u8> = (0..10_000u32).map(|i| (i % 7) as u8 * 0x21).collect();
    roundtrip(&input);
}

#[test]
fn roundtrip_maximum_length_input() {
    let input: Vec<u8> = (0..0xFFFFu32).map(|i| (i % 97) as u8).collect();
    roundtrip(&input);
}

#[test]
fn encoding_twice_is_byte_identical() {
    let mut rng = StdRng::seed_from_u64(99);
    let input: Vec<u8> = (0..3000).map(|_| rng.gen_range(0u8..4) * 0x40).collect();
    assert_eq!(
        encode_to_vec(&input).unwrap(),
        encode_to_vec(&input).unwrap()
    );
}

#[test]
fn truncating_a_stream_fails_cleanly() {
    let input = b"abcabcabcabcabcabc";
    let encoded = encode_to_vec(input).unwrap();
    for cut in 2..encoded.len() {
        match decode(Cursor::new(&encoded[..cut])) {
            Err(DecodeError::UnexpectedEndOfInput) => {}
            other => panic!("truncation at {cut} produced {other:?}"),
        }
    }
}

proptest! {
    // The backward scan probes every occurrence of the target byte, so
    // low-entropy cases are quadratic-ish; keep the case budget modest.
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_roundtrip_arbitrary(input in proptest::collection::vec(any::<u8>(), 0..1024)) {
        roundtrip(&input);
    }

    #[test]
    fn prop_roundtrip_low_entropy(input in proptest::collection::vec(0u8..4, 0..512)) {
        roundtrip(&input);
    }

    #[test]
    fn prop_decoded_length_matches_header(input in proptest::collection::vec(any::<u8>(), 0..512)) {
        let encoded = encode_to_vec(&input).unwrap();
        let declared = u16::from_be_bytes([encoded[0], encoded[1]]) as usize;
        let decoded = decode(Cursor::new(&encoded)).unwrap();
        prop_assert_eq!(decoded.len(), declared);
    }
}
