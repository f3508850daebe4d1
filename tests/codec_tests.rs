//! Codec Tests
//!
//! Tests for package encoding/decoding and malformed input handling.

use bytes::Bytes;
use fancytalk::protocol::{
    decode_package, encode_package, encoded_len, MessageType, Package,
    FLAG_BLINK, FLAG_BOLD, HEADER_SIZE, MAX_DATAGRAM_SIZE, MAX_FIELD_LEN, MIN_PACKAGE_SIZE,
};
use fancytalk::FancyTalkError;

// =============================================================================
// Helper Functions
// =============================================================================

fn not_found_package() -> Package {
    Package::response()
        .with_id(7)
        .with_bold(true)
        .with_blink(true)
        .with_rgb(0xff, 0x00, 0x00)
        .with_payload("Not found!")
}

fn assert_malformed(bytes: &[u8]) {
    match decode_package(bytes) {
        Err(FancyTalkError::MalformedInput(_)) => {}
        other => panic!("Expected MalformedInput for {:?}, got {:?}", bytes, other),
    }
}

// =============================================================================
// Encoding/Decoding Tests
// =============================================================================

#[test]
fn test_encode_decode_not_found_response() {
    let package = not_found_package();
    let encoded = encode_package(&package).unwrap();

    // query_len is zero
    assert_eq!(&encoded[7..9], &[0x00, 0x00]);

    let decoded = decode_package(&encoded).unwrap();
    assert_eq!(decoded.id, 7);
    assert_eq!(decoded.message_type, MessageType::Response);
    assert!(decoded.bold);
    assert!(!decoded.italic);
    assert!(!decoded.underlined);
    assert!(decoded.blink);
    assert_eq!((decoded.red, decoded.green, decoded.blue), (0xff, 0x00, 0x00));
    assert_eq!(decoded.query, None);
    assert_eq!(decoded.payload, Some(Bytes::from_static(b"Not found!")));
    assert_eq!(decoded, package);
}

#[test]
fn test_encode_decode_query_with_all_flags() {
    let package = Package::query("greeting")
        .with_id(0xBEEF)
        .with_bold(true)
        .with_italic(true)
        .with_underlined(true)
        .with_blink(true)
        .with_rgb(1, 2, 3)
        .with_payload("hi there");

    let decoded = decode_package(&encode_package(&package).unwrap()).unwrap();
    assert_eq!(decoded, package);
}

#[test]
fn test_encode_decode_absent_fields() {
    let package = Package::default();
    let encoded = encode_package(&package).unwrap();

    assert_eq!(encoded.len(), MIN_PACKAGE_SIZE + 2);

    let decoded = decode_package(&encoded).unwrap();
    assert_eq!(decoded, package);
    assert_eq!(decoded.query, None);
    assert_eq!(decoded.payload, None);
}

#[test]
fn test_empty_field_decodes_as_absent() {
    let mut package = Package::query("x");
    package.query = Some(Bytes::new());

    let decoded = decode_package(&encode_package(&package).unwrap()).unwrap();
    assert_eq!(decoded.query, None);
}

#[test]
fn test_encode_decode_binary_data() {
    // Fields are raw bytes, not necessarily UTF-8
    let query: Vec<u8> = vec![0x00, 0x01, 0xFF, 0xFE, 0x80];
    let payload: Vec<u8> = (0..=255).collect();

    let package = Package::query(query.clone()).with_payload(payload.clone());
    let decoded = decode_package(&encode_package(&package).unwrap()).unwrap();

    assert_eq!(decoded.query_bytes(), query.as_slice());
    assert_eq!(decoded.payload_bytes(), payload.as_slice());
}

#[test]
fn test_encode_decode_flag_and_length_sweep() {
    // Largest single field that keeps the datagram within MAX_DATAGRAM_SIZE
    let max_single = MAX_DATAGRAM_SIZE - MIN_PACKAGE_SIZE - 2;
    let lengths = [0, 1, max_single];

    for bits in 0u8..16 {
        for &query_len in &lengths {
            for &payload_len in &lengths {
                if query_len + payload_len > max_single {
                    continue;
                }

                let package = Package::response()
                    .with_id(u16::from(bits) * 1000)
                    .with_bold(bits & 0b1000 != 0)
                    .with_italic(bits & 0b0100 != 0)
                    .with_underlined(bits & 0b0010 != 0)
                    .with_blink(bits & 0b0001 != 0)
                    .with_rgb(bits, 0x80, 0xff - bits)
                    .with_query(vec![b'q'; query_len])
                    .with_payload(vec![b'p'; payload_len]);

                let encoded = encode_package(&package).unwrap();
                assert!(encoded.len() <= MAX_DATAGRAM_SIZE);

                let decoded = decode_package(&encoded).unwrap();
                assert_eq!(
                    decoded, package,
                    "flags={:04b} query_len={} payload_len={}",
                    bits, query_len, payload_len
                );
            }
        }
    }
}

#[test]
fn test_encoded_len_matches_output() {
    let package = Package::query("hamlet").with_payload("Alas, poor Yorick!");
    let encoded = encode_package(&package).unwrap();
    assert_eq!(encoded.len(), encoded_len(&package));
}

#[test]
fn test_encode_is_deterministic() {
    let package = not_found_package();
    assert_eq!(
        encode_package(&package).unwrap(),
        encode_package(&package).unwrap()
    );
}

// =============================================================================
// Wire Format Verification Tests
// =============================================================================

#[test]
fn test_wire_format_response() {
    let package = Package::response()
        .with_id(0x2342)
        .with_bold(true)
        .with_blink(true)
        .with_rgb(0x12, 0x34, 0x56)
        .with_query("Hi");
    let encoded = encode_package(&package).unwrap();

    let expected: Vec<u8> = vec![
        0x23, 0x42,             // id
        0x01,                   // RESPONSE
        FLAG_BOLD | FLAG_BLINK, // flags
        0x12, 0x34, 0x56,       // rgb
        0x00, 0x02,             // query_len
        b'H', b'i',             // query
        0x00, 0x00,             // payload_len
    ];
    assert_eq!(encoded.as_ref(), expected.as_slice());
}

#[test]
fn test_wire_format_flag_bits() {
    let cases = [
        (Package::default().with_bold(true), 0b0100_0000u8),
        (Package::default().with_italic(true), 0b0010_0000),
        (Package::default().with_underlined(true), 0b0001_0000),
        (Package::default().with_blink(true), 0b0000_1000),
    ];

    for (package, flags) in cases {
        let encoded = encode_package(&package).unwrap();
        assert_eq!(encoded[3], flags);
    }
}

#[test]
fn test_wire_format_big_endian_lengths() {
    let payload = vec![b'a'; 0x0102];
    let package = Package::default().with_payload(payload);
    let encoded = encode_package(&package).unwrap();

    assert_eq!(&encoded[HEADER_SIZE..HEADER_SIZE + 2], &[0x00, 0x00]);
    assert_eq!(&encoded[HEADER_SIZE + 2..HEADER_SIZE + 4], &[0x01, 0x02]);
}

// =============================================================================
// Error Handling Tests
// =============================================================================

#[test]
fn test_truncated_buffers_rejected() {
    let full = encode_package(&not_found_package()).unwrap();
    for len in 0..MIN_PACKAGE_SIZE {
        assert_malformed(&full[..len]);
    }
}

#[test]
fn test_incomplete_header_message() {
    let result = decode_package(&[0x00, 0x01, 0x00]);
    assert!(result.unwrap_err().to_string().contains("Incomplete header"));
}

#[test]
fn test_query_len_exceeds_buffer() {
    // query_len = 10, only 2 query bytes follow
    let bytes = [0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x0A, b'h', b'i'];
    assert_malformed(&bytes);
    assert!(decode_package(&bytes).unwrap_err().to_string().contains("query"));
}

#[test]
fn test_missing_payload_len() {
    // Valid header and empty query, but no payload length
    let bytes = [0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
    assert_malformed(&bytes);
}

#[test]
fn test_payload_len_exceeds_buffer() {
    let bytes = [
        0x00, 0x01, 0x01, 0x00, 0x00, 0x00, 0x00, // header
        0x00, 0x00, // query_len
        0xFF, 0xFF, // payload_len
        b'x',
    ];
    assert_malformed(&bytes);
    assert!(decode_package(&bytes).unwrap_err().to_string().contains("payload"));
}

#[test]
fn test_unknown_message_type() {
    let bytes = [0x00, 0x01, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
    assert_malformed(&bytes);
    assert!(decode_package(&bytes)
        .unwrap_err()
        .to_string()
        .contains("Unknown message type"));
}

#[test]
fn test_oversized_datagram_rejected() {
    let mut bytes = encode_package(&Package::default()).unwrap().to_vec();
    bytes.resize(MAX_DATAGRAM_SIZE + 1, 0);
    assert_malformed(&bytes);
}

#[test]
fn test_max_size_datagram_accepted() {
    let mut bytes = encode_package(&Package::query("q")).unwrap().to_vec();
    bytes.resize(MAX_DATAGRAM_SIZE, 0xAA);
    let decoded = decode_package(&bytes).unwrap();
    assert_eq!(decoded.query_bytes(), b"q");
}

#[test]
fn test_trailing_bytes_ignored() {
    let package = not_found_package();
    let mut bytes = encode_package(&package).unwrap().to_vec();
    bytes.extend_from_slice(b"garbage");

    assert_eq!(decode_package(&bytes).unwrap(), package);
}

#[test]
fn test_reserved_flag_bits_ignored() {
    let bytes = [0x00, 0x05, 0x00, 0b1000_0111, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
    let decoded = decode_package(&bytes).unwrap();

    assert!(!decoded.bold && !decoded.italic && !decoded.underlined && !decoded.blink);
    assert_eq!(encode_package(&decoded).unwrap()[3], 0x00);
}

#[test]
fn test_length_overflow() {
    let payload = vec![0u8; MAX_FIELD_LEN + 1];
    let package = Package::default().with_payload(payload);

    match encode_package(&package) {
        Err(FancyTalkError::LengthOverflow { field, len }) => {
            assert_eq!(field, "payload");
            assert_eq!(len, MAX_FIELD_LEN + 1);
        }
        other => panic!("Expected LengthOverflow, got {:?}", other),
    }
}

#[test]
fn test_max_field_len_encodes() {
    let package = Package::query(vec![b'q'; MAX_FIELD_LEN]);
    let encoded = encode_package(&package).unwrap();
    assert_eq!(&encoded[7..9], &[0xFF, 0xFF]);
}

#[test]
fn test_decoded_package_owns_its_bytes() {
    let package = Package::query("greeting").with_payload("Hello");
    let decoded = {
        let buffer = encode_package(&package).unwrap().to_vec();
        decode_package(&buffer).unwrap()
    };
    assert_eq!(decoded.query_bytes(), b"greeting");
    assert_eq!(decoded.payload_bytes(), b"Hello");
}
