//! Protocol codec
//!
//! Encoding and decoding functions for the package wire format.
//!
//! ## Wire Format
//! ```text
//! offset  field          width
//! 0       id             2
//! 2       message_type   1
//! 3       flags          1
//! 4       red            1
//! 5       green          1
//! 6       blue           1
//! 7       query_len      2
//! 9       query          query_len
//! 9+q     payload_len    2
//! 11+q    payload        payload_len
//! ```
//!
//! Parsing never indexes into the buffer directly: every read goes through
//! `bytes::Buf` after a `remaining()` check, so malformed input yields
//! `MalformedInput` instead of a panic.

use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::error::{FancyTalkError, Result};
use super::{MessageType, Package};

/// Fixed header: id (2) + type (1) + flags (1) + red, green, blue (3)
pub const HEADER_SIZE: usize = 7;

/// Smallest buffer worth parsing: header + query length prefix
pub const MIN_PACKAGE_SIZE: usize = HEADER_SIZE + LEN_PREFIX_SIZE;

/// Largest datagram accepted by the decoder
pub const MAX_DATAGRAM_SIZE: usize = 4096;

/// Largest query or payload the 16-bit length prefix can describe
pub const MAX_FIELD_LEN: usize = u16::MAX as usize;

pub const FLAG_BOLD: u8 = 0b0100_0000;
pub const FLAG_ITALIC: u8 = 0b0010_0000;
pub const FLAG_UNDERLINED: u8 = 0b0001_0000;
pub const FLAG_BLINK: u8 = 0b0000_1000;

const LEN_PREFIX_SIZE: usize = 2;

// =============================================================================
// Encoding
// =============================================================================

/// Number of bytes `encode_package` produces for `package`
pub fn encoded_len(package: &Package) -> usize {
    HEADER_SIZE
        + LEN_PREFIX_SIZE
        + package.query_bytes().len()
        + LEN_PREFIX_SIZE
        + package.payload_bytes().len()
}

/// Encode a package to bytes
///
/// Absent fields are written with length 0. Fails with `LengthOverflow`
/// when the query or payload does not fit its 16-bit length prefix.
pub fn encode_package(package: &Package) -> Result<Bytes> {
    let query = package.query_bytes();
    let payload = package.payload_bytes();
    let query_len = field_len("query", query)?;
    let payload_len = field_len("payload", payload)?;

    let mut message = BytesMut::with_capacity(encoded_len(package));
    message.put_u16(package.id);
    message.put_u8(package.message_type as u8);
    message.put_u8(encode_flags(package));
    message.put_u8(package.red);
    message.put_u8(package.green);
    message.put_u8(package.blue);
    message.put_u16(query_len);
    message.put_slice(query);
    message.put_u16(payload_len);
    message.put_slice(payload);

    Ok(message.freeze())
}

fn field_len(field: &'static str, data: &[u8]) -> Result<u16> {
    u16::try_from(data.len()).map_err(|_| FancyTalkError::LengthOverflow {
        field,
        len: data.len(),
    })
}

fn encode_flags(package: &Package) -> u8 {
    let mut flags = 0u8;
    if package.bold {
        flags |= FLAG_BOLD;
    }
    if package.italic {
        flags |= FLAG_ITALIC;
    }
    if package.underlined {
        flags |= FLAG_UNDERLINED;
    }
    if package.blink {
        flags |= FLAG_BLINK;
    }
    flags
}

// =============================================================================
// Decoding
// =============================================================================

/// Decode a package from a received datagram
///
/// The returned package owns copies of its query and payload; nothing
/// borrows from `bytes` after this returns.
pub fn decode_package(bytes: &[u8]) -> Result<Package> {
    if bytes.len() > MAX_DATAGRAM_SIZE {
        return Err(FancyTalkError::MalformedInput(format!(
            "Datagram too large: {} bytes (max {})",
            bytes.len(),
            MAX_DATAGRAM_SIZE
        )));
    }

    if bytes.len() < MIN_PACKAGE_SIZE {
        return Err(FancyTalkError::MalformedInput(format!(
            "Incomplete header: expected {} bytes, got {}",
            MIN_PACKAGE_SIZE,
            bytes.len()
        )));
    }

    let mut buf = bytes;

    // Parse header
    let id = buf.get_u16();
    let message_type = MessageType::try_from(buf.get_u8())?;
    let flags = buf.get_u8();
    let red = buf.get_u8();
    let green = buf.get_u8();
    let blue = buf.get_u8();

    let query = read_field(&mut buf, "query")?;
    let payload = read_field(&mut buf, "payload")?;

    if buf.has_remaining() {
        tracing::trace!("Ignoring {} trailing bytes", buf.remaining());
    }

    Ok(Package {
        id,
        message_type,
        bold: flags & FLAG_BOLD != 0,
        italic: flags & FLAG_ITALIC != 0,
        underlined: flags & FLAG_UNDERLINED != 0,
        blink: flags & FLAG_BLINK != 0,
        red,
        green,
        blue,
        query,
        payload,
    })
}

/// Read a length-prefixed field, mapping length 0 to `None`
fn read_field(buf: &mut &[u8], field: &str) -> Result<Option<Bytes>> {
    if buf.remaining() < LEN_PREFIX_SIZE {
        return Err(FancyTalkError::MalformedInput(format!(
            "{}: missing length",
            field
        )));
    }

    let len = buf.get_u16() as usize;
    if buf.remaining() < len {
        return Err(FancyTalkError::MalformedInput(format!(
            "{}: incomplete data (expected {}, got {})",
            field,
            len,
            buf.remaining()
        )));
    }

    if len == 0 {
        return Ok(None);
    }
    Ok(Some(buf.copy_to_bytes(len)))
}
