//! Protocol Module
//!
//! Defines the datagram wire protocol shared by server and client.
//!
//! ## Package Format
//! ```text
//! ┌────────┬─────────┬──────────┬─────┬───────┬──────┐
//! │ ID (2) │ Type(1) │ Flags(1) │ R(1)│ G (1) │ B (1)│
//! ├────────┴─────────┴┬─────────┴─────┴───────┴──────┘
//! │ Query len (2)     │ Query ...
//! ├───────────────────┤
//! │ Payload len (2)   │ Payload ...
//! └───────────────────┘
//! ```
//!
//! All multi-byte integers are big-endian (network byte order).
//!
//! ### Message Types
//! - 0x00: QUERY
//! - 0x01: RESPONSE
//!
//! ### Flag Bits
//! - 0x40: bold
//! - 0x20: italic
//! - 0x10: underlined
//! - 0x08: blink
//! - 0x80, 0x07: reserved (written as zero, ignored when read)
//!
//! A zero length and an absent field are the same thing on the wire.
//! Bytes following the payload are ignored.

mod package;
mod codec;

pub use package::{MessageType, Package};
pub use codec::{
    decode_package, encode_package, encoded_len,
    FLAG_BLINK, FLAG_BOLD, FLAG_ITALIC, FLAG_UNDERLINED,
    HEADER_SIZE, MAX_DATAGRAM_SIZE, MAX_FIELD_LEN, MIN_PACKAGE_SIZE,
};
