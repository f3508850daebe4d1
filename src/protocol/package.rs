//! Package definitions
//!
//! The single message unit exchanged between client and server.

use bytes::Bytes;

use crate::error::FancyTalkError;

/// Role of a package on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum MessageType {
    #[default]
    Query = 0x00,
    Response = 0x01,
}

impl TryFrom<u8> for MessageType {
    type Error = FancyTalkError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0x00 => Ok(MessageType::Query),
            0x01 => Ok(MessageType::Response),
            _ => Err(FancyTalkError::MalformedInput(format!(
                "Unknown message type: 0x{:02x}",
                tag
            ))),
        }
    }
}

/// A styled text message
///
/// `query` is the lookup key of a QUERY package; `payload` is the text a
/// client displays. Both are optional and an empty field is treated the
/// same as an absent one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Package {
    /// Request identifier, echoed back in the response
    pub id: u16,

    pub message_type: MessageType,

    // Formatting flags
    pub bold: bool,
    pub italic: bool,
    pub underlined: bool,
    pub blink: bool,

    // Foreground color
    pub red: u8,
    pub green: u8,
    pub blue: u8,

    /// Lookup key (QUERY packages)
    pub query: Option<Bytes>,

    /// Message body
    pub payload: Option<Bytes>,
}

impl Package {
    /// Create an empty QUERY package
    pub fn query(text: impl Into<Bytes>) -> Self {
        Self::default().with_query(text)
    }

    /// Create an empty RESPONSE package
    pub fn response() -> Self {
        Self::default().with_message_type(MessageType::Response)
    }

    pub fn with_id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn with_message_type(mut self, message_type: MessageType) -> Self {
        self.message_type = message_type;
        self
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    pub fn with_underlined(mut self, underlined: bool) -> Self {
        self.underlined = underlined;
        self
    }

    pub fn with_blink(mut self, blink: bool) -> Self {
        self.blink = blink;
        self
    }

    pub fn with_rgb(mut self, red: u8, green: u8, blue: u8) -> Self {
        self.red = red;
        self.green = green;
        self.blue = blue;
        self
    }

    /// Set the query; an empty value clears it
    pub fn with_query(mut self, query: impl Into<Bytes>) -> Self {
        self.query = non_empty(query.into());
        self
    }

    /// Set the payload; an empty value clears it
    pub fn with_payload(mut self, payload: impl Into<Bytes>) -> Self {
        self.payload = non_empty(payload.into());
        self
    }

    /// Query bytes, empty when absent
    pub fn query_bytes(&self) -> &[u8] {
        self.query.as_deref().unwrap_or_default()
    }

    /// Payload bytes, empty when absent
    pub fn payload_bytes(&self) -> &[u8] {
        self.payload.as_deref().unwrap_or_default()
    }
}

fn non_empty(bytes: Bytes) -> Option<Bytes> {
    if bytes.is_empty() {
        None
    } else {
        Some(bytes)
    }
}
