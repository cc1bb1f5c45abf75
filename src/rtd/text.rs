//! Text records.

use alloc::{string::String, vec::Vec};

use log::warn;
use tartan_bitfield::bitfield;
use thiserror::Error;

use crate::sans::ByteOrder;

/// An error decoding a text record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TextError {
    /// The payload holds no status byte.
    #[error("Empty text payload.")]
    EmptyPayload,
    /// The reserved bit of the status byte is set.
    #[error("Unsupported text layout (reserved status bit set).")]
    UnsupportedLayout,
    /// The language code runs past the end of the payload.
    #[error("Language code length ({language_length}) exceeds the {available} bytes available.")]
    Truncated {
        language_length: usize,
        available: usize,
    },
}

/// Encoding of the text in a text record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Encoding {
    Utf8,
    Utf16,
}

impl Encoding {
    pub fn name(self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Utf16 => "UTF-16",
        }
    }
}

/// A decoded text record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TextRecord {
    /// IANA language code, e.g. `en-US`.
    pub language: String,
    /// Taken from the status byte, so it is set even when `text` is `None`.
    pub encoding: Encoding,
    /// `None` when the payload ends after the language code. The `encoding`
    /// is still reported in that case.
    pub text: Option<String>,
}

impl TextRecord {
    /// Decode the payload of a text record.
    ///
    /// UTF-16 text without a byte order mark is read little-endian, as written
    /// by the platform NFC stacks these records usually come from.
    pub fn from_payload(r: &[u8]) -> Result<Self, TextError> {
        Self::from_payload_with(r, ByteOrder::Little)
    }

    /// Decode the payload of a text record, reading UTF-16 text without a byte
    /// order mark in the given order.
    pub fn from_payload_with(r: &[u8], utf16_order: ByteOrder) -> Result<Self, TextError> {
        let (&status, rest) = r.split_first().ok_or(TextError::EmptyPayload)?;

        bitfield! {
            struct Status(u8) {
                [0..6] language_length: u8,
                [6] is_reserved,
                [7] is_utf16,
            }
        }

        let status = Status(status);

        if status.is_reserved() {
            warn!("Text record with reserved status bit set.");
            Err(TextError::UnsupportedLayout)?;
        }

        let language_length = status.language_length() as usize;
        let (language, text) = rest
            .split_at_checked(language_length)
            .ok_or(TextError::Truncated {
                language_length,
                available: rest.len(),
            })?;

        let encoding = if status.is_utf16() {
            Encoding::Utf16
        } else {
            Encoding::Utf8
        };

        let text = (!text.is_empty()).then(|| match encoding {
            Encoding::Utf8 => String::from_utf8_lossy(text).into_owned(),
            Encoding::Utf16 => decode_utf16(text, utf16_order),
        });

        Ok(Self {
            language: String::from_utf8_lossy(language).into_owned(),
            encoding,
            text,
        })
    }
}

/// Decode UTF-16 text, honouring a leading byte order mark and falling back
/// to `order` without one.
fn decode_utf16(r: &[u8], order: ByteOrder) -> String {
    let (r, order) = match r {
        [0xFF, 0xFE, rest @ ..] => (rest, ByteOrder::Little),
        [0xFE, 0xFF, rest @ ..] => (rest, ByteOrder::Big),
        _ => (r, order),
    };

    let units: Vec<u16> = r
        .chunks(2)
        .map(|c| match (c, order) {
            (&[a, b], ByteOrder::Big) => u16::from_be_bytes([a, b]),
            (&[a, b], ByteOrder::Little) => u16::from_le_bytes([a, b]),
            (&[a, b], ByteOrder::Native) => u16::from_ne_bytes([a, b]),
            // A dangling byte cannot form a code unit.
            _ => 0xFFFD,
        })
        .collect();

    char::decode_utf16(units)
        .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}
