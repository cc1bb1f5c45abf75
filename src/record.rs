//! Decoded records and their header flags.

use alloc::vec::Vec;

use crate::{
    rtd::{
        self,
        text::{TextError, TextRecord},
        uri::UriRecord,
    },
    sans::ByteOrder,
};

/// How the `type` field of a record should be interpreted.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TypeNameFormat {
    Empty = 0x00,
    WellKnown = 0x01,
    Media = 0x02,
    AbsoluteUri = 0x03,
    External = 0x04,
    Unknown = 0x05,
    Unchanged = 0x06,
    Reserved = 0x07,
}

impl TypeNameFormat {
    const TABLE: [(Self, &'static str); 8] = [
        (Self::Empty, "empty"),
        (Self::WellKnown, "wkt"),
        (Self::Media, "mimetype"),
        (Self::AbsoluteUri, "absUri"),
        (Self::External, "ext"),
        (Self::Unknown, "unknown"),
        (Self::Unchanged, "unchanged"),
        (Self::Reserved, "reserved"),
    ];

    /// Classify the low three bits of a header byte. Higher bits are ignored.
    pub fn from_bits(bits: u8) -> Self {
        Self::TABLE[(bits & 0x07) as usize].0
    }

    /// The 3-bit code of this format.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Short name of this format, as shown in record reports.
    pub fn name(self) -> &'static str {
        Self::TABLE[self as usize].1
    }
}

/// Flags carried in the leading header byte of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Flags {
    pub message_begin: bool,
    pub message_end: bool,
    pub chunked: bool,
    pub short_record: bool,
    pub id_present: bool,
    pub type_name_format: TypeNameFormat,
}

/// A single decoded record.
///
/// Variable-length fields are `None` when their length is zero, never an empty
/// vector. The payload of an expanded Smart Poster is always `None`; its
/// content follows the container as records flagged `is_smart_poster_child`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Record {
    pub flags: Flags,
    pub type_length: u8,
    pub id_length: u8,
    pub payload_length: u32,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub type_: Option<Vec<u8>>,
    pub id: Option<Vec<u8>>,
    pub payload: Option<Vec<u8>>,
    pub is_smart_poster_child: bool,
}

impl Record {
    /// Whether this record is of the given well-known type.
    pub fn is_well_known(&self, type_: &[u8]) -> bool {
        self.flags.type_name_format == TypeNameFormat::WellKnown
            && self.type_.as_deref() == Some(type_)
    }

    /// Whether this record is a Smart Poster container.
    pub fn is_smart_poster(&self) -> bool {
        self.is_well_known(rtd::SMART_POSTER)
    }

    /// Short name of the record's type name format.
    pub fn type_name_format_name(&self) -> &'static str {
        self.flags.type_name_format.name()
    }

    /// Decode a well-known URI record.
    ///
    /// Returns `None` for records of another type, or without a payload.
    pub fn uri(&self) -> Option<UriRecord> {
        if !self.is_well_known(rtd::URI) {
            return None;
        }

        UriRecord::from_payload(self.payload.as_deref()?)
    }

    /// Decode a well-known text record.
    ///
    /// Returns `None` for records of another type. A record without a payload
    /// is reported as [`TextError::EmptyPayload`]. UTF-16 text without a byte
    /// order mark is read little-endian; see [`Record::text_with`].
    pub fn text(&self) -> Option<Result<TextRecord, TextError>> {
        self.text_with(ByteOrder::Little)
    }

    /// Decode a well-known text record, reading UTF-16 text without a byte
    /// order mark in the given order.
    pub fn text_with(&self, utf16_order: ByteOrder) -> Option<Result<TextRecord, TextError>> {
        if !self.is_well_known(rtd::TEXT) {
            return None;
        }

        Some(TextRecord::from_payload_with(
            self.payload.as_deref().unwrap_or_default(),
            utf16_order,
        ))
    }
}
