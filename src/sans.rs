//! Internal finite-state machine for decoding record headers.
//!
//! This module is intended for applications that need fine control over
//! decoder internals, such as those reading directly from a tag's memory. See
//! [`crate::avec`] for implementations covering common decoding patterns.
//!
//! # Architecture
//!
//! All states are represented by a non-copy token. Once enough bytes are
//! ready, transition to another state by calling the token's `advance` method.
//! This will return a successor state token, along with any extracted data.
//!
//! A record is decoded through the following states:
//!
//! 1. [`RecordHeader`](header::RecordHeader): the flags byte and the type
//!    length.
//! 2. [`IdLength`](length::IdLength): the id length, visited only when the
//!    `id_present` flag is set. Its position relative to the payload length is
//!    chosen by [`Layout::id_length`].
//! 3. [`ShortPayloadLength`](length::ShortPayloadLength) or
//!    [`LongPayloadLength`](length::LongPayloadLength), chosen by the
//!    `short_record` flag.
//! 4. [`Fields`](fields::Fields): the type, id and payload bytes, whose lengths
//!    are now known. Advancing returns the finished [`Record`](crate::Record),
//!    and a new [`RecordHeader`](header::RecordHeader) unless the record ended
//!    its message.
//!
//! Only the initial state, re-exported for convenience as [`Decoder`], can be
//! constructed. Some areas of the decoding process are not represented in the
//! finite-state machine and must be carefully written:
//!
//! - Reading bytes from the correct place in the message, and failing when the
//!   buffer runs out.
//!
//! - Expanding Smart Poster payloads, which are themselves messages.

use crate::record::Flags;

pub mod fields;
pub mod header;
pub mod length;

/// Entrypoint to the finite-state machine.
pub type Decoder = header::RecordHeader;

/// Byte order of the 4-byte payload length of long records, also used for
/// UTF-16 text without a byte order mark.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ByteOrder {
    /// Network order, as written by conforming encoders.
    #[default]
    Big,
    Little,
    /// The byte order of the host platform.
    Native,
}

/// Position of the id length relative to the payload length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdLengthPosition {
    #[default]
    BeforePayloadLength,
    /// The order used by NFC Forum tags.
    AfterPayloadLength,
}

/// Wire layout of the record length fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Layout {
    pub length_order: ByteOrder,
    pub id_length: IdLengthPosition,
}

/// Header data accumulated while advancing through the length states.
#[derive(Debug, Clone, Copy)]
struct Partial {
    layout: Layout,
    flags: Flags,
    type_length: u8,
    id_length: u8,
    payload_length: u32,
}
