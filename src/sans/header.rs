//! States processing the leading header byte.

use either::Either::{self, Left, Right};
use tartan_bitfield::bitfield;
use zerocopy::FromBytes;

use crate::record::{Flags, TypeNameFormat};

use super::{
    IdLengthPosition, Layout, Partial,
    length::{IdLength, PayloadLength},
};

/// State token to decode a record header.
#[derive(Debug)]
pub struct RecordHeader(pub(super) Layout);

impl RecordHeader {
    /// Begin decoding a message with the given length field layout.
    pub fn new(layout: Layout) -> Self {
        Self(layout)
    }

    /// Transition to another state by decoding the header byte and the type
    /// length.
    ///
    /// Returns a successor state token.
    pub fn advance(self, r: [u8; 2]) -> Either<IdLength, PayloadLength> {
        #[repr(C, packed)]
        #[derive(FromBytes)]
        struct Prefix {
            header: u8,
            type_length: u8,
        }

        let Prefix {
            header,
            type_length,
        } = zerocopy::transmute!(r);

        bitfield! {
            struct HeaderByte(u8) {
                [0..3] type_name_format: u8,
                [3] id_present,
                [4] short_record,
                [5] chunked,
                [6] message_end,
                [7] message_begin,
            }
        }

        let header = HeaderByte(header);

        let flags = Flags {
            message_begin: header.message_begin(),
            message_end: header.message_end(),
            chunked: header.chunked(),
            short_record: header.short_record(),
            id_present: header.id_present(),
            type_name_format: TypeNameFormat::from_bits(header.type_name_format()),
        };

        let partial = Partial {
            layout: self.0,
            flags,
            type_length,
            id_length: 0,
            payload_length: 0,
        };

        if flags.id_present && self.0.id_length == IdLengthPosition::BeforePayloadLength {
            Left(IdLength(partial))
        } else {
            Right(partial.payload_length_state())
        }
    }
}
