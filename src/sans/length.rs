//! States processing the id and payload length fields.

use either::Either::{self, Left, Right};

use super::{ByteOrder, IdLengthPosition, Partial, fields::Fields};

/// A payload length state token, chosen by the `short_record` flag.
pub type PayloadLength = Either<ShortPayloadLength, LongPayloadLength>;

/// State token to decode the id length.
#[derive(Debug)]
pub struct IdLength(pub(super) Partial);

impl IdLength {
    /// Transition to another state by decoding the id length.
    ///
    /// Returns a successor state token.
    pub fn advance(self, r: [u8; 1]) -> Either<PayloadLength, Fields> {
        let partial = Partial {
            id_length: r[0],
            ..self.0
        };

        match partial.layout.id_length {
            IdLengthPosition::BeforePayloadLength => Left(partial.payload_length_state()),
            IdLengthPosition::AfterPayloadLength => Right(Fields(partial)),
        }
    }
}

/// State token to decode a single-byte payload length.
#[derive(Debug)]
pub struct ShortPayloadLength(pub(super) Partial);

impl ShortPayloadLength {
    /// Transition to another state by decoding a short payload length.
    ///
    /// Returns a successor state token.
    pub fn advance(self, r: [u8; 1]) -> Either<IdLength, Fields> {
        Partial {
            payload_length: r[0].into(),
            ..self.0
        }
        .id_length_state()
    }
}

/// State token to decode a four-byte payload length.
#[derive(Debug)]
pub struct LongPayloadLength(pub(super) Partial);

impl LongPayloadLength {
    /// Transition to another state by decoding a long payload length, in the
    /// byte order set by the layout.
    ///
    /// Returns a successor state token.
    pub fn advance(self, r: [u8; 4]) -> Either<IdLength, Fields> {
        let payload_length = match self.0.layout.length_order {
            ByteOrder::Big => u32::from_be_bytes(r),
            ByteOrder::Little => u32::from_le_bytes(r),
            ByteOrder::Native => u32::from_ne_bytes(r),
        };

        Partial {
            payload_length,
            ..self.0
        }
        .id_length_state()
    }
}

impl Partial {
    pub(super) fn payload_length_state(self) -> PayloadLength {
        if self.flags.short_record {
            Left(ShortPayloadLength(self))
        } else {
            Right(LongPayloadLength(self))
        }
    }

    fn id_length_state(self) -> Either<IdLength, Fields> {
        if self.flags.id_present && self.layout.id_length == IdLengthPosition::AfterPayloadLength {
            Left(IdLength(self))
        } else {
            Right(Fields(self))
        }
    }
}
