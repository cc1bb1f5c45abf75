//! Reader-based decoder implementation.
//!
//! _Requires Cargo feature `std`._

use std::{
    io::{ErrorKind, Read},
    vec::Vec,
};

use either::Either::{Left, Right};
use thiserror::Error;

use crate::{
    record::Record,
    sans::{Decoder, fields::Fields, header::RecordHeader},
};

use super::{Config, slice};

extern crate std;

/// Errors occurring while decoding from a reader.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the supplied reader.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The reader ended before the message did.
    #[error("Unexpectedly reached the end of the reader.")]
    BufferUnderflow,
    /// Smart Poster containers are nested too deeply.
    #[error("Smart Poster nesting exceeds the limit ({limit}).")]
    NestingTooDeep { limit: usize },
}

impl From<slice::Error> for Error {
    fn from(err: slice::Error) -> Self {
        match err {
            slice::Error::BufferUnderflow { .. } => Self::BufferUnderflow,
            slice::Error::NestingTooDeep { limit } => Self::NestingTooDeep { limit },
        }
    }
}

/// Decode the records of a message from a reader, extending a collection.
///
/// Reading stops after the record that ends the message; any further bytes are
/// left in the reader. Smart Poster payloads are read whole, then expanded.
///
/// This method is also re-exported as `ndef_decode::avec::decode_reader`.
///
/// _Requires Cargo feature `std`._
pub fn decode(r: &mut impl Read, o: &mut impl Extend<Record>) -> Result<(), Error> {
    decode_with(r, &Config::default(), o)
}

/// Decode the records of a message from a reader, with the given
/// configuration.
///
/// _Requires Cargo feature `std`._
pub fn decode_with(
    r: &mut impl Read,
    config: &Config,
    o: &mut impl Extend<Record>,
) -> Result<(), Error> {
    // Records are held back until the whole message has decoded.
    let mut records = Vec::new();

    let mut record_header = Decoder::new(config.layout);

    loop {
        let fields = decode_lengths(record_header, r)?;

        let type_ = take_vec(r, fields.type_length())?;
        let id = take_vec(r, fields.id_length())?;
        let payload = take_vec(r, fields.payload_length())?;

        let (record, successor) = fields.advance(&type_, &id, &payload);
        super::add_record(record, 0, config, &mut records)?;

        record_header = match successor {
            Some(state) => state,
            None => break,
        };
    }

    o.extend(records);

    Ok(())
}

fn decode_lengths(state: RecordHeader, r: &mut impl Read) -> Result<Fields, Error> {
    let mut state = state.advance(take(r)?);

    loop {
        let successor = match state {
            Left(id_length) => match id_length.advance(take(r)?) {
                Left(payload_length) => {
                    state = Right(payload_length);
                    continue;
                }
                Right(fields) => return Ok(fields),
            },
            Right(Left(payload_length)) => payload_length.advance(take(r)?),
            Right(Right(payload_length)) => payload_length.advance(take(r)?),
        };

        match successor {
            Left(id_length) => state = Left(id_length),
            Right(fields) => return Ok(fields),
        }
    }
}

/// Take an exact number of bytes from a reader.
fn take<const N: usize>(r: &mut impl Read) -> Result<[u8; N], Error> {
    let mut buf = [0; N];

    r.read_exact(&mut buf).map_err(|err| match err.kind() {
        ErrorKind::UnexpectedEof => Error::BufferUnderflow,
        _ => Error::Io(err),
    })?;

    Ok(buf)
}

/// Take a run of bytes from a reader, growing the buffer only as bytes arrive.
fn take_vec(r: &mut impl Read, n: usize) -> Result<Vec<u8>, Error> {
    let mut buf = Vec::new();
    r.take(n as u64).read_to_end(&mut buf)?;

    if buf.len() != n {
        Err(Error::BufferUnderflow)?;
    }

    Ok(buf)
}
