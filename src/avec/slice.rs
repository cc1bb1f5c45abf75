//! Slice-based decoder implementation.

use alloc::vec::Vec;

use either::Either::{Left, Right};
use log::{debug, warn};
use thiserror::Error;

use crate::{
    record::Record,
    sans::{Decoder, fields::Fields, header::RecordHeader},
};

use super::Config;

/// Errors occurring while decoding from a slice.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Unexpectedly reached the end of the slice.
    #[error("Unexpectedly reached the end of the slice ({needed} bytes needed at offset {offset}).")]
    BufferUnderflow { offset: usize, needed: usize },
    /// Smart Poster containers are nested too deeply.
    #[error("Smart Poster nesting exceeds the limit ({limit}).")]
    NestingTooDeep { limit: usize },
}

/// Decode the records of a message from a slice, extending a collection.
///
/// This method is also re-exported as `ndef_decode::avec::decode_slice`.
pub fn decode(r: &[u8], o: &mut impl Extend<Record>) -> Result<(), Error> {
    decode_with(r, &Config::default(), o)
}

/// Decode the records of a message from a slice, with the given
/// configuration.
pub fn decode_with(r: &[u8], config: &Config, o: &mut impl Extend<Record>) -> Result<(), Error> {
    let i = &mut 0; // Counter of bytes read, used to read bytes from the tip.

    // Records are held back until the whole message has decoded.
    let mut records = Vec::new();
    decode_message(r, i, config, 0, &mut records)?;

    if *i < r.len() {
        debug!("Ignoring {} bytes after the end of the message.", r.len() - *i);
    }

    o.extend(records);

    Ok(())
}

/// Decode one (sub-)message at a nesting depth, up to and including the
/// record that ends it.
pub(super) fn decode_message(
    r: &[u8],
    i: &mut usize,
    config: &Config,
    depth: usize,
    o: &mut Vec<Record>,
) -> Result<(), Error> {
    if depth > config.max_depth {
        warn!("Smart Poster nesting exceeds the limit ({}).", config.max_depth);
        Err(Error::NestingTooDeep {
            limit: config.max_depth,
        })?;
    }

    let mut record_header = Decoder::new(config.layout);

    loop {
        let fields = decode_lengths(record_header, r, i)?;

        let type_ = take_slice(r, i, fields.type_length())?;
        let id = take_slice(r, i, fields.id_length())?;
        let payload = take_slice(r, i, fields.payload_length())?;

        let (record, successor) = fields.advance(type_, id, payload);
        super::add_record(record, depth, config, o)?;

        record_header = match successor {
            Some(state) => state,
            None => break Ok(()),
        };
    }
}

fn decode_lengths(state: RecordHeader, r: &[u8], i: &mut usize) -> Result<Fields, Error> {
    let mut state = state.advance(take(r, i)?);

    loop {
        let successor = match state {
            Left(id_length) => match id_length.advance(take(r, i)?) {
                Left(payload_length) => {
                    state = Right(payload_length);
                    continue;
                }
                Right(fields) => return Ok(fields),
            },
            Right(Left(payload_length)) => payload_length.advance(take(r, i)?),
            Right(Right(payload_length)) => payload_length.advance(take(r, i)?),
        };

        match successor {
            Left(id_length) => state = Left(id_length),
            Right(fields) => return Ok(fields),
        }
    }
}

/// Take an exact number of bytes from an offset in a slice, advancing the offset.
fn take<const N: usize>(r: &[u8], i: &mut usize) -> Result<[u8; N], Error> {
    let mut buf = [0; N];
    buf.copy_from_slice(take_slice(r, i, N)?);
    Ok(buf)
}

/// Take a run of bytes from an offset in a slice, advancing the offset.
fn take_slice<'a>(r: &'a [u8], i: &mut usize, n: usize) -> Result<&'a [u8], Error> {
    let s = *i;

    let taken = s
        .checked_add(n)
        .and_then(|e| r.get(s..e))
        .ok_or(Error::BufferUnderflow {
            offset: s,
            needed: n,
        })?;

    *i += n;

    Ok(taken)
}
