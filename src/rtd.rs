//! Decoders for well-known record type definitions.
//!
//! These interpret the payload of a finished [`Record`](crate::Record). They
//! are invoked on demand, usually through [`Record::uri`](crate::Record::uri)
//! and [`Record::text`](crate::Record::text), and never affect the decoding of
//! the surrounding message.

pub mod text;
pub mod uri;

/// Type of a Smart Poster container, whose payload is a nested message.
pub const SMART_POSTER: &[u8] = b"Sp";
/// Type of a URI record.
pub const URI: &[u8] = b"U";
/// Type of a text record.
pub const TEXT: &[u8] = b"T";
