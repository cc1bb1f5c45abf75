//! Convenience interfaces for common decoding patterns.
//!
//! The functions in this module decode a complete message from a slice or a
//! reader, extending a caller-supplied collection with the records in arrival
//! order. Smart Poster containers are followed immediately by their expanded
//! contents, which are marked with
//! [`is_smart_poster_child`](crate::Record::is_smart_poster_child).
//!
//! Decoding either succeeds for the whole message or leaves the collection
//! untouched. There is no partial-record recovery.

use alloc::vec::Vec;

use log::{debug, trace};

use crate::{record::Record, sans::Layout};

#[cfg(feature = "std")]
pub mod reader;
pub mod slice;

#[cfg(feature = "std")]
pub use reader::decode as decode_reader;
pub use slice::decode as decode_slice;

/// Default limit on the nesting of Smart Poster containers.
pub const DEFAULT_MAX_DEPTH: usize = 8;

/// Decoder configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Deepest Smart Poster nesting accepted. The outermost message is at
    /// depth zero, and each expansion adds one.
    pub max_depth: usize,
    /// Wire layout of the record length fields.
    pub layout: Layout,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            layout: Layout::default(),
        }
    }
}

impl Config {
    pub fn with_max_depth(self, max_depth: usize) -> Self {
        Self { max_depth, ..self }
    }

    pub fn with_layout(self, layout: Layout) -> Self {
        Self { layout, ..self }
    }
}

/// Decode records from a slice holding a complete message.
pub fn collect_slice(r: &[u8]) -> Result<Vec<Record>, slice::Error> {
    let mut records: Vec<Record> = Vec::new();
    slice::decode(r, &mut records)?;
    Ok(records)
}

/// Add a record decoded at the given nesting depth, expanding it in place if
/// it is a Smart Poster container.
fn add_record(
    mut record: Record,
    depth: usize,
    config: &Config,
    o: &mut Vec<Record>,
) -> Result<(), slice::Error> {
    record.is_smart_poster_child = depth > 0;

    trace!(
        "Record ({}, {} payload bytes) at depth {depth}.",
        record.type_name_format_name(),
        record.payload_length
    );

    // The container keeps no payload once its contents are expanded.
    let nested = if record.is_smart_poster() {
        record.payload.take()
    } else {
        None
    };

    o.push(record);

    if let Some(nested) = nested {
        debug!("Expanding Smart Poster at depth {}.", depth + 1);

        let i = &mut 0;
        slice::decode_message(&nested, i, config, depth + 1, o)?;

        if *i < nested.len() {
            debug!("Ignoring {} bytes after a Smart Poster message.", nested.len() - *i);
        }
    }

    Ok(())
}
