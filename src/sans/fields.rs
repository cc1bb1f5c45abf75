//! States processing the type, id and payload fields.

use alloc::vec::Vec;

use crate::record::{Flags, Record};

use super::{Partial, header::RecordHeader};

/// State token to read the variable-length fields of a record.
///
/// The lengths of each field are known at this point, and should be used to
/// take the right number of bytes before advancing.
#[derive(Debug)]
pub struct Fields(pub(super) Partial);

impl Fields {
    /// Header flags of the record being decoded.
    pub fn flags(&self) -> Flags {
        self.0.flags
    }

    pub fn type_length(&self) -> usize {
        self.0.type_length.into()
    }

    /// Always zero when the `id_present` flag is clear.
    pub fn id_length(&self) -> usize {
        self.0.id_length.into()
    }

    pub fn payload_length(&self) -> usize {
        self.0.payload_length as usize
    }

    /// Transition to another state by reading the type, id and payload fields,
    /// in that order. Each slice must hold exactly as many bytes as the
    /// corresponding length.
    ///
    /// Returns the decoded record, and a successor state token unless the
    /// record ended its message.
    pub fn advance(self, type_: &[u8], id: &[u8], payload: &[u8]) -> (Record, Option<RecordHeader>) {
        debug_assert_eq!(type_.len(), self.type_length());
        debug_assert_eq!(id.len(), self.id_length());
        debug_assert_eq!(payload.len(), self.payload_length());

        fn field(r: &[u8]) -> Option<Vec<u8>> {
            (!r.is_empty()).then(|| r.to_vec())
        }

        let Partial {
            layout,
            flags,
            type_length,
            id_length,
            payload_length,
        } = self.0;

        let record = Record {
            flags,
            type_length,
            id_length,
            payload_length,
            type_: field(type_),
            id: field(id),
            payload: field(payload),
            is_smart_poster_child: false,
        };

        let successor = (!flags.message_end).then(|| RecordHeader(layout));

        (record, successor)
    }
}
