#![no_std]

//! A decoder for NFC Data Exchange Format (NDEF) messages.
//!
//! Decoding turns the raw bytes of one complete message, as handed over by a
//! tag reader or peer-to-peer transport, into an ordered sequence of
//! [`Record`]s. Smart Poster containers are expanded in place, and the payloads
//! of well-known URI and text records can be interpreted on demand.
//!
//! Most users should begin with the functions in the [`avec`] module, and the
//! [`Record::uri`] and [`Record::text`] accessors. If these prove insufficient,
//! the header finite-state machine is exposed in the [`sans`] module.
//!
//! ```
//! let records = ndef_decode::avec::collect_slice(&bytes)?;
//!
//! for record in &records {
//!     if let Some(uri) = record.uri() {
//!         println!("{}", uri.full_uri());
//!     }
//! }
//! ```
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable reader-based decoder (default).
//! - `serde`: derive `Serialize` for records and decoded record types.

extern crate alloc;

pub mod avec;
pub mod record;
pub mod rtd;
pub mod sans;

pub use record::{Flags, Record, TypeNameFormat};
