//! URI records.

use alloc::string::String;

use log::warn;

/// Identifier substituted for abbreviation codes without a table entry.
pub const RESERVED: &str = "RFU";

/// Scheme prefixes, indexed by abbreviation code.
const IDENTIFIERS: [&str; 36] = [
    "",
    "http://www.",
    "https://www.",
    "http://",
    "https://",
    "tel:",
    "mailto:",
    "ftp://anonymous:anonymous@",
    "ftp://ftp.",
    "ftps://",
    "sftp://",
    "smb://",
    "nfs://",
    "ftp://",
    "dav://",
    "news:",
    "telnet://",
    "imap:",
    "rtsp://",
    "urn:",
    "pop:",
    "sip:",
    "sips:",
    "tftp:",
    "btspp://",
    "btl2cap://",
    "btgoep://",
    "tcpobex://",
    "irdaobex://",
    "file://",
    "urn:epc:id:",
    "urn:epc:tag:",
    "urn:epc:pat:",
    "urn:epc:raw:",
    "urn:epc:",
    "urn:nfc:",
];

/// Look up the scheme prefix for an abbreviation code.
///
/// Codes past the end of the table yield [`RESERVED`].
pub fn identifier(code: u8) -> &'static str {
    IDENTIFIERS.get(code as usize).copied().unwrap_or(RESERVED)
}

/// A decoded URI record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UriRecord {
    /// Scheme prefix expanded from the abbreviation code, e.g. `http://`.
    pub identifier: &'static str,
    /// The URI without its prefix, e.g. `nokia.com`.
    pub uri: String,
}

impl UriRecord {
    /// Decode the payload of a URI record.
    ///
    /// Returns `None` for an empty payload. Invalid UTF-8 in the URI is
    /// replaced rather than rejected.
    pub fn from_payload(r: &[u8]) -> Option<Self> {
        let (&code, rest) = r.split_first()?;

        let identifier = identifier(code);
        if identifier == RESERVED {
            warn!("Reserved URI abbreviation code {code:#04x}.");
        }

        Some(Self {
            identifier,
            uri: String::from_utf8_lossy(rest).into_owned(),
        })
    }

    /// The URI with its scheme prefix.
    pub fn full_uri(&self) -> String {
        let mut full = String::with_capacity(self.identifier.len() + self.uri.len());
        full.push_str(self.identifier);
        full.push_str(&self.uri);
        full
    }
}
