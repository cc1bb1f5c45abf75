use ndef_decode::{
    avec::collect_slice,
    rtd::{
        text::{Encoding, TextError, TextRecord},
        uri::{self, RESERVED, UriRecord},
    },
    sans::ByteOrder,
};

#[test]
fn uri_identifiers() {
    assert_eq!(uri::identifier(0x00), "");
    assert_eq!(uri::identifier(0x01), "http://www.");
    assert_eq!(uri::identifier(0x06), "mailto:");
    assert_eq!(uri::identifier(0x1E), "urn:epc:id:");
    assert_eq!(uri::identifier(0x23), "urn:nfc:");
    assert_eq!(uri::identifier(0x24), RESERVED);
    assert_eq!(uri::identifier(0xFF), RESERVED);
}

#[test]
fn uri_from_payload() {
    let uri = UriRecord::from_payload(b"\x01nokia.com").unwrap();
    assert_eq!(uri.identifier, "http://www.");
    assert_eq!(uri.uri, "nokia.com");
    assert_eq!(uri.full_uri(), "http://www.nokia.com");

    let uri = UriRecord::from_payload(b"\x00urn:isbn:0451450523").unwrap();
    assert_eq!(uri.full_uri(), "urn:isbn:0451450523");

    let uri = UriRecord::from_payload(b"\x05").unwrap();
    assert_eq!(uri.full_uri(), "tel:");
}

#[test]
fn uri_unknown_code() {
    let uri = UriRecord::from_payload(b"\x42example").unwrap();
    assert_eq!(uri.identifier, "RFU");
    assert_eq!(uri.full_uri(), "RFUexample");
}

#[test]
fn uri_empty_payload() {
    assert_eq!(UriRecord::from_payload(b""), None);
}

#[test]
fn uri_requires_uri_record() {
    // A text record, and a URI record without a payload.
    let records = collect_slice(&hex::decode("9101055402656e486951010055").unwrap()).unwrap();
    assert_eq!(records[0].uri(), None);
    assert!(records[0].text().is_some());
    assert_eq!(records[1].uri(), None);
    assert!(records[1].text().is_none());
}

#[test]
fn text_utf8() {
    let text = TextRecord::from_payload(b"\x02enHi").unwrap();
    assert_eq!(text.language, "en");
    assert_eq!(text.encoding, Encoding::Utf8);
    assert_eq!(text.encoding.name(), "UTF-8");
    assert_eq!(text.text.as_deref(), Some("Hi"));

    let text = TextRecord::from_payload("\x05en-USh\u{e9}llo".as_bytes()).unwrap();
    assert_eq!(text.language, "en-US");
    assert_eq!(text.text.as_deref(), Some("h\u{e9}llo"));
}

#[test]
fn text_utf16() {
    // Without a byte order mark, little-endian unless told otherwise.
    let text = TextRecord::from_payload(b"\x82enH\x00i\x00").unwrap();
    assert_eq!(text.encoding, Encoding::Utf16);
    assert_eq!(text.encoding.name(), "UTF-16");
    assert_eq!(text.text.as_deref(), Some("Hi"));

    let text = TextRecord::from_payload_with(b"\x82en\x00H\x00i", ByteOrder::Big).unwrap();
    assert_eq!(text.text.as_deref(), Some("Hi"));

    // A byte order mark overrides the fallback order.
    let text = TextRecord::from_payload(b"\x82en\xFE\xFF\x00H\x00i").unwrap();
    assert_eq!(text.text.as_deref(), Some("Hi"));

    let text = TextRecord::from_payload_with(b"\x82en\xFF\xFEH\x00i\x00", ByteOrder::Big).unwrap();
    assert_eq!(text.text.as_deref(), Some("Hi"));
}

#[test]
fn text_utf16_record_byte_order() {
    let records = collect_slice(&hex::decode("d101075482656e00480069").unwrap()).unwrap();

    let text = records[0].text_with(ByteOrder::Big).unwrap().unwrap();
    assert_eq!(text.text.as_deref(), Some("Hi"));

    let text = records[0].text().unwrap().unwrap();
    assert_eq!(text.text.as_deref(), Some("\u{4800}\u{6900}"));
}

#[test]
fn text_language_only() {
    let text = TextRecord::from_payload(b"\x02fr").unwrap();
    assert_eq!(text.language, "fr");
    assert_eq!(text.text, None);

    // The encoding still follows the status byte.
    assert_eq!(text.encoding, Encoding::Utf8);
    let text = TextRecord::from_payload(b"\x82fr").unwrap();
    assert_eq!(text.encoding, Encoding::Utf16);
    assert_eq!(text.text, None);
}

#[test]
fn text_bytes_after_language_are_all_text() {
    // The language length covers `en` only, so the NUL is part of the text.
    let text = TextRecord::from_payload(&[0x02, b'e', b'n', 0x00, b'H', b'i']).unwrap();
    assert_eq!(text.language, "en");
    assert_eq!(text.encoding.name(), "UTF-8");
    assert_eq!(text.text.as_deref(), Some("\0Hi"));
}

#[test]
fn text_reserved_bit() {
    assert_eq!(
        TextRecord::from_payload(b"\x42enHi"),
        Err(TextError::UnsupportedLayout)
    );
}

#[test]
fn text_malformed() {
    assert_eq!(TextRecord::from_payload(b""), Err(TextError::EmptyPayload));
    assert_eq!(
        TextRecord::from_payload(b"\x05en"),
        Err(TextError::Truncated {
            language_length: 5,
            available: 2
        })
    );
}

#[test]
fn text_record_without_payload() {
    let records = collect_slice(&hex::decode("d1010054").unwrap()).unwrap();
    assert_eq!(records[0].text(), Some(Err(TextError::EmptyPayload)));
}

#[test]
fn type_name_format_names() {
    let records = collect_slice(&hex::decode("d1010a55016e6f6b69612e636f6d").unwrap()).unwrap();
    assert_eq!(records[0].type_name_format_name(), "wkt");

    let names: Vec<_> = (0..8)
        .map(|c| ndef_decode::TypeNameFormat::from_bits(c).name())
        .collect();
    assert_eq!(
        names,
        ["empty", "wkt", "mimetype", "absUri", "ext", "unknown", "unchanged", "reserved"]
    );
    assert_eq!(ndef_decode::TypeNameFormat::from_bits(0x0A).code(), 2);
}
