#![cfg(feature = "std")]

use std::io::{Cursor, Read};

use ndef_decode::{
    Record,
    avec::{
        Config, collect_slice, decode_reader,
        reader::{Error, decode_with},
    },
};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn decode_reader_smart_poster() {
    init();
    const PATH: &str = "fixtures/smart-poster.ndef";
    let mut file = std::fs::File::open(PATH).unwrap();

    let mut records: Vec<Record> = Vec::new();
    decode_reader(&mut file, &mut records).unwrap();

    // Both front-ends agree on the same message.
    let data = std::fs::read(PATH).unwrap();
    assert_eq!(records, collect_slice(&data).unwrap());
}

#[test]
fn decode_reader_leaves_trailing_bytes() {
    init();
    let data = hex::decode("d1010a55016e6f6b69612e636f6dfe").unwrap();
    let mut cursor = Cursor::new(data);

    let mut records: Vec<Record> = Vec::new();
    decode_reader(&mut cursor, &mut records).unwrap();
    assert_eq!(records.len(), 1);

    let mut rest = Vec::new();
    cursor.read_to_end(&mut rest).unwrap();
    assert_eq!(rest, [0xFEu8]);
}

#[test]
fn decode_reader_underflow() {
    init();
    for s in ["", "c1", "c10100", "d1010a55016e6f6b6961"] {
        let data = hex::decode(s).unwrap();
        let mut records: Vec<Record> = Vec::new();

        let err = decode_reader(&mut data.as_slice(), &mut records).unwrap_err();
        assert!(matches!(err, Error::BufferUnderflow), "{s}: {err}");
        assert!(records.is_empty());
    }
}

#[test]
fn decode_reader_nesting_too_deep() {
    init();
    // Two Smart Posters around a URI record.
    let data = hex::decode("d102135370d1020e5370d1010a55016e6f6b69612e636f6d").unwrap();
    let config = Config::default().with_max_depth(1);

    let mut records: Vec<Record> = Vec::new();
    let err = decode_with(&mut data.as_slice(), &config, &mut records).unwrap_err();
    assert!(matches!(err, Error::NestingTooDeep { limit: 1 }));
    assert!(records.is_empty());
}
