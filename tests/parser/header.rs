//! Integration tests for message splitting and header decoding

use turnscan_parser::{HeaderField, MessageHeader, decode_header, split_message};

#[test]
fn minefield_header() {
    let lines = split_message("(-m1234)<<< Mine Scan >>>\r\nbody");
    assert_eq!(decode_header(&lines, HeaderField::Kind), i32::from(b'm'));
    assert_eq!(decode_header(&lines, HeaderField::SubId), i32::from(b'1'));
    assert_eq!(decode_header(&lines, HeaderField::Id), 234);
    assert_eq!(decode_header(&lines, HeaderField::BigId), 1234);
    assert_eq!(decode_header(&lines, HeaderField::Age), 0);
}

#[test]
fn old_message_header() {
    let lines = split_message("(or3000)<<< Sub Space Message >>>");
    let header = MessageHeader::decode(&lines);
    assert_eq!(header.kind, 'r');
    assert_eq!(header.sub_id, '3');
    assert_eq!(header.id, 0);
    assert_eq!(header.big_id, 3000);
    assert_eq!(header.age, 1);
}

#[test]
fn non_numeric_sub_id_falls_back_to_id() {
    let header = MessageHeader::decode(&split_message("(-sa042)"));
    assert_eq!(header.sub_id, 'a');
    assert_eq!(header.id, 42);
    assert_eq!(header.big_id, 42);
}

#[test]
fn malformed_headers_decode_to_zero() {
    for text in ["", "(-m1", "<<< no header >>>", "[-m1234]"] {
        let header = MessageHeader::decode(&split_message(text));
        assert_eq!(header, MessageHeader::default(), "{text:?}");
        assert_eq!(header.field(HeaderField::Kind), 0);
    }
}

#[test]
fn mixed_line_endings() {
    let lines = split_message("a\r\nb\rc\nd");
    assert_eq!(lines, vec!["a", "b", "c", "d"]);
}
