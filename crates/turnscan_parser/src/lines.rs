//! Message line source and header decoding.
//!
//! Host messages start with a header line such as `(-m1234)<<< Mine Scan >>>`.
//! The parenthesized part encodes the message age, kind and the Id of the
//! object the message is about:
//!
//! ```text
//! ( - m 1234 )
//!   │ │ └┬─┘
//!   │ │  └── rest: first char is the sub-id, the remainder is the Id,
//!   │ │            the whole of it is the "big" Id
//!   │ └───── kind
//!   └─────── age: 'o' for old messages
//! ```

/// Splits message text into lines.
///
/// Accepts `\n`, `\r\n` and `\r` line endings. Always returns at least one
/// (possibly empty) line.
#[must_use]
pub fn split_message(text: &str) -> Vec<String> {
    text.replace("\r\n", "\n")
        .split(['\n', '\r'])
        .map(String::from)
        .collect()
}

/// A field of the message header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderField {
    /// Message kind character.
    Kind,
    /// Sub-id character.
    SubId,
    /// Numeric Id following the sub-id.
    Id,
    /// Numeric Id including the sub-id.
    BigId,
    /// 1 for old messages, 0 otherwise.
    Age,
}

/// Decoded message header.
///
/// A missing or malformed header decodes to all-zero fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MessageHeader {
    /// Message kind character (`'\0'` if absent).
    pub kind: char,
    /// Sub-id character (`'\0'` if absent).
    pub sub_id: char,
    /// Numeric Id following the sub-id.
    pub id: i32,
    /// Numeric Id including the sub-id, or `id` if that is not numeric.
    pub big_id: i32,
    /// 1 for old messages, 0 otherwise.
    pub age: i32,
}

impl MessageHeader {
    /// Decodes the header from the first line of a message.
    #[must_use]
    pub fn decode(lines: &[String]) -> Self {
        let Some(first) = lines.first() else {
            return Self::default();
        };
        let chars: Vec<char> = first.chars().collect();
        if chars.len() < 5 || chars[0] != '(' {
            return Self::default();
        }

        let rest: String = chars[3..].iter().take_while(|&&c| c != ')').collect();
        let mut rest_chars = rest.chars();
        let sub_id = rest_chars.next().unwrap_or('\0');
        let id = parse_unsigned(rest_chars.as_str()).unwrap_or(0);
        let big_id = parse_unsigned(&rest).unwrap_or(id);

        Self {
            kind: chars[2],
            sub_id,
            id,
            big_id,
            age: i32::from(chars[1] == 'o'),
        }
    }

    /// Returns a single field as an integer; characters yield their code point.
    #[must_use]
    pub fn field(&self, field: HeaderField) -> i32 {
        match field {
            HeaderField::Kind => char_code(self.kind),
            HeaderField::SubId => char_code(self.sub_id),
            HeaderField::Id => self.id,
            HeaderField::BigId => self.big_id,
            HeaderField::Age => self.age,
        }
    }
}

/// Decodes one header field from the first line of a message.
#[must_use]
pub fn decode_header(lines: &[String], field: HeaderField) -> i32 {
    MessageHeader::decode(lines).field(field)
}

fn char_code(c: char) -> i32 {
    i32::try_from(u32::from(c)).unwrap_or(0)
}

fn parse_unsigned(text: &str) -> Option<i32> {
    let text = text.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}
