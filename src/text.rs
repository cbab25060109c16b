//! Tolerant decoding of project source files.
//!
//! Old Xcode projects routinely contain Latin-1 or Mac Roman text. Valid
//! UTF-8 is used as-is; anything else is decoded as ISO-8859-1, which maps
//! every byte to exactly one character and therefore never fails.

use std::borrow::Cow;

/// Decodes `bytes` as UTF-8, falling back to ISO-8859-1.
pub fn decode_source(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(_) => Cow::Owned(bytes.iter().copied().map(char::from).collect()),
    }
}
