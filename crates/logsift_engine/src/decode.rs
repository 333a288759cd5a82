use std::borrow::Cow;

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};

/// Guess the text encoding of a log file from its first buffered chunk:
/// BOM first, chardetng detection otherwise, UTF-8 for empty input.
///
/// Returns the encoding and the number of BOM bytes to skip before the
/// first line.
pub fn sniff_encoding(head: &[u8]) -> (&'static Encoding, usize) {
    if let Some((encoding, bom_len)) = Encoding::for_bom(head) {
        return (encoding, bom_len);
    }
    if head.is_empty() {
        return (UTF_8, 0);
    }
    let mut detector = EncodingDetector::new();
    detector.feed(head, false);
    (detector.guess(None, true), 0)
}

/// Decode one raw line leniently: bytes the encoding cannot represent are
/// substituted, never fatal. A corrupt byte must not lose the rest of the
/// file.
pub fn decode_line<'a>(encoding: &'static Encoding, raw: &'a [u8]) -> Cow<'a, str> {
    let (text, _had_errors) = encoding.decode_without_bom_handling(raw);
    text
}
