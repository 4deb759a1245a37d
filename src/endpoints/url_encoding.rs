//! Percent-encoding for URL path segments.
//!
//! Form IDs and submission IDs are numeric, but property keys are free-form
//! strings interpolated into the path (`/form/{id}/properties/{key}`).
//! Encoding them keeps a key like `label width` or `a/b` from breaking the
//! path or leaking into the query.

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters percent-encoded in path segments: RFC 3986 path delimiters
/// plus characters that break URL parsing or invite double-decoding.
const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'%')
    .add(b'/')
    .add(b'\\')
    .add(b'?')
    .add(b'#')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for safe use as a URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}
