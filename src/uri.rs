//! Percent-encoding of URI components, compatible with `android.net.Uri`.
//!
//! [`encode`] produces exactly what `Uri.encode(String)` produces on the
//! device, so a URL built here parses back into the same `Uri` the platform
//! would have built itself.

use std::borrow::Cow;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::errors::DecodeError;

/// Everything except ASCII letters, digits and `_-!.~'()*`, the set
/// `Uri.encode` leaves alone.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'-')
    .remove(b'!')
    .remove(b'.')
    .remove(b'~')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*');

/// Percent-encodes `input` as a single URI component.
///
/// Every byte of the UTF-8 encoding outside the unreserved set is written
/// as `%XX` with upper-case hex digits. Spaces become `%20`, never `+`.
pub fn encode(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// Decodes `%XX` escapes in `input`. Other characters, `+` included, are
/// copied through unchanged, as are `%` signs not followed by two hex digits.
pub fn decode(input: &str) -> Result<String, DecodeError> {
    Ok(percent_decode_str(input)
        .decode_utf8()
        .map(Cow::into_owned)?)
}
