//! Encoding detection and transcoding.
//!
//! Raw bytes are turned into UTF-8 text before they reach the loader:
//!
//! 1. A Byte Order Mark, if present, picks the encoding and is stripped.
//! 2. Otherwise the `encoding=` pseudo-attribute of the XML declaration is
//!    read from the ASCII-compatible prefix of the input.
//! 3. With neither, the input must already be UTF-8.
//!
//! A declaration naming a different encoding than the BOM wins, except that a
//! plain `UTF-16` declaration never overrides a UTF-16 BOM's byte order.
//! Conversion goes through `encoding_rs`.

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};
use tracing::debug;

use crate::error::EncodingError;

/// How far into the input the XML declaration is looked for.
const DECL_SCAN_LIMIT: usize = 256;

/// Detects the encoding of an XML byte stream by inspecting the Byte Order Mark.
///
/// Returns the encoding label and the number of BOM bytes to skip. Input
/// without a BOM reports UTF-8 and zero.
///
/// # Examples
///
/// ```
/// use xmlx::encoding::detect_encoding;
///
/// assert_eq!(detect_encoding(b"\xEF\xBB\xBFhello"), ("UTF-8", 3));
/// assert_eq!(detect_encoding(b"\xFF\xFE<\x00"), ("UTF-16LE", 2));
/// assert_eq!(detect_encoding(b"<root/>"), ("UTF-8", 0));
/// ```
#[must_use]
pub fn detect_encoding(bytes: &[u8]) -> (&'static str, usize) {
    match Encoding::for_bom(bytes) {
        Some((encoding, skip)) => (encoding.name(), skip),
        None => (UTF_8.name(), 0),
    }
}

/// Transcodes a byte slice from the named encoding into a UTF-8 `String`.
///
/// # Errors
///
/// Returns `EncodingError` if the label is unknown to `encoding_rs` or the
/// bytes are malformed for that encoding.
///
/// # Examples
///
/// ```
/// use xmlx::encoding::transcode;
///
/// assert_eq!(transcode(b"caf\xE9", "ISO-8859-1").unwrap(), "caf\u{e9}");
/// ```
pub fn transcode(bytes: &[u8], label: &str) -> Result<String, EncodingError> {
    let encoding = Encoding::for_label(label.as_bytes())
        .ok_or_else(|| EncodingError::new(format!("unsupported encoding: {label}")))?;
    decode_with(bytes, encoding)
}

/// Decodes raw XML bytes into UTF-8 text, detecting the encoding.
///
/// # Errors
///
/// Returns `EncodingError` if the declared encoding is unknown, or the bytes
/// are not valid in the detected encoding.
pub fn decode_to_utf8(bytes: &[u8]) -> Result<String, EncodingError> {
    let bom = Encoding::for_bom(bytes);
    let (bom_encoding, content) = match bom {
        Some((encoding, skip)) => (Some(encoding), &bytes[skip..]),
        None => (None, bytes),
    };

    let declared = match bom_encoding {
        // The declaration of a UTF-16 document is itself UTF-16 and cannot be
        // read as ASCII; decode first, then look.
        Some(enc) if enc == UTF_16LE || enc == UTF_16BE => {
            let text = decode_with(content, enc)?;
            match declared_label(text.as_bytes()) {
                Some(label) if !label.eq_ignore_ascii_case("UTF-16") => {
                    Some(lookup(&label)?).filter(|&d| d != enc)
                }
                _ => return Ok(text),
            }
        }
        _ => match declared_label(content) {
            Some(label) => Some(lookup(&label)?),
            None => None,
        },
    };

    let encoding = declared.or(bom_encoding).unwrap_or(UTF_8);
    if encoding == UTF_8 {
        return std::str::from_utf8(content)
            .map(str::to_owned)
            .map_err(|_| EncodingError::new("input is not valid UTF-8"));
    }

    debug!(encoding = encoding.name(), bytes = content.len(), "transcoding input");
    decode_with(content, encoding)
}

fn lookup(label: &str) -> Result<&'static Encoding, EncodingError> {
    Encoding::for_label(label.as_bytes())
        .ok_or_else(|| EncodingError::new(format!("unsupported encoding: {label}")))
}

fn decode_with(bytes: &[u8], encoding: &'static Encoding) -> Result<String, EncodingError> {
    let (text, had_errors) = encoding.decode_without_bom_handling(bytes);
    if had_errors {
        return Err(EncodingError::new(format!(
            "malformed byte sequence for encoding {}",
            encoding.name()
        )));
    }
    Ok(text.into_owned())
}

/// Reads the `encoding` value of a leading XML declaration.
///
/// The declaration is ASCII by definition, so the scan works on bytes and
/// does not require the rest of the input to be valid in any encoding.
fn declared_label(bytes: &[u8]) -> Option<String> {
    let scan = &bytes[..bytes.len().min(DECL_SCAN_LIMIT)];
    if !scan.starts_with(b"<?xml") {
        return None;
    }
    let decl = &scan[..scan.windows(2).position(|w| w == b"?>")?];

    let needle = b"encoding";
    let at = decl.windows(needle.len()).position(|w| w == needle)?;
    let rest = decl[at + needle.len()..].trim_ascii_start();
    let rest = rest.strip_prefix(b"=")?.trim_ascii_start();

    let (&quote, rest) = rest.split_first()?;
    if quote != b'"' && quote != b'\'' {
        return None;
    }
    let label = &rest[..rest.iter().position(|&b| b == quote)?];
    if label.is_empty() || !label.is_ascii() {
        return None;
    }
    Some(String::from_utf8_lossy(label).into_owned())
}
