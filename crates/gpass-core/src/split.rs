//! # Payload Splitting
//!
//! A certificate QR code carries `<base64 signature>#<json payload>`. The
//! first `#` is the split point; any later `#` bytes belong to the payload.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use crate::error::MalformedInput;

/// The byte separating the signature segment from the payload.
pub const DELIMITER: u8 = b'#';

/// A decoded signature together with a borrowed view of the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedPayload<'a> {
    /// Base64-decoded signature bytes. Opaque until a verifier parses them.
    pub signature: Vec<u8>,
    /// Everything after the first delimiter, byte for byte.
    pub payload: &'a [u8],
}

/// Split raw certificate bytes into signature and payload.
///
/// The signature segment is decoded with the standard base64 alphabet.
/// ASCII whitespace inside it (line breaks from MIME-style wrapping) is
/// ignored; any other non-alphabet byte or bad padding is rejected.
///
/// # Errors
///
/// - [`MalformedInput::MissingDelimiter`] if `raw` contains no `#`.
/// - [`MalformedInput::SignatureEncoding`] if the prefix is not base64.
pub fn split(raw: &[u8]) -> Result<SignedPayload<'_>, MalformedInput> {
    let pos = raw
        .iter()
        .position(|&b| b == DELIMITER)
        .ok_or(MalformedInput::MissingDelimiter)?;
    let (sig_b64, rest) = raw.split_at(pos);

    let compact: Vec<u8> = sig_b64
        .iter()
        .copied()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    let signature = BASE64.decode(compact)?;

    Ok(SignedPayload {
        signature,
        payload: &rest[1..],
    })
}
