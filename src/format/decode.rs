//! Legacy single-byte string decoding.
//!
//! Every embedded name in a HanDBase file is a NUL padded Windows-1252
//! string. This is the only module that names the code page, so an
//! alternate target encoding is a one-line substitution that leaves all
//! offset arithmetic untouched.

use encoding_rs::WINDOWS_1252;

use crate::error::{Error, Result};

/// Bytes with no assignment in cp1252. encoding_rs follows the WHATWG
/// mapping, which fills these with C1 controls instead of failing, so the
/// check has to happen here.
const CP1252_UNDEFINED: [u8; 5] = [0x81, 0x8d, 0x8f, 0x90, 0x9d];

/// Decode a NUL padded name window into a `String`.
///
/// The window is truncated at the first NUL byte. `field` names the window
/// in the error when the remaining bytes are not valid Windows-1252.
pub fn field_string(window: &[u8], field: &'static str) -> Result<String> {
    let end = window.iter().position(|&b| b == 0).unwrap_or(window.len());
    let raw = &window[..end];
    if raw.iter().any(|b| CP1252_UNDEFINED.contains(b)) {
        return Err(Error::Decode { field });
    }
    let (text, _, had_errors) = WINDOWS_1252.decode(raw);
    if had_errors {
        return Err(Error::Decode { field });
    }
    Ok(text.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncates_at_first_nul() {
        let window = b"Orders\x00garbage\x00after";
        assert_eq!(field_string(window, "table name").unwrap(), "Orders");
    }

    #[test]
    fn test_window_without_nul() {
        let window = b"Field 1 mmmmmmmmmmm";
        assert_eq!(
            field_string(window, "column name").unwrap(),
            "Field 1 mmmmmmmmmmm"
        );
    }

    #[test]
    fn test_decodes_western_accents() {
        // 0xe9 is e-acute in cp1252
        let window = b"Caf\xe9\x00\x00";
        assert_eq!(field_string(window, "column name").unwrap(), "Café");
    }

    #[test]
    fn test_euro_sign_is_cp1252_not_latin1() {
        // 0x80 maps to the euro sign in cp1252; latin-1 would give a control
        let window = b"\x80price\x00";
        assert_eq!(field_string(window, "column name").unwrap(), "€price");
    }

    #[test]
    fn test_undefined_byte_is_decode_error() {
        let window = b"bad\x81name\x00";
        let err = field_string(window, "column name").unwrap_err();
        assert!(matches!(err, Error::Decode { field: "column name" }));
    }

    #[test]
    fn test_undefined_byte_after_nul_is_ignored() {
        let window = b"ok\x00\x81\x81";
        assert_eq!(field_string(window, "column name").unwrap(), "ok");
    }
}
