//! Byte and character escape encoders

use super::{Transform, TransformResult};
use crate::classify::{is_common_ascii_text, is_meaningless};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use rand::RngCore;

/// Characters left untouched by [`UrlEncode`]: alphanumerics, `_ . - ~` and `/`
const URL_QUOTE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'/');

/// `0xHH` per ASCII character, space-joined; non-ASCII passes through
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiHex;

/// `\uXXXX` per character
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeEscape;

/// `\xHH` per UTF-8 byte
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8Escape;

/// Standard Base64 with padding
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64Encode;

/// Percent-encoding of everything outside the URL quote set
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlEncode;

/// `&#xHEX;` per character
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlEntity;

impl AsciiHex {
    pub fn encode(input: &str) -> String {
        input
            .chars()
            .map(|c| {
                if (c as u32) > 127 {
                    c.to_string()
                } else {
                    format!("0x{:02X}", c as u32)
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl UnicodeEscape {
    pub fn encode(input: &str) -> String {
        input
            .chars()
            .map(|c| format!("\\u{:04x}", c as u32))
            .collect()
    }
}

impl Utf8Escape {
    pub fn encode(input: &str) -> String {
        input.bytes().map(|b| format!("\\x{:02X}", b)).collect()
    }
}

impl Base64Encode {
    pub fn encode(input: &str) -> String {
        STANDARD.encode(input.as_bytes())
    }
}

impl UrlEncode {
    pub fn encode(input: &str) -> String {
        utf8_percent_encode(input, URL_QUOTE_SET).to_string()
    }
}

impl HtmlEntity {
    pub fn encode(input: &str) -> String {
        input.chars().map(|c| format!("&#x{:x};", c as u32)).collect()
    }
}

macro_rules! escape_transform {
    ($ty:ty, $name:literal, $validate:expr) => {
        impl Transform for $ty {
            fn name(&self) -> &'static str {
                $name
            }

            fn validate(&self, input: &str) -> bool {
                let validate: fn(&str) -> bool = $validate;
                validate(input)
            }

            fn transform(&self, input: &str, _rng: &mut dyn RngCore) -> TransformResult<String> {
                Ok(<$ty>::encode(input))
            }
        }
    };
}

escape_transform!(AsciiHex, "ascii-hex", |s| is_common_ascii_text(s) && !is_meaningless(s));
escape_transform!(UnicodeEscape, "unicode-escape", |s| !is_meaningless(s));
escape_transform!(Utf8Escape, "utf8-escape", |s| !is_meaningless(s));
escape_transform!(Base64Encode, "base64", |s| !is_meaningless(s));
escape_transform!(UrlEncode, "url-encode", |s| !is_meaningless(s));
escape_transform!(HtmlEntity, "html-entity", |s| !is_meaningless(s));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_hex() {
        assert_eq!(AsciiHex::encode("AB"), "0x41 0x42");
        assert_eq!(AsciiHex::encode("a b"), "0x61 0x20 0x62");
        assert_eq!(AsciiHex::encode("aé"), "0x61 é");
    }

    #[test]
    fn test_ascii_validation() {
        assert!(AsciiHex.validate("Hello, world!"));
        assert!(!AsciiHex.validate("   "));
        assert!(!AsciiHex.validate("héllo"));
    }

    #[test]
    fn test_unicode_escape() {
        assert_eq!(UnicodeEscape::encode("A"), "\\u0041");
        assert_eq!(UnicodeEscape::encode("中a"), "\\u4e2d\\u0061");
        assert_eq!(UnicodeEscape::encode("😀"), "\\u1f600");
    }

    #[test]
    fn test_utf8_escape() {
        assert_eq!(Utf8Escape::encode("A"), "\\x41");
        assert_eq!(Utf8Escape::encode("中"), "\\xE4\\xB8\\xAD");
    }

    #[test]
    fn test_base64() {
        assert_eq!(Base64Encode::encode("hi"), "aGk=");
        let decoded = STANDARD.decode(Base64Encode::encode("hi")).unwrap();
        assert_eq!(decoded, b"hi");
        assert_eq!(Base64Encode::encode("中文"), "5Lit5paH");
    }

    #[test]
    fn test_url_encode() {
        assert_eq!(UrlEncode::encode("a b/c?d=e"), "a%20b/c%3Fd%3De");
        assert_eq!(UrlEncode::encode("_.-~"), "_.-~");
        assert_eq!(UrlEncode::encode("中"), "%E4%B8%AD");
    }

    #[test]
    fn test_html_entity() {
        assert_eq!(HtmlEntity::encode("A"), "&#x41;");
        assert_eq!(HtmlEntity::encode("\n中"), "&#xa;&#x4e2d;");
    }

    #[test]
    fn test_meaningless_rejected() {
        for t in [
            &UnicodeEscape as &dyn Transform,
            &Utf8Escape,
            &Base64Encode,
            &UrlEncode,
            &HtmlEntity,
        ] {
            assert!(!t.validate(""));
            assert!(!t.validate(" \t"));
            assert!(t.validate("x"));
        }
    }
}
