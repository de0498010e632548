//! Strategy catalog
//!
//! [`TransformKind`] names every strategy by a stable kebab-case identifier;
//! [`build_transform`] turns a kind into a ready-to-use instance.

use super::acrostic::AcrosticPoem;
use super::encoding::{AsciiHex, Base64Encode, HtmlEntity, UnicodeEscape, UrlEncode, Utf8Escape};
use super::numeral::{BinaryEncode, HexadecimalEncode, OctalEncode};
use super::random::{InsertChineseHotWords, InsertEnglishHotWords, InsertSpecialCharacters, Nested};
use super::script::{
    BrailleCode, CharacterDecomposition, MartianText, MorseCode, NumeralCapitalization,
    SimplifiedToTraditional, TextInversion,
};
use super::Transform;
use crate::error::{Error, Result};
use crate::llm::ChatClient;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Broad grouping used for listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransformFamily {
    /// Digit runs re-encoded in another base
    Numeral,
    /// Byte or character escapes
    Encoding,
    /// Table-driven script changes and reversal
    Script,
    /// Random insertions and compositions
    Randomized,
    /// Output written by a chat model
    Generative,
}

impl TransformFamily {
    pub fn as_str(self) -> &'static str {
        match self {
            TransformFamily::Numeral => "numeral",
            TransformFamily::Encoding => "encoding",
            TransformFamily::Script => "script",
            TransformFamily::Randomized => "randomized",
            TransformFamily::Generative => "generative",
        }
    }
}

impl fmt::Display for TransformFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every available strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransformKind {
    Binary,
    Octal,
    Hexadecimal,
    AsciiHex,
    UnicodeEscape,
    #[serde(rename = "utf8-escape")]
    Utf8Escape,
    Base64,
    UrlEncode,
    HtmlEntity,
    Morse,
    Braille,
    CharacterDecomposition,
    SimplifiedToTraditional,
    NumeralCapitalization,
    MartianText,
    TextInversion,
    Nested,
    InsertSpecialCharacters,
    InsertChineseHotWords,
    InsertEnglishHotWords,
    AcrosticPoem,
}

impl TransformKind {
    /// All kinds in listing order
    pub const ALL: [TransformKind; 21] = [
        TransformKind::Binary,
        TransformKind::Octal,
        TransformKind::Hexadecimal,
        TransformKind::AsciiHex,
        TransformKind::UnicodeEscape,
        TransformKind::Utf8Escape,
        TransformKind::Base64,
        TransformKind::UrlEncode,
        TransformKind::HtmlEntity,
        TransformKind::Morse,
        TransformKind::Braille,
        TransformKind::CharacterDecomposition,
        TransformKind::SimplifiedToTraditional,
        TransformKind::NumeralCapitalization,
        TransformKind::MartianText,
        TransformKind::TextInversion,
        TransformKind::Nested,
        TransformKind::InsertSpecialCharacters,
        TransformKind::InsertChineseHotWords,
        TransformKind::InsertEnglishHotWords,
        TransformKind::AcrosticPoem,
    ];

    /// Stable kebab-case name, identical to the strategy's [`Transform::name`]
    pub fn name(self) -> &'static str {
        match self {
            TransformKind::Binary => "binary",
            TransformKind::Octal => "octal",
            TransformKind::Hexadecimal => "hexadecimal",
            TransformKind::AsciiHex => "ascii-hex",
            TransformKind::UnicodeEscape => "unicode-escape",
            TransformKind::Utf8Escape => "utf8-escape",
            TransformKind::Base64 => "base64",
            TransformKind::UrlEncode => "url-encode",
            TransformKind::HtmlEntity => "html-entity",
            TransformKind::Morse => "morse",
            TransformKind::Braille => "braille",
            TransformKind::CharacterDecomposition => "character-decomposition",
            TransformKind::SimplifiedToTraditional => "simplified-to-traditional",
            TransformKind::NumeralCapitalization => "numeral-capitalization",
            TransformKind::MartianText => "martian-text",
            TransformKind::TextInversion => "text-inversion",
            TransformKind::Nested => "nested",
            TransformKind::InsertSpecialCharacters => "insert-special-characters",
            TransformKind::InsertChineseHotWords => "insert-chinese-hot-words",
            TransformKind::InsertEnglishHotWords => "insert-english-hot-words",
            TransformKind::AcrosticPoem => "acrostic-poem",
        }
    }

    pub fn family(self) -> TransformFamily {
        match self {
            TransformKind::Binary | TransformKind::Octal | TransformKind::Hexadecimal => {
                TransformFamily::Numeral
            }
            TransformKind::AsciiHex
            | TransformKind::UnicodeEscape
            | TransformKind::Utf8Escape
            | TransformKind::Base64
            | TransformKind::UrlEncode
            | TransformKind::HtmlEntity => TransformFamily::Encoding,
            TransformKind::Morse
            | TransformKind::Braille
            | TransformKind::CharacterDecomposition
            | TransformKind::SimplifiedToTraditional
            | TransformKind::NumeralCapitalization
            | TransformKind::MartianText
            | TransformKind::TextInversion => TransformFamily::Script,
            TransformKind::Nested
            | TransformKind::InsertSpecialCharacters
            | TransformKind::InsertChineseHotWords
            | TransformKind::InsertEnglishHotWords => TransformFamily::Randomized,
            TransformKind::AcrosticPoem => TransformFamily::Generative,
        }
    }

    /// Output depends on the random source
    pub fn is_randomized(self) -> bool {
        self.family() == TransformFamily::Randomized
    }

    /// Building this kind needs a [`ChatClient`]
    pub fn requires_llm(self) -> bool {
        self == TransformKind::AcrosticPoem
    }

    /// Run only the validation predicate of this kind
    ///
    /// Needs no chat client, so it also answers for [`TransformKind::AcrosticPoem`].
    pub fn accepts(self, input: &str) -> bool {
        match self {
            TransformKind::AcrosticPoem => AcrosticPoem::accepts(input),
            kind => build_transform(kind, None).map_or(false, |t| t.validate(input)),
        }
    }

    /// One-line human description
    pub fn description(self) -> &'static str {
        match self {
            TransformKind::Binary => "Each digit as a 4-bit binary group",
            TransformKind::Octal => "Each digit in octal",
            TransformKind::Hexadecimal => "Each digit run as one hexadecimal number",
            TransformKind::AsciiHex => "ASCII characters as 0xHH codes",
            TransformKind::UnicodeEscape => "Every character as \\uXXXX",
            TransformKind::Utf8Escape => "Every UTF-8 byte as \\xHH",
            TransformKind::Base64 => "Standard Base64 of the UTF-8 bytes",
            TransformKind::UrlEncode => "Percent-encoding",
            TransformKind::HtmlEntity => "Numeric HTML entities",
            TransformKind::Morse => "International Morse code",
            TransformKind::Braille => "Grade 1 Braille",
            TransformKind::CharacterDecomposition => "Chinese characters split into components",
            TransformKind::SimplifiedToTraditional => "Simplified to traditional Chinese",
            TransformKind::NumeralCapitalization => "Digits as financial Chinese numerals",
            TransformKind::MartianText => "Look-alike character substitutions",
            TransformKind::TextInversion => "Text reversed by code point",
            TransformKind::Nested => "Two random escape encoders in sequence",
            TransformKind::InsertSpecialCharacters => "Random emoji and symbols inserted",
            TransformKind::InsertChineseHotWords => "A Chinese slang word inserted",
            TransformKind::InsertEnglishHotWords => "A Latin slang word inserted",
            TransformKind::AcrosticPoem => "Acrostic poem written by a chat model",
        }
    }
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TransformKind {
    type Err = Error;

    /// Case-insensitive; `_` is accepted in place of `-`
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        TransformKind::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized)
            .ok_or_else(|| Error::Unsupported {
                message: format!("Unknown strategy '{}'", s),
                feature: Some("strategy".to_string()),
            })
    }
}

/// Build the strategy for `kind`
///
/// `client` is only consulted for kinds where [`TransformKind::requires_llm`]
/// holds; building one of those without a client is a configuration error.
pub fn build_transform(
    kind: TransformKind,
    client: Option<Arc<dyn ChatClient>>,
) -> Result<Box<dyn Transform>> {
    let transform: Box<dyn Transform> = match kind {
        TransformKind::Binary => Box::new(BinaryEncode),
        TransformKind::Octal => Box::new(OctalEncode),
        TransformKind::Hexadecimal => Box::new(HexadecimalEncode),
        TransformKind::AsciiHex => Box::new(AsciiHex),
        TransformKind::UnicodeEscape => Box::new(UnicodeEscape),
        TransformKind::Utf8Escape => Box::new(Utf8Escape),
        TransformKind::Base64 => Box::new(Base64Encode),
        TransformKind::UrlEncode => Box::new(UrlEncode),
        TransformKind::HtmlEntity => Box::new(HtmlEntity),
        TransformKind::Morse => Box::new(MorseCode),
        TransformKind::Braille => Box::new(BrailleCode),
        TransformKind::CharacterDecomposition => Box::new(CharacterDecomposition),
        TransformKind::SimplifiedToTraditional => Box::new(SimplifiedToTraditional),
        TransformKind::NumeralCapitalization => Box::new(NumeralCapitalization),
        TransformKind::MartianText => Box::new(MartianText),
        TransformKind::TextInversion => Box::new(TextInversion),
        TransformKind::Nested => Box::new(Nested),
        TransformKind::InsertSpecialCharacters => Box::new(InsertSpecialCharacters),
        TransformKind::InsertChineseHotWords => Box::new(InsertChineseHotWords),
        TransformKind::InsertEnglishHotWords => Box::new(InsertEnglishHotWords),
        TransformKind::AcrosticPoem => {
            let client = client.ok_or_else(|| {
                Error::configuration(format!("Strategy '{}' needs a chat client", kind))
            })?;
            Box::new(AcrosticPoem::new(client))
        }
    };
    Ok(transform)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    struct Silent;

    impl ChatClient for Silent {
        fn complete(&self, _messages: &[crate::llm::ChatMessage]) -> anyhow::Result<String> {
            anyhow::bail!("offline")
        }
    }

    #[test]
    fn test_names_are_unique_and_match_instances() {
        let client: Arc<dyn ChatClient> = Arc::new(Silent);
        let mut names = HashSet::new();
        for kind in TransformKind::ALL {
            assert!(names.insert(kind.name()));
            let transform = build_transform(kind, Some(client.clone())).unwrap();
            assert_eq!(transform.name(), kind.name());
        }
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("base64".parse::<TransformKind>().unwrap(), TransformKind::Base64);
        assert_eq!(
            "Insert_Special_Characters".parse::<TransformKind>().unwrap(),
            TransformKind::InsertSpecialCharacters
        );
        let err = "rot13".parse::<TransformKind>().unwrap_err();
        assert!(matches!(err, Error::Unsupported { .. }));
    }

    #[test]
    fn test_serde_uses_kebab_names() {
        for kind in TransformKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.name()));
            let back: TransformKind = serde_json::from_str(&json).unwrap();
            assert_eq!(back, kind);
        }
    }

    #[test]
    fn test_acrostic_needs_client() {
        match build_transform(TransformKind::AcrosticPoem, None) {
            Err(err) => assert!(matches!(err, Error::Configuration { .. })),
            Ok(_) => panic!("acrostic-poem built without a chat client"),
        }
        assert!(build_transform(TransformKind::Morse, None).is_ok());
    }

    #[test]
    fn test_accepts_without_client() {
        assert!(TransformKind::AcrosticPoem.accepts("希望"));
        assert!(!TransformKind::AcrosticPoem.accepts("123 !!"));
        assert!(TransformKind::Binary.accepts("42"));
        assert!(!TransformKind::Binary.accepts("forty-two"));
    }

    #[test]
    fn test_families() {
        assert_eq!(TransformKind::Hexadecimal.family(), TransformFamily::Numeral);
        assert!(TransformKind::Nested.is_randomized());
        assert!(!TransformKind::Base64.is_randomized());
        assert!(TransformKind::AcrosticPoem.requires_llm());
        assert_eq!(
            TransformKind::ALL.iter().filter(|k| k.requires_llm()).count(),
            1
        );
    }
}
