//! Character-set classification predicates
//!
//! Pure functions over the character content of a string. Every strategy's
//! validation step is built from these; nothing here is cached.

use regex::Regex;
use std::sync::OnceLock;

static COMMON_ASCII_REGEX: OnceLock<Regex> = OnceLock::new();
static DECIMAL_DIGIT_REGEX: OnceLock<Regex> = OnceLock::new();

/// Language of the characters an acrostic is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Chinese,
    English,
}

impl Language {
    /// Short language code used in prompts and logs
    pub fn code(self) -> &'static str {
        match self {
            Language::Chinese => "zh",
            Language::English => "en",
        }
    }

    /// `zh` when the text holds any basic-range Chinese character, else `en`
    pub fn detect(text: &str) -> Self {
        if contains_chinese(text) {
            Language::Chinese
        } else {
            Language::English
        }
    }
}

/// Empty or whitespace-only
pub fn is_meaningless(text: &str) -> bool {
    text.trim().is_empty()
}

/// Characters outside `Nd` that still carry a single digit value: superscripts,
/// subscripts, circled and parenthesized digits and a few historic scripts
const DIGIT_VALUED_RANGES: &[(char, char)] = &[
    ('\u{00b2}', '\u{00b3}'),
    ('\u{00b9}', '\u{00b9}'),
    ('\u{1369}', '\u{1371}'),
    ('\u{19da}', '\u{19da}'),
    ('\u{2070}', '\u{2070}'),
    ('\u{2074}', '\u{2079}'),
    ('\u{2080}', '\u{2089}'),
    ('\u{2460}', '\u{2468}'),
    ('\u{2474}', '\u{247c}'),
    ('\u{2488}', '\u{2490}'),
    ('\u{24ea}', '\u{24ea}'),
    ('\u{24f5}', '\u{24fd}'),
    ('\u{24ff}', '\u{24ff}'),
    ('\u{2776}', '\u{277e}'),
    ('\u{2780}', '\u{2788}'),
    ('\u{278a}', '\u{2792}'),
    ('\u{10a40}', '\u{10a43}'),
    ('\u{10e60}', '\u{10e68}'),
    ('\u{11052}', '\u{1105a}'),
    ('\u{1f100}', '\u{1f10a}'),
];

/// Unicode decimal digit (general category `Nd`), any script
pub fn is_decimal_digit(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_digit();
    }
    let regex = DECIMAL_DIGIT_REGEX
        .get_or_init(|| Regex::new(r"^\p{Nd}$").expect("decimal digit pattern is valid"));
    regex.is_match(c.encode_utf8(&mut [0; 4]))
}

/// Value of a decimal digit in any script. `None` for everything outside `Nd`.
///
/// `Nd` code points come in contiguous blocks of ten running 0 to 9, so the
/// value is the number of `Nd` code points directly before `c`, modulo ten.
pub fn decimal_digit_value(c: char) -> Option<u32> {
    if c.is_ascii() {
        return c.to_digit(10);
    }
    if !is_decimal_digit(c) {
        return None;
    }
    let mut preceding = 0;
    let mut cp = c as u32;
    while let Some(prev) = cp.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        preceding += 1;
        cp = prev as u32;
    }
    Some(preceding % 10)
}

/// A digit in the broad sense: any decimal digit plus digit-valued forms such
/// as `²` or `①`. Fractions and Roman numerals are not digits.
pub fn is_digit_char(c: char) -> bool {
    is_decimal_digit(c)
        || DIGIT_VALUED_RANGES
            .iter()
            .any(|(start, end)| (*start..=*end).contains(&c))
}

/// Every character is a digit. Vacuously true for the empty string.
pub fn is_all_digits(text: &str) -> bool {
    text.chars().all(is_digit_char)
}

pub fn contains_digit(text: &str) -> bool {
    text.chars().any(is_digit_char)
}

/// Basic Chinese range U+4E00..=U+9FA5
pub fn is_basic_chinese(c: char) -> bool {
    ('\u{4e00}'..='\u{9fa5}').contains(&c)
}

pub fn contains_chinese(text: &str) -> bool {
    text.chars().any(is_basic_chinese)
}

pub fn is_all_chinese(text: &str) -> bool {
    text.chars().all(is_basic_chinese)
}

/// CJK unified ideographs plus extensions A, B-F and G
pub fn is_chinese_char(c: char) -> bool {
    matches!(
        c as u32,
        0x4E00..=0x9FFF | 0x3400..=0x4DBF | 0x20000..=0x2A6DF | 0x2A700..=0x2B73F
    )
}

/// Full CJK unified block U+4E00..=U+9FFF
pub fn is_cjk_basic(c: char) -> bool {
    ('\u{4e00}'..='\u{9fff}').contains(&c)
}

/// ASCII Latin letters only
pub fn is_english_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

pub fn contains_english(text: &str) -> bool {
    text.chars().any(is_english_letter)
}

pub fn contains_chinese_or_english(text: &str) -> bool {
    text.chars().any(|c| is_basic_chinese(c) || is_english_letter(c))
}

/// Whole-string match against letters, digits, whitespace and common ASCII punctuation.
/// The empty string does not match.
pub fn is_common_ascii_text(text: &str) -> bool {
    let regex = COMMON_ASCII_REGEX.get_or_init(|| {
        Regex::new(r#"^[a-zA-Z0-9\s.,;:!?'"\-_@#$%&*()+=<>\[\]{}/\\|~`]+$"#)
            .expect("allow-list pattern is valid")
    });
    regex.is_match(text)
}

/// Characters relevant to `language`, in order, duplicates kept
pub fn extract_language_chars(text: &str, language: Language) -> Vec<char> {
    match language {
        Language::Chinese => text.chars().filter(|c| is_basic_chinese(*c)).collect(),
        Language::English => text.chars().filter(|c| is_english_letter(*c)).collect(),
    }
}
