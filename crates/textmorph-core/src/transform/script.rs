//! Table-driven script substitutions and code-point reversal

use super::{Transform, TransformResult};
use crate::classify::{
    contains_chinese, contains_digit, is_chinese_char, is_common_ascii_text, is_english_letter,
    is_meaningless,
};
use crate::tables::{
    letter_to_leet, CharTable, BRAILLE, DECOMPOSITION, DIGIT_LEET, DIGIT_TO_CHINESE_NUMERAL, MORSE,
    SIMPLIFIED_LEET, SIMPLIFIED_TO_TRADITIONAL, TRADITIONAL_LEET,
};
use rand::RngCore;

/// International Morse code, one code per character
#[derive(Debug, Clone, Copy, Default)]
pub struct MorseCode;

/// Grade 1 Braille cells
#[derive(Debug, Clone, Copy, Default)]
pub struct BrailleCode;

/// Chinese characters split into their components
#[derive(Debug, Clone, Copy, Default)]
pub struct CharacterDecomposition;

#[derive(Debug, Clone, Copy, Default)]
pub struct SimplifiedToTraditional;

/// Arabic digits to financial Chinese numerals (`1` → `壹`)
#[derive(Debug, Clone, Copy, Default)]
pub struct NumeralCapitalization;

/// "Martian text": look-alike substitutions for Chinese, Latin letters and digits
#[derive(Debug, Clone, Copy, Default)]
pub struct MartianText;

/// Reverses the input by code point
///
/// Combining marks and multi-code-point emoji are not kept together.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextInversion;

/// Upper-case form of `c` when it is a single character
fn upper(c: char) -> Option<char> {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => Some(u),
        _ => None,
    }
}

fn lookup_upper(table: &CharTable, c: char) -> Option<&'static str> {
    upper(c).and_then(|u| table.get(u))
}

/// Replace each character found in `table`, keep the rest
fn substitute(input: &str, table: &CharTable) -> String {
    input
        .chars()
        .map(|c| match table.get(c) {
            Some(replacement) => replacement.to_string(),
            None => c.to_string(),
        })
        .collect()
}

impl MorseCode {
    pub fn encode(input: &str) -> String {
        input
            .chars()
            .map(|c| lookup_upper(&MORSE, c).unwrap_or(" "))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl BrailleCode {
    pub fn encode(input: &str) -> String {
        input
            .chars()
            .filter_map(|c| lookup_upper(&BRAILLE, c))
            .collect()
    }
}

impl SimplifiedToTraditional {
    pub fn convert(input: &str) -> String {
        input
            .chars()
            .map(|c| {
                if is_chinese_char(c) {
                    SIMPLIFIED_TO_TRADITIONAL.get(c).map(str::to_string)
                } else {
                    None
                }
                .unwrap_or_else(|| c.to_string())
            })
            .collect()
    }
}

impl MartianText {
    fn substitute_char(c: char) -> Option<&'static str> {
        if is_chinese_char(c) {
            SIMPLIFIED_LEET.get(c).or_else(|| TRADITIONAL_LEET.get(c))
        } else if is_english_letter(c) {
            letter_to_leet(c)
        } else if c.is_ascii_digit() {
            DIGIT_LEET.get(c)
        } else {
            None
        }
    }

    pub fn convert(input: &str) -> String {
        input
            .chars()
            .map(|c| match Self::substitute_char(c) {
                Some(replacement) => replacement.to_string(),
                None => c.to_string(),
            })
            .collect()
    }
}

impl Transform for MorseCode {
    fn name(&self) -> &'static str {
        "morse"
    }

    fn validate(&self, input: &str) -> bool {
        is_common_ascii_text(input)
    }

    fn transform(&self, input: &str, _rng: &mut dyn RngCore) -> TransformResult<String> {
        Ok(Self::encode(input))
    }
}

impl Transform for BrailleCode {
    fn name(&self) -> &'static str {
        "braille"
    }

    fn validate(&self, input: &str) -> bool {
        is_common_ascii_text(input)
    }

    fn transform(&self, input: &str, _rng: &mut dyn RngCore) -> TransformResult<String> {
        Ok(Self::encode(input))
    }
}

impl Transform for CharacterDecomposition {
    fn name(&self) -> &'static str {
        "character-decomposition"
    }

    fn validate(&self, input: &str) -> bool {
        contains_chinese(input)
    }

    fn transform(&self, input: &str, _rng: &mut dyn RngCore) -> TransformResult<String> {
        Ok(substitute(input, &DECOMPOSITION))
    }
}

impl Transform for SimplifiedToTraditional {
    fn name(&self) -> &'static str {
        "simplified-to-traditional"
    }

    fn validate(&self, input: &str) -> bool {
        contains_chinese(input)
    }

    fn transform(&self, input: &str, _rng: &mut dyn RngCore) -> TransformResult<String> {
        Ok(Self::convert(input))
    }
}

impl Transform for NumeralCapitalization {
    fn name(&self) -> &'static str {
        "numeral-capitalization"
    }

    fn validate(&self, input: &str) -> bool {
        contains_digit(input)
    }

    fn transform(&self, input: &str, _rng: &mut dyn RngCore) -> TransformResult<String> {
        Ok(substitute(input, &DIGIT_TO_CHINESE_NUMERAL))
    }
}

impl Transform for MartianText {
    fn name(&self) -> &'static str {
        "martian-text"
    }

    fn validate(&self, input: &str) -> bool {
        !is_meaningless(input)
    }

    fn transform(&self, input: &str, _rng: &mut dyn RngCore) -> TransformResult<String> {
        Ok(Self::convert(input))
    }
}

impl Transform for TextInversion {
    fn name(&self) -> &'static str {
        "text-inversion"
    }

    fn validate(&self, input: &str) -> bool {
        !is_meaningless(input)
    }

    fn transform(&self, input: &str, _rng: &mut dyn RngCore) -> TransformResult<String> {
        Ok(input.chars().rev().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    fn run(t: &dyn Transform, input: &str) -> String {
        t.transform(input, &mut StepRng::new(0, 1)).unwrap()
    }

    #[test]
    fn test_morse() {
        assert_eq!(MorseCode::encode("SOS"), "... --- ...");
        assert_eq!(MorseCode::encode("sos"), "... --- ...");
        // Space is unmapped and becomes a blank code between separators
        assert_eq!(MorseCode::encode("a b"), ".-   -...");
    }

    #[test]
    fn test_morse_accepts_whitespace_only() {
        assert!(MorseCode.validate("   "));
        assert!(!MorseCode.validate(""));
        assert!(!MorseCode.validate("你好"));
        assert_eq!(run(&MorseCode, "  "), "   ");
    }

    #[test]
    fn test_braille() {
        assert_eq!(BrailleCode::encode("ab"), "⠁⠃");
        assert_eq!(BrailleCode::encode("A 1"), "⠁⠀⠼⠁");
        // `^` has no cell and is dropped
        assert_eq!(BrailleCode::encode("a^b"), "⠁⠃");
    }

    #[test]
    fn test_decomposition() {
        assert_eq!(run(&CharacterDecomposition, "好明"), "女子日月");
        assert_eq!(run(&CharacterDecomposition, "好 day"), "女子 day");
        assert!(!CharacterDecomposition.validate("hello"));
    }

    #[test]
    fn test_identity_without_table_keys() {
        assert_eq!(run(&CharacterDecomposition, "丁"), "丁");
        assert_eq!(run(&SimplifiedToTraditional, "丁一"), "丁一");
    }

    #[test]
    fn test_simplified_to_traditional() {
        assert_eq!(run(&SimplifiedToTraditional, "国语 ok"), "國語 ok");
        assert!(SimplifiedToTraditional.validate("a国"));
        assert!(!SimplifiedToTraditional.validate("abc"));
    }

    #[test]
    fn test_numeral_capitalization() {
        assert_eq!(run(&NumeralCapitalization, "第10名"), "第壹零名");
        assert!(NumeralCapitalization.validate("x1"));
        assert!(!NumeralCapitalization.validate("none"));
        assert!(!NumeralCapitalization.validate("½ Ⅷ"));
    }

    #[test]
    fn test_martian_priority() {
        assert_eq!(MartianText::convert("你好"), "伱恏");
        assert_eq!(MartianText::convert("們"), "扪");
        assert_eq!(MartianText::convert("丁"), "丁");
        assert_eq!(MartianText::convert("Eat"), "347");
        assert_eq!(MartianText::convert("q"), "q");
        assert_eq!(MartianText::convert("1!"), "⒈!");
    }

    #[test]
    fn test_inversion() {
        assert_eq!(run(&TextInversion, "abc"), "cba");
        assert_eq!(run(&TextInversion, "你好!"), "!好你");
        assert!(!TextInversion.validate("\n"));
    }
}
