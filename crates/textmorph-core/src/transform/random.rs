//! Randomized strategies
//!
//! All randomness comes from the generator handed to `transform`; seeding it
//! makes every strategy here reproducible.

use super::encoding::{Base64Encode, HtmlEntity, UnicodeEscape, Utf8Escape};
use super::{Transform, TransformResult};
use crate::classify::{is_cjk_basic, is_meaningless};
use crate::tables::{CHINESE_HOT_WORDS, EMOJIS, ENGLISH_HOT_WORDS, MAX_INSERTS, SPECIAL_SYMBOLS};
use rand::{Rng, RngCore};
use tracing::debug;

/// Stage pool of the nested transform
const STAGES: [&dyn Transform; 4] = [&UnicodeEscape, &Utf8Escape, &Base64Encode, &HtmlEntity];

/// Two escape encoders chosen at random and applied in sequence
#[derive(Debug, Clone, Copy, Default)]
pub struct Nested;

/// Emoji and special symbols sprinkled at random positions
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertSpecialCharacters;

/// A Chinese internet slang word spliced in after an alphanumeric character
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertChineseHotWords;

/// A Latin or digit slang word spliced in after a Chinese character
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertEnglishHotWords;

/// Draw the two stages of [`Nested`], independently and with replacement
pub fn select_stages(rng: &mut dyn RngCore) -> (&'static dyn Transform, &'static dyn Transform) {
    let first = STAGES[rng.gen_range(0..STAGES.len())];
    let second = STAGES[rng.gen_range(0..STAGES.len())];
    (first, second)
}

/// Splice a random word from `pool` after a random character matching `candidate`.
/// Input without any candidate is returned unchanged.
fn insert_hot_word(
    input: &str,
    pool: &[&str],
    candidate: impl Fn(char) -> bool,
    rng: &mut dyn RngCore,
) -> String {
    let candidates: Vec<usize> = input
        .char_indices()
        .filter(|(_, c)| candidate(*c))
        .map(|(i, c)| i + c.len_utf8())
        .collect();

    if candidates.is_empty() || pool.is_empty() {
        return input.to_string();
    }

    let at = candidates[rng.gen_range(0..candidates.len())];
    let word = pool[rng.gen_range(0..pool.len())];

    let mut output = String::with_capacity(input.len() + word.len());
    output.push_str(&input[..at]);
    output.push_str(word);
    output.push_str(&input[at..]);
    output
}

impl Transform for Nested {
    fn name(&self) -> &'static str {
        "nested"
    }

    fn validate(&self, input: &str) -> bool {
        !is_meaningless(input)
    }

    fn transform(&self, input: &str, rng: &mut dyn RngCore) -> TransformResult<String> {
        let (first, second) = select_stages(rng);
        debug!(first = first.name(), second = second.name(), "selected nested stages");

        let intermediate = first.transform(input, rng)?;
        second.transform(&intermediate, rng)
    }
}

impl Transform for InsertSpecialCharacters {
    fn name(&self) -> &'static str {
        "insert-special-characters"
    }

    fn validate(&self, input: &str) -> bool {
        !is_meaningless(input)
    }

    fn transform(&self, input: &str, rng: &mut dyn RngCore) -> TransformResult<String> {
        let mut sequence: Vec<&str> = input
            .char_indices()
            .map(|(i, c)| &input[i..i + c.len_utf8()])
            .collect();

        let pool_len = EMOJIS.len() + SPECIAL_SYMBOLS.len();
        let count = rng.gen_range(1..=MAX_INSERTS);
        for _ in 0..count {
            let position = rng.gen_range(0..=sequence.len());
            let pick = rng.gen_range(0..pool_len);
            let symbol = if pick < EMOJIS.len() {
                EMOJIS[pick]
            } else {
                SPECIAL_SYMBOLS[pick - EMOJIS.len()]
            };
            sequence.insert(position, symbol);
        }

        Ok(sequence.concat())
    }
}

impl Transform for InsertChineseHotWords {
    fn name(&self) -> &'static str {
        "insert-chinese-hot-words"
    }

    fn validate(&self, input: &str) -> bool {
        !is_meaningless(input)
    }

    fn transform(&self, input: &str, rng: &mut dyn RngCore) -> TransformResult<String> {
        Ok(insert_hot_word(input, CHINESE_HOT_WORDS, char::is_alphanumeric, rng))
    }
}

impl Transform for InsertEnglishHotWords {
    fn name(&self) -> &'static str {
        "insert-english-hot-words"
    }

    fn validate(&self, input: &str) -> bool {
        !is_meaningless(input)
    }

    fn transform(&self, input: &str, rng: &mut dyn RngCore) -> TransformResult<String> {
        Ok(insert_hot_word(input, ENGLISH_HOT_WORDS, is_cjk_basic, rng))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn seeded(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    fn is_pool_symbol(s: &str) -> bool {
        EMOJIS.contains(&s) || SPECIAL_SYMBOLS.contains(&s)
    }

    #[test]
    fn test_nested_is_reproducible_for_a_seed() {
        for seed in 0..16 {
            let a = Nested.transform("hello 世界", &mut seeded(seed)).unwrap();
            let b = Nested.transform("hello 世界", &mut seeded(seed)).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_nested_equals_composition_of_selected_stages() {
        for seed in 0..16 {
            let (first, second) = select_stages(&mut seeded(seed));
            let mut unused = seeded(0);
            let expected = second
                .transform(&first.transform("abc", &mut unused).unwrap(), &mut unused)
                .unwrap();
            assert_eq!(Nested.transform("abc", &mut seeded(seed)).unwrap(), expected);
        }
    }

    #[test]
    fn test_nested_covers_every_stage() {
        let mut seen = std::collections::HashSet::new();
        let mut rng = seeded(42);
        for _ in 0..200 {
            let (first, second) = select_stages(&mut rng);
            seen.insert(first.name());
            seen.insert(second.name());
        }
        assert_eq!(seen.len(), STAGES.len());
    }

    #[test]
    fn test_special_characters_preserve_original_order() {
        let input = "abcdef";
        for seed in 0..32 {
            let output = InsertSpecialCharacters
                .transform(input, &mut seeded(seed))
                .unwrap();
            let kept: String = output.chars().filter(|c| c.is_ascii_lowercase()).collect();
            assert_eq!(kept, input);
            assert!(output.chars().count() > input.chars().count());
        }
    }

    #[test]
    fn test_special_characters_insert_between_one_and_max() {
        let input = "中文";
        for seed in 0..32 {
            let output = InsertSpecialCharacters
                .transform(input, &mut seeded(seed))
                .unwrap();
            let mut rest = output.as_str();
            let mut inserted = 0;
            while !rest.is_empty() {
                if let Some(c) = ['中', '文'].iter().find(|c| rest.starts_with(**c)) {
                    rest = &rest[c.len_utf8()..];
                    continue;
                }
                let symbol = EMOJIS
                    .iter()
                    .chain(SPECIAL_SYMBOLS)
                    .filter(|s| rest.starts_with(**s))
                    .max_by_key(|s| s.len())
                    .unwrap();
                assert!(is_pool_symbol(symbol));
                rest = &rest[symbol.len()..];
                inserted += 1;
            }
            assert!((1..=MAX_INSERTS).contains(&inserted), "inserted {inserted}");
        }
    }

    #[test]
    fn test_chinese_hot_word_follows_alphanumeric() {
        for seed in 0..16 {
            let output = InsertChineseHotWords
                .transform("ab!", &mut seeded(seed))
                .unwrap();
            let word = CHINESE_HOT_WORDS
                .iter()
                .find(|w| output.contains(**w))
                .unwrap();
            let restored = output.replacen(word, "", 1);
            assert_eq!(restored, "ab!");
            assert!(!output.starts_with(word));
            assert!(!output.ends_with(&format!("!{word}")));
        }
    }

    #[test]
    fn test_hot_words_without_candidates_are_identity() {
        let mut rng = seeded(1);
        assert_eq!(InsertChineseHotWords.transform("!? ", &mut rng).unwrap(), "!? ");
        assert_eq!(InsertEnglishHotWords.transform("hello", &mut rng).unwrap(), "hello");
    }

    #[test]
    fn test_english_hot_word_follows_chinese() {
        for seed in 0..16 {
            let output = InsertEnglishHotWords
                .transform("a你", &mut seeded(seed))
                .unwrap();
            assert!(output.starts_with("a你"));
            let word = &output["a你".len()..];
            assert!(ENGLISH_HOT_WORDS.contains(&word));
        }
    }

    #[test]
    fn test_meaningless_input_rejected() {
        for t in [
            &Nested as &dyn Transform,
            &InsertSpecialCharacters,
            &InsertChineseHotWords,
            &InsertEnglishHotWords,
        ] {
            assert!(!t.validate(""));
            assert!(!t.validate("   "));
        }
    }
}
