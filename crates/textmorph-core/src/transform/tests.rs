//! Contract tests across the whole catalog

use super::*;
use crate::error::{Error, TransformError, INVALID_INPUT_MESSAGE};
use crate::llm::{ChatClient, ChatMessage};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

struct Offline;

impl ChatClient for Offline {
    fn complete(&self, _messages: &[ChatMessage]) -> anyhow::Result<String> {
        anyhow::bail!("offline")
    }
}

struct Replying(&'static str);

impl ChatClient for Replying {
    fn complete(&self, _messages: &[ChatMessage]) -> anyhow::Result<String> {
        Ok(self.0.to_string())
    }
}

fn build(kind: TransformKind) -> Box<dyn Transform> {
    let client: Arc<dyn ChatClient> = Arc::new(Offline);
    build_transform(kind, Some(client)).unwrap()
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(2024)
}

/// Strategies whose validation includes the non-empty, non-whitespace check
fn rejects_blank(kind: TransformKind) -> bool {
    !matches!(kind, TransformKind::Morse | TransformKind::Braille)
}

#[test]
fn test_blank_input_is_invalid() {
    for kind in TransformKind::ALL.into_iter().filter(|k| rejects_blank(*k)) {
        let strategy = build(kind);
        for input in ["", "   ", "\t\n"] {
            let err = apply(strategy.as_ref(), input, &mut rng()).unwrap_err();
            assert!(err.is_invalid_input(), "{kind} accepted {input:?}");
            assert_eq!(err.to_string(), INVALID_INPUT_MESSAGE);
        }
    }
}

#[test]
fn test_ascii_only_scripts_accept_whitespace() {
    let morse = build(TransformKind::Morse);
    assert_eq!(apply(morse.as_ref(), " ", &mut rng()).unwrap(), " ");
    let braille = build(TransformKind::Braille);
    assert_eq!(apply(braille.as_ref(), " ", &mut rng()).unwrap(), "⠀");
    assert!(apply(braille.as_ref(), "", &mut rng()).unwrap_err().is_invalid_input());
}

#[test]
fn test_invalid_input_names_strategy() {
    let err = apply(&numeral::BinaryEncode, "abc", &mut rng()).unwrap_err();
    match err {
        Error::InvalidInput { strategy, message } => {
            assert_eq!(strategy, "binary");
            assert_eq!(message, "Invalid input data");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_documented_examples() {
    let cases = [
        (TransformKind::Binary, "123", "0001 0010 0011"),
        (TransformKind::Hexadecimal, "255", "ff"),
        (TransformKind::AsciiHex, "AB", "0x41 0x42"),
        (TransformKind::UnicodeEscape, "A", "\\u0041"),
        (TransformKind::Base64, "hi", "aGk="),
        (TransformKind::HtmlEntity, "<", "&#x3c;"),
        (TransformKind::UrlEncode, "a b", "a%20b"),
        (TransformKind::Utf8Escape, "é", "\\xC3\\xA9"),
        (TransformKind::TextInversion, "abc", "cba"),
        (TransformKind::NumeralCapitalization, "2024", "贰零贰肆"),
    ];
    for (kind, input, expected) in cases {
        let output = apply(build(kind).as_ref(), input, &mut rng()).unwrap();
        assert_eq!(output, expected, "{kind}");
    }
}

#[test]
fn test_deterministic_strategies_ignore_the_seed() {
    for kind in TransformKind::ALL
        .into_iter()
        .filter(|k| !k.is_randomized() && !k.requires_llm())
    {
        let strategy = build(kind);
        let input = match kind.family() {
            TransformFamily::Numeral => "9075",
            _ if kind == TransformKind::AsciiHex
                || kind == TransformKind::Morse
                || kind == TransformKind::Braille =>
            {
                "Hello 42"
            }
            _ => "你好 Hello 42",
        };
        let a = apply(strategy.as_ref(), input, &mut StdRng::seed_from_u64(1));
        let b = apply(strategy.as_ref(), input, &mut StdRng::seed_from_u64(99));
        assert_eq!(a.unwrap(), b.unwrap(), "{kind}");
    }
}

#[test]
fn test_randomized_strategies_reproducible_with_seed() {
    for kind in TransformKind::ALL.into_iter().filter(|k| k.is_randomized()) {
        let strategy = build(kind);
        let a = apply(strategy.as_ref(), "你好 world", &mut StdRng::seed_from_u64(5)).unwrap();
        let b = apply(strategy.as_ref(), "你好 world", &mut StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(a, b, "{kind}");
    }
}

#[test]
fn test_generative_failure_returns_sentinel() {
    let strategy = build(TransformKind::AcrosticPoem);
    assert_eq!(apply(strategy.as_ref(), "Hope", &mut rng()).unwrap(), "$error$");
}

#[test]
fn test_missing_sentences_is_transformation_failure() {
    let client: Arc<dyn ChatClient> = Arc::new(Replying(r#"{"split_characters_in_order": ["H"]}"#));
    let strategy = build_transform(TransformKind::AcrosticPoem, Some(client)).unwrap();

    let err = apply(strategy.as_ref(), "Hope", &mut rng()).unwrap_err();
    assert!(err.is_missing_field());
    assert_eq!(
        err.to_string(),
        "Error occurred during transformation: 'sentences' not found in the response."
    );
    match err {
        Error::TransformationFailure { strategy, source } => {
            assert_eq!(strategy, "acrostic-poem");
            assert!(matches!(source, TransformError::MissingField { .. }));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_source_chain_is_preserved() {
    let client: Arc<dyn ChatClient> = Arc::new(Replying(r#"{"sentences": [1]}"#));
    let strategy = build_transform(TransformKind::AcrosticPoem, Some(client)).unwrap();
    let err = apply(strategy.as_ref(), "Hi", &mut rng()).unwrap_err();

    let source = std::error::Error::source(&err).expect("cause kept");
    assert!(source.to_string().contains("sentences"));
}

#[test]
fn test_apply_with_thread_rng() {
    let output = apply_with_thread_rng(&encoding::Base64Encode, "hi").unwrap();
    assert_eq!(output, "aGk=");
}
