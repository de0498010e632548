//! Shared utilities for command handlers

use crate::config::Config;
use crate::error::{Error, Result};
use std::io::{IsTerminal, Read};
use std::sync::Arc;
use textmorph_core::{ChatClient, OpenAiChatClient, TransformKind};
use tracing::debug;

/// Resolve a strategy name from the command line
pub fn parse_strategy(name: &str) -> Result<TransformKind> {
    name.parse::<TransformKind>()
        .map_err(|_| Error::UnknownStrategy {
            name: name.to_string(),
        })
}

/// The INPUT argument, or all of stdin when it is omitted
pub fn read_input(arg: Option<String>) -> Result<String> {
    let stdin = std::io::stdin();
    let interactive = stdin.is_terminal();
    read_input_from(arg, stdin.lock(), interactive)
}

fn read_input_from(arg: Option<String>, mut reader: impl Read, interactive: bool) -> Result<String> {
    if let Some(input) = arg {
        return Ok(input);
    }
    if interactive {
        return Err(Error::invalid_args(
            "no INPUT given; pass it as an argument or pipe it on stdin",
        ));
    }

    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    debug!(bytes = input.len(), "read input from stdin");

    // A single trailing newline comes from the shell, not the text
    if input.ends_with('\n') {
        input.pop();
        if input.ends_with('\r') {
            input.pop();
        }
    }
    Ok(input)
}

/// Chat client for the generative strategy, from the environment and config file
pub fn build_chat_client(config: &Config) -> Result<Arc<dyn ChatClient>> {
    let llm = config.llm_config()?;
    debug!(llm = ?llm, "building chat client");
    let client = OpenAiChatClient::new(llm)?;
    Ok(Arc::new(client))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strategy() {
        assert_eq!(parse_strategy("url-encode").unwrap(), TransformKind::UrlEncode);
        assert_eq!(parse_strategy("HTML_ENTITY").unwrap(), TransformKind::HtmlEntity);
        assert!(matches!(
            parse_strategy("rot13"),
            Err(Error::UnknownStrategy { name }) if name == "rot13"
        ));
    }

    #[test]
    fn test_argument_wins_over_stdin() {
        let input = read_input_from(Some("abc".to_string()), "ignored".as_bytes(), false).unwrap();
        assert_eq!(input, "abc");
    }

    #[test]
    fn test_stdin_drops_one_trailing_newline() {
        assert_eq!(read_input_from(None, "hello\n".as_bytes(), false).unwrap(), "hello");
        assert_eq!(read_input_from(None, "hello\r\n".as_bytes(), false).unwrap(), "hello");
        assert_eq!(read_input_from(None, "a\n\n".as_bytes(), false).unwrap(), "a\n");
        assert_eq!(read_input_from(None, "你好".as_bytes(), false).unwrap(), "你好");
    }

    #[test]
    fn test_terminal_without_input_is_an_error() {
        let err = read_input_from(None, "".as_bytes(), true).unwrap_err();
        assert!(matches!(err, Error::InvalidArgs(_)));
    }
}
