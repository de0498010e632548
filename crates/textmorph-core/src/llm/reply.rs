//! Tolerant parsing of model replies that should contain a JSON object
//!
//! Models wrap JSON in prose or code fences, use full-width punctuation,
//! single quotes, comments, trailing commas, type annotations such as
//! `list[...]`, or stop before closing every bracket. [`parse_lenient`]
//! locates the JSON block and, when strict parsing fails, repairs it.

use serde_json::Value;

/// Parse the JSON object or array embedded in `reply`
///
/// Returns `None` when the reply holds no `{` or `[` or when the block cannot
/// be repaired into valid JSON.
pub fn parse_lenient(reply: &str) -> Option<Value> {
    let block = extract_json_block(reply)?;
    if let Ok(value) = serde_json::from_str(block) {
        return Some(value);
    }
    serde_json::from_str(&repair(block)).ok()
}

/// The JSON-looking part of `reply`, preferring a fenced code block
pub fn extract_json_block(reply: &str) -> Option<&str> {
    let content = match reply.find("```") {
        Some(start) => {
            let after = &reply[start + 3..];
            // Skip an info string such as `json`
            let body = after.find('\n').map_or(after, |nl| &after[nl + 1..]);
            body.find("```").map_or(body, |end| &body[..end])
        }
        None => reply,
    };

    let (start, end) = find_json_bounds(content)?;
    Some(&content[start..end])
}

/// Start and end byte offsets of the first bracketed block
///
/// Brackets inside string literals are ignored. An unterminated block runs to
/// the end of the text.
pub fn find_json_bounds(text: &str) -> Option<(usize, usize)> {
    let start = text.find(|c: char| c == '{' || c == '[')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, c) in text[start..].char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' | '[' => depth += 1,
            '}' | ']' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some((start, start + i + 1));
                }
            }
            _ => {}
        }
    }
    Some((start, text.len()))
}

fn closing_quote(open: char) -> Option<char> {
    match open {
        '"' => Some('"'),
        '\'' => Some('\''),
        '“' => Some('”'),
        '‘' => Some('’'),
        _ => None,
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | '+' | '.')
}

struct Repairer<'a> {
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    text: &'a str,
    out: String,
    stack: Vec<char>,
    /// The last token emitted completes a value
    after_value: bool,
}

impl<'a> Repairer<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            chars: text.char_indices().peekable(),
            text,
            out: String::with_capacity(text.len() + 8),
            stack: Vec::new(),
            after_value: false,
        }
    }

    /// Insert a comma when a new value directly follows a complete one
    fn begin_value(&mut self) {
        if self.after_value && !self.stack.is_empty() {
            self.out.push(',');
        }
        self.after_value = false;
    }

    fn trim_trailing_comma(&mut self) {
        let trimmed = self.out.trim_end().len();
        self.out.truncate(trimmed);
        if self.out.ends_with(',') {
            self.out.pop();
        }
    }

    fn close(&mut self, open: char) {
        self.trim_trailing_comma();
        self.out.push(if open == '{' { '}' } else { ']' });
        self.after_value = true;
    }

    fn next_significant(&mut self) -> Option<char> {
        while let Some((_, c)) = self.chars.peek().copied() {
            if c.is_whitespace() {
                self.chars.next();
            } else {
                return Some(c);
            }
        }
        None
    }

    fn string(&mut self, close: char) {
        self.begin_value();
        self.out.push('"');
        let mut escaped = false;
        for (_, c) in self.chars.by_ref() {
            if escaped {
                self.out.push(c);
                escaped = false;
                continue;
            }
            match c {
                '\\' => {
                    self.out.push('\\');
                    escaped = true;
                }
                c if c == close => {
                    self.out.push('"');
                    self.after_value = true;
                    return;
                }
                '"' => self.out.push_str("\\\""),
                '\n' => self.out.push_str("\\n"),
                '\r' => self.out.push_str("\\r"),
                '\t' => self.out.push_str("\\t"),
                c => self.out.push(c),
            }
        }
        // Unterminated
        if escaped {
            self.out.pop();
        }
        self.out.push('"');
        self.after_value = true;
    }

    fn comment(&mut self) {
        match self.chars.peek().map(|(_, c)| *c) {
            Some('/') => {
                for (_, c) in self.chars.by_ref() {
                    if c == '\n' {
                        break;
                    }
                }
            }
            Some('*') => {
                self.chars.next();
                let mut star = false;
                for (_, c) in self.chars.by_ref() {
                    if star && c == '/' {
                        break;
                    }
                    star = c == '*';
                }
            }
            _ => {}
        }
    }

    fn word(&mut self, start: usize) {
        let text = self.text;
        let mut end = text.len();
        while let Some((i, c)) = self.chars.peek().copied() {
            if is_word_char(c) {
                self.chars.next();
            } else {
                end = i;
                break;
            }
        }
        let word = &text[start..end];

        let literal = match word {
            "true" | "True" => Some("true"),
            "false" | "False" => Some("false"),
            "null" | "None" => Some("null"),
            _ => None,
        };
        let is_number = word.starts_with(|c: char| c.is_ascii_digit() || c == '-')
            && word.parse::<f64>().is_ok();

        match self.next_significant() {
            // Unquoted key
            Some(':') | Some('：') if literal.is_none() && !is_number => {
                self.begin_value();
                self.out.push('"');
                self.out.push_str(word);
                self.out.push('"');
                self.after_value = true;
            }
            // Type annotation such as `list[...]`
            Some('[') | Some('{') | Some('(') if literal.is_none() && !is_number => {}
            _ => {
                self.begin_value();
                match literal {
                    Some(literal) => self.out.push_str(literal),
                    None if is_number => self.out.push_str(word),
                    None => {
                        self.out.push('"');
                        self.out.push_str(&word.replace('"', "\\\""));
                        self.out.push('"');
                    }
                }
                self.after_value = true;
            }
        }
    }

    fn run(mut self) -> String {
        while let Some((i, c)) = self.chars.next() {
            match c {
                '{' | '[' => {
                    self.begin_value();
                    self.out.push(c);
                    self.stack.push(c);
                }
                '}' | ']' => {
                    let open = if c == '}' { '{' } else { '[' };
                    if self.stack.contains(&open) {
                        while let Some(top) = self.stack.pop() {
                            self.close(top);
                            if top == open {
                                break;
                            }
                        }
                    }
                }
                ':' | '：' => {
                    self.out.push(':');
                    self.after_value = false;
                }
                ',' | '，' => {
                    self.trim_trailing_comma();
                    self.out.push(',');
                    self.after_value = false;
                }
                '/' => self.comment(),
                c if c.is_whitespace() => {}
                c => match closing_quote(c) {
                    Some(close) => self.string(close),
                    None if is_word_char(c) => self.word(i),
                    None => {}
                },
            }
        }

        self.trim_trailing_comma();
        while let Some(open) = self.stack.pop() {
            self.close(open);
        }
        self.out
    }
}

/// Rewrite almost-JSON into JSON
pub fn repair(text: &str) -> String {
    Repairer::new(text).run()
}
