//! Shell-like splitting of a single command string into arguments.
//!
//! Quoting rules:
//!
//! - a token that *starts* with `"` or `'` runs to the matching closing quote
//!   and may contain whitespace;
//! - inside a quoted token, a doubled quote (`""` or `''`) stands for one
//!   literal quote character;
//! - an unterminated quote is closed by the end of input;
//! - quote characters in the middle of an unquoted token are literal.
//!
//! There is no backslash escaping.

use std::iter::Peekable;
use std::str::Chars;

/// Scanner state between characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Between tokens, skipping whitespace.
    Start,
    /// Inside an unquoted token.
    Normal,
    /// Inside a token opened by the given quote character.
    Quoted(char),
}

/// Whitespace that separates tokens.
const fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

/// Lazy iterator over the tokens of a command string.
///
/// Produces one token per call to [`Iterator::next`]; the sequence is finite
/// and cannot be restarted.
///
/// # Examples
///
/// ```
/// use cluster_launcher::args::tokenizer::Tokens;
///
/// let tokens: Vec<String> = Tokens::new(r#""a b" c 'd e'"#).collect();
/// assert_eq!(tokens, ["a b", "c", "d e"]);
/// ```
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> Tokens<'a> {
    /// Start scanning `input`.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars().peekable(),
        }
    }
}

impl Iterator for Tokens<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let mut state = State::Start;
        let mut token = String::new();

        loop {
            match state {
                State::Start => match self.chars.peek().copied() {
                    None => return None,
                    Some(c) if is_separator(c) => {
                        self.chars.next();
                    }
                    Some(c @ ('"' | '\'')) => {
                        self.chars.next();
                        state = State::Quoted(c);
                    }
                    Some(_) => state = State::Normal,
                },
                State::Normal => match self.chars.peek().copied() {
                    None => return Some(token),
                    Some(c) if is_separator(c) => return Some(token),
                    Some(c) => {
                        self.chars.next();
                        token.push(c);
                    }
                },
                State::Quoted(quote) => match self.chars.next() {
                    None => return Some(token),
                    Some(c) if c == quote => {
                        if self.chars.next_if_eq(&quote).is_some() {
                            token.push(quote);
                        } else {
                            return Some(token);
                        }
                    }
                    Some(c) => token.push(c),
                },
            }
        }
    }
}

/// Split `input` into its tokens.
///
/// # Examples
///
/// ```
/// use cluster_launcher::args::tokenizer::tokenize;
///
/// assert_eq!(tokenize(r#""say ""hi""""#), [r#"say "hi""#]);
/// assert!(tokenize("   ").is_empty());
/// ```
#[must_use]
pub fn tokenize(input: &str) -> Vec<String> {
    Tokens::new(input).collect()
}

/// Render `token` so that [`tokenize`] reads it back unchanged.
///
/// Tokens without whitespace or leading quotes are returned as-is; anything
/// else is wrapped in `"` with inner `"` doubled.
#[must_use]
pub fn quote(token: &str) -> String {
    let needs_quotes = token.is_empty()
        || token.chars().any(is_separator)
        || token.starts_with(['"', '\'']);
    if needs_quotes {
        format!("\"{}\"", token.replace('"', "\"\""))
    } else {
        token.to_string()
    }
}

/// Render a token list as one command string, quoting where needed.
#[must_use]
pub fn join<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(|t| quote(t.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}
