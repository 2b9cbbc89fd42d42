//! Tolerant HTML tokenizer.
//!
//! Splits raw markup into open tags, close tags, comments, and text runs.
//! Anything that fails to lex is skipped, never surfaced: the import path
//! is best-effort extraction, not faithful parsing.

use logos::Logos;

#[derive(Logos, Debug, Clone, PartialEq)]
pub enum RawToken<'src> {
    /// `<!-- ... -->`
    #[regex(r"<!--([^-]|-[^-]|--[^>])*-->", priority = 4)]
    Comment,

    /// `<!DOCTYPE html>` and friends
    #[regex(r"<![^>]*>", priority = 3)]
    Doctype,

    /// `</div>`
    #[regex(r"</[a-zA-Z][a-zA-Z0-9-]*[^>]*>", |lex| lex.slice())]
    CloseTag(&'src str),

    /// `<div class="x">`, `<img src=... />`
    #[regex(r"<[a-zA-Z][a-zA-Z0-9-]*[^>]*>", |lex| lex.slice())]
    OpenTag(&'src str),

    /// Run of character data between tags.
    #[regex(r"[^<]+", |lex| lex.slice())]
    Text(&'src str),

    /// A `<` that never became a tag; treated as literal text.
    #[token("<")]
    Stray,
}

/// Lexed view of one tag, name lowercased, attributes in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub self_closing: bool,
}

/// Parse the inside of an open-tag token (`<name attrs...>`).
pub fn parse_open_tag(raw: &str) -> Tag {
    let inner = raw
        .trim_start_matches('<')
        .trim_end_matches('>')
        .trim_end();
    let self_closing = inner.ends_with('/');
    let inner = inner.trim_end_matches('/').trim_end();

    let name_end = inner
        .find(|c: char| c.is_whitespace())
        .unwrap_or(inner.len());
    let name = inner[..name_end].to_ascii_lowercase();
    let attributes = parse_attributes(&inner[name_end..]);

    Tag {
        name,
        attributes,
        self_closing,
    }
}

/// Tag name of a close-tag token (`</name>`).
pub fn parse_close_tag(raw: &str) -> String {
    raw.trim_start_matches("</")
        .trim_end_matches('>')
        .trim()
        .to_ascii_lowercase()
}

/// Attribute scanner tolerant of quoted, unquoted, and bare attributes.
fn parse_attributes(input: &str) -> Vec<(String, String)> {
    let mut attributes = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if c.is_whitespace() {
            continue;
        }

        // attribute name
        let mut name_end = start + c.len_utf8();
        while let Some((i, c)) = chars.peek().copied() {
            if c.is_whitespace() || c == '=' {
                break;
            }
            chars.next();
            name_end = i + c.len_utf8();
        }
        let name = input[start..name_end].to_ascii_lowercase();

        // skip whitespace before a possible '='
        while matches!(chars.peek(), Some((_, c)) if c.is_whitespace()) {
            chars.next();
        }

        if !matches!(chars.peek(), Some((_, '='))) {
            attributes.push((name, String::new()));
            continue;
        }
        chars.next(); // consume '='
        while matches!(chars.peek(), Some((_, c)) if c.is_whitespace()) {
            chars.next();
        }

        let value = match chars.peek().copied() {
            Some((value_start, quote)) if quote == '"' || quote == '\'' => {
                chars.next();
                let mut end = value_start + 1;
                for (i, c) in chars.by_ref() {
                    if c == quote {
                        end = i;
                        break;
                    }
                    end = i + c.len_utf8();
                }
                input[value_start + 1..end].to_string()
            }
            Some((value_start, _)) => {
                let mut end = value_start;
                while let Some((i, c)) = chars.peek().copied() {
                    if c.is_whitespace() {
                        break;
                    }
                    chars.next();
                    end = i + c.len_utf8();
                }
                input[value_start..end].to_string()
            }
            None => String::new(),
        };

        attributes.push((name, value));
    }

    attributes
}

impl Tag {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}
