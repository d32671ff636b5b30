//! Genre field parser.
//!
//! The titles source stores genres as a bracketed list of quoted strings,
//! e.g. `['drama', 'romance']`, written the way Python's `repr` writes it
//! (optional `u`/`r` prefixes, `\x`/`\u`/`\U`/octal escapes). This module
//! accepts exactly that shape and nothing else: numbers, mappings, tuples, bare words and truncated input
//! all come back as an empty list. Parsing never fails loudly.

use std::iter::Peekable;
use std::str::Chars;

/// Ordered, trimmed genre labels for one title.
pub type GenreList = Vec<String>;

/// Parse a raw genre field into its labels.
///
/// Absent or malformed input yields an empty list. Labels keep their
/// original order and have surrounding whitespace trimmed; empty labels
/// are kept (enumeration drops them, membership never matches them).
pub fn parse_genres(raw: Option<&str>) -> GenreList {
    raw.and_then(parse_list).unwrap_or_default()
}

fn parse_list(raw: &str) -> Option<GenreList> {
    let mut chars = raw.chars().peekable();

    skip_whitespace(&mut chars);
    if chars.next()? != '[' {
        return None;
    }

    let mut items = Vec::new();
    loop {
        skip_whitespace(&mut chars);
        match chars.next()? {
            ']' => break,
            first => {
                let (quote, raw) = read_prefix(&mut chars, first)?;
                let item = read_quoted(&mut chars, quote, raw)?;
                items.push(item.trim().to_string());
            }
        }

        skip_whitespace(&mut chars);
        match chars.next()? {
            // A trailing comma before ']' is legal, so loop back and let the
            // top of the loop see the bracket.
            ',' => continue,
            ']' => break,
            _ => return None,
        }
    }

    skip_whitespace(&mut chars);
    if chars.next().is_some() {
        return None;
    }

    Some(items)
}

/// Resolve an optional `u`/`r` string prefix to `(quote, raw)`.
/// `first` is the character that opened the element.
fn read_prefix(chars: &mut Peekable<Chars<'_>>, first: char) -> Option<(char, bool)> {
    let (quote, raw) = match first {
        '\'' | '"' => return Some((first, false)),
        'u' | 'U' => (chars.next()?, false),
        'r' | 'R' => (chars.next()?, true),
        _ => return None,
    };
    matches!(quote, '\'' | '"').then_some((quote, raw))
}

/// Read a quoted literal whose opening quote has already been consumed.
///
/// In raw literals a backslash only protects the following character and
/// is kept along with it.
fn read_quoted(chars: &mut Peekable<Chars<'_>>, quote: char, raw: bool) -> Option<String> {
    let mut out = String::new();
    loop {
        match chars.next()? {
            c if c == quote => return Some(out),
            '\n' | '\r' => return None,
            '\\' if raw => {
                out.push('\\');
                match chars.next()? {
                    '\n' | '\r' => return None,
                    c => out.push(c),
                }
            }
            '\\' => read_escape(chars, &mut out)?,
            c => out.push(c),
        }
    }
}

/// Decode one escape sequence after its backslash. Unknown escapes are kept
/// verbatim; malformed numeric escapes reject the whole field.
fn read_escape(chars: &mut Peekable<Chars<'_>>, out: &mut String) -> Option<()> {
    match chars.next()? {
        'n' => out.push('\n'),
        't' => out.push('\t'),
        'r' => out.push('\r'),
        'a' => out.push('\u{07}'),
        'b' => out.push('\u{08}'),
        'f' => out.push('\u{0C}'),
        'v' => out.push('\u{0B}'),
        'x' => out.push(read_hex(chars, 2)?),
        'u' => out.push(read_hex(chars, 4)?),
        'U' => out.push(read_hex(chars, 8)?),
        d @ '0'..='7' => {
            let mut value = d.to_digit(8)?;
            for _ in 0..2 {
                match chars.next_if(|c| c.is_digit(8)) {
                    Some(c) => value = value * 8 + c.to_digit(8)?,
                    None => break,
                }
            }
            out.push(char::from_u32(value)?);
        }
        c @ ('\\' | '\'' | '"') => out.push(c),
        other => {
            out.push('\\');
            out.push(other);
        }
    }
    Some(())
}

fn read_hex(chars: &mut Peekable<Chars<'_>>, digits: usize) -> Option<char> {
    let mut value = 0u32;
    for _ in 0..digits {
        value = value * 16 + chars.next()?.to_digit(16)?;
    }
    char::from_u32(value)
}

fn skip_whitespace(chars: &mut Peekable<Chars<'_>>) {
    while chars.next_if(|c| c.is_whitespace()).is_some() {}
}

#[cfg(test)]
#[path = "tests/genre_tests.rs"]
mod tests;
