//! Expression and text utilities for working with OXC AST

use oxc_ast::ast::Expression;
use oxc_codegen::{Codegen, CodegenOptions};

use crate::constants::XHTML_ENTITIES;

/// Convert an Expression AST node to its source code string
pub fn expr_to_string(expr: &Expression<'_>) -> String {
    let mut codegen = Codegen::new().with_options(CodegenOptions::default());
    codegen.print_expression(expr);
    codegen.into_source_text()
}

/// Characters scanned for the `;` closing a named reference
const ENTITY_SCAN_LIMIT: usize = 10;

/// Decode character references in raw JSX text or attribute strings.
///
/// Handles XHTML named references (`&amp;`, `&nbsp;`), decimal (`&#123;`)
/// and hex (`&#x7B;`) references. Anything that does not form a complete
/// reference keeps its `&` and is copied through unchanged.
pub fn decode_entities(raw: &str) -> String {
    if !raw.contains('&') {
        return raw.to_string();
    }

    let mut result = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(amp) = rest.find('&') {
        result.push_str(&rest[..amp]);
        let after = &rest[amp + 1..];
        match decode_entity(after) {
            Some((decoded, consumed)) => {
                result.push(decoded);
                rest = &after[consumed..];
            }
            None => {
                result.push('&');
                rest = after;
            }
        }
    }
    result.push_str(rest);
    result
}

/// Decode one reference following a `&`, returning the character and the
/// number of bytes consumed including the closing `;`
fn decode_entity(after: &str) -> Option<(char, usize)> {
    if let Some(numeric) = after.strip_prefix('#') {
        let (digits, radix, prefix_len) = match numeric.strip_prefix('x') {
            Some(hex) => (hex, 16, 2),
            None => (numeric, 10, 1),
        };
        let len = digits
            .find(|c: char| !c.is_digit(radix))
            .unwrap_or(digits.len());
        if len == 0 || !digits[len..].starts_with(';') {
            return None;
        }
        let code = u32::from_str_radix(&digits[..len], radix).ok()?;
        let decoded = char::from_u32(code)?;
        return Some((decoded, prefix_len + len + 1));
    }

    let semi = after
        .char_indices()
        .take(ENTITY_SCAN_LIMIT)
        .find(|(_, c)| *c == ';')
        .map(|(i, _)| i)?;
    let decoded = XHTML_ENTITIES.get(&after[..semi])?;
    Some((*decoded, semi + 1))
}

/// Split on every line ending style (`\r\n`, `\n`, `\r`)
fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }
    lines.push(&text[start..]);
    lines
}

/// Collapse JSX text into a single line of prose.
///
/// Tabs become spaces, the first line loses its leading spaces and the last
/// line its trailing spaces. Lines that end up empty are dropped, the rest are
/// concatenated as-is, and the last line holding any non-blank character gets
/// one extra space appended after it. An empty result means the text node
/// carries nothing and should be dropped.
pub fn normalize_text(text: &str) -> String {
    let lines = split_lines(text);

    let last_non_empty_line = lines
        .iter()
        .rposition(|line| line.chars().any(|c| c != ' ' && c != '\t'))
        .unwrap_or(0);
    let last_line = lines.len() - 1;

    let mut result = String::new();
    for (i, line) in lines.iter().enumerate() {
        let line = line.replace('\t', " ");
        let mut trimmed = line.as_str();

        if i == 0 {
            trimmed = trimmed.trim_start_matches(' ');
        }
        if i == last_line {
            trimmed = trimmed.trim_end_matches(' ');
        }

        if !trimmed.is_empty() {
            result.push_str(trimmed);
            if i == last_non_empty_line {
                result.push(' ');
            }
        }
    }

    result
}

/// Whitespace as JavaScript's `\s` class sees it
fn is_js_whitespace(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

/// Replace every newline followed by whitespace with a single space.
///
/// Removes the indentation left behind by attribute strings that were
/// wrapped over several lines.
pub fn collapse_attribute_whitespace(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\n' && chars.peek().is_some_and(|next| is_js_whitespace(*next)) {
            while chars.peek().is_some_and(|next| is_js_whitespace(*next)) {
                chars.next();
            }
            result.push(' ');
        } else {
            result.push(c);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_lines_all_styles() {
        assert_eq!(split_lines("a\nb\r\nc\rd"), vec!["a", "b", "c", "d"]);
        assert_eq!(split_lines("a\n"), vec!["a", ""]);
        assert_eq!(split_lines(""), vec![""]);
    }

    #[test]
    fn test_normalize_single_line() {
        // The only line is also the last non-empty one, so it keeps a trailing space
        assert_eq!(normalize_text("hello"), "hello ");
        assert_eq!(normalize_text("  hello  "), "hello ");
    }

    #[test]
    fn test_normalize_blank_text_is_empty() {
        assert_eq!(normalize_text(""), "");
        assert_eq!(normalize_text("   "), "");
        assert_eq!(normalize_text("\n    "), "");
        assert_eq!(normalize_text("\r\n\t"), "");
    }

    #[test]
    fn test_normalize_blank_interior_line_is_kept() {
        // Interior lines are never trimmed, so a blank one survives as spaces
        assert_eq!(normalize_text("\n    \n  "), "    ");
    }

    #[test]
    fn test_normalize_blank_outer_lines() {
        assert_eq!(normalize_text("\nhello world\n"), "hello world ");
    }

    #[test]
    fn test_normalize_interior_lines_keep_indentation() {
        // Only the first and the last line are trimmed
        assert_eq!(normalize_text("  \n  hello world  \n  "), "  hello world   ");
        assert_eq!(normalize_text("\n  hello\n  world\n"), "  hello  world ");
    }

    #[test]
    fn test_normalize_last_non_empty_is_final_line() {
        assert_eq!(normalize_text("hello\n  world  "), "hello  world ");
    }

    #[test]
    fn test_normalize_tabs_become_spaces() {
        assert_eq!(normalize_text("\tone\ttwo"), "one two ");
        assert_eq!(normalize_text("a\r\n\tb"), "a b ");
    }

    #[test]
    fn test_decode_named_entities() {
        assert_eq!(decode_entities("a &amp; b"), "a & b");
        assert_eq!(decode_entities("&lt;div&gt;"), "<div>");
        assert_eq!(decode_entities("x&nbsp;y"), "x\u{a0}y");
        assert_eq!(decode_entities("&apos;&quot;"), "'\"");
        assert_eq!(decode_entities("&hellip;&mdash;"), "\u{2026}\u{2014}");
    }

    #[test]
    fn test_decode_numeric_entities() {
        assert_eq!(decode_entities("&#123;&#125;"), "{}");
        assert_eq!(decode_entities("&#x7B;&#x7d;"), "{}");
        assert_eq!(decode_entities("&#x1F600;"), "\u{1F600}");
    }

    #[test]
    fn test_decode_keeps_incomplete_references() {
        assert_eq!(decode_entities("fish & chips"), "fish & chips");
        assert_eq!(decode_entities("&amp"), "&amp");
        assert_eq!(decode_entities("&bogus;"), "&bogus;");
        assert_eq!(decode_entities("&#;"), "&#;");
        assert_eq!(decode_entities("&#X41;"), "&#X41;");
        assert_eq!(decode_entities("&#xD800;"), "&#xD800;");
        assert_eq!(decode_entities("&&amp;"), "&&");
        assert_eq!(decode_entities("&verylongname;"), "&verylongname;");
    }

    #[test]
    fn test_collapse_attribute_whitespace() {
        assert_eq!(
            collapse_attribute_whitespace("btn\n          btn-primary\n          large"),
            "btn btn-primary large"
        );
        assert_eq!(collapse_attribute_whitespace("a\n\n   b"), "a b");
        assert_eq!(collapse_attribute_whitespace("a\nb"), "a\nb");
        assert_eq!(collapse_attribute_whitespace("trailing\n"), "trailing\n");
        assert_eq!(collapse_attribute_whitespace("plain"), "plain");
    }
}
