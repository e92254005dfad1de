//! Markup normalization.
//!
//! Confluence storage format is XHTML-flavored markup; summaries only need
//! the text. There is deliberately no DOM parsing here — tags are replaced
//! wholesale and a minimal entity set is decoded, which is all the prompt
//! pipeline requires.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Tag-like substrings, opening `<` through closing `>`. `[^>]` also
    /// matches newlines, so tags split across lines are covered.
    static ref TAG_PATTERN: Regex = Regex::new(r"<[^>]+>").unwrap();
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
    static ref INLINE_WHITESPACE: Regex = Regex::new(r"[ \t]+").unwrap();
}

/// Normalize raw markup into a flat text stream.
///
/// Replaces every tag with a space, decodes the minimal HTML entity set,
/// collapses all whitespace runs (including newlines) to a single space,
/// and trims. Total and idempotent on tag-free input.
pub fn normalize(raw: &str) -> String {
    let without_tags = TAG_PATTERN.replace_all(raw, " ");
    let decoded = decode_entities(&without_tags);
    WHITESPACE_RUN.replace_all(&decoded, " ").trim().to_string()
}

/// Normalize raw markup while preserving line structure.
///
/// Same tag stripping and entity decoding as [`normalize`], but whitespace
/// is only collapsed within each line so header/body structure survives
/// for segmentation.
pub fn normalize_lines(raw: &str) -> String {
    let without_tags = TAG_PATTERN.replace_all(raw, " ");
    let decoded = decode_entities(&without_tags);

    decoded
        .lines()
        .map(|line| INLINE_WHITESPACE.replace_all(line.trim(), " ").into_owned())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Decode the minimal HTML entity set.
fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_tags_and_collapses_whitespace() {
        assert_eq!(normalize("<p>A</p>\n\n<b>B</b>"), "A B");
    }

    #[test]
    fn test_decodes_entities() {
        assert_eq!(normalize("A&nbsp;&amp;&nbsp;B &quot;C&#39;s&quot;"), "A & B \"C's\"");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "<p>A</p>\n\n<b>B</b>",
            "  lots   of\t\twhitespace \n here ",
            "plain text",
            "",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn test_empty_and_tag_only_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("<br/><hr/>"), "");
    }

    #[test]
    fn test_tag_spanning_lines() {
        assert_eq!(normalize("<a\nhref=\"x\">link</a>"), "link");
    }

    #[test]
    fn test_normalize_lines_keeps_structure() {
        let raw = "# Intro\nHello   world\n\n# Setup\n<b>Run</b> the installer";
        let lines = normalize_lines(raw);
        assert_eq!(lines, "# Intro\nHello world\n\n# Setup\nRun the installer");
    }
}
