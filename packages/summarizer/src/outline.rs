//! Header-structure segmentation.
//!
//! Walks document text line by line and builds an ordered outline of
//! header/body associations. Real documents mix several header notations
//! (markdown `#`, numbered `01.` prefixes, `라벨: 설명` lines, bullets,
//! setext underlines), so detection is an ordered rule cascade: the first
//! rule that matches a line wins, and the order encodes precedence.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

/// Section name of the degraded whole-content outline.
pub const WHOLE_CONTENT_SECTION: &str = "전체 내용";

/// Ordered header/body decomposition of a document's text.
///
/// Section names are not guaranteed unique: `sections` keeps every
/// occurrence in document order, while `content_by_section` keeps only the
/// later body when a name repeats. Built once per document and never
/// mutated after return.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outline {
    /// Document title (first non-header line, may be empty)
    pub title: String,
    /// Section names in document order, duplicates permitted
    pub sections: Vec<String>,
    /// Section name to body text
    pub content_by_section: HashMap<String, String>,
}

impl Outline {
    /// Degraded outline: the entire input as a single "whole content"
    /// section. Returned when segmentation cannot run.
    pub fn whole_content(text: &str) -> Self {
        let mut content_by_section = HashMap::new();
        content_by_section.insert(WHOLE_CONTENT_SECTION.to_string(), text.to_string());
        Self {
            title: String::new(),
            sections: vec![WHOLE_CONTENT_SECTION.to_string()],
            content_by_section,
        }
    }

    /// Whether at least one section was recognized.
    pub fn has_sections(&self) -> bool {
        !self.sections.is_empty()
    }

    /// Body text of a section, empty when the section has no entry.
    pub fn body_of(&self, section: &str) -> &str {
        self.content_by_section
            .get(section)
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Header notations recognized by the single-line rules.
#[derive(Debug, Clone, Copy)]
enum HeaderKind {
    /// `# Title` through `###### Title`; the name is the remainder
    Markdown,
    /// `01. Title`, exactly two digits; the name keeps the numeral prefix
    DoubleDigit,
    /// `1. Title` or `12. Title`; the name keeps the numeral prefix
    Numbered,
    /// `라벨: 설명`; name is `"라벨: 설명"`, or just the label when bare
    KoreanColon,
    /// `Label: description`, capitalized Latin word; same naming rule
    EnglishColon,
    /// `* Title` with one to three asterisks; the name is the text
    Bullet,
}

struct HeaderRule {
    pattern: Regex,
    kind: HeaderKind,
}

lazy_static! {
    /// Single-line rules in precedence order. `None` if any pattern fails
    /// to compile, which triggers the whole-content fallback.
    static ref HEADER_RULES: Option<Vec<HeaderRule>> = build_rules();
}

fn build_rules() -> Option<Vec<HeaderRule>> {
    let rule = |pattern: &str, kind: HeaderKind| -> Option<HeaderRule> {
        Regex::new(pattern)
            .ok()
            .map(|pattern| HeaderRule { pattern, kind })
    };

    Some(vec![
        rule(r"^#{1,6}\s+(.+)$", HeaderKind::Markdown)?,
        rule(r"^(\d{2}\.\s+.+)$", HeaderKind::DoubleDigit)?,
        rule(r"^(\d{1,2}\.\s+.+)$", HeaderKind::Numbered)?,
        rule(r"^([가-힣]+)\s*:\s*(.*)$", HeaderKind::KoreanColon)?,
        rule(r"^([A-Z][a-z]+)\s*:\s*(.*)$", HeaderKind::EnglishColon)?,
        rule(r"^\*{1,3}\s*(.+)$", HeaderKind::Bullet)?,
    ])
}

/// Segment document text into an ordered outline.
///
/// Blank lines are skipped. The first line that matches no header rule
/// becomes the title; later non-header lines accumulate into the body of
/// the open section. Fail-open: if the rule table is unavailable the whole
/// input is returned as a single section instead of an error.
pub fn segment(text: &str) -> Outline {
    match HEADER_RULES.as_deref() {
        Some(rules) => segment_lines(text, rules),
        None => {
            tracing::warn!("header rule table unavailable, using whole-content outline");
            Outline::whole_content(text)
        }
    }
}

fn segment_lines(text: &str, rules: &[HeaderRule]) -> Outline {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut outline = Outline::default();
    let mut current_section: Option<String> = None;
    let mut current_body: Vec<&str> = Vec::new();
    let mut skip_next = false;

    for (i, raw_line) in lines.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        let mut header = rules
            .iter()
            .find_map(|rule| rule.pattern.captures(line).and_then(|captures| {
                section_name(rule.kind, &captures)
            }));

        // Setext-style headers need the next line, so they sit after the
        // single-line rules in the precedence order. The underline itself
        // is consumed and never reaches the body.
        if header.is_none() {
            if let Some(next) = lines.get(i + 1).map(|next| next.trim()) {
                if is_underline(next, '=') || is_underline(next, '-') {
                    header = Some(line.to_string());
                    skip_next = true;
                }
            }
        }

        match header {
            Some(name) => {
                if let Some(section) = current_section.take() {
                    outline
                        .content_by_section
                        .insert(section, current_body.join("\n"));
                }
                outline.sections.push(name.clone());
                current_section = Some(name);
                current_body.clear();
            }
            None if outline.title.is_empty() && current_section.is_none() => {
                outline.title = line.to_string();
            }
            None => current_body.push(line),
        }
    }

    if let Some(section) = current_section {
        outline
            .content_by_section
            .insert(section, current_body.join("\n"));
    }

    outline
}

fn is_underline(line: &str, ch: char) -> bool {
    line.chars().count() >= 3 && line.chars().all(|c| c == ch)
}

fn section_name(kind: HeaderKind, captures: &Captures) -> Option<String> {
    match kind {
        HeaderKind::Markdown
        | HeaderKind::DoubleDigit
        | HeaderKind::Numbered
        | HeaderKind::Bullet => Some(captures.get(1)?.as_str().trim().to_string()),
        HeaderKind::KoreanColon | HeaderKind::EnglishColon => {
            let label = captures.get(1)?.as_str().trim();
            let rest = captures.get(2).map(|m| m.as_str().trim()).unwrap_or("");
            if rest.is_empty() {
                Some(label.to_string())
            } else {
                Some(format!("{}: {}", label, rest))
            }
        }
    }
}
