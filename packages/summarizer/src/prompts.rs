//! Persona-tailored prompt assembly.
//!
//! Pure string building over already-fetched data; no I/O happens here.
//! Two assembly modes exist: flat mode substitutes the whole (truncated)
//! document text into the persona's template, structured mode walks the
//! outline and asks for per-section summaries plus a synthesis.

use crate::error::UnknownPersonaError;
use crate::outline::Outline;
use crate::personas::{Persona, PersonaProfile};

/// Flat-mode body budget in characters, sized for the model context.
pub const FLAT_CONTENT_LIMIT: usize = 4000;

/// Structured mode includes at most this many sections.
pub const MAX_SECTIONS: usize = 10;

/// Per-section body budget in characters for structured mode.
pub const SECTION_BODY_LIMIT: usize = 500;

/// Title substituted when the document has none.
pub const DEFAULT_TITLE: &str = "제목 없음";

/// Assemble a persona-tailored prompt.
///
/// Structured mode is used when an outline with at least one section is
/// available, flat mode otherwise. Fails only for a persona key outside
/// the closed set of four.
pub fn assemble(
    persona: &str,
    title: &str,
    content: &str,
    outline: Option<&Outline>,
) -> Result<String, UnknownPersonaError> {
    let persona: Persona = persona.parse()?;
    Ok(assemble_for(persona, title, content, outline))
}

/// Assemble for an already-validated persona.
pub fn assemble_for(
    persona: Persona,
    title: &str,
    content: &str,
    outline: Option<&Outline>,
) -> String {
    match outline {
        Some(outline) if outline.has_sections() => {
            structured_prompt(persona.profile(), title, outline)
        }
        _ => flat_prompt(persona.profile(), title, content),
    }
}

fn flat_prompt(profile: &PersonaProfile, title: &str, content: &str) -> String {
    profile
        .prompt_template
        .replace("{title}", display_title(title))
        .replace("{content}", truncate_chars(content, FLAT_CONTENT_LIMIT))
}

fn structured_prompt(profile: &PersonaProfile, title: &str, outline: &Outline) -> String {
    let mut sections_block = String::new();
    for section in outline.sections.iter().take(MAX_SECTIONS) {
        let body = truncate_chars(outline.body_of(section), SECTION_BODY_LIMIT).trim();
        if body.is_empty() {
            continue;
        }
        sections_block.push_str(&format!("\n### {}\n{}\n", section, body));
    }

    let name = profile.display_name;
    let focus_list = profile
        .focus_areas
        .iter()
        .map(|area| format!("- {}", area))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "당신은 경험 많은 {name}입니다. 다음 Confluence 문서를 {name} 관점에서 섹션별로 요약해주세요.\n\n\
         다음 영역에 특히 집중해주세요:\n{focus_list}\n\n\
         문서 제목: {title}\n\n\
         문서 섹션:\n{sections_block}\n\
         각 섹션을 {name} 관점에서 핵심만 2-3문장으로 요약해주세요.\n\
         섹션 요약이 끝나면 전체 문서를 관통하는 내용을 {name} 관점에서 한 단락으로 종합해주세요.\n\
         마지막으로 {name}가 챙겨야 할 액션 아이템을 목록으로 정리해주세요.\n\n\
         요약은 다음 형식으로 작성해주세요:\n\
         ## 섹션별 요약\n\
         ## 전체 종합\n\
         ## 액션 아이템",
        name = name,
        focus_list = focus_list,
        title = display_title(title),
        sections_block = sections_block,
    )
}

fn display_title(title: &str) -> &str {
    if title.trim().is_empty() {
        DEFAULT_TITLE
    } else {
        title
    }
}

/// Truncate to a character count, never splitting a code point.
fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outline::segment;

    #[test]
    fn test_all_valid_personas_assemble() {
        for persona in Persona::ALL {
            let prompt = assemble(persona.as_str(), "", "some text", None).unwrap();
            assert!(prompt.contains("some text"));
            assert!(prompt.contains(DEFAULT_TITLE));
        }
    }

    #[test]
    fn test_unknown_persona_fails() {
        let err = assemble("alien_persona", "t", "c", None).unwrap_err();
        assert_eq!(err, UnknownPersonaError("alien_persona".to_string()));
    }

    #[test]
    fn test_flat_mode_truncates_content() {
        let long = "가".repeat(FLAT_CONTENT_LIMIT + 100);
        let prompt = assemble("developer", "제목", &long, None).unwrap();
        assert!(prompt.contains(&"가".repeat(FLAT_CONTENT_LIMIT)));
        assert!(!prompt.contains(&"가".repeat(FLAT_CONTENT_LIMIT + 1)));
    }

    #[test]
    fn test_empty_outline_falls_back_to_flat_mode() {
        let outline = segment("only a title line");
        let prompt = assemble("general", "제목", "본문", Some(&outline)).unwrap();
        // Flat template, not the structured instruction blocks.
        assert!(prompt.contains("문서 내용:"));
        assert!(!prompt.contains("문서 섹션:"));
    }

    #[test]
    fn test_structured_mode_lists_sections_in_order() {
        let outline = segment("# Intro\nHello world\n# Setup\nRun the installer");
        let prompt = assemble("general", "Guide", "", Some(&outline)).unwrap();

        assert!(prompt.contains("### Intro\nHello world"));
        assert!(prompt.contains("### Setup\nRun the installer"));
        let intro = prompt.find("### Intro").unwrap();
        let setup = prompt.find("### Setup").unwrap();
        assert!(intro < setup);
    }

    #[test]
    fn test_structured_mode_caps_sections_at_ten() {
        let text = (0..12)
            .map(|i| format!("# Section {}\nbody {}", i, i))
            .collect::<Vec<_>>()
            .join("\n");
        let outline = segment(&text);
        assert_eq!(outline.sections.len(), 12);

        let prompt = assemble("developer", "t", "", Some(&outline)).unwrap();
        assert!(prompt.contains("### Section 9"));
        assert!(!prompt.contains("### Section 10"));
        assert!(!prompt.contains("### Section 11"));
    }

    #[test]
    fn test_structured_mode_skips_empty_sections() {
        let outline = segment("# Filled\ncontent here\n# Empty\n# Last\ntail");
        let prompt = assemble("designer", "t", "", Some(&outline)).unwrap();

        assert!(prompt.contains("### Filled"));
        assert!(!prompt.contains("### Empty"));
        assert!(prompt.contains("### Last"));
    }

    #[test]
    fn test_structured_mode_truncates_section_bodies() {
        let text = format!("# Long\n{}", "나".repeat(SECTION_BODY_LIMIT + 50));
        let outline = segment(&text);
        let prompt = assemble("product_manager", "t", "", Some(&outline)).unwrap();

        assert!(prompt.contains(&"나".repeat(SECTION_BODY_LIMIT)));
        assert!(!prompt.contains(&"나".repeat(SECTION_BODY_LIMIT + 1)));
    }

    #[test]
    fn test_structured_mode_flavored_with_display_name() {
        let outline = segment("# One\nbody");
        let prompt = assemble("developer", "t", "", Some(&outline)).unwrap();
        assert!(prompt.contains("개발자 관점에서"));
    }
}
