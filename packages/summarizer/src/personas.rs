//! Persona profiles for summary generation.
//!
//! The persona set is a closed enumeration; persona selection is validated
//! at the boundary and an unknown key is the one hard failure of the
//! pipeline. Profiles are a static, read-only table: built once, shared by
//! reference, never mutated at runtime.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownPersonaError;

/// A named viewpoint that biases summary focus and format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Persona {
    General,
    Developer,
    ProductManager,
    Designer,
}

impl Persona {
    /// Every persona, in presentation order.
    pub const ALL: [Persona; 4] = [
        Persona::General,
        Persona::Developer,
        Persona::ProductManager,
        Persona::Designer,
    ];

    /// Wire key for this persona.
    pub fn as_str(self) -> &'static str {
        match self {
            Persona::General => "general",
            Persona::Developer => "developer",
            Persona::ProductManager => "product_manager",
            Persona::Designer => "designer",
        }
    }

    /// Static profile for this persona.
    pub fn profile(self) -> &'static PersonaProfile {
        match self {
            Persona::General => &GENERAL,
            Persona::Developer => &DEVELOPER,
            Persona::ProductManager => &PRODUCT_MANAGER,
            Persona::Designer => &DESIGNER,
        }
    }
}

impl FromStr for Persona {
    type Err = UnknownPersonaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "general" => Ok(Persona::General),
            "developer" => Ok(Persona::Developer),
            "product_manager" => Ok(Persona::ProductManager),
            "designer" => Ok(Persona::Designer),
            other => Err(UnknownPersonaError(other.to_string())),
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static description of one persona: how it is presented and how its
/// flat-mode prompt is framed.
pub struct PersonaProfile {
    pub key: Persona,
    /// Display name interpolated into prompts (e.g. "개발자")
    pub display_name: &'static str,
    /// One-line description shown to users
    pub description: &'static str,
    /// Focus areas, in priority order
    pub focus_areas: [&'static str; 5],
    /// Flat-mode template with `{title}` and `{content}` placeholders
    pub prompt_template: &'static str,
}

static GENERAL: PersonaProfile = PersonaProfile {
    key: Persona::General,
    display_name: "일반 독자",
    description: "모든 직군이 이해할 수 있는 핵심 내용 중심으로 요약",
    focus_areas: [
        "문서의 핵심 주제와 목적",
        "주요 결정사항 및 결론",
        "전체 일정과 진행 상황",
        "관련 담당자 및 역할",
        "후속 조치가 필요한 항목",
    ],
    prompt_template: "\
당신은 문서를 처음 접하는 일반 독자입니다. 다음 Confluence 문서를 모든 직군이 이해할 수 있도록 요약해주세요.

다음 영역에 특히 집중해서 요약해주세요:
- 문서의 핵심 주제와 목적
- 주요 결정사항 및 결론
- 전체 일정과 진행 상황
- 관련 담당자 및 역할
- 후속 조치가 필요한 항목

전문 용어나 직군별 세부사항은 풀어서 설명하고, 배경 지식이 없어도 이해할 수 있는 수준으로 작성해주세요.

요약은 다음 형식으로 작성해주세요:
## 📌 핵심 요약
## 📝 주요 내용
## 📅 일정 및 진행 상황
## ✅ 후속 조치

문서 제목: {title}

문서 내용:
{content}",
};

static DEVELOPER: PersonaProfile = PersonaProfile {
    key: Persona::Developer,
    display_name: "개발자",
    description: "기술적 구현에 집중하는 백엔드/프론트엔드 개발자",
    focus_areas: [
        "기술적 요구사항 및 제약사항",
        "API 명세 및 데이터 구조",
        "구현 방법 및 기술 스택",
        "성능 및 보안 고려사항",
        "코드 관련 가이드라인",
    ],
    prompt_template: "\
당신은 경험 많은 개발자입니다. 다음 Confluence 문서를 개발자 관점에서 요약해주세요.

다음 영역에 특히 집중해서 요약해주세요:
- 기술적 요구사항 및 제약사항
- API 명세 및 데이터 구조
- 구현 방법 및 기술 스택
- 성능 및 보안 고려사항
- 코드 관련 가이드라인

문서 내용에서 개발과 직접적으로 관련이 없는 비즈니스 전략이나 마케팅 관련 내용은 간략히 언급하거나 생략해도 됩니다.

요약은 다음 형식으로 작성해주세요:
## 🔧 기술 요약
## 📋 구현 요구사항
## ⚠️ 주의사항 및 제약
## 📊 성능/보안 고려사항

문서 제목: {title}

문서 내용:
{content}",
};

static PRODUCT_MANAGER: PersonaProfile = PersonaProfile {
    key: Persona::ProductManager,
    display_name: "프로덕트 매니저",
    description: "비즈니스 목표와 제품 전략에 집중하는 기획자",
    focus_areas: [
        "비즈니스 목표 및 전략",
        "일정 및 마일스톤",
        "리스크 및 이슈사항",
        "의사결정 포인트",
        "이해관계자 및 커뮤니케이션",
    ],
    prompt_template: "\
당신은 경험 많은 프로덕트 매니저입니다. 다음 Confluence 문서를 기획자/PM 관점에서 요약해주세요.

다음 영역에 특히 집중해서 요약해주세요:
- 비즈니스 목표 및 전략
- 일정 및 마일스톤
- 리스크 및 이슈사항
- 의사결정 포인트
- 이해관계자 및 커뮤니케이션

기술적인 세부 구현 내용보다는 비즈니스 임팩트와 프로젝트 관리 관점에서 중요한 정보에 집중해주세요.

요약은 다음 형식으로 작성해주세요:
## 🎯 비즈니스 목표
## 📅 주요 일정 및 마일스톤
## ⚠️ 리스크 및 이슈
## 🤝 의사결정 포인트

문서 제목: {title}

문서 내용:
{content}",
};

static DESIGNER: PersonaProfile = PersonaProfile {
    key: Persona::Designer,
    display_name: "UX/UI 디자이너",
    description: "사용자 경험과 인터페이스 디자인에 집중하는 디자이너",
    focus_areas: [
        "사용자 경험 및 인터페이스",
        "디자인 요구사항 및 가이드라인",
        "사용자 리서치 및 피드백",
        "인터랙션 및 플로우",
        "브랜딩 및 비주얼 요소",
    ],
    prompt_template: "\
당신은 경험 많은 UX/UI 디자이너입니다. 다음 Confluence 문서를 디자이너 관점에서 요약해주세요.

다음 영역에 특히 집중해서 요약해주세요:
- 사용자 경험 및 인터페이스 요구사항
- 디자인 가이드라인 및 스타일
- 사용자 리서치 및 피드백
- 인터랙션 및 사용자 플로우
- 브랜딩 및 비주얼 요소

기술적인 구현 세부사항이나 복잡한 비즈니스 로직보다는 사용자 관점과 디자인 관련 내용에 집중해주세요.

요약은 다음 형식으로 작성해주세요:
## 🎨 UX/UI 요구사항
## 👥 사용자 관점
## 📱 인터페이스 가이드라인
## 🔄 사용자 플로우

문서 제목: {title}

문서 내용:
{content}",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_keys() {
        for persona in Persona::ALL {
            assert_eq!(persona.as_str().parse::<Persona>(), Ok(persona));
        }
    }

    #[test]
    fn test_parse_unknown_key() {
        let err = "alien_persona".parse::<Persona>().unwrap_err();
        assert_eq!(err, UnknownPersonaError("alien_persona".to_string()));
    }

    #[test]
    fn test_serde_wire_format() {
        assert_eq!(
            serde_json::to_string(&Persona::ProductManager).unwrap(),
            "\"product_manager\""
        );
        let parsed: Persona = serde_json::from_str("\"designer\"").unwrap();
        assert_eq!(parsed, Persona::Designer);
    }

    #[test]
    fn test_profiles_have_placeholders() {
        for persona in Persona::ALL {
            let template = persona.profile().prompt_template;
            assert!(template.contains("{title}"), "{persona} missing title");
            assert!(template.contains("{content}"), "{persona} missing content");
        }
    }
}
