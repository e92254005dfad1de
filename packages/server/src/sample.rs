//! Built-in sample document served when Confluence credentials are absent.

pub const SAMPLE_TITLE: &str = "ConfluSum 프로젝트 개발 문서";

/// Sample document body, shaped like a typical Confluence project page.
pub const SAMPLE_BODY: &str = "\
# ConfluSum 프로젝트 개발 문서

## 프로젝트 개요
ConfluSum은 AI 기반 개인화 Confluence 문서 요약 서비스입니다.

## 기술 스택
- Backend: Rust (axum)
- Frontend: HTML, CSS, JavaScript
- AI: Claude API + Confluence REST API

## 주요 기능
1. Confluence URL 입력 및 검증
2. 페르소나 선택 (개발자/기획자/디자이너)
3. AI 기반 맞춤형 요약 생성
4. 사용자 피드백 수집

## 개발 일정
- Day 1: MVP 개발 완료
- Week 1: 베타 테스트
- Month 1: 사용자 피드백 분석 및 개선

## 성공 지표
- 70% 이상 긍정 피드백
- 평균 30초 이내 응답 시간
- 90% 이상 기술적 안정성

## 비즈니스 목표
기업 내 방대한 Confluence 문서를 효율적으로 소화할 수 있도록,
사용자의 역할에 맞는 맞춤형 요약을 제공하여 업무 효율성을 극대화합니다.

## 리스크 관리
- Claude API 장애 대비 백업 시스템 준비
- Confluence 접근 권한 문제에 대한 명확한 안내
- 요약 품질 개선을 위한 지속적인 프롬프트 튜닝
";
