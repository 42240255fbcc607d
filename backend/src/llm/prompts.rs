//! Prompt text for each generation type.

use common::model::generation::GenerationType;

pub const MAX_TOKENS: u32 = 1000;

/// Persona, task text and sampling temperature for one request.
pub struct Prompt {
    pub system: &'static str,
    pub user: String,
    pub temperature: f32,
}

pub fn build(kind: GenerationType, keyword: &str, count: u32) -> Prompt {
    match kind {
        GenerationType::SamplePhrase => Prompt {
            system: "당신은 아동 상담 전문가입니다. 5-7세 아동이 사용할 법한 자연스러운 대화 문장을 생성해주세요.",
            user: sample_phrase_prompt(keyword, count),
            temperature: 0.8,
        },
        GenerationType::Experience => Prompt {
            system: "당신은 아동 심리 전문가입니다. 아동의 경험과 감정을 분석한 문장을 생성해주세요.",
            user: experience_prompt(keyword, count),
            temperature: 0.7,
        },
        GenerationType::Hint => Prompt {
            system: "당신은 아동 놀이치료 전문가입니다. 5-7세 아동과 함께하는 스무고개 놀이의 힌트를 만들어주세요.",
            user: hint_prompt(keyword, count),
            temperature: 0.7,
        },
    }
}

fn sample_phrase_prompt(keyword: &str, count: u32) -> String {
    format!(
        r#"키워드: {keyword}

아동 상담용 대화 문장을 {count}개 생성해주세요.
- 5-7세 아동이 말할 법한 자연스러운 문장
- 흥미와 관심을 표현하는 문장
- 상대방과의 상호작용을 유도하는 문장
- 키워드와 관련된 구체적인 상황이나 경험 포함
- 각 문장을 줄바꿈으로 구분해주세요

예시:
- "나는 볼트처럼 파란 로봇으로 변신해서 펀치 날리고 싶어!"
- "나는 새미처럼 빨간 로봇 되어서 하늘 높이 날아다니고 싶어!"
- "너도 루시처럼 분홍 로봇으로 변신해서 레이저 쏘고 싶어?"
"#
    )
}

fn experience_prompt(keyword: &str, count: u32) -> String {
    format!(
        r#"키워드: {keyword}

아동의 경험, 감정, 관심사를 분석한 문장을 {count}개 생성해주세요.
- 아동이 해당 키워드에 대해 가질 수 있는 경험
- 아동의 감정이나 반응
- 아동의 관심사나 선호도
- 구체적인 상황이나 활동 포함
- 각 문장을 줄바꿈으로 구분해주세요

예시:
- "상대와 함께 상상하는 것을 즐김."
- "너는 미니특공대를 좋아해."
- "미니특공대가 합체해서 싸울 때 멋있어."
- "미니특공대 인형을 가지고 있어."
"#
    )
}

fn hint_prompt(keyword: &str, count: u32) -> String {
    format!(
        r#"정답: {keyword}

정답을 맞히는 스무고개 놀이 힌트를 {count}개 생성해주세요.
규칙:
- 정답 단어를 직접 말하지 않기
- 20자 이내의 짧은 한 문장
- 모양, 색깔, 소리, 하는 일처럼 아이가 떠올리기 쉬운 특징
- 어려운 힌트부터 쉬운 힌트 순서로
- 각 힌트를 "- "로 시작하는 줄로 구분해주세요

예시:
- "나는 바퀴가 네 개 있어."
- "나는 빨간색일 때가 많아."
"#
    )
}
