//! Question Acquisition: asks the generative provider for questions and recovers
//! locally with the template generator when that fails.
//!
//! Provider failures never reach the caller: any error or malformed reply switches
//! to the fallback source (normally `TemplateQuestionSource`), and the result
//! records which source answered.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Deserializer};
use tracing::{error, info, warn};

use crate::interviews::fallback::fallback_questions;
use crate::interviews::prompts::{QUESTION_PROMPT_TEMPLATE, QUESTION_SYSTEM};
use crate::llm_client::prompts::{JSON_ONLY_SYSTEM, VOICE_SAFE_INSTRUCTION};
use crate::llm_client::{complete_json, LlmError, LlmProvider};
use crate::models::interview::GeneratedBy;

/// What to ask questions about.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QuestionRequest {
    pub role: String,
    pub level: String,
    /// Comma-separated.
    pub techstack: String,
    #[serde(rename = "type")]
    pub interview_type: String,
    #[serde(deserialize_with = "deserialize_amount")]
    pub amount: u32,
}

/// Accepts `5` as well as `"5"`; voice workflows tend to send numbers as strings.
pub fn deserialize_amount<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Amount {
        Number(u32),
        Text(String),
    }

    match Amount::deserialize(deserializer)? {
        Amount::Number(n) => Ok(n),
        Amount::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// A capability that produces an ordered list of interview questions.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    fn generated_by(&self) -> GeneratedBy;

    async fn questions(&self, request: &QuestionRequest) -> Result<Vec<String>, LlmError>;
}

/// Questions from the generative provider, parsed strictly as a JSON array of strings.
pub struct LlmQuestionSource {
    llm: Arc<dyn LlmProvider>,
}

impl LlmQuestionSource {
    pub fn new(llm: Arc<dyn LlmProvider>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl QuestionSource for LlmQuestionSource {
    fn generated_by(&self) -> GeneratedBy {
        GeneratedBy::Ai
    }

    async fn questions(&self, request: &QuestionRequest) -> Result<Vec<String>, LlmError> {
        let prompt = build_question_prompt(request);
        let mut questions: Vec<String> =
            complete_json(self.llm.as_ref(), &prompt, QUESTION_SYSTEM).await?;

        if questions.is_empty() && request.amount > 0 {
            return Err(LlmError::Invalid("no questions returned".to_string()));
        }

        questions.truncate(request.amount as usize);
        Ok(questions)
    }
}

/// Network-free questions from the fixed template pools.
pub struct TemplateQuestionSource;

#[async_trait]
impl QuestionSource for TemplateQuestionSource {
    fn generated_by(&self) -> GeneratedBy {
        GeneratedBy::Fallback
    }

    async fn questions(&self, request: &QuestionRequest) -> Result<Vec<String>, LlmError> {
        Ok(fallback_questions(request))
    }
}

/// Questions plus the source that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct AcquiredQuestions {
    pub questions: Vec<String>,
    pub generated_by: GeneratedBy,
}

impl AcquiredQuestions {
    pub fn used_fallback(&self) -> bool {
        self.generated_by == GeneratedBy::Fallback
    }
}

/// Tries `primary` once; on any failure answers from `fallback` instead.
pub async fn acquire_questions(
    primary: &dyn QuestionSource,
    fallback: &dyn QuestionSource,
    request: &QuestionRequest,
) -> AcquiredQuestions {
    let failure = match primary.questions(request).await {
        Ok(questions) => {
            return AcquiredQuestions {
                questions,
                generated_by: primary.generated_by(),
            }
        }
        Err(e) => e,
    };

    warn!("AI question generation failed, using fallback questions: {failure}");
    if failure.is_quota_exhausted() {
        info!("Provider quota exceeded; serving curated fallback questions");
    }

    let questions = fallback.questions(request).await.unwrap_or_else(|e| {
        error!("Fallback question source failed: {e}");
        Vec::new()
    });
    AcquiredQuestions {
        questions,
        generated_by: fallback.generated_by(),
    }
}

fn build_question_prompt(request: &QuestionRequest) -> String {
    let amount = request.amount.to_string();
    fill_placeholders(
        QUESTION_PROMPT_TEMPLATE,
        &[
            ("role", &request.role),
            ("level", &request.level),
            ("techstack", &request.techstack),
            ("type", &request.interview_type),
            ("amount", &amount),
            ("voice_instruction", VOICE_SAFE_INSTRUCTION),
            ("json_instruction", JSON_ONLY_SYSTEM),
        ],
    )
}

/// Replaces each `{name}` in `template` with its value in one left-to-right pass.
/// Substituted text is never rescanned; unknown placeholders are left as they are.
fn fill_placeholders(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let substitution = tail.find('}').and_then(|end| {
            let name = &tail[1..end];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (end, *value))
        });
        match substitution {
            Some((end, value)) => {
                out.push_str(value);
                rest = &tail[end + 1..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}
