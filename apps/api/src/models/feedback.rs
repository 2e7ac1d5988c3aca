use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Upper bound of every score in an evaluation.
pub const MAX_SCORE: u8 = 100;

/// One turn of an interview conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptMessage {
    pub role: String,
    pub content: String,
}

/// Scores for the five fixed evaluation categories, keyed by display name on the wire.
/// Unknown keys are rejected, so a decoded value always has exactly these five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryScores {
    #[serde(rename = "Communication Skills")]
    pub communication_skills: u8,
    #[serde(rename = "Technical Knowledge")]
    pub technical_knowledge: u8,
    #[serde(rename = "Problem-Solving")]
    pub problem_solving: u8,
    #[serde(rename = "Cultural & Role Fit")]
    pub cultural_and_role_fit: u8,
    #[serde(rename = "Confidence & Clarity")]
    pub confidence_and_clarity: u8,
}

impl CategoryScores {
    pub fn entries(&self) -> [(&'static str, u8); 5] {
        [
            ("Communication Skills", self.communication_skills),
            ("Technical Knowledge", self.technical_knowledge),
            ("Problem-Solving", self.problem_solving),
            ("Cultural & Role Fit", self.cultural_and_role_fit),
            ("Confidence & Clarity", self.confidence_and_clarity),
        ]
    }

    /// Names of categories whose score exceeds `MAX_SCORE`.
    pub fn out_of_range(&self) -> Vec<&'static str> {
        self.entries()
            .into_iter()
            .filter(|(_, score)| *score > MAX_SCORE)
            .map(|(name, _)| name)
            .collect()
    }
}

/// A persisted feedback record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: Uuid,
    #[serde(flatten)]
    pub fields: NewFeedback,
}

/// Feedback contents before the store has resolved an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFeedback {
    pub interview_id: Uuid,
    pub user_id: String,
    pub total_score: u8,
    pub category_scores: CategoryScores,
    pub strengths: Vec<String>,
    pub areas_for_improvement: Vec<String>,
    pub final_assessment: String,
    pub created_at: DateTime<Utc>,
}
