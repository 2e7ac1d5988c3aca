use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Seniority of the role an interview targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Entry,
    Mid,
    Senior,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Entry => "entry",
            Level::Mid => "mid",
            Level::Senior => "senior",
        }
    }
}

/// Balance between technical and behavioral questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterviewType {
    Technical,
    Mixed,
    Behavioral,
}

impl InterviewType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterviewType::Technical => "Technical",
            InterviewType::Mixed => "Mixed",
            InterviewType::Behavioral => "Behavioral",
        }
    }
}

/// Which question source produced an interview's questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeneratedBy {
    Ai,
    Fallback,
}

impl GeneratedBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeneratedBy::Ai => "ai",
            GeneratedBy::Fallback => "fallback",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ai" => Some(GeneratedBy::Ai),
            "fallback" => Some(GeneratedBy::Fallback),
            _ => None,
        }
    }
}

/// A persisted interview record.
///
/// `level` and `interview_type` hold whatever the caller supplied; seeded records
/// use the catalog spellings. `user_id` is a weak reference to an external identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interview {
    pub id: Uuid,
    #[serde(flatten)]
    pub fields: NewInterview,
}

/// Interview contents before the store has assigned an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInterview {
    pub role: String,
    pub level: String,
    #[serde(rename = "type")]
    pub interview_type: String,
    pub techstack: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_description: Option<String>,
    pub user_id: String,
    pub cover_image: String,
    pub created_at: Option<DateTime<Utc>>,
    pub finalized: bool,
    pub questions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_by: Option<GeneratedBy>,
}

/// Splits a comma-separated tech stack into trimmed entries.
/// An empty string yields no entries.
pub fn split_techstack(techstack: &str) -> Vec<String> {
    techstack
        .split(',')
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_techstack_trims_entries() {
        assert_eq!(
            split_techstack("React, Node.js ,  PostgreSQL"),
            vec!["React", "Node.js", "PostgreSQL"]
        );
    }

    #[test]
    fn test_split_techstack_empty_string_yields_nothing() {
        assert!(split_techstack("").is_empty());
        assert!(split_techstack(" , ").is_empty());
    }

    #[test]
    fn test_interview_serializes_with_wire_names() {
        let interview = Interview {
            id: Uuid::new_v4(),
            fields: NewInterview {
                role: "Backend Developer".to_string(),
                level: "mid".to_string(),
                interview_type: "Mixed".to_string(),
                techstack: vec!["Rust".to_string()],
                duration: None,
                description: None,
                job_description: None,
                user_id: "user-1".to_string(),
                cover_image: "/covers/reddit.png".to_string(),
                created_at: None,
                finalized: true,
                questions: vec!["Q1".to_string()],
                generated_by: Some(GeneratedBy::Fallback),
            },
        };

        let value = serde_json::to_value(&interview).unwrap();
        assert_eq!(value["type"], "Mixed");
        assert_eq!(value["userId"], "user-1");
        assert_eq!(value["coverImage"], "/covers/reddit.png");
        assert_eq!(value["generatedBy"], "fallback");
        assert!(value.get("duration").is_none());
        assert!(value["id"].is_string());
    }

    #[test]
    fn test_generated_by_parse() {
        assert_eq!(GeneratedBy::parse("ai"), Some(GeneratedBy::Ai));
        assert_eq!(GeneratedBy::parse("fallback"), Some(GeneratedBy::Fallback));
        assert_eq!(GeneratedBy::parse("human"), None);
    }
}
