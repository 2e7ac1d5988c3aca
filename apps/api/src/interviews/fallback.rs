//! Deterministic, network-free question synthesis.
//!
//! Two fixed pools of templated questions: technical ones parameterized by the tech
//! stack, behavioral ones parameterized by the role. Pools are drawn from in order
//! and never padded or repeated, so a request larger than the pools yields fewer
//! questions than asked for.

use crate::interviews::questions::QuestionRequest;
use crate::models::interview::split_techstack;

/// Which pools an interview type draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionMix {
    pub technical: bool,
    pub behavioral: bool,
}

impl QuestionMix {
    /// Case-insensitive: "technical" or "mixed" enables the technical pool,
    /// "behavioral" or "mixed" enables the behavioral pool.
    pub fn classify(interview_type: &str) -> Self {
        let lowered = interview_type.to_lowercase();
        let mixed = lowered.contains("mixed");
        Self {
            technical: mixed || lowered.contains("technical"),
            behavioral: mixed || lowered.contains("behavioral"),
        }
    }
}

pub fn technical_pool(techstack: &[String]) -> Vec<String> {
    let first = techstack.first().map(String::as_str);
    let primary = first.unwrap_or("your primary technology");
    let listed = if techstack.is_empty() {
        "your tech stack".to_string()
    } else {
        techstack.join(", ")
    };
    let paired = if techstack.is_empty() {
        "your tech stack".to_string()
    } else {
        techstack.join(" and ")
    };

    vec![
        format!("Can you explain your experience with {primary}?"),
        format!(
            "How would you approach debugging a complex issue in {}?",
            first.unwrap_or("a production environment")
        ),
        format!(
            "What are the key differences between {primary} and similar technologies you have worked with?"
        ),
        format!("Describe a challenging project you built using {listed}."),
        format!(
            "How do you stay updated with the latest trends in {}?",
            first.unwrap_or("technology")
        ),
        format!("What best practices do you follow when working with {paired}?"),
        "Can you explain a recent technical challenge you faced and how you solved it?"
            .to_string(),
        format!("How would you optimize performance in an application built with {primary}?"),
    ]
}

pub fn behavioral_pool(role: &str) -> Vec<String> {
    vec![
        format!("Tell me about yourself and your experience as a {role}."),
        format!("Why are you interested in this {role} position?"),
        "Describe a time when you had to work under pressure. How did you handle it?".to_string(),
        "Tell me about a situation where you had to collaborate with a difficult team member."
            .to_string(),
        format!("What are your greatest strengths and weaknesses as a {role}?"),
        "Where do you see yourself in 5 years in your career?".to_string(),
        "Describe a project you are most proud of and why.".to_string(),
        "How do you handle feedback and criticism?".to_string(),
    ]
}

/// Builds at most `request.amount` questions from the fixed pools.
///
/// Mixed types take the first `ceil(amount / 2)` technical questions followed by the
/// first `amount - ceil(amount / 2)` behavioral ones. A type matching neither pool
/// is treated as behavioral.
pub fn fallback_questions(request: &QuestionRequest) -> Vec<String> {
    let amount = request.amount as usize;
    let mix = QuestionMix::classify(&request.interview_type);
    let techstack = split_techstack(&request.techstack);

    let mut questions: Vec<String> = if mix.technical && mix.behavioral {
        let technical_share = amount.div_ceil(2);
        technical_pool(&techstack)
            .into_iter()
            .take(technical_share)
            .chain(
                behavioral_pool(&request.role)
                    .into_iter()
                    .take(amount - technical_share),
            )
            .collect()
    } else if mix.technical {
        technical_pool(&techstack).into_iter().take(amount).collect()
    } else {
        behavioral_pool(&request.role).into_iter().take(amount).collect()
    };

    questions.truncate(amount);
    questions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(interview_type: &str, amount: u32) -> QuestionRequest {
        QuestionRequest {
            role: "Backend Developer".to_string(),
            level: "mid".to_string(),
            techstack: "Rust, PostgreSQL".to_string(),
            interview_type: interview_type.to_string(),
            amount,
        }
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(
            QuestionMix::classify("TECHNICAL"),
            QuestionMix {
                technical: true,
                behavioral: false
            }
        );
        assert_eq!(
            QuestionMix::classify("Behavioral"),
            QuestionMix {
                technical: false,
                behavioral: true
            }
        );
        assert_eq!(
            QuestionMix::classify("mixed"),
            QuestionMix {
                technical: true,
                behavioral: true
            }
        );
    }

    #[test]
    fn test_mixed_five_is_three_technical_then_two_behavioral() {
        let questions = fallback_questions(&request("Mixed", 5));
        let technical = technical_pool(&["Rust".to_string(), "PostgreSQL".to_string()]);
        let behavioral = behavioral_pool("Backend Developer");

        assert_eq!(questions.len(), 5);
        assert_eq!(&questions[..3], &technical[..3]);
        assert_eq!(&questions[3..], &behavioral[..2]);
    }

    #[test]
    fn test_technical_only_preserves_pool_order() {
        let questions = fallback_questions(&request("technical", 4));
        assert_eq!(questions[0], "Can you explain your experience with Rust?");
        assert_eq!(
            questions[3],
            "Describe a challenging project you built using Rust, PostgreSQL."
        );
        assert!(questions.iter().all(|q| !q.contains("Backend Developer")));
    }

    #[test]
    fn test_behavioral_only_uses_role() {
        let questions = fallback_questions(&request("behavioral", 2));
        assert_eq!(
            questions,
            vec![
                "Tell me about yourself and your experience as a Backend Developer.",
                "Why are you interested in this Backend Developer position?",
            ]
        );
    }

    #[test]
    fn test_unknown_type_draws_behavioral() {
        let questions = fallback_questions(&request("system design", 1));
        assert_eq!(questions, behavioral_pool("Backend Developer")[..1].to_vec());
    }

    #[test]
    fn test_zero_amount_is_empty() {
        assert!(fallback_questions(&request("Mixed", 0)).is_empty());
    }

    #[test]
    fn test_oversized_request_is_not_padded() {
        assert_eq!(fallback_questions(&request("Technical", 20)).len(), 8);
        assert_eq!(fallback_questions(&request("Mixed", 30)).len(), 16);
    }

    #[test]
    fn test_length_never_exceeds_amount() {
        for interview_type in ["Technical", "Behavioral", "Mixed", "other"] {
            for amount in 0..=20 {
                let questions = fallback_questions(&request(interview_type, amount));
                assert!(questions.len() <= amount as usize);
                if amount <= 8 {
                    assert_eq!(questions.len(), amount as usize);
                }
            }
        }
    }

    #[test]
    fn test_empty_techstack_uses_generic_wording() {
        let mut req = request("Technical", 4);
        req.techstack = String::new();
        let questions = fallback_questions(&req);
        assert_eq!(
            questions[0],
            "Can you explain your experience with your primary technology?"
        );
        assert_eq!(
            questions[1],
            "How would you approach debugging a complex issue in a production environment?"
        );
        assert_eq!(
            questions[3],
            "Describe a challenging project you built using your tech stack."
        );
    }
}
