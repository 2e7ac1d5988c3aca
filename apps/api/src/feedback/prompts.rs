// Prompt constants for transcript evaluation.

pub const FEEDBACK_SYSTEM: &str = "You are a professional interviewer analyzing a mock \
    interview. Your task is to evaluate the candidate based on structured categories. \
    You MUST respond with a single JSON object only.";

/// Evaluation prompt. Replace `{transcript}` before sending.
pub const FEEDBACK_PROMPT_TEMPLATE: &str = r#"You are an AI interviewer analyzing a mock interview. Your task is to evaluate the candidate based on structured categories. Be thorough and detailed in your analysis. Don't be lenient with the candidate. If there are mistakes or areas for improvement, point them out.

Transcript:
{transcript}

Please score the candidate from 0 to 100 in the following areas. Do not add categories other than the ones provided:
- Communication Skills: Clarity, articulation, structured responses.
- Technical Knowledge: Understanding of key concepts for the role.
- Problem-Solving: Ability to analyze problems and propose solutions.
- Cultural & Role Fit: Alignment with company values and job role.
- Confidence & Clarity: Confidence in responses, engagement, and clarity.

Return a JSON object with this EXACT schema (no extra fields):
{
  "totalScore": 72,
  "categoryScores": {
    "Communication Skills": 80,
    "Technical Knowledge": 65,
    "Problem-Solving": 70,
    "Cultural & Role Fit": 75,
    "Confidence & Clarity": 70
  },
  "strengths": ["..."],
  "areasForImprovement": ["..."],
  "finalAssessment": "..."
}

All scores are integers from 0 to 100 inclusive."#;
