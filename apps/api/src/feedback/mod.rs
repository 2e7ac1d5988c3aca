// Feedback Scoring: structured AI evaluation of interview transcripts.
// All LLM calls go through llm_client.

pub mod handlers;
pub mod prompts;
pub mod scoring;
