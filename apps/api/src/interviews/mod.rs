// Interviews: template catalog, question acquisition and interview creation.
// All LLM calls go through llm_client.

pub mod catalog;
pub mod covers;
pub mod fallback;
pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod questions;
pub mod seeding;
