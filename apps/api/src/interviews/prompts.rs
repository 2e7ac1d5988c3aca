// Prompt constants for interview question generation.

/// System prompt for question generation.
pub const QUESTION_SYSTEM: &str = "You are an experienced technical recruiter preparing \
    questions for a spoken mock job interview. \
    You MUST respond with a JSON array of strings only.";

/// Question generation prompt. Replace every `{placeholder}` before sending.
pub const QUESTION_PROMPT_TEMPLATE: &str = r#"Prepare questions for a job interview.
The job role is {role}.
The job experience level is {level}.
The tech stack used in the job is: {techstack}.
The focus between behavioural and technical questions should lean towards: {type}.
The amount of questions required is: {amount}.
Please return only the questions, without any additional text.
{voice_instruction}
Return the questions formatted like this:
["Question 1", "Question 2", "Question 3"]

{json_instruction}"#;
