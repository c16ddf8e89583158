// ATS evaluation prompt.
// The model is asked for a single-line JSON object keyed by the FIELD_* names below.

pub const FIELD_MATCH: &str = "Job Description Match";
pub const FIELD_MISSING_KEYWORDS: &str = "Missing Keywords";
pub const FIELD_CANDIDATE_SUMMARY: &str = "Candidate Summary";
pub const FIELD_EXPERIENCE: &str = "Experience";

const PREAMBLE: &str = "
As an experienced Applicant Tracking System (ATS) analyst,
with profound knowledge in technology, software engineering, data science, business,
and big data engineering, your role involves evaluating resumes against job descriptions.
Recognizing the competitive job market, provide top-notch assistance for resume improvement.
Your goal is to analyze the resume against the given job description,
assign a percentage match based on key criteria, and pinpoint missing keywords accurately.
";

const RESPONSE_SHAPE: &str = r#"I want the response in one single string having the structure
{"Job Description Match":"%","Missing Keywords":"","Candidate Summary":"","Experience":""}
"#;

/// Fills the ATS template. Both inputs are inserted verbatim, exactly once.
pub fn build_prompt(resume_text: &str, job_description: &str) -> String {
    format!("{PREAMBLE}resume:{resume_text}\ndescription:{job_description}\n{RESPONSE_SHAPE}")
}
