//! Prompt composition: pure interpolation of the job description and the
//! extracted resume text into a fixed template. No truncation, escaping, or
//! sanitization — inputs pass through verbatim, bounded only by what the
//! LLM client enforces downstream.

use crate::analysis::templates::AnalysisKind;

/// Builds one self-contained prompt for `kind`.
///
/// Layout: optional intro, then the two labeled input sections, then the
/// template's task text. Referentially transparent — the result depends
/// only on the arguments.
pub fn compose(kind: AnalysisKind, job_description: &str, resume_text: &str) -> String {
    let template = kind.template();

    let mut prompt = String::new();
    if !template.intro.is_empty() {
        prompt.push_str(template.intro);
        prompt.push_str("\n\n");
    }
    prompt.push_str("Job Description:\n");
    prompt.push_str(job_description);
    prompt.push_str("\n\nResume Content:\n");
    prompt.push_str(resume_text);
    prompt.push_str("\n\n");
    prompt.push_str(template.task);
    prompt
}
