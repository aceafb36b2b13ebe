//! The fixed analysis catalogue: every analysis the service can run, with
//! its immutable instruction text. Templates live here — composition logic
//! lives in `compose` — so the texts can be tested and swapped
//! independently of how prompts are assembled.

use serde::{Deserialize, Serialize};

/// One fixed prompt template. `intro` frames the request ahead of the
/// labeled inputs and may be empty; `task` closes the prompt with the
/// actual instruction.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub intro: &'static str,
    pub task: &'static str,
}

/// Every analysis the service offers. Three basic, four premium-gated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisKind {
    Evaluation,
    AtsMatch,
    Improvement,
    CareerPath,
    SalaryBenchmark,
    CompetitorAnalysis,
    ResumeRewrite,
}

impl AnalysisKind {
    /// The three analyses available without an upgrade.
    pub const BASIC: [AnalysisKind; 3] = [
        AnalysisKind::Evaluation,
        AnalysisKind::AtsMatch,
        AnalysisKind::Improvement,
    ];

    /// The four analyses run (in this order) by the combined premium action.
    pub const PREMIUM: [AnalysisKind; 4] = [
        AnalysisKind::CareerPath,
        AnalysisKind::SalaryBenchmark,
        AnalysisKind::CompetitorAnalysis,
        AnalysisKind::ResumeRewrite,
    ];

    /// Display title used in response bodies.
    pub fn title(self) -> &'static str {
        match self {
            AnalysisKind::Evaluation => "Resume Evaluation",
            AnalysisKind::AtsMatch => "ATS Match",
            AnalysisKind::Improvement => "Improvement Suggestions",
            AnalysisKind::CareerPath => "Career Path Projection",
            AnalysisKind::SalaryBenchmark => "Salary Benchmarking",
            AnalysisKind::CompetitorAnalysis => "Competitor Analysis",
            AnalysisKind::ResumeRewrite => "Resume Rewrite",
        }
    }

    pub fn template(self) -> Template {
        match self {
            AnalysisKind::Evaluation => EVALUATION,
            AnalysisKind::AtsMatch => ATS_MATCH,
            AnalysisKind::Improvement => IMPROVEMENT,
            AnalysisKind::CareerPath => CAREER_PATH,
            AnalysisKind::SalaryBenchmark => SALARY_BENCHMARK,
            AnalysisKind::CompetitorAnalysis => COMPETITOR_ANALYSIS,
            AnalysisKind::ResumeRewrite => RESUME_REWRITE,
        }
    }
}

const EVALUATION: Template = Template {
    intro: "You are an experienced Technical expert and HR in the field of computer science. \
        Your task is to review the provided resume against this job description:",
    task: "Please share your professional evaluation on whether the candidate's profile \
        aligns with the role. Highlight the strengths and weaknesses of the applicant \
        in relation to the specified job requirements.",
};

const ATS_MATCH: Template = Template {
    intro: "You are a skilled ATS (Applicant Tracking System) scanner with a deep \
        understanding of Computer Science Engineering and Technology field and ATS \
        functionality. Your task is to evaluate this resume against the provided job \
        description:",
    task: "Give me the percentage of match if the resume matches the job description. \
        First, the output should come as a percentage. \
        Then list keywords missing in the resume. \
        Finally provide your overall assessment.",
};

const IMPROVEMENT: Template = Template {
    intro: "You are a expert in computer science field with 30 years of experience. \
        After evaluating this resume against the job description:",
    task: "Tell the candidate how they can improve their resume by:\n\
        1. Addressing missing skills\n\
        2. Suggesting how to acquire those skills\n\
        3. Highlighting key points to emphasize\n\
        4. Recommending structural improvements",
};

const CAREER_PATH: Template = Template {
    intro: "",
    task: "Task:\n\
        Analyze the candidate's resume and the provided job description to suggest \
        potential career paths and growth opportunities. Consider the candidate's \
        current skills, experience, and how they align with industry trends. Provide \
        a 5-year career projection with recommended skills to acquire.",
};

const SALARY_BENCHMARK: Template = Template {
    intro: "",
    task: "Task:\n\
        Based on the candidate's qualifications and the job requirements, provide a \
        salary benchmark for this position in different regions (US, Europe, Asia). \
        Include factors that might affect compensation and negotiation tips.",
};

const COMPETITOR_ANALYSIS: Template = Template {
    intro: "",
    task: "Task:\n\
        Compare this resume against typical candidates for this position. Highlight \
        competitive advantages and potential gaps compared to top performers in this \
        role. Provide actionable insights to become a top-tier candidate.",
};

const RESUME_REWRITE: Template = Template {
    intro: "Rewrite this resume to better match the job description while maintaining \
        all factual information. Focus on optimizing for ATS systems and improving \
        impact. Keep the same format but enhance the wording.",
    task: "Provide the rewritten version with clear section headings.",
};
