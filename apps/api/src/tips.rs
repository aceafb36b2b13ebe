//! Static resume-writing reference content: three topic sections plus a
//! common-mistakes list. Purely informational — no LLM or extraction calls.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TipSection {
    pub id: &'static str,
    pub title: &'static str,
    pub tips: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct TipsResponse {
    pub sections: &'static [TipSection],
    pub common_mistakes: &'static [&'static str],
}

const SECTIONS: &[TipSection] = &[
    TipSection {
        id: "ats_optimization",
        title: "ATS Optimization Tips",
        tips: &[
            "Use standard section headings (e.g., \"Work Experience\", \"Education\")",
            "Include keywords from the job description naturally",
            "Avoid tables, columns, and graphics that might confuse ATS",
            "Use common fonts like Arial, Times New Roman, or Calibri",
            "Save as PDF unless specified otherwise",
            "Don't use headers/footers for critical information",
        ],
    },
    TipSection {
        id: "content",
        title: "Content Tips",
        tips: &[
            "Focus on achievements rather than responsibilities",
            "Use action verbs and quantify results when possible",
            "Tailor your resume for each job application",
            "Keep it concise (1-2 pages for most professionals)",
            "Include relevant skills and certifications",
            "Proofread multiple times for errors",
        ],
    },
    TipSection {
        id: "formatting",
        title: "Formatting Guidelines",
        tips: &[
            "Maintain consistent formatting throughout",
            "Use 10-12pt font size for body text",
            "Leave adequate white space (1-inch margins)",
            "Use bold/italic sparingly for emphasis",
            "List experience in reverse chronological order",
            "Ensure good contrast between text and background",
        ],
    },
];

const COMMON_MISTAKES: &[&str] = &[
    "Spelling and grammatical errors",
    "Including irrelevant personal information",
    "Using unprofessional email addresses",
    "Listing every job you've ever had",
    "Being too vague or using clichés",
    "Including references on the resume",
    "Using an outdated format",
];

/// GET /api/v1/tips
pub async fn handle_tips() -> Json<TipsResponse> {
    Json(TipsResponse {
        sections: SECTIONS,
        common_mistakes: COMMON_MISTAKES,
    })
}
