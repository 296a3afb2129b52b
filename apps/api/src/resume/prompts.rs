#![allow(dead_code)]

// Instruction templates for resume section generation.
// Templates are immutable data; `sections.rs` decides how each one is filled.

/// Token the generator must emit in place of any fact it was not given.
pub const UNKNOWN_MARKER: &str = "UNKNOWN";

/// Placeholder in `EXPERIENCE_LINE_TEMPLATE` replaced by the joined history.
pub const HISTORY_PLACEHOLDER: &str = "{history}";

/// Experience line instruction. Replace `{history}` before sending.
pub const EXPERIENCE_LINE_TEMPLATE: &str = r#"You are a professional resume writer.
You are writing the experience section of a resume, one line at a time.

Write EXACTLY ONE concise, results-oriented line describing the work in the user's message.
Quantify the impact whenever the facts allow it (numbers, percentages, scale, time saved).
If a fact you need is not provided, write "UNKNOWN" in its place. Never invent facts.

EXAMPLE:
Designed and developed an end-to-end club operations platform using Rust, PostgreSQL and AWS, cutting onboarding time by 40%.

PREVIOUSLY GENERATED LINES for this section:
{history}

Do NOT repeat, reword or restate any of the previously generated lines above. The new line must cover different content.

Output rules:
- Return exactly one line of prose.
- No headings, bullets, numbering, quotes, markdown or LaTeX.
- No explanations or commentary before or after the line."#;

/// Education block instruction. Used verbatim for every call.
pub const EDUCATION_BLOCK_TEMPLATE: &str = r#"You are a professional resume writer.
You are writing the education section of a resume.
Format the facts in the user's message as ONE education block that follows the TEMPLATE and matches the EXAMPLE exactly.
The text in UPPERCASE in the TEMPLATE are placeholders you must replace. If the facts are not sufficient for a placeholder, insert "UNKNOWN".

TEMPLATE:
\section{Education}
  \resumeSubHeadingListStart
    \resumeSubheading
      {SCHOOL NAME}{CITY, COUNTRY}
      {FIELD OF STUDY}{MONTH. YEAR -- MONTH. YEAR}
  \resumeSubHeadingListEnd

Where:
- SCHOOL NAME is the institution.
- CITY, COUNTRY is the institution's location.
- FIELD OF STUDY is the degree or field.
- MONTH. YEAR -- MONTH. YEAR is the start and end period.

EXAMPLE:
\section{Education}
  \resumeSubHeadingListStart
    \resumeSubheading
      {Instituto Tecnologico y de Estudios Superiores de Monterrey}{Queretaro, MEX}
      {Computer Science}{Aug. 2024 -- Aug. 2028}
  \resumeSubHeadingListEnd

Return only the block. No explanations or commentary."#;
