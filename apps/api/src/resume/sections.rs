//! Section configurations — one tagged entry per resume section kind.
//!
//! Each `SectionConfig` says whether the section consumes history and how its
//! instruction is built. Adding a section means adding a kind, a template in
//! `prompts.rs`, and one entry here.

use std::fmt;
use std::str::FromStr;

use crate::resume::prompts::{EDUCATION_BLOCK_TEMPLATE, EXPERIENCE_LINE_TEMPLATE, HISTORY_PLACEHOLDER};

/// Separator used when joining history lines into the instruction.
pub const HISTORY_SEPARATOR: &str = "\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Experience,
    Education,
}

impl SectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Experience => "experience",
            SectionKind::Education => "education",
        }
    }

    pub fn config(&self) -> &'static SectionConfig {
        match self {
            SectionKind::Experience => &EXPERIENCE,
            SectionKind::Education => &EDUCATION,
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl fmt::Display for UnknownSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid resume part: '{}'", self.0)
    }
}

impl std::error::Error for UnknownSection {}

impl FromStr for SectionKind {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "experience" => Ok(SectionKind::Experience),
            "education" => Ok(SectionKind::Education),
            other => Err(UnknownSection(other.to_string())),
        }
    }
}

pub struct SectionConfig {
    pub kind: SectionKind,
    /// When false, any supplied history is ignored.
    pub requires_history: bool,
    /// Builds the instruction from the request content and the history
    /// (already emptied when `requires_history` is false).
    pub build_instruction: fn(&str, &[String]) -> String,
}

impl fmt::Debug for SectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SectionConfig")
            .field("kind", &self.kind)
            .field("requires_history", &self.requires_history)
            .finish_non_exhaustive()
    }
}

static EXPERIENCE: SectionConfig = SectionConfig {
    kind: SectionKind::Experience,
    requires_history: true,
    build_instruction: experience_instruction,
};

static EDUCATION: SectionConfig = SectionConfig {
    kind: SectionKind::Education,
    requires_history: false,
    build_instruction: education_instruction,
};

fn experience_instruction(_content: &str, history: &[String]) -> String {
    EXPERIENCE_LINE_TEMPLATE.replace(HISTORY_PLACEHOLDER, &history.join(HISTORY_SEPARATOR))
}

fn education_instruction(_content: &str, _history: &[String]) -> String {
    EDUCATION_BLOCK_TEMPLATE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::prompts::UNKNOWN_MARKER;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_known_parts() {
        assert_eq!("experience".parse::<SectionKind>(), Ok(SectionKind::Experience));
        assert_eq!("education".parse::<SectionKind>(), Ok(SectionKind::Education));
    }

    #[test]
    fn test_parse_unknown_part() {
        let err = "hobbies".parse::<SectionKind>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid resume part: 'hobbies'");
    }

    #[test]
    fn test_config_matches_kind() {
        for kind in [SectionKind::Experience, SectionKind::Education] {
            assert_eq!(kind.config().kind, kind);
        }
        assert!(SectionKind::Experience.config().requires_history);
        assert!(!SectionKind::Education.config().requires_history);
    }

    #[test]
    fn test_experience_instruction_embeds_history_in_order() {
        let instruction = experience_instruction("Built a CLI", &lines(&["Line A", "Line B"]));
        assert!(instruction.contains("Line A\nLine B"));
        assert!(!instruction.contains(HISTORY_PLACEHOLDER));
    }

    #[test]
    fn test_instructions_do_not_embed_content() {
        let instruction = experience_instruction("Secret facts", &[]);
        assert!(!instruction.contains("Secret facts"));
        assert!(!education_instruction("Secret facts", &[]).contains("Secret facts"));
    }

    #[test]
    fn test_experience_instruction_with_empty_history_is_well_formed() {
        let instruction = experience_instruction("Built a CLI", &[]);
        assert!(!instruction.contains(HISTORY_PLACEHOLDER));
        assert!(instruction.contains("PREVIOUSLY GENERATED LINES for this section:\n\n"));
        assert!(instruction.contains(UNKNOWN_MARKER));
        assert!(instruction.contains("Do NOT repeat"));
    }

    #[test]
    fn test_history_containing_placeholder_is_inserted_literally() {
        let instruction = experience_instruction("Built a CLI", &lines(&["Wrote {history} docs"]));
        assert!(instruction.contains("Wrote {history} docs"));
        assert_eq!(instruction.matches("{history}").count(), 1);
    }

    #[test]
    fn test_education_instruction_ignores_history() {
        assert_eq!(
            education_instruction("BSc", &lines(&["anything"])),
            education_instruction("MSc", &[])
        );
        assert_eq!(education_instruction("BSc", &[]), EDUCATION_BLOCK_TEMPLATE);
    }
}
