mod experience;
mod project;
mod skill;

pub use experience::{Experience, ExperiencePatch, ExperienceType};
pub use project::{display_ordering, Project, ProjectPatch};
pub use skill::{Skill, SkillCategory, SkillPatch};

/// Required-field check shared by the patch validators. An empty string
/// counts as missing, matching how the admin forms submit blank inputs.
pub(crate) fn is_blank(field: &Option<String>) -> bool {
    field.as_deref().map_or(true, |s| s.is_empty())
}

pub(crate) fn missing_fields_error(missing: &[&str]) -> crate::errors::AppError {
    crate::errors::AppError::Validation(format!(
        "Missing required field(s): {}",
        missing.join(", ")
    ))
}
