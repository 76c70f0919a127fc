use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::store::HasId;

use super::{is_blank, missing_fields_error};

/// Closed set of skill groupings shown on the home page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Professional,
    Languages,
    Technologies,
}

impl SkillCategory {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "professional" => Some(Self::Professional),
            "languages" => Some(Self::Languages),
            "technologies" => Some(Self::Technologies),
            _ => None,
        }
    }
}

/// One skill tag. `label` may be empty for icon-only entries; `icon`
/// names a front-end icon component and is treated as an opaque string
/// here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub icon: String,
    #[serde(default)]
    pub label: String,
    pub category: SkillCategory,
    #[serde(rename = "iconSize", skip_serializing_if = "Option::is_none")]
    pub icon_size: Option<String>,
}

impl HasId for Skill {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }
}

/// Caller-supplied skill payload. Every field is optional so that an
/// update only touches the fields actually submitted; `category` stays
/// a raw string until validation so a bad value is reported as a
/// validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SkillPatch {
    pub id: Option<String>,
    pub icon: Option<String>,
    pub label: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "iconSize")]
    pub icon_size: Option<String>,
}

impl SkillPatch {
    /// Checks required fields and the category value. Runs before any
    /// store access so a bad payload never triggers a file read.
    pub fn validate(&self) -> Result<(), AppError> {
        let mut missing = Vec::new();
        if is_blank(&self.icon) {
            missing.push("icon");
        }
        if is_blank(&self.category) {
            missing.push("category");
        }
        if !missing.is_empty() {
            return Err(missing_fields_error(&missing));
        }
        self.parsed_category().map(|_| ())
    }

    fn parsed_category(&self) -> Result<SkillCategory, AppError> {
        let raw = self.category.as_deref().unwrap_or_default();
        SkillCategory::parse(raw).ok_or_else(|| {
            AppError::Validation(
                "Category must be one of 'professional', 'languages', or 'technologies'"
                    .to_string(),
            )
        })
    }

    /// Shallow merge over an existing record: fields present in the
    /// patch overwrite, absent fields are preserved.
    pub fn apply_to(&self, existing: &Skill) -> Result<Skill, AppError> {
        Ok(Skill {
            id: existing.id.clone(),
            icon: self
                .icon
                .clone()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| existing.icon.clone()),
            label: self.label.clone().unwrap_or_else(|| existing.label.clone()),
            category: self.parsed_category()?,
            icon_size: self
                .icon_size
                .clone()
                .or_else(|| existing.icon_size.clone()),
        })
    }

    /// Builds a brand-new record from the patch. A supplied id is kept;
    /// a missing one is assigned by the store on save.
    pub fn into_record(self) -> Result<Skill, AppError> {
        self.validate()?;
        let category = self.parsed_category()?;
        Ok(Skill {
            id: self.id,
            icon: self.icon.unwrap_or_default(),
            label: self.label.unwrap_or_default(),
            category,
            icon_size: self.icon_size,
        })
    }
}
