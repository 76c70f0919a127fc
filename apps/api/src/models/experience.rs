use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::store::HasId;

use super::{is_blank, missing_fields_error};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceType {
    Education,
    Work,
}

impl ExperienceType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "education" => Some(Self::Education),
            "work" => Some(Self::Work),
            _ => None,
        }
    }
}

/// One timeline entry. `period` is free text ("2021 - 2023", "Summer
/// 2019"), not a structured date range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Experience {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub company: String,
    pub period: String,
    #[serde(rename = "type")]
    pub kind: ExperienceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl HasId for Experience {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExperiencePatch {
    pub id: Option<String>,
    pub title: Option<String>,
    pub company: Option<String>,
    pub period: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub description: Option<String>,
}

impl ExperiencePatch {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut missing = Vec::new();
        if is_blank(&self.title) {
            missing.push("title");
        }
        if is_blank(&self.company) {
            missing.push("company");
        }
        if is_blank(&self.period) {
            missing.push("period");
        }
        if is_blank(&self.kind) {
            missing.push("type");
        }
        if !missing.is_empty() {
            return Err(missing_fields_error(&missing));
        }
        self.parsed_kind().map(|_| ())
    }

    fn parsed_kind(&self) -> Result<ExperienceType, AppError> {
        let raw = self.kind.as_deref().unwrap_or_default();
        ExperienceType::parse(raw).ok_or_else(|| {
            AppError::Validation("Type must be either 'education' or 'work'".to_string())
        })
    }

    pub fn apply_to(&self, existing: &Experience) -> Result<Experience, AppError> {
        Ok(Experience {
            id: existing.id.clone(),
            title: self
                .title
                .clone()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| existing.title.clone()),
            company: self
                .company
                .clone()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| existing.company.clone()),
            period: self
                .period
                .clone()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| existing.period.clone()),
            kind: self.parsed_kind()?,
            description: self
                .description
                .clone()
                .or_else(|| existing.description.clone()),
        })
    }

    pub fn into_record(self) -> Result<Experience, AppError> {
        self.validate()?;
        let kind = self.parsed_kind()?;
        Ok(Experience {
            id: self.id,
            title: self.title.unwrap_or_default(),
            company: self.company.unwrap_or_default(),
            period: self.period.unwrap_or_default(),
            kind,
            description: self.description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn existing() -> Experience {
        Experience {
            id: Some("e1".to_string()),
            title: "Software Developer".to_string(),
            company: "Acme".to_string(),
            period: "2021 - 2023".to_string(),
            kind: ExperienceType::Work,
            description: Some("Internal tooling".to_string()),
        }
    }

    #[test]
    fn test_validate_names_the_missing_period_field() {
        let patch = ExperiencePatch {
            title: Some("Software Developer".to_string()),
            company: Some("Acme".to_string()),
            kind: Some("work".to_string()),
            ..Default::default()
        };
        let err = patch.validate().unwrap_err();
        assert!(err.to_string().contains("period"));
    }

    #[test]
    fn test_validate_rejects_unknown_type() {
        let patch = ExperiencePatch {
            title: Some("Volunteer".to_string()),
            company: Some("Acme".to_string()),
            period: Some("2020".to_string()),
            kind: Some("volunteering".to_string()),
            ..Default::default()
        };
        let err = patch.validate().unwrap_err();
        assert!(err.to_string().contains("'education' or 'work'"));
    }

    #[test]
    fn test_apply_to_preserves_description_when_absent() {
        let patch = ExperiencePatch {
            title: Some("Senior Developer".to_string()),
            company: Some("Acme".to_string()),
            period: Some("2021 - 2024".to_string()),
            kind: Some("work".to_string()),
            ..Default::default()
        };
        let merged = patch.apply_to(&existing()).unwrap();
        assert_eq!(merged.title, "Senior Developer");
        assert_eq!(merged.period, "2021 - 2024");
        assert_eq!(merged.description.as_deref(), Some("Internal tooling"));
    }

    #[test]
    fn test_null_description_is_treated_as_absent() {
        let patch: ExperiencePatch = serde_json::from_value(json!({
            "title": "Senior Developer",
            "company": "Acme",
            "period": "2021 - 2024",
            "type": "work",
            "description": null
        }))
        .unwrap();
        let merged = patch.apply_to(&existing()).unwrap();
        assert_eq!(merged.description.as_deref(), Some("Internal tooling"));
    }

    #[test]
    fn test_kind_round_trips_through_the_wire_name() {
        let value = serde_json::to_value(existing()).unwrap();
        assert_eq!(value["type"], "work");
        let back: Experience = serde_json::from_value(value).unwrap();
        assert_eq!(back.kind, ExperienceType::Work);
    }
}
