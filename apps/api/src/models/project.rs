use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::store::HasId;

use super::{is_blank, missing_fields_error};

/// One portfolio project. `year` is free text so entries like
/// "2023 - ongoing" stay representable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub year: String,
    pub description: String,
    pub tools_used: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

impl HasId for Project {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }
}

/// Display comparator: explicitly ordered projects come first (lower
/// `order` wins); the rest fall back to descending year. Stable sorts
/// keep insertion order between ties.
pub fn display_ordering(a: &Project, b: &Project) -> Ordering {
    match (a.order, b.order) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => b.year.cmp(&a.year),
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectPatch {
    pub id: Option<String>,
    pub title: Option<String>,
    pub year: Option<String>,
    pub description: Option<String>,
    pub tools_used: Option<Vec<String>>,
    pub image: Option<String>,
    pub link: Option<String>,
    pub featured: Option<bool>,
    pub order: Option<u32>,
}

impl ProjectPatch {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut missing = Vec::new();
        if is_blank(&self.title) {
            missing.push("title");
        }
        if is_blank(&self.year) {
            missing.push("year");
        }
        if is_blank(&self.description) {
            missing.push("description");
        }
        if !missing.is_empty() {
            return Err(missing_fields_error(&missing));
        }
        if self.tools_used.is_none() {
            return Err(AppError::Validation(
                "tools_used must be an array".to_string(),
            ));
        }
        Ok(())
    }

    pub fn apply_to(&self, existing: &Project) -> Project {
        Project {
            id: existing.id.clone(),
            title: self
                .title
                .clone()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| existing.title.clone()),
            year: self
                .year
                .clone()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| existing.year.clone()),
            description: self
                .description
                .clone()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| existing.description.clone()),
            tools_used: self
                .tools_used
                .clone()
                .unwrap_or_else(|| existing.tools_used.clone()),
            image: self.image.clone().or_else(|| existing.image.clone()),
            link: self.link.clone().or_else(|| existing.link.clone()),
            featured: self.featured.or(existing.featured),
            order: self.order.or(existing.order),
        }
    }

    pub fn into_record(self) -> Result<Project, AppError> {
        self.validate()?;
        Ok(Project {
            id: self.id,
            title: self.title.unwrap_or_default(),
            year: self.year.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            tools_used: self.tools_used.unwrap_or_default(),
            image: self.image,
            link: self.link,
            featured: self.featured,
            order: self.order,
        })
    }
}
