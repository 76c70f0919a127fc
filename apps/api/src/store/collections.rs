use std::path::PathBuf;

use crate::models::{Experience, Project, Skill};

use super::file_store::{ensure_id, FileStore, StoreError};
use super::seed;

const SKILLS: &str = "skills";
const EXPERIENCES: &str = "experiences";
const PROJECTS: &str = "projects";

/// The three portfolio collections, bound to fixed file names and
/// bootstrap seeds. Every save path maps records through `ensure_id`,
/// so whatever the handlers did upstream, nothing reaches disk without
/// an identity.
#[derive(Debug, Clone)]
pub struct ContentStore {
    files: FileStore,
}

impl ContentStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            files: FileStore::new(dir),
        }
    }

    pub async fn skills(&self) -> Result<Vec<Skill>, StoreError> {
        self.files.load(SKILLS, &seed::default_skills()).await
    }

    pub async fn save_skills(&self, skills: Vec<Skill>) -> Result<(), StoreError> {
        let skills: Vec<Skill> = skills.into_iter().map(ensure_id).collect();
        self.files.save(SKILLS, &skills).await
    }

    pub async fn experiences(&self) -> Result<Vec<Experience>, StoreError> {
        self.files.load(EXPERIENCES, &[]).await
    }

    pub async fn save_experiences(&self, experiences: Vec<Experience>) -> Result<(), StoreError> {
        let experiences: Vec<Experience> = experiences.into_iter().map(ensure_id).collect();
        self.files.save(EXPERIENCES, &experiences).await
    }

    pub async fn projects(&self) -> Result<Vec<Project>, StoreError> {
        self.files.load(PROJECTS, &[]).await
    }

    pub async fn save_projects(&self, projects: Vec<Project>) -> Result<(), StoreError> {
        let projects: Vec<Project> = projects.into_iter().map(ensure_id).collect();
        self.files.save(PROJECTS, &projects).await
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use crate::models::{Experience, ExperienceType};

    use super::*;

    #[tokio::test]
    async fn test_skills_bootstrap_with_the_default_set() {
        let dir = tempdir().unwrap();
        let store = ContentStore::new(dir.path());

        let first = store.skills().await.unwrap();
        assert!(!first.is_empty());
        assert!(dir.path().join("skills.json").exists());

        let second = store.skills().await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_experiences_and_projects_bootstrap_empty() {
        let dir = tempdir().unwrap();
        let store = ContentStore::new(dir.path());

        assert!(store.experiences().await.unwrap().is_empty());
        assert!(store.projects().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_assigns_identities_before_persisting() {
        let dir = tempdir().unwrap();
        let store = ContentStore::new(dir.path());

        store
            .save_experiences(vec![Experience {
                id: None,
                title: "Intern".to_string(),
                company: "Acme".to_string(),
                period: "Summer 2019".to_string(),
                kind: ExperienceType::Work,
                description: None,
            }])
            .await
            .unwrap();

        let loaded = store.experiences().await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(loaded[0].id.as_deref().is_some_and(|id| !id.is_empty()));
    }
}
