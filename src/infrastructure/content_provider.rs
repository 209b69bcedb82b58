//! Loads the portfolio content once at startup

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use color_eyre::eyre::{Result, WrapErr};

use crate::{domain::content::Content, utils};

const CONTENT: &str = include_str!("../../.config/content.json5");
const CONTENT_FILE: &str = "content.json5";

/// Where the active content set came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    Embedded,
    File(PathBuf),
}

pub struct ContentProvider {
    source: ContentSource,
}

impl ContentProvider {
    /// Picks `explicit` first, then `content.json5` in the config directory,
    /// then the built-in set.
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        Self::resolve_in(explicit, &utils::get_config_dir())
    }

    pub fn resolve_in(explicit: Option<PathBuf>, config_dir: &Path) -> Self {
        let source = match explicit {
            Some(path) => ContentSource::File(path),
            None => {
                let candidate = config_dir.join(CONTENT_FILE);
                if candidate.exists() {
                    ContentSource::File(candidate)
                } else {
                    ContentSource::Embedded
                }
            }
        };
        Self { source }
    }

    pub fn source(&self) -> &ContentSource {
        &self.source
    }

    pub fn load(&self) -> Result<Arc<Content>> {
        let content = match &self.source {
            ContentSource::Embedded => embedded()?,
            ContentSource::File(path) => {
                let raw = std::fs::read_to_string(path)
                    .wrap_err_with(|| format!("Failed to read content from {}", path.display()))?;
                json5::from_str::<Content>(&raw)
                    .wrap_err_with(|| format!("Failed to parse content in {}", path.display()))?
            }
        };
        log::info!(
            "Loaded content for {} ({} projects) from {:?}",
            content.profile.name,
            content.projects.len(),
            self.source
        );
        Ok(Arc::new(content))
    }
}

/// The built-in content set
pub fn embedded() -> Result<Content> {
    json5::from_str(CONTENT).wrap_err("Failed to parse built-in content")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::content::{ProjectFilter, SkillCategory};

    #[test]
    fn test_embedded_content() -> Result<()> {
        let content = embedded()?;
        assert_eq!(content.profile.name, "Ashley Z Hove");
        assert_eq!(content.projects.len(), 5);
        assert_eq!(content.skills.by_category(SkillCategory::SystemAdmin).len(), 8);
        assert_eq!(
            content.project_filters(),
            vec![
                ProjectFilter::All,
                ProjectFilter::Category("Backend".into()),
                ProjectFilter::Category("Full-Stack".into()),
            ]
        );
        assert!(!content.education.courses.is_empty());
        Ok(())
    }

    #[test]
    fn test_resolve_prefers_explicit_path() {
        let provider =
            ContentProvider::resolve_in(Some(PathBuf::from("/tmp/me.json5")), Path::new("/nope"));
        assert_eq!(
            provider.source(),
            &ContentSource::File(PathBuf::from("/tmp/me.json5"))
        );
    }

    #[test]
    fn test_resolve_falls_back_to_embedded() -> Result<()> {
        let provider = ContentProvider::resolve_in(None, Path::new("/definitely/not/here"));
        assert_eq!(provider.source(), &ContentSource::Embedded);
        assert_eq!(provider.load()?.profile.name, "Ashley Z Hove");
        Ok(())
    }

    #[test]
    fn test_load_from_config_dir() -> Result<()> {
        let dir = std::env::temp_dir().join(format!("folio-content-{}", std::process::id()));
        std::fs::create_dir_all(&dir)?;
        std::fs::write(
            dir.join(CONTENT_FILE),
            r#"{ profile: { name: "Sam", title: "Dev", email: "sam@example.com" } }"#,
        )?;

        let provider = ContentProvider::resolve_in(None, &dir);
        let content = provider.load()?;
        assert_eq!(content.profile.name, "Sam");
        assert!(content.projects.is_empty());

        std::fs::remove_dir_all(&dir)?;
        Ok(())
    }

    #[test]
    fn test_load_reports_missing_file() {
        let provider = ContentProvider::resolve_in(
            Some(PathBuf::from("/definitely/not/here.json5")),
            Path::new("/nope"),
        );
        let err = provider.load().expect_err("missing file fails");
        assert!(err.to_string().contains("Failed to read content"));
    }
}
