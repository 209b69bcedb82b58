//! Static portfolio content
//!
//! Everything the sections display comes from a [`Content`] value that is
//! loaded once at startup and never mutated afterwards.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub bio: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency in percent
    pub level: u8,
}

impl Skill {
    /// Level clamped to 0..=100
    pub fn ratio(&self) -> f64 {
        f64::from(self.level.min(100)) / 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
pub enum SkillCategory {
    #[default]
    #[strum(to_string = "Frontend")]
    Frontend,
    #[strum(to_string = "Backend")]
    Backend,
    #[strum(to_string = "System Admin")]
    SystemAdmin,
    #[strum(to_string = "Tools")]
    Tools,
}

impl SkillCategory {
    pub fn index(self) -> usize {
        SkillCategory::iter()
            .position(|c| c == self)
            .unwrap_or_default()
    }

    pub fn next(self) -> Self {
        let all: Vec<_> = SkillCategory::iter().collect();
        all[(self.index() + 1) % all.len()]
    }

    pub fn previous(self) -> Self {
        let all: Vec<_> = SkillCategory::iter().collect();
        all[(self.index() + all.len() - 1) % all.len()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skills {
    #[serde(default)]
    pub frontend: Vec<Skill>,
    #[serde(default)]
    pub backend: Vec<Skill>,
    #[serde(default)]
    pub system_admin: Vec<Skill>,
    #[serde(default)]
    pub tools: Vec<Skill>,
}

impl Skills {
    pub fn by_category(&self, category: SkillCategory) -> &[Skill] {
        match category {
            SkillCategory::Frontend => &self.frontend,
            SkillCategory::Backend => &self.backend,
            SkillCategory::SystemAdmin => &self.system_admin,
            SkillCategory::Tools => &self.tools,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: u32,
    pub company: String,
    pub position: String,
    pub duration: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub long_description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub year: String,
    #[serde(default)]
    pub courses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principle {
    pub principle: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub company: String,
    pub text: String,
    #[serde(default)]
    pub role: String,
}

/// The complete, read-only content set
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    #[serde(alias = "personalInfo")]
    pub profile: Profile,
    #[serde(default)]
    pub skills: Skills,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub education: Education,
    #[serde(default)]
    pub philosophy: Vec<Principle>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
}

impl Content {
    /// `All` followed by every project category, in first-seen order
    pub fn project_filters(&self) -> Vec<ProjectFilter> {
        let mut filters = vec![ProjectFilter::All];
        for project in &self.projects {
            let filter = ProjectFilter::Category(project.category.clone());
            if !filters.contains(&filter) {
                filters.push(filter);
            }
        }
        filters
    }

    pub fn filtered_projects<'a>(&'a self, filter: &ProjectFilter) -> Vec<&'a Project> {
        self.projects.iter().filter(|p| filter.matches(p)).collect()
    }
}

/// Category selection on the projects section
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ProjectFilter {
    #[default]
    All,
    Category(String),
}

impl ProjectFilter {
    pub fn matches(&self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Category(category) => project.category == *category,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ProjectFilter::All => "All",
            ProjectFilter::Category(category) => category,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn project(id: u32, category: &str) -> Project {
        Project {
            id,
            title: format!("Project {id}"),
            description: String::new(),
            long_description: String::new(),
            technologies: vec![],
            features: vec![],
            category: category.to_string(),
        }
    }

    fn content() -> Content {
        Content {
            projects: vec![
                project(1, "Backend"),
                project(2, "Full-Stack"),
                project(3, "Full-Stack"),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_project_filters_first_seen_order() {
        assert_eq!(
            content().project_filters(),
            vec![
                ProjectFilter::All,
                ProjectFilter::Category("Backend".into()),
                ProjectFilter::Category("Full-Stack".into()),
            ]
        );
    }

    #[test]
    fn test_filtered_projects() {
        let content = content();
        assert_eq!(content.filtered_projects(&ProjectFilter::All).len(), 3);

        let full_stack =
            content.filtered_projects(&ProjectFilter::Category("Full-Stack".into()));
        let ids: Vec<u32> = full_stack.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3]);

        assert!(content
            .filtered_projects(&ProjectFilter::Category("Frontend".into()))
            .is_empty());
    }

    #[test]
    fn test_skill_category_cycle() {
        assert_eq!(SkillCategory::Frontend.next(), SkillCategory::Backend);
        assert_eq!(SkillCategory::Tools.next(), SkillCategory::Frontend);
        assert_eq!(SkillCategory::Frontend.previous(), SkillCategory::Tools);
        assert_eq!(SkillCategory::SystemAdmin.to_string(), "System Admin");
    }

    #[test]
    fn test_skill_ratio_is_clamped() {
        let skill = Skill {
            name: "Rust".into(),
            level: 150,
        };
        assert_eq!(skill.ratio(), 1.0);
    }

    #[test]
    fn test_deserialize_camel_case() -> Result<(), json5::Error> {
        let content: Content = json5::from_str(
            r#"{
                personalInfo: { name: "A", title: "B", email: "a@b.c" },
                skills: { systemAdmin: [{ name: "Linux", level: 92 }] },
                projects: [{
                    id: 1, title: "T", description: "D",
                    longDescription: "L", category: "Backend"
                }],
            }"#,
        )?;
        assert_eq!(content.profile.name, "A");
        assert_eq!(content.skills.system_admin[0].level, 92);
        assert_eq!(content.projects[0].long_description, "L");
        assert!(content.testimonials.is_empty());
        Ok(())
    }
}
