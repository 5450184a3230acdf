//! Static document templates and placeholder substitution.

use chrono::{Datelike, NaiveDate};

/// Files written into every new project, as (relative path, template).
pub(crate) const FILES: &[(&str, &str)] = &[
    ("genesis.md", include_str!("templates/genesis.md")),
    ("task_plan.md", include_str!("templates/task_plan.md")),
    ("progress.md", include_str!("templates/progress.md")),
    ("findings.md", include_str!("templates/findings.md")),
    ("changelog.md", include_str!("templates/changelog.md")),
    (".agent/hub/agent.md", include_str!("templates/agent.md")),
    (".agent/hub/router.md", include_str!("templates/router.md")),
    (".agent/skills/_registry.md", include_str!("templates/registry.md")),
    (".agent/config/skill-search.md", include_str!("templates/skill_search.md")),
    ("README.md", include_str!("templates/readme.md")),
    (".gitignore", include_str!("templates/gitignore")),
];

/// Files written after the LICENSE, as (relative path, template).
pub(crate) const TRAILING_FILES: &[(&str, &str)] = &[
    ("CHANGELOG.md", include_str!("templates/CHANGELOG.md")),
    (".env", include_str!("templates/env")),
    (".tmp/.gitkeep", ""),
];

/// Values substituted into templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateVars {
    /// Replaces `{{project_name}}`.
    pub project_name: String,
    /// Replaces `{{date}}`, formatted `YYYY-MM-DD`.
    pub date: String,
    /// Replaces `{{year}}`.
    pub year: i32,
}

impl TemplateVars {
    /// Builds the variables for a project created on `today`.
    #[must_use]
    pub fn new(project_name: impl Into<String>, today: NaiveDate) -> Self {
        Self {
            project_name: project_name.into(),
            date: today.format("%Y-%m-%d").to_string(),
            year: today.year(),
        }
    }

    /// Substitutes all placeholders in `template`.
    #[must_use]
    pub fn render(&self, template: &str) -> String {
        template
            .replace("{{project_name}}", &self.project_name)
            .replace("{{date}}", &self.date)
            .replace("{{year}}", &self.year.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars() -> TemplateVars {
        TemplateVars::new("demo", NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
    }

    #[test]
    fn test_new() {
        let vars = vars();
        assert_eq!(vars.date, "2024-01-15");
        assert_eq!(vars.year, 2024);
    }

    #[test]
    fn test_render() {
        let out = vars().render("{{project_name}} started {{date}} (c) {{year}} {{project_name}}");
        assert_eq!(out, "demo started 2024-01-15 (c) 2024 demo");
    }

    #[test]
    fn test_render_leaves_other_braces() {
        let out = vars().render("{\n  \"TODO\": \"{{project_name}}\"\n}");
        assert_eq!(out, "{\n  \"TODO\": \"demo\"\n}");
    }

    #[test]
    fn test_no_placeholder_survives() {
        let vars = vars();
        for (path, template) in FILES.iter().chain(TRAILING_FILES) {
            let rendered = vars.render(template);
            assert!(!rendered.contains("{{"), "{path} kept a placeholder");
        }
    }

    #[test]
    fn test_file_count() {
        assert_eq!(FILES.len() + TRAILING_FILES.len(), 14);
    }
}
