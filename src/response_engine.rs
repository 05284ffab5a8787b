//! Deterministic, rule based answers to visitor questions
//!
//! Rules are evaluated top to bottom and the first predicate that matches the normalized query
//! produces the answer. Nothing is remembered between queries.
use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::{catalog::ContentCatalog, rich_text::RichText};

static GREETING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(hi|hii+|hello+|hey+)$").expect("valid greeting regex"));

/// An ordered (predicate, content) pair
pub struct Rule {
    pub name: &'static str,
    matches: fn(&str) -> bool,
    respond: fn(&ContentCatalog) -> RichText,
}

impl Rule {
    pub fn matches(&self, normalized_query: &str) -> bool {
        (self.matches)(normalized_query)
    }

    pub fn respond(&self, catalog: &ContentCatalog) -> RichText {
        (self.respond)(catalog)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

#[derive(Debug, Clone)]
pub struct ResponseEngine {
    catalog: Arc<ContentCatalog>,
    rules: Arc<[Rule]>,
}

impl ResponseEngine {
    pub fn new(catalog: Arc<ContentCatalog>) -> Self {
        Self {
            catalog,
            rules: default_rules().into(),
        }
    }

    /// Name of the rule that answers `query`, `None` if the fallback answers
    #[cfg(test)]
    fn matching_rule(&self, query: &str) -> Option<&'static str> {
        let query = normalize(query);
        self.rules
            .iter()
            .find(|rule| rule.matches(&query))
            .map(|rule| rule.name)
    }

    pub fn respond(&self, query: &str) -> RichText {
        let normalized = normalize(query);

        match self.rules.iter().find(|rule| rule.matches(&normalized)) {
            Some(rule) => {
                tracing::debug!(rule = rule.name, "Answering query");
                rule.respond(&self.catalog)
            }
            None => {
                tracing::debug!("No rule matched, answering with fallback");
                fallback()
            }
        }
    }
}

fn normalize(query: &str) -> String {
    query.to_lowercase().trim().to_string()
}

/// Rules in evaluation order
#[must_use]
pub fn default_rules() -> Vec<Rule> {
    vec![
        Rule {
            name: "greeting",
            matches: |q| GREETING.is_match(q),
            respond: |_| greeting(),
        },
        Rule {
            name: "projects",
            matches: |q| q.contains("project"),
            respond: projects,
        },
        Rule {
            name: "skills",
            matches: |q| q.contains("skill"),
            respond: skills,
        },
        Rule {
            name: "education",
            matches: |q| q.contains("education"),
            respond: education,
        },
        Rule {
            name: "experience",
            matches: |q| q.contains("experience"),
            respond: experience,
        },
    ]
}

fn topics(rich: RichText, ordered: [&str; 4]) -> RichText {
    rich.emphasis(ordered[0])
        .plain(", ")
        .emphasis(ordered[1])
        .plain(", ")
        .emphasis(ordered[2])
        .plain(", or ")
        .emphasis(ordered[3])
}

/// The seeded message a fresh chat window starts with
#[must_use]
pub fn welcome(assistant_name: &str) -> RichText {
    let rich = RichText::new()
        .plain("Hi 👋")
        .line_break()
        .line_break()
        .plain("I’m ")
        .emphasis(assistant_name)
        .plain(".")
        .line_break()
        .plain("Ask me about ");

    topics(rich, ["Projects", "Skills", "Experience", "Education"]).plain(".")
}

#[must_use]
pub fn greeting() -> RichText {
    let rich = RichText::new()
        .plain("Hello 👋😊")
        .line_break()
        .plain("Ask about ");

    topics(rich, ["Projects", "Skills", "Education", "Experience"]).plain(".")
}

#[must_use]
pub fn fallback() -> RichText {
    let rich = RichText::new()
        .plain("🤖 I didn’t understand that.")
        .line_break()
        .plain("Try ");

    topics(rich, ["Projects", "Skills", "Education", "Experience"]).plain(" 🙂")
}

fn projects(catalog: &ContentCatalog) -> RichText {
    RichText::join(
        catalog
            .projects
            .iter()
            .map(|project| RichText::new().plain("• ").emphasis(&project.title)),
        1,
    )
}

fn skills(catalog: &ContentCatalog) -> RichText {
    RichText::join(
        catalog.skills.iter().map(|group| {
            let names = group
                .skills
                .iter()
                .map(|skill| skill.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");

            RichText::new()
                .emphasis(&group.title)
                .plain(format!(": {names}"))
        }),
        2,
    )
}

fn education(catalog: &ContentCatalog) -> RichText {
    RichText::join(
        catalog.education.iter().map(|entry| {
            RichText::new()
                .plain("🎓 ")
                .emphasis(&entry.degree)
                .plain(format!(" — {}", entry.school))
        }),
        1,
    )
}

fn experience(catalog: &ContentCatalog) -> RichText {
    RichText::join(
        catalog.experience.iter().map(|entry| {
            RichText::new()
                .plain("💼 ")
                .emphasis(&entry.role)
                .plain(format!(" at {}", entry.company))
        }),
        1,
    )
}
