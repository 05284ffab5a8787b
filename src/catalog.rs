//! Read-only portfolio content the assistant answers from
use std::path::Path;

use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};

const DEFAULT_CATALOG: &str = include_str!("default_catalog.toml");

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ContentCatalog {
    /// Shown as the page heading
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub experience: Vec<Experience>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Project {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SkillGroup {
    pub title: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Skill {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Education {
    pub degree: String,
    pub school: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
}

impl ContentCatalog {
    /// The catalog compiled into the binary
    pub fn embedded() -> Result<ContentCatalog> {
        toml::from_str(DEFAULT_CATALOG).context("Failed to parse embedded catalog")
    }

    /// Loads a catalog from a toml file
    pub async fn load(path: impl AsRef<Path>) -> Result<ContentCatalog> {
        let path = path.as_ref();
        let file = tokio::fs::read(path)
            .await
            .with_context(|| format!("Could not read catalog `{}`", path.display()))?;

        toml::from_str(std::str::from_utf8(&file)?).context("Failed to parse catalog")
    }
}
