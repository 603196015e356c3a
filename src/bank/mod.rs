mod builtin;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, EnumIter, Display)]
pub enum Role {
    #[strum(serialize = "Frontend Developer")]
    FrontendDeveloper,
    #[strum(serialize = "Backend Developer")]
    BackendDeveloper,
    #[strum(serialize = "Software Engineer")]
    SoftwareEngineer,
    #[strum(serialize = "Full Stack Engineer")]
    FullStackEngineer,
    #[strum(serialize = "Data Science")]
    DataScience,
    #[strum(serialize = "Data Analyst")]
    DataAnalyst,
}

impl Role {
    pub const DEFAULT: Role = Role::FrontendDeveloper;
}

/// A question together with the key points a good answer is expected to mention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub question: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// A themed cluster of candidates; one of them is asked per session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicGroup {
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct BankFile {
    default_role: Option<String>,
    roles: BTreeMap<String, Vec<TopicGroup>>,
}

#[derive(Debug, Clone)]
pub struct QuestionBank {
    default_role: String,
    roles: BTreeMap<String, Vec<TopicGroup>>,
}

impl QuestionBank {
    pub fn builtin() -> Self {
        let roles = Role::iter()
            .map(|role| {
                let groups = builtin::groups(role)
                    .iter()
                    .map(|group| TopicGroup {
                        candidates: group
                            .iter()
                            .map(|(question, keywords)| Candidate {
                                question: (*question).to_owned(),
                                keywords: keywords.iter().map(|k| (*k).to_owned()).collect(),
                            })
                            .collect(),
                    })
                    .collect();
                (role.to_string(), groups)
            })
            .collect();

        Self {
            default_role: Role::DEFAULT.to_string(),
            roles,
        }
    }

    pub async fn load(path: &Path) -> Result<Self> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read question bank `{}`", path.display()))?;

        Self::from_toml_str(&contents)
            .with_context(|| format!("Invalid question bank `{}`", path.display()))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: BankFile = toml::from_str(contents).context("Failed to parse question bank TOML")?;

        if file.roles.is_empty() {
            bail!("Question bank defines no roles");
        }

        for (role, groups) in &file.roles {
            if groups.is_empty() {
                bail!("Role `{role}` has no topic groups");
            }
            if let Some(index) = groups.iter().position(|group| group.candidates.is_empty()) {
                bail!("Topic group {} of role `{role}` has no candidates", index + 1);
            }
        }

        let default_role = file
            .default_role
            .unwrap_or_else(|| Role::DEFAULT.to_string());
        if !file.roles.contains_key(&default_role) {
            bail!("Default role `{default_role}` is not defined in the question bank");
        }

        Ok(Self {
            default_role,
            roles: file.roles,
        })
    }

    pub fn contains(&self, role: &str) -> bool {
        self.roles.contains_key(role)
    }

    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.roles.keys().map(String::as_str)
    }

    /// Looks up the topic groups for `role`, falling back to the default role
    /// when the role is absent or not in the bank.
    pub fn resolve(&self, role: Option<&str>) -> (&str, &[TopicGroup]) {
        let role = role
            .filter(|role| !role.is_empty())
            .unwrap_or(&self.default_role);

        match self.roles.get_key_value(role) {
            Some((name, groups)) => (name.as_str(), groups.as_slice()),
            None => {
                tracing::debug!(role, fallback = %self.default_role, "Unknown role, using default");
                let groups = &self.roles[&self.default_role];
                (self.default_role.as_str(), groups.as_slice())
            }
        }
    }
}
