use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The complete user-entered record: identity, experience and skills.
/// Shown in the preview and serialized into the audit prompt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub display_name: String,
    pub bio: String,
    pub github_handle: String,
    pub twitter_handle: String,
    pub website_url: String,
    /// Display order is insertion order.
    pub experience: Vec<Experience>,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: Uuid,
    pub role: String,
    pub organization: String,
    pub is_web3_native: bool,
    /// Free text, e.g. "2022 - present".
    pub duration: String,
    pub description: String,
}

impl Experience {
    /// A fresh position block: new id, every field empty.
    pub fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            role: String::new(),
            organization: String::new(),
            is_web3_native: false,
            duration: String::new(),
            description: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    #[default]
    Tech,
    Soft,
    Web3,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    /// Always `Tech` at creation; nothing reads it yet.
    pub category: SkillCategory,
}

impl Skill {
    pub fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.trim().to_lowercase(),
            category: SkillCategory::Tech,
        }
    }
}

/// Identity fields of a profile that can be edited as free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    DisplayName,
    Bio,
    GithubHandle,
    TwitterHandle,
    WebsiteUrl,
}

/// A single-field edit of an experience entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "snake_case")]
pub enum ExperienceUpdate {
    Role(String),
    Organization(String),
    IsWeb3Native(bool),
    Duration(String),
    Description(String),
}

impl ExperienceUpdate {
    pub fn apply(self, entry: &mut Experience) {
        match self {
            ExperienceUpdate::Role(v) => entry.role = v,
            ExperienceUpdate::Organization(v) => entry.organization = v,
            ExperienceUpdate::IsWeb3Native(v) => entry.is_web3_native = v,
            ExperienceUpdate::Duration(v) => entry.duration = v,
            ExperienceUpdate::Description(v) => entry.description = v,
        }
    }
}
