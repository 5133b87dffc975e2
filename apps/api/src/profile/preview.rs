//! Preview card — what the builder's live preview shows for a profile,
//! with the placeholder copy used when a section is still empty.

use serde::Serialize;

use crate::models::profile::Profile;

pub const ANON_NAME: &str = "anon builder";
pub const EMPTY_BIO: &str = "seeking alpha...";
pub const EMPTY_EXPERIENCE: &str = "no blocks mined yet...";
pub const EMPTY_SKILLS: &str = "loading modules...";
pub const WATERMARK: &str = "verified by vibecode";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PreviewCard {
    pub heading: String,
    pub tagline: String,
    pub links: Vec<String>,
    pub experience: Vec<PreviewExperience>,
    pub experience_placeholder: Option<&'static str>,
    pub skills: Vec<String>,
    pub skills_placeholder: Option<&'static str>,
    pub watermark: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PreviewExperience {
    pub role: String,
    pub organization: String,
    pub duration: String,
    pub description: String,
    /// Rendered as the "on-chain" badge.
    pub on_chain: bool,
}

pub fn build_preview(profile: &Profile) -> PreviewCard {
    let mut links = Vec::new();
    if !profile.github_handle.is_empty() {
        links.push(format!("github.com/{}", profile.github_handle));
    }
    if !profile.twitter_handle.is_empty() {
        links.push(format!("@{}", profile.twitter_handle));
    }

    let experience: Vec<PreviewExperience> = profile
        .experience
        .iter()
        .map(|e| PreviewExperience {
            role: e.role.clone(),
            organization: e.organization.clone(),
            duration: e.duration.clone(),
            description: e.description.clone(),
            on_chain: e.is_web3_native,
        })
        .collect();

    let skills: Vec<String> = profile.skills.iter().map(|s| s.name.clone()).collect();

    PreviewCard {
        heading: or_placeholder(&profile.display_name, ANON_NAME),
        tagline: or_placeholder(&profile.bio, EMPTY_BIO),
        links,
        experience_placeholder: experience.is_empty().then_some(EMPTY_EXPERIENCE),
        experience,
        skills_placeholder: skills.is_empty().then_some(EMPTY_SKILLS),
        skills,
        watermark: WATERMARK,
    }
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}
