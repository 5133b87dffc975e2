// Prompt for the profile audit. The persona and output constraints are
// fixed; only the profile fields are substituted.

use crate::models::profile::{Experience, Profile};

pub const AUDIT_PERSONA: &str = "act as a harsh but helpful web3 recruiter and portfolio auditor.";

pub const AUDIT_TASK: &str = "\
your task:
1. give 3 specific, actionable tips to improve their \"web3 vibe\" and employability.
2. focus on moving from \"airdrop farming\" to \"builder\" mentality.
3. identify gaps in their on-chain credentials.";

pub const AUDIT_CONSTRAINTS: &str = "\
constraints:
- output must be strictly lowercase.
- do not use quotation marks anywhere.
- use minimal punctuation (commas and periods only).
- use web3 native terms (wagmi, shipping, on-chain, protocol, dao, etc).
- keep it brief. max 150 words.";

/// `"<role> at <organization> (web3|legacy)"`
pub fn experience_line(entry: &Experience) -> String {
    let tag = if entry.is_web3_native { "web3" } else { "legacy" };
    format!("{} at {} ({})", entry.role, entry.organization, tag)
}

pub fn build_audit_prompt(profile: &Profile) -> String {
    let experience = profile
        .experience
        .iter()
        .map(experience_line)
        .collect::<Vec<_>>()
        .join(", ");
    let skills = profile
        .skills
        .iter()
        .map(|s| s.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{AUDIT_PERSONA}\n\
         analyze this candidate profile:\n\n\
         name: {name}\n\
         bio: {bio}\n\
         experience: {experience}\n\
         skills: {skills}\n\n\
         {AUDIT_TASK}\n\n\
         {AUDIT_CONSTRAINTS}\n",
        name = profile.display_name,
        bio = profile.bio,
    )
}
