//! Profile store — the only mutation path for the in-memory `Profile`.
//!
//! Handlers never write profile fields directly. Each edit the builder can
//! make has exactly one function here.

use thiserror::Error;
use uuid::Uuid;

use crate::models::profile::{Experience, ExperienceUpdate, Profile, ProfileField, Skill};

#[derive(Debug, Error, PartialEq)]
pub enum ProfileError {
    #[error("Experience {0} not found")]
    ExperienceNotFound(Uuid),

    #[error("Skill {0} not found")]
    SkillNotFound(Uuid),

    #[error("Skill name cannot be empty")]
    EmptySkillName,
}

/// Owns the single profile for the lifetime of the process.
#[derive(Debug, Default)]
pub struct ProfileStore {
    profile: Profile,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Clones the current profile, e.g. to hand it to the auditor without
    /// holding the store lock across the network call.
    pub fn snapshot(&self) -> Profile {
        self.profile.clone()
    }

    pub fn set_field(&mut self, field: ProfileField, value: String) {
        let slot = match field {
            ProfileField::DisplayName => &mut self.profile.display_name,
            ProfileField::Bio => &mut self.profile.bio,
            ProfileField::GithubHandle => &mut self.profile.github_handle,
            ProfileField::TwitterHandle => &mut self.profile.twitter_handle,
            ProfileField::WebsiteUrl => &mut self.profile.website_url,
        };
        *slot = value;
    }

    /// Appends an empty position block and returns a copy of it.
    pub fn add_experience(&mut self) -> Experience {
        let entry = Experience::blank();
        self.profile.experience.push(entry.clone());
        entry
    }

    pub fn update_experience(
        &mut self,
        id: Uuid,
        update: ExperienceUpdate,
    ) -> Result<&Experience, ProfileError> {
        let entry = self.experience_mut(id)?;
        update.apply(entry);
        Ok(entry)
    }

    pub fn toggle_web3_native(&mut self, id: Uuid) -> Result<&Experience, ProfileError> {
        let entry = self.experience_mut(id)?;
        entry.is_web3_native = !entry.is_web3_native;
        Ok(entry)
    }

    pub fn remove_experience(&mut self, id: Uuid) -> Result<Experience, ProfileError> {
        let index = self
            .profile
            .experience
            .iter()
            .position(|e| e.id == id)
            .ok_or(ProfileError::ExperienceNotFound(id))?;
        Ok(self.profile.experience.remove(index))
    }

    /// Adds a skill with its name trimmed and lowercased. Blank input is
    /// rejected and leaves the list untouched.
    pub fn add_skill(&mut self, name: &str) -> Result<Skill, ProfileError> {
        if name.trim().is_empty() {
            return Err(ProfileError::EmptySkillName);
        }
        let skill = Skill::new(name);
        self.profile.skills.push(skill.clone());
        Ok(skill)
    }

    pub fn remove_skill(&mut self, id: Uuid) -> Result<Skill, ProfileError> {
        let index = self
            .profile
            .skills
            .iter()
            .position(|s| s.id == id)
            .ok_or(ProfileError::SkillNotFound(id))?;
        Ok(self.profile.skills.remove(index))
    }

    /// Back to the empty initial profile.
    pub fn reset(&mut self) {
        self.profile = Profile::default();
    }

    fn experience_mut(&mut self, id: Uuid) -> Result<&mut Experience, ProfileError> {
        self.profile
            .experience
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(ProfileError::ExperienceNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_field_targets_only_that_field() {
        let mut store = ProfileStore::new();
        store.set_field(ProfileField::DisplayName, "satoshi nakamoto".to_string());
        store.set_field(ProfileField::TwitterHandle, "satoshi".to_string());

        let p = store.profile();
        assert_eq!(p.display_name, "satoshi nakamoto");
        assert_eq!(p.twitter_handle, "satoshi");
        assert!(p.bio.is_empty());
        assert!(p.github_handle.is_empty());
        assert!(p.website_url.is_empty());
    }

    #[test]
    fn test_add_then_remove_experience_round_trips() {
        let mut store = ProfileStore::new();
        let first = store.add_experience();
        store
            .update_experience(first.id, ExperienceUpdate::Role("eng".to_string()))
            .unwrap();
        let before = store.profile().experience.clone();

        let added = store.add_experience();
        assert_eq!(store.profile().experience.len(), before.len() + 1);

        let removed = store.remove_experience(added.id).unwrap();
        assert_eq!(removed.id, added.id);
        assert_eq!(store.profile().experience, before);
    }

    #[test]
    fn test_experience_keeps_insertion_order() {
        let mut store = ProfileStore::new();
        let a = store.add_experience();
        let b = store.add_experience();
        let c = store.add_experience();
        store.remove_experience(b.id).unwrap();

        let ids: Vec<Uuid> = store.profile().experience.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![a.id, c.id]);
    }

    #[test]
    fn test_update_experience_fields() {
        let mut store = ProfileStore::new();
        let xp = store.add_experience();
        store
            .update_experience(xp.id, ExperienceUpdate::Organization("acme dao".to_string()))
            .unwrap();
        let updated = store
            .update_experience(xp.id, ExperienceUpdate::IsWeb3Native(true))
            .unwrap();

        assert_eq!(updated.organization, "acme dao");
        assert!(updated.is_web3_native);
        assert_eq!(updated.id, xp.id);
    }

    #[test]
    fn test_toggle_web3_native_flips() {
        let mut store = ProfileStore::new();
        let xp = store.add_experience();
        assert!(store.toggle_web3_native(xp.id).unwrap().is_web3_native);
        assert!(!store.toggle_web3_native(xp.id).unwrap().is_web3_native);
    }

    #[test]
    fn test_unknown_experience_id() {
        let mut store = ProfileStore::new();
        store.add_experience();
        let missing = Uuid::new_v4();

        assert_eq!(
            store.remove_experience(missing),
            Err(ProfileError::ExperienceNotFound(missing))
        );
        assert!(store
            .update_experience(missing, ExperienceUpdate::Role("x".to_string()))
            .is_err());
        assert_eq!(store.profile().experience.len(), 1);
    }

    #[test]
    fn test_add_skill_lowercases() {
        let mut store = ProfileStore::new();
        let skill = store.add_skill("Rust").unwrap();
        assert_eq!(skill.name, "rust");
        assert_eq!(store.profile().skills[0].name, "rust");
    }

    #[test]
    fn test_add_skill_trims_surrounding_whitespace() {
        let mut store = ProfileStore::new();
        let skill = store.add_skill("  Rust ").unwrap();
        assert_eq!(skill.name, "rust");
        assert_eq!(store.profile().skills[0].name, "rust");
    }

    #[test]
    fn test_add_skill_rejects_blank() {
        let mut store = ProfileStore::new();
        assert_eq!(store.add_skill(""), Err(ProfileError::EmptySkillName));
        assert_eq!(store.add_skill("   "), Err(ProfileError::EmptySkillName));
        assert!(store.profile().skills.is_empty());
    }

    #[test]
    fn test_remove_skill() {
        let mut store = ProfileStore::new();
        let solidity = store.add_skill("Solidity").unwrap();
        let rust = store.add_skill("rust").unwrap();

        store.remove_skill(solidity.id).unwrap();
        assert_eq!(store.profile().skills, vec![rust]);
        assert_eq!(
            store.remove_skill(solidity.id),
            Err(ProfileError::SkillNotFound(solidity.id))
        );
    }

    #[test]
    fn test_ids_are_not_reused_after_removal() {
        let mut store = ProfileStore::new();
        let first = store.add_skill("go").unwrap();
        store.remove_skill(first.id).unwrap();
        let second = store.add_skill("go").unwrap();
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_reset_restores_initial_profile() {
        let mut store = ProfileStore::new();
        store.set_field(ProfileField::Bio, "shipping".to_string());
        store.add_experience();
        store.add_skill("rust").unwrap();

        store.reset();
        assert_eq!(store.profile(), &Profile::default());
    }
}
