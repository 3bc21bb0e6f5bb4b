//! Saved profiles and the active selection, passed explicitly to consumers

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::profile::Profile;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no saved profile with id {0:?}")]
    UnknownId(String),
    #[error("a profile with id {0:?} already exists")]
    DuplicateId(String),
    #[error("invalid store JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedProfile {
    pub id: String,
    pub name: String,
    pub profile: Profile,
}

/// Saved profiles in insertion order plus the active one
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileStore {
    profiles: Vec<SavedProfile>,
    active: Option<String>,
}

impl ProfileStore {
    pub fn new() -> ProfileStore {
        ProfileStore::default()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.profiles.iter().position(|p| p.id == id)
    }

    /// Insert or overwrite
    pub fn save(&mut self, id: &str, name: &str, profile: Profile) {
        let entry = SavedProfile {
            id: id.to_string(),
            name: name.to_string(),
            profile,
        };
        match self.position(id) {
            Some(i) => self.profiles[i] = entry,
            None => self.profiles.push(entry),
        }
    }

    /// Insert, failing if the id is taken
    pub fn insert_new(&mut self, id: &str, name: &str, profile: Profile) -> Result<(), StoreError> {
        if self.position(id).is_some() {
            return Err(StoreError::DuplicateId(id.to_string()));
        }
        self.save(id, name, profile);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&SavedProfile> {
        self.position(id).map(|i| &self.profiles[i])
    }

    /// Remove a profile, clearing the active selection if it pointed at it
    pub fn remove(&mut self, id: &str) -> Result<SavedProfile, StoreError> {
        let i = self
            .position(id)
            .ok_or_else(|| StoreError::UnknownId(id.to_string()))?;
        if self.active.as_deref() == Some(id) {
            self.active = None;
        }
        Ok(self.profiles.remove(i))
    }

    pub fn set_active(&mut self, id: &str) -> Result<(), StoreError> {
        if self.position(id).is_none() {
            return Err(StoreError::UnknownId(id.to_string()));
        }
        self.active = Some(id.to_string());
        Ok(())
    }

    pub fn clear_active(&mut self) {
        self.active = None;
    }

    pub fn active(&self) -> Option<&SavedProfile> {
        self.active.as_deref().and_then(|id| self.get(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &SavedProfile> {
        self.profiles.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|p| p.id.as_str())
    }

    pub fn to_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Import a store. Repeated ids are rejected rather than shadowed.
    pub fn from_json(json: &str) -> Result<ProfileStore, StoreError> {
        let mut store: ProfileStore = serde_json::from_str(json)?;
        let mut seen = HashSet::new();
        for saved in &store.profiles {
            if !seen.insert(saved.id.as_str()) {
                return Err(StoreError::DuplicateId(saved.id.clone()));
            }
        }
        if store.active().is_none() {
            store.active = None;
        }
        Ok(store)
    }
}
