// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fs::create_dir_all;
use std::fs::read_to_string;
use std::fs::rename;
use std::fs::write;
use std::path::PathBuf;

use crate::error::Fallible;
use crate::types::profile::Profile;

/// Where the profile lives between runs. Saves replace the whole document.
pub trait Store {
    /// Never fails: a missing or unreadable document yields the default
    /// profile.
    fn load(&self) -> Profile;

    fn save(&mut self, profile: &Profile) -> Fallible<()>;
}

/// Stores the profile as a pretty-printed JSON document.
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn try_load(&self) -> Fallible<Option<Profile>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = read_to_string(&self.path)?;
        let profile: Profile = serde_json::from_str(&content)?;
        Ok(Some(profile))
    }
}

impl Store for JsonStore {
    fn load(&self) -> Profile {
        match self.try_load() {
            Ok(Some(profile)) => {
                log::debug!("Loaded profile from {}.", self.path.display());
                profile
            }
            Ok(None) => {
                log::debug!("No profile at {}, using defaults.", self.path.display());
                Profile::default()
            }
            Err(e) => {
                log::warn!(
                    "Could not load profile from {}, using defaults: {e}",
                    self.path.display()
                );
                Profile::default()
            }
        }
    }

    fn save(&mut self, profile: &Profile) -> Fallible<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let json: String = serde_json::to_string_pretty(profile)?;
        // Write next to the target and swap it in, so readers never see a
        // partial document.
        let tmp_path = self.path.with_extension("json.tmp");
        write(&tmp_path, json)?;
        rename(&tmp_path, &self.path)?;
        log::debug!("Saved profile to {}.", self.path.display());
        Ok(())
    }
}

/// Keeps the profile in memory and counts saves.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore {
    profile: Option<Profile>,
    pub save_count: usize,
}

#[cfg(test)]
impl Store for MemoryStore {
    fn load(&self) -> Profile {
        self.profile.clone().unwrap_or_default()
    }

    fn save(&mut self, profile: &Profile) -> Fallible<()> {
        self.profile = Some(profile.clone());
        self.save_count += 1;
        Ok(())
    }
}
