//
//  Copyright (C) 2025-2026  Mohamed Aly
//
//  Licensed under the Apache License, Version 2.0 (the "License");
//  you may not use this file except in compliance with the License.
//  You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
//

use crate::core::config::Config;
use crate::core::project::Project;
use crate::util::filesystem;
use std::collections::btree_set::BTreeSet;
use std::collections::btree_set::IntoIter;
use std::collections::btree_set::Iter;
use std::hash::Hash;

/// A single `KEY=value` pair exposed to scripts and child processes.
///
/// Equality, ordering and hashing only consider the key.
#[derive(Eq, Clone)]
pub struct EnvVar {
    key: String,
    value: String,
}

impl PartialEq for EnvVar {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Ord for EnvVar {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

impl PartialOrd for EnvVar {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for EnvVar {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl EnvVar {
    pub fn with(key: &str, value: &str) -> Self {
        Self::new().key(key).value(value)
    }

    pub fn new() -> Self {
        Self {
            key: String::new(),
            value: String::new(),
        }
    }

    /// Sets the environment key.
    pub fn key(mut self, s: &str) -> Self {
        // normalize the key name upon entry
        self.key = s.to_ascii_uppercase().replace('-', "_");
        self
    }

    /// Sets the environment value.
    pub fn value(mut self, s: &str) -> Self {
        self.value = s.to_owned();
        self
    }

    pub fn get_key(&self) -> &str {
        &self.key
    }

    pub fn get_value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Debug for EnvVar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}=\"{}\"", self.key, self.value)
    }
}

impl std::fmt::Display for EnvVar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// An ordered set of environment variables, unique by key.
#[derive(Debug, PartialEq)]
pub struct Environment(BTreeSet<EnvVar>);

impl Environment {
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    pub fn from_vec(vec: Vec<EnvVar>) -> Self {
        Self(vec.into_iter().collect())
    }

    /// Inserts `var` if its key is not already present.
    pub fn insert(&mut self, var: EnvVar) -> bool {
        self.0.insert(var)
    }

    pub fn add(mut self, var: EnvVar) -> Self {
        self.0.insert(var);
        self
    }

    /// Inserts `var`, replacing any existing entry under the same key.
    pub fn overwrite(mut self, var: EnvVar) -> Self {
        self.0.replace(var);
        self
    }

    pub fn get(&self, key: &str) -> Option<&EnvVar> {
        self.0.get(&EnvVar::new().key(key))
    }

    pub fn iter(&self) -> Iter<'_, EnvVar> {
        self.0.iter()
    }

    pub fn into_iter(self) -> IntoIter<EnvVar> {
        self.0.into_iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Loads the `[env]` table of a configuration as `ALY_ENV_<KEY>` variables.
    pub fn from_config(mut self, config: &Config) -> Self {
        if let Some(map) = config.get_env() {
            map.iter().for_each(|(key, val)| {
                self.insert(
                    EnvVar::new()
                        .key(&format!("{}{}", ALY_ENV_PREFIX, key))
                        .value(val),
                );
            });
        }
        self
    }

    /// Loads the variables describing a project's identity and layout.
    pub fn from_project(mut self, project: &Project) -> Self {
        self.insert(EnvVar::with(
            ALY_PROJECT_ROOT,
            &filesystem::into_std_str(project.get_root().clone()),
        ));
        self.insert(EnvVar::with(ALY_PROJECT_NAME, &project.get_name()));
        if let Some(id) = project.get_uuid() {
            self.insert(EnvVar::with(ALY_PROJECT_UUID, &id.to_string()));
        }
        self.insert(EnvVar::with(
            ALY_FIRMWARE_DIR,
            &filesystem::into_std_str(project.get_firmware_dir()),
        ));
        self.insert(EnvVar::with(
            ALY_RTL_DIR,
            &filesystem::into_std_str(project.get_rtl_dir()),
        ));
        self
    }

    pub fn read(key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

pub const ALY_HOME: &str = "ALY_HOME";
pub const NO_COLOR: &str = "NO_COLOR";

pub const ALY_PROJECT_ROOT: &str = "ALY_PROJECT_ROOT";
pub const ALY_PROJECT_NAME: &str = "ALY_PROJECT_NAME";
pub const ALY_PROJECT_UUID: &str = "ALY_PROJECT_UUID";
pub const ALY_FIRMWARE_DIR: &str = "ALY_FIRMWARE_DIR";
pub const ALY_RTL_DIR: &str = "ALY_RTL_DIR";
pub const ALY_RISCV_PREFIX: &str = "ALY_RISCV_PREFIX";

pub const ALY_ENV_PREFIX: &str = "ALY_ENV_";
