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

use crate::core::config::{Config, FromFile, ProjectTable};
use crate::core::uuid::Uuid;
use crate::error::Error;
use crate::util::anyerror::{AnyError, Fault};
use crate::util::filesystem::Standardize;
use serde::de;
use serde::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Hidden directory marking the root of a project.
pub const ALY_DIR: &str = ".aly";
/// Project configuration file directly nested within `ALY_DIR`.
pub const CONFIG_FILE: &str = "config";
pub const FIRMWARE_DIR: &str = "firmware";
pub const RTL_DIR: &str = "rtl";

/// A project name: an ASCII letter followed by ASCII alphanumerics, `-` or `_`.
#[derive(Debug, PartialEq, Eq, Clone, Hash, PartialOrd, Ord)]
pub struct ProjectName(String);

impl FromStr for ProjectName {
    type Err = AnyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match chars.next() {
            None => return Err(AnyError::from("name cannot be empty")),
            Some(c) => {
                if c.is_ascii_alphabetic() == false {
                    return Err(AnyError(format!(
                        "name must begin with an ascii letter but found {:?}",
                        c
                    )));
                }
            }
        }
        if let Some(c) = chars.find(|c| c.is_ascii_alphanumeric() == false && c != &'-' && c != &'_')
        {
            return Err(AnyError(format!(
                "name cannot contain the character {:?}",
                c
            )));
        }
        Ok(Self(s.to_string()))
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for ProjectName {
    fn deserialize<D>(deserializer: D) -> Result<ProjectName, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        struct LayerVisitor;

        impl<'de> de::Visitor<'de> for LayerVisitor {
            type Value = ProjectName;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a project name")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                ProjectName::from_str(v).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(LayerVisitor)
    }
}

impl Serialize for ProjectName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

/// Presence of each entry a project is expected to have.
#[derive(Debug, PartialEq, Clone)]
pub struct Layout {
    pub config: bool,
    pub firmware: bool,
    pub rtl: bool,
}

impl Layout {
    pub fn is_complete(&self) -> bool {
        self.config && self.firmware && self.rtl
    }

    /// Lists the relative paths of the entries that do not exist.
    pub fn missing(&self) -> Vec<String> {
        let mut list = Vec::new();
        if self.config == false {
            list.push(format!("{}/{}", ALY_DIR, CONFIG_FILE));
        }
        if self.firmware == false {
            list.push(format!("{}/", FIRMWARE_DIR));
        }
        if self.rtl == false {
            list.push(format!("{}/", RTL_DIR));
        }
        list
    }
}

/// A project directory on the local file system.
#[derive(Debug, PartialEq)]
pub struct Project {
    root: PathBuf,
    config: Config,
}

impl Project {
    /// Computes the path to the configuration file for a project at `root`.
    pub fn config_path(root: &Path) -> PathBuf {
        root.join(ALY_DIR).join(CONFIG_FILE)
    }

    /// Checks if `dir` is the root of a project.
    pub fn is_project(dir: &Path) -> bool {
        Self::config_path(dir).is_file()
    }

    /// Finds the complete path to the current project's directory.
    ///
    /// This function will recursively backtrack up the directory `dir`
    /// until finding the first directory holding the file ".aly/config".
    pub fn find_root(dir: &Path) -> Option<PathBuf> {
        dir.ancestors()
            .find(|p| Self::is_project(p))
            .map(|p| p.to_path_buf())
    }

    /// Creates the project structure at `root`.
    ///
    /// The configuration stores the `name` and a fresh identifier when a name is
    /// given, and is left empty otherwise. Existing `firmware/` and `rtl/`
    /// directories are kept untouched.
    pub fn create(root: &Path, name: Option<&ProjectName>) -> Result<Self, Fault> {
        if Self::is_project(root) == true {
            return Err(Error::ProjectExistsAtPath(root.to_path_buf()))?;
        }
        std::fs::create_dir_all(root.join(ALY_DIR))?;

        let config = match name {
            Some(n) => Config::with_project(ProjectTable::new(Some(n.clone()), Some(Uuid::new()))),
            None => Config::new(),
        };
        let contents = match name {
            Some(_) => Self::write_config(&config)?,
            None => String::new(),
        };
        std::fs::write(Self::config_path(root), contents)?;

        std::fs::create_dir_all(root.join(FIRMWARE_DIR))?;
        std::fs::create_dir_all(root.join(RTL_DIR))?;
        Ok(Self {
            root: PathBuf::standardize(root),
            config: config,
        })
    }

    /// Loads the project whose root is exactly `root`.
    pub fn load(root: &Path) -> Result<Self, Fault> {
        let cfg_path = Self::config_path(root);
        if cfg_path.is_file() == false {
            return Err(Error::MissingProjectConfig(root.to_path_buf(), cfg_path))?;
        }
        let root = PathBuf::standardize(root);
        let config = Config::from_file(&cfg_path)?.resolve_paths(&root);
        Ok(Self {
            root: root,
            config: config,
        })
    }

    fn write_config(config: &Config) -> Result<String, Fault> {
        Ok(format!(
            "# ALY project configuration\n\n{}",
            config.to_toml()?
        ))
    }

    pub fn get_root(&self) -> &PathBuf {
        &self.root
    }

    pub fn get_config(&self) -> &Config {
        &self.config
    }

    pub fn get_config_path(&self) -> PathBuf {
        Self::config_path(&self.root)
    }

    pub fn get_firmware_dir(&self) -> PathBuf {
        self.root.join(FIRMWARE_DIR)
    }

    pub fn get_rtl_dir(&self) -> PathBuf {
        self.root.join(RTL_DIR)
    }

    /// Returns the configured name, falling back to the root directory's name.
    pub fn get_name(&self) -> String {
        match self.config.get_project_name() {
            Some(n) => n.to_string(),
            None => self
                .root
                .file_name()
                .map(|f| f.to_string_lossy().to_string())
                .unwrap_or_default(),
        }
    }

    pub fn get_uuid(&self) -> Option<&Uuid> {
        self.config.get_uuid()
    }

    pub fn layout(&self) -> Layout {
        Layout {
            config: self.get_config_path().is_file(),
            firmware: self.get_firmware_dir().is_dir(),
            rtl: self.get_rtl_dir().is_dir(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn valid_names() {
        assert!(ProjectName::from_str("soc").is_ok());
        assert!(ProjectName::from_str("riscv_core-v2").is_ok());
        assert!(ProjectName::from_str("A").is_ok());
    }

    #[test]
    fn invalid_names() {
        assert!(ProjectName::from_str("").is_err());
        assert!(ProjectName::from_str("2fast").is_err());
        assert!(ProjectName::from_str("_hidden").is_err());
        assert!(ProjectName::from_str("my project").is_err());
        assert!(ProjectName::from_str("gates.v").is_err());
    }

    #[test]
    fn layout_missing_entries() {
        let layout = Layout {
            config: true,
            firmware: false,
            rtl: false,
        };
        assert_eq!(layout.is_complete(), false);
        assert_eq!(layout.missing(), vec!["firmware/", "rtl/"]);
    }

    #[test]
    fn create_with_name() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("soc");
        let name = ProjectName::from_str("riscv_soc").unwrap();
        let created = Project::create(&root, Some(&name)).unwrap();
        assert!(created.layout().is_complete());
        assert!(created.get_uuid().is_some());

        let loaded = Project::load(&root).unwrap();
        assert_eq!(loaded.get_name(), "riscv_soc");
        assert_eq!(loaded.get_uuid(), created.get_uuid());
    }

    #[test]
    fn create_without_name_writes_empty_config() {
        let dir = tempfile::tempdir().unwrap();
        let project = Project::create(dir.path(), None).unwrap();
        assert_eq!(
            std::fs::read_to_string(project.get_config_path()).unwrap(),
            ""
        );
        assert_eq!(project.get_uuid(), None);
    }

    #[test]
    fn create_twice_fails() {
        let dir = tempfile::tempdir().unwrap();
        Project::create(dir.path(), None).unwrap();
        assert!(Project::create(dir.path(), None).is_err());
    }

    #[test]
    fn load_requires_config_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Project::load(dir.path()).is_err());
        // a directory named like the config file does not count
        std::fs::create_dir_all(dir.path().join(ALY_DIR).join(CONFIG_FILE)).unwrap();
        assert!(Project::load(dir.path()).is_err());
        assert_eq!(Project::find_root(dir.path()), None);
    }
}
