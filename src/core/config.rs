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

use crate::core::project::ProjectName;
use crate::core::uuid::Uuid;
use crate::error::{Error, LastError};
use crate::util::anyerror::Fault;
use crate::util::filesystem;
use serde_derive::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use toml_edit::{Array, Document, Formatted, Item, Table, TableLike, Value};

/// Name of the global configuration file living directly under `$ALY_HOME`.
pub const GLOBAL_CONFIG_FILE: &str = "config.toml";

pub trait FromFile: Sized {
    fn from_file(path: &PathBuf) -> Result<Self, Fault>;
}

#[derive(PartialEq, Debug, Default, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectTable {
    name: Option<ProjectName>,
    uuid: Option<Uuid>,
}

impl ProjectTable {
    pub fn new(name: Option<ProjectName>, uuid: Option<Uuid>) -> Self {
        Self { name, uuid }
    }

    fn merge(&mut self, rhs: Option<Self>) {
        if let Some(rhs) = rhs {
            if self.name.is_none() == true {
                self.name = rhs.name;
            }
            if self.uuid.is_none() == true {
                self.uuid = rhs.uuid;
            }
        }
    }
}

#[derive(PartialEq, Debug, Default, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolchainTable {
    #[serde(rename = "riscv-prefix")]
    riscv_prefix: Option<String>,
    paths: Option<Vec<PathBuf>>,
    #[serde(rename = "plantuml-jar")]
    plantuml_jar: Option<PathBuf>,
}

impl ToolchainTable {
    /// Merges any populated data from `rhs` into attributes that do not already
    /// have data defined in `self`. Search paths are concatenated.
    fn merge(&mut self, rhs: Option<Self>) {
        if let Some(rhs) = rhs {
            if self.riscv_prefix.is_none() == true {
                self.riscv_prefix = rhs.riscv_prefix;
            }
            if self.plantuml_jar.is_none() == true {
                self.plantuml_jar = rhs.plantuml_jar;
            }
            match &mut self.paths {
                Some(v) => v.append(&mut rhs.paths.unwrap_or_default()),
                None => self.paths = rhs.paths,
            }
        }
    }

    fn resolve_paths(&mut self, base: &Path) {
        if let Some(paths) = &mut self.paths {
            paths
                .iter_mut()
                .for_each(|p| *p = filesystem::resolve_rel_path(base, p));
        }
        if let Some(jar) = &mut self.plantuml_jar {
            *jar = filesystem::resolve_rel_path(base, jar);
        }
    }
}

#[derive(PartialEq, Debug, Default, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    project: Option<ProjectTable>,
    toolchain: Option<ToolchainTable>,
    env: Option<HashMap<String, String>>,
}

impl Config {
    pub fn new() -> Self {
        Self {
            project: None,
            toolchain: None,
            env: None,
        }
    }

    /// Creates a configuration holding only the `[project]` table.
    pub fn with_project(project: ProjectTable) -> Self {
        Self {
            project: Some(project),
            ..Self::new()
        }
    }

    /// Adds the new information to the existing configuration to combine data.
    ///
    /// Note that the struct calling this function is the higher precedence layer. If there is
    /// already existing data in `self`, then it has precedence over any incoming data from `rhs`.
    pub fn append(&mut self, rhs: Self) {
        match &mut self.project {
            Some(v) => v.merge(rhs.project),
            None => self.project = rhs.project,
        }
        match &mut self.toolchain {
            Some(v) => v.merge(rhs.toolchain),
            None => self.toolchain = rhs.toolchain,
        }
        match &mut self.env {
            Some(v) => {
                for (key, val) in rhs.env.unwrap_or_default() {
                    v.entry(key).or_insert(val);
                }
            }
            None => self.env = rhs.env,
        }
    }

    /// Rewrites every relative path in the configuration to be relative to `base`.
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        if let Some(tc) = &mut self.toolchain {
            tc.resolve_paths(base);
        }
        self
    }

    pub fn get_project_name(&self) -> Option<&ProjectName> {
        self.project.as_ref().and_then(|p| p.name.as_ref())
    }

    pub fn get_uuid(&self) -> Option<&Uuid> {
        self.project.as_ref().and_then(|p| p.uuid.as_ref())
    }

    pub fn get_riscv_prefix(&self) -> Option<&String> {
        self.toolchain
            .as_ref()
            .and_then(|t| t.riscv_prefix.as_ref())
    }

    /// References the extra directories to search before `PATH`.
    pub fn get_tool_paths(&self) -> Vec<&PathBuf> {
        match self.toolchain.as_ref().and_then(|t| t.paths.as_ref()) {
            Some(p) => p.iter().collect(),
            None => Vec::new(),
        }
    }

    pub fn get_plantuml_jar(&self) -> Option<&PathBuf> {
        self.toolchain
            .as_ref()
            .and_then(|t| t.plantuml_jar.as_ref())
    }

    pub fn get_env(&self) -> &Option<HashMap<String, String>> {
        &self.env
    }

    /// Serializes the configuration into TOML syntax.
    pub fn to_toml(&self) -> Result<String, Fault> {
        Ok(toml::to_string(self)?)
    }
}

impl FromStr for Config {
    type Err = toml::de::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s)
    }
}

impl FromFile for Config {
    fn from_file(path: &PathBuf) -> Result<Self, Fault> {
        let contents = std::fs::read_to_string(&path)?;
        match Self::from_str(&contents) {
            Ok(r) => Ok(r),
            Err(e) => Err(Error::ConfigParseFailed(
                path.clone(),
                LastError(e.to_string()),
            ))?,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Locality {
    Global,
    Local,
}

impl std::fmt::Display for Locality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Global => write!(f, "global"),
            Self::Local => write!(f, "local"),
        }
    }
}

/// The configuration files in effect, each tagged with its level.
#[derive(Debug, PartialEq)]
pub struct Configs {
    inner: Vec<(PathBuf, Config, Locality)>,
}

impl Configs {
    pub fn new() -> Self {
        Self { inner: Vec::new() }
    }

    /// Reads the configuration `file` and resolves its relative paths from `base`.
    pub fn load(mut self, file: PathBuf, base: &Path, lvl: Locality) -> Result<Self, Fault> {
        let cfg = Config::from_file(&file)?.resolve_paths(base);
        self.inner.push((file, cfg, lvl));
        Ok(self)
    }

    /// Adds an already-parsed configuration.
    pub fn push(mut self, file: PathBuf, cfg: Config, lvl: Locality) -> Self {
        self.inner.push((file, cfg, lvl));
        self
    }

    pub fn get_inner(&self) -> &Vec<(PathBuf, Config, Locality)> {
        &self.inner
    }

    /// References the file path of the first configuration at level `lvl`.
    pub fn get_path(&self, lvl: Locality) -> Option<&PathBuf> {
        self.inner.iter().find(|c| c.2 == lvl).map(|c| &c.0)
    }
}

impl Configs {
    /// Transform the multi-layered configurations into a single level.
    ///
    /// The LOCAL configuration is processed before the GLOBAL configuration. Once a
    /// value is set, then it will not be overridden by any configuration later in the
    /// processing order.
    pub fn flatten(&self) -> Config {
        let mut single = Config::new();
        [Locality::Local, Locality::Global].iter().for_each(|lvl| {
            self.inner
                .iter()
                .filter(|c| &c.2 == lvl)
                .for_each(|c| single.append(c.1.clone()))
        });
        single
    }
}

impl From<Configs> for Config {
    fn from(value: Configs) -> Self {
        value.flatten()
    }
}

/// A configuration file opened for editing that preserves its formatting.
#[derive(Debug)]
pub struct ConfigDocument {
    document: Document,
}

impl FromStr for ConfigDocument {
    type Err = Fault;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // verify all keys are valid during deserializing
        let _: Config = toml::from_str(s)?;
        Ok(Self {
            document: s.parse::<Document>()?,
        })
    }
}

impl FromFile for ConfigDocument {
    fn from_file(path: &PathBuf) -> Result<Self, Fault> {
        let contents = std::fs::read_to_string(&path)?;
        match Self::from_str(&contents) {
            Ok(r) => Ok(r),
            Err(e) => Err(Error::ConfigParseFailed(
                path.clone(),
                LastError(e.to_string()),
            ))?,
        }
    }
}

impl ConfigDocument {
    /// Accesses `table` whether it is written as a `[table]` or an inline table.
    fn table_mut(&mut self, table: &str) -> Result<&mut dyn TableLike, Fault> {
        // create table if it does not exist
        if self.document.contains_key(table) == false {
            self.document.insert(table, Item::Table(Table::new()));
        }
        match self
            .document
            .get_mut(table)
            .and_then(|t| t.as_table_like_mut())
        {
            Some(t) => Ok(t),
            None => Err(Error::ConfigKeyUnsupported(table.to_string()))?,
        }
    }

    /// Sets a string value for the given entry in the toml document.
    ///
    /// Creates parent table and/or key if does not exist.
    pub fn set(&mut self, table: &str, key: &str, value: &str) -> Result<(), Fault> {
        self.table_mut(table)?.insert(
            key,
            Item::Value(Value::String(Formatted::<String>::new(value.to_string()))),
        );
        Ok(())
    }

    /// Removes an entry from the toml document.
    ///
    /// Errors if the entry does not exist.
    pub fn unset(&mut self, table: &str, key: &str) -> Result<(), Fault> {
        let removed = self
            .document
            .get_mut(table)
            .and_then(|t| t.as_table_like_mut())
            .and_then(|t| t.remove(key));
        match removed {
            Some(_) => Ok(()),
            None => Err(Error::ConfigKeyMissing(format!("{}.{}", table, key)))?,
        }
    }

    /// Adds a new value to the end of the list stored at `table.key`.
    ///
    /// Automatically creates the list if it does not exist.
    pub fn append_list(&mut self, table: &str, key: &str, item: &str) -> Result<(), Fault> {
        // inline tables keep their list on the same line
        let multiline = self.document.get(table).map_or(true, |t| t.is_table());
        let table = self.table_mut(table)?;
        if table.contains_key(key) == false {
            table.insert(key, Item::Value(Value::Array(Array::new())));
        }
        let list = match table.get_mut(key).and_then(|i| i.as_array_mut()) {
            Some(l) => l,
            None => return Err(Error::ConfigFieldNotList(key.to_string()))?,
        };
        list.push(item);
        if multiline == true {
            // neat formatting of an item on every line
            list.iter_mut().for_each(|f| {
                f.decor_mut().set_prefix("\n    ");
                f.decor_mut().set_suffix("");
            });
            list.set_trailing("\n");
            list.set_trailing_comma(true);
        } else {
            list.fmt();
        }
        Ok(())
    }

    /// Removes the last value of the list stored at `table.key`.
    pub fn pop_list(&mut self, table: &str, key: &str) -> Result<(), Fault> {
        let name = format!("{}.{}", table, key);
        let item = self
            .document
            .get_mut(table)
            .and_then(|t| t.as_table_like_mut())
            .and_then(|t| t.get_mut(key));
        match item {
            Some(i) => match i.as_array_mut() {
                Some(list) => {
                    if list.is_empty() == false {
                        list.remove(list.len() - 1);
                    }
                    Ok(())
                }
                None => Err(Error::ConfigFieldNotList(name))?,
            },
            None => Err(Error::ConfigKeyMissing(name))?,
        }
    }

    /// Checks the edited document still describes a valid configuration.
    pub fn validate(&self) -> Result<Config, Fault> {
        match Config::from_str(&self.document.to_string()) {
            Ok(c) => Ok(c),
            Err(e) => Err(Error::ConfigNotSaved(LastError(e.to_string())))?,
        }
    }

    /// Writes the `document` to `dest`.
    ///
    /// The contents are staged in a sibling temporary file and then moved over `dest`.
    pub fn write(&self, dest: &Path) -> Result<(), Fault> {
        let dir = match dest.parent() {
            Some(p) if p.as_os_str().is_empty() == false => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let mut staged = tempfile::NamedTempFile::new_in(dir)?;
        staged.write_all(self.document.to_string().as_bytes())?;
        staged.persist(dest)?;
        Ok(())
    }
}

impl std::fmt::Display for ConfigDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.document)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const C_0: &str = r#"
# This is a blank configuration file.
"#;

    const C_1: &str = r#"
[project]
name = "soc"

[toolchain]
riscv-prefix = "riscv32-unknown-elf-"
paths = ["tools/bin", "/opt/Xilinx/Vivado/2023.2/bin"]
plantuml-jar = "docs/plantuml.jar"

[env]
BOARD = "arty-a7"
"#;

    const C_2: &str = r#"
[project]
name = "ignored"
uuid = "e7a1d63b-711b-4727-a4b7-9a8a3c9c1fa0"

[toolchain]
riscv-prefix = "riscv64-unknown-elf-"
paths = ["/usr/local/riscv/bin"]

[env]
BOARD = "basys3"
VENDOR = "xilinx"
"#;

    #[test]
    fn parse_empty_config() {
        assert_eq!(Config::from_str("").unwrap(), Config::new());
        assert_eq!(Config::from_str(C_0).unwrap(), Config::new());
    }

    #[test]
    fn parse_basic_config() {
        let cfg = Config::from_str(C_1).unwrap();
        assert_eq!(cfg.get_project_name().unwrap().as_ref(), "soc");
        assert_eq!(cfg.get_uuid(), None);
        assert_eq!(
            cfg.get_riscv_prefix(),
            Some(&String::from("riscv32-unknown-elf-"))
        );
        assert_eq!(cfg.get_tool_paths().len(), 2);
    }

    #[test]
    fn reject_unknown_keys() {
        assert!(Config::from_str("[project]\nversion = \"1.0.0\"\n").is_err());
        assert!(Config::from_str("[simulator]\nname = \"xsim\"\n").is_err());
    }

    #[test]
    fn reject_invalid_name() {
        assert!(Config::from_str("[project]\nname = \"9lives\"\n").is_err());
    }

    #[test]
    fn relative_paths_resolve_from_base() {
        let cfg = Config::from_str(C_1)
            .unwrap()
            .resolve_paths(&PathBuf::from("/work/soc"));
        assert_eq!(
            cfg.get_tool_paths(),
            vec![
                &PathBuf::from("/work/soc/tools/bin"),
                &PathBuf::from("/opt/Xilinx/Vivado/2023.2/bin")
            ]
        );
        assert_eq!(
            cfg.get_plantuml_jar(),
            Some(&PathBuf::from("/work/soc/docs/plantuml.jar"))
        );
    }

    #[test]
    fn local_takes_precedence() {
        let configs = Configs::new()
            .push(
                PathBuf::from("global"),
                Config::from_str(C_2).unwrap(),
                Locality::Global,
            )
            .push(
                PathBuf::from("local"),
                Config::from_str(C_1).unwrap(),
                Locality::Local,
            );
        let cfg = Config::from(configs);
        assert_eq!(cfg.get_project_name().unwrap().as_ref(), "soc");
        // only the global file defines an id
        assert!(cfg.get_uuid().is_some());
        assert_eq!(
            cfg.get_riscv_prefix(),
            Some(&String::from("riscv32-unknown-elf-"))
        );
        // local paths are searched first
        assert_eq!(
            cfg.get_tool_paths().first().unwrap(),
            &&PathBuf::from("tools/bin")
        );
        assert_eq!(cfg.get_tool_paths().len(), 3);
        let env = cfg.get_env().as_ref().unwrap();
        assert_eq!(env.get("BOARD").unwrap(), "arty-a7");
        assert_eq!(env.get("VENDOR").unwrap(), "xilinx");
    }

    #[test]
    fn document_set_and_unset() {
        let mut doc = ConfigDocument::from_str(C_0).unwrap();
        doc.set("toolchain", "riscv-prefix", "riscv-none-elf-")
            .unwrap();
        let cfg = doc.validate().unwrap();
        assert_eq!(
            cfg.get_riscv_prefix(),
            Some(&String::from("riscv-none-elf-"))
        );
        // the comment is preserved
        assert!(doc.to_string().contains("# This is a blank configuration file."));

        doc.unset("toolchain", "riscv-prefix").unwrap();
        assert_eq!(doc.validate().unwrap().get_riscv_prefix(), None);
        assert!(doc.unset("toolchain", "riscv-prefix").is_err());
        assert!(doc.unset("env", "BOARD").is_err());
    }

    #[test]
    fn document_rejects_unknown_key_on_validate() {
        let mut doc = ConfigDocument::from_str(C_0).unwrap();
        doc.set("toolchain", "simulator", "xsim").unwrap();
        assert!(doc.validate().is_err());
    }

    #[test]
    fn document_lists() {
        let mut doc = ConfigDocument::from_str(C_1).unwrap();
        doc.append_list("toolchain", "paths", "/opt/riscv/bin")
            .unwrap();
        let cfg = doc.validate().unwrap();
        assert_eq!(
            cfg.get_tool_paths().last().unwrap(),
            &&PathBuf::from("/opt/riscv/bin")
        );
        assert_eq!(cfg.get_tool_paths().len(), 3);

        doc.pop_list("toolchain", "paths").unwrap();
        doc.pop_list("toolchain", "paths").unwrap();
        assert_eq!(doc.validate().unwrap().get_tool_paths().len(), 1);

        assert!(doc.pop_list("toolchain", "riscv-prefix").is_err());
        assert!(doc.pop_list("env", "MISSING").is_err());
    }

    #[test]
    fn document_edits_inline_tables() {
        let mut doc =
            ConfigDocument::from_str("toolchain = { riscv-prefix = \"rv32-\", paths = [\"a\"] }\n")
                .unwrap();
        doc.append_list("toolchain", "paths", "b").unwrap();
        doc.set("toolchain", "plantuml-jar", "docs/plantuml.jar")
            .unwrap();
        doc.unset("toolchain", "riscv-prefix").unwrap();

        let cfg = doc.validate().unwrap();
        assert_eq!(cfg.get_riscv_prefix(), None);
        assert_eq!(
            cfg.get_tool_paths(),
            vec![&PathBuf::from("a"), &PathBuf::from("b")]
        );
        assert_eq!(
            cfg.get_plantuml_jar(),
            Some(&PathBuf::from("docs/plantuml.jar"))
        );
        // the table stays inline
        assert!(doc.to_string().starts_with("toolchain = {"));
        assert_eq!(doc.to_string().contains("[toolchain]"), false);

        doc.pop_list("toolchain", "paths").unwrap();
        assert_eq!(
            doc.validate().unwrap().get_tool_paths(),
            vec![&PathBuf::from("a")]
        );
        assert!(doc.unset("toolchain", "riscv-prefix").is_err());
        assert!(doc.pop_list("toolchain", "plantuml-jar").is_err());
    }

    #[test]
    fn serializes_to_toml() {
        let cfg = Config::from_str(C_1).unwrap();
        let text = cfg.to_toml().unwrap();
        assert_eq!(Config::from_str(&text).unwrap(), cfg);
        assert_eq!(Config::new().to_toml().unwrap(), "");
    }

    #[test]
    fn document_write() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("config");
        let mut doc = ConfigDocument::from_str("").unwrap();
        doc.set("env", "BOARD", "arty-a7").unwrap();
        doc.write(&dest).unwrap();

        let cfg = Config::from_file(&dest).unwrap();
        assert_eq!(cfg.get_env().as_ref().unwrap().get("BOARD").unwrap(), "arty-a7");
    }
}
