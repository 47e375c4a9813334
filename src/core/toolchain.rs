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

//! Discovery of the external programs a project builds and simulates with.

use crate::core::config::Config;
use crate::error::{Error, Hint};
use crate::util::filesystem;
use serde_derive::Serialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Resolves a program name to the location of its executable.
pub trait FindTool {
    fn find_tool(&self, name: &str) -> Option<PathBuf>;
}

impl<F> FindTool for F
where
    F: Fn(&str) -> Option<PathBuf>,
{
    fn find_tool(&self, name: &str) -> Option<PathBuf> {
        self(name)
    }
}

/// An ordered list of directories to search for executables.
#[derive(Debug, PartialEq, Clone)]
pub struct SearchPath {
    dirs: Vec<PathBuf>,
    exts: Vec<OsString>,
}

impl SearchPath {
    pub fn new() -> Self {
        Self {
            dirs: Vec::new(),
            exts: Self::default_exts(),
        }
    }

    /// Creates a search path from the `PATH` environment variable.
    pub fn from_env() -> Self {
        let dirs = match std::env::var_os("PATH") {
            Some(p) => std::env::split_paths(&p).collect(),
            None => Vec::new(),
        };
        Self {
            dirs: dirs,
            exts: Self::default_exts(),
        }
    }

    /// Places `dirs` in front of the existing directories, keeping their order.
    pub fn prepend<P: AsRef<Path>>(mut self, dirs: &[P]) -> Self {
        let mut front: Vec<PathBuf> = dirs.iter().map(|d| d.as_ref().to_path_buf()).collect();
        front.append(&mut self.dirs);
        self.dirs = front;
        self
    }

    pub fn get_dirs(&self) -> &Vec<PathBuf> {
        &self.dirs
    }

    #[cfg(windows)]
    fn default_exts() -> Vec<OsString> {
        let exts = std::env::var("PATHEXT").unwrap_or(String::from(".EXE;.BAT;.CMD"));
        std::iter::once(OsString::new())
            .chain(
                exts.split(';')
                    .filter(|e| e.is_empty() == false)
                    .map(|e| OsString::from(e)),
            )
            .collect()
    }

    #[cfg(not(windows))]
    fn default_exts() -> Vec<OsString> {
        vec![OsString::new()]
    }

    fn try_candidates(&self, base: &Path) -> Option<PathBuf> {
        self.exts.iter().find_map(|ext| {
            let mut candidate = base.as_os_str().to_os_string();
            candidate.push(ext);
            let candidate = PathBuf::from(candidate);
            match filesystem::is_executable(&candidate) {
                true => Some(candidate),
                false => None,
            }
        })
    }
}

impl FindTool for SearchPath {
    fn find_tool(&self, name: &str) -> Option<PathBuf> {
        if name.is_empty() == true {
            return None;
        }
        // names holding a directory are not searched for
        if Path::new(name).components().count() > 1 {
            return self.try_candidates(Path::new(name));
        }
        self.dirs
            .iter()
            .find_map(|dir| self.try_candidates(&dir.join(name)))
    }
}

/// Prefixes tried in order when the configuration does not name one.
pub const RISCV_PREFIXES: [&str; 4] = [
    "riscv64-unknown-elf-",
    "riscv32-unknown-elf-",
    "riscv-none-elf-",
    "riscv64-linux-gnu-",
];

const RISCV_PROGRAMS: [&str; 4] = ["gcc", "objcopy", "objdump", "size"];

const VIVADO_PROGRAMS: [&str; 4] = ["xvlog", "xvhdl", "xelab", "xsim"];

pub const PLANTUML_JAR: &str = "plantuml.jar";

/// Fallback command used when PlantUML cannot be located.
pub const PLANTUML_FALLBACK: &str = "java -jar plantuml.jar";

#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Toolchain {
    RiscV,
    Vivado,
    PlantUml,
}

impl Toolchain {
    pub fn all() -> [Toolchain; 3] {
        [Self::RiscV, Self::Vivado, Self::PlantUml]
    }

    /// Selects the prefix for the RISC-V programs.
    ///
    /// A configured prefix is always used. Otherwise the first known prefix whose
    /// compiler can be found wins, and the first known prefix is the fallback.
    pub fn riscv_prefix(finder: &impl FindTool, config: &Config) -> String {
        if let Some(p) = config.get_riscv_prefix() {
            return p.clone();
        }
        RISCV_PREFIXES
            .iter()
            .find(|p| finder.find_tool(&format!("{}gcc", p)).is_some())
            .unwrap_or(&RISCV_PREFIXES[0])
            .to_string()
    }

    /// Searches for `plantuml.jar` in the configured location and then the
    /// project's documentation directories.
    pub fn find_plantuml_jar(config: &Config, root: Option<&Path>) -> Option<PathBuf> {
        let mut candidates: Vec<PathBuf> = Vec::new();
        if let Some(p) = config.get_plantuml_jar() {
            candidates.push(p.clone());
        }
        if let Some(r) = root {
            candidates.push(r.join("docs").join("source").join(PLANTUML_JAR));
            candidates.push(r.join("docs").join(PLANTUML_JAR));
        }
        candidates.into_iter().find(|p| p.is_file())
    }

    /// Resolves every component of the toolchain.
    pub fn probe(&self, finder: &impl FindTool, config: &Config, root: Option<&Path>) -> Probe {
        match self {
            Self::RiscV => {
                let prefix = Self::riscv_prefix(finder, config);
                let components = RISCV_PROGRAMS
                    .iter()
                    .map(|p| Component::lookup(finder, &format!("{}{}", prefix, p)))
                    .collect();
                Probe::new(*self, components).prefix(prefix)
            }
            Self::Vivado => {
                let components = VIVADO_PROGRAMS
                    .iter()
                    .map(|p| Component::lookup(finder, p))
                    .collect();
                Probe::new(*self, components)
            }
            Self::PlantUml => {
                let java = Component::lookup(finder, "java");
                let jar = Component {
                    name: String::from(PLANTUML_JAR),
                    path: Self::find_plantuml_jar(config, root),
                };
                let command = match (&java.path, &jar.path) {
                    (Some(_), Some(j)) => {
                        format!("java -jar \"{}\"", filesystem::into_std_str(j.clone()))
                    }
                    _ => String::from(PLANTUML_FALLBACK),
                };
                Probe::new(*self, vec![java, jar]).command(command)
            }
        }
    }
}

impl FromStr for Toolchain {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_ref() {
            "riscv" | "risc-v" => Ok(Self::RiscV),
            "vivado" | "xsim" => Ok(Self::Vivado),
            "plantuml" => Ok(Self::PlantUml),
            _ => Err(Error::ToolchainNotFound(s.to_string(), Hint::ToolchainList)),
        }
    }
}

impl std::fmt::Display for Toolchain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RiscV => f.pad("riscv"),
            Self::Vivado => f.pad("vivado"),
            Self::PlantUml => f.pad("plantuml"),
        }
    }
}

/// A single program or file a toolchain needs.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Component {
    name: String,
    path: Option<PathBuf>,
}

impl Component {
    fn lookup(finder: &impl FindTool, name: &str) -> Self {
        Self {
            name: name.to_string(),
            path: finder.find_tool(name),
        }
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    pub fn get_path(&self) -> Option<&PathBuf> {
        self.path.as_ref()
    }

    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Complete,
    Partial,
    Missing,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Complete => f.pad("complete"),
            Self::Partial => f.pad("partial"),
            Self::Missing => f.pad("missing"),
        }
    }
}

/// The outcome of searching for a toolchain.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Probe {
    toolchain: Toolchain,
    status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    command: Option<String>,
    components: Vec<Component>,
}

impl Probe {
    fn new(toolchain: Toolchain, components: Vec<Component>) -> Self {
        let found = components.iter().filter(|c| c.is_found()).count();
        let status = if found == components.len() {
            Status::Complete
        } else if found == 0 {
            Status::Missing
        } else {
            Status::Partial
        };
        Self {
            toolchain: toolchain,
            status: status,
            prefix: None,
            command: None,
            components: components,
        }
    }

    fn prefix(mut self, p: String) -> Self {
        self.prefix = Some(p);
        self
    }

    fn command(mut self, c: String) -> Self {
        self.command = Some(c);
        self
    }

    pub fn get_toolchain(&self) -> Toolchain {
        self.toolchain
    }

    pub fn get_status(&self) -> Status {
        self.status
    }

    pub fn get_prefix(&self) -> Option<&String> {
        self.prefix.as_ref()
    }

    pub fn get_command(&self) -> Option<&String> {
        self.command.as_ref()
    }

    pub fn get_components(&self) -> &Vec<Component> {
        &self.components
    }

    pub fn is_complete(&self) -> bool {
        self.status == Status::Complete
    }

    /// Names the components that could not be found.
    pub fn missing(&self) -> Vec<&str> {
        self.components
            .iter()
            .filter(|c| c.is_found() == false)
            .map(|c| c.get_name())
            .collect()
    }

    /// Describes what is missing for toolchains that only degrade output.
    pub fn warnings(&self) -> Vec<String> {
        match self.toolchain {
            Toolchain::PlantUml => {
                let mut list = Vec::new();
                if self.components[0].is_found() == false {
                    list.push(String::from(
                        "Java not found; PlantUML diagrams may not render (install Java or download plantuml.jar to docs/)",
                    ));
                } else if self.components[1].is_found() == false {
                    list.push(String::from(
                        "plantuml.jar not found; PlantUML diagrams may not render (download plantuml.jar to docs/ or docs/source/)",
                    ));
                }
                list
            }
            _ => Vec::new(),
        }
    }
}
