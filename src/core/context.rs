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

use crate::core::config::{Config, Configs, Locality};
use crate::core::project::Project;
use crate::core::toolchain::SearchPath;
use crate::error::{Error, Hint};
use crate::util::anyerror::Fault;
use crate::util::filesystem::Standardize;
use std::env;
use std::path::{Path, PathBuf};

/// Shared state every command runs against.
#[derive(Debug)]
pub struct Context {
    home_path: PathBuf,
    project_root: Option<PathBuf>,
    all_configs: Configs,
    config: Config,
    search_path: SearchPath,
}

impl Context {
    pub fn new() -> Context {
        Context {
            home_path: PathBuf::new(),
            project_root: None,
            all_configs: Configs::new(),
            config: Config::new(),
            search_path: SearchPath::new(),
        }
    }

    /// Sets the home directory. By default this is `$HOME/.aly`. If set by `key`,
    /// it must be an existing directory.
    pub fn home(self, key: &str) -> Result<Context, Fault> {
        match env::var(key) {
            Ok(s) => {
                let hp = PathBuf::standardize(s);
                // do not allow a non-existent directory to be set for the home
                if hp.is_dir() == false {
                    return Err(Error::HomeDirMissing(hp, key.to_string()))?;
                }
                self.home_at(hp)
            }
            Err(_) => match home::home_dir() {
                Some(p) => {
                    let hp = p.join(".aly");
                    if hp.exists() == false {
                        std::fs::create_dir_all(&hp)?;
                    }
                    self.home_at(hp)
                }
                None => Err(Error::HomeDirUnknown(key.to_string()))?,
            },
        }
    }

    /// Sets the home directory to the existing directory `path`.
    pub fn home_at(mut self, path: PathBuf) -> Result<Context, Fault> {
        if path.is_dir() == false {
            return Err(Error::PathNotDirectory(path))?;
        }
        self.home_path = path;
        Ok(self)
    }

    /// Determines if the current working directory is within a project and sets the
    /// proper runtime environment variable.
    pub fn current_project_dir(self, key: &str) -> Result<Context, Fault> {
        let cwd = env::current_dir()?;
        let ctx = self.project_from(&cwd);
        if let Some(root) = &ctx.project_root {
            env::set_var(key, root);
        }
        Ok(ctx)
    }

    /// Searches `dir` and its ancestors for a project root.
    pub fn project_from(mut self, dir: &Path) -> Context {
        self.project_root = Project::find_root(&PathBuf::standardize(dir));
        self
    }

    /// Loads the global configuration file `file` directly under the home directory,
    /// creating it when missing, and the current project's configuration.
    pub fn settings(mut self, file: &str) -> Result<Context, Fault> {
        let global = self.home_path.join(file);
        if global.exists() == false {
            std::fs::write(&global, "")?;
        }
        let mut configs = Configs::new().load(global, &self.home_path, Locality::Global)?;
        if let Some(root) = &self.project_root {
            configs = configs.load(Project::config_path(root), root, Locality::Local)?;
        }
        self.config = configs.flatten();
        self.all_configs = configs;
        Ok(self)
    }

    /// Builds the executable search path from the configured tool directories
    /// followed by `PATH`.
    pub fn search_path(mut self) -> Context {
        self.search_path = SearchPath::from_env().prepend(&self.config.get_tool_paths());
        self
    }

    pub fn get_home_path(&self) -> &PathBuf {
        &self.home_path
    }

    /// Access the project root detected from the working directory.
    pub fn get_project_root(&self) -> Option<&PathBuf> {
        self.project_root.as_ref()
    }

    /// Loads the working project, erroring if the command was not run from within one.
    pub fn require_project(&self) -> Result<Project, Fault> {
        match &self.project_root {
            Some(root) => Project::load(root),
            None => Err(Error::NoWorkingProjectFound(Hint::CreateProject))?,
        }
    }

    /// Access the flattened configuration data.
    pub fn get_config(&self) -> &Config {
        &self.config
    }

    /// Access every configuration file that was loaded.
    pub fn get_all_configs(&self) -> &Configs {
        &self.all_configs
    }

    pub fn get_search_path(&self) -> &SearchPath {
        &self.search_path
    }
}
