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

use std::path::PathBuf;
use std::str::FromStr;

use crate::commands::helps::config;
use crate::core::config::{ConfigDocument, FromFile, Locality};
use crate::core::context::Context;
use crate::core::project::Project;
use crate::error::Error;
use crate::util::anyerror::{AnyError, Fault};
use crate::util::filesystem;

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Help, Subcommand};

#[derive(Debug, PartialEq)]
pub struct Entry(String, String);

impl FromStr for Entry {
    type Err = AnyError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // split on first '=' sign
        match s.split_once('=') {
            Some(e) => Ok(Entry(e.0.to_owned(), e.1.to_owned())),
            None => Err(AnyError(format!("missing '=' separator"))),
        }
    }
}

/// Splits a dotted key into its table and key.
fn split_key(key: &str) -> Result<(&str, &str), Error> {
    match key.split_once('.') {
        Some((t, k)) if t.is_empty() == false && k.is_empty() == false => Ok((t, k)),
        _ => Err(Error::ConfigKeyUnsupported(key.to_string())),
    }
}

#[derive(Debug, PartialEq)]
pub struct Config {
    global: bool,
    list: bool,
    push: Vec<Entry>,
    pop: Vec<String>,
    set: Vec<Entry>,
    unset: Vec<String>,
}

impl Subcommand<Context> for Config {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(Help::with(config::HELP))?;
        Ok(Config {
            // Flags
            global: cli.check(Arg::flag("global"))?,
            list: cli.check(Arg::flag("list"))?,
            // Options
            push: cli
                .get_all(Arg::option("push").value("key=value"))?
                .unwrap_or(Vec::new()),
            pop: cli
                .get_all(Arg::option("pop").value("key"))?
                .unwrap_or(Vec::new()),
            set: cli
                .get_all(Arg::option("set").value("key=value"))?
                .unwrap_or(Vec::new()),
            unset: cli
                .get_all(Arg::option("unset").value("key"))?
                .unwrap_or(Vec::new()),
        })
    }

    fn execute(self, c: &Context) -> proc::Result {
        // display the files in effect
        if self.list == true {
            c.get_all_configs()
                .get_inner()
                .iter()
                .for_each(|(p, _, l)| {
                    println!("{:<61} {}", filesystem::into_std_str(p.to_path_buf()), l)
                });
            return Ok(());
        }

        // display flattened configuration
        if self.global == false && self.no_options_selected() == true {
            println!("{}", c.get_config().to_toml()?);
            return Ok(());
        }

        let file = self.select_file(c)?;
        let mut doc = ConfigDocument::from_file(&file)?;
        if self.no_options_selected() == true {
            println!("{}", doc);
            return Ok(());
        }
        self.run(&mut doc)?;
        doc.write(&file)
    }
}

impl Config {
    fn no_options_selected(&self) -> bool {
        self.push.is_empty() && self.pop.is_empty() && self.set.is_empty() && self.unset.is_empty()
    }

    /// Chooses the global file when requested or outside of a project, and the
    /// project's file otherwise.
    fn select_file(&self, c: &Context) -> Result<PathBuf, Fault> {
        let local = match self.global {
            true => None,
            false => c.get_project_root().map(|r| Project::config_path(r)),
        };
        match local {
            Some(p) => Ok(p),
            None => match c.get_all_configs().get_path(Locality::Global) {
                Some(p) => Ok(p.clone()),
                None => Err(AnyError::from("no global configuration file is loaded"))?,
            },
        }
    }

    /// Applies the requested edits and verifies the result is still valid.
    fn run(&self, doc: &mut ConfigDocument) -> Result<(), Fault> {
        for entry in &self.push {
            let (table, key) = split_key(&entry.0)?;
            doc.append_list(table, key, &entry.1)?;
        }
        for key in &self.pop {
            let (table, key) = split_key(key)?;
            doc.pop_list(table, key)?;
        }
        for entry in &self.set {
            let (table, key) = split_key(&entry.0)?;
            doc.set(table, key, &entry.1)?;
        }
        for key in &self.unset {
            let (table, key) = split_key(key)?;
            doc.unset(table, key)?;
        }
        doc.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::config::GLOBAL_CONFIG_FILE;
    use std::path::Path;

    /// Loads the settings seen from `dir` with `home` as the home directory.
    fn context_for(home: &Path, dir: &Path) -> Context {
        Context::new()
            .home_at(home.to_path_buf())
            .unwrap()
            .project_from(dir)
            .settings(GLOBAL_CONFIG_FILE)
            .unwrap()
    }

    fn edit() -> Config {
        Config {
            global: false,
            list: false,
            push: Vec::new(),
            pop: Vec::new(),
            set: Vec::new(),
            unset: Vec::new(),
        }
    }

    #[test]
    fn entry_parsing() {
        assert_eq!(
            Entry::from_str("env.BOARD=arty=a7").unwrap(),
            Entry(String::from("env.BOARD"), String::from("arty=a7"))
        );
        assert!(Entry::from_str("env.BOARD").is_err());
    }

    #[test]
    fn keys_need_a_table() {
        assert_eq!(split_key("toolchain.paths").unwrap(), ("toolchain", "paths"));
        assert!(split_key("paths").is_err());
        assert!(split_key(".paths").is_err());
    }

    #[test]
    fn applies_edits() {
        let mut doc = ConfigDocument::from_str("[env]\nOLD = \"1\"\n").unwrap();
        let mut cmd = edit();
        cmd.set = vec![Entry::from_str("toolchain.riscv-prefix=riscv32-unknown-elf-").unwrap()];
        cmd.push = vec![Entry::from_str("toolchain.paths=/opt/riscv/bin").unwrap()];
        cmd.unset = vec![String::from("env.OLD")];
        cmd.run(&mut doc).unwrap();

        let cfg = doc.validate().unwrap();
        assert_eq!(
            cfg.get_riscv_prefix(),
            Some(&String::from("riscv32-unknown-elf-"))
        );
        assert_eq!(cfg.get_tool_paths(), vec![&PathBuf::from("/opt/riscv/bin")]);
        assert!(cfg.get_env().as_ref().unwrap().is_empty());
    }

    #[test]
    fn edits_project_file() {
        let home = tempfile::tempdir().unwrap();
        let dir = tempfile::tempdir().unwrap();
        Project::create(dir.path(), None).unwrap();
        let ctx = context_for(home.path(), dir.path());

        let mut cmd = edit();
        cmd.set = vec![Entry::from_str("env.BOARD=arty-a7").unwrap()];
        cmd.execute(&ctx).unwrap();

        let local = std::fs::read_to_string(Project::config_path(dir.path())).unwrap();
        assert!(local.contains("BOARD = \"arty-a7\""));
        let global = std::fs::read_to_string(home.path().join(GLOBAL_CONFIG_FILE)).unwrap();
        assert_eq!(global, "");
    }

    #[test]
    fn global_flag_edits_home_file() {
        let home = tempfile::tempdir().unwrap();
        let dir = tempfile::tempdir().unwrap();
        Project::create(dir.path(), None).unwrap();
        let ctx = context_for(home.path(), dir.path());

        let mut cmd = edit();
        cmd.global = true;
        cmd.set = vec![Entry::from_str("toolchain.riscv-prefix=riscv32-unknown-elf-").unwrap()];
        cmd.execute(&ctx).unwrap();

        let global = std::fs::read_to_string(home.path().join(GLOBAL_CONFIG_FILE)).unwrap();
        assert!(global.contains("riscv-prefix = \"riscv32-unknown-elf-\""));
        let local = std::fs::read_to_string(Project::config_path(dir.path())).unwrap();
        assert_eq!(local, "");
    }

    #[test]
    fn outside_project_edits_home_file() {
        let home = tempfile::tempdir().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let ctx = context_for(home.path(), dir.path());
        assert_eq!(ctx.get_project_root(), None);

        let mut cmd = edit();
        cmd.push = vec![Entry::from_str("toolchain.paths=/opt/riscv/bin").unwrap()];
        cmd.execute(&ctx).unwrap();

        let global = std::fs::read_to_string(home.path().join(GLOBAL_CONFIG_FILE)).unwrap();
        assert!(global.contains("/opt/riscv/bin"));
        assert_eq!(dir.path().join(".aly").exists(), false);
    }

    #[test]
    fn invalid_edit_is_not_saved() {
        let home = tempfile::tempdir().unwrap();
        let dir = tempfile::tempdir().unwrap();
        Project::create(dir.path(), None).unwrap();
        let ctx = context_for(home.path(), dir.path());

        let mut cmd = edit();
        cmd.set = vec![Entry::from_str("project.name=9lives").unwrap()];
        assert!(cmd.execute(&ctx).is_err());

        let local = std::fs::read_to_string(Project::config_path(dir.path())).unwrap();
        assert_eq!(local, "");
    }

    #[test]
    fn rejects_invalid_result() {
        let mut doc = ConfigDocument::from_str("").unwrap();
        let mut cmd = edit();
        cmd.set = vec![Entry::from_str("project.name=9lives").unwrap()];
        assert!(cmd.run(&mut doc).is_err());
    }
}
