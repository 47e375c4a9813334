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

use crate::commands::helps::env;
use crate::core::context::Context;
use crate::core::project::Project;
use crate::core::toolchain::Toolchain;
use crate::util::environment::{self, EnvVar, Environment};
use crate::util::filesystem;

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Help, Subcommand};

#[derive(Debug, PartialEq)]
pub struct Env {
    keys: Vec<String>,
}

impl Subcommand<Context> for Env {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(Help::with(env::HELP))?;
        Ok(Env {
            keys: cli
                .get_all(Arg::positional("key"))?
                .unwrap_or(Vec::new()),
        })
    }

    fn execute(self, c: &Context) -> proc::Result {
        let mut env = Environment::from_vec(vec![
            EnvVar::with(
                environment::ALY_HOME,
                &filesystem::into_std_str(c.get_home_path().clone()),
            ),
            EnvVar::with(
                environment::NO_COLOR,
                &Environment::read(environment::NO_COLOR).unwrap_or_default(),
            ),
            EnvVar::with(
                environment::ALY_RISCV_PREFIX,
                &Toolchain::riscv_prefix(c.get_search_path(), c.get_config()),
            ),
        ])
        .from_config(c.get_config());

        // check if in a project to add those variables
        if let Some(root) = c.get_project_root() {
            if let Ok(project) = Project::load(root) {
                env = env.from_project(&project);
            }
        }
        println!("{}", self.run(&env));
        Ok(())
    }
}

impl Env {
    /// Formats every variable, or only the values of the requested keys.
    fn run(&self, env: &Environment) -> String {
        match self.keys.is_empty() {
            true => env
                .iter()
                .map(|e| format!("{:?}", e))
                .collect::<Vec<String>>()
                .join("\n"),
            false => self
                .keys
                .iter()
                .map(|k| {
                    env.get(k)
                        .map(|e| e.get_value().to_string())
                        .unwrap_or_default()
                })
                .collect::<Vec<String>>()
                .join("\n"),
        }
    }
}
