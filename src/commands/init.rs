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

use crate::commands::helps::init;
use crate::commands::new::New;
use crate::core::context::Context;
use crate::core::project::{Project, ProjectName};
use crate::error::{Error, LastError};
use crate::util::anyerror::Fault;
use crate::util::filesystem::{self, Standardize};
use crate::util::prompt;
use std::io::BufRead;
use std::path::PathBuf;

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Help, Subcommand};

#[derive(Debug, PartialEq)]
pub struct Init {
    path: PathBuf,
    name: Option<ProjectName>,
    force: bool,
}

impl Subcommand<Context> for Init {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(Help::with(init::HELP))?;
        Ok(Init {
            force: cli.check(Arg::flag("force"))?,
            name: cli.get(Arg::option("name"))?,
            path: cli
                .get(Arg::positional("path"))?
                .unwrap_or(PathBuf::from(".")),
        })
    }

    fn execute(self, _: &Context) -> proc::Result {
        self.run(&mut std::io::stdin().lock())
    }
}

impl Init {
    /// Initializes the project, reading any confirmation from `input`.
    fn run(&self, input: &mut impl BufRead) -> Result<(), Fault> {
        let dest = PathBuf::standardize(self.path.clone());
        // the directory must already exist
        if dest.is_dir() == false {
            return Err(Error::PathNotDirectory(self.path.clone()))?;
        }
        // verify we are not already in a project directory
        if let Some(p) = Project::find_root(&dest) {
            return Err(Error::ProjectExistsAtPath(p))?;
        }

        let name = New::extract_name(self.name.as_ref(), &dest)?;

        // ask before placing the project structure among existing files
        if self.force == false && filesystem::is_empty_dir(&dest)? == false {
            let question = format!(
                "directory {} is not empty; initialize a project here",
                filesystem::into_std_str(dest.clone())
            );
            if prompt::confirm(&question, input)? == false {
                prompt::info("cancelled initialization");
                return Ok(());
            }
        }

        match Project::create(&dest, Some(&name)) {
            Ok(project) => {
                prompt::info(&format!(
                    "initialized project \"{}\" at {}",
                    name,
                    filesystem::into_std_str(dest)
                ));
                let missing = project.layout().missing();
                if missing.is_empty() == false {
                    prompt::warning(&format!("project is missing {}", missing.join(", ")));
                }
                Ok(())
            }
            Err(e) => Err(Error::FailedToInitProject(LastError(e.to_string())))?,
        }
    }
}
