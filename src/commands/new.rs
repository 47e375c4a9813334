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

use crate::commands::aly::AnyResult;
use crate::commands::helps::new;
use crate::core::context::Context;
use crate::core::project::{Project, ProjectName};
use crate::error::{Error, Hint, LastError};
use crate::util::filesystem::{self, Standardize};
use crate::util::prompt;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Help, Subcommand};

#[derive(Debug, PartialEq)]
pub struct New {
    /// Specify where to create the new project on the local machine.
    path: PathBuf,
    /// Optionally give the name for the project, by default tries to be the folder's name.
    name: Option<ProjectName>,
}

impl Subcommand<Context> for New {
    fn interpret(cli: &mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(Help::with(new::HELP))?;
        Ok(Self {
            name: cli.get(Arg::option("name"))?,
            path: cli.require(Arg::positional("path"))?,
        })
    }

    fn execute(self, _: &Context) -> proc::Result {
        // resolve any relative path
        let dest = PathBuf::standardize(self.path.clone());
        // verify we are not already in a project directory
        if let Some(p) = Project::find_root(&dest) {
            return Err(Error::ProjectExistsAtPath(p))?;
        }
        // verify the path does not exist
        if self.path.exists() == true {
            return Err(Error::PathAlreadyExists(self.path.clone(), Hint::InitNotNew))?;
        }

        let name = Self::extract_name(self.name.as_ref(), &dest)?;

        match Project::create(&dest, Some(&name)) {
            Ok(_) => {
                prompt::info(&format!(
                    "created project \"{}\" at {}",
                    name,
                    filesystem::into_std_str(dest)
                ));
                Ok(())
            }
            Err(e) => Err(Error::FailedToCreateProject(LastError(e.to_string())))?,
        }
    }
}

impl New {
    /// Determines the final name to use for the project based on the given `name` and falls back
    /// to the `path`'s file name if no `name` is given.
    pub fn extract_name<'a>(
        name: Option<&'a ProjectName>,
        path: &Path,
    ) -> AnyResult<Cow<'a, ProjectName>> {
        match name {
            Some(n) => Ok(Cow::Borrowed(n)),
            // try to use the path's ending name as the project name
            None => match path.file_name() {
                Some(fname) => {
                    let s = fname.to_string_lossy();
                    match ProjectName::from_str(s.as_ref()) {
                        Ok(r) => Ok(Cow::Owned(r)),
                        Err(e) => Err(Error::CannotAutoExtractNameFromPath(
                            s.to_string(),
                            LastError(e.to_string()),
                            Hint::ProjectNameSeparate,
                        ))?,
                    }
                }
                None => Err(Error::MissingFileSystemPathName(
                    path.to_path_buf(),
                    Hint::ProjectNameSeparate,
                ))?,
            },
        }
    }
}
