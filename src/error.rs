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

use colored::Colorize;
use std::{fmt::Display, path::PathBuf};

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("a project already exists at {0:?}")]
    ProjectExistsAtPath(PathBuf),
    #[error("path {0:?} already exists{1}")]
    PathAlreadyExists(PathBuf, Hint),
    #[error("path {0:?} is not a directory")]
    PathNotDirectory(PathBuf),
    #[error("directory {0:?} is an invalid project name: {1}{2}")]
    CannotAutoExtractNameFromPath(String, LastError, Hint),
    #[error("file system path {0:?} is missing a name{1}")]
    MissingFileSystemPathName(PathBuf, Hint),
    #[error("failed to create new project: {0}")]
    FailedToCreateProject(LastError),
    #[error("failed to initialize project: {0}")]
    FailedToInitProject(LastError),
    #[error("command must be ran from a project: no project found in current directory or any parent directory{0}")]
    NoWorkingProjectFound(Hint),
    #[error("directory {0:?} is not a project: missing configuration file {1:?}")]
    MissingProjectConfig(PathBuf, PathBuf),
    #[error("failed to parse configuration file {0:?}: {1}")]
    ConfigParseFailed(PathBuf, LastError),
    #[error("failed to modify configuration: {0}")]
    ConfigNotSaved(LastError),
    #[error("configuration field {0:?} does not store a list")]
    ConfigFieldNotList(String),
    #[error("configuration key {0:?} does not exist")]
    ConfigKeyMissing(String),
    #[error("configuration key {0:?} must be written as <table>.<key>")]
    ConfigKeyUnsupported(String),
    #[error("failed to detect the user's home directory: set the {0} environment variable")]
    HomeDirUnknown(String),
    #[error("directory {0:?} does not exist for {1}")]
    HomeDirMissing(PathBuf, String),
    #[error("no toolchain named {0:?}{1}")]
    ToolchainNotFound(String, Hint),
    #[error("toolchain {0} is incomplete: missing {1}")]
    ToolchainIncomplete(String, String),
}

#[derive(Debug, PartialEq)]
pub struct LastError(pub String);

impl Display for LastError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Error::lowerize(self.0.to_string()))
    }
}

impl Error {
    /// Lowercases the first character of `s` unless its first word is an acronym.
    pub fn lowerize(s: String) -> String {
        let first_word = match s.split_whitespace().next() {
            Some(w) => w,
            None => return s,
        };
        // retain punctuation if the first word is all-caps and longer than 1 character
        if first_word.len() > 1
            && first_word
                .chars()
                .find(|c| c.is_ascii_lowercase() == true)
                .is_none()
        {
            s
        } else {
            s.char_indices()
                .map(|(i, c)| if i == 0 { c.to_ascii_lowercase() } else { c })
                .collect()
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum Hint {
    InitNotNew,
    ProjectNameSeparate,
    CreateProject,
    ToolchainList,
}

impl Display for Hint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Self::InitNotNew => "use `aly init` to initialize an existing directory",
            Self::ProjectNameSeparate => {
                "see the \"--name\" option for making a project name separate from the directory name"
            }
            Self::CreateProject => "use `aly new` or `aly init` to create a project",
            Self::ToolchainList => "use `aly probe` to see the list of known toolchains",
        };
        write!(
            f,
            "\n\n{}: {}",
            "hint".green(),
            Error::lowerize(message.to_string())
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn lowerize_first_letter() {
        assert_eq!(
            Error::lowerize(String::from("No such file")),
            "no such file"
        );
        assert_eq!(
            Error::lowerize(String::from("TOML parse error")),
            "TOML parse error"
        );
        assert_eq!(Error::lowerize(String::from("A")), "a");
        assert_eq!(Error::lowerize(String::new()), "");
    }
}
