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

use glob::{MatchOptions, Pattern, PatternError};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

pub const RTL_PATTERNS: [&str; 6] = ["*.v", "*.vh", "*.sv", "*.svh", "*.vhd", "*.vhdl"];

pub const FIRMWARE_PATTERNS: [&str; 7] = ["*.c", "*.h", "*.cpp", "*.hpp", "*.s", "*.S", "*.ld"];

/// A named group of file name patterns.
#[derive(Debug, PartialEq)]
pub struct Fileset {
    name: String,
    patterns: Vec<Pattern>,
}

impl Fileset {
    pub fn new(name: &str, patterns: &[&str]) -> Result<Self, PatternError> {
        Ok(Self {
            name: name.to_string(),
            patterns: patterns
                .iter()
                .map(|p| Pattern::new(p))
                .collect::<Result<Vec<Pattern>, PatternError>>()?,
        })
    }

    /// Hardware description sources.
    pub fn rtl() -> Self {
        Self::new("rtl", &RTL_PATTERNS).expect("static rtl patterns are valid")
    }

    /// Software sources and linker scripts.
    pub fn firmware() -> Self {
        Self::new("firmware", &FIRMWARE_PATTERNS).expect("static firmware patterns are valid")
    }

    pub fn get_name(&self) -> &str {
        &self.name
    }

    /// Checks the file name of `path` against the patterns. Matching is case sensitive
    /// so `*.s` and `*.S` stay distinct.
    pub fn is_match(&self, path: &Path) -> bool {
        let opts = MatchOptions {
            case_sensitive: true,
            require_literal_separator: false,
            require_literal_leading_dot: true,
        };
        match path.file_name() {
            Some(name) => {
                let name = name.to_string_lossy();
                self.patterns
                    .iter()
                    .any(|p| p.matches_with(name.as_ref(), opts))
            }
            None => false,
        }
    }

    /// Walks `dir` and collects every matching file, honoring ignore files.
    ///
    /// Returns an empty list when `dir` does not exist. The list is sorted by path.
    pub fn collect(&self, dir: &Path) -> Vec<PathBuf> {
        if dir.is_dir() == false {
            return Vec::new();
        }
        let walker = WalkBuilder::new(dir)
            .hidden(true)
            .git_ignore(true)
            .require_git(false)
            .build();
        let mut files: Vec<PathBuf> = walker
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().map(|t| t.is_file()).unwrap_or(false))
            .map(|e| e.into_path())
            .filter(|p| self.is_match(p))
            .collect();
        files.sort();
        files
    }
}
