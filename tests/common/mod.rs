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

//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A project tree inside a temporary directory.
///
/// The whole tree is removed when the fixture is dropped, including while
/// unwinding from a failed assertion.
pub struct TempProject {
    _dir: TempDir,
    root: PathBuf,
}

impl TempProject {
    /// Creates `test_project/` holding an empty `.aly/config`, `firmware/`, and `rtl/`.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("test_project");
        std::fs::create_dir(&root).unwrap();

        let aly_dir = root.join(".aly");
        std::fs::create_dir(&aly_dir).unwrap();
        std::fs::write(aly_dir.join("config"), "").unwrap();

        std::fs::create_dir(root.join("firmware")).unwrap();
        std::fs::create_dir(root.join("rtl")).unwrap();
        Self {
            _dir: dir,
            root: root,
        }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Writes `contents` to the file at `rel` below the project root.
    pub fn write(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.root.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, contents).unwrap();
        path
    }
}

/// A tool finder that only knows RISC-V and `xvlog` programs, placing them
/// under `/mock/bin/`.
pub fn mock_toolchain() -> impl Fn(&str) -> Option<PathBuf> {
    |name: &str| {
        if name.contains("riscv") || name.contains("xvlog") {
            Some(PathBuf::from(format!("/mock/bin/{}", name)))
        } else {
            None
        }
    }
}
