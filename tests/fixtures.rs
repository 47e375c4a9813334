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

mod common;

use common::{mock_toolchain, TempProject};
use std::path::PathBuf;

use aly::core::toolchain::FindTool;

#[test]
fn temp_project_layout() {
    let project = TempProject::new();
    let root = project.path();
    assert_eq!(root.file_name().unwrap(), "test_project");
    assert!(root.join(".aly").is_dir());
    assert_eq!(
        std::fs::read_to_string(root.join(".aly").join("config")).unwrap(),
        ""
    );
    assert!(root.join("firmware").is_dir());
    assert!(root.join("rtl").is_dir());
}

#[test]
fn temp_project_removed_on_drop() {
    let project = TempProject::new();
    let root = project.path().to_path_buf();
    project.write("rtl/top.sv", "module top; endmodule\n");
    drop(project);
    assert_eq!(root.exists(), false);
}

#[test]
fn temp_project_removed_after_failure() {
    let seen = std::sync::Mutex::new(None);
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let project = TempProject::new();
        *seen.lock().unwrap() = Some(project.path().to_path_buf());
        panic!("simulated test failure");
    }));
    assert!(result.is_err());
    let root: PathBuf = seen.lock().unwrap().take().unwrap();
    assert_eq!(root.exists(), false);
}

#[test]
fn mock_toolchain_lookups() {
    let finder = mock_toolchain();
    assert_eq!(
        finder.find_tool("riscv64-unknown-elf-gcc"),
        Some(PathBuf::from("/mock/bin/riscv64-unknown-elf-gcc"))
    );
    assert_eq!(
        finder.find_tool("xvlog"),
        Some(PathBuf::from("/mock/bin/xvlog"))
    );
    assert_eq!(finder.find_tool("xsim"), None);
    assert_eq!(finder.find_tool("java"), None);
    assert_eq!(finder.find_tool("gcc"), None);
}
