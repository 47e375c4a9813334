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

use aly::core::config::Config;
use aly::core::toolchain::{Status, Toolchain};
use common::{mock_toolchain, TempProject};
use std::path::PathBuf;
use std::str::FromStr;

#[test]
fn riscv_resolves_under_mock_bin() {
    let probe = Toolchain::RiscV.probe(&mock_toolchain(), &Config::new(), None);
    assert_eq!(probe.get_status(), Status::Complete);
    for comp in probe.get_components() {
        assert_eq!(
            comp.get_path().unwrap(),
            &PathBuf::from(format!("/mock/bin/{}", comp.get_name()))
        );
    }
}

#[test]
fn vivado_only_has_xvlog() {
    let probe = Toolchain::Vivado.probe(&mock_toolchain(), &Config::new(), None);
    assert_eq!(probe.get_status(), Status::Partial);
    assert_eq!(
        probe.get_components()[0].get_path(),
        Some(&PathBuf::from("/mock/bin/xvlog"))
    );
}

#[test]
fn plantuml_warns_without_java() {
    let fixture = TempProject::new();
    fixture.write("docs/plantuml.jar", "");
    let probe = Toolchain::PlantUml.probe(&mock_toolchain(), &Config::new(), Some(fixture.path()));
    assert_eq!(probe.get_status(), Status::Partial);
    assert_eq!(probe.get_command().unwrap(), "java -jar plantuml.jar");
    assert!(probe.warnings()[0].contains("Java not found"));
}

#[test]
fn plantuml_warns_without_jar() {
    let fixture = TempProject::new();
    let java = |name: &str| match name {
        "java" => Some(PathBuf::from("/usr/bin/java")),
        _ => None,
    };
    let probe = Toolchain::PlantUml.probe(&java, &Config::new(), Some(fixture.path()));
    assert_eq!(probe.get_status(), Status::Partial);
    assert!(probe.warnings()[0].contains("plantuml.jar not found"));
}

#[test]
fn configured_jar_from_project_config() {
    let fixture = TempProject::new();
    fixture.write(".aly/config", "[toolchain]\nplantuml-jar = \"tools/plantuml.jar\"\n");
    let jar = fixture.write("tools/plantuml.jar", "");
    let project = aly::core::project::Project::load(fixture.path()).unwrap();
    assert_eq!(
        Toolchain::find_plantuml_jar(project.get_config(), Some(project.get_root())),
        Some(jar)
    );
}

#[test]
fn configured_prefix_is_used() {
    let cfg = Config::from_str("[toolchain]\nriscv-prefix = \"riscv32-unknown-elf-\"\n").unwrap();
    let probe = Toolchain::RiscV.probe(&mock_toolchain(), &cfg, None);
    assert_eq!(probe.get_prefix().unwrap(), "riscv32-unknown-elf-");
    assert_eq!(
        probe.get_components()[0].get_path(),
        Some(&PathBuf::from("/mock/bin/riscv32-unknown-elf-gcc"))
    );
}
