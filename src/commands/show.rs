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

use crate::commands::helps::show;
use crate::core::context::Context;
use crate::core::fileset::Fileset;
use crate::core::project::{Project, ALY_DIR, CONFIG_FILE, FIRMWARE_DIR, RTL_DIR};
use crate::util::anyerror::Fault;
use crate::util::filesystem::{self, Unit};
use crate::util::prompt::report_eval;
use std::path::PathBuf;

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Help, Subcommand};

#[derive(Debug, PartialEq)]
pub struct Show {
    files: bool,
}

impl Subcommand<Context> for Show {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(Help::with(show::HELP))?;
        Ok(Show {
            files: cli.check(Arg::flag("files"))?,
        })
    }

    fn execute(self, c: &Context) -> proc::Result {
        let project = c.require_project()?;
        self.run(&project)
    }
}

impl Show {
    fn run(&self, project: &Project) -> Result<(), Fault> {
        let rtl = Fileset::rtl().collect(&project.get_rtl_dir());
        let firmware = Fileset::firmware().collect(&project.get_firmware_dir());

        if self.files == true {
            println!("{}", Self::list_files(project, &[&rtl, &firmware]));
            return Ok(());
        }
        let size = filesystem::compute_size(project.get_root(), Unit::MegaBytes)?;
        println!("{}", Self::format_summary(project, rtl.len(), firmware.len(), size));
        Ok(())
    }

    /// Lists every collected source relative to the project root.
    fn list_files(project: &Project, sets: &[&Vec<PathBuf>]) -> String {
        sets.iter()
            .flat_map(|s| s.iter())
            .map(|p| match p.strip_prefix(project.get_root()) {
                Ok(rel) => filesystem::into_std_str(rel.to_path_buf()),
                Err(_) => filesystem::into_std_str(p.clone()),
            })
            .collect::<Vec<String>>()
            .join("\n")
    }

    fn format_summary(project: &Project, rtl_count: usize, fw_count: usize, size: f32) -> String {
        let layout = project.layout();
        format!(
            "\
Name:     {}
Uuid:     {}
Root:     {}
Size:     {:.2} MB
Layout:
  {:<4}{}/{}
  {:<4}{}/ ({} files)
  {:<4}{}/ ({} files)",
            project.get_name(),
            project
                .get_uuid()
                .map(|u| u.to_string())
                .unwrap_or(String::from("--")),
            filesystem::into_std_str(project.get_root().clone()),
            size,
            report_eval(layout.config),
            ALY_DIR,
            CONFIG_FILE,
            report_eval(layout.firmware),
            FIRMWARE_DIR,
            fw_count,
            report_eval(layout.rtl),
            RTL_DIR,
            rtl_count,
        )
    }
}
