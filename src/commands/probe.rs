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

use crate::commands::helps::probe;
use crate::core::context::Context;
use crate::core::toolchain::{FindTool, Probe as Report, Toolchain};
use crate::error::Error;
use crate::util::anyerror::Fault;
use crate::util::filesystem;
use crate::util::prompt::{self, report_eval};

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Help, Subcommand};

#[derive(Debug, PartialEq)]
pub struct Probe {
    toolchains: Vec<Toolchain>,
    json: bool,
    check: bool,
}

impl Subcommand<Context> for Probe {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(Help::with(probe::HELP))?;
        Ok(Probe {
            json: cli.check(Arg::flag("json"))?,
            check: cli.check(Arg::flag("check"))?,
            toolchains: cli
                .get_all(Arg::positional("toolchain"))?
                .unwrap_or(Vec::new()),
        })
    }

    fn execute(self, c: &Context) -> proc::Result {
        let root = c.get_project_root().map(|p| p.as_path());
        let reports = self.run(c.get_search_path(), c.get_config(), root);

        if self.json == true {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        } else {
            reports.iter().for_each(|r| {
                println!("{}", Self::format_report(r));
                r.warnings().iter().for_each(|w| prompt::warning(w));
            });
        }

        if self.check == true {
            Self::verify(&reports)?;
        }
        Ok(())
    }
}

impl Probe {
    /// Searches for every selected toolchain, or all known toolchains when none are selected.
    fn run(
        &self,
        finder: &impl FindTool,
        config: &crate::core::config::Config,
        root: Option<&std::path::Path>,
    ) -> Vec<Report> {
        let selected = match self.toolchains.is_empty() {
            true => Toolchain::all().to_vec(),
            false => self.toolchains.clone(),
        };
        selected
            .iter()
            .map(|t| t.probe(finder, config, root))
            .collect()
    }

    /// Errors on the first report that is not complete.
    fn verify(reports: &[Report]) -> Result<(), Fault> {
        match reports.iter().find(|r| r.is_complete() == false) {
            Some(r) => Err(Error::ToolchainIncomplete(
                r.get_toolchain().to_string(),
                r.missing().join(", "),
            ))?,
            None => Ok(()),
        }
    }

    fn format_report(report: &Report) -> String {
        let mut text = format!("{:<10}{}", report.get_toolchain(), report.get_status());
        if let Some(p) = report.get_prefix() {
            text.push_str(&format!("\n  {:<26}{}", "prefix", p));
        }
        if let Some(cmd) = report.get_command() {
            text.push_str(&format!("\n  {:<26}{}", "command", cmd));
        }
        for comp in report.get_components() {
            text.push_str(&format!(
                "\n  {:<4}{:<22}{}",
                report_eval(comp.is_found()),
                comp.get_name(),
                comp.get_path()
                    .map(|p| filesystem::into_std_str(p.clone()))
                    .unwrap_or_default()
            ));
        }
        text
    }
}
