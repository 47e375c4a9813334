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

use crate::commands::helps::aly;
use crate::core::config::GLOBAL_CONFIG_FILE;
use crate::core::context::Context;
use crate::util::anyerror::AnyError;
use crate::util::environment;

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Command, Help, Subcommand};

pub type AnyResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Debug, PartialEq)]
pub enum ColorMode {
    Always,
    Never,
    Auto,
}

impl std::str::FromStr for ColorMode {
    type Err = AnyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            "auto" => Ok(Self::Auto),
            _ => Err(AnyError(format!(
                "unknown color mode {:?}: expecting auto, always, or never",
                s
            ))),
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Aly {
    version: bool,
    command: Option<AlySubcommand>,
}

impl Command for Aly {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(Help::with(aly::HELP))?;
        // need to set this coloring mode ASAP
        match cli
            .get(Arg::option("color").value("when"))?
            .unwrap_or(ColorMode::Auto)
        {
            ColorMode::Always => colored::control::set_override(true),
            ColorMode::Never => colored::control::set_override(false),
            ColorMode::Auto => (),
        }
        Ok(Aly {
            version: cli.check(Arg::flag("version"))?,
            command: cli.nest(Arg::subcommand("command"))?,
        })
    }

    fn execute(self) -> proc::Result {
        // prioritize version information
        if self.version == true {
            println!("aly {}", VERSION);
            Ok(())
        // run the specified command
        } else if let Some(c) = self.command {
            // set up the context
            let context = Context::new()
                .home(environment::ALY_HOME)?
                .current_project_dir(environment::ALY_PROJECT_ROOT)? // must come before .settings() call
                .settings(GLOBAL_CONFIG_FILE)?
                .search_path();
            // pass the context to the given command
            c.execute(&context)
        // if no command is given then print default help
        } else {
            Ok(println!("{}", aly::HELP))
        }
    }
}

use crate::commands::config::Config;
use crate::commands::env::Env;
use crate::commands::help::Help as Manual;
use crate::commands::init::Init;
use crate::commands::new::New;
use crate::commands::probe::Probe;
use crate::commands::show::Show;

#[derive(Debug, PartialEq)]
enum AlySubcommand {
    Help(Manual),
    New(New),
    Init(Init),
    Show(Show),
    Probe(Probe),
    Env(Env),
    Config(Config),
}

impl Subcommand<Context> for AlySubcommand {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        match cli
            .select(&["help", "new", "init", "show", "probe", "env", "config"])?
            .as_ref()
        {
            "help" => Ok(AlySubcommand::Help(Manual::interpret(cli)?)),
            "new" => Ok(AlySubcommand::New(New::interpret(cli)?)),
            "init" => Ok(AlySubcommand::Init(Init::interpret(cli)?)),
            "show" => Ok(AlySubcommand::Show(Show::interpret(cli)?)),
            "probe" => Ok(AlySubcommand::Probe(Probe::interpret(cli)?)),
            "env" => Ok(AlySubcommand::Env(Env::interpret(cli)?)),
            "config" => Ok(AlySubcommand::Config(Config::interpret(cli)?)),
            _ => panic!("an unimplemented command was passed through!"),
        }
    }

    fn execute(self, context: &Context) -> proc::Result {
        match self {
            AlySubcommand::Help(c) => c.execute(&()),
            AlySubcommand::New(c) => c.execute(context),
            AlySubcommand::Init(c) => c.execute(context),
            AlySubcommand::Show(c) => c.execute(context),
            AlySubcommand::Probe(c) => c.execute(context),
            AlySubcommand::Env(c) => c.execute(context),
            AlySubcommand::Config(c) => c.execute(context),
        }
    }
}

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn color_modes() {
        assert_eq!(ColorMode::from_str("always").unwrap(), ColorMode::Always);
        assert_eq!(ColorMode::from_str("never").unwrap(), ColorMode::Never);
        assert_eq!(ColorMode::from_str("auto").unwrap(), ColorMode::Auto);
        assert!(ColorMode::from_str("sometimes").is_err());
    }
}
