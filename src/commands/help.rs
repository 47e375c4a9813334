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

use crate::commands::manuals;
use crate::util::anyerror::AnyError;

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Subcommand};

#[derive(Debug, PartialEq)]
pub struct Help {
    list: bool,
    topic: Option<Topic>,
}

impl Subcommand<()> for Help {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(cliproc::Help::with(HELP))?;
        Ok(Help {
            list: cli.check(Arg::flag("list"))?,
            topic: cli.get(Arg::positional("topic"))?,
        })
    }

    fn execute(self, _: &()) -> proc::Result {
        self.run();
        Ok(())
    }
}

#[derive(Debug, PartialEq)]
enum Topic {
    New,
    Init,
    Show,
    Probe,
    Env,
    Config,
}

impl Topic {
    const ALL: [&'static str; 6] = ["new", "init", "show", "probe", "env", "config"];

    fn list_all() -> String {
        Self::ALL.join("\n")
    }

    /// Transforms the variant to its corresponding manual page.
    fn as_manual(&self) -> &str {
        use Topic::*;
        match &self {
            New => manuals::new::MANUAL,
            Init => manuals::init::MANUAL,
            Show => manuals::show::MANUAL,
            Probe => manuals::probe::MANUAL,
            Env => manuals::env::MANUAL,
            Config => manuals::config::MANUAL,
        }
    }
}

impl std::str::FromStr for Topic {
    type Err = AnyError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "new" => Self::New,
            "init" => Self::Init,
            "show" => Self::Show,
            "probe" => Self::Probe,
            "env" => Self::Env,
            "config" => Self::Config,
            _ => return Err(AnyError(format!("topic '{}' not found", s))),
        })
    }
}

impl Help {
    fn run(&self) {
        if self.list == true {
            println!("{}", Topic::list_all());
        } else {
            let contents = match &self.topic {
                Some(t) => t.as_manual(),
                None => manuals::aly::MANUAL,
            };
            println!("{}", contents);
        }
    }
}

const HELP: &str = "\
Read in-depth documentation on aly topics.

Usage:
    aly help [<topic>]

Args:
    <topic>         a listed topic or any aly subcommand

Use 'aly help --list' to see all available topics.
";

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn every_topic_has_a_manual() {
        for name in Topic::ALL {
            let topic = Topic::from_str(name).unwrap();
            assert!(topic.as_manual().contains(&format!("aly {}", name)));
        }
        assert!(Topic::from_str("build").is_err());
    }
}
