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

use colored::ColoredString;
use colored::Colorize;
use std::io::{BufRead, Error};

/// Conditionally operates on `status` to return a colored "ok" or "no".
pub fn report_eval(status: bool) -> ColoredString {
    match status {
        true => ColoredString::from("ok").green(),
        false => ColoredString::from("no").red(),
    }
}

/// Prints an informational line.
pub fn info(s: &str) {
    println!("{} {}", "info:".bold(), s);
}

/// Prints a warning line to standard error.
pub fn warning(s: &str) {
    eprintln!("{} {}", "warning:".yellow().bold(), s);
}

/// Asks the yes/no question `s`, reading the answer from `input`. Accepts '\n'
/// or 'y' to return `true`, and 'n' to return `false`.
pub fn confirm(s: &str, input: &mut impl BufRead) -> Result<bool, Error> {
    println!("{}? [y/n]", s);
    check_for_response(input)
}

/// Loops until a valid response is entered. "Y\n" and "\n" map to `true`, while
/// "N\n" and a closed input map to `false`.
///
/// Also supports checking windows-style line endings `\r\n`.
fn check_for_response(input: &mut impl BufRead) -> Result<bool, Error> {
    let mut buffer: String = String::new();
    loop {
        if input.read_line(&mut buffer)? == 0 {
            break Ok(false);
        }
        let result = match buffer.to_uppercase().as_ref() {
            "\r\n" | "\n" | "Y\n" | "Y\r\n" => Some(true),
            "N\n" | "N\r\n" => Some(false),
            _ => {
                buffer.clear();
                None
            }
        };
        if let Some(r) = result {
            break Ok(r);
        };
    }
}
