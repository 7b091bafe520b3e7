// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Galatea-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Galatea and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Galatea CLI entrypoint.
//!
//! Runs the interactive timeline board TUI. Use `--demo` to start from the
//! built-in demo board instead of an empty one.

use std::env;
use std::process::ExitCode;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program}\n  {program} --demo\n\nStarts the interactive timeline board TUI (empty board by default).\n--demo starts from a built-in demo board with sample lanes and links."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
}

fn parse_options(args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    for arg in args {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--help" | "-h" => return Err(()),
            _ => return Err(()),
        }
    }

    Ok(options)
}

fn main() -> ExitCode {
    let mut args = env::args();
    let program = args.next().unwrap_or_else(|| "galatea".to_owned());

    let Ok(options) = parse_options(args) else {
        print_usage(&program);
        return ExitCode::FAILURE;
    };

    let result = if options.demo { galatea::tui::run_demo() } else { galatea::tui::run() };

    if let Err(err) = result {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
