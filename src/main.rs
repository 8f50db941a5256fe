/*
 * ==========================================================================
 * CLAUSE - Parse with Clause!
 * ==========================================================================
 *
 * File:     main.rs
 * Purpose:  The `clause` command line: parse a script file, render its
 *           diagnostics, optionally persist the AST as JSON.
 *
 * Authors:  The CLAUSE contributors
 * Github:   https://github.com/clause-lang/clause
 *
 * License:
 * This file is part of the CLAUSE project.
 *
 * CLAUSE is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use clause::diagnostics::{DiagnosticPrinter, Severity};
use clause::files::{FileKind, ParadoxFile};
use clause::pathtable::PathTable;
use clause::pdxfile;

#[derive(Parser)]
#[command(
    name = "clause",
    version,
    about = "Parse with Clause! A parser for Paradox-engine script files"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a script file and report its diagnostics
    Parse {
        /// Path of the script file to parse
        file: PathBuf,

        /// Save the parsed AST to a JSON file
        ///
        /// Example: --save-ast ast.json
        #[arg(long, value_name = "PATH")]
        save_ast: Option<PathBuf>,

        /// Treat the file as base-game content instead of mod content
        #[arg(long)]
        vanilla: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.command {
        Command::Parse {
            file,
            save_ast,
            vanilla,
        } => run_parse(file, save_ast, vanilla),
    }
}

fn run_parse(path: PathBuf, save_ast: Option<PathBuf>, vanilla: bool) -> ExitCode {
    let kind = if vanilla {
        FileKind::Vanilla
    } else {
        FileKind::Mod
    };

    let table = PathTable::new();
    let file = ParadoxFile::new(&path, kind);

    // I/O is the one fatal failure: nothing to lex, nothing to report.
    let content = match file.read() {
        Ok(content) => content,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let (ast, diagnostics) = pdxfile::parse_bytes(&file, &content, &table);

    let printer = DiagnosticPrinter::new(file.file_name(), String::from_utf8_lossy(&content));
    for item in &diagnostics {
        printer.print(item);
    }

    if let Some(out) = save_ast {
        let json = match serde_json::to_string_pretty(&ast) {
            Ok(json) => json,
            Err(err) => {
                eprintln!("error: failed to serialize AST: {err}");
                return ExitCode::FAILURE;
            }
        };
        if let Err(err) = fs::write(&out, json) {
            eprintln!("error: failed to write {}: {err}", out.display());
            return ExitCode::FAILURE;
        }
        println!("AST saved to {}", out.display());
    }

    // The core records and moves on; deciding what counts as failure is the
    // command line's call.
    if diagnostics.iter().any(|d| d.severity >= Severity::Error) {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
