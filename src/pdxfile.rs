/*
 * ==========================================================================
 * CLAUSE - Parse with Clause!
 * ==========================================================================
 *
 * File:     pdxfile.rs
 * Purpose:  The high-level pipeline: raw bytes -> tokens -> tree.
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

use crate::ast::Ast;
use crate::diagnostics::DiagnosticItem;
use crate::error::ClauseError;
use crate::files::ParadoxFile;
use crate::lexer;
use crate::parser;
use crate::pathtable::PathTable;

/// Reads, tokenizes, and parses one Paradox script file.
///
/// I/O failure is the only fatal outcome and surfaces before any lexing
/// begins. Everything else - malformed characters, broken fields, missing
/// braces - degrades to diagnostics returned next to the best-effort tree:
/// lexer diagnostics first, then parser diagnostics, each in encounter
/// order. This function never prints; rendering is the caller's business.
pub fn parse_file(
    file: &ParadoxFile,
    table: &PathTable,
) -> Result<(Ast, Vec<DiagnosticItem>), ClauseError> {
    let content = file.read()?;
    Ok(parse_bytes(file, &content, table))
}

/// Tokenizes and parses content that has already been read (and BOM
/// stripped). This is the whole pipeline minus the I/O.
pub fn parse_bytes(
    file: &ParadoxFile,
    content: &[u8],
    table: &PathTable,
) -> (Ast, Vec<DiagnosticItem>) {
    let (tokens, mut diagnostics) = lexer::scan(file, content, table);
    let (block, parser_diagnostics) = parser::parse(tokens);
    diagnostics.extend(parser_diagnostics);

    let ast = Ast {
        filename: file.file_name(),
        fullpath: file.full_path().to_string_lossy().into_owned(),
        block,
    };
    (ast, diagnostics)
}
