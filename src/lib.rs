/*
 * ==========================================================================
 * CLAUSE - Parse with Clause!
 * ==========================================================================
 *
 * File:     lib.rs
 * Purpose:  Crate root: wires the modules together and re-exports the
 *           public surface.
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

//! CLAUSE parses the scripting dialect used by Paradox-engine game mods: an
//! ordered sequence of `key operator value` assignments whose values may be
//! nested blocks, bare token lists, or omitted entirely.
//!
//! The pipeline:
//!
//! ```text
//! raw bytes -> Lexer -> tokens -> Parser -> Ast + diagnostics
//! ```
//!
//! Nothing inside one file's parse is fatal: malformed input degrades to
//! diagnostics collected next to a best-effort tree. The only hard failure
//! is an unreadable file.
//!
//! ```no_run
//! use clause::{parse_file, FileKind, ParadoxFile, PathTable};
//!
//! let table = PathTable::new();
//! let file = ParadoxFile::new("common/traits/00_traits.txt", FileKind::Mod);
//! let (ast, diagnostics) = parse_file(&file, &table)?;
//! println!("{} fields, {} diagnostics", ast.block.fields.len(), diagnostics.len());
//! # Ok::<(), clause::ClauseError>(())
//! ```

/// Abstract syntax tree: fields, blocks, values, and key lookups.
pub mod ast;

/// Severities, diagnostic items, and the console renderer.
pub mod diagnostics;

/// The fatal error type.
pub mod error;

/// Script file descriptors and the BOM-stripping reader.
pub mod files;

/// Lexical analysis: token model, pattern table, scanner.
pub mod lexer;

/// Source locations.
pub mod loc;

/// Syntactic analysis: the recursive-descent parser and its recovery.
pub mod parser;

/// The path interning table locations point into.
pub mod pathtable;

/// The high-level file pipeline.
pub mod pdxfile;

pub use ast::Ast;
pub use diagnostics::{DiagnosticItem, DiagnosticPrinter, Severity};
pub use error::ClauseError;
pub use files::{FileKind, ParadoxFile};
pub use lexer::{Token, TokenKind};
pub use loc::Loc;
pub use pathtable::{PathIndex, PathTable};
pub use pdxfile::{parse_bytes, parse_file};
