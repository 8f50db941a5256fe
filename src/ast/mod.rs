/*
 * ==========================================================================
 * CLAUSE - Parse with Clause!
 * ==========================================================================
 *
 * File:     ast/mod.rs
 * Purpose:  Root module for the CLAUSE abstract syntax tree.
 *
 * This module wires together the AST node families and owns the `Ast`
 * envelope returned for a whole parsed file.
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

/// Block-shaped nodes and values:
/// - `BlockOrValue` (the closed value variant set)
/// - `FieldBlock` / `TokenBlock` / `EmptyValue`
/// - key-lookup query helpers
pub mod block;

/// The `key operator value` triple.
pub mod field;

pub use block::{BlockOrValue, EmptyValue, FieldBlock, FileBlock, TokenBlock};
pub use field::Field;

use serde::{Deserialize, Serialize};

/// A fully parsed Paradox script file.
///
/// Nodes in the tree are created during one file's parse and owned
/// exclusively by this value; the only outward reference they carry is the
/// path index inside each location, a pure lookup key into the shared path
/// table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ast {
    /// Base name of the parsed file.
    pub filename: String,
    /// Full path the file was read from.
    pub fullpath: String,
    /// The root block.
    #[serde(rename = "data")]
    pub block: FileBlock,
}
