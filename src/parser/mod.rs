/*
 * ==========================================================================
 * CLAUSE - Parse with Clause!
 * ==========================================================================
 *
 * File:     parser/mod.rs
 * Purpose:  Root module for the CLAUSE recursive-descent parser.
 *
 * This module wires together all parser sub-modules, including:
 *   - Core parser state and the public parse entry point
 *   - Field-level grammar
 *   - Block grammar and the field/token shape commitment
 *   - Shared helpers and error recovery
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

/// Core parser orchestration:
/// - Owns the `Parser` struct and its 2-token window
/// - Exposes the main `parse(tokens)` entry point
pub mod parser;

/// Field-level grammar:
/// - file block / field list
/// - key, operator, value, literal
pub mod fields;

/// Block grammar:
/// - `{ ... }` parsing and the one-shot field/token shape decision
/// - token lists
pub mod blocks;

/// Shared parser helpers:
/// - token expectation and consumption
/// - quoted-string unescaping
/// - lookahead predicates
pub mod helpers;

/// Error recovery:
/// - `RecoveryPoint` and the per-production recovery sets
/// - the synchronization scan
pub mod recovery;

/// Re-export the public parse entry point so callers can use
/// `crate::parser::parse(...)`.
pub use parser::{parse, Parser};
