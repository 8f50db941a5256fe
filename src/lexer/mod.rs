/*
 * ==========================================================================
 * CLAUSE - Parse with Clause!
 * ==========================================================================
 *
 * File:     lexer/mod.rs
 * Purpose:  Root module for the CLAUSE lexer.
 *
 * This module wires together the lexical analysis sub-modules:
 *   - Token model (kinds, token values, locations)
 *   - The ordered token pattern table
 *   - The scanner itself
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

/// The scanner:
/// - cursor / line / column state
/// - structural skipping (whitespace, tabs, comments)
/// - unexpected-character recovery
pub mod lexer;

/// Token pattern table:
/// - one anchored pattern per token kind
/// - fixed priority order resolving lexical ambiguity
pub mod patterns;

/// Token model:
/// - `TokenKind` (the closed kind enumeration)
/// - `Token` (text + kind + location)
pub mod token;

/// Re-export the public scanning entry point so callers can use
/// `crate::lexer::scan(...)`.
pub use lexer::{scan, Lexer};
pub use token::{Token, TokenKind};
