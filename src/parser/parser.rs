/*
 * ==========================================================================
 * CLAUSE - Parse with Clause!
 * ==========================================================================
 *
 * Core Recursive-Descent Parser Entry Point
 *
 * This file defines the primary `Parser` structure and the public `parse()`
 * driver used to transform a token sequence into the root block of a
 * Paradox script file.
 *
 * The parsing implementation itself is split across multiple modules:
 * - `fields.rs`    -> field-level grammar (field list, key, operator, value)
 * - `blocks.rs`    -> block grammar and the field/token block commitment
 * - `helpers.rs`   -> token expectation, unquoting, lookahead predicates
 * - `recovery.rs`  -> synchronization and the per-production recovery sets
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

use crate::ast::FileBlock;
use crate::diagnostics::{DiagnosticItem, Diagnostics};
use crate::lexer::token::Token;
use crate::loc::Loc;

/// The CLAUSE recursive-descent parser.
///
/// The parser owns a 2-token window over the sequence: `current` is the
/// token under consideration and `lookahead` the one after it. That window
/// is all the grammar needs - one token of lookahead decides whether a
/// block element is a field (`a = yes`) or a bare value (`255`). `loc`
/// always mirrors the location of `current` so diagnostics can point
/// somewhere sensible even at end of input.
///
/// No condition inside one file's parse is fatal: malformed constructs
/// degrade to dropped fields or partial blocks, recorded in `diagnostics`.
pub struct Parser {
    tokens: std::vec::IntoIter<Token>,
    pub(crate) current: Option<Token>,
    pub(crate) lookahead: Option<Token>,
    pub(crate) loc: Loc,
    pub(crate) diagnostics: Diagnostics,
}

/// Public entry point for the parsing phase.
///
/// Consumes the full token sequence produced by the lexer and returns the
/// file's root block along with every diagnostic raised on the way. The
/// tree is best-effort: it contains whatever parsed, however bad the rest
/// of the input was.
pub fn parse(tokens: Vec<Token>) -> (FileBlock, Vec<DiagnosticItem>) {
    let mut parser = Parser::new(tokens);
    let block = parser.file_block();
    (block, parser.diagnostics.into_items())
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        let mut tokens = tokens.into_iter();
        let current = tokens.next();
        let lookahead = tokens.next();
        let loc = current.as_ref().map(|t| t.loc).unwrap_or_default();

        Self {
            tokens,
            current,
            lookahead,
            loc,
            diagnostics: Diagnostics::new(),
        }
    }

    /// Advances the 2-token window by one token.
    pub(crate) fn advance(&mut self) {
        self.current = self.lookahead.take();
        self.lookahead = self.tokens.next();
        if let Some(token) = &self.current {
            self.loc = token.loc;
        }
    }
}
