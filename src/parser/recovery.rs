/*
 * ==========================================================================
 * CLAUSE - Parse with Clause!
 * ==========================================================================
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

use crate::lexer::token::{Token, TokenKind};
use crate::parser::parser::Parser;

/// The set of token kinds a production scans for when it has to discard
/// malformed input.
///
/// Each production that can fail owns one of the named sets below, so the
/// "where may parsing resume" decision is data, not control flow buried in
/// the productions.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RecoveryPoint<'a> {
    pub kinds: &'a [TokenKind],
}

/// Field lists resume at a closing brace or the next key-shaped token.
pub(crate) const FIELD_LIST_RECOVERY: RecoveryPoint<'static> = RecoveryPoint {
    kinds: &[TokenKind::End, TokenKind::Word, TokenKind::Date],
};

/// A malformed field scans for the same points as its enclosing list.
pub(crate) const FIELD_RECOVERY: RecoveryPoint<'static> = RecoveryPoint {
    kinds: &[TokenKind::End, TokenKind::Word, TokenKind::Date],
};

/// Keys resume at any key-shaped token or a closing brace.
pub(crate) const KEY_RECOVERY: RecoveryPoint<'static> = RecoveryPoint {
    kinds: &[
        TokenKind::Word,
        TokenKind::Date,
        TokenKind::Number,
        TokenKind::End,
    ],
};

/// Operators and values resume at anything that can begin a value, a line
/// boundary, or a closing brace.
pub(crate) const VALUE_RECOVERY: RecoveryPoint<'static> = RecoveryPoint {
    kinds: &[
        TokenKind::Word,
        TokenKind::Number,
        TokenKind::Date,
        TokenKind::Bool,
        TokenKind::QuotedString,
        TokenKind::Start,
        TokenKind::Nextline,
        TokenKind::End,
    ],
};

/// Literals resume at another literal-shaped token or a closing brace.
pub(crate) const LITERAL_RECOVERY: RecoveryPoint<'static> = RecoveryPoint {
    kinds: &[
        TokenKind::Word,
        TokenKind::Number,
        TokenKind::Date,
        TokenKind::Bool,
        TokenKind::QuotedString,
        TokenKind::End,
    ],
};

/// Token lists resume at a closing brace or the next key-shaped token.
pub(crate) const TOKEN_LIST_RECOVERY: RecoveryPoint<'static> = RecoveryPoint {
    kinds: &[TokenKind::End, TokenKind::Word, TokenKind::Date],
};

/// Blocks resume at anything that can begin an element or close the block.
pub(crate) const BLOCK_RECOVERY: RecoveryPoint<'static> = RecoveryPoint {
    kinds: &[
        TokenKind::End,
        TokenKind::Word,
        TokenKind::Date,
        TokenKind::Number,
        TokenKind::QuotedString,
        TokenKind::Bool,
    ],
};

impl Parser {
    /// Synchronization: discards the offending token, then scans forward
    /// until a token whose kind is in the recovery set.
    ///
    /// Returns the landing token - still current, so the caller may retry
    /// its production from there - or `None` when end of input was reached
    /// first, which terminates the enclosing list production. At least one
    /// token is always consumed, so recovery is bounded by the remaining
    /// token count.
    pub(crate) fn synchronize(&mut self, point: &RecoveryPoint<'_>) -> Option<Token> {
        self.advance();
        while let Some(token) = self.current.clone() {
            if point.kinds.contains(&token.kind) {
                return Some(token);
            }
            self.advance();
        }
        None
    }
}
