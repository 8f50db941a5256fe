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

use crate::diagnostics::{DiagnosticItem, Severity};
use crate::lexer::token::{Token, TokenKind};
use crate::loc::Loc;
use crate::parser::parser::Parser;
use crate::parser::recovery::RecoveryPoint;

impl Parser {
    /// True when the current token exists and is of `kind`.
    pub(crate) fn current_is(&self, kind: TokenKind) -> bool {
        self.current.as_ref().is_some_and(|t| t.kind == kind)
    }

    /// The field/bare-token disambiguation at the heart of the grammar:
    /// a key-shaped current token followed by an operator-shaped lookahead
    /// means the upcoming construct is a field.
    ///
    /// This is what separates `trigger = { flag = yes }` (a field block)
    /// from `color = { 255 255 255 }` (a token block).
    pub(crate) fn is_next_field(&self) -> bool {
        self.current.as_ref().is_some_and(|t| t.kind.is_key())
            && self.lookahead.as_ref().is_some_and(|t| t.kind.is_operator())
    }

    /// Consumes every leading token whose kind is in `kinds`.
    pub(crate) fn skip_tokens(&mut self, kinds: &[TokenKind]) {
        while self
            .current
            .as_ref()
            .is_some_and(|t| kinds.contains(&t.kind))
        {
            self.advance();
        }
    }

    /// Verifies that the current token matches one of the expected kinds;
    /// on a match the token is consumed and returned.
    ///
    /// On a mismatch an Error diagnostic is recorded and the parser
    /// synchronizes on the expected kinds themselves; when synchronization
    /// lands on one of them the retry succeeds on the spot (the landing
    /// token is consumed and returned), otherwise the expectation failed
    /// and `None` comes back.
    pub(crate) fn expect(&mut self, expected: &[TokenKind]) -> Option<Token> {
        let Some(token) = self.current.clone() else {
            self.error_at_loc(
                self.loc,
                format!(
                    "expected {}, but reached end of input",
                    format_token_kinds(expected)
                ),
            );
            return None;
        };

        if expected.contains(&token.kind) {
            self.advance();
            return Some(token);
        }

        self.error_at_token(
            &token,
            format!(
                "unexpected token {:?} of type {}, expected {}",
                token.value,
                token.kind,
                format_token_kinds(expected)
            ),
        );

        let point = RecoveryPoint { kinds: expected };
        if let Some(found) = self.synchronize(&point) {
            self.advance();
            return Some(found);
        }
        None
    }

    /// Expects a quoted string and unescapes it.
    ///
    /// When unescaping fails the raw quoted text is kept as the value and a
    /// diagnostic is raised - a bad escape never costs the caller the whole
    /// field.
    pub(crate) fn unquote_expect(&mut self, kind: TokenKind) -> Option<Token> {
        let mut token = self.expect(&[kind])?;

        match unquote(&token.value) {
            Ok(unquoted) => {
                token.value = unquoted;
                Some(token)
            }
            Err(_) => {
                self.diagnostics.push(DiagnosticItem::from_token(
                    &token,
                    Severity::Error,
                    format!("failed to unquote string {}", token.value),
                ));
                Some(token)
            }
        }
    }

    /// Records an Error diagnostic spanning `token`.
    pub(crate) fn error_at_token(&mut self, token: &Token, message: impl Into<String>) {
        self.diagnostics
            .push(DiagnosticItem::from_token(token, Severity::Error, message));
    }

    /// Records an Error diagnostic at a bare location (used at end of
    /// input, when there is no token left to point at).
    pub(crate) fn error_at_loc(&mut self, loc: Loc, message: impl Into<String>) {
        self.diagnostics
            .push(DiagnosticItem::from_loc(loc, Severity::Error, message));
    }
}

/// Error from `unquote`: missing surrounding quotes or an unsupported
/// escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct UnquoteError;

/// Strips the surrounding double quotes and processes backslash escapes
/// (`\"`, `\\`, `\n`, `\t`, `\r`).
pub(crate) fn unquote(quoted: &str) -> Result<String, UnquoteError> {
    let inner = quoted
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .ok_or(UnquoteError)?;

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            _ => return Err(UnquoteError),
        }
    }
    Ok(out)
}

/// Formats a list of token kinds into a human-readable enumeration:
/// `"A"`, `"A" or "B"`, `"A", "B", or "C"`.
pub(crate) fn format_token_kinds(kinds: &[TokenKind]) -> String {
    let parts: Vec<String> = kinds.iter().map(|k| format!("\"{}\"", k)).collect();
    match parts.len() {
        0 => "no token kinds specified".to_string(),
        1 => parts[0].clone(),
        2 => format!("{} or {}", parts[0], parts[1]),
        _ => format!(
            "{}, or {}",
            parts[..parts.len() - 1].join(", "),
            parts[parts.len() - 1]
        ),
    }
}
