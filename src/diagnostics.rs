/*
 * ==========================================================================
 * CLAUSE - Parse with Clause!
 * ==========================================================================
 *
 * File:     diagnostics.rs
 * Purpose:  The diagnostic model shared by the lexer and the parser, and
 *           the console renderer used by the command line.
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

use std::fmt;

use crate::lexer::token::Token;
use crate::loc::Loc;

/// How serious a diagnostic is.
///
/// The core never decides that a severity is fatal; it records and moves
/// on. Callers pick their own threshold (the CLI fails the run on Error and
/// above).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Warning,
    /// A malformed construct the parser recovered from.
    Error,
    /// Input the lexer could not classify at all.
    Critical,
}

impl Severity {
    /// Lowercase label used in rendered output.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Points a diagnostic at its source: a location plus the byte length of
/// the offending span (zero when no token was available).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagnosticPointer {
    pub loc: Loc,
    pub length: usize,
}

/// One severity-tagged, location-tagged message.
///
/// Both the lexer and the parser accumulate these instead of aborting; a
/// parse session exposes them as an ordered list (lexer diagnostics first,
/// then parser diagnostics, each in encounter order).
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticItem {
    pub severity: Severity,
    pub message: String,
    pub pointer: DiagnosticPointer,
}

impl DiagnosticItem {
    /// Diagnostic spanning a whole token.
    pub fn from_token(token: &Token, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            pointer: DiagnosticPointer {
                loc: token.loc,
                length: token.value.len(),
            },
        }
    }

    /// Diagnostic at a bare location, when no token is available (the lexer
    /// reports this way).
    pub fn from_loc(loc: Loc, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            pointer: DiagnosticPointer { loc, length: 0 },
        }
    }

    /// Where this diagnostic points.
    pub fn loc(&self) -> Loc {
        self.pointer.loc
    }

    /// Byte length of the offending span.
    pub fn span_length(&self) -> usize {
        self.pointer.length
    }
}

impl fmt::Display for DiagnosticItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// Accumulating diagnostic sink owned by one lexing or parsing session.
#[derive(Debug, Default)]
pub struct Diagnostics {
    items: Vec<DiagnosticItem>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one diagnostic, preserving encounter order.
    pub fn push(&mut self, item: DiagnosticItem) {
        self.items.push(item);
    }

    /// The diagnostics recorded so far, in order.
    pub fn items(&self) -> &[DiagnosticItem] {
        &self.items
    }

    /// Consumes the sink, yielding the ordered list.
    pub fn into_items(self) -> Vec<DiagnosticItem> {
        self.items
    }
}

/// Renders diagnostics in a compiler-style plain-text form.
///
/// The printer:
/// - formats the severity, message and `file:line:column` header
/// - displays the offending source line
/// - marks the column with a caret (`^`)
///
/// The output is intentionally colorless so it stays readable everywhere;
/// the core library never prints - only this renderer, driven by the
/// command line, writes to stderr.
pub struct DiagnosticPrinter {
    /// Full source text of the file the diagnostics point into.
    source: String,

    /// Name of the source file, used only for display.
    file_name: String,
}

impl DiagnosticPrinter {
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Formats one diagnostic: header line, source line, caret underline.
    ///
    /// # Output Example
    /// ```text
    /// error: unexpected token "=" of type EQUALS in value position
    ///   --> traits.txt:3:9
    ///    |
    ///  3 | brave = = yes
    ///    |         ^
    /// ```
    pub fn render(&self, item: &DiagnosticItem) -> String {
        let line = item.loc().line as usize;
        let column = item.loc().column as usize;

        let src_line = self
            .source
            .lines()
            .nth(line.saturating_sub(1))
            .unwrap_or("");
        // Tabs are shown at the same width the lexer counts them.
        let shown = src_line.replace('\t', "    ");

        let mut underline = String::new();
        for _ in 1..column {
            underline.push(' ');
        }
        underline.push('^');

        format!(
            "{}: {}\n  --> {}:{}:{}\n   |\n{:>3} | {}\n   | {}\n",
            item.severity, item.message, self.file_name, line, column, line, shown, underline
        )
    }

    /// Prints one diagnostic to stderr.
    pub fn print(&self, item: &DiagnosticItem) {
        eprint!("{}", self.render(item));
    }
}
