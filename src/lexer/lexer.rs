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

use crate::diagnostics::{DiagnosticItem, Diagnostics, Severity};
use crate::files::{FileKind, ParadoxFile};
use crate::lexer::patterns;
use crate::lexer::token::{Token, TokenKind};
use crate::loc::Loc;
use crate::pathtable::{PathIndex, PathTable};

/// Tab width used for column accounting.
const TAB_WIDTH: u16 = 4;

/// The CLAUSE lexer: converts normalized text into a flat token sequence.
///
/// The scanner keeps a byte cursor plus a 1-based line and column. Column
/// accounting: a tab advances the column by `TAB_WIDTH`, a space by 1, a
/// matched token by its matched byte length; NEXTLINE tokens are stamped
/// with the position of the new line's start, everything else with the
/// position where its match began. Columns saturate rather than wrap on
/// pathologically long lines. None of this affects tree shape, only the
/// positions diagnostics point at.
pub struct Lexer {
    text: String,
    cursor: usize,
    line: u32,
    column: u16,
    idx: PathIndex,
    kind: FileKind,
    diagnostics: Diagnostics,
}

/// Tokenizes the entire content of one file.
///
/// Returns the complete ordered token sequence together with the
/// diagnostics raised during scanning. Scanning never fails: an
/// unrecognized character produces a Critical diagnostic and the scanner
/// moves past it.
pub fn scan(
    file: &ParadoxFile,
    content: &[u8],
    table: &PathTable,
) -> (Vec<Token>, Vec<DiagnosticItem>) {
    let mut lexer = Lexer::new(file, content, table);
    let mut tokens = Vec::new();

    while lexer.has_more() {
        if let Some(token) = lexer.next_token() {
            tokens.push(token);
        }
    }

    (tokens, lexer.diagnostics.into_items())
}

impl Lexer {
    /// Creates a lexer over `content`, interning the file's path so every
    /// token location can refer to it by index.
    pub fn new(file: &ParadoxFile, content: &[u8], table: &PathTable) -> Self {
        Self {
            text: normalize_text(content),
            cursor: 0,
            line: 1,
            column: 1,
            idx: file.store_in_path_table(table),
            kind: file.kind(),
            diagnostics: Diagnostics::new(),
        }
    }

    fn has_more(&self) -> bool {
        self.cursor < self.text.len()
    }

    /// The unconsumed tail of the input.
    fn remainder(&self) -> &str {
        &self.text[self.cursor..]
    }

    /// Scans one match from the input.
    ///
    /// Returns `None` for the structural matches that yield no token
    /// (whitespace, tabs, comments) and for unrecognized characters, which
    /// are reported and skipped.
    fn next_token(&mut self) -> Option<Token> {
        let (start_line, start_column) = (self.line, self.column);

        let matched = patterns::match_next(self.remainder())
            .map(|(kind, text)| (kind, text.to_string()));
        let Some((kind, value)) = matched else {
            self.report_unexpected_char();
            return None;
        };
        self.cursor += value.len();

        match kind {
            TokenKind::Tab => {
                self.column = self.column.saturating_add(TAB_WIDTH);
                None
            }
            TokenKind::Whitespace => {
                self.column = self.column.saturating_add(1);
                None
            }
            TokenKind::Comment => None,
            TokenKind::Nextline => {
                self.line += 1;
                self.column = 1;
                let loc = self.loc_at(self.line, self.column);
                Some(Token::new(value, kind, loc))
            }
            _ => {
                let loc = self.loc_at(start_line, start_column);
                let width = u16::try_from(value.len()).unwrap_or(u16::MAX);
                self.column = self.column.saturating_add(width);
                Some(Token::new(value, kind, loc))
            }
        }
    }

    /// Reports the character no pattern recognized, then steps over it.
    fn report_unexpected_char(&mut self) {
        let Some(ch) = self.remainder().chars().next() else {
            return;
        };

        let loc = self.loc_at(self.line, self.column);
        self.diagnostics.push(DiagnosticItem::from_loc(
            loc,
            Severity::Critical,
            format!("unexpected token '{}'", ch),
        ));

        // Forced progress: without this an unrecognized character would
        // stall the scan loop forever.
        self.cursor += ch.len_utf8();
        self.column = self.column.saturating_add(1);
    }

    fn loc_at(&self, line: u32, column: u16) -> Loc {
        Loc::new(self.idx, line, column, self.kind)
    }
}

/// Decodes the raw bytes (lossily, so invalid UTF-8 degrades to replacement
/// characters instead of failing) and normalizes CRLF line endings to LF.
fn normalize_text(content: &[u8]) -> String {
    String::from_utf8_lossy(content).replace("\r\n", "\n")
}
