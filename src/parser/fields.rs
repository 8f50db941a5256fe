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

use crate::ast::{BlockOrValue, EmptyValue, Field, FileBlock};
use crate::lexer::token::{Token, TokenKind};
use crate::parser::parser::Parser;
use crate::parser::recovery::{
    FIELD_LIST_RECOVERY, FIELD_RECOVERY, KEY_RECOVERY, LITERAL_RECOVERY, VALUE_RECOVERY,
};

impl Parser {
    /// Parses the entire token sequence into the file's root block.
    pub(crate) fn file_block(&mut self) -> FileBlock {
        if self.current.is_none() {
            // Empty file.
            return FileBlock::default();
        }
        let loc = self.loc;
        let fields = self.field_list(None);
        FileBlock::new(fields, loc)
    }

    /// Parses a list of fields until `stop` (or end of input).
    ///
    /// Line breaks between fields are insignificant and skipped. An
    /// unexpected token is reported and synchronized over; when
    /// synchronization runs out of input the list returns whatever it has
    /// accumulated so far.
    pub(crate) fn field_list(&mut self, stop: Option<TokenKind>) -> Vec<Field> {
        let mut fields = Vec::new();

        while let Some(token) = self.current.clone() {
            if stop == Some(token.kind) {
                break;
            }

            match token.kind {
                TokenKind::Nextline => self.skip_tokens(&[TokenKind::Nextline]),
                TokenKind::Word | TokenKind::Date | TokenKind::Number => {
                    if let Some(field) = self.field() {
                        fields.push(field);
                    }
                }
                _ => {
                    self.error_at_token(
                        &token,
                        format!(
                            "unexpected token {:?} of type {} in field list",
                            token.value, token.kind
                        ),
                    );
                    if self.synchronize(&FIELD_LIST_RECOVERY).is_none() {
                        return fields;
                    }
                }
            }
        }

        fields
    }

    /// Parses a single field.
    ///
    /// Returns `None` when any component failed; the caller drops the field
    /// rather than keeping a partial node.
    pub(crate) fn field(&mut self) -> Option<Field> {
        let token = self.current.clone()?;

        if token.kind.is_key() {
            return self.expression_node();
        }

        self.error_at_token(
            &token,
            format!(
                "unexpected token {:?} of type {} at start of field",
                token.value, token.kind
            ),
        );
        self.synchronize(&FIELD_RECOVERY);
        None
    }

    /// `Field := Key Operator Value` - each component in turn; the first
    /// miss abandons the field.
    fn expression_node(&mut self) -> Option<Field> {
        let key = self.key()?;
        let operator = self.operator()?;
        let value = self.value()?;

        Some(Field {
            key,
            operator,
            value,
        })
    }

    /// `Key := WORD | DATE | NUMBER`
    pub(crate) fn key(&mut self) -> Option<Token> {
        let Some(token) = self.current.clone() else {
            self.error_at_loc(self.loc, "expected a key, but reached end of input");
            return None;
        };

        if token.kind.is_key() {
            return self.expect(&[TokenKind::Word, TokenKind::Date, TokenKind::Number]);
        }

        self.error_at_token(
            &token,
            format!(
                "expected a key (WORD, DATE, or NUMBER), but found {:?} of type {}",
                token.value, token.kind
            ),
        );
        self.synchronize(&KEY_RECOVERY);
        None
    }

    /// `Operator := EQUALS | QUESTION_EQUALS | COMPARISON`
    pub(crate) fn operator(&mut self) -> Option<Token> {
        let Some(token) = self.current.clone() else {
            self.error_at_loc(self.loc, "expected an operator, but reached end of input");
            return None;
        };

        if token.kind.is_operator() {
            return self.expect(&[token.kind]);
        }

        self.error_at_token(
            &token,
            format!(
                "expected an operator, but found {:?} of type {}",
                token.value, token.kind
            ),
        );
        self.synchronize(&VALUE_RECOVERY);
        None
    }

    /// `Value := Literal | Block | EmptyValue`
    ///
    /// A line break directly after the operator means the value was
    /// intentionally omitted.
    pub(crate) fn value(&mut self) -> Option<BlockOrValue> {
        let Some(token) = self.current.clone() else {
            self.error_at_loc(self.loc, "expected a value, but reached end of input");
            return None;
        };

        match token.kind {
            TokenKind::Nextline => {
                self.expect(&[TokenKind::Nextline]);
                Some(BlockOrValue::Empty(EmptyValue { loc: self.loc }))
            }
            TokenKind::Start => self.block(),
            kind if kind.is_literal() => self.literal().map(BlockOrValue::Token),
            _ => {
                self.error_at_token(
                    &token,
                    format!(
                        "unexpected token {:?} of type {} in value position",
                        token.value, token.kind
                    ),
                );
                self.synchronize(&VALUE_RECOVERY);
                None
            }
        }
    }

    /// `Literal := WORD | NUMBER | BOOL | DATE | QUOTED_STRING`
    ///
    /// Quoted strings are unescaped on the way through. After a failed
    /// match the parser synchronizes and, when the landing token is itself
    /// literal-shaped, retries from there.
    pub(crate) fn literal(&mut self) -> Option<Token> {
        let Some(token) = self.current.clone() else {
            self.error_at_loc(self.loc, "expected a literal, but reached end of input");
            return None;
        };

        match token.kind {
            TokenKind::QuotedString => return self.unquote_expect(TokenKind::QuotedString),
            kind if kind.is_literal() => return self.expect(&[kind]),
            _ => self.error_at_token(
                &token,
                format!(
                    "unexpected token {:?} of type {} in literal position",
                    token.value, token.kind
                ),
            ),
        }

        if let Some(found) = self.synchronize(&LITERAL_RECOVERY) {
            if found.kind.is_literal() {
                return self.literal();
            }
            // Recovery landed on something no literal can start with.
            self.error_at_token(
                &found,
                format!(
                    "recovered to non-literal token {:?} of type {}",
                    found.value, found.kind
                ),
            );
        }
        None
    }
}
