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

use crate::ast::{BlockOrValue, FieldBlock, TokenBlock};
use crate::lexer::token::{Token, TokenKind};
use crate::loc::Loc;
use crate::parser::parser::Parser;
use crate::parser::recovery::{BLOCK_RECOVERY, TOKEN_LIST_RECOVERY};

impl Parser {
    /// `Block := START (END | (FieldList | TokenList) END)`
    ///
    /// The field-vs-token shape is decided ONCE, from the first non-empty
    /// element, and the rest of the block is committed to it. An empty
    /// `{ }` is always an empty field block.
    pub(crate) fn block(&mut self) -> Option<BlockOrValue> {
        self.expect(&[TokenKind::Start]);
        let loc = self.loc;

        if self.current_is(TokenKind::End) {
            self.expect(&[TokenKind::End]);
            return Some(BlockOrValue::FieldBlock(FieldBlock::new(Vec::new(), loc)));
        }

        let mut block = None;
        while let Some(token) = self.current.clone() {
            if token.kind == TokenKind::End {
                break;
            }

            match token.kind {
                TokenKind::Nextline => {
                    self.skip_tokens(&[TokenKind::Nextline]);
                    continue;
                }
                TokenKind::Word
                | TokenKind::Date
                | TokenKind::Number
                | TokenKind::Bool
                | TokenKind::QuotedString => {
                    block = if self.is_next_field() {
                        Some(BlockOrValue::FieldBlock(self.field_block(loc)))
                    } else {
                        Some(BlockOrValue::TokenBlock(self.token_block()))
                    };
                }
                _ => {
                    self.error_at_token(
                        &token,
                        format!(
                            "unexpected token {:?} of type {} in block",
                            token.value, token.kind
                        ),
                    );
                    self.synchronize(&BLOCK_RECOVERY);
                    continue;
                }
            }

            // Shape decided and parsed; nothing more to do here.
            break;
        }

        self.expect(&[TokenKind::End]);
        block
    }

    /// Parses the fields of a block committed to the field shape.
    pub(crate) fn field_block(&mut self, loc: Loc) -> FieldBlock {
        let fields = self.field_list(Some(TokenKind::End));
        FieldBlock::new(fields, loc)
    }

    /// Parses the literals of a block committed to the bare-token shape.
    pub(crate) fn token_block(&mut self) -> TokenBlock {
        TokenBlock {
            tokens: self.token_list(Some(TokenKind::End)),
        }
    }

    /// Parses a list of bare literals until `stop` (or end of input).
    pub(crate) fn token_list(&mut self, stop: Option<TokenKind>) -> Vec<Token> {
        let mut tokens = Vec::new();

        while let Some(token) = self.current.clone() {
            if stop == Some(token.kind) {
                break;
            }

            match token.kind {
                TokenKind::Nextline => {
                    self.expect(&[TokenKind::Nextline]);
                }
                kind if kind.is_literal() => {
                    if let Some(literal) = self.literal() {
                        tokens.push(literal);
                    }
                }
                _ => {
                    self.error_at_token(
                        &token,
                        format!(
                            "unexpected token {:?} of type {} in token list",
                            token.value, token.kind
                        ),
                    );
                    if self.synchronize(&TOKEN_LIST_RECOVERY).is_none() {
                        return tokens;
                    }
                }
            }
        }

        tokens
    }
}
