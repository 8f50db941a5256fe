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

use serde::{Deserialize, Serialize};

use crate::ast::field::Field;
use crate::lexer::token::Token;
use crate::loc::Loc;

/// The value side of a field: a literal token, a nested block of one of the
/// two shapes, or nothing at all.
///
/// The set is closed and every consumer matches it exhaustively. A given
/// brace-delimited block is committed to ONE shape from its first non-empty
/// element: either a list of fields or a list of bare tokens, never a mix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlockOrValue {
    /// A bare literal value: `key = value`.
    Token(Token),

    /// `key = { inner = value ... }`
    FieldBlock(FieldBlock),

    /// `key = { value value ... }`
    TokenBlock(TokenBlock),

    /// The value was omitted: the operator was directly followed by a line
    /// break.
    ///
    /// Must stay the last variant: deserialization tries the variants in
    /// order, and `{}` may only mean "empty value" after the structured
    /// shapes have failed to match.
    Empty(EmptyValue),
}

impl BlockOrValue {
    /// The literal token, when this value is one.
    pub fn as_token(&self) -> Option<&Token> {
        match self {
            BlockOrValue::Token(token) => Some(token),
            _ => None,
        }
    }

    /// The nested field block, when this value is one.
    pub fn as_field_block(&self) -> Option<&FieldBlock> {
        match self {
            BlockOrValue::FieldBlock(block) => Some(block),
            _ => None,
        }
    }

    /// The nested token block, when this value is one.
    pub fn as_token_block(&self) -> Option<&TokenBlock> {
        match self {
            BlockOrValue::TokenBlock(block) => Some(block),
            _ => None,
        }
    }

    /// True when the value was omitted.
    pub fn is_empty_value(&self) -> bool {
        matches!(self, BlockOrValue::Empty(_))
    }
}

/// An ordered list of fields enclosed in braces - or the whole file.
///
/// An empty `{ }` block is always represented as an empty `FieldBlock`,
/// never as an empty `TokenBlock`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldBlock {
    pub fields: Vec<Field>,
    #[serde(skip)]
    pub loc: Loc,
}

/// The top-level block of a parsed file.
pub type FileBlock = FieldBlock;

impl FieldBlock {
    pub fn new(fields: Vec<Field>, loc: Loc) -> Self {
        Self { fields, loc }
    }

    /// First field with the given key.
    ///
    /// Lookups are first-match by key equality over insertion order; a
    /// missing key is `None`, never a default.
    pub fn get_field(&self, key: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.has_key(key))
    }

    /// Literal value of the first field with the given key.
    pub fn get_field_value(&self, key: &str) -> Option<&Token> {
        self.get_field(key)?.value.as_token()
    }

    /// Every field with the given key, in insertion order.
    pub fn get_fields(&self, key: &str) -> Vec<&Field> {
        self.fields.iter().filter(|field| field.has_key(key)).collect()
    }

    /// Literal values of every field with the given key.
    pub fn get_fields_values(&self, key: &str) -> Vec<&Token> {
        self.get_fields(key)
            .into_iter()
            .filter_map(|field| field.value.as_token())
            .collect()
    }

    /// Tokens of the first field under the key holding a token block.
    pub fn get_field_list(&self, key: &str) -> Option<&[Token]> {
        self.get_token_block(key).map(|block| block.tokens.as_slice())
    }

    /// Nested field block of the first field with the given key.
    pub fn get_field_block(&self, key: &str) -> Option<&FieldBlock> {
        self.get_field(key)?.value.as_field_block()
    }

    /// Token block of the first field with the given key.
    pub fn get_token_block(&self, key: &str) -> Option<&TokenBlock> {
        self.get_field(key)?.value.as_token_block()
    }
}

/// An ordered list of bare literal tokens enclosed in braces, with no keys
/// or operators: `{ 255 38 38 }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenBlock {
    pub tokens: Vec<Token>,
}

/// Marker for a field whose value was intentionally omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmptyValue {
    #[serde(skip)]
    pub loc: Loc,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::token::TokenKind;

    fn word(value: &str) -> Token {
        Token::new(value, TokenKind::Word, Loc::default())
    }

    fn equals() -> Token {
        Token::new("=", TokenKind::Equals, Loc::default())
    }

    fn scalar_field(key: &str, value: &str) -> Field {
        Field {
            key: word(key),
            operator: equals(),
            value: BlockOrValue::Token(word(value)),
        }
    }

    fn sample_block() -> FieldBlock {
        let nested = FieldBlock::new(vec![scalar_field("inner", "x")], Loc::default());
        let list = TokenBlock {
            tokens: vec![word("a"), word("b")],
        };
        FieldBlock::new(
            vec![
                scalar_field("name", "bob"),
                scalar_field("name", "alice"),
                Field {
                    key: word("trigger"),
                    operator: equals(),
                    value: BlockOrValue::FieldBlock(nested),
                },
                Field {
                    key: word("traits"),
                    operator: equals(),
                    value: BlockOrValue::TokenBlock(list),
                },
            ],
            Loc::default(),
        )
    }

    #[test]
    fn get_field_is_first_match_in_order() {
        let block = sample_block();
        let field = block.get_field("name").unwrap();
        assert_eq!(field.value.as_token().unwrap().value, "bob");
    }

    #[test]
    fn get_fields_returns_every_match_in_order() {
        let block = sample_block();
        let values = block.get_fields_values("name");
        let names: Vec<_> = values.iter().map(|t| t.value.as_str()).collect();
        assert_eq!(names, vec!["bob", "alice"]);
    }

    #[test]
    fn missing_keys_are_none_not_defaults() {
        let block = sample_block();
        assert!(block.get_field("nope").is_none());
        assert!(block.get_field_value("nope").is_none());
        assert!(block.get_field_block("nope").is_none());
        assert!(block.get_token_block("nope").is_none());
        assert!(block.get_fields("nope").is_empty());
    }

    #[test]
    fn block_accessors_respect_the_value_shape() {
        let block = sample_block();
        assert!(block.get_field_block("trigger").is_some());
        assert!(block.get_token_block("trigger").is_none());
        assert!(block.get_field_value("trigger").is_none());

        let list = block.get_field_list("traits").unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].value, "a");
    }
}
