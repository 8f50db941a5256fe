/*
 * ==========================================================================
 * CLAUSE - Parse with Clause!
 * ==========================================================================
 *
 * File:      token.rs
 * Purpose:   Defines the lexical token types produced by the CLAUSE lexer
 *            and consumed by the parser.
 *
 * Authors:   The CLAUSE contributors
 * Github:    https://github.com/clause-lang/clause
 *
 * License:
 * This file is part of the CLAUSE project.
 *
 * CLAUSE is dual-licensed under the terms of:
 *   - The MIT License
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

use serde::{Deserialize, Serialize};

use crate::loc::Loc;

/// The category of a lexical token in Paradox script.
///
/// The set is closed: every byte of a script file is accounted for by one of
/// these kinds or by an unexpected-character diagnostic. WHITESPACE, TAB and
/// COMMENT are structural and never reach the parser; NEXTLINE does reach
/// it, because line boundaries are grammatically significant in a few spots
/// (an operator directly followed by a line break means "value omitted").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    /// A bare word: key or unquoted value.
    ///
    /// Examples: `culture`, `rivalry.0001`, `scope:attacker`
    Word,

    /// A numeric literal, integer or decimal, optionally negative.
    Number,

    /// A game date: `year.month.day`, e.g. `1066.9.15`.
    Date,

    /// The literals `yes` and `no`.
    Bool,

    /// A double-quoted string, kept verbatim (quotes included) by the lexer.
    QuotedString,

    /// `=`
    Equals,

    /// `?=`
    QuestionEquals,

    /// `==`, `!=`, `<`, `>`, `<=`, `>=`
    Comparison,

    /// `{`
    Start,

    /// `}`
    End,

    /// A line break.
    Nextline,

    /// A single space. Never emitted as a token.
    Whitespace,

    /// A tab. Never emitted as a token.
    Tab,

    /// `#` to end of line. Never emitted as a token.
    Comment,
}

impl TokenKind {
    /// Kinds that may appear in key position.
    pub fn is_key(self) -> bool {
        matches!(self, TokenKind::Word | TokenKind::Date | TokenKind::Number)
    }

    /// Kinds that may appear in operator position.
    pub fn is_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Equals | TokenKind::QuestionEquals | TokenKind::Comparison
        )
    }

    /// Kinds that may appear as a literal value.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::Word
                | TokenKind::Number
                | TokenKind::Bool
                | TokenKind::Date
                | TokenKind::QuotedString
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Word => "WORD",
            TokenKind::Number => "NUMBER",
            TokenKind::Date => "DATE",
            TokenKind::Bool => "BOOL",
            TokenKind::QuotedString => "QUOTED_STRING",
            TokenKind::Equals => "EQUALS",
            TokenKind::QuestionEquals => "QUESTION_EQUALS",
            TokenKind::Comparison => "COMPARISON",
            TokenKind::Start => "START",
            TokenKind::End => "END",
            TokenKind::Nextline => "NEXTLINE",
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::Tab => "TAB",
            TokenKind::Comment => "COMMENT",
        };
        write!(f, "{}", name)
    }
}

/// A single classified lexeme: the source text, its kind, and where it came
/// from.
///
/// Tokens are immutable once created (the one exception: the parser replaces
/// a quoted string's text with its unescaped form). The location serializes
/// to nothing; persisted tokens are just `{"value": ..., "type": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The exact source text that produced this token.
    pub value: String,

    /// The classified category of the token.
    #[serde(rename = "type")]
    pub kind: TokenKind,

    /// Where the token starts in its file.
    #[serde(skip)]
    pub loc: Loc,
}

impl Token {
    pub fn new(value: impl Into<String>, kind: TokenKind, loc: Loc) -> Self {
        Self {
            value: value.into(),
            kind,
            loc,
        }
    }

    /// True when the token is of `kind`.
    pub fn is_kind(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// True when the token's text is exactly `value`.
    pub fn is(&self, value: &str) -> bool {
        self.value == value
    }

    /// Numeric reading of the token text.
    pub fn float_value(&self) -> Result<f64, std::num::ParseFloatError> {
        self.value.parse()
    }
}

impl fmt::Display for Token {
    /// Prints only the token's lexeme, which is what error messages want.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_predicates_cover_the_grammar_sets() {
        assert!(TokenKind::Word.is_key());
        assert!(TokenKind::Date.is_key());
        assert!(TokenKind::Number.is_key());
        assert!(!TokenKind::QuotedString.is_key());

        assert!(TokenKind::Equals.is_operator());
        assert!(TokenKind::QuestionEquals.is_operator());
        assert!(TokenKind::Comparison.is_operator());
        assert!(!TokenKind::Start.is_operator());

        assert!(TokenKind::Bool.is_literal());
        assert!(TokenKind::QuotedString.is_literal());
        assert!(!TokenKind::End.is_literal());
    }

    #[test]
    fn serializes_value_and_type_only() {
        let token = Token::new("yes", TokenKind::Bool, Loc::default());
        let json = serde_json::to_value(&token).unwrap();
        assert_eq!(json, serde_json::json!({"value": "yes", "type": "BOOL"}));
    }

    #[test]
    fn value_and_kind_checks() {
        let token = Token::new("culture", TokenKind::Word, Loc::default());
        assert!(token.is_kind(TokenKind::Word));
        assert!(!token.is_kind(TokenKind::Bool));
        assert!(token.is("culture"));
        assert!(!token.is("religion"));
        assert_eq!(token.to_string(), "culture");
    }

    #[test]
    fn float_value_parses_numbers() {
        let token = Token::new("0.75", TokenKind::Number, Loc::default());
        assert_eq!(token.float_value().unwrap(), 0.75);
        let word = Token::new("abc", TokenKind::Word, Loc::default());
        assert!(word.float_value().is_err());
    }
}
