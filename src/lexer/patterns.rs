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

use once_cell::sync::Lazy;
use regex::Regex;

use crate::lexer::token::TokenKind;

/// The token patterns, in match priority order.
///
/// The lexer tries these top to bottom against the start of the unconsumed
/// input; the first pattern that matches wins. Order carries the
/// disambiguation rules: keyword-shaped literals (`yes`/`no`, dates) come
/// before the generic WORD pattern, and the multi-character operators (`?=`,
/// `==`, `<=`, ...) come before the single `=`.
static TOKEN_PATTERNS: Lazy<Vec<(TokenKind, Regex)>> = Lazy::new(|| {
    [
        (TokenKind::Comment, r"^#[^\n]*"),
        (TokenKind::Nextline, r"^\n"),
        (TokenKind::Tab, r"^\t"),
        (TokenKind::Whitespace, r"^ "),
        (TokenKind::Bool, r"^(yes|no)\b"),
        (TokenKind::Date, r"^\d+\.\d+\.\d+"),
        (TokenKind::Number, r"^-?\d+(\.\d+)?"),
        (TokenKind::QuotedString, r#"^"[^"\n]*""#),
        (TokenKind::QuestionEquals, r"^\?="),
        (TokenKind::Comparison, r"^(==|<=|>=|!=|<|>)"),
        (TokenKind::Equals, r"^="),
        (TokenKind::Start, r"^\{"),
        (TokenKind::End, r"^\}"),
        (TokenKind::Word, r"^[\w.:'-]+"),
    ]
    .into_iter()
    .map(|(kind, pattern)| {
        let regex = Regex::new(pattern).expect("token pattern must compile");
        (kind, regex)
    })
    .collect()
});

/// Matches the start of `remaining` against the pattern table.
///
/// Returns the winning kind and the matched text, or `None` when no pattern
/// recognizes the next character.
pub(crate) fn match_next(remaining: &str) -> Option<(TokenKind, &str)> {
    for (kind, pattern) in TOKEN_PATTERNS.iter() {
        if let Some(m) = pattern.find(remaining) {
            return Some((*kind, m.as_str()));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_of(input: &str) -> Option<(TokenKind, &str)> {
        match_next(input)
    }

    #[test]
    fn multi_char_operators_win_over_equals() {
        assert_eq!(kind_of("?= x"), Some((TokenKind::QuestionEquals, "?=")));
        assert_eq!(kind_of("== x"), Some((TokenKind::Comparison, "==")));
        assert_eq!(kind_of(">= x"), Some((TokenKind::Comparison, ">=")));
        assert_eq!(kind_of("= x"), Some((TokenKind::Equals, "=")));
    }

    #[test]
    fn keyword_shaped_literals_win_over_word() {
        assert_eq!(kind_of("yes"), Some((TokenKind::Bool, "yes")));
        assert_eq!(kind_of("no more"), Some((TokenKind::Bool, "no")));
        assert_eq!(kind_of("1066.9.15"), Some((TokenKind::Date, "1066.9.15")));
        assert_eq!(kind_of("-0.5"), Some((TokenKind::Number, "-0.5")));
    }

    #[test]
    fn words_swallow_identifier_punctuation() {
        assert_eq!(kind_of("yes_man"), Some((TokenKind::Word, "yes_man")));
        assert_eq!(
            kind_of("scope:attacker "),
            Some((TokenKind::Word, "scope:attacker"))
        );
        assert_eq!(
            kind_of("rivalry.0001"),
            Some((TokenKind::Word, "rivalry.0001"))
        );
    }

    #[test]
    fn quoted_strings_stay_on_one_line() {
        assert_eq!(
            kind_of("\"hello world\" rest"),
            Some((TokenKind::QuotedString, "\"hello world\""))
        );
        // An unterminated quote matches nothing; the lexer reports it.
        assert_eq!(kind_of("\"unterminated"), None);
    }

    #[test]
    fn unknown_characters_match_nothing() {
        assert_eq!(kind_of("@"), None);
        assert_eq!(kind_of("$"), None);
    }
}
