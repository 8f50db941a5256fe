/*
 * ==========================================================================
 * CLAUSE - Parse with Clause!
 * ==========================================================================
 *
 * Property-based tests: the lexer and parser are total. Whatever bytes come
 * in, scanning and parsing terminate without panicking, every location
 * stays 1-based, and well-shaped script fragments parse clean.
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

use proptest::prelude::*;

use clause::files::{FileKind, ParadoxFile};
use clause::lexer;
use clause::pathtable::PathTable;
use clause::pdxfile;

proptest! {
    #[test]
    fn scanning_any_input_terminates(input in ".*") {
        let table = PathTable::new();
        let file = ParadoxFile::new("prop/input.txt", FileKind::Mod);
        let (tokens, diagnostics) = lexer::scan(&file, input.as_bytes(), &table);

        for token in &tokens {
            prop_assert!(token.loc.line >= 1);
            prop_assert!(token.loc.column >= 1);
            prop_assert!(!token.value.is_empty());
        }
        for item in &diagnostics {
            prop_assert!(item.loc().line >= 1);
            prop_assert!(item.loc().column >= 1);
        }
    }

    #[test]
    fn parsing_any_input_terminates(input in ".*") {
        let table = PathTable::new();
        let file = ParadoxFile::new("prop/input.txt", FileKind::Mod);
        let (ast, diagnostics) = pdxfile::parse_bytes(&file, input.as_bytes(), &table);

        // A best-effort tree and its diagnostics always come back; nothing
        // here can panic or loop.
        for item in &diagnostics {
            prop_assert!(item.loc().line >= 1);
        }
        prop_assert_eq!(ast.filename.as_str(), "input.txt");
    }

    #[test]
    fn parsing_arbitrary_bytes_terminates(input in proptest::collection::vec(any::<u8>(), 0..512)) {
        let table = PathTable::new();
        let file = ParadoxFile::new("prop/bytes.txt", FileKind::Mod);
        let (_ast, _diagnostics) = pdxfile::parse_bytes(&file, &input, &table);
    }

    #[test]
    fn script_shaped_fields_parse_clean(
        key in "[a-z][a-z_]{0,7}",
        value in "[a-z][a-z0-9_]{0,7}",
    ) {
        // `yes`/`no` lex as BOOL, which cannot be a key.
        prop_assume!(key != "yes" && key != "no");

        let table = PathTable::new();
        let file = ParadoxFile::new("prop/field.txt", FileKind::Mod);
        let source = format!("{key} = {value}\n");
        let (ast, diagnostics) = pdxfile::parse_bytes(&file, source.as_bytes(), &table);

        prop_assert!(diagnostics.is_empty(), "diagnostics: {:?}", diagnostics);
        prop_assert_eq!(ast.block.fields.len(), 1);
        prop_assert_eq!(ast.block.fields[0].key.value.as_str(), key.as_str());
        prop_assert!(ast.block.get_field(&key).is_some());
    }
}
