/*
 * ==========================================================================
 * CLAUSE - Parse with Clause!
 * ==========================================================================
 *
 * End-to-end tests for the file pipeline: reading from disk, BOM
 * stripping, diagnostics ordering, and JSON round-tripping of the AST.
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

use std::fs;
use std::path::PathBuf;

use clause::ast::Ast;
use clause::diagnostics::DiagnosticItem;
use clause::files::{FileKind, ParadoxFile};
use clause::pathtable::PathTable;
use clause::pdxfile;

/// A unique scratch path for one test.
fn temp_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("clause-test-{}-{}", std::process::id(), name));
    path
}

fn parse_str(input: &str) -> (Ast, Vec<DiagnosticItem>) {
    let table = PathTable::new();
    let file = ParadoxFile::new("test/input.txt", FileKind::Mod);
    pdxfile::parse_bytes(&file, input.as_bytes(), &table)
}

#[test]
fn parses_a_file_from_disk() {
    let path = temp_path("basic.txt");
    fs::write(&path, "name = \"Bob\"\ntrigger = { a = yes }\n").unwrap();

    let table = PathTable::new();
    let file = ParadoxFile::new(&path, FileKind::Mod);
    let (ast, diagnostics) = pdxfile::parse_file(&file, &table).unwrap();

    assert!(diagnostics.is_empty(), "unexpected: {:?}", diagnostics);
    assert_eq!(ast.filename, path.file_name().unwrap().to_string_lossy());
    assert_eq!(ast.block.fields.len(), 2);
    assert_eq!(ast.block.get_field_value("name").unwrap().value, "Bob");

    fs::remove_file(&path).ok();
}

#[test]
fn a_utf8_bom_is_stripped_before_lexing() {
    let path = temp_path("bom.txt");
    let mut bytes = vec![0xEF, 0xBB, 0xBF];
    bytes.extend_from_slice(b"a = b\n");
    fs::write(&path, bytes).unwrap();

    let table = PathTable::new();
    let file = ParadoxFile::new(&path, FileKind::Mod);
    let (ast, diagnostics) = pdxfile::parse_file(&file, &table).unwrap();

    assert!(diagnostics.is_empty(), "unexpected: {:?}", diagnostics);
    assert_eq!(ast.block.get_field_value("a").unwrap().value, "b");

    fs::remove_file(&path).ok();
}

#[test]
fn an_unreadable_file_is_a_hard_error() {
    let table = PathTable::new();
    let file = ParadoxFile::new("definitely/not/here.txt", FileKind::Mod);
    let result = pdxfile::parse_file(&file, &table);
    assert!(result.is_err());
}

#[test]
fn one_table_serves_many_files() {
    let table = PathTable::new();

    let a = temp_path("table-a.txt");
    let b = temp_path("table-b.txt");
    fs::write(&a, "x = 1\n").unwrap();
    fs::write(&b, "y = 2\n").unwrap();

    let file_a = ParadoxFile::new(&a, FileKind::Vanilla);
    let file_b = ParadoxFile::new(&b, FileKind::Mod);
    let (ast_a, _) = pdxfile::parse_file(&file_a, &table).unwrap();
    let (ast_b, _) = pdxfile::parse_file(&file_b, &table).unwrap();

    let loc_a = ast_a.block.fields[0].key.loc;
    let loc_b = ast_b.block.fields[0].key.loc;
    assert!(!loc_a.same_file(&loc_b));
    assert_eq!(table.len(), 2);
    assert!(loc_a.pathname(&table).unwrap().ends_with("table-a.txt"));

    fs::remove_file(&a).ok();
    fs::remove_file(&b).ok();
}

#[test]
fn ast_json_round_trip_is_a_fixpoint() {
    let input = "\
trigger = { a = yes b = no }
color = { 255 38 38 }
name = \"Duke Bob\"
empty_block = { }
omitted =
after = done
";
    let (ast, diagnostics) = parse_str(input);
    assert!(diagnostics.is_empty(), "unexpected: {:?}", diagnostics);

    let first = serde_json::to_string(&ast).unwrap();
    let reparsed: Ast = serde_json::from_str(&first).unwrap();
    let second = serde_json::to_string(&reparsed).unwrap();

    assert_eq!(first, second);
    assert_eq!(reparsed.block.fields.len(), ast.block.fields.len());
    assert_eq!(
        reparsed.block.get_field_value("name").unwrap().value,
        "Duke Bob"
    );
}

#[test]
fn serialized_shape_matches_the_documented_envelope() {
    let (ast, _) = parse_str("a = 1\nlist = { x y }\n");
    let json = serde_json::to_value(&ast).unwrap();

    assert_eq!(json["filename"], "input.txt");
    assert_eq!(json["fullpath"], "test/input.txt");
    assert_eq!(json["data"]["fields"][0]["key"]["value"], "a");
    assert_eq!(json["data"]["fields"][0]["key"]["type"], "WORD");
    assert_eq!(json["data"]["fields"][0]["value"]["type"], "NUMBER");
    assert_eq!(
        json["data"]["fields"][1]["value"]["tokens"][1]["value"],
        "y"
    );
}
