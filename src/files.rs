/*
 * ==========================================================================
 * CLAUSE - Parse with Clause!
 * ==========================================================================
 *
 * File:     files.rs
 * Purpose:  Descriptors for the Paradox script files fed to the pipeline,
 *           and the raw reader that hands their bytes to the lexer.
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

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ClauseError;
use crate::pathtable::{PathIndex, PathTable};

/// UTF-8 byte-order mark.
const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Whether a script file belongs to the base game or to a mod.
///
/// The distinction never changes how a file is parsed; it travels with every
/// location so downstream consumers can tell the two apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Base-game content.
    Vanilla,
    /// Mod content.
    Mod,
}

/// Descriptor of one Paradox script file.
///
/// A `ParadoxFile` is a plain value: a full path plus a `FileKind`. It does
/// not hold an open handle and constructing one touches nothing on disk;
/// only `read` performs I/O.
#[derive(Debug, Clone)]
pub struct ParadoxFile {
    fullpath: PathBuf,
    kind: FileKind,
}

impl ParadoxFile {
    pub fn new(fullpath: impl Into<PathBuf>, kind: FileKind) -> Self {
        Self {
            fullpath: fullpath.into(),
            kind,
        }
    }

    /// Full filesystem path.
    pub fn full_path(&self) -> &Path {
        &self.fullpath
    }

    /// Base name of the file.
    pub fn file_name(&self) -> String {
        self.fullpath
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.fullpath.to_string_lossy().into_owned())
    }

    /// Vanilla or mod.
    pub fn kind(&self) -> FileKind {
        self.kind
    }

    /// Interns this file's path, returning its stable index.
    pub fn store_in_path_table(&self, table: &PathTable) -> PathIndex {
        table.store(&self.fullpath.to_string_lossy())
    }

    /// Reads the raw bytes of this file, stripping a UTF-8 BOM if present.
    ///
    /// I/O failure here is the only fatal error in the whole pipeline; it is
    /// surfaced to the caller before any lexing begins.
    pub fn read(&self) -> Result<Vec<u8>, ClauseError> {
        let content = fs::read(&self.fullpath).map_err(|e| ClauseError::io(&self.fullpath, e))?;
        Ok(strip_utf8_bom(content))
    }
}

/// Removes the UTF-8 BOM from the front of `content` when present.
pub fn strip_utf8_bom(mut content: Vec<u8>) -> Vec<u8> {
    if content.starts_with(&UTF8_BOM) {
        content.drain(..UTF8_BOM.len());
    }
    content
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_a_leading_bom() {
        let mut bytes = UTF8_BOM.to_vec();
        bytes.extend_from_slice(b"a = b");
        assert_eq!(strip_utf8_bom(bytes), b"a = b");
    }

    #[test]
    fn leaves_bomless_content_alone() {
        assert_eq!(strip_utf8_bom(b"a = b".to_vec()), b"a = b");
    }

    #[test]
    fn a_bom_alone_strips_to_nothing() {
        assert_eq!(strip_utf8_bom(UTF8_BOM.to_vec()), Vec::<u8>::new());
    }

    #[test]
    fn file_name_is_the_base_name() {
        let file = ParadoxFile::new("common/traits/00_traits.txt", FileKind::Mod);
        assert_eq!(file.file_name(), "00_traits.txt");
    }

    #[test]
    fn reading_a_missing_file_is_fatal() {
        let file = ParadoxFile::new("definitely/not/here.txt", FileKind::Mod);
        assert!(file.read().is_err());
    }
}
