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

use std::path::Path;

use crate::error::ClauseError;
use crate::files::{FileKind, ParadoxFile};
use crate::pathtable::{PathIndex, PathTable};

/// A source location: an interned file plus a 1-based line and column.
///
/// `Loc` is attached to every token and every diagnostic. It holds a
/// `PathIndex` rather than the path string, so locations stay small and
/// "same file" is an index comparison. Resolving back to a path string goes
/// through the `PathTable` the index was allocated from and is fallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Loc {
    idx: PathIndex,
    /// 1-based line number.
    pub line: u32,
    /// 1-based column number.
    pub column: u16,
    kind: FileKind,
}

impl Loc {
    pub(crate) fn new(idx: PathIndex, line: u32, column: u16, kind: FileKind) -> Self {
        Self {
            idx,
            line,
            column,
            kind,
        }
    }

    /// Location at the start (line 1, column 1) of `file`, interning its
    /// path in `table`.
    pub fn from_file(file: &ParadoxFile, table: &PathTable) -> Self {
        Self {
            idx: file.store_in_path_table(table),
            line: 1,
            column: 1,
            kind: file.kind(),
        }
    }

    /// Index of this location's file in the path table.
    pub fn idx(&self) -> PathIndex {
        self.idx
    }

    /// Whether this location points into vanilla or mod content.
    pub fn file_kind(&self) -> FileKind {
        self.kind
    }

    /// Two locations are in the same file iff their path indices are equal.
    pub fn same_file(&self, other: &Loc) -> bool {
        self.idx == other.idx
    }

    /// Base name of the file this location points into.
    pub fn filename(&self, table: &PathTable) -> Result<String, ClauseError> {
        let path = table.lookup_fullpath(self.idx)?;
        Ok(Path::new(&path)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or(path))
    }

    /// The full path this location's file was stored under.
    pub fn pathname(&self, table: &PathTable) -> Result<String, ClauseError> {
        table.lookup_fullpath(self.idx)
    }

    /// `path:line:column` form used when pointing a reader at a spot.
    pub fn fullpath(&self, table: &PathTable) -> Result<String, ClauseError> {
        let path = table.lookup_fullpath(self.idx)?;
        Ok(format!("{}:{}:{}", path, self.line, self.column))
    }
}

impl Default for Loc {
    fn default() -> Self {
        Self {
            idx: PathIndex::default(),
            line: 1,
            column: 1,
            kind: FileKind::Vanilla,
        }
    }
}
