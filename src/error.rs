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

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::pathtable::PathIndex;

/// The fatal errors of the CLAUSE front end.
///
/// Lexical and syntactic problems never surface here: they degrade to
/// `DiagnosticItem`s collected next to a best-effort tree. `ClauseError` is
/// reserved for the conditions that stop a parse before it can produce
/// anything at all.
#[derive(Debug)]
pub enum ClauseError {
    /// The input file could not be read from disk.
    Io {
        /// Path of the file that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A `PathIndex` did not resolve against the path table it was handed to.
    ///
    /// Happens only when an index is used against a table it was not
    /// allocated from.
    UnknownPath(PathIndex),
}

impl ClauseError {
    /// I/O failure while reading `path`.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ClauseError::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for ClauseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClauseError::Io { path, source } => {
                write!(f, "could not read file '{}': {}", path.display(), source)
            }
            ClauseError::UnknownPath(idx) => {
                write!(f, "path index {} is not present in the path table", idx.as_u32())
            }
        }
    }
}

impl std::error::Error for ClauseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClauseError::Io { source, .. } => Some(source),
            ClauseError::UnknownPath(_) => None,
        }
    }
}
