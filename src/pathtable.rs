/*
 * ==========================================================================
 * CLAUSE - Parse with Clause!
 * ==========================================================================
 *
 * File:     pathtable.rs
 * Purpose:  Interning store mapping file paths to stable small indices.
 *           Every source location refers to its file through an index into
 *           this table instead of carrying the path string around.
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

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::ClauseError;

/// Stable index of an interned file path.
///
/// Indices are allocated in insertion order and are never reused or
/// invalidated; two locations point into the same file iff their indices are
/// equal, with no string comparison involved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PathIndex(u32);

impl PathIndex {
    /// Raw index value.
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

/// Append-only interning store for file paths.
///
/// The table is created once at program start and shared (by reference or
/// `Arc`) with every lexer and parser session for the life of the process.
/// Parsing sessions may run on worker threads, so `store` and lookups are
/// serialized internally; a caller never observes a partially inserted
/// entry, and two racing `store` calls for the same new path agree on a
/// single index.
///
/// There is no deletion operation and the table never shrinks.
#[derive(Debug, Default)]
pub struct PathTable {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    paths: Vec<String>,
    by_path: HashMap<String, PathIndex>,
}

impl PathTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns `path` and returns its index.
    ///
    /// Idempotent: storing a path that is already present returns the
    /// existing index. Deduplication is on exact string equality.
    pub fn store(&self, path: &str) -> PathIndex {
        if let Some(idx) = self.read().by_path.get(path) {
            return *idx;
        }

        let mut inner = self.write();
        // A racing store may have inserted between the two lock scopes.
        if let Some(idx) = inner.by_path.get(path) {
            return *idx;
        }

        let idx = PathIndex(inner.paths.len() as u32);
        inner.paths.push(path.to_string());
        inner.by_path.insert(path.to_string(), idx);
        idx
    }

    /// Resolves an index back to the full path it was stored under.
    pub fn lookup_fullpath(&self, idx: PathIndex) -> Result<String, ClauseError> {
        self.read()
            .paths
            .get(idx.0 as usize)
            .cloned()
            .ok_or(ClauseError::UnknownPath(idx))
    }

    /// Number of interned paths.
    pub fn len(&self) -> usize {
        self.read().paths.len()
    }

    /// True when nothing has been interned yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().expect("path table lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().expect("path table lock poisoned")
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn store_is_idempotent() {
        let table = PathTable::new();
        assert!(table.is_empty());
        let first = table.store("common/traits/00_traits.txt");
        let second = table.store("common/traits/00_traits.txt");
        assert_eq!(first, second);
        assert_eq!(table.len(), 1);
        assert!(!table.is_empty());
    }

    #[test]
    fn distinct_paths_get_distinct_indices() {
        let table = PathTable::new();
        let a = table.store("a.txt");
        let b = table.store("b.txt");
        assert_ne!(a, b);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn lookup_round_trips() {
        let table = PathTable::new();
        let idx = table.store("events/birth.txt");
        assert_eq!(table.lookup_fullpath(idx).unwrap(), "events/birth.txt");
    }

    #[test]
    fn lookup_of_foreign_index_fails() {
        let table = PathTable::new();
        table.store("only.txt");
        let foreign = PathIndex(99);
        assert!(table.lookup_fullpath(foreign).is_err());
    }

    #[test]
    fn concurrent_stores_agree_on_one_index_per_path() {
        let table = Arc::new(PathTable::new());
        let paths = ["a.txt", "b.txt", "c.txt", "d.txt"];

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let table = Arc::clone(&table);
                std::thread::spawn(move || {
                    paths.iter().map(|p| table.store(p)).collect::<Vec<_>>()
                })
            })
            .collect();

        let results: Vec<Vec<PathIndex>> =
            handles.into_iter().map(|h| h.join().unwrap()).collect();

        // Every thread saw the same index for the same path.
        for indices in &results {
            assert_eq!(indices, &results[0]);
        }
        assert_eq!(table.len(), paths.len());
        for (i, path) in paths.iter().enumerate() {
            assert_eq!(table.lookup_fullpath(results[0][i]).unwrap(), *path);
        }
    }
}
