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

use crate::ast::block::BlockOrValue;
use crate::lexer::token::Token;

/// A single `key operator value` triple.
///
/// A field exists only when all three components parsed; when any of them
/// fails, the parser drops the whole field from its parent's list instead of
/// building a partial node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub key: Token,
    pub operator: Token,
    pub value: BlockOrValue,
}

impl Field {
    /// True when this field's key text is exactly `key`.
    pub fn has_key(&self, key: &str) -> bool {
        self.key.value == key
    }
}
