// Dweve SQLBench - Release-History SQL Engine Benchmarks
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The engine boundary.
//!
//! An engine is anything that can execute one SQL statement with optional
//! positional parameters. The harness never looks past this trait, so a
//! bundled library, an external shell binary and a test stub are all
//! interchangeable.
//!
//! # Modules
//!
//! - `params`: inlining positional parameters as SQL literals
//! - `shell`: engines driven through an external `sqlite3`-compatible shell
//! - `sqlite`: the bundled SQLite library (feature `sqlite`)

pub mod params;
pub mod shell;
#[cfg(feature = "sqlite")]
pub mod sqlite;

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use params::inline_params;
pub use shell::ShellEngine;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteEngine;

/// A scalar passed to or returned from an engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// SQL NULL.
    Null,
    /// 64-bit integer.
    Integer(i64),
    /// Double precision float.
    Real(f64),
    /// UTF-8 text.
    Text(String),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Integer(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Real(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Integer(v) => write!(f, "{}", v),
            Value::Real(v) => write!(f, "{}", v),
            Value::Text(v) => write!(f, "{}", v),
        }
    }
}

/// One result row.
pub type Row = Vec<Value>;

/// The rows a statement produced. Empty for DDL and DML.
pub type Rows = Vec<Row>;

/// An opaque SQL-executing backend under test.
///
/// `execute` is the only capability the harness relies on: no schema
/// introspection, no transactions. Implementations take `&mut self` because
/// some of them own an external process.
pub trait Engine {
    /// Executes a single statement, substituting `?` placeholders with
    /// `params` in order.
    fn execute(&mut self, sql: &str, params: &[Value]) -> Result<Rows, EngineError>;
}

impl<E: Engine + ?Sized> Engine for Box<E> {
    fn execute(&mut self, sql: &str, params: &[Value]) -> Result<Rows, EngineError> {
        (**self).execute(sql, params)
    }
}
