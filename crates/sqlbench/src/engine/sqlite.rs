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

//! Bundled SQLite engine.

use super::{Engine, Row, Rows, Value};
use crate::error::EngineError;
use rusqlite::types::Value as SqlValue;
use rusqlite::{params_from_iter, Connection};

/// In-memory SQLite connection backed by the library linked into this binary.
pub struct SqliteEngine {
    conn: Connection,
}

impl SqliteEngine {
    /// Opens a fresh in-memory database.
    pub fn open() -> Result<Self, EngineError> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Version of the linked SQLite library, e.g. `3.46.0`.
    pub fn library_version() -> &'static str {
        rusqlite::version()
    }
}

impl Engine for SqliteEngine {
    fn execute(&mut self, sql: &str, params: &[Value]) -> Result<Rows, EngineError> {
        let mut stmt = self.conn.prepare(sql)?;
        let columns = stmt.column_count();
        let bound: Vec<SqlValue> = params.iter().map(to_sql_value).collect();

        let mut rows = stmt.query(params_from_iter(bound.iter()))?;
        let mut out = Rows::new();
        while let Some(row) = rows.next()? {
            let mut values: Row = Vec::with_capacity(columns);
            for idx in 0..columns {
                values.push(from_sql_value(row.get::<_, SqlValue>(idx)?));
            }
            out.push(values);
        }
        Ok(out)
    }
}

fn to_sql_value(value: &Value) -> SqlValue {
    match value {
        Value::Null => SqlValue::Null,
        Value::Integer(v) => SqlValue::Integer(*v),
        Value::Real(v) => SqlValue::Real(*v),
        Value::Text(v) => SqlValue::Text(v.clone()),
    }
}

fn from_sql_value(value: SqlValue) -> Value {
    match value {
        SqlValue::Null => Value::Null,
        SqlValue::Integer(v) => Value::Integer(v),
        SqlValue::Real(v) => Value::Real(v),
        SqlValue::Text(v) => Value::Text(v),
        SqlValue::Blob(bytes) => Value::Text(String::from_utf8_lossy(&bytes).into_owned()),
    }
}
