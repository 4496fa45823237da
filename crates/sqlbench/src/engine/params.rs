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

//! Positional parameter inlining for engines without a binding API.

use super::Value;
use crate::error::EngineError;

/// Replaces each `?` placeholder outside quoted text with the SQL literal for
/// the matching parameter.
///
/// Placeholders inside single-quoted strings, double-quoted identifiers and
/// `--` line comments are left alone. Text is quoted with embedded quotes
/// doubled, non-finite reals become `NULL`.
///
/// # Errors
///
/// Returns [`EngineError::ParameterMismatch`] when the number of placeholders
/// differs from `params.len()`.
pub fn inline_params(sql: &str, params: &[Value]) -> Result<String, EngineError> {
    let mut out = String::with_capacity(sql.len() + params.len() * 8);
    let mut chars = sql.chars().peekable();
    let mut next = 0usize;
    let mut quote: Option<char> = None;
    let mut in_comment = false;

    while let Some(c) = chars.next() {
        if in_comment {
            in_comment = c != '\n';
            out.push(c);
            continue;
        }
        match (quote, c) {
            (Some(q), _) if c == q => {
                quote = None;
                out.push(c);
            }
            (Some(_), _) => out.push(c),
            (None, '\'') | (None, '"') => {
                quote = Some(c);
                out.push(c);
            }
            (None, '-') if chars.peek() == Some(&'-') => {
                in_comment = true;
                out.push(c);
            }
            (None, '?') => {
                if let Some(param) = params.get(next) {
                    push_literal(&mut out, param);
                }
                next += 1;
            }
            (None, _) => out.push(c),
        }
    }

    if next != params.len() {
        return Err(EngineError::ParameterMismatch {
            expected: next,
            supplied: params.len(),
        });
    }
    Ok(out)
}

fn push_literal(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("NULL"),
        Value::Integer(v) => out.push_str(&v.to_string()),
        Value::Real(v) if v.is_finite() => out.push_str(&format!("{:?}", v)),
        Value::Real(_) => out.push_str("NULL"),
        Value::Text(s) => {
            out.push('\'');
            out.push_str(&s.replace('\'', "''"));
            out.push('\'');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_inline_mixed_params() {
        let sql = inline_params(
            "INSERT INTO users VALUES (?, ?, ?)",
            &[Value::from(1_i64), Value::from("John Smith"), Value::Null],
        )
        .unwrap();
        assert_eq!(sql, "INSERT INTO users VALUES (1, 'John Smith', NULL)");
    }

    #[test]
    fn test_inline_escapes_quotes() {
        let sql = inline_params("SELECT ?", &[Value::from("O'Brien")]).unwrap();
        assert_eq!(sql, "SELECT 'O''Brien'");
    }

    #[test]
    fn test_placeholders_in_literals_are_kept() {
        let sql = inline_params(
            "SELECT '?' AS q, \"a?\" FROM t WHERE x = ? -- why?\n",
            &[Value::from(5_i64)],
        )
        .unwrap();
        assert_eq!(sql, "SELECT '?' AS q, \"a?\" FROM t WHERE x = 5 -- why?\n");
    }

    #[test]
    fn test_reals_keep_a_decimal_point() {
        let sql = inline_params("SELECT ?, ?", &[Value::Real(2.0), Value::Real(f64::NAN)]).unwrap();
        assert_eq!(sql, "SELECT 2.0, NULL");
    }

    #[test]
    fn test_count_mismatch() {
        let err = inline_params("SELECT ?, ?", &[Value::Null]).unwrap_err();
        assert_eq!(
            err,
            EngineError::ParameterMismatch {
                expected: 2,
                supplied: 1
            }
        );

        let err = inline_params("SELECT 1", &[Value::Null]).unwrap_err();
        assert!(matches!(err, EngineError::ParameterMismatch { expected: 0, supplied: 1 }));
    }

    proptest! {
        #[test]
        fn prop_text_round_trips_through_literal(text in "[a-zA-Z' ]{0,30}") {
            let sql = inline_params("SELECT ?", &[Value::from(text.as_str())])
                .map_err(|e| TestCaseError::fail(e.to_string()))?;
            let literal = sql.trim_start_matches("SELECT ");
            prop_assert!(literal.starts_with('\'') && literal.ends_with('\''));
            let inner = &literal[1..literal.len() - 1];
            prop_assert_eq!(inner.replace("''", "'"), text);
        }

        #[test]
        fn prop_integer_placeholders_fill_in_order(values in prop::collection::vec(any::<i64>(), 0..8)) {
            let sql = vec!["?"; values.len()].join(",");
            let params: Vec<Value> = values.iter().copied().map(Value::from).collect();
            let inlined = inline_params(&sql, &params)
                .map_err(|e| TestCaseError::fail(e.to_string()))?;
            let expected = values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(",");
            prop_assert_eq!(inlined, expected);
        }
    }
}
