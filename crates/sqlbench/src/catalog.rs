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

//! The fixed, ordered battery of SQL workloads.
//!
//! Every [`TestCase`] is a setup/run/teardown triple over an [`Engine`].
//! `run` only reads, so the warm-up and every timed call execute the same
//! operation against the same data. `setup` tolerates leftovers from an
//! earlier case (`IF NOT EXISTS`, then `DELETE`) and `teardown` drops
//! everything setup created, so one engine handle can serve the whole list.

use crate::datasets::{generate_orders, generate_users, Order, User};
use crate::engine::{Engine, Rows, Value};
use crate::error::EngineError;

/// Setup or teardown step of a test case.
pub type PrepareFn = fn(&mut dyn Engine) -> Result<(), EngineError>;

/// Measured step of a test case.
pub type RunFn = fn(&mut dyn Engine) -> Result<Rows, EngineError>;

/// A named workload.
#[derive(Clone, Copy)]
pub struct TestCase {
    /// Display name, also the column/row key in reports.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Creates tables and loads data.
    pub setup: PrepareFn,
    /// The read-only operation being timed.
    pub run: RunFn,
    /// Drops every table setup created.
    pub teardown: PrepareFn,
}

impl std::fmt::Debug for TestCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestCase")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

const CREATE_USERS_BASIC: &str = "CREATE TABLE IF NOT EXISTS users (id INT, name TEXT, age INT)";
const CREATE_USERS_DEPARTMENT: &str =
    "CREATE TABLE IF NOT EXISTS users (id INT, name TEXT, age INT, department TEXT)";
const CREATE_USERS: &str =
    "CREATE TABLE IF NOT EXISTS users (id INT, name TEXT, age INT, department TEXT, salary REAL)";
const CREATE_ORDERS: &str =
    "CREATE TABLE IF NOT EXISTS orders (id INT, userId INT, product TEXT, amount REAL, date TEXT)";

const INSERT_3: &str = "INSERT INTO users VALUES (?, ?, ?)";
const INSERT_4: &str = "INSERT INTO users VALUES (?, ?, ?, ?)";
const INSERT_USER: &str = "INSERT INTO users VALUES (?, ?, ?, ?, ?)";
const INSERT_ORDER: &str = "INSERT INTO orders VALUES (?, ?, ?, ?, ?)";

/// Returns the workloads in their reporting order.
pub fn test_cases() -> Vec<TestCase> {
    vec![
        TestCase {
            name: "Simple SELECT (100 rows)",
            description: "Basic SELECT * query on a small dataset of 100 rows",
            setup: |db| {
                db.execute(CREATE_USERS_BASIC, &[])?;
                load_users(db, &generate_users(100), INSERT_3, User::basic_params)
            },
            run: |db| db.execute("SELECT * FROM users", &[]),
            teardown: drop_users,
        },
        TestCase {
            name: "WHERE Filtering (1000 rows)",
            description: "SELECT with WHERE clause filtering on a dataset of 1000 rows",
            setup: |db| {
                db.execute(CREATE_USERS_DEPARTMENT, &[])?;
                load_users(db, &generate_users(1_000), INSERT_4, User::department_params)
            },
            run: |db| {
                db.execute(
                    "SELECT * FROM users WHERE age > 30 AND department = ?",
                    &[Value::from("Engineering")],
                )
            },
            teardown: drop_users,
        },
        TestCase {
            name: "JOIN Operation (1000 users, 5000 orders)",
            description: "INNER JOIN between users and orders tables",
            setup: |db| load_users_and_orders(db, 1_000, 5_000),
            run: |db| {
                db.execute(
                    "SELECT u.name, o.product, o.amount FROM users u \
                     INNER JOIN orders o ON u.id = o.userId WHERE o.amount > 500",
                    &[],
                )
            },
            teardown: drop_users_and_orders,
        },
        TestCase {
            name: "GROUP BY with Aggregations",
            description: "GROUP BY with COUNT, SUM, and AVG aggregations",
            setup: |db| {
                db.execute(CREATE_USERS, &[])?;
                load_users(db, &generate_users(5_000), INSERT_USER, User::to_params)
            },
            run: |db| {
                db.execute(
                    "SELECT department, COUNT(*) AS cnt, SUM(salary) AS totalSalary, \
                     AVG(age) AS avgAge FROM users GROUP BY department",
                    &[],
                )
            },
            teardown: drop_users,
        },
        TestCase {
            name: "Subquery Operation",
            description: "SELECT with subquery for filtering",
            setup: |db| load_users_and_orders(db, 1_000, 3_000),
            run: |db| {
                db.execute(
                    "SELECT * FROM users WHERE id IN \
                     (SELECT userId FROM orders WHERE amount > 800)",
                    &[],
                )
            },
            teardown: drop_users_and_orders,
        },
        TestCase {
            name: "Complex Query (ORDER BY, LIMIT)",
            description: "Complex aggregation with ORDER BY and LIMIT on large dataset",
            setup: |db| load_users_and_orders(db, 2_000, 10_000),
            run: |db| {
                db.execute(
                    "SELECT u.department, u.name, COUNT(o.id) AS orderCount, \
                     SUM(o.amount) AS totalAmount \
                     FROM users u \
                     INNER JOIN orders o ON u.id = o.userId \
                     WHERE u.salary > 40000 \
                     GROUP BY u.department, u.name \
                     ORDER BY totalAmount DESC \
                     LIMIT 20",
                    &[],
                )
            },
            teardown: drop_users_and_orders,
        },
    ]
}

/// Keeps the cases whose name contains `needle`, ignoring case.
pub fn filter_cases(cases: Vec<TestCase>, needle: &str) -> Vec<TestCase> {
    let needle = needle.to_lowercase();
    cases
        .into_iter()
        .filter(|case| case.name.to_lowercase().contains(&needle))
        .collect()
}

fn load_users(
    db: &mut dyn Engine,
    users: &[User],
    insert: &str,
    params: fn(&User) -> Vec<Value>,
) -> Result<(), EngineError> {
    db.execute("DELETE FROM users", &[])?;
    for user in users {
        db.execute(insert, &params(user))?;
    }
    Ok(())
}

fn load_orders(db: &mut dyn Engine, orders: &[Order]) -> Result<(), EngineError> {
    db.execute("DELETE FROM orders", &[])?;
    for order in orders {
        db.execute(INSERT_ORDER, &order.to_params())?;
    }
    Ok(())
}

fn load_users_and_orders(
    db: &mut dyn Engine,
    users: usize,
    orders: usize,
) -> Result<(), EngineError> {
    db.execute(CREATE_USERS, &[])?;
    db.execute(CREATE_ORDERS, &[])?;
    load_users(db, &generate_users(users), INSERT_USER, User::to_params)?;
    load_orders(db, &generate_orders(orders, users))
}

fn drop_users(db: &mut dyn Engine) -> Result<(), EngineError> {
    db.execute("DROP TABLE IF EXISTS users", &[])?;
    Ok(())
}

fn drop_users_and_orders(db: &mut dyn Engine) -> Result<(), EngineError> {
    db.execute("DROP TABLE IF EXISTS users", &[])?;
    db.execute("DROP TABLE IF EXISTS orders", &[])?;
    Ok(())
}
