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

//! Deterministic synthetic datasets for workloads.
//!
//! All generators are pure functions of their arguments: no randomness and
//! no I/O. The only wall-clock input is the calendar year used for order
//! dates, which [`generate_orders_in_year`] takes explicitly.

use crate::engine::Value;
use chrono::Datelike;
use serde::{Deserialize, Serialize};

const FIRST_NAMES: [&str; 8] = [
    "John", "Jane", "Bob", "Alice", "Charlie", "Diana", "Eve", "Frank",
];

const LAST_NAMES: [&str; 8] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
];

/// Departments users are assigned to, cyclically.
pub const DEPARTMENTS: [&str; 5] = ["Engineering", "Sales", "Marketing", "HR", "Finance"];

/// Products orders are placed for, cyclically.
pub const PRODUCTS: [&str; 8] = [
    "Laptop",
    "Phone",
    "Tablet",
    "Monitor",
    "Keyboard",
    "Mouse",
    "Headphones",
    "Camera",
];

/// A synthetic user row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Sequential id starting at 1.
    pub id: i64,
    /// First and last name drawn from fixed tables.
    pub name: String,
    /// Age in `[22, 64]`.
    pub age: i64,
    /// One of [`DEPARTMENTS`].
    pub department: String,
    /// Salary in `[30000, 99500]`.
    pub salary: i64,
}

impl User {
    /// `(id, name, age)` as positional parameters.
    pub fn basic_params(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.id),
            Value::from(self.name.as_str()),
            Value::Integer(self.age),
        ]
    }

    /// `(id, name, age, department)` as positional parameters.
    pub fn department_params(&self) -> Vec<Value> {
        let mut params = self.basic_params();
        params.push(Value::from(self.department.as_str()));
        params
    }

    /// All five columns as positional parameters.
    pub fn to_params(&self) -> Vec<Value> {
        let mut params = self.department_params();
        params.push(Value::Integer(self.salary));
        params
    }
}

/// A synthetic order row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Sequential id starting at 1.
    pub id: i64,
    /// Cyclic reference into `[1, max_user_id]`. Not a checked foreign key.
    pub user_id: i64,
    /// One of [`PRODUCTS`].
    pub product: String,
    /// Amount in `[10, 999]`.
    pub amount: i64,
    /// `YYYY-MM-DD`, months 1-12 and days 1-28.
    pub date: String,
}

impl Order {
    /// All five columns as positional parameters.
    pub fn to_params(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.id),
            Value::Integer(self.user_id),
            Value::from(self.product.as_str()),
            Value::Integer(self.amount),
            Value::from(self.date.as_str()),
        ]
    }
}

/// Generates `count` users with ids `1..=count`.
pub fn generate_users(count: usize) -> Vec<User> {
    (0..count)
        .map(|i| User {
            id: i as i64 + 1,
            name: format!(
                "{} {}",
                FIRST_NAMES[i % FIRST_NAMES.len()],
                LAST_NAMES[(i / FIRST_NAMES.len()) % LAST_NAMES.len()]
            ),
            age: 22 + (i % 43) as i64,
            department: DEPARTMENTS[i % DEPARTMENTS.len()].to_string(),
            salary: 30_000 + ((i as i64 * 500) % 70_000),
        })
        .collect()
}

/// Generates `count` orders dated in the current local calendar year.
///
/// # Panics
///
/// Panics if `max_user_id` is zero.
pub fn generate_orders(count: usize, max_user_id: usize) -> Vec<Order> {
    generate_orders_in_year(count, max_user_id, chrono::Local::now().year())
}

/// Generates `count` orders dated in `year`.
///
/// # Panics
///
/// Panics if `max_user_id` is zero.
pub fn generate_orders_in_year(count: usize, max_user_id: usize, year: i32) -> Vec<Order> {
    assert!(max_user_id > 0, "max_user_id must be at least 1");

    (0..count)
        .map(|i| Order {
            id: i as i64 + 1,
            user_id: (i % max_user_id) as i64 + 1,
            product: PRODUCTS[i % PRODUCTS.len()].to_string(),
            amount: 10 + ((i as i64 * 7) % 990),
            date: format!("{}-{:02}-{:02}", year, i % 12 + 1, i % 28 + 1),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_first_users() {
        let users = generate_users(10);
        assert_eq!(users[0].name, "John Smith");
        assert_eq!(users[0].age, 22);
        assert_eq!(users[0].department, "Engineering");
        assert_eq!(users[0].salary, 30_000);

        assert_eq!(users[8].name, "John Johnson");
        assert_eq!(users[9].name, "Jane Johnson");
        assert_eq!(users[5].department, "Engineering");
    }

    #[test]
    fn test_salary_wraps() {
        let users = generate_users(141);
        assert_eq!(users[139].salary, 99_500);
        assert_eq!(users[140].salary, 30_000);
    }

    #[test]
    fn test_order_fields() {
        let orders = generate_orders_in_year(13, 5, 2024);
        assert_eq!(orders[0].date, "2024-01-01");
        assert_eq!(orders[11].date, "2024-12-12");
        assert_eq!(orders[12].date, "2024-01-13");
        assert_eq!(orders[5].user_id, 1);
        assert_eq!(orders[1].amount, 17);
        assert_eq!(orders[8].product, "Laptop");
    }

    #[test]
    fn test_params_shapes() {
        let user = &generate_users(1)[0];
        assert_eq!(user.basic_params().len(), 3);
        assert_eq!(user.department_params().len(), 4);
        assert_eq!(user.to_params()[4], Value::Integer(30_000));

        let order = &generate_orders_in_year(1, 1, 2024)[0];
        assert_eq!(order.to_params()[4], Value::from("2024-01-01"));
    }

    #[test]
    fn test_empty_generation() {
        assert!(generate_users(0).is_empty());
        assert!(generate_orders(0, 1).is_empty());
    }

    #[test]
    #[should_panic(expected = "max_user_id")]
    fn test_zero_max_user_id_panics() {
        generate_orders_in_year(1, 0, 2024);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_users_are_contiguous_and_in_range(count in 0usize..2_000) {
            let users = generate_users(count);
            prop_assert_eq!(users.len(), count);
            for (i, user) in users.iter().enumerate() {
                prop_assert_eq!(user.id, i as i64 + 1);
                prop_assert!((22..=64).contains(&user.age));
                prop_assert!((30_000..=99_500).contains(&user.salary));
                prop_assert!(DEPARTMENTS.contains(&user.department.as_str()));
            }
        }

        #[test]
        fn prop_generators_are_pure(count in 0usize..500, max_user_id in 1usize..200) {
            prop_assert_eq!(generate_users(count), generate_users(count));
            prop_assert_eq!(generate_orders(count, max_user_id), generate_orders(count, max_user_id));
        }

        #[test]
        fn prop_order_user_ids_in_range(count in 0usize..2_000, max_user_id in 1usize..3_000) {
            for order in generate_orders_in_year(count, max_user_id, 2024) {
                prop_assert!(order.user_id >= 1 && order.user_id as usize <= max_user_id);
                prop_assert!((10..=999).contains(&order.amount));
            }
        }
    }
}
