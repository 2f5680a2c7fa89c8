// SPDX-License-Identifier: MPL-2.0
//! The product record as stored in a per-language table.

use sqlx::FromRow;

/// One persisted product row.
///
/// `id` is assigned by storage on insert and is immutable afterwards.
/// Instances are replaced wholesale on every reload or language switch;
/// there is no identity tracking across reloads.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn products_compare_by_value() {
        let a = Product {
            id: 1,
            name: "Tea".to_string(),
            description: "Green tea".to_string(),
        };
        let b = a.clone();
        assert_eq!(a, b);
    }
}
