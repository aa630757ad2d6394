//! List paging and ordering parameters.
//!
//! `page <= 0` applies only the limit; `page >= 1` skips `(page - 1) * page_size` rows.
//! `order` is a comma-separated list of `column [asc|desc]` checked against the table's columns.

use crate::error::AppError;
use crate::table::TableSpec;
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderTerm {
    pub column: &'static str,
    pub descending: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderSpec {
    terms: Vec<OrderTerm>,
}

fn order_term_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)^\s*([a-z_][a-z0-9_]*)(?:\s+(asc|desc))?\s*$").expect("static regex")
    })
}

impl OrderSpec {
    /// Empty input means "as stored".
    pub fn parse(spec: &TableSpec, raw: &str) -> Result<Self, AppError> {
        if raw.trim().is_empty() {
            return Ok(OrderSpec::default());
        }
        let mut terms = Vec::new();
        for part in raw.split(',') {
            let caps = order_term_re()
                .captures(part)
                .ok_or_else(|| AppError::BadParams(format!("invalid order term: {:?}", part.trim())))?;
            let name = &caps[1];
            let column = spec
                .column(name)
                .ok_or_else(|| AppError::BadParams(format!("{} has no column {}", spec.name, name)))?;
            let descending = caps
                .get(2)
                .map(|d| d.as_str().eq_ignore_ascii_case("desc"))
                .unwrap_or(false);
            terms.push(OrderTerm {
                column: column.name,
                descending,
            });
        }
        Ok(OrderSpec { terms })
    }

    pub fn terms(&self) -> &[OrderTerm] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page {
    pub page: i64,
    pub page_size: i64,
    pub order: OrderSpec,
}

impl Page {
    pub fn new(page: i64, page_size: i64, order: OrderSpec) -> Result<Self, AppError> {
        if page_size <= 0 {
            return Err(AppError::BadParams(format!("pagesize must be > 0, got {}", page_size)));
        }
        Ok(Page {
            page,
            page_size,
            order,
        })
    }

    /// Parse `page`, `pagesize` and `order` from list query parameters. Other keys are ignored.
    pub fn from_query(spec: &TableSpec, params: &HashMap<String, String>) -> Result<Self, AppError> {
        let page = match params.get("page") {
            Some(v) => v
                .trim()
                .parse::<i64>()
                .map_err(|_| AppError::BadParams(format!("page must be an integer, got {:?}", v)))?,
            None => 0,
        };
        let page_size = match params.get("pagesize") {
            Some(v) => v
                .trim()
                .parse::<i64>()
                .map_err(|_| AppError::BadParams(format!("pagesize must be an integer, got {:?}", v)))?,
            None => DEFAULT_PAGE_SIZE,
        };
        let order = OrderSpec::parse(spec, params.get("order").map(String::as_str).unwrap_or(""))?;
        Page::new(page, page_size, order)
    }

    #[inline]
    pub fn offset(&self) -> i64 {
        if self.page <= 0 {
            0
        } else {
            (self.page - 1).saturating_mul(self.page_size)
        }
    }

    #[inline]
    pub fn limit(&self) -> i64 {
        self.page_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Column, ColumnType};

    const SPEC: TableSpec = TableSpec {
        schema: "public",
        name: "users",
        path: "users_",
        columns: &[
            Column {
                name: "id",
                ty: ColumnType::BigSerial,
            },
            Column {
                name: "name",
                ty: ColumnType::Text,
            },
            Column {
                name: "created_at",
                ty: ColumnType::Timestamp,
            },
        ],
        key: &["id"],
    };

    fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_offset_math() {
        let p = |page| Page::new(page, 25, OrderSpec::default()).unwrap();
        assert_eq!(p(-3).offset(), 0);
        assert_eq!(p(0).offset(), 0);
        assert_eq!(p(1).offset(), 0);
        assert_eq!(p(2).offset(), 25);
        assert_eq!(p(5).offset(), 100);
        assert_eq!(p(5).limit(), 25);
    }

    #[test]
    fn test_page_size_must_be_positive() {
        assert!(matches!(
            Page::new(1, 0, OrderSpec::default()),
            Err(AppError::BadParams(_))
        ));
        assert!(matches!(
            Page::new(1, -1, OrderSpec::default()),
            Err(AppError::BadParams(_))
        ));
    }

    #[test]
    fn test_query_defaults() {
        let p = Page::from_query(&SPEC, &HashMap::new()).unwrap();
        assert_eq!(p.page, 0);
        assert_eq!(p.page_size, DEFAULT_PAGE_SIZE);
        assert!(p.order.is_empty());
    }

    #[test]
    fn test_query_rejects_malformed_numbers() {
        assert!(Page::from_query(&SPEC, &query(&[("page", "two")])).is_err());
        assert!(Page::from_query(&SPEC, &query(&[("pagesize", "1.5")])).is_err());
        assert!(Page::from_query(&SPEC, &query(&[("pagesize", "0")])).is_err());
    }

    #[test]
    fn test_query_ignores_unknown_keys() {
        let p = Page::from_query(&SPEC, &query(&[("page", "3"), ("pagesize", "10"), ("foo", "bar")])).unwrap();
        assert_eq!(p.offset(), 20);
    }

    #[test]
    fn test_order_parse() {
        let o = OrderSpec::parse(&SPEC, "name desc, id").unwrap();
        assert_eq!(
            o.terms(),
            &[
                OrderTerm {
                    column: "name",
                    descending: true
                },
                OrderTerm {
                    column: "id",
                    descending: false
                },
            ]
        );
        let o = OrderSpec::parse(&SPEC, "created_at ASC").unwrap();
        assert!(!o.terms()[0].descending);
    }

    #[test]
    fn test_order_rejects_unknown_columns_and_expressions() {
        assert!(OrderSpec::parse(&SPEC, "email").is_err());
        assert!(OrderSpec::parse(&SPEC, "name; drop table users").is_err());
        assert!(OrderSpec::parse(&SPEC, "name sideways").is_err());
        assert!(OrderSpec::parse(&SPEC, "name,").is_err());
    }
}
