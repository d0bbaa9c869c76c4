//! Typed row queries serialized to the BaaS wire format.
//!
//! Each query renders to a standalone JSON object passed as a repeated
//! `queries[]` request parameter, e.g.
//! `{"method":"equal","attribute":"typeId","values":["q1"]}`.

use serde_json::json;

/// A single filter, ordering, or paging instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Attribute equals value.
    Equal(String, String),
    /// Fulltext search over an indexed attribute.
    Search(String, String),
    /// Order by attribute, newest-style descending.
    OrderDesc(String),
    /// Page size.
    Limit(u64),
    /// Page start.
    Offset(u64),
}

impl Query {
    pub fn equal(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Equal(attribute.into(), value.into())
    }

    pub fn search(attribute: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Search(attribute.into(), text.into())
    }

    pub fn order_desc(attribute: impl Into<String>) -> Self {
        Self::OrderDesc(attribute.into())
    }

    #[must_use]
    pub const fn limit(limit: u64) -> Self {
        Self::Limit(limit)
    }

    #[must_use]
    pub const fn offset(offset: u64) -> Self {
        Self::Offset(offset)
    }

    /// Render to the JSON wire string.
    #[must_use]
    pub fn to_wire(&self) -> String {
        let value = match self {
            Self::Equal(attribute, value) => json!({
                "method": "equal",
                "attribute": attribute,
                "values": [value],
            }),
            Self::Search(attribute, text) => json!({
                "method": "search",
                "attribute": attribute,
                "values": [text],
            }),
            Self::OrderDesc(attribute) => json!({
                "method": "orderDesc",
                "attribute": attribute,
            }),
            Self::Limit(limit) => json!({
                "method": "limit",
                "values": [limit],
            }),
            Self::Offset(offset) => json!({
                "method": "offset",
                "values": [offset],
            }),
        };
        value.to_string()
    }
}

/// Render a query list to repeated `queries[]` request parameters.
pub(crate) fn to_params(queries: &[Query]) -> Vec<(&'static str, String)> {
    queries
        .iter()
        .map(|query| ("queries[]", query.to_wire()))
        .collect()
}
