//! Query parameter types

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// A query parameter key-value pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParam {
    /// The parameter key
    pub key: String,
    /// The parameter value
    pub value: String,
}

impl QueryParam {
    /// Creates a new query parameter.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// An ordered collection of query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryParams {
    items: Vec<QueryParam>,
}

impl QueryParams {
    /// Creates an empty query parameter collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Adds a query parameter to the collection.
    pub fn add(&mut self, param: QueryParam) {
        self.items.push(param);
    }

    /// Returns an iterator over the parameters as key-value pairs.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.items.iter().map(|p| (p.key.as_str(), p.value.as_str()))
    }

    /// Encodes the parameters into a `application/x-www-form-urlencoded`
    /// query string, preserving insertion order.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidQuery` if encoding fails.
    pub fn encode(&self) -> DomainResult<String> {
        let pairs: Vec<(&str, &str)> = self.pairs().collect();
        serde_urlencoded::to_string(pairs).map_err(|e| DomainError::InvalidQuery(e.to_string()))
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<QueryParam> for QueryParams {
    fn from_iter<T: IntoIterator<Item = QueryParam>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_encode_single_pair() {
        let mut params = QueryParams::new();
        params.add(QueryParam::new("page", "2"));
        assert_eq!(params.encode().unwrap(), "page=2");
    }

    #[test]
    fn test_encode_preserves_order_and_escapes() {
        let params: QueryParams = [
            QueryParam::new("q", "janet weaver"),
            QueryParam::new("page", "1"),
        ]
        .into_iter()
        .collect();

        assert_eq!(params.encode().unwrap(), "q=janet+weaver&page=1");
    }

    #[test]
    fn test_empty_collection() {
        let params = QueryParams::new();
        assert!(params.is_empty());
        assert_eq!(params.encode().unwrap(), "");
    }
}
