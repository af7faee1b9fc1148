//! Namespaces and the namespace selection read from the `ns` query parameter.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Query parameter that carries the selected namespaces.
pub const NAMESPACE_QUERY_PARAM: &str = "ns";

/// Namespace as listed by the BFF.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Namespace {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Selected namespaces. Ordered and de-duplicated so two selections naming
/// the same namespaces compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct NamespaceSelection(BTreeSet<String>);

impl NamespaceSelection {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn single(name: impl Into<String>) -> Self {
        Self::from_names([name.into()])
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(
            names
                .into_iter()
                .map(Into::into)
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty())
                .collect(),
        )
    }

    /// Parse a comma separated list, as accepted on the command line.
    pub fn parse_list(list: &str) -> Self {
        Self::from_names(list.split(','))
    }

    /// Read the `ns` parameter from a raw query string (`ns=a&ns=b,c`).
    /// Values are percent-decoded.
    pub fn from_query(query: &str) -> Self {
        let query = query.trim_start_matches('?');
        let Ok(url) = reqwest::Url::parse(&format!("http://localhost/?{}", query)) else {
            return Self::empty();
        };
        let mut names = BTreeSet::new();
        for (key, value) in url.query_pairs() {
            if key == NAMESPACE_QUERY_PARAM {
                names.extend(Self::parse_list(&value).0);
            }
        }
        Self(names)
    }

    /// Union of two selections.
    pub fn union(mut self, other: Self) -> Self {
        self.0.extend(other.0);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Query pairs forwarded on app-scoped requests.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        self.0
            .iter()
            .map(|name| (NAMESPACE_QUERY_PARAM, name.clone()))
            .collect()
    }
}

impl std::fmt::Display for NamespaceSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.iter().collect();
        f.write_str(&names.join(","))
    }
}
