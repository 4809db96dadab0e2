//! Route table: route name → URL pattern

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::warn;

use crate::args::RouteArgs;
use crate::error::{Result, UrlError};
use crate::resolver::resolve_pattern;
use crate::token::{has_tokens, parse_tokens, Token};

/// Immutable mapping from route name to URL pattern
///
/// Built once (by [`RouteTable::builder`], from a serialized table or from
/// configuration) and only read afterwards. Serializes as a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteTable {
    routes: BTreeMap<String, String>,
}

/// Collects routes before freezing them into a [`RouteTable`]
#[derive(Debug, Default)]
pub struct RouteTableBuilder {
    routes: BTreeMap<String, String>,
}

impl RouteTableBuilder {
    /// Adds a named route; a repeated name replaces the earlier pattern
    pub fn route(mut self, name: impl Into<String>, pattern: impl Into<String>) -> Self {
        let name = name.into();
        let pattern = pattern.into();

        if let Some(previous) = self.routes.insert(name.clone(), pattern) {
            warn!(route = %name, previous = %previous, "duplicate route name, keeping the last pattern");
        }
        self
    }

    /// Adds every `(name, pattern)` pair
    pub fn routes<K, V, I>(self, routes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        routes
            .into_iter()
            .fold(self, |builder, (name, pattern)| builder.route(name, pattern))
    }

    /// Freezes the table
    pub fn build(self) -> RouteTable {
        RouteTable {
            routes: self.routes,
        }
    }
}

impl RouteTable {
    /// Starts an empty builder
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::default()
    }

    /// Parses a pre-serialized table (`{"name": "/pattern", ...}`)
    ///
    /// # Examples
    ///
    /// ```
    /// use rhtmx_url::RouteTable;
    ///
    /// let table = RouteTable::from_json(r#"{"home": "/", "user": "/users/{id}"}"#).unwrap();
    /// assert_eq!(table.pattern("user"), Some("/users/{id}"));
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| UrlError::InvalidTable(e.to_string()))
    }

    /// Serializes the table as compact JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.routes).map_err(|e| UrlError::InvalidTable(e.to_string()))
    }

    /// Serializes the table as pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.routes)
            .map_err(|e| UrlError::InvalidTable(e.to_string()))
    }

    /// Pattern registered under `name`
    pub fn pattern(&self, name: &str) -> Option<&str> {
        self.routes.get(name).map(String::as_str)
    }

    /// True if a route with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.routes.contains_key(name)
    }

    /// Route names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }

    /// `(name, pattern)` pairs in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.routes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Placeholder tokens of a route's pattern
    pub fn tokens(&self, name: &str) -> Option<Vec<Token>> {
        self.pattern(name).map(parse_tokens)
    }

    /// Resolves a named route to a URL
    ///
    /// # Errors
    ///
    /// - [`UrlError::RouteNotFound`] if `name` is not in the table
    /// - any error of [`resolve_pattern`], reported against `name`
    ///
    /// # Examples
    ///
    /// ```
    /// use rhtmx_url::{RouteArgs, RouteTable, UrlError};
    ///
    /// let table = RouteTable::builder()
    ///     .route("post.show", "/users/{id}/posts/{postId}")
    ///     .build();
    ///
    /// let args = RouteArgs::named([("id", 5), ("postId", 9)]);
    /// assert_eq!(table.resolve("post.show", Some(&args)).unwrap(), "/users/5/posts/9");
    ///
    /// let err = table.resolve("post.edit", None).unwrap_err();
    /// assert!(matches!(err, UrlError::RouteNotFound { .. }));
    /// ```
    pub fn resolve(&self, name: &str, args: Option<&RouteArgs>) -> Result<String> {
        let pattern = self.pattern(name).ok_or_else(|| UrlError::RouteNotFound {
            name: name.to_string(),
        })?;

        resolve_pattern(pattern, args).map_err(|err| err.for_route(name))
    }

    /// Generates a URL from a named route and parameter map
    ///
    /// An empty map counts as no argument on a route without placeholders, so
    /// static routes resolve with it. On any other route it stays a named
    /// argument set and reports the first missing placeholder.
    ///
    /// # Examples
    ///
    /// ```
    /// use rhtmx_url::RouteTable;
    /// use std::collections::HashMap;
    ///
    /// let table = RouteTable::builder().route("user.profile", "/users/{id}").build();
    ///
    /// let mut params = HashMap::new();
    /// params.insert("id".to_string(), "123".to_string());
    ///
    /// assert_eq!(table.url_for("user.profile", &params).unwrap(), "/users/123");
    /// ```
    pub fn url_for(&self, name: &str, params: &HashMap<String, String>) -> Result<String> {
        let is_static = self.pattern(name).map_or(true, |pattern| !has_tokens(pattern));
        if params.is_empty() && is_static {
            return self.resolve(name, None);
        }

        let args = RouteArgs::named(params.iter().map(|(k, v)| (k.clone(), v)));
        self.resolve(name, Some(&args))
    }

    /// Convenience form of [`url_for`](Self::url_for) taking parameter tuples
    ///
    /// # Examples
    ///
    /// ```
    /// use rhtmx_url::RouteTable;
    ///
    /// let table = RouteTable::builder()
    ///     .route("post.show", "/posts/{int:year}/{slug}")
    ///     .build();
    ///
    /// let url = table.url_for_params("post.show", &[
    ///     ("year", "2024"),
    ///     ("slug", "hello-world"),
    /// ]).unwrap();
    ///
    /// assert_eq!(url, "/posts/2024/hello-world");
    /// ```
    pub fn url_for_params(&self, name: &str, params: &[(&str, &str)]) -> Result<String> {
        let param_map: HashMap<String, String> = params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        self.url_for(name, &param_map)
    }
}

impl<K, V> FromIterator<(K, V)> for RouteTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        RouteTable::builder().routes(iter).build()
    }
}
