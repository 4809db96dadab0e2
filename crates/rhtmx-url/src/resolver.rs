//! Placeholder substitution and the shared resolver handle

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::args::RouteArgs;
use crate::error::{Result, UrlError};
use crate::table::RouteTable;
use crate::token::{parse_tokens, Token};

/// Substitutes arguments into a single URL pattern
///
/// Errors name the pattern as the route; [`RouteTable::resolve`] replaces it
/// with the route name.
///
/// Rules:
/// - a pattern without placeholders accepts no argument at all
/// - named mode needs a value for every placeholder name and rejects keys
///   that name no placeholder
/// - positional mode (and `None`, which is positional with zero values) needs
///   exactly one value per placeholder occurrence
///
/// Values are inserted verbatim and never re-scanned for placeholders.
///
/// # Examples
///
/// ```
/// use rhtmx_url::{resolve_pattern, RouteArgs};
///
/// let url = resolve_pattern(
///     "/users/{id}/posts/{postId}",
///     Some(&RouteArgs::positional([5, 9])),
/// ).unwrap();
/// assert_eq!(url, "/users/5/posts/9");
/// ```
pub fn resolve_pattern(pattern: &str, args: Option<&RouteArgs>) -> Result<String> {
    let tokens = parse_tokens(pattern);

    if tokens.is_empty() {
        return match args {
            Some(_) => Err(UrlError::UnexpectedArgument {
                route: pattern.to_string(),
                argument: None,
            }),
            None => Ok(pattern.to_string()),
        };
    }

    match args {
        Some(RouteArgs::Named(map)) => {
            let values = tokens
                .iter()
                .map(|token| {
                    map.get(&token.name)
                        .map(String::as_str)
                        .ok_or_else(|| UrlError::MissingArgument {
                            route: pattern.to_string(),
                            placeholder: token.name.clone(),
                        })
                })
                .collect::<Result<Vec<_>>>()?;

            let names: HashSet<&str> = tokens.iter().map(|t| t.name.as_str()).collect();
            if let Some(extra) = map.keys().find(|key| !names.contains(key.as_str())) {
                return Err(UrlError::UnexpectedArgument {
                    route: pattern.to_string(),
                    argument: Some(extra.clone()),
                });
            }

            Ok(substitute(pattern, &tokens, &values))
        }
        Some(RouteArgs::Positional(values)) => {
            check_count(pattern, &tokens, values.len())?;
            let values: Vec<&str> = values.iter().map(String::as_str).collect();
            Ok(substitute(pattern, &tokens, &values))
        }
        None => {
            check_count(pattern, &tokens, 0)?;
            Ok(pattern.to_string())
        }
    }
}

fn check_count(pattern: &str, tokens: &[Token], actual: usize) -> Result<()> {
    if tokens.len() == actual {
        Ok(())
    } else {
        Err(UrlError::ArgumentCountMismatch {
            route: pattern.to_string(),
            expected: tokens.len(),
            actual,
        })
    }
}

/// Splices `values[i]` over `tokens[i]`; both slices have the same length
fn substitute(pattern: &str, tokens: &[Token], values: &[&str]) -> String {
    let extra: usize = values.iter().map(|v| v.len()).sum();
    let mut url = String::with_capacity(pattern.len() + extra);
    let mut cursor = 0;

    for (token, value) in tokens.iter().zip(values) {
        url.push_str(&pattern[cursor..token.span.start]);
        url.push_str(value);
        cursor = token.span.end;
    }
    url.push_str(&pattern[cursor..]);

    url
}

/// Cheaply cloneable handle over a shared, read-only [`RouteTable`]
///
/// Build the table once at startup and hand a resolver to whatever renders
/// pages; clones share the same table.
///
/// # Examples
///
/// ```
/// use rhtmx_url::{route_args, RouteTable, UrlResolver};
///
/// let table = RouteTable::builder()
///     .route("home", "/")
///     .route("post.show", "/users/{id}/posts/{postId}")
///     .build();
/// let urls = UrlResolver::new(table);
///
/// assert_eq!(urls.resolve_url("home", None).unwrap(), "/");
/// let args = route_args! { "id" => 5, "postId" => 9 };
/// assert_eq!(urls.resolve_url("post.show", Some(&args)).unwrap(), "/users/5/posts/9");
/// ```
#[derive(Debug, Clone)]
pub struct UrlResolver {
    table: Arc<RouteTable>,
}

impl UrlResolver {
    /// Wraps a table (or an already shared one)
    pub fn new(table: impl Into<Arc<RouteTable>>) -> Self {
        Self {
            table: table.into(),
        }
    }

    /// The underlying table
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Resolves a named route to a URL
    pub fn resolve_url(&self, name: &str, args: Option<&RouteArgs>) -> Result<String> {
        debug!(
            route = name,
            mode = args.map(RouteArgs::mode).unwrap_or("none"),
            "resolving url"
        );

        self.table.resolve(name, args).map_err(|err| {
            debug!(route = name, error = %err, "url resolution failed");
            err
        })
    }

    /// Like [`resolve_url`](Self::resolve_url) but discards the error
    pub fn try_resolve_url(&self, name: &str, args: Option<&RouteArgs>) -> Option<String> {
        self.resolve_url(name, args).ok()
    }
}

impl From<RouteTable> for UrlResolver {
    fn from(table: RouteTable) -> Self {
        Self::new(table)
    }
}
