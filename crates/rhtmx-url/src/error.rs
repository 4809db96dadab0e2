// File: src/error.rs
// Purpose: Error taxonomy for URL resolution

use thiserror::Error;

/// Errors raised while building a route table or resolving a URL
///
/// All resolution errors are returned synchronously to the caller and are
/// never retried internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    /// No route with this name exists in the table
    #[error("route not found: {name}")]
    RouteNotFound { name: String },

    /// An argument was supplied that no placeholder consumes
    ///
    /// `argument` names the offending key in named mode. It is `None` when the
    /// route has no placeholders at all.
    #[error("{}", unexpected_message(.route, .argument))]
    UnexpectedArgument {
        route: String,
        argument: Option<String>,
    },

    /// Named mode: a placeholder had no value in the mapping
    #[error("missing argument '{placeholder}' for route '{route}'")]
    MissingArgument { route: String, placeholder: String },

    /// Positional mode: value count differs from the placeholder count
    #[error("route '{route}' expects {expected} argument(s), got {actual}")]
    ArgumentCountMismatch {
        route: String,
        expected: usize,
        actual: usize,
    },

    /// A serialized route table could not be read
    #[error("invalid route table: {0}")]
    InvalidTable(String),

    /// A JSON argument value cannot be rendered into a URL
    #[error("invalid value for argument '{argument}': {reason}")]
    InvalidArgumentValue { argument: String, reason: String },

    /// Router script options were rejected
    #[error("invalid script option: {0}")]
    InvalidScriptOption(String),
}

fn unexpected_message(route: &str, argument: &Option<String>) -> String {
    match argument {
        Some(arg) => format!("unexpected argument '{}' for route '{}'", arg, route),
        None => format!("route '{}' takes no arguments", route),
    }
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, UrlError>;

impl UrlError {
    /// Name of the route the error refers to, when there is one
    pub fn route(&self) -> Option<&str> {
        match self {
            UrlError::RouteNotFound { name } => Some(name),
            UrlError::UnexpectedArgument { route, .. }
            | UrlError::MissingArgument { route, .. }
            | UrlError::ArgumentCountMismatch { route, .. } => Some(route),
            _ => None,
        }
    }

    /// Rewrites the route name carried by a resolution error
    ///
    /// `resolve_pattern` has no route name, so it reports the pattern itself;
    /// table lookups swap in the real name.
    pub(crate) fn for_route(self, name: &str) -> Self {
        match self {
            UrlError::UnexpectedArgument { argument, .. } => UrlError::UnexpectedArgument {
                route: name.to_string(),
                argument,
            },
            UrlError::MissingArgument { placeholder, .. } => UrlError::MissingArgument {
                route: name.to_string(),
                placeholder,
            },
            UrlError::ArgumentCountMismatch {
                expected, actual, ..
            } => UrlError::ArgumentCountMismatch {
                route: name.to_string(),
                expected,
                actual,
            },
            other => other,
        }
    }
}
