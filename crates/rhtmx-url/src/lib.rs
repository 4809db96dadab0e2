//! # RHTMX URL
//!
//! Named route URL resolution:
//! - Route tables mapping names to patterns (`/users/{id}`)
//! - Optional type hints on placeholders (`/users/{int:id}`)
//! - Named or positional arguments, chosen explicitly by the caller
//! - A page-embedded router script exposing the same table to the browser
//!
//! ## Resolution Rules
//!
//! - Every placeholder receives exactly one value
//! - Named mode: a missing key or a key no placeholder uses is an error
//! - Positional mode: the value count must equal the placeholder count
//! - A route without placeholders accepts no argument
//! - Values are inserted verbatim (no escaping, no re-scanning)
//!
//! ## Example
//!
//! ```
//! use rhtmx_url::{route_args, RouteTable, UrlError, UrlResolver};
//!
//! let table = RouteTable::builder()
//!     .route("about", "/about")
//!     .route("post.show", "/users/{int:id}/posts/{postId}")
//!     .build();
//! let urls = UrlResolver::new(table);
//!
//! assert_eq!(urls.resolve_url("about", None).unwrap(), "/about");
//! assert_eq!(
//!     urls.resolve_url("post.show", Some(&route_args![5, 9])).unwrap(),
//!     "/users/5/posts/9"
//! );
//!
//! let err = urls.resolve_url("post.show", Some(&route_args![5])).unwrap_err();
//! assert!(matches!(err, UrlError::ArgumentCountMismatch { expected: 2, actual: 1, .. }));
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod args;
pub mod config;
pub mod error;
pub mod resolver;
pub mod script;
pub mod table;
pub mod token;

pub use args::RouteArgs;
pub use config::{ScriptConfig, UrlConfig, DEFAULT_CONFIG_FILE};
pub use error::{Result, UrlError};
pub use resolver::{resolve_pattern, UrlResolver};
pub use script::{render_router_script, render_router_tag, ScriptOptions};
pub use table::{RouteTable, RouteTableBuilder};
pub use token::{parse_tokens, placeholder_names, Token, TypeHint};
