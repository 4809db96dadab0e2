//! Placeholder token parsing for URL patterns
//!
//! Pure functional parsing of `{name}` / `{hint:name}` slots out of a URL
//! pattern. All functions are **pure**: same input → same output, no side effects.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::ops::Range;

/// `{` optional `hint:` prefix, then the placeholder name, then `}`
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{(?:(?P<hint>[A-Za-z_][A-Za-z0-9_]*):)?(?P<name>[A-Za-z_][A-Za-z0-9_]*)\}")
        .expect("placeholder grammar is a valid regex")
});

/// Type annotation carried by a placeholder, e.g. `int` in `{int:id}`
///
/// Hints are informational: substituted values are never checked against
/// them.
///
/// # Examples
///
/// ```
/// use rhtmx_url::token::{parse_hint, TypeHint};
///
/// assert_eq!(parse_hint("int"), TypeHint::Int);
/// assert_eq!(parse_hint("slug"), TypeHint::Custom("slug".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeHint {
    /// `int`
    Int,
    /// `float`
    Float,
    /// `str` / `string`
    Str,
    /// `path` (may span several segments)
    Path,
    /// `uuid`
    Uuid,
    /// Any other converter name
    Custom(String),
}

impl TypeHint {
    /// Hint name as written in a pattern
    pub fn as_str(&self) -> &str {
        match self {
            TypeHint::Int => "int",
            TypeHint::Float => "float",
            TypeHint::Str => "str",
            TypeHint::Path => "path",
            TypeHint::Uuid => "uuid",
            TypeHint::Custom(name) => name,
        }
    }
}

/// Parses a hint prefix (pure function)
pub fn parse_hint(hint: &str) -> TypeHint {
    match hint {
        "int" => TypeHint::Int,
        "float" => TypeHint::Float,
        "str" | "string" => TypeHint::Str,
        "path" => TypeHint::Path,
        "uuid" => TypeHint::Uuid,
        other => TypeHint::Custom(other.to_string()),
    }
}

/// One placeholder occurrence inside a pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Exact token text, braces included: `{int:id}`
    pub text: String,
    /// Placeholder name with the hint stripped: `id`
    pub name: String,
    /// Parsed hint, if the token had one
    pub hint: Option<TypeHint>,
    /// Byte range of `text` within the pattern
    pub span: Range<usize>,
}

/// Extracts all placeholder tokens in appearance order
///
/// Brace text that does not fit the grammar (`{}`, `{a b}`, `{1x}`) is left
/// alone and is not a token.
///
/// # Examples
///
/// ```
/// use rhtmx_url::token::{parse_tokens, TypeHint};
///
/// let tokens = parse_tokens("/users/{int:id}/posts/{postId}");
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0].name, "id");
/// assert_eq!(tokens[0].hint, Some(TypeHint::Int));
/// assert_eq!(tokens[1].text, "{postId}");
/// ```
pub fn parse_tokens(pattern: &str) -> Vec<Token> {
    TOKEN_RE
        .captures_iter(pattern)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let name = caps.name("name")?;
            Some(Token {
                text: whole.as_str().to_string(),
                name: name.as_str().to_string(),
                hint: caps.name("hint").map(|h| parse_hint(h.as_str())),
                span: whole.range(),
            })
        })
        .collect()
}

/// Returns true if the pattern has at least one placeholder
pub fn has_tokens(pattern: &str) -> bool {
    TOKEN_RE.is_match(pattern)
}

/// Placeholder names in first-seen order, duplicates removed
///
/// # Examples
///
/// ```
/// use rhtmx_url::token::placeholder_names;
///
/// let names = placeholder_names("/{lang}/docs/{page}/{lang}");
/// assert_eq!(names, vec!["lang", "page"]);
/// ```
pub fn placeholder_names(pattern: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    parse_tokens(pattern)
        .into_iter()
        .filter(|token| seen.insert(token.name.clone()))
        .map(|token| token.name)
        .collect()
}
