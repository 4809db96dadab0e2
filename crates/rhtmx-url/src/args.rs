//! Argument sets for URL resolution
//!
//! A resolution call takes either named values (keyed by placeholder name) or
//! positional values (matched to placeholders in appearance order). The shape
//! is chosen by the caller through [`RouteArgs`], never guessed.

use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;

use crate::error::{Result, UrlError};

/// Values supplied to one resolution call
///
/// Values are rendered to strings when the argument set is built, so any
/// `Display` type can be passed.
///
/// # Examples
///
/// ```
/// use rhtmx_url::RouteArgs;
///
/// let named = RouteArgs::named([("id", 5), ("postId", 9)]);
/// assert_eq!(named.get("id"), Some("5"));
///
/// let positional = RouteArgs::positional([5, 9]);
/// assert_eq!(positional.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteArgs {
    /// Keyed by placeholder name
    Named(BTreeMap<String, String>),
    /// Matched to placeholders in appearance order
    Positional(Vec<String>),
}

impl RouteArgs {
    /// Builds a named argument set; a repeated key keeps the last value
    pub fn named<K, V, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Display,
    {
        RouteArgs::Named(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.to_string()))
                .collect(),
        )
    }

    /// Builds a positional argument set
    pub fn positional<V, I>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Display,
    {
        RouteArgs::Positional(values.into_iter().map(|v| v.to_string()).collect())
    }

    /// Number of supplied values
    pub fn len(&self) -> usize {
        match self {
            RouteArgs::Named(map) => map.len(),
            RouteArgs::Positional(values) => values.len(),
        }
    }

    /// True if no values were supplied
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True for named-argument mode
    pub fn is_named(&self) -> bool {
        matches!(self, RouteArgs::Named(_))
    }

    /// Looks up a named value (always `None` in positional mode)
    pub fn get(&self, name: &str) -> Option<&str> {
        match self {
            RouteArgs::Named(map) => map.get(name).map(String::as_str),
            RouteArgs::Positional(_) => None,
        }
    }

    /// Mode name, used in logs
    pub fn mode(&self) -> &'static str {
        match self {
            RouteArgs::Named(_) => "named",
            RouteArgs::Positional(_) => "positional",
        }
    }

    /// Converts a JSON value into an argument set
    ///
    /// This is the one place where the shape is inferred, for callers that
    /// receive arguments as JSON (the browser-side helper, the CLI):
    ///
    /// - `null` → no argument
    /// - object → named
    /// - array → positional
    /// - any other scalar → a single positional value
    ///
    /// Strings are used as-is, numbers and booleans are rendered with their
    /// JSON text. `null`, arrays and objects are rejected as values.
    ///
    /// A top-level `null` differs from the browser-side `resolveUrl`, which
    /// only treats `undefined` as "no argument" and rejects `null` on a static
    /// route with `UnexpectedArgumentError`. Serialized JSON has no
    /// `undefined`, so `null` is the only way to send "no argument" here.
    ///
    /// # Examples
    ///
    /// ```
    /// use rhtmx_url::RouteArgs;
    /// use serde_json::json;
    ///
    /// let args = RouteArgs::from_json(&json!({"id": 5})).unwrap();
    /// assert_eq!(args, Some(RouteArgs::named([("id", 5)])));
    ///
    /// let args = RouteArgs::from_json(&json!(null)).unwrap();
    /// assert_eq!(args, None);
    /// ```
    pub fn from_json(value: &Value) -> Result<Option<Self>> {
        match value {
            Value::Null => Ok(None),
            Value::Object(map) => map
                .iter()
                .map(|(key, v)| scalar_to_string(key, v).map(|s| (key.clone(), s)))
                .collect::<Result<BTreeMap<_, _>>>()
                .map(|map| Some(RouteArgs::Named(map))),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(index, v)| scalar_to_string(&index.to_string(), v))
                .collect::<Result<Vec<_>>>()
                .map(|values| Some(RouteArgs::Positional(values))),
            scalar => scalar_to_string("0", scalar).map(|s| Some(RouteArgs::Positional(vec![s]))),
        }
    }
}

fn scalar_to_string(argument: &str, value: &Value) -> Result<String> {
    let reason = match value {
        Value::String(s) => return Ok(s.clone()),
        Value::Number(n) => return Ok(n.to_string()),
        Value::Bool(b) => return Ok(b.to_string()),
        Value::Null => "null cannot be substituted into a URL",
        Value::Array(_) => "arrays cannot be substituted into a URL",
        Value::Object(_) => "objects cannot be substituted into a URL",
    };

    Err(UrlError::InvalidArgumentValue {
        argument: argument.to_string(),
        reason: reason.to_string(),
    })
}

impl<K, V> From<HashMap<K, V>> for RouteArgs
where
    K: Into<String>,
    V: Display,
{
    fn from(map: HashMap<K, V>) -> Self {
        RouteArgs::named(map)
    }
}

impl<K, V> From<BTreeMap<K, V>> for RouteArgs
where
    K: Into<String>,
    V: Display,
{
    fn from(map: BTreeMap<K, V>) -> Self {
        RouteArgs::named(map)
    }
}

impl<V: Display> From<Vec<V>> for RouteArgs {
    fn from(values: Vec<V>) -> Self {
        RouteArgs::positional(values)
    }
}

impl<V: Display, const N: usize> From<[V; N]> for RouteArgs {
    fn from(values: [V; N]) -> Self {
        RouteArgs::positional(values)
    }
}

/// Builds a [`RouteArgs`] inline
///
/// `key => value` pairs give named arguments; a plain list gives positional
/// arguments. Values may be of mixed types.
///
/// # Examples
///
/// ```
/// use rhtmx_url::{route_args, RouteArgs};
///
/// let named = route_args! { "id" => 5, "slug" => "intro" };
/// assert_eq!(named.get("slug"), Some("intro"));
///
/// let positional = route_args![5, "intro"];
/// assert_eq!(positional, RouteArgs::Positional(vec!["5".into(), "intro".into()]));
/// ```
#[macro_export]
macro_rules! route_args {
    () => {
        $crate::RouteArgs::Positional(::std::vec::Vec::new())
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = ::std::collections::BTreeMap::<::std::string::String, ::std::string::String>::new();
        $(
            map.insert(
                ::std::convert::Into::<::std::string::String>::into($key),
                ::std::string::ToString::to_string(&$value),
            );
        )+
        $crate::RouteArgs::Named(map)
    }};
    ($($value:expr),+ $(,)?) => {
        $crate::RouteArgs::Positional(::std::vec![$(::std::string::ToString::to_string(&$value)),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_named_last_key_wins() {
        let args = RouteArgs::named([("id", "1"), ("id", "2")]);
        assert_eq!(args.get("id"), Some("2"));
        assert_eq!(args.len(), 1);
    }

    #[test]
    fn test_positional_keeps_order() {
        let args = RouteArgs::positional(["b", "a", "c"]);
        assert_eq!(
            args,
            RouteArgs::Positional(vec!["b".into(), "a".into(), "c".into()])
        );
        assert_eq!(args.get("b"), None);
        assert!(!args.is_named());
    }

    #[test]
    fn test_from_conversions() {
        let mut map = HashMap::new();
        map.insert("id", 7);
        assert_eq!(RouteArgs::from(map), RouteArgs::named([("id", 7)]));
        assert_eq!(RouteArgs::from(vec![1, 2]), RouteArgs::positional([1, 2]));
        assert_eq!(RouteArgs::from([1.5]), RouteArgs::positional(["1.5"]));
    }

    #[test]
    fn test_macro_forms() {
        assert_eq!(route_args![], RouteArgs::Positional(vec![]));
        assert_eq!(route_args![1, "x",], RouteArgs::positional(["1", "x"]));
        assert_eq!(
            route_args! { "a" => 1, String::from("b") => true },
            RouteArgs::named([("a", "1"), ("b", "true")])
        );
    }

    #[test]
    fn test_from_json_shapes() {
        assert_eq!(RouteArgs::from_json(&json!(null)).unwrap(), None);
        assert_eq!(
            RouteArgs::from_json(&json!({"id": 5, "draft": false, "slug": "a"})).unwrap(),
            Some(RouteArgs::named([("id", "5"), ("draft", "false"), ("slug", "a")]))
        );
        assert_eq!(
            RouteArgs::from_json(&json!([5, "x"])).unwrap(),
            Some(RouteArgs::positional(["5", "x"]))
        );
        assert_eq!(
            RouteArgs::from_json(&json!(42)).unwrap(),
            Some(RouteArgs::positional([42]))
        );
    }

    #[test]
    fn test_from_json_rejects_nested_values() {
        let err = RouteArgs::from_json(&json!({"id": {"nested": 1}})).unwrap_err();
        assert!(matches!(
            err,
            UrlError::InvalidArgumentValue { ref argument, .. } if argument == "id"
        ));

        let err = RouteArgs::from_json(&json!([1, null])).unwrap_err();
        assert!(matches!(
            err,
            UrlError::InvalidArgumentValue { ref argument, .. } if argument == "1"
        ));
    }
}
