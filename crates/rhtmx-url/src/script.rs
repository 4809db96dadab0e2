//! Page-embedded router script
//!
//! Renders the route table together with a small browser-side `resolveUrl`
//! so templates can drop it into a `<script>` block and resolve the same
//! route names on the client.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::error::{Result, UrlError};
use crate::table::RouteTable;

/// Name the resolver function is installed under on `window`
pub const RESOLVER_FUNCTION: &str = "resolveUrl";

/// Options for [`render_router_script`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptOptions {
    /// `window` property that receives the route table
    pub global_name: String,
    /// Compact output (pretty-printed JSON and indented code when false)
    pub minify: bool,
}

impl Default for ScriptOptions {
    fn default() -> Self {
        Self {
            global_name: "routes".to_string(),
            minify: true,
        }
    }
}

// Mirrors resolve_pattern: same grammar, same error kinds, same messages.
const RESOLVER_JS: &str = r#"(function () {
  var routes = __ROUTES__;
  var tokenRe = /\{(?:([A-Za-z_][A-Za-z0-9_]*):)?([A-Za-z_][A-Za-z0-9_]*)\}/g;
  var has = Object.prototype.hasOwnProperty;
  function fail(kind, message) {
    var err = new Error(message);
    err.name = kind;
    throw err;
  }
  window.__GLOBAL__ = routes;
  window.resolveUrl = function (name, args) {
    if (!has.call(routes, name)) {
      fail("RouteNotFoundError", "route not found: " + name);
    }
    var pattern = routes[name];
    var tokens = [];
    var m;
    tokenRe.lastIndex = 0;
    while ((m = tokenRe.exec(pattern)) !== null) {
      tokens.push({ name: m[2], start: m.index, end: m.index + m[0].length });
    }
    if (tokens.length === 0) {
      if (args !== undefined) {
        fail("UnexpectedArgumentError", "route '" + name + "' takes no arguments");
      }
      return pattern;
    }
    var values = [];
    if (args !== null && typeof args === "object" && !Array.isArray(args)) {
      var names = {};
      for (var i = 0; i < tokens.length; i++) {
        var key = tokens[i].name;
        if (!has.call(args, key)) {
          fail("MissingArgumentError", "missing argument '" + key + "' for route '" + name + "'");
        }
        names[key] = true;
        values.push(String(args[key]));
      }
      for (var k in args) {
        if (has.call(args, k) && !has.call(names, k)) {
          fail("UnexpectedArgumentError", "unexpected argument '" + k + "' for route '" + name + "'");
        }
      }
    } else {
      var list = Array.isArray(args) ? args : (args === undefined ? [] : Array.prototype.slice.call(arguments, 1));
      if (list.length !== tokens.length) {
        fail("ArgumentCountMismatchError", "route '" + name + "' expects " + tokens.length + " argument(s), got " + list.length);
      }
      for (var j = 0; j < list.length; j++) {
        values.push(String(list[j]));
      }
    }
    var url = "";
    var cursor = 0;
    for (var t = 0; t < tokens.length; t++) {
      url += pattern.slice(cursor, tokens[t].start) + values[t];
      cursor = tokens[t].end;
    }
    return url + pattern.slice(cursor);
  };
})();
"#;

/// Template markers, filled in a single pass so inserted text is never re-scanned
static MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"__(ROUTES|GLOBAL)__").expect("marker pattern is a valid regex"));

/// Renders the script body: route table plus `window.resolveUrl`
///
/// The table JSON is made safe for inline `<script>` use, so a pattern
/// containing `</script>` cannot close the tag.
///
/// # Examples
///
/// ```
/// use rhtmx_url::{render_router_script, RouteTable, ScriptOptions};
///
/// let table = RouteTable::builder().route("home", "/").build();
/// let js = render_router_script(&table, &ScriptOptions::default()).unwrap();
///
/// assert!(js.contains(r#"var routes = {"home":"/"};"#));
/// assert!(js.contains("window.routes = routes;"));
/// ```
pub fn render_router_script(table: &RouteTable, options: &ScriptOptions) -> Result<String> {
    validate_global_name(&options.global_name)?;

    let json = if options.minify {
        table.to_json()?
    } else {
        table.to_json_pretty()?
    };

    let routes = escape_for_script(&json);
    let script = MARKER_RE
        .replace_all(RESOLVER_JS, |caps: &Captures| match &caps[1] {
            "ROUTES" => routes.clone(),
            _ => options.global_name.clone(),
        })
        .into_owned();

    Ok(if options.minify {
        minify_lines(&script)
    } else {
        script
    })
}

/// Same as [`render_router_script`], wrapped in a `<script>` element
pub fn render_router_tag(table: &RouteTable, options: &ScriptOptions) -> Result<String> {
    let body = render_router_script(table, options)?;
    Ok(format!("<script>{}</script>", body))
}

fn validate_global_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid_start = chars
        .next()
        .map(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        .unwrap_or(false);
    let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');

    if !valid_start || !valid_rest {
        return Err(UrlError::InvalidScriptOption(format!(
            "global name '{}' is not a JavaScript identifier",
            name
        )));
    }
    if name == RESOLVER_FUNCTION {
        return Err(UrlError::InvalidScriptOption(format!(
            "global name '{}' would replace the resolver function",
            name
        )));
    }
    Ok(())
}

/// Escapes characters that could end the script element or break JS parsing
///
/// Only valid inside JSON strings, which is the only place these characters
/// can appear in serialized output.
fn escape_for_script(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        }
    }
    out
}

/// Joins trimmed lines; every line of the template ends a statement or block
fn minify_lines(script: &str) -> String {
    script
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}
