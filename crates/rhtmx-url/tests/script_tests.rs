//! Behavior tests for the page-embedded router script
//!
//! The rendered script is evaluated in an embedded JavaScript engine and
//! `window.resolveUrl` is checked against the Rust resolver:
//! - Static routes and unknown names
//! - Named, array and variadic arguments
//! - Error kinds and messages
//! - Escaped route patterns

use boa_engine::{Context, Source};
use pretty_assertions::assert_eq;
use rhtmx_url::{render_router_script, route_args, RouteTable, ScriptOptions, UrlError};
use rstest::{fixture, rstest};

#[fixture]
fn table() -> RouteTable {
    RouteTable::builder()
        .route("home", "/")
        .route("about", "/about")
        .route("user.show", "/users/{id}")
        .route("post.show", "/users/{id}/posts/{postId}")
        .route("item.show", "/items/{int:id}")
        .route("docs.page", "/{lang}/docs/{path:page}/{lang}")
        .route("evil", "/</script>&")
        .build()
}

/// Page with the router script loaded
struct Page {
    context: Context,
}

impl Page {
    fn load(table: &RouteTable, options: &ScriptOptions) -> Self {
        let script = render_router_script(table, options).unwrap();
        let mut context = Context::default();
        context
            .eval(Source::from_bytes("var window = globalThis;"))
            .unwrap();
        context.eval(Source::from_bytes(&script)).unwrap();
        Self { context }
    }

    /// Evaluates an expression to a string
    fn eval(&mut self, expr: &str) -> String {
        let value = self.context.eval(Source::from_bytes(expr)).unwrap();
        value
            .as_string()
            .map(|s| s.to_std_string_escaped())
            .unwrap_or_else(|| panic!("`{}` did not evaluate to a string", expr))
    }

    /// Runs a `resolveUrl` call: `ok:<url>` or `<ErrorName>:<message>`
    fn call(&mut self, call: &str) -> String {
        self.eval(&format!(
            "(function () {{ try {{ return 'ok:' + window.resolveUrl({}); }} \
             catch (e) {{ return e.name + ':' + e.message; }} }})()",
            call
        ))
    }
}

#[fixture]
fn page(table: RouteTable) -> Page {
    Page::load(&table, &ScriptOptions::default())
}

fn kind(result: &str) -> &str {
    result.split(':').next().unwrap_or_default()
}

// ============================================================================
// Resolution
// ============================================================================

#[rstest]
#[case(r#""home""#, "ok:/")]
#[case(r#""about""#, "ok:/about")]
#[case(r#""post.show", {id: 5, postId: 9}"#, "ok:/users/5/posts/9")]
#[case(r#""post.show", [5, 9]"#, "ok:/users/5/posts/9")]
#[case(r#""post.show", 5, 9"#, "ok:/users/5/posts/9")]
#[case(r#""user.show", 7"#, "ok:/users/7")]
#[case(r#""item.show", {id: 3}"#, "ok:/items/3")]
#[case(r#""docs.page", {lang: "en", page: "intro"}"#, "ok:/en/docs/intro/en")]
#[case(r#""docs.page", "en", "intro", "fr""#, "ok:/en/docs/intro/fr")]
#[case(r#""post.show", {id: "{postId}", postId: 9}"#, "ok:/users/{postId}/posts/9")]
#[case(r#""evil""#, "ok:/</script>&")]
fn test_script_resolves(mut page: Page, #[case] call: &str, #[case] expected: &str) {
    assert_eq!(page.call(call), expected);
}

// ============================================================================
// Error kinds
// ============================================================================

#[rstest]
#[case(r#""missing""#, "RouteNotFoundError")]
#[case(r#""Home""#, "RouteNotFoundError")]
#[case(r#""about", {}"#, "UnexpectedArgumentError")]
#[case(r#""about", []"#, "UnexpectedArgumentError")]
#[case(r#""about", 1"#, "UnexpectedArgumentError")]
#[case(r#""about", null"#, "UnexpectedArgumentError")]
#[case(r#""user.show", {id: 5, tab: "posts"}"#, "UnexpectedArgumentError")]
#[case(r#""post.show", {id: 5}"#, "MissingArgumentError")]
#[case(r#""post.show", {id: 5, post_id: 9}"#, "MissingArgumentError")]
#[case(r#""post.show", [5]"#, "ArgumentCountMismatchError")]
#[case(r#""post.show", 5"#, "ArgumentCountMismatchError")]
#[case(r#""user.show""#, "ArgumentCountMismatchError")]
fn test_script_error_kinds(mut page: Page, #[case] call: &str, #[case] expected: &str) {
    assert_eq!(kind(&page.call(call)), expected);
}

#[rstest]
fn test_script_messages_match_rust(mut page: Page, table: RouteTable) {
    let missing = table
        .resolve("post.show", Some(&route_args! { "id" => 5 }))
        .unwrap_err();
    assert_eq!(
        page.call(r#""post.show", {id: 5}"#),
        format!("MissingArgumentError:{}", missing)
    );

    let extra = table
        .resolve("user.show", Some(&route_args! { "id" => 5, "tab" => "posts" }))
        .unwrap_err();
    assert!(matches!(extra, UrlError::UnexpectedArgument { .. }));
    assert_eq!(
        page.call(r#""user.show", {id: 5, tab: "posts"}"#),
        format!("UnexpectedArgumentError:{}", extra)
    );
}

// ============================================================================
// Script options
// ============================================================================

#[rstest]
#[case(true)]
#[case(false)]
fn test_script_installs_table(table: RouteTable, #[case] minify: bool) {
    let options = ScriptOptions {
        global_name: "appRoutes".to_string(),
        minify,
    };
    let mut page = Page::load(&table, &options);

    assert_eq!(
        page.eval("JSON.stringify(window.appRoutes)"),
        table.to_json().unwrap()
    );
    assert_eq!(page.call(r#""post.show", [5, 9]"#), "ok:/users/5/posts/9");
}
