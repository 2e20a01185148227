use route_resolver_rs::{ResolveError, Route, RouteParams, Router, RouterError};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Page {
    name: &'static str,
    params: RouteParams,
}

fn page(name: &'static str) -> impl Fn(&RouteParams) -> Page + Send + Sync + 'static {
    move |params: &RouteParams| Page {
        name,
        params: params.clone(),
    }
}

fn static_router() -> Router<Page> {
    Router::new(
        vec![
            Route::new("/", page("home")),
            Route::new("/about", page("about")),
            Route::new("/users/me", page("me")),
            Route::new("/docs/guide/intro", page("intro")),
        ],
        None,
    )
    .expect("router should build")
}

#[test]
fn router_when_static_route_registered_then_resolves_with_empty_params() {
    let router = static_router();

    for (path, name) in [
        ("/about", "about"),
        ("/users/me", "me"),
        ("/docs/guide/intro", "intro"),
    ] {
        let meta = router.resolve(path).expect("static route should resolve");
        assert_eq!(meta.name, name);
        assert!(meta.params.is_empty());
    }
}

#[test]
fn router_when_root_requested_then_returns_root_route() {
    let router = static_router();
    let meta = router.resolve("/").expect("root should resolve");
    assert_eq!(meta.name, "home");
}

#[test]
fn router_when_static_route_resolved_twice_then_returns_same_instance() {
    let router = static_router();
    let first = router.resolve("/about").expect("first resolve");
    let second = router.resolve("/about").expect("second resolve");
    assert!(Arc::ptr_eq(&first, &second));
}

#[test]
fn router_when_trailing_or_duplicate_slashes_then_resolves_same_route() {
    let router = static_router();
    for path in ["/about/", "//about", "about"] {
        let meta = router.resolve(path).expect("slash variants should resolve");
        assert_eq!(meta.name, "about");
    }
}

#[test]
fn router_when_path_unknown_then_returns_no_match() {
    let router = static_router();
    match router.resolve("/missing").expect_err("expected no match") {
        RouterError::Resolve(ResolveError::NoMatch { path }) => assert_eq!(path, "/missing"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn router_when_only_prefix_matches_then_returns_no_match() {
    let router = static_router();
    // intermediate node without a terminal route
    assert!(router.resolve("/docs/guide").is_err());
    assert!(router.resolve("/users").is_err());
}

#[test]
fn router_when_path_longer_than_route_then_returns_no_match() {
    let router = static_router();
    assert!(router.resolve("/about/team").is_err());
}

#[test]
fn router_when_case_differs_then_returns_no_match() {
    let router = static_router();
    assert!(router.resolve("/About").is_err());
}
