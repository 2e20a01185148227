use route_resolver_rs::{
    ResolveError, Route, RouteParams, Router, RouterError, RouterErrorCode,
};

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

fn param<'a>(meta: &'a Page, name: &str) -> Option<&'a str> {
    meta.params
        .get(name)
        .expect("parameter should be bound")
        .as_deref()
}

#[test]
fn router_when_required_parameter_present_then_extracts_value() {
    let router = Router::new(
        vec![
            Route::new("/", page("home")),
            Route::new("/users/:id", page("user")),
        ],
        None,
    )
    .expect("router should build");

    let meta = router.resolve("/users/42").expect("parameter route should match");
    assert_eq!(meta.name, "user");
    assert_eq!(meta.params.len(), 1);
    assert_eq!(param(&meta, "id"), Some("42"));
}

#[test]
fn router_when_required_parameter_missing_then_returns_no_match() {
    let router = Router::new(
        vec![
            Route::new("/", page("home")),
            Route::new("/users/:id", page("user")),
        ],
        None,
    )
    .expect("router should build");

    for path in ["/users/", "/users"] {
        let err = router.resolve(path).expect_err("expected no match");
        assert_eq!(err.code(), RouterErrorCode::NoMatch);
        match err {
            RouterError::Resolve(ResolveError::NoMatch { path: missed }) => {
                assert_eq!(missed, path)
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

#[test]
fn router_when_optional_parameter_omitted_then_binds_absent() {
    let router = Router::new(
        vec![
            Route::new("/", page("home")),
            Route::new("/posts/:id?", page("posts")),
        ],
        None,
    )
    .expect("router should build");

    let listing = router.resolve("/posts").expect("parent path should match");
    assert_eq!(listing.name, "posts");
    assert_eq!(listing.params.get("id"), Some(&None));

    let single = router.resolve("/posts/7").expect("optional value should match");
    assert_eq!(single.name, "posts");
    assert_eq!(param(&single, "id"), Some("7"));
}

#[test]
fn router_when_static_and_dynamic_siblings_then_static_wins() {
    let router = Router::new(
        vec![
            Route::new("/", page("home")),
            Route::new("/users/:id", page("user")),
            Route::new("/users/me", page("me")),
        ],
        None,
    )
    .expect("router should build");

    assert_eq!(router.resolve("/users/me").expect("static").name, "me");
    let other = router.resolve("/users/you").expect("dynamic");
    assert_eq!(other.name, "user");
    assert_eq!(param(&other, "id"), Some("you"));
}

#[test]
fn router_when_static_edge_dead_ends_then_does_not_backtrack() {
    let router = Router::new(
        vec![
            Route::new("/", page("home")),
            Route::new("/users/:id/posts", page("user_posts")),
            Route::new("/users/me/settings", page("settings")),
        ],
        None,
    )
    .expect("router should build");

    assert_eq!(
        router.resolve("/users/42/posts").expect("dynamic path").name,
        "user_posts"
    );
    // the static "me" edge is taken and never revisited
    assert!(router.resolve("/users/me/posts").is_err());
}

#[test]
fn router_when_multiple_parameters_then_extracts_each_by_position() {
    let router = Router::new(
        vec![
            Route::new("/", page("home")),
            Route::new("/orgs/:org/repos/:repo", page("repo")),
        ],
        None,
    )
    .expect("router should build");

    let meta = router
        .resolve("/orgs/rust-lang/repos/cargo")
        .expect("nested parameters should match");
    assert_eq!(param(&meta, "org"), Some("rust-lang"));
    assert_eq!(param(&meta, "repo"), Some("cargo"));
}

#[test]
fn router_when_routes_share_dynamic_position_then_both_resolve() {
    let router = Router::new(
        vec![
            Route::new("/", page("home")),
            Route::new("/users/:id", page("user")),
            Route::new("/users/:id/posts", page("posts")),
        ],
        None,
    )
    .expect("router should build");

    assert_eq!(router.resolve("/users/1").expect("user").name, "user");
    let posts = router.resolve("/users/1/posts").expect("posts");
    assert_eq!(posts.name, "posts");
    assert_eq!(param(&posts, "id"), Some("1"));
}

#[test]
fn router_when_root_optional_parameter_then_root_route_keeps_slash() {
    let router = Router::new(
        vec![
            Route::new("/", page("home")),
            Route::new("/:lang?", page("localized")),
        ],
        None,
    )
    .expect("router should build");

    assert_eq!(router.resolve("/").expect("root").name, "home");
    let localized = router.resolve("/fr").expect("language");
    assert_eq!(localized.name, "localized");
    assert_eq!(param(&localized, "lang"), Some("fr"));
}

#[test]
fn router_when_params_requested_then_factory_not_invoked() {
    let router = Router::new(
        vec![
            Route::new("/", page("home")),
            Route::new("/users/:id", page("user")),
        ],
        None,
    )
    .expect("router should build");

    let params = router.params_for("/users/9").expect("params should extract");
    assert_eq!(params.get("id"), Some(&Some("9".to_string())));
    assert_eq!(router.cached_len(), 0);
}
