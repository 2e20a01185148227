use route_resolver_rs::{ParamMap, Route, RouteParams, RouteSpec, RouteTable, Router};

const PATTERNS: &[&str] = &[
    "/",
    "/about",
    "/users/:id",
    "/users/:id/posts/:page?",
    "/orgs/:org/repos/:repo",
    "/search/:query?",
];

const PATHS: &[&str] = &[
    "/",
    "/about",
    "/users/42",
    "/users/42/posts",
    "/users/42/posts/3",
    "/orgs/rust-lang/repos/cargo",
    "/search",
    "/search/tries",
    "/users",
    "/users/42/comments",
    "/orgs/rust-lang",
    "/about/team",
];

fn trie_router() -> Router<(&'static str, RouteParams)> {
    let routes = PATTERNS
        .iter()
        .map(|&pattern| {
            Route::new(pattern, move |params: &RouteParams| (pattern, params.clone()))
        })
        .collect();
    Router::new(routes, None).expect("router should build")
}

fn linear_table() -> RouteTable {
    RouteTable::new(PATTERNS.iter().map(|&p| RouteSpec::new(p)).collect())
        .expect("table should build")
}

fn present(params: &RouteParams) -> ParamMap {
    params
        .iter()
        .filter_map(|(k, v)| v.as_ref().map(|v| (k.clone(), v.clone())))
        .collect()
}

#[test]
fn trie_and_linear_agree_on_unambiguous_patterns() {
    let router = trie_router();
    let table = linear_table();

    for path in PATHS {
        let trie = router.resolve(path).ok();
        let linear = table.match_route(path);

        match (trie, linear) {
            (Some(meta), Some(matched)) => {
                assert_eq!(meta.0, matched.spec.pattern, "pattern for {path}");
                assert_eq!(present(&meta.1), matched.params, "params for {path}");
            }
            (None, None) => {}
            (trie, linear) => panic!(
                "disagreement for {path}: trie={:?} linear={:?}",
                trie.map(|m| m.0),
                linear.map(|m| m.spec.pattern.clone())
            ),
        }
    }
}

#[test]
fn trie_and_linear_diverge_on_static_dynamic_siblings() {
    let patterns = ["/", "/users/:id", "/users/me"];
    let router = Router::new(
        patterns
            .iter()
            .map(|&pattern| Route::new(pattern, move |_: &RouteParams| pattern))
            .collect(),
        None,
    )
    .expect("router should build");
    let table = RouteTable::new(patterns.iter().map(|&p| RouteSpec::new(p)).collect())
        .expect("table should build");

    assert_eq!(*router.resolve("/users/me").expect("trie match"), "/users/me");
    let linear = table.match_route("/users/me").expect("linear match");
    assert_eq!(linear.spec.pattern, "/users/:id");
    assert_eq!(linear.params.get("id").map(String::as_str), Some("me"));
}
