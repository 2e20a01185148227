use route_resolver_rs::{Route, RouteParams, Router, RouterOptions};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn counting_router(calls: Arc<AtomicUsize>, options: Option<RouterOptions>) -> Router<String> {
    let counter = calls.clone();
    Router::new(
        vec![
            Route::new("/", |_: &RouteParams| "home".to_string()),
            Route::new("/users/:id", move |params: &RouteParams| {
                counter.fetch_add(1, Ordering::SeqCst);
                format!("user-{}", params["id"].as_deref().unwrap_or("?"))
            }),
        ],
        options,
    )
    .expect("router should build")
}

#[test]
fn router_when_cache_enabled_then_records_hits_and_misses() {
    let calls = Arc::new(AtomicUsize::new(0));
    let router = counting_router(calls.clone(), None);

    assert_eq!(router.cache_metrics(), Some((0, 0)));

    router.resolve("/users/1").expect("first lookup should succeed");
    assert_eq!(router.cache_metrics(), Some((0, 1)));

    router.resolve("/users/1").expect("second lookup should succeed");
    assert_eq!(router.cache_metrics(), Some((1, 1)));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn router_when_pathnames_differ_textually_then_cached_separately() {
    let calls = Arc::new(AtomicUsize::new(0));
    let router = counting_router(calls.clone(), None);

    let plain = router.resolve("/users/1").expect("plain");
    let trailing = router.resolve("/users/1/").expect("trailing slash");

    assert_eq!(*plain, *trailing);
    assert!(!Arc::ptr_eq(&plain, &trailing));
    assert_eq!(router.cached_len(), 2);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn router_when_lookup_fails_then_nothing_is_cached() {
    let calls = Arc::new(AtomicUsize::new(0));
    let router = counting_router(calls, None);

    assert!(router.resolve("/nope").is_err());
    assert!(router.resolve("/nope").is_err());
    assert_eq!(router.cached_len(), 0);
}

#[test]
fn router_when_cache_disabled_then_factory_runs_every_time() {
    let calls = Arc::new(AtomicUsize::new(0));
    let options = RouterOptions::builder()
        .cache_metadata(false)
        .build()
        .expect("options should build");
    let router = counting_router(calls.clone(), Some(options));

    let first = router.resolve("/users/5").expect("first");
    let second = router.resolve("/users/5").expect("second");

    assert_eq!(*first, "user-5");
    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(router.cache_metrics(), None);
    assert_eq!(router.cached_len(), 0);
}

#[test]
fn router_when_resolved_from_many_threads_then_all_share_one_instance() {
    let calls = Arc::new(AtomicUsize::new(0));
    let router = Arc::new(counting_router(calls, None));

    let results: Vec<Arc<String>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let router = router.clone();
                scope.spawn(move || router.resolve("/users/7").expect("resolve"))
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("thread should finish"))
            .collect()
    });

    let first = &results[0];
    assert!(results.iter().all(|meta| Arc::ptr_eq(meta, first)));
    assert_eq!(router.cached_len(), 1);
}
