//! End-to-end failure routing
//!
//! Exercises the public surface the way guard-predicate callers use it:
//! checks built on the `ensure*` family, routed through `Route`, and
//! reduced through `Validator`.

use recourse_core::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Guard in the style of the external predicate layer: every failure
/// routes through the assertion primitive with a captured value.
fn guard_port(candidate: i64) -> Result<u16, Fault> {
    ensure_value(
        (0..=65535).contains(&candidate),
        "port out of range",
        &candidate,
    )?;
    Ok(u16::try_from(candidate).map_err(anyhow::Error::from)?)
}

fn guard_name(name: &str) -> Result<(), Fault> {
    ensure_msg(!name.is_empty(), "name must not be empty")?;
    ensure_value(name.len() <= 32, "name too long", &name)?;
    Ok(())
}

#[test]
fn success_passes_through_unchanged() {
    let result = Route::new(0).run(|| Ok(42));
    assert_eq!(result.unwrap(), 42);
}

#[test]
fn body_after_failing_check_never_executes() {
    let executed = Arc::new(AtomicUsize::new(0));
    let probe = Arc::clone(&executed);

    let result = Route::new(0).run(|| {
        ensure(false)?;
        probe.fetch_add(1, Ordering::SeqCst);
        Ok(99)
    });

    assert_eq!(result.unwrap(), 0);
    assert_eq!(executed.load(Ordering::SeqCst), 0);
}

#[test]
fn guard_failure_routes_to_fallback() {
    let result = Route::new(8080_u16).run(|| guard_port(70000));
    assert_eq!(result.unwrap(), 8080);

    let result = Route::new(8080_u16).run(|| guard_port(443));
    assert_eq!(result.unwrap(), 443);
}

#[test]
fn unexpected_error_propagates_with_identity() {
    #[derive(Debug, thiserror::Error)]
    #[error("io exploded")]
    struct IoExploded;

    let result: RouteResult<i32> =
        Route::new(0).run(|| Err(Fault::Unexpected(anyhow::Error::new(IoExploded))));

    let error = result.unwrap_err();
    assert!(error.downcast_ref::<IoExploded>().is_some());
}

#[test]
fn unexpected_error_recovered_when_opted_in() {
    let result: RouteResult<i32> = Route::new(0)
        .with_options(RouteOptions::new().recover_unexpected())
        .run(|| Err(anyhow::anyhow!("boom").into()));
    assert_eq!(result.unwrap(), 0);
}

#[test]
fn failure_message_carries_value_summary() {
    let failure = ensure_value(false, "custom", &[1, 2, 3, 4]).unwrap_err();
    assert!(failure
        .message()
        .contains("custom (got: array(len=4, sample=[1, 2, 3]…"));
}

#[test]
fn observer_sees_the_failure_that_was_routed() {
    let messages = Arc::new(std::sync::Mutex::new(Vec::new()));
    let sink = Arc::clone(&messages);

    let wrapped = Route::new(0_u16)
        .on_failure(move |failure| sink.lock().unwrap().push(failure.message().to_string()))
        .wrap(guard_port);

    assert_eq!(wrapped(-1).unwrap(), 0);
    assert_eq!(wrapped(80).unwrap(), 80);
    assert_eq!(wrapped(100_000).unwrap(), 0);

    let seen = messages.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert!(seen.iter().all(|m| m.starts_with("port out of range")));
}

#[test]
fn validator_reduces_assertions_to_bool() {
    let valid_name = Validator::new()
        .rule(|name: &String| guard_name(name))
        .rule(|name: &String| Ok(ensure_msg(!name.contains(' '), "no spaces")?));

    assert!(valid_name.check(&"alice".to_string()).unwrap());
    assert!(!valid_name.check(&String::new()).unwrap());
    assert!(!valid_name.check(&"a b".to_string()).unwrap());
}

#[test]
fn validator_re_raises_non_failure() {
    let validator = Validator::new()
        .rule(|_: &i32| Ok(()))
        .rule(|_: &i32| Err(anyhow::anyhow!("rule panicked").into()));

    assert!(validator.check(&1).is_err());
}

#[tokio::test]
async fn async_route_mirrors_sync_contract() {
    // resolves
    let result = Route::new(0).run_async(async { Ok(42) }).await;
    assert_eq!(result.unwrap(), 42);

    // fails before any suspension
    let result = Route::new(0)
        .run_async(async {
            ensure(false)?;
            Ok(99)
        })
        .await;
    assert_eq!(result.unwrap(), 0);

    // fails after a suspension
    let result = Route::new(0)
        .run_async(async {
            tokio::task::yield_now().await;
            guard_port(-5)?;
            Ok(99)
        })
        .await;
    assert_eq!(result.unwrap(), 0);
}

#[tokio::test]
async fn async_unexpected_still_fatal_by_default() {
    let result: RouteResult<i32> = Route::new(0)
        .run_async(async {
            tokio::task::yield_now().await;
            Err(anyhow::anyhow!("rejected late").into())
        })
        .await;
    assert_eq!(result.unwrap_err().to_string(), "rejected late");
}

#[tokio::test]
async fn wrapped_async_guard_is_reusable() {
    let fired = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&fired);

    let fetch = Route::new(8080_u16)
        .on_failure(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .wrap_async(|candidate: i64| async move {
            tokio::task::yield_now().await;
            guard_port(candidate)
        });

    assert_eq!(fetch(443).await.unwrap(), 443);
    assert_eq!(fetch(-1).await.unwrap(), 8080);
    assert_eq!(fetch(22).await.unwrap(), 22);
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}
