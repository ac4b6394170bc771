use std::sync::Arc;

use parprime_compute::{ComputeError, PrimeEngine};

use crate::helpers::LifecycleHook;

#[test]
fn every_worker_joined_before_return() {
    let hook = Arc::new(LifecycleHook::default());
    let engine = PrimeEngine::new(4)
        .unwrap()
        .with_oversubscription(4)
        .unwrap()
        .with_hook(hook.clone());

    for _ in 0..3 {
        engine.compute(100_000).unwrap();
        assert_eq!(hook.alive(), 0);
    }
    // A fresh pool per call.
    assert_eq!(hook.started(), 12);
    assert_eq!(hook.chunks(), 48);
}

#[test]
fn trivial_bounds_start_no_threads() {
    let hook = Arc::new(LifecycleHook::default());
    let engine = PrimeEngine::new(4).unwrap().with_hook(hook.clone());
    for max in [0, 1] {
        assert!(engine.compute(max).unwrap().is_empty());
    }
    assert_eq!(hook.started(), 0);
}

#[test]
fn invalid_bound_starts_no_threads() {
    let hook = Arc::new(LifecycleHook::default());
    let engine = PrimeEngine::new(4).unwrap().with_hook(hook.clone());
    let err = engine.compute(-10).unwrap_err();
    assert!(matches!(err, ComputeError::InvalidInput(_)));
    assert_eq!(hook.started(), 0);
}

#[test]
fn concurrent_calls_use_separate_pools() {
    let hook = Arc::new(LifecycleHook::default());
    let engine = PrimeEngine::new(2).unwrap().with_hook(hook.clone());

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| engine.compute(40_000).unwrap()))
            .collect();
        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(results.windows(2).all(|w| w[0] == w[1]));
    });

    assert_eq!(hook.started(), 8);
    assert_eq!(hook.alive(), 0);
}
