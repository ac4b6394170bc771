use parprime_compute::{compute_primes, is_prime, CostModel, PrimeEngine, PrimeError};
use parprime_core::sequential_primes;

use crate::helpers::is_strictly_ascending;

#[test]
fn matches_sequential_baseline() {
    for max in [0i64, 1, 2, 3, 4, 5, 10, 20, 97, 98, 1_000, 7_919, 7_920, 65_536, 200_000] {
        let expected = sequential_primes(max).unwrap();
        let computed = compute_primes(max).unwrap();
        assert_eq!(computed.as_slice(), expected.as_slice(), "max={}", max);
    }
}

#[test]
fn every_setting_matches_baseline() {
    let max = 50_000;
    let expected = sequential_primes(max).unwrap();
    for model in [CostModel::Uniform, CostModel::Linear, CostModel::SquareRoot] {
        for workers in [1usize, 2, 5, 8] {
            for overs in [1usize, 3, 16] {
                let engine = PrimeEngine::new(workers)
                    .unwrap()
                    .with_oversubscription(overs)
                    .unwrap()
                    .with_cost_model(model);
                let computed = engine.compute(max).unwrap();
                assert_eq!(
                    computed.as_slice(),
                    expected.as_slice(),
                    "model={} workers={} overs={}",
                    model,
                    workers,
                    overs
                );
            }
        }
    }
}

#[test]
fn output_is_strictly_ascending() {
    let primes = compute_primes(300_000).unwrap();
    assert_eq!(primes.len(), 25_997);
    assert!(is_strictly_ascending(primes.as_slice()));
    assert_eq!(primes.iter().next(), Some(2));
}

#[test]
fn repeated_calls_are_identical() {
    let engine = PrimeEngine::new(6).unwrap();
    let first = engine.compute(120_000).unwrap();
    for _ in 0..5 {
        assert_eq!(engine.compute(120_000).unwrap(), first);
    }
}

#[test]
fn result_can_be_iterated_twice() {
    let primes = compute_primes(100).unwrap();
    let a: Vec<u64> = (&primes).into_iter().collect();
    let b: Vec<u64> = primes.iter().collect();
    assert_eq!(a, b);
    assert_eq!(a.len(), 25);
}

#[test]
fn more_workers_than_candidates() {
    let engine = PrimeEngine::new(32).unwrap();
    assert_eq!(engine.compute(5).unwrap().as_slice(), &[2, 3]);
}

#[test]
fn oracle_export() {
    assert_eq!(is_prime(-1), Err(PrimeError::NegativeCandidate(-1)));
    assert_eq!(is_prime(1), Ok(false));
    assert_eq!(is_prime(2), Ok(true));
    assert_eq!(is_prime(9), Ok(false));
}
