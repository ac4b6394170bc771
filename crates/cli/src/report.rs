//! Comparison of a computed prime list against the sequential reference.
//!
//! Grading follows the lab harness: 3 points for perfect precision, 3 for
//! ordering, 6 for reaching the estimated speedup, all scaled by recall.

use std::collections::BTreeSet;
use std::fmt::Write;
use std::time::Duration;

use serde::Serialize;

use crate::runner::TestRun;

/// Lists longer than this are elided in the text report.
const MAX_LISTED: usize = 20;

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub label: String,
    pub primes: usize,
    pub elapsed_ms: u128,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub max: i64,
    pub iterations: u32,
    pub reference: RunSummary,
    pub computed: RunSummary,
    pub precision: f64,
    pub recall: f64,
    pub false_positives: Vec<u64>,
    pub false_negatives: Vec<u64>,
    pub sort_rate: f64,
    pub max_speedup: f64,
    pub estimated_speedup: f64,
    pub speedup: f64,
    pub grade: f64,
}

impl RunSummary {
    fn of(run: &TestRun) -> Self {
        Self {
            label: run.label.clone(),
            primes: run.primes.len(),
            elapsed_ms: run.elapsed.as_millis(),
        }
    }
}

/// Elements of `a` missing from `b`, in `a`'s order.
pub fn subtract(a: &[u64], b: &[u64]) -> Vec<u64> {
    let b: BTreeSet<u64> = b.iter().copied().collect();
    a.iter().copied().filter(|x| !b.contains(x)).collect()
}

/// Share of elements not smaller than their predecessor; the first element
/// counts as sorted. Lists of length 0 or 1 score 0.
pub fn sort_rate(values: &[u64]) -> f64 {
    if values.len() <= 1 {
        return 0.0;
    }
    let ordered = values.windows(2).filter(|w| w[0] <= w[1]).count();
    (1 + ordered) as f64 / values.len() as f64
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        1.0
    } else {
        numerator as f64 / denominator as f64
    }
}

fn speedup(reference: Duration, computed: Duration) -> f64 {
    // Sub-microsecond runs are timer noise.
    let floor = Duration::from_micros(1);
    reference.max(floor).as_secs_f64() / computed.max(floor).as_secs_f64()
}

pub fn compare(
    reference: &TestRun,
    computed: &TestRun,
    max: i64,
    iterations: u32,
    processors: usize,
) -> Report {
    let false_positives = subtract(&computed.primes, &reference.primes);
    let false_negatives = subtract(&reference.primes, &computed.primes);
    let true_positives = computed.primes.len() - false_positives.len();

    let precision = ratio(true_positives, true_positives + false_positives.len());
    let recall = ratio(true_positives, true_positives + false_negatives.len());
    let sort_rate = sort_rate(&computed.primes);

    let max_speedup = processors as f64;
    let estimated_speedup = max_speedup / 2.0;
    let speedup = speedup(reference.elapsed, computed.elapsed);

    let mut grade = 0.0;
    grade += 3.0 * if precision < 1.0 { 0.0 } else { 1.0 };
    grade += 3.0 * sort_rate;
    grade += 6.0 * speedup / estimated_speedup;
    grade *= recall;

    Report {
        max,
        iterations,
        reference: RunSummary::of(reference),
        computed: RunSummary::of(computed),
        precision,
        recall,
        false_positives,
        false_negatives,
        sort_rate,
        max_speedup,
        estimated_speedup,
        speedup,
        grade,
    }
}

fn percent(value: f64) -> i64 {
    (100.0 * value) as i64
}

fn list(values: &[u64]) -> String {
    let shown: Vec<String> = values.iter().take(MAX_LISTED).map(u64::to_string).collect();
    if values.len() > MAX_LISTED {
        format!("[{}, ... ({} more)]", shown.join(", "), values.len() - MAX_LISTED)
    } else {
        format!("[{}]", shown.join(", "))
    }
}

pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    for run in [&report.reference, &report.computed] {
        writeln!(out, "{}:", run.label).ok();
        writeln!(out, "- #primes: {}", run.primes).ok();
        writeln!(out, "- elapsed: {} ms", run.elapsed_ms).ok();
    }

    writeln!(out, "correctness:").ok();
    writeln!(
        out,
        "- precision = {}%, false positives = {}",
        percent(report.precision),
        list(&report.false_positives)
    )
    .ok();
    writeln!(
        out,
        "- recall = {}%, false negatives = {}",
        percent(report.recall),
        list(&report.false_negatives)
    )
    .ok();
    writeln!(out, "- primes are sorted = {}%", percent(report.sort_rate)).ok();

    writeln!(out, "performance:").ok();
    writeln!(out, "- maximum theoretical speedup = {}", report.max_speedup).ok();
    writeln!(out, "- ESTIMATED solution speedup = {}", report.estimated_speedup).ok();
    writeln!(out, "- actual speedup = {:.2}", report.speedup).ok();

    writeln!(out, "*ESTIMATED* grade = {} / 12", report.grade as i64).ok();
    out
}
