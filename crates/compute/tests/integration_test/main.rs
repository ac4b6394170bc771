/// Integration tests for the prime engine covering correctness against the
/// sequential baseline, ordering, determinism, and worker pool teardown.

mod correctness;
mod helpers;
mod resources;
