//! End-to-end experiment tests.
//!
//! Reduced experiment matrices driven through the public runner and report
//! surface: result-grid shape, cross-run determinism, CSV structure on disk,
//! and the reference scenarios for AVL height, hash-bucket clustering, and
//! worst-case linear search.

use std::fs;

use keybench::benchmark::{generate_records, ExperimentConfig, ExperimentRunner, Operation};
use keybench::{report, AVLTree, HashFunction, HashTable, LinearArray, Record};

fn small_config() -> ExperimentConfig {
    ExperimentConfig {
        data_sizes: vec![200, 300],
        rounds: 2,
        search_sample_cap: 50,
        bucket_counts: vec![10, 100],
        hash_functions: vec![HashFunction::Division, HashFunction::Folding],
        seed: 42,
    }
}

// =============================================================================
// Matrix shape
// =============================================================================

#[test]
fn small_matrix_produces_the_expected_result_grid() {
    let mut runner = ExperimentRunner::new(small_config()).expect("config should validate");
    runner.run().expect("run should succeed");

    // Per size: LinearArray, BST, AVL, and 2x2 hash cells, twice (insert+search).
    let results = runner.results();
    assert_eq!(results.len(), 28);

    let inserts = results
        .iter()
        .filter(|r| r.operation == Operation::Insert)
        .count();
    assert_eq!(inserts, 14);

    for result in results {
        assert_eq!(result.rounds.len(), 2);
        assert!(result.data_size == 200 || result.data_size == 300);
    }
    assert!(results[..14].iter().all(|r| r.data_size == 200));
    assert!(results[14..].iter().all(|r| r.data_size == 300));
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn repeated_runs_reproduce_every_deterministic_signal() {
    let mut first = ExperimentRunner::new(small_config()).expect("config should validate");
    first.run().expect("run should succeed");
    let mut second = ExperimentRunner::new(small_config()).expect("config should validate");
    second.run().expect("run should succeed");

    let first = first.into_results();
    let second = second.into_results();
    assert_eq!(first.len(), second.len());

    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.variant, b.variant);
        assert_eq!(a.data_size, b.data_size);
        assert_eq!(a.operation, b.operation);
        for (ra, rb) in a.rounds.iter().zip(b.rounds.iter()) {
            // Everything but time and memory is seed-determined.
            assert_eq!(ra.iterations, rb.iterations);
            assert_eq!(ra.tree_height, rb.tree_height);
            assert_eq!(ra.load_factor, rb.load_factor);
            assert_eq!(ra.collision_rate, rb.collision_rate);
            assert_eq!(ra.avg_chain_length, rb.avg_chain_length);
            assert_eq!(ra.max_chain_length, rb.max_chain_length);
        }
    }
}

// =============================================================================
// CSV output
// =============================================================================

#[test]
fn csv_files_land_on_disk_with_uniform_columns() {
    let mut runner = ExperimentRunner::new(small_config()).expect("config should validate");
    runner.run().expect("run should succeed");
    let results = runner.into_results();

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let summary_path = dir.path().join(report::SUMMARY_FILENAME);
    let details_path = dir.path().join(report::DETAILS_FILENAME);
    report::write_summary(&results, &summary_path).expect("summary write should succeed");
    report::write_details(&results, &details_path).expect("details write should succeed");

    let summary = fs::read_to_string(&summary_path).expect("summary should be readable");
    let header = summary.lines().next().expect("summary header");
    assert!(header.starts_with("structure,data_size,operation,mean_time"));
    assert!(header.ends_with("balanced,tree_height"));
    assert_eq!(summary.lines().count(), results.len() + 1);
    for line in summary.lines() {
        assert_eq!(line.split(',').count(), 14, "line: {line}");
    }

    let details = fs::read_to_string(&details_path).expect("details should be readable");
    let total_rounds: usize = results.iter().map(|r| r.rounds.len()).sum();
    assert_eq!(details.lines().count(), total_rounds + 1);
    for line in details.lines() {
        assert_eq!(line.split(',').count(), 15, "line: {line}");
    }
}

#[test]
fn summary_iterations_are_the_truncated_round_mean() {
    let mut runner = ExperimentRunner::new(small_config()).expect("config should validate");
    runner.run().expect("run should succeed");
    let results = runner.into_results();

    let summary = report::summary_csv(&results);
    for (result, line) in results.iter().zip(summary.lines().skip(1)) {
        let n = result.rounds.len() as u64;
        let expected = result.rounds.iter().map(|r| r.iterations).sum::<u64>() / n;
        let field: u64 = line
            .split(',')
            .nth(5)
            .expect("mean_iterations field")
            .parse()
            .expect("mean_iterations should be an integer");
        assert_eq!(field, expected);
    }
}

// =============================================================================
// Reference scenarios
// =============================================================================

#[test]
fn avl_holds_its_height_bound_on_a_thousand_records() {
    let records = generate_records(1000, 42);
    let mut avl = AVLTree::new();
    for record in records {
        avl.insert(record);
    }

    let bound = (1.44 * 1002f64.log2()).ceil() as usize;
    assert!(
        avl.height() <= bound,
        "height {} exceeds bound {}",
        avl.height(),
        bound
    );

    let keys = avl.in_order_keys();
    assert_eq!(keys.len(), 1000);
    assert!(keys.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn division_table_clusters_round_keys_into_bucket_zero() {
    let mut table = HashTable::new(100, HashFunction::Division).expect("valid bucket count");
    for key in [100, 200, 300] {
        assert_eq!(table.bucket_index(key), 0);
        table.insert(Record::new(key, format!("R{key}"), 5000.0, 10));
    }

    assert_eq!(table.collisions(), 2);
    let stats = table.stats();
    assert!((stats.load_factor - 0.03).abs() < 1e-12);
    assert_eq!(stats.max_chain_length, 3);
}

#[test]
fn linear_search_for_the_last_of_500_records_costs_500() {
    let records = generate_records(500, 42);
    let last_key = records.last().expect("500 records").key;

    let mut array = LinearArray::new();
    for record in records {
        array.insert(record);
    }

    let (found, iterations) = array.search(last_key);
    assert!(found.is_some());
    assert_eq!(iterations, 500);
}
