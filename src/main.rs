//! Runs the full experiment matrix with the reference configuration and
//! writes the summary and per-round CSV tables to the working directory.

use std::process;

use keybench::benchmark::{ExperimentConfig, ExperimentRunner};
use keybench::report;

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run() -> keybench::Result<()> {
    let config = ExperimentConfig::default();
    print_header(&config);

    let mut runner = ExperimentRunner::new(config)?;
    runner.run()?;

    let results = runner.into_results();
    report::write_summary(&results, report::SUMMARY_FILENAME)?;
    report::write_details(&results, report::DETAILS_FILENAME)?;

    println!();
    println!("{}", "=".repeat(80));
    println!("Experiment complete");
    println!("{}", "=".repeat(80));
    println!();
    println!("Files written:");
    println!("  {} (mean statistics per configuration)", report::SUMMARY_FILENAME);
    println!("  {} (per-round measurements)", report::DETAILS_FILENAME);

    Ok(())
}

fn print_header(config: &ExperimentConfig) {
    println!("{}", "=".repeat(80));
    println!("Comparative benchmarks: keyed lookup structures");
    println!("{}", "=".repeat(80));
    println!();
    println!("Structures under test:");
    println!("  1. LinearArray (append + linear scan)");
    println!("  2. BST (unbalanced binary search tree)");
    println!("  3. AVL (height-balanced binary search tree)");
    println!(
        "  4. HashTable ({} hash functions x {} bucket counts)",
        config.hash_functions.len(),
        config.bucket_counts.len()
    );
    println!();
    let sizes: Vec<String> = config.data_sizes.iter().map(|size| size.to_string()).collect();
    println!("Dataset sizes: {} records", sizes.join(", "));
    println!("Rounds per configuration: {}", config.rounds);
    println!("{}", "-".repeat(80));
}
