//! CSV export of experiment results.
//!
//! Two tables:
//! - **Summary** (one row per result): mean statistics across rounds.
//! - **Details** (one row per round): the raw per-round measurements, with a
//!   1-based `round` column.
//!
//! Both share one column set. Fields that do not apply to a row are left
//! blank rather than omitted, so every row has the same column count and the
//! files load cleanly into any tabular tool. Rendering is separate from file
//! I/O: the `*_csv` functions build the full document in memory and the
//! `write_*` functions put it on disk.

use std::fs;
use std::path::Path;

use crate::benchmark::{ExperimentResult, PerformanceMetrics, StructureVariant};
use crate::error::Result;

/// Default summary table filename.
pub const SUMMARY_FILENAME: &str = "experiment_results.csv";
/// Default detail table filename.
pub const DETAILS_FILENAME: &str = "experiment_details.csv";

const SUMMARY_HEADER: &str = "structure,data_size,operation,mean_time,memory_usage_mb,\
mean_iterations,hash_table_size,hash_function,load_factor,collision_rate,\
avg_chain_length,max_chain_length,balanced,tree_height";

const DETAILS_HEADER: &str = "structure,data_size,operation,round,execution_time,\
memory_usage_mb,iterations,hash_table_size,hash_function,load_factor,collision_rate,\
avg_chain_length,max_chain_length,balanced,tree_height";

/// Render the summary table: one row of mean statistics per result.
pub fn summary_csv(results: &[ExperimentResult]) -> String {
    let mut out = String::from(SUMMARY_HEADER);
    out.push('\n');

    for result in results {
        let stats = result.mean();
        let mut fields = vec![
            result.variant.name().to_string(),
            result.data_size.to_string(),
            result.operation.name().to_string(),
            format!("{:.6}", stats.execution_time),
            format!("{:.3}", stats.memory_usage_mb),
            stats.iterations.to_string(),
        ];
        push_structure_fields(&mut fields, result.variant, &stats);
        out.push_str(&fields.join(","));
        out.push('\n');
    }

    out
}

/// Render the detail table: one row per round of every result.
pub fn details_csv(results: &[ExperimentResult]) -> String {
    let mut out = String::from(DETAILS_HEADER);
    out.push('\n');

    for result in results {
        for (index, round) in result.rounds.iter().enumerate() {
            let mut fields = vec![
                result.variant.name().to_string(),
                result.data_size.to_string(),
                result.operation.name().to_string(),
                (index + 1).to_string(),
                format!("{:.6}", round.execution_time),
                format!("{:.3}", round.memory_usage_mb),
                round.iterations.to_string(),
            ];
            push_structure_fields(&mut fields, result.variant, round);
            out.push_str(&fields.join(","));
            out.push('\n');
        }
    }

    out
}

/// Write the summary table to `path`.
pub fn write_summary<P: AsRef<Path>>(results: &[ExperimentResult], path: P) -> Result<()> {
    fs::write(path, summary_csv(results))?;
    Ok(())
}

/// Write the detail table to `path`.
pub fn write_details<P: AsRef<Path>>(results: &[ExperimentResult], path: P) -> Result<()> {
    fs::write(path, details_csv(results))?;
    Ok(())
}

/// The eight structure-specific tail columns, blank where not applicable.
fn push_structure_fields(
    fields: &mut Vec<String>,
    variant: StructureVariant,
    metrics: &PerformanceMetrics,
) {
    match variant {
        StructureVariant::Hash { buckets, function } => {
            fields.push(buckets.to_string());
            fields.push(function.name().to_string());
            fields.push(format!("{:.3}", metrics.load_factor));
            fields.push(format!("{:.3}", metrics.collision_rate));
            fields.push(format!("{:.3}", metrics.avg_chain_length));
            fields.push(metrics.max_chain_length.to_string());
            fields.push(String::new());
            fields.push(String::new());
        }
        StructureVariant::Tree { balanced } => {
            for _ in 0..6 {
                fields.push(String::new());
            }
            fields.push(balanced.to_string());
            fields.push(metrics.tree_height.to_string());
        }
        StructureVariant::Linear => {
            for _ in 0..8 {
                fields.push(String::new());
            }
        }
    }
}
