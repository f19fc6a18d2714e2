use clap::Subcommand;
use std::path::PathBuf;

use glbkit::inspect::GlbReport;

pub mod inspect;
pub mod stats;

#[derive(Subcommand)]
pub enum Commands {
    /// Full structural report for a GLB file
    Inspect {
        /// GLB file to inspect
        file: PathBuf,
    },

    /// Compact per-mesh element tallies for a GLB file
    Stats {
        /// GLB file to summarize
        file: PathBuf,
    },
}

impl Commands {
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Inspect { file } => inspect::execute(file),
            Commands::Stats { file } => stats::execute(file),
        }
    }
}

/// Format a count with thousands separators (e.g. 1,234,567)
pub(crate) fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Quote a name for a listing row, or mark it unnamed
pub(crate) fn display_name(name: Option<&str>) -> String {
    name.map_or_else(|| "<unnamed>".to_string(), |n| format!("\"{n}\""))
}

/// Print the summary block shared by both reports: sizes, asset info,
/// warnings, and element counts.
pub(crate) fn print_summary(report: &GlbReport) {
    println!("Declared size: {} bytes", group_digits(report.declared_length.into()));
    if report.has_size_mismatch() {
        println!(
            "Warning: declared size does not match actual file size ({} bytes)!",
            group_digits(report.file_size)
        );
    }
    println!("JSON chunk: {} bytes", group_digits(report.json_chunk_length.into()));

    println!();
    println!("Asset version: {}", report.asset_version);
    println!("Asset generator: \"{}\"", report.asset_generator);
    if report.has_version_mismatch() {
        println!("Warning: asset version is not 2.0, continuing anyway");
    }

    println!();
    println!("=== Elements ===");
    println!("{:>4} nodes", report.counts.nodes);
    if let Some(count) = report.counts.cameras {
        println!("{count:>4} cameras");
    }
    if let Some(count) = report.counts.images {
        let total = report.total_image_bytes.unwrap_or(0);
        println!("{:>4} images     (total {} bytes)", count, group_digits(total));
    }
    if let Some(count) = report.counts.materials {
        println!("{count:>4} materials");
    }
    if let Some(count) = report.counts.meshes {
        println!("{count:>4} meshes");
    }
    if let Some(count) = report.counts.textures {
        println!("{count:>4} textures");
    }

    println!();
    println!(
        "{:>4} buffers    (total {} bytes)",
        report.buffers.len(),
        group_digits(report.total_buffer_bytes)
    );
    println!(
        "{:>4} accessors  (total {} bytes)",
        report.accessors.len(),
        group_digits(report.total_accessor_bytes)
    );
}
