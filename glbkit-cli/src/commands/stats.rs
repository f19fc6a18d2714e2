//! Compact per-mesh element tallies

use std::path::Path;

use glbkit::inspect::inspect_glb;

use super::{display_name, group_digits, print_summary};

pub fn execute(path: &Path) -> anyhow::Result<()> {
    println!("=== GLB Stats ===\n");
    println!("File: {}\n", path.display());

    let report = inspect_glb(path)?;
    print_summary(&report);

    if let Some(tallies) = &report.mesh_elements {
        println!();
        println!("=== Meshes ({}) ===", tallies.len());
        for (idx, tally) in tallies.iter().enumerate() {
            let counts: Vec<String> = tally
                .counts
                .iter()
                .map(|(element_type, count)| format!("{element_type} {}", group_digits(*count)))
                .collect();
            println!(
                "[{idx:>4}] {:<25}  {:>4}P  {}",
                display_name(tally.name.as_deref()),
                tally.primitive_count,
                counts.join("  ")
            );
        }
    }

    Ok(())
}
