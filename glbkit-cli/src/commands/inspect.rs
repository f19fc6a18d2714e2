//! Full GLB structural report

use std::path::Path;

use glbkit::inspect::{GlbReport, inspect_glb};

use super::{display_name, group_digits, print_summary};

pub fn execute(path: &Path) -> anyhow::Result<()> {
    println!("=== GLB Inspector ===\n");
    println!("File: {}\n", path.display());

    let report = inspect_glb(path)?;
    print_report(&report);

    Ok(())
}

fn print_report(report: &GlbReport) {
    print_summary(report);

    if let Some(images) = &report.images {
        println!();
        println!("=== Images ({}) ===", images.len());
        for (idx, image) in images.iter().enumerate() {
            println!(
                "[{idx:>4}] {:>11} bytes  {:<12} {}",
                group_digits(image.byte_length),
                image.mime_type,
                display_name(image.name.as_deref())
            );
        }
    }

    if let Some(meshes) = &report.meshes {
        println!();
        println!("=== Meshes ({}) ===", meshes.len());
        for (idx, mesh) in meshes.iter().enumerate() {
            let modes: Vec<&str> = mesh.modes.iter().map(|m| m.short_label()).collect();
            let mut row = format!(
                "[{idx:>4}] {:<25}  {:>4}P {:<5} {:>8}V {:>8}I",
                display_name(mesh.name.as_deref()),
                mesh.primitive_count,
                modes.join(","),
                group_digits(mesh.vertices),
                group_digits(mesh.indices)
            );
            if mesh.color0 > 0 {
                row.push_str(&format!(" {:>8}C0", group_digits(mesh.color0)));
            }
            if mesh.normals > 0 {
                row.push_str(&format!(" {:>8}N", group_digits(mesh.normals)));
            }
            if mesh.texcoord0 > 0 {
                row.push_str(&format!(" {:>8}T0", group_digits(mesh.texcoord0)));
            }
            if mesh.texcoord1 > 0 {
                row.push_str(&format!(" {:>8}T1", group_digits(mesh.texcoord1)));
            }
            println!("{row}");
        }
    }

    if let Some(materials) = &report.materials {
        println!();
        println!("=== Materials ({}) ===", materials.len());
        for (idx, material) in materials.iter().enumerate() {
            let double_sided = if material.double_sided { "2S" } else { "" };
            let slots: Vec<&str> = material
                .texture_slots
                .iter()
                .map(|s| s.short_label())
                .collect();
            let slots = if slots.is_empty() {
                String::new()
            } else {
                format!("[{}]", slots.join(" "))
            };
            println!(
                "[{idx:>4}] {:<25}  {double_sided:>2}  {:<11}  {slots}",
                display_name(material.name.as_deref()),
                material.alpha_mode.label()
            );
        }
    }

    println!();
    println!("=== Buffers ({}) ===", report.buffers.len());
    for (idx, buffer) in report.buffers.iter().enumerate() {
        println!("[{idx:>4}] {:>11} bytes", group_digits(buffer.byte_length));
    }

    println!();
    println!("=== Accessors ({}) ===", report.accessors.len());
    for (idx, accessor) in report.accessors.iter().enumerate() {
        println!(
            "[{idx:>4}] {:>8}x  {:<6}  {:<14}  {:>11} bytes",
            group_digits(accessor.count),
            accessor.element_type,
            accessor.component_type.to_string(),
            group_digits(accessor.byte_length)
        );
    }
}
