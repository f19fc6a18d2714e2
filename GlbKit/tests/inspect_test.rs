//! End-to-end inspection tests over synthesized GLB files

use std::fs;
use std::path::PathBuf;

use glbkit::prelude::*;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// Build a GLB envelope around the given JSON text.
///
/// The JSON chunk is space-padded to a 4-byte boundary as writers do. The
/// declared total length is computed from the payload unless overridden.
fn build_glb(json: &str, declared_length: Option<u32>) -> Vec<u8> {
    let mut payload = json.as_bytes().to_vec();
    while payload.len() % 4 != 0 {
        payload.push(b' ');
    }

    let total = declared_length.unwrap_or(12 + 8 + payload.len() as u32);

    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"glTF");
    bytes.extend_from_slice(&2u32.to_le_bytes());
    bytes.extend_from_slice(&total.to_le_bytes());
    bytes.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    bytes.extend_from_slice(b"JSON");
    bytes.extend_from_slice(&payload);
    bytes
}

fn write_glb(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, bytes).unwrap();
    path
}

fn cube_json() -> String {
    serde_json::json!({
        "asset": { "version": "2.0", "generator": "fixture-writer" },
        "buffers": [{ "byteLength": 360 }],
        "bufferViews": [
            { "byteLength": 288 },
            { "byteLength": 72 }
        ],
        "accessors": [
            { "bufferView": 0, "componentType": 5126, "type": "VEC3", "count": 24 },
            { "bufferView": 1, "componentType": 5123, "type": "SCALAR", "count": 36 }
        ],
        "nodes": [{}],
        "meshes": [{
            "name": "cube",
            "primitives": [{
                "attributes": { "POSITION": 0 },
                "indices": 1
            }]
        }]
    })
    .to_string()
}

#[test]
fn test_bad_magic_fails_before_anything_else() {
    let dir = TempDir::new().unwrap();
    let mut bytes = build_glb(&cube_json(), None);
    bytes[0..4].copy_from_slice(b"FAKE");
    let path = write_glb(&dir, "bad_magic.glb", &bytes);

    let err = inspect_glb(&path).unwrap_err();
    assert!(matches!(err, Error::InvalidGlbMagic(m) if &m == b"FAKE"));
}

#[test]
fn test_unsupported_container_version() {
    let dir = TempDir::new().unwrap();
    let mut bytes = build_glb(&cube_json(), None);
    bytes[4..8].copy_from_slice(&3u32.to_le_bytes());
    let path = write_glb(&dir, "v3.glb", &bytes);

    let err = inspect_glb(&path).unwrap_err();
    assert!(matches!(err, Error::UnsupportedGlbVersion { version: 3 }));
}

#[test]
fn test_declared_length_mismatch_is_not_fatal() {
    let dir = TempDir::new().unwrap();
    let bytes = build_glb(&cube_json(), Some(200));
    let path = write_glb(&dir, "short.glb", &bytes);

    let report = inspect_glb(&path).unwrap();
    assert_eq!(report.declared_length, 200);
    assert_ne!(report.file_size, 200);
    assert!(report.has_size_mismatch());
    // Processing continued all the way to the mesh pass.
    assert_eq!(report.counts.meshes, Some(1));
}

#[test]
fn test_cube_mesh_summary() {
    let dir = TempDir::new().unwrap();
    let bytes = build_glb(&cube_json(), None);
    let path = write_glb(&dir, "cube.glb", &bytes);

    let report = inspect_glb(&path).unwrap();
    assert_eq!(report.asset_version, "2.0");
    assert_eq!(report.asset_generator, "fixture-writer");
    assert!(!report.has_size_mismatch());
    assert_eq!(report.total_buffer_bytes, 360);
    assert_eq!(report.total_accessor_bytes, 360);

    let meshes = report.meshes.unwrap();
    assert_eq!(meshes.len(), 1);
    let mesh = &meshes[0];
    assert_eq!(mesh.primitive_count, 1);
    assert_eq!(mesh.modes, vec![PrimitiveMode::Triangles]);
    assert_eq!(mesh.vertices, 24);
    assert_eq!(mesh.indices, 36);
    assert_eq!(mesh.normals, 0);
}

#[test]
fn test_unknown_component_type_completes() {
    let dir = TempDir::new().unwrap();
    let json = serde_json::json!({
        "asset": { "version": "2.0" },
        "buffers": [{ "byteLength": 16 }],
        "bufferViews": [{ "byteLength": 16 }],
        "accessors": [
            { "bufferView": 0, "componentType": 9999, "type": "SCALAR", "count": 4 }
        ],
        "nodes": []
    })
    .to_string();
    let path = write_glb(&dir, "vendor.glb", &build_glb(&json, None));

    let report = inspect_glb(&path).unwrap();
    assert_eq!(report.accessors.len(), 1);
    assert_eq!(report.accessors[0].component_type.to_string(), "unknown(9999)");
}

#[test]
fn test_accessor_view_out_of_range() {
    let dir = TempDir::new().unwrap();
    let json = serde_json::json!({
        "asset": { "version": "2.0" },
        "buffers": [{ "byteLength": 16 }],
        "bufferViews": [
            { "byteLength": 4 }, { "byteLength": 4 }, { "byteLength": 8 }
        ],
        "accessors": [
            { "bufferView": 5, "componentType": 5126, "type": "SCALAR", "count": 4 }
        ],
        "nodes": []
    })
    .to_string();
    let path = write_glb(&dir, "dangling.glb", &build_glb(&json, None));

    let err = inspect_glb(&path).unwrap_err();
    assert!(matches!(
        err,
        Error::IndexOutOfRange {
            field: "bufferView",
            index: 5,
            len: 3
        }
    ));
}

#[test]
fn test_missing_required_section() {
    let dir = TempDir::new().unwrap();
    let json = serde_json::json!({
        "asset": { "version": "2.0" },
        "buffers": [{ "byteLength": 16 }],
        "bufferViews": [{ "byteLength": 16 }],
        "accessors": []
    })
    .to_string();
    let path = write_glb(&dir, "no_nodes.glb", &build_glb(&json, None));

    let err = inspect_glb(&path).unwrap_err();
    assert!(matches!(err, Error::MissingSection("nodes")));
}

#[test]
fn test_missing_position_attribute() {
    let dir = TempDir::new().unwrap();
    let json = serde_json::json!({
        "asset": { "version": "2.0" },
        "buffers": [{ "byteLength": 16 }],
        "bufferViews": [{ "byteLength": 16 }],
        "accessors": [
            { "bufferView": 0, "componentType": 5123, "type": "SCALAR", "count": 3 }
        ],
        "nodes": [{}],
        "meshes": [{
            "primitives": [{ "attributes": { "NORMAL": 0 }, "indices": 0 }]
        }]
    })
    .to_string();
    let path = write_glb(&dir, "no_position.glb", &build_glb(&json, None));

    let err = inspect_glb(&path).unwrap_err();
    assert!(matches!(
        err,
        Error::MissingPositionAttribute {
            mesh: 0,
            primitive: 0
        }
    ));
}

#[test]
fn test_alpha_modes_end_to_end() {
    let dir = TempDir::new().unwrap();

    let mut with_mask: serde_json::Value = serde_json::from_str(&cube_json()).unwrap();
    with_mask["materials"] = serde_json::json!([
        {},
        { "alphaMode": "MASK" },
        { "alphaMode": "BLEND", "doubleSided": true }
    ]);
    let path = write_glb(&dir, "alpha.glb", &build_glb(&with_mask.to_string(), None));

    let report = inspect_glb(&path).unwrap();
    let materials = report.materials.unwrap();
    assert_eq!(materials[0].alpha_mode, AlphaMode::Opaque);
    assert_eq!(materials[1].alpha_mode, AlphaMode::Mask);
    assert_eq!(materials[2].alpha_mode, AlphaMode::Blend);
    assert!(materials[2].double_sided);

    let mut with_bad: serde_json::Value = serde_json::from_str(&cube_json()).unwrap();
    with_bad["materials"] = serde_json::json!([{ "alphaMode": "GLASS" }]);
    let bad_path = write_glb(&dir, "bad_alpha.glb", &build_glb(&with_bad.to_string(), None));

    let err = inspect_glb(&bad_path).unwrap_err();
    assert!(matches!(err, Error::InvalidAlphaMode(tag) if tag == "GLASS"));
}

#[test]
fn test_inspection_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let path = write_glb(&dir, "cube.glb", &build_glb(&cube_json(), None));

    let first = inspect_glb(&path).unwrap();
    let second = inspect_glb(&path).unwrap();
    assert_eq!(first, second);
}
