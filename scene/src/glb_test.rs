use std::f64::consts::FRAC_1_SQRT_2;

use serde_json::json;

use super::*;

fn assert_bounds(bounds: &Bounds, min: [f64; 3], max: [f64; 3]) {
    let close = |v: Vec3, e: [f64; 3]| (v.x - e[0]).abs() < 1e-9 && (v.y - e[1]).abs() < 1e-9 && (v.z - e[2]).abs() < 1e-9;
    assert!(close(bounds.min, min), "min {:?} != {min:?}", bounds.min);
    assert!(close(bounds.max, max), "max {:?} != {max:?}", bounds.max);
}

/// A Z-up box mesh `[-1, -0.5, 0]..[1, 0.5, 4]` placed by `nodes`, plus an
/// oversized mesh no scene node should reach.
fn box_doc(nodes: serde_json::Value) -> serde_json::Value {
    json!({
        "scene": 0,
        "scenes": [ { "nodes": [0] } ],
        "nodes": nodes,
        "meshes": [
            { "primitives": [ { "attributes": { "POSITION": 0 } } ] },
            { "primitives": [ { "attributes": { "POSITION": 1 } } ] }
        ],
        "accessors": [
            { "min": [-1.0, -0.5, 0.0], "max": [1.0, 0.5, 4.0] },
            { "min": [-50.0, -50.0, -50.0], "max": [50.0, 50.0, 50.0] }
        ]
    })
}

/// Assemble a GLB container around `json`.
fn glb_with(json: &serde_json::Value) -> Vec<u8> {
    let mut body = serde_json::to_vec(json).unwrap_or_default();
    while body.len() % 4 != 0 {
        body.push(b' ');
    }
    let total = HEADER_LEN + CHUNK_HEADER_LEN + body.len();
    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(&GLB_MAGIC.to_le_bytes());
    out.extend_from_slice(&2_u32.to_le_bytes());
    out.extend_from_slice(&u32::try_from(total).unwrap_or(u32::MAX).to_le_bytes());
    out.extend_from_slice(&u32::try_from(body.len()).unwrap_or(u32::MAX).to_le_bytes());
    out.extend_from_slice(&CHUNK_JSON.to_le_bytes());
    out.extend_from_slice(&body);
    out
}

fn two_mesh_doc() -> serde_json::Value {
    json!({
        "asset": { "version": "2.0" },
        "meshes": [
            { "primitives": [ { "attributes": { "POSITION": 0, "NORMAL": 1 } } ] },
            { "primitives": [ { "attributes": { "POSITION": 2 } } ] }
        ],
        "accessors": [
            { "min": [-1.0, 0.0, -0.5], "max": [1.0, 2.0, 0.5], "type": "VEC3" },
            { "min": [-10.0, -10.0, -10.0], "max": [10.0, 10.0, 10.0], "type": "VEC3" },
            { "min": [-0.5, 1.0, -2.0], "max": [0.5, 3.0, 0.0], "type": "VEC3" }
        ]
    })
}

// =============================================================
// Container
// =============================================================

#[test]
fn json_chunk_returns_embedded_document() {
    let bytes = glb_with(&json!({ "asset": { "version": "2.0" } }));
    let chunk = json_chunk(&bytes).expect("valid glb");
    let parsed: serde_json::Value = serde_json::from_slice(chunk).expect("json");
    assert_eq!(parsed["asset"]["version"], "2.0");
}

#[test]
fn rejects_short_input() {
    assert!(matches!(json_chunk(b"glTF"), Err(GlbError::TooShort(4))));
}

#[test]
fn rejects_wrong_magic() {
    let mut bytes = glb_with(&two_mesh_doc());
    bytes[0] = b'x';
    assert!(matches!(json_chunk(&bytes), Err(GlbError::BadMagic(_))));
}

#[test]
fn rejects_version_one() {
    let mut bytes = glb_with(&two_mesh_doc());
    bytes[4..8].copy_from_slice(&1_u32.to_le_bytes());
    assert!(matches!(json_chunk(&bytes), Err(GlbError::UnsupportedVersion(1))));
}

#[test]
fn rejects_truncated_file() {
    let mut bytes = glb_with(&two_mesh_doc());
    bytes.truncate(bytes.len() - 8);
    assert!(matches!(json_chunk(&bytes), Err(GlbError::Truncated { .. })));
}

#[test]
fn rejects_chunk_length_past_the_end() {
    let mut bytes = glb_with(&two_mesh_doc());
    bytes[12..16].copy_from_slice(&u32::MAX.to_le_bytes());
    assert!(matches!(json_chunk(&bytes), Err(GlbError::Truncated { .. })));
}

#[test]
fn rejects_binary_first_chunk() {
    let mut bytes = glb_with(&two_mesh_doc());
    bytes[16..20].copy_from_slice(&0x004E_4942_u32.to_le_bytes());
    assert!(matches!(json_chunk(&bytes), Err(GlbError::MissingJsonChunk)));
}

// =============================================================
// Bounds
// =============================================================

#[test]
fn model_bounds_unions_position_accessors_only() {
    let bounds = model_bounds(&glb_with(&two_mesh_doc())).expect("bounds");
    assert_eq!(bounds.min, Vec3::new(-1.0, 0.0, -2.0));
    assert_eq!(bounds.max, Vec3::new(1.0, 3.0, 0.5));
}

#[test]
fn model_bounds_skips_accessors_without_min_max() {
    let doc = json!({
        "meshes": [ { "primitives": [
            { "attributes": { "POSITION": 0 } },
            { "attributes": { "POSITION": 1 } }
        ] } ],
        "accessors": [
            { "count": 3 },
            { "min": [0.0, 0.0, 0.0], "max": [1.0, 1.0, 1.0] }
        ]
    });
    let bounds = model_bounds(&glb_with(&doc)).expect("bounds");
    assert_eq!(bounds.max, Vec3::new(1.0, 1.0, 1.0));
}

#[test]
fn model_bounds_without_positions_is_an_error() {
    let doc = json!({ "meshes": [], "accessors": [] });
    assert!(matches!(model_bounds(&glb_with(&doc)), Err(GlbError::NoPositionBounds)));
}

#[test]
fn model_bounds_reports_invalid_json() {
    let mut bytes = glb_with(&two_mesh_doc());
    bytes[20] = b'#';
    assert!(matches!(model_bounds(&bytes), Err(GlbError::Json(_))));
}

// =============================================================
// Node transforms
// =============================================================

#[test]
fn root_rotation_turns_z_up_model_upright() {
    let doc = box_doc(json!([ { "mesh": 0, "rotation": [-FRAC_1_SQRT_2, 0.0, 0.0, FRAC_1_SQRT_2] } ]));
    let bounds = model_bounds(&glb_with(&doc)).expect("bounds");
    assert_bounds(&bounds, [-1.0, 0.0, -0.5], [1.0, 4.0, 0.5]);
}

#[test]
fn child_inherits_parent_translation_and_applies_own_scale() {
    let doc = box_doc(json!([
        { "translation": [0.0, 1.0, 0.0], "children": [1] },
        { "mesh": 0, "scale": [2.0, 2.0, 2.0] }
    ]));
    let bounds = model_bounds(&glb_with(&doc)).expect("bounds");
    assert_bounds(&bounds, [-2.0, 0.0, 0.0], [2.0, 2.0, 8.0]);
}

#[test]
fn node_matrix_takes_precedence_over_trs() {
    let doc = box_doc(json!([ {
        "mesh": 0,
        "translation": [100.0, 0.0, 0.0],
        "matrix": [
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            3.0, 0.0, 0.0, 1.0
        ]
    } ]));
    let bounds = model_bounds(&glb_with(&doc)).expect("bounds");
    assert_bounds(&bounds, [2.0, -0.5, 0.0], [4.0, 0.5, 4.0]);
}

#[test]
fn meshes_outside_the_scene_are_ignored() {
    let doc = box_doc(json!([ { "mesh": 0 }, { "mesh": 1 } ]));
    let bounds = model_bounds(&glb_with(&doc)).expect("bounds");
    assert_bounds(&bounds, [-1.0, -0.5, 0.0], [1.0, 0.5, 4.0]);
}

#[test]
fn without_scenes_every_root_node_counts() {
    let mut doc = box_doc(json!([
        { "mesh": 0, "children": [1] },
        { "mesh": 0, "translation": [0.0, 0.0, -10.0] }
    ]));
    doc["scenes"] = json!([]);
    let bounds = model_bounds(&glb_with(&doc)).expect("bounds");
    assert_bounds(&bounds, [-1.0, -0.5, -10.0], [1.0, 0.5, 4.0]);
}

#[test]
fn cyclic_hierarchy_terminates() {
    let doc = box_doc(json!([
        { "mesh": 0, "children": [1] },
        { "translation": [0.0, 5.0, 0.0], "children": [0] }
    ]));
    let bounds = model_bounds(&glb_with(&doc)).expect("bounds");
    assert_bounds(&bounds, [-1.0, -0.5, 0.0], [1.0, 0.5, 4.0]);
}
