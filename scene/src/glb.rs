//! Binary glTF (`.glb`) container parsing.
//!
//! The scene only needs the avatar's bounding box, so this reads the GLB
//! header and JSON chunk, walks the node hierarchy of the default scene, and
//! unions the `min`/`max` of every mesh `POSITION` accessor after applying
//! its node's world transform. Buffers and materials are not interpreted.

#[cfg(test)]
#[path = "glb_test.rs"]
mod glb_test;

use std::collections::HashMap;

use serde::Deserialize;

use crate::math::{Mat4, Vec3};
use crate::model::Bounds;

/// `"glTF"` read as a little-endian u32.
const GLB_MAGIC: u32 = 0x4654_6C67;

/// `"JSON"` chunk type read as a little-endian u32.
const CHUNK_JSON: u32 = 0x4E4F_534A;

const HEADER_LEN: usize = 12;
const CHUNK_HEADER_LEN: usize = 8;

/// Errors produced while reading a GLB container.
#[derive(Debug, thiserror::Error)]
pub enum GlbError {
    #[error("glb too short: {0} bytes")]
    TooShort(usize),
    #[error("not a glb file (magic {0:#010x})")]
    BadMagic(u32),
    #[error("unsupported glb version {0}")]
    UnsupportedVersion(u32),
    #[error("glb truncated: header declares {declared} bytes, got {actual}")]
    Truncated { declared: usize, actual: usize },
    #[error("first glb chunk is not JSON")]
    MissingJsonChunk,
    #[error("invalid glTF JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("glTF has no POSITION accessor with min/max bounds")]
    NoPositionBounds,
}

#[derive(Debug, Deserialize)]
struct Document {
    scene: Option<usize>,
    #[serde(default)]
    scenes: Vec<SceneDef>,
    #[serde(default)]
    nodes: Vec<Node>,
    #[serde(default)]
    meshes: Vec<Mesh>,
    #[serde(default)]
    accessors: Vec<Accessor>,
}

#[derive(Debug, Deserialize)]
struct SceneDef {
    #[serde(default)]
    nodes: Vec<usize>,
}

#[derive(Debug, Deserialize)]
struct Node {
    mesh: Option<usize>,
    #[serde(default)]
    children: Vec<usize>,
    matrix: Option<Vec<f64>>,
    translation: Option<[f64; 3]>,
    rotation: Option<[f64; 4]>,
    scale: Option<[f64; 3]>,
}

impl Node {
    /// Local transform: `matrix` when present, else translation/rotation/scale.
    fn local_transform(&self) -> Mat4 {
        if let Some(matrix) = self.matrix.as_deref() {
            if let Ok(columns) = <[f64; 16]>::try_from(matrix) {
                return Mat4(columns);
            }
        }
        let [tx, ty, tz] = self.translation.unwrap_or([0.0; 3]);
        let [sx, sy, sz] = self.scale.unwrap_or([1.0; 3]);
        Mat4::from_trs(Vec3::new(tx, ty, tz), self.rotation.unwrap_or([0.0, 0.0, 0.0, 1.0]), Vec3::new(sx, sy, sz))
    }
}

#[derive(Debug, Deserialize)]
struct Mesh {
    #[serde(default)]
    primitives: Vec<Primitive>,
}

#[derive(Debug, Deserialize)]
struct Primitive {
    #[serde(default)]
    attributes: HashMap<String, usize>,
}

#[derive(Debug, Deserialize)]
struct Accessor {
    min: Option<Vec<f64>>,
    max: Option<Vec<f64>>,
}

fn read_u32(bytes: &[u8], at: usize) -> Option<u32> {
    match bytes.get(at..at + 4)? {
        &[a, b, c, d] => Some(u32::from_le_bytes([a, b, c, d])),
        _ => None,
    }
}

fn as_vec3(values: &[f64]) -> Option<Vec3> {
    match values {
        [x, y, z, ..] => Some(Vec3::new(*x, *y, *z)),
        _ => None,
    }
}

/// Return the JSON chunk of a GLB container.
///
/// # Errors
///
/// Fails on a bad header, a length mismatch, or a missing JSON chunk.
pub fn json_chunk(bytes: &[u8]) -> Result<&[u8], GlbError> {
    if bytes.len() < HEADER_LEN + CHUNK_HEADER_LEN {
        return Err(GlbError::TooShort(bytes.len()));
    }
    let magic = read_u32(bytes, 0).ok_or(GlbError::TooShort(bytes.len()))?;
    if magic != GLB_MAGIC {
        return Err(GlbError::BadMagic(magic));
    }
    let version = read_u32(bytes, 4).ok_or(GlbError::TooShort(bytes.len()))?;
    if version != 2 {
        return Err(GlbError::UnsupportedVersion(version));
    }
    let declared = read_u32(bytes, 8).ok_or(GlbError::TooShort(bytes.len()))? as usize;
    if declared > bytes.len() {
        return Err(GlbError::Truncated { declared, actual: bytes.len() });
    }

    let chunk_len = read_u32(bytes, HEADER_LEN).ok_or(GlbError::MissingJsonChunk)? as usize;
    let chunk_type = read_u32(bytes, HEADER_LEN + 4).ok_or(GlbError::MissingJsonChunk)?;
    if chunk_type != CHUNK_JSON {
        return Err(GlbError::MissingJsonChunk);
    }
    let start = HEADER_LEN + CHUNK_HEADER_LEN;
    start
        .checked_add(chunk_len)
        .and_then(|end| bytes.get(start..end))
        .ok_or(GlbError::Truncated { declared: start.saturating_add(chunk_len), actual: bytes.len() })
}

/// Bounding box of the default scene's meshes in a GLB file, in model space.
///
/// Each mesh `POSITION` accessor box is moved by its node's world transform
/// before the union. A file without nodes has its meshes used untransformed.
///
/// # Errors
///
/// Fails if the container is malformed or no position accessor declares
/// its bounds.
pub fn model_bounds(bytes: &[u8]) -> Result<Bounds, GlbError> {
    let doc: Document = serde_json::from_slice(json_chunk(bytes)?)?;

    let placed: Vec<(usize, Mat4)> = if doc.nodes.is_empty() {
        (0..doc.meshes.len()).map(|mesh| (mesh, Mat4::IDENTITY)).collect()
    } else {
        placed_meshes(&doc)
    };

    let mut bounds: Option<Bounds> = None;
    for (mesh, world) in placed {
        let Some(mesh) = doc.meshes.get(mesh) else {
            continue;
        };
        for next in mesh_bounds(&doc, mesh) {
            let next = next.transformed(world);
            bounds = Some(match bounds {
                Some(acc) => acc.union(next),
                None => next,
            });
        }
    }

    bounds.ok_or(GlbError::NoPositionBounds)
}

/// Accessor boxes of one mesh's `POSITION` attributes.
fn mesh_bounds<'a>(doc: &'a Document, mesh: &'a Mesh) -> impl Iterator<Item = Bounds> + 'a {
    mesh.primitives
        .iter()
        .filter_map(|prim| prim.attributes.get("POSITION"))
        .filter_map(|&index| doc.accessors.get(index))
        .filter_map(|accessor| {
            let min = as_vec3(accessor.min.as_deref()?)?;
            let max = as_vec3(accessor.max.as_deref()?)?;
            Some(Bounds { min, max })
        })
}

/// Every mesh reachable from the default scene with its world transform.
///
/// Roots are the `scene` (or first) scene's nodes; without scenes, every node
/// that is nobody's child. Each node is visited at most once, so a malformed
/// cyclic hierarchy terminates.
fn placed_meshes(doc: &Document) -> Vec<(usize, Mat4)> {
    let roots: Vec<usize> = match doc.scenes.get(doc.scene.unwrap_or(0)) {
        Some(scene) => scene.nodes.clone(),
        None => {
            let mut is_child = vec![false; doc.nodes.len()];
            for &child in doc.nodes.iter().flat_map(|n| n.children.iter()) {
                if let Some(flag) = is_child.get_mut(child) {
                    *flag = true;
                }
            }
            (0..doc.nodes.len()).filter(|&i| !is_child[i]).collect()
        }
    };

    let mut visited = vec![false; doc.nodes.len()];
    let mut stack: Vec<(usize, Mat4)> = roots.into_iter().rev().map(|i| (i, Mat4::IDENTITY)).collect();
    let mut placed = Vec::new();
    while let Some((index, parent)) = stack.pop() {
        let Some(node) = doc.nodes.get(index) else {
            continue;
        };
        if std::mem::replace(&mut visited[index], true) {
            continue;
        }
        let world = parent.then_local(node.local_transform());
        if let Some(mesh) = node.mesh {
            placed.push((mesh, world));
        }
        stack.extend(node.children.iter().rev().map(|&child| (child, world)));
    }
    placed
}
