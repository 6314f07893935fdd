use ahash::AHashMap;

use super::BoundaryId;

/// A maximal connected open region of the plane complement.
///
/// Exactly one face in a graph has `boundary == None`: the unbounded face,
/// always at [`super::UNBOUNDED_FACE`]. `winding_map` and `filled` start
/// unset and are populated by
/// [`compute_winding_map`](super::phases::winding::compute_winding_map) and
/// [`compute_face_inclusion`](super::phases::inclusion::compute_face_inclusion)
/// respectively.
#[derive(Clone, Debug, Default)]
pub struct Face {
    pub boundary: Option<BoundaryId>,
    pub holes: Vec<BoundaryId>,
    pub winding_map: Option<AHashMap<u32, i32>>,
    pub filled: Option<bool>,
}

impl Face {
    pub fn winding(&self, shape_id: u32) -> i32 {
        self.winding_map.as_ref().and_then(|m| m.get(&shape_id).copied()).unwrap_or(0)
    }
}
