/// Numeric tunables for the CAG pipeline.
///
/// Grouped the way curve-fitting options are grouped elsewhere in the
/// corpus: a plain `Copy` struct of named fields with a documented
/// `Default`, passed by value and overridable field-by-field.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tolerances {
    /// Maximum distance between two vertices before they are collapsed into
    /// one in [`collapse_vertices`](crate::graph::phases::collapse::collapse_vertices).
    /// Also used as the generic "is this the same point" epsilon throughout
    /// the pipeline. The default value is `1e-5`.
    pub vertex_epsilon: f64,
    /// Minimum overlap span (in either segment's own parameterization)
    /// before [`eliminate_overlap`](crate::graph::phases::overlap::eliminate_overlap)
    /// treats two like-typed segments as overlapping rather than merely
    /// touching. The default value is `1e-5`.
    pub overlap_epsilon: f64,
    /// Distance (in parameter `t`) from `0` or `1` within which an
    /// intersection is treated as a touch at an existing endpoint rather
    /// than an internal split point. The default value is `1e-5`.
    pub intersection_endpoint_epsilon: f64,
    /// Minimum ray-hit distance accepted by `intersect_ray`; hits closer
    /// than this are back-hits at the ray origin and are ignored. The
    /// default value is `1e-8`.
    pub ray_back_clip_epsilon: f64,
    /// Maximum tangent-direction difference (in radians) for two incident
    /// `Line` segments to be treated as collinear by `collapse_adjacent_edges`
    /// when building the filled sub-graph. The default value is `1e-6`.
    pub collinear_tangent_epsilon: f64,
    /// Rotation (in radians) of the extreme ray cast by
    /// `compute_boundary_graph`, chosen away from axis alignment to avoid
    /// degenerate tangent hits. The default value is `1.5729657`.
    pub extreme_ray_angle: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Tolerances {
            vertex_epsilon: 1e-5,
            overlap_epsilon: 1e-5,
            intersection_endpoint_epsilon: 1e-5,
            ray_back_clip_epsilon: 1e-8,
            collinear_tangent_epsilon: 1e-6,
            extreme_ray_angle: 1.5729657,
        }
    }
}
