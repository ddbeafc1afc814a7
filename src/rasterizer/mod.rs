//! Perspective-correct triangle traversal.
//!
//! This is the crate's core: an indexed triangle list goes in, batches of
//! interpolated fragment records come out through a [`FragmentSink`].
//!
//! # Algorithm Overview
//!
//! Each triangle is scan-converted with Pineda's edge function algorithm:
//!
//! 1. Compute the screen-space bounding box and clip it to the viewport
//! 2. Evaluate the three edge functions once at the top-left pixel center
//! 3. Sweep the box row by row, updating the edge values incrementally
//!    (three additions per pixel) and testing coverage at each center
//! 4. For covered pixels, derive barycentric weights from the edge values
//!    and interpolate depth and attributes perspective-correctly
//!
//! Fragments are emitted triangle-major, then row-major, then in ascending
//! x within a row. They are staged in caller-provided scratch and flushed
//! to the sink whenever the next record would not fit, plus once
//! unconditionally at the end of the render.
//!
//! # Winding and coverage
//!
//! With y growing downward, front faces are expected to wind clockwise on
//! screen; their edge functions are nonpositive over the interior, and the
//! default [`CullMode::Back`] admits exactly that case, silently dropping
//! counter-clockwise triangles. [`FillRule::Inclusive`] keeps pixels whose
//! center lies exactly on an edge, so neighbors sharing an edge both emit
//! those pixels; [`FillRule::TopLeft`] breaks the tie and emits them once.
//!
//! # References
//!
//! - Juan Pineda, "A Parallel Algorithm for Polygon Rasterization" (1988)

mod bounding_box;
mod buffers;
mod edgefunction;
mod interpolate;

pub use buffers::VertexBuffer;

use crate::fragment::{record_words, FragmentSink, HEADER_WORDS};
use crate::math::vec2::Vec2;

use bounding_box::BoundingBox;
use buffers::FragmentBuffer;
use edgefunction::{EdgeFunctions, DEGENERATE_AREA_EPS};
use interpolate::{ratio_sum, Interpolator};

/// Inclusive rectangle of pixels fragments may be emitted for.
///
/// Coordinates are expected to be nonnegative; fragment records carry
/// unsigned pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewportBounds {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl ViewportBounds {
    pub fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        debug_assert!(min_x <= max_x && min_y <= max_y);
        Self { min_x, min_y, max_x, max_y }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

/// Which triangle orientation survives to emit fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CullMode {
    /// Keep clockwise-on-screen triangles, drop the rest.
    #[default]
    Back,
    /// Keep counter-clockwise-on-screen triangles, drop the rest.
    Front,
    /// Keep both orientations.
    None,
}

/// Tie-break policy for pixel centers exactly on a triangle edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillRule {
    /// On-edge pixels are covered. Triangles sharing an edge both emit the
    /// shared pixels; deduplication is the sink's concern.
    #[default]
    Inclusive,
    /// On-edge pixels belong to top and left edges only, so a shared edge
    /// is emitted by exactly one of its two triangles.
    TopLeft,
}

/// Everything the traversal reads: geometry, viewport, and policy.
#[derive(Clone, Copy, Debug)]
pub struct RasterizerInput<'a> {
    pub vertices: VertexBuffer<'a>,
    /// Vertex indices, consumed in triples; one triple per triangle.
    pub indices: &'a [u32],
    pub viewport: ViewportBounds,
    pub cull: CullMode,
    pub fill: FillRule,
}

impl<'a> RasterizerInput<'a> {
    pub fn new(vertices: VertexBuffer<'a>, indices: &'a [u32], viewport: ViewportBounds) -> Self {
        Self {
            vertices,
            indices,
            viewport,
            cull: CullMode::default(),
            fill: FillRule::default(),
        }
    }
}

/// Rasterize all triangles, pushing fragment batches into `sink`.
///
/// `scratch` is the staging area for fragment records; it must hold at
/// least one record of `3 + N` words, where N is the vertex buffer's
/// attribute count. Larger scratch means fewer, bigger sink calls. The
/// sink is always invoked at least once: the final flush happens even if
/// nothing was emitted.
///
/// Degenerate triangles (twice-signed-area magnitude below `1e-5` square
/// pixels) are skipped without emitting anything, as are triangles whose
/// bounding box misses the viewport.
///
/// # Panics
/// Panics if `scratch` cannot hold a single fragment record.
pub fn rasterize<S: FragmentSink>(input: &RasterizerInput<'_>, scratch: &mut [u32], sink: &mut S) {
    let attribute_count = input.vertices.attribute_count();
    let stride = record_words(attribute_count);
    assert!(
        scratch.len() >= stride,
        "fragment scratch holds {} words but one record needs {}",
        scratch.len(),
        stride
    );
    debug_assert_eq!(input.indices.len() % 3, 0, "index count must be a multiple of 3");
    debug_assert!(
        input.viewport.min_x >= 0 && input.viewport.min_y >= 0,
        "viewport must lie in the nonnegative quadrant"
    );

    let mut fragments = FragmentBuffer::new(scratch);
    // Per-triangle attribute ratios, allocated once and reused.
    let mut ratios = vec![0.0f32; 3 * attribute_count];

    for triangle in input.indices.chunks_exact(3) {
        let (i0, i1, i2) = (triangle[0], triangle[1], triangle[2]);
        let p0 = input.vertices.position(i0);
        let p1 = input.vertices.position(i1);
        let p2 = input.vertices.position(i2);
        let v0 = Vec2::new(p0[0], p0[1]);
        let v1 = Vec2::new(p1[0], p1[1]);
        let v2 = Vec2::new(p2[0], p2[1]);

        let mut bb = BoundingBox::of_triangle(v0, v1, v2);
        bb.clip(&input.viewport);
        let range = bb.pixel_range();

        // Offset by half a pixel so coverage is tested at pixel centers.
        let start = Vec2::new(range.min_x as f32 + 0.5, range.min_y as f32 + 0.5);
        let mut edges = EdgeFunctions::new(v0, v1, v2, start);

        let area2 = edges.area2();
        if area2.abs() < DEGENERATE_AREA_EPS {
            continue;
        }
        let inv_area2 = 1.0 / area2;

        let positive = match input.cull {
            CullMode::Back => false,
            CullMode::Front => true,
            CullMode::None => area2 > 0.0,
        };

        let interp = Interpolator::new([p0[2], p1[2], p2[2]], [p0[3], p1[3], p2[3]]);
        interp.fill_ratios(
            [
                input.vertices.attributes(i0),
                input.vertices.attributes(i1),
                input.vertices.attributes(i2),
            ],
            &mut ratios,
        );

        for j in range.min_y..=range.max_y {
            let mut e = edges.row_start();
            for i in range.min_x..=range.max_x {
                if edges.coverage(&e, input.fill, positive) {
                    // e[k] is twice the area of the sub-triangle opposite
                    // vertex k+2 (mod 3), hence the rotated indexing.
                    let lambda = [e[1] * inv_area2, e[2] * inv_area2, e[0] * inv_area2];
                    let inv_denominator = 1.0 / interp.one_over_w(lambda);

                    let record = fragments.reserve(stride, sink);
                    record[0] = i as u32;
                    record[1] = j as u32;
                    record[2] = (interp.z_over_w(lambda) * inv_denominator).to_bits();
                    for a in 0..attribute_count {
                        record[HEADER_WORDS + a] =
                            (ratio_sum(&ratios, a, lambda) * inv_denominator).to_bits();
                    }
                }
                edges.step_right(&mut e);
            }
            edges.step_down();
        }
    }

    fragments.flush(stride, sink);
}
