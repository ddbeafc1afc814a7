//! Perspective-correct attribute interpolation.
//!
//! Screen-space barycentric weights interpolate linearly in screen space,
//! but vertex attributes vary linearly in the pre-divide space. The usual
//! fix applies: interpolate `A / w` and `1 / w` with the screen-space
//! weights, then divide:
//!
//! ```text
//! A' = (sum lambda_k * A_k / w_k) / (sum lambda_k / w_k)
//! ```
//!
//! The per-vertex ratios are constant across a triangle, so they are
//! computed once per triangle here and the per-pixel work collapses to
//! weighted sums plus a single division.

/// Per-triangle reciprocals and depth ratios.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Interpolator {
    inv_w: [f32; 3],
    z_over_w: [f32; 3],
}

impl Interpolator {
    pub fn new(z: [f32; 3], w: [f32; 3]) -> Self {
        let inv_w = [1.0 / w[0], 1.0 / w[1], 1.0 / w[2]];
        Self {
            inv_w,
            z_over_w: [z[0] * inv_w[0], z[1] * inv_w[1], z[2] * inv_w[2]],
        }
    }

    /// Fill `out` with the per-vertex attribute ratios `A_k / w_k`, laid out
    /// as three consecutive lanes per attribute. `out` must hold three lanes
    /// per attribute.
    pub fn fill_ratios(&self, attributes: [&[f32]; 3], out: &mut [f32]) {
        for (a, lanes) in out.chunks_exact_mut(3).enumerate() {
            lanes[0] = attributes[0][a] * self.inv_w[0];
            lanes[1] = attributes[1][a] * self.inv_w[1];
            lanes[2] = attributes[2][a] * self.inv_w[2];
        }
    }

    /// Screen-space interpolation of `1 / w`; the denominator of every
    /// perspective-correct quotient at this pixel.
    #[inline]
    pub fn one_over_w(&self, lambda: [f32; 3]) -> f32 {
        lambda[0] * self.inv_w[0] + lambda[1] * self.inv_w[1] + lambda[2] * self.inv_w[2]
    }

    /// Screen-space interpolation of `z / w`.
    #[inline]
    pub fn z_over_w(&self, lambda: [f32; 3]) -> f32 {
        lambda[0] * self.z_over_w[0] + lambda[1] * self.z_over_w[1] + lambda[2] * self.z_over_w[2]
    }
}

/// Screen-space interpolation of attribute `index` from ratios laid out by
/// [`Interpolator::fill_ratios`].
#[inline]
pub(crate) fn ratio_sum(ratios: &[f32], index: usize, lambda: [f32; 3]) -> f32 {
    let lanes = &ratios[3 * index..3 * index + 3];
    lambda[0] * lanes[0] + lambda[1] * lanes[1] + lambda[2] * lanes[2]
}
