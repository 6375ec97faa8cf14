//! Quad geometry and hit-testing.

use crate::state::Vec2;

/// Battlefield cell that can host one enchantment.
///
/// Corners are in local board space, ordered top-left, top-right,
/// bottom-right, bottom-left. Either winding is accepted.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnchantmentQuad {
    pub corners: [Vec2; 4],
    pub center: Vec2,
    /// Rendering offset applied to the enchantment sprite.
    #[cfg_attr(feature = "serde", serde(default))]
    pub offset: Vec2,
    #[cfg_attr(feature = "serde", serde(default = "default_scale"))]
    pub scale: f32,
}

#[cfg(feature = "serde")]
fn default_scale() -> f32 {
    1.0
}

impl EnchantmentQuad {
    /// Builds a quad from its corners; the center is the corner average.
    pub fn new(top_left: Vec2, top_right: Vec2, bottom_right: Vec2, bottom_left: Vec2) -> Self {
        let corners = [top_left, top_right, bottom_right, bottom_left];
        let sum = corners.iter().fold(Vec2::ZERO, |acc, corner| acc + *corner);
        Self {
            corners,
            center: Vec2::new(sum.x / 4.0, sum.y / 4.0),
            offset: Vec2::ZERO,
            scale: 1.0,
        }
    }

    /// Axis-aligned quad spanning `min..=max`.
    pub fn axis_aligned(min: Vec2, max: Vec2) -> Self {
        Self::new(
            Vec2::new(min.x, max.y),
            max,
            Vec2::new(max.x, min.y),
            min,
        )
    }

    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn top_left(&self) -> Vec2 {
        self.corners[0]
    }

    pub fn top_right(&self) -> Vec2 {
        self.corners[1]
    }

    pub fn bottom_right(&self) -> Vec2 {
        self.corners[2]
    }

    pub fn bottom_left(&self) -> Vec2 {
        self.corners[3]
    }

    /// A quad is valid iff every corner coordinate is finite.
    pub fn is_valid(&self) -> bool {
        self.corners.iter().all(|corner| corner.is_finite())
    }

    /// Boundary-inclusive point-in-quad test.
    ///
    /// The quad is split into triangles (TL, TR, BR) and (BR, BL, TL).
    /// Invalid quads contain nothing.
    pub fn contains(&self, point: Vec2) -> bool {
        if !self.is_valid() || !point.is_finite() {
            return false;
        }
        let [tl, tr, br, bl] = self.corners;
        point_in_triangle(point, tl, tr, br) || point_in_triangle(point, br, bl, tl)
    }
}

/// Signed area of `(p, a, b)`; the sign tells which side of edge `a -> b`
/// the point lies on.
fn edge_sign(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    (p.x - b.x) * (a.y - b.y) - (a.x - b.x) * (p.y - b.y)
}

fn point_in_triangle(p: Vec2, a: Vec2, b: Vec2, c: Vec2) -> bool {
    let d1 = edge_sign(p, a, b);
    let d2 = edge_sign(p, b, c);
    let d3 = edge_sign(p, c, a);

    let has_negative = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_positive = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_negative && has_positive)
}
