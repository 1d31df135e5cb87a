//! Planar geometry: `Vec2` and the rectangular `Arena`.
//!
//! Coordinates are screen-style: `x` grows to the right, `y` grows downward,
//! and the origin is the top-left corner of the arena.  The bottom
//! `control_strip_height` pixels are reserved for the control panel and are
//! not part of the movable area.

/// A 2-D point or displacement in arena units.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit-length-times-`speed` vector pointing along `heading` (radians).
    #[inline]
    pub fn from_polar(heading: f64, speed: f64) -> Self {
        Self {
            x: heading.cos() * speed,
            y: heading.sin() * speed,
        }
    }

    /// Angle of this vector in radians, in `(-π, π]`.
    #[inline]
    pub fn heading(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Vec2) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Squared Euclidean distance; avoids the square root in hot loops.
    #[inline]
    pub fn distance_sq(self, other: Vec2) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

// ── Arena ─────────────────────────────────────────────────────────────────────

/// The bounded world agents move in.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Arena {
    /// Full window width.
    pub width: f64,
    /// Full window height, including the control strip.
    pub height: f64,
    /// Height of the reserved control-panel strip along the bottom edge.
    pub control_strip_height: f64,
}

impl Arena {
    pub fn new(width: f64, height: f64, control_strip_height: f64) -> Self {
        Self { width, height, control_strip_height }
    }

    /// Height of the area agents may occupy (excludes the control strip).
    #[inline]
    pub fn movable_height(&self) -> f64 {
        self.height - self.control_strip_height
    }

    /// Top-left and bottom-right corners of the region a disc of `radius`
    /// may have its centre in.
    #[inline]
    pub fn inset_bounds(&self, radius: f64) -> (Vec2, Vec2) {
        (
            Vec2::new(radius, radius),
            Vec2::new(self.width - radius, self.movable_height() - radius),
        )
    }

    /// `true` if a disc of `radius` centred at `p` lies fully in the
    /// movable area.
    #[inline]
    pub fn contains(&self, p: Vec2, radius: f64) -> bool {
        let (lo, hi) = self.inset_bounds(radius);
        (lo.x..=hi.x).contains(&p.x) && (lo.y..=hi.y).contains(&p.y)
    }
}

impl Default for Arena {
    /// 900 × 750 window with a 100-pixel control strip.
    fn default() -> Self {
        Self::new(900.0, 750.0, 100.0)
    }
}
