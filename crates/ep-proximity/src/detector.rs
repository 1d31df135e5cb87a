//! Proximity detector trait and the default all-pairs scan.
//!
//! # Pluggability
//!
//! `ep-sim` calls detection through the [`ProximityDetector`] trait.  The
//! default [`BruteForceDetector`] compares every pair, which is the intended
//! design for populations of tens to low hundreds of agents.

use ep_core::{AgentId, Vec2};

// ── ClosePair ─────────────────────────────────────────────────────────────────

/// An unordered pair of distinct agents closer than the transmission radius.
///
/// Always stored with `a < b`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClosePair {
    pub a: AgentId,
    pub b: AgentId,
}

impl ClosePair {
    /// Build a pair from two distinct ids in either order.
    ///
    /// Returns `None` when `x == y`.
    pub fn new(x: AgentId, y: AgentId) -> Option<Self> {
        match x.cmp(&y) {
            std::cmp::Ordering::Less    => Some(Self { a: x, b: y }),
            std::cmp::Ordering::Greater => Some(Self { a: y, b: x }),
            std::cmp::Ordering::Equal   => None,
        }
    }
}

// ── ProximityDetector trait ───────────────────────────────────────────────────

/// Pluggable close-pair enumeration.
///
/// # Contract
///
/// Given agent centres indexed by `AgentId`, return every pair whose
/// Euclidean distance is strictly less than `radius`, each pair exactly once,
/// never an agent paired with itself.  The order must be a deterministic
/// function of the input.
pub trait ProximityDetector: Send + Sync {
    fn close_pairs(&self, positions: &[Vec2], radius: f64) -> Vec<ClosePair>;
}

// ── BruteForceDetector ────────────────────────────────────────────────────────

/// Compares all `n(n-1)/2` pairs.
///
/// Pairs come out in row-major order: ascending `a`, then ascending `b`.  An
/// axis-aligned box test rejects most far pairs before the distance check;
/// it never changes the result.
#[derive(Copy, Clone, Debug, Default)]
pub struct BruteForceDetector;

impl BruteForceDetector {
    /// Close pairs whose lower index is `i`.
    fn row(positions: &[Vec2], i: usize, radius: f64) -> impl Iterator<Item = ClosePair> + '_ {
        let p = positions[i];
        let r_sq = radius * radius;
        positions[i + 1..]
            .iter()
            .enumerate()
            .filter(move |(_, q)| (p.x - q.x).abs() < radius && (p.y - q.y).abs() < radius)
            .filter(move |(_, q)| p.distance_sq(**q) < r_sq)
            .map(move |(k, _)| ClosePair {
                a: AgentId(i as u32),
                b: AgentId((i + 1 + k) as u32),
            })
    }
}

impl ProximityDetector for BruteForceDetector {
    fn close_pairs(&self, positions: &[Vec2], radius: f64) -> Vec<ClosePair> {
        if radius.is_nan() || radius <= 0.0 {
            return Vec::new();
        }

        #[cfg(not(feature = "parallel"))]
        {
            (0..positions.len())
                .flat_map(|i| Self::row(positions, i, radius))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            (0..positions.len())
                .into_par_iter()
                .flat_map_iter(|i| Self::row(positions, i, radius))
                .collect()
        }
    }
}
