//! Absolute floor numbering.
//!
//! Floors are plain signed integers wrapped in a newtype so they cannot be
//! confused with weights or millisecond counts at call sites.  Arithmetic is
//! deliberately small: add a signed step, or subtract two floors to get a
//! signed distance — everything the route queues and policies need.

use std::fmt;

/// An absolute floor number.
///
/// Stored as `i32` so basements are expressible as negative floors, even
/// though the default service range starts at 1.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Floor(pub i32);

impl Floor {
    /// Floors travelled from `other` to `self`, signed (negative = below).
    #[inline]
    pub fn distance_from(self, other: Floor) -> i32 {
        self.0 - other.0
    }
}

impl std::ops::Add<i32> for Floor {
    type Output = Floor;
    #[inline]
    fn add(self, rhs: i32) -> Floor {
        Floor(self.0 + rhs)
    }
}

impl std::ops::Sub for Floor {
    type Output = i32;
    #[inline]
    fn sub(self, rhs: Floor) -> i32 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}
