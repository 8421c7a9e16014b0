//! Floor call requests.

use std::fmt;

use crate::Floor;

/// Where a call was made from.
///
/// The distinction matters only to the stop policy: an overloaded car still
/// honors `Inside` calls (occupants must always be able to exit) but skips
/// `Outside` ones.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CallOrigin {
    /// Button pressed inside the car.
    Inside,
    /// Call button pressed on a landing.
    Outside,
}

/// An immutable request for the car to visit `floor`.
///
/// Route queues keep requests sorted *by floor only* — two requests for the
/// same floor from different origins are distinct values but interchangeable
/// for ordering, so the queues sort via `binary_search_by_key` on the floor
/// rather than an `Ord` impl here.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CallRequest {
    pub origin: CallOrigin,
    pub floor: Floor,
}

impl CallRequest {
    #[inline]
    pub fn inside(floor: Floor) -> Self {
        Self { origin: CallOrigin::Inside, floor }
    }

    #[inline]
    pub fn outside(floor: Floor) -> Self {
        Self { origin: CallOrigin::Outside, floor }
    }
}

impl fmt::Display for CallRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.origin {
            CallOrigin::Inside => write!(f, "inside({})", self.floor),
            CallOrigin::Outside => write!(f, "outside({})", self.floor),
        }
    }
}
