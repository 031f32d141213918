//! Strongly typed arena handles.
//!
//! Points, segments, roads, crossing points and junctions all live in `Vec`
//! arenas and refer to each other through these ids.  All ids are
//! `Copy + Ord + Hash`, so they work as map keys and sort without ceremony.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID".
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// Id of the `index`-th arena slot.
            ///
            /// # Panics
            /// Panics if `index` does not fit the inner integer type.
            #[inline]
            pub fn from_index(index: usize) -> Self {
                match <$inner>::try_from(index) {
                    Ok(n) => $name(n),
                    Err(_) => panic!("{} arena overflow at index {index}", stringify!($name)),
                }
            }
        }

        impl Default for $name {
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a canonical coordinate in the point store.
    pub struct PointId(u32);
}

typed_id! {
    /// Index of a raw input segment in ingestion order.
    pub struct SegmentId(u32);
}

typed_id! {
    /// Arena index of a road.  Not the external road number: a both-way road
    /// and its shadow share a number but have distinct `RoadId`s.
    pub struct RoadId(u32);
}

typed_id! {
    /// Index of a crossing point in creation order.
    pub struct CrossingId(u32);
}

typed_id! {
    /// Index of a junction in discovery order.
    pub struct JunctionId(u32);
}
