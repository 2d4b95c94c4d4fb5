//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub`, but
//! callers should prefer the `.index()` helper when indexing a slice.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a slice index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Identity of a spawned team.  Issued from 1 upward by the spawn
    /// scheduler; 0 is never issued.
    pub struct TeamId(u32);
}

typed_id! {
    /// Position of a block in the traversal sequence.
    pub struct BlockId(u32);
}

impl TeamId {
    /// The first ID issued after a simulation starts.
    pub const FIRST: TeamId = TeamId(1);

    /// The ID issued after `self`.
    #[inline]
    pub fn next(self) -> TeamId {
        TeamId(self.0 + 1)
    }
}

impl BlockId {
    /// The block every team enters on spawn.
    pub const ENTRY: BlockId = BlockId(0);

    /// The block after `self` in the sequence.
    #[inline]
    pub fn next(self) -> BlockId {
        BlockId(self.0 + 1)
    }
}
