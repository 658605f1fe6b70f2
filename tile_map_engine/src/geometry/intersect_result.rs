use crate::error::{Error, Result};

/// Result of a 3-way box/volume classification.
///
/// Used by the tile quadtree traversal for hierarchical culling:
/// - `None` → skip the entire subtree
/// - `Partial` → test the children
/// - `Full` → include the subtree without further testing
///
/// The numeric values (0, 1, 2) are stable and may be compared or stored
/// by external consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum IntersectResult {
    /// Provably disjoint
    None = 0,
    /// Possibly overlapping (conservative)
    Partial = 1,
    /// Provably contained
    Full = 2,
}

impl IntersectResult {
    /// Raw numeric value (0 = None, 1 = Partial, 2 = Full)
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// `true` for `Partial` and `Full`
    pub fn is_visible(self) -> bool {
        self != IntersectResult::None
    }
}

impl TryFrom<u8> for IntersectResult {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(IntersectResult::None),
            1 => Ok(IntersectResult::Partial),
            2 => Ok(IntersectResult::Full),
            other => Err(Error::InvalidParameter(format!(
                "{} is not a valid intersection result (expected 0, 1 or 2)",
                other
            ))),
        }
    }
}

impl From<IntersectResult> for u8 {
    fn from(result: IntersectResult) -> u8 {
        result.as_u8()
    }
}

#[cfg(test)]
#[path = "intersect_result_tests.rs"]
mod tests;
