/// Edge weight and route cost type
pub type Weight = u64;

/// Marker value for "no distance known yet"
pub const INFINITY: Weight = Weight::MAX;

/// External 1-based location id as it appears in the case input
pub type LocationId = usize;
