use serde::{Deserialize, Serialize};

/// Defines the identifier of an active (compressed) cell
///
/// Active cells are numbered densely from 0 to the number of active cells.
pub type ActiveCellId = usize;

/// Defines the identifier of a cell in the uncompressed cartesian grid
///
/// These ids may have gaps with respect to the active cells because the
/// grid processing may remove cells.
pub type CartesianCellId = usize;

/// Defines the identifier of a saturation region (0-based)
pub type RegionId = usize;

/// Defines the fluid phases of the black-oil model
///
/// Note: The fixed numbering scheme is used to index per-phase arrays.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
pub enum Phase {
    /// Water phase
    Water = 0,

    /// Oil phase (may contain dissolved gas)
    Oil = 1,

    /// Gas phase
    Gas = 2,
}

/// Defines the pseudo-components of the black-oil model
///
/// Note: The fixed numbering scheme is used to index per-component arrays.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
pub enum Component {
    /// Water component
    Water = 0,

    /// Oil component
    Oil = 1,

    /// Gas component (may dissolve into the oil phase)
    Gas = 2,
}
