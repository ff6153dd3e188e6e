use super::{ThreePhaseMaterial, TwoPhaseTable};
use crate::deck::PropertyDeck;
use crate::grid::CompressedGrid;
use crate::{ActiveCellId, RegionId, StrError};

/// Holds the composed material laws of all saturation regions
///
/// Each saturation region pairs one SWOF with one SGOF table. The region of
/// every active cell comes from the 1-based SATNUM array (converted to
/// 0-based); when SATNUM is absent, all cells use region 0.
pub struct MaterialLawSet {
    /// Composed three-phase law per region
    materials: Vec<ThreePhaseMaterial>,

    /// Region of each active cell (len = num_active_cells)
    region_of: Vec<RegionId>,
}

impl MaterialLawSet {
    /// Allocates a new instance from the deck tables and region array
    pub fn new(grid: &CompressedGrid, deck: &PropertyDeck) -> Result<Self, StrError> {
        if deck.swof.is_empty() {
            return Err("SWOF keyword is missing");
        }
        if deck.sgof.is_empty() {
            return Err("SGOF keyword is missing");
        }
        if deck.swof.len() != deck.sgof.len() {
            return Err("SWOF and SGOF must have the same number of tables");
        }
        let num_regions = deck.swof.len();
        let mut materials = Vec::with_capacity(num_regions);
        for (swof, sgof) in deck.swof.iter().zip(deck.sgof.iter()) {
            materials.push(ThreePhaseMaterial::new(
                TwoPhaseTable::from_swof(swof)?,
                TwoPhaseTable::from_sgof(sgof)?,
            ));
        }

        let num_active = grid.num_active_cells();
        let region_of = match deck.int("SATNUM") {
            Some(satnum) => {
                if satnum.len() != grid.num_cartesian_cells() {
                    return Err("SATNUM array length must match the number of cartesian cells");
                }
                let mut region_of = Vec::with_capacity(num_active);
                for active in 0..num_active {
                    let value = satnum[grid.cartesian_cell(active)];
                    // SATNUM uses Fortran-style 1-based region numbers
                    if value < 1 || value as usize > num_regions {
                        return Err("SATNUM region index is out of range");
                    }
                    region_of.push((value - 1) as RegionId);
                }
                region_of
            }
            None => vec![0; num_active],
        };

        Ok(MaterialLawSet { materials, region_of })
    }

    /// Returns the number of saturation regions
    pub fn num_regions(&self) -> usize {
        self.materials.len()
    }

    /// Returns the region of an active cell
    pub fn region(&self, cell: ActiveCellId) -> RegionId {
        self.region_of[cell]
    }

    /// Returns the material law parameters of an active cell
    pub fn params(&self, cell: ActiveCellId) -> &ThreePhaseMaterial {
        &self.materials[self.region_of[cell]]
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
