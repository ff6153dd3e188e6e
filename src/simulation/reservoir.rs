use super::{FluidState, Permeability, StateInitializer};
use crate::base::Config;
use crate::deck::PropertyDeck;
use crate::fluid::FluidSystem;
use crate::grid::CompressedGrid;
use crate::material::{MaterialLawSet, ThreePhaseMaterial};
use crate::{ActiveCellId, StrError};
use russell_lab::Vector;
use russell_tensor::Tensor2;

/// Assembles the physical parameters and initial state of a reservoir model
///
/// The assembly runs once during initialization and either fully succeeds,
/// yielding complete and consistent arrays for every active cell and every
/// interior face, or returns the first error without producing a partial
/// model. The resulting data is immutable; the discretization and solvers
/// only read from it.
pub struct ReservoirModel {
    /// Porosity of each active cell (PORO scaled by NTG and MULTPV)
    porosity: Vector,

    /// Cell and face permeability tensors
    permeability: Permeability,

    /// Composed material laws and the region of each active cell
    materials: MaterialLawSet,

    /// Pressure-dependent fluid model
    fluids: FluidSystem,

    /// Initial thermodynamic state of each active cell
    initial_states: Vec<FluidState>,

    /// Uniform reservoir temperature
    temperature: f64,
}

impl ReservoirModel {
    /// Allocates a new instance by assembling all model parameters
    pub fn new(grid: &CompressedGrid, deck: &PropertyDeck, config: &Config) -> Result<Self, StrError> {
        let permeability = Permeability::new(grid, deck)?;
        let porosity = build_porosity(grid, deck)?;
        let materials = MaterialLawSet::new(grid, deck)?;
        let fluids = FluidSystem::new(deck, config)?;
        let initial_states = StateInitializer::new(grid, &fluids, config).initialize(deck)?;
        Ok(ReservoirModel {
            porosity,
            permeability,
            materials,
            fluids,
            initial_states,
            temperature: config.temperature,
        })
    }

    /// Returns the number of active cells
    pub fn num_cells(&self) -> usize {
        self.initial_states.len()
    }

    /// Returns the porosity of an active cell
    pub fn porosity(&self, cell: ActiveCellId) -> f64 {
        self.porosity[cell]
    }

    /// Returns the permeability tensor of an active cell
    pub fn permeability(&self, cell: ActiveCellId) -> &Tensor2 {
        self.permeability.cell(cell)
    }

    /// Returns the face permeability tensor of a pair of neighboring cells
    pub fn face_permeability(&self, a: ActiveCellId, b: ActiveCellId) -> Result<&Tensor2, StrError> {
        self.permeability.face(a, b)
    }

    /// Returns the material law parameters of an active cell (region lookup)
    pub fn material_params(&self, cell: ActiveCellId) -> &ThreePhaseMaterial {
        self.materials.params(cell)
    }

    /// Returns the material law set
    pub fn materials(&self) -> &MaterialLawSet {
        &self.materials
    }

    /// Returns the fluid system
    pub fn fluids(&self) -> &FluidSystem {
        &self.fluids
    }

    /// Returns the initial thermodynamic state of an active cell
    pub fn initial_state(&self, cell: ActiveCellId) -> &FluidState {
        &self.initial_states[cell]
    }

    /// Returns the uniform reservoir temperature
    pub fn temperature(&self) -> f64 {
        self.temperature
    }
}

/// Builds the porosity of every active cell from PORO, NTG, and MULTPV
fn build_porosity(grid: &CompressedGrid, deck: &PropertyDeck) -> Result<Vector, StrError> {
    let num_cartesian = grid.num_cartesian_cells();
    let poro = deck.scalar("PORO").ok_or("PORO keyword is missing")?;
    if poro.len() != num_cartesian {
        return Err("PORO array length must match the number of cartesian cells");
    }
    let num_active = grid.num_active_cells();
    let mut porosity = Vector::new(num_active);
    for active in 0..num_active {
        porosity[active] = poro[grid.cartesian_cell(active)];
    }
    if let Some(ntg) = deck.scalar("NTG") {
        if ntg.len() != num_cartesian {
            return Err("NTG array length must match the number of cartesian cells");
        }
        for active in 0..num_active {
            porosity[active] *= ntg[grid.cartesian_cell(active)];
        }
    }
    if let Some(multpv) = deck.scalar("MULTPV") {
        if multpv.len() != num_cartesian {
            return Err("MULTPV array length must match the number of cartesian cells");
        }
        for active in 0..num_active {
            porosity[active] *= multpv[grid.cartesian_cell(active)];
        }
    }
    Ok(porosity)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
