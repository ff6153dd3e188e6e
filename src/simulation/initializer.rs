use super::FluidState;
use crate::base::{Component, Config, Phase, NUM_PHASES};
use crate::deck::PropertyDeck;
use crate::fluid::FluidSystem;
use crate::grid::CompressedGrid;
use crate::StrError;

/// Tolerance for the oil saturation derived from `So = 1 - Sw - Sg`
const SATURATION_TOL: f64 = 1e-12;

/// Computes the initial thermodynamic state of every active cell
///
/// The water and gas saturations, the oil pressure, and the dissolved-gas
/// ratio come from the mandatory SWAT, SGAS, PRESSURE, and RS arrays. The
/// oil-phase composition is derived from the PVT model rather than read
/// directly: the dissolved gas mass fraction follows from `Rs` and the
/// oil density at reservoir conditions, and is then converted to a mole
/// fraction with the component molar masses.
pub struct StateInitializer<'a> {
    /// Access to the active-to-cartesian mapping
    grid: &'a CompressedGrid,

    /// Access to the pressure-dependent fluid model
    fluids: &'a FluidSystem,

    /// Uniform reservoir temperature
    temperature: f64,
}

impl<'a> StateInitializer<'a> {
    /// Allocates a new instance
    pub fn new(grid: &'a CompressedGrid, fluids: &'a FluidSystem, config: &Config) -> Self {
        StateInitializer {
            grid,
            fluids,
            temperature: config.temperature,
        }
    }

    /// Computes the initial fluid state of every active cell
    pub fn initialize(&self, deck: &PropertyDeck) -> Result<Vec<FluidState>, StrError> {
        let num_cartesian = self.grid.num_cartesian_cells();
        let water_saturation = deck.scalar("SWAT").ok_or("SWAT keyword is missing")?;
        let gas_saturation = deck.scalar("SGAS").ok_or("SGAS keyword is missing")?;
        let pressure = deck.scalar("PRESSURE").ok_or("PRESSURE keyword is missing")?;
        let dissolved_gas = deck.scalar("RS").ok_or("RS keyword is missing")?;
        if water_saturation.len() != num_cartesian {
            return Err("SWAT array length must match the number of cartesian cells");
        }
        if gas_saturation.len() != num_cartesian {
            return Err("SGAS array length must match the number of cartesian cells");
        }
        if pressure.len() != num_cartesian {
            return Err("PRESSURE array length must match the number of cartesian cells");
        }
        if dissolved_gas.len() != num_cartesian {
            return Err("RS array length must match the number of cartesian cells");
        }

        let num_active = self.grid.num_active_cells();
        let mut states = Vec::with_capacity(num_active);
        for active in 0..num_active {
            let cartesian = self.grid.cartesian_cell(active);
            if cartesian >= num_cartesian {
                return Err("cartesian cell index is out of range");
            }
            let mut state = FluidState::new();

            // temperature
            state.temperature = self.temperature;

            // saturations; a deck with inconsistent saturations is rejected
            let sw = water_saturation[cartesian];
            let sg = gas_saturation[cartesian];
            let so = 1.0 - sw - sg;
            if so < -SATURATION_TOL || so > 1.0 + SATURATION_TOL {
                return Err("initial saturations must define an oil saturation within [0,1]");
            }
            state.saturation[Phase::Water as usize] = sw;
            state.saturation[Phase::Oil as usize] = so;
            state.saturation[Phase::Gas as usize] = sg;

            // a single oil pressure is broadcast to every phase; capillary
            // pressure corrections are left to the solver
            let oil_pressure = pressure[cartesian];
            for phase in 0..NUM_PHASES {
                state.pressure[phase] = oil_pressure;
            }

            // the water and gas phases are pure
            state.mole_fraction[Phase::Water as usize][Component::Water as usize] = 1.0;
            state.mole_fraction[Phase::Gas as usize][Component::Gas as usize] = 1.0;

            // composition of the oil phase: the dissolved gas mass fraction
            // follows from Rs evaluated at the local oil pressure
            let bo = self.fluids.oil_formation_volume_factor(oil_pressure);
            let rs = self.fluids.gas_dissolution_factor(oil_pressure);
            let rho_oil = self.fluids.surface_density(Phase::Oil) / bo;
            let rho_gas_ref = self.fluids.surface_density(Phase::Gas);
            let mass_frac_gas = rs * rho_gas_ref / rho_oil;

            // convert mass to mole fractions
            let mm_gas = self.fluids.molar_mass(Component::Gas);
            let mm_oil = self.fluids.molar_mass(Component::Oil);
            let mole_frac_gas = mass_frac_gas * mm_oil / ((mm_oil - mm_gas) * mass_frac_gas + mm_gas);
            state.mole_fraction[Phase::Oil as usize][Component::Gas as usize] = mole_frac_gas;
            state.mole_fraction[Phase::Oil as usize][Component::Oil as usize] = 1.0 - mole_frac_gas;

            states.push(state);
        }
        Ok(states)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::StateInitializer;
    use crate::base::{Component, Config, Phase};
    use crate::deck::{PropertyDeck, PvtoTable, SampleDecks};
    use crate::fluid::FluidSystem;
    use crate::grid::CompressedGrid;
    use russell_lab::approx_eq;

    #[test]
    fn initialize_captures_missing_keywords() {
        let grid = CompressedGrid::new(1, 1, 1, None).unwrap();
        let config = Config::new();
        let full = SampleDecks::uniform(1).unwrap();
        let fluids = FluidSystem::new(&full, &config).unwrap();
        let initializer = StateInitializer::new(&grid, &fluids, &config);
        let mut deck = PropertyDeck::new();
        assert_eq!(initializer.initialize(&deck).err(), Some("SWAT keyword is missing"));
        deck.set_scalar("SWAT", vec![0.3]);
        assert_eq!(initializer.initialize(&deck).err(), Some("SGAS keyword is missing"));
        deck.set_scalar("SGAS", vec![0.2]);
        assert_eq!(initializer.initialize(&deck).err(), Some("PRESSURE keyword is missing"));
        deck.set_scalar("PRESSURE", vec![2e7]);
        assert_eq!(initializer.initialize(&deck).err(), Some("RS keyword is missing"));
        deck.set_scalar("RS", vec![60.0, 60.0]);
        assert_eq!(
            initializer.initialize(&deck).err(),
            Some("RS array length must match the number of cartesian cells")
        );
    }

    #[test]
    fn initialize_works() {
        let grid = CompressedGrid::new(2, 1, 1, None).unwrap();
        let config = Config::new();
        let deck = SampleDecks::uniform(2).unwrap();
        let fluids = FluidSystem::new(&deck, &config).unwrap();
        let initializer = StateInitializer::new(&grid, &fluids, &config);
        let states = initializer.initialize(&deck).unwrap();
        assert_eq!(states.len(), 2);
        for state in &states {
            assert_eq!(state.temperature, config.temperature);

            // Sw = 0.3 and Sg = 0.2 yield So = 0.5
            approx_eq(state.saturation[Phase::Water as usize], 0.3, 1e-15);
            approx_eq(state.saturation[Phase::Oil as usize], 0.5, 1e-15);
            approx_eq(state.saturation[Phase::Gas as usize], 0.2, 1e-15);
            let sum: f64 = state.saturation.iter().sum();
            approx_eq(sum, 1.0, 1e-14);

            // the oil pressure is broadcast to every phase
            assert_eq!(state.pressure, [2e7, 2e7, 2e7]);

            // pure water and gas phases; binary oil phase
            assert_eq!(state.mole_fraction[Phase::Water as usize], [1.0, 0.0, 0.0]);
            assert_eq!(state.mole_fraction[Phase::Gas as usize], [0.0, 0.0, 1.0]);
            for phase in 0..3 {
                let sum: f64 = state.mole_fraction[phase].iter().sum();
                approx_eq(sum, 1.0, 1e-14);
            }

            // check the mass-to-mole conversion against the formulas
            let bo = fluids.oil_formation_volume_factor(2e7);
            let rs = fluids.gas_dissolution_factor(2e7);
            let mass_frac_gas = rs * fluids.surface_density(Phase::Gas) / (fluids.surface_density(Phase::Oil) / bo);
            let (mm_oil, mm_gas) = (fluids.molar_mass(Component::Oil), fluids.molar_mass(Component::Gas));
            let expected = mass_frac_gas * mm_oil / ((mm_oil - mm_gas) * mass_frac_gas + mm_gas);
            approx_eq(state.mole_fraction[Phase::Oil as usize][Component::Gas as usize], expected, 1e-15);
            approx_eq(
                state.mole_fraction[Phase::Oil as usize][Component::Oil as usize],
                1.0 - expected,
                1e-15,
            );
            assert!(expected > 0.0 && expected < 1.0);
        }
    }

    #[test]
    fn dead_oil_has_a_pure_oil_phase() {
        // Rs = 0 at every pressure must reduce the oil phase to pure oil
        let grid = CompressedGrid::new(1, 1, 1, None).unwrap();
        let config = Config::new();
        let mut deck = SampleDecks::uniform(1).unwrap();
        deck.pvto = Some(PvtoTable::new(vec![1e7, 3e7], vec![0.0, 0.0], vec![1.12, 1.35], vec![1.5e-3, 1.0e-3]).unwrap());
        let fluids = FluidSystem::new(&deck, &config).unwrap();
        let initializer = StateInitializer::new(&grid, &fluids, &config);
        let states = initializer.initialize(&deck).unwrap();
        assert_eq!(states[0].mole_fraction[Phase::Oil as usize][Component::Gas as usize], 0.0);
        assert_eq!(states[0].mole_fraction[Phase::Oil as usize][Component::Oil as usize], 1.0);
    }

    #[test]
    fn inconsistent_saturations_are_rejected() {
        let grid = CompressedGrid::new(1, 1, 1, None).unwrap();
        let config = Config::new();
        let mut deck = SampleDecks::uniform(1).unwrap();
        deck.set_scalar("SWAT", vec![0.7]).set_scalar("SGAS", vec![0.5]);
        let fluids = FluidSystem::new(&deck, &config).unwrap();
        let initializer = StateInitializer::new(&grid, &fluids, &config);
        assert_eq!(
            initializer.initialize(&deck).err(),
            Some("initial saturations must define an oil saturation within [0,1]")
        );
    }
}
