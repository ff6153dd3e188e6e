use crate::base::{
    interp_linear, Component, Config, Phase, NUM_COMPONENTS, NUM_PHASES, STANDARD_PRESSURE, STANDARD_TEMPERATURE,
    UNIVERSAL_GAS_CONSTANT,
};
use crate::deck::{PropertyDeck, PvdgTable, PvtoTable, PvtwTable};
use crate::StrError;

/// Implements the pressure-dependent black-oil fluid system
///
/// The system is configured once from the mandatory PVTO, PVTW, and PVDG
/// tables and the DENSITY record, and is immutable afterwards.
///
/// # Notation
///
/// * `Bo(p)` -- oil formation volume factor (live oil, saturated curve)
/// * `Rs(p)` -- dissolved gas-oil ratio
/// * `Bw(p)` -- water formation volume factor `Bw = Bw,ref/(1 + x + x²/2)`
///   with `x = cw·(p - p_ref)`
/// * `Bg(p)` -- gas formation volume factor
/// * `ρ_o(p) = (ρ_o,surf + Rs(p)·ρ_g,surf)/Bo(p)` -- oil density at
///   reservoir conditions (the dissolved gas adds to the oil mass)
/// * `ρ_w(p) = ρ_w,surf/Bw(p)` and `ρ_g(p) = ρ_g,surf/Bg(p)`
pub struct FluidSystem {
    /// Live-oil PVT table (saturated curve)
    pvto: PvtoTable,

    /// Water PVT record
    pvtw: PvtwTable,

    /// Dry-gas PVT table
    pvdg: PvdgTable,

    /// Reference (surface) density of each phase
    surface_density: [f64; NUM_PHASES],

    /// Normalized reference volume factor of each phase
    ///
    /// The volume factor tables are already expressed relative to surface
    /// conditions, hence the factor is 1.0 for every phase.
    reference_volume_factor: [f64; NUM_PHASES],

    /// Molar mass of each component
    molar_mass: [f64; NUM_COMPONENTS],
}

impl FluidSystem {
    /// Allocates a new instance from the mandatory PVT keywords
    pub fn new(deck: &PropertyDeck, config: &Config) -> Result<Self, StrError> {
        let pvto = deck.pvto.clone().ok_or("PVTO keyword is missing")?;
        let pvtw = deck.pvtw.clone().ok_or("PVTW keyword is missing")?;
        let pvdg = deck.pvdg.clone().ok_or("PVDG keyword is missing")?;
        let density = deck.density.clone().ok_or("DENSITY keyword is missing")?;

        let mut surface_density = [0.0; NUM_PHASES];
        surface_density[Phase::Water as usize] = density.water;
        surface_density[Phase::Oil as usize] = density.oil;
        surface_density[Phase::Gas as usize] = density.gas;

        let mut molar_mass = [0.0; NUM_COMPONENTS];
        molar_mass[Component::Water as usize] = config.molar_mass_water;
        molar_mass[Component::Oil as usize] = config.molar_mass_oil;
        // gas molar mass from the ideal gas law at surface conditions
        molar_mass[Component::Gas as usize] =
            density.gas * UNIVERSAL_GAS_CONSTANT * STANDARD_TEMPERATURE / STANDARD_PRESSURE;

        Ok(FluidSystem {
            pvto,
            pvtw,
            pvdg,
            surface_density,
            reference_volume_factor: [1.0; NUM_PHASES],
            molar_mass,
        })
    }

    /// Evaluates the oil formation volume factor Bo(p)
    pub fn oil_formation_volume_factor(&self, p: f64) -> f64 {
        interp_linear(&self.pvto.pressure, &self.pvto.fvf, p)
    }

    /// Evaluates the dissolved gas-oil ratio Rs(p)
    pub fn gas_dissolution_factor(&self, p: f64) -> f64 {
        interp_linear(&self.pvto.pressure, &self.pvto.rs, p)
    }

    /// Evaluates the water formation volume factor Bw(p)
    pub fn water_formation_volume_factor(&self, p: f64) -> f64 {
        let x = self.pvtw.compressibility * (p - self.pvtw.p_ref);
        self.pvtw.fvf_ref / (1.0 + x + x * x / 2.0)
    }

    /// Evaluates the gas formation volume factor Bg(p)
    pub fn gas_formation_volume_factor(&self, p: f64) -> f64 {
        interp_linear(&self.pvdg.pressure, &self.pvdg.fvf, p)
    }

    /// Evaluates the density of a phase at the given pressure
    pub fn density(&self, phase: Phase, p: f64) -> f64 {
        match phase {
            Phase::Water => self.surface_density[Phase::Water as usize] / self.water_formation_volume_factor(p),
            Phase::Oil => {
                let bo = self.oil_formation_volume_factor(p);
                let rs = self.gas_dissolution_factor(p);
                (self.surface_density[Phase::Oil as usize] + rs * self.surface_density[Phase::Gas as usize]) / bo
            }
            Phase::Gas => self.surface_density[Phase::Gas as usize] / self.gas_formation_volume_factor(p),
        }
    }

    /// Evaluates the viscosity of a phase at the given pressure
    pub fn viscosity(&self, phase: Phase, p: f64) -> f64 {
        match phase {
            Phase::Water => self.pvtw.viscosity,
            Phase::Oil => interp_linear(&self.pvto.pressure, &self.pvto.viscosity, p),
            Phase::Gas => interp_linear(&self.pvdg.pressure, &self.pvdg.viscosity, p),
        }
    }

    /// Returns the reference (surface) density of a phase
    pub fn surface_density(&self, phase: Phase) -> f64 {
        self.surface_density[phase as usize]
    }

    /// Returns the normalized reference volume factor of a phase
    pub fn reference_volume_factor(&self, phase: Phase) -> f64 {
        self.reference_volume_factor[phase as usize]
    }

    /// Returns the molar mass of a component
    pub fn molar_mass(&self, component: Component) -> f64 {
        self.molar_mass[component as usize]
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
