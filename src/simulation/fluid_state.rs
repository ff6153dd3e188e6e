use crate::base::{NUM_COMPONENTS, NUM_PHASES};
use serde::{Deserialize, Serialize};

/// Holds the thermodynamic state of the fluids in one active cell
///
/// Arrays are indexed by `Phase as usize` and `Component as usize`.
/// The saturations sum to 1 and, within each phase, the mole fractions
/// sum to 1.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FluidState {
    pub temperature: f64,                                   // uniform temperature
    pub saturation: [f64; NUM_PHASES],                      // phase saturations
    pub pressure: [f64; NUM_PHASES],                        // phase pressures
    pub mole_fraction: [[f64; NUM_COMPONENTS]; NUM_PHASES], // mole_fraction[phase][component]
}

impl FluidState {
    /// Allocates a new instance with zeroed values
    pub fn new() -> Self {
        FluidState {
            temperature: 0.0,
            saturation: [0.0; NUM_PHASES],
            pressure: [0.0; NUM_PHASES],
            mole_fraction: [[0.0; NUM_COMPONENTS]; NUM_PHASES],
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
