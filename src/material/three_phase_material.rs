use super::TwoPhaseTable;
use crate::base::{Phase, NUM_PHASES};
use serde::{Deserialize, Serialize};

/// Holds the output of a three-phase material law evaluation
#[derive(Clone, Copy, Debug)]
pub struct MaterialValues {
    /// Relative permeability of each phase
    pub kr: [f64; NUM_PHASES],

    /// Oil-water capillary pressure `pcow = po - pw`
    pub pc_oil_water: f64,

    /// Gas-oil capillary pressure `pcgo = pg - po`
    pub pc_gas_oil: f64,
}

/// Composes a three-phase material law from two two-phase tables
///
/// The oil-water table is indexed by the water saturation and the gas-oil
/// table by the oil saturation. The water and gas relative permeabilities
/// come directly from their two-phase tables; the oil relative permeability
/// interpolates between the oil-water and gas-oil values weighted by the
/// mobile water and gas saturations:
///
/// ```text
/// kro = (sg·krog + (sw - swco)·krow) / (sg + sw - swco)
/// ```
///
/// where `swco` is the connate water saturation (the smallest water
/// saturation sample). In the two-phase limits this reduces to `krow`
/// (no gas) or `krog` (connate water).
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ThreePhaseMaterial {
    /// Oil-water law (abscissa: water saturation)
    pub oil_water: TwoPhaseTable,

    /// Gas-oil law (abscissa: oil saturation)
    pub gas_oil: TwoPhaseTable,
}

impl ThreePhaseMaterial {
    /// Allocates a new instance
    pub fn new(oil_water: TwoPhaseTable, gas_oil: TwoPhaseTable) -> Self {
        ThreePhaseMaterial { oil_water, gas_oil }
    }

    /// Evaluates the relative permeabilities and capillary pressures
    ///
    /// # Input
    ///
    /// * `sw, so, sg` -- the phase saturations (summing to 1)
    pub fn evaluate(&self, sw: f64, so: f64, sg: f64) -> MaterialValues {
        let krw = self.oil_water.kr_wetting(sw);
        let krow = self.oil_water.kr_non_wetting(sw);
        let krg = self.gas_oil.kr_non_wetting(so);
        let krog = self.gas_oil.kr_wetting(so);

        let swco = self.oil_water.min_saturation();
        let sw_mobile = f64::max(sw - swco, 0.0);
        let weight_sum = sg + sw_mobile;
        let kro = if weight_sum <= f64::EPSILON {
            krow
        } else {
            (sg * krog + sw_mobile * krow) / weight_sum
        };

        let mut kr = [0.0; NUM_PHASES];
        kr[Phase::Water as usize] = krw;
        kr[Phase::Oil as usize] = kro;
        kr[Phase::Gas as usize] = krg;
        MaterialValues {
            kr,
            pc_oil_water: self.oil_water.capillary_pressure(sw),
            pc_gas_oil: self.gas_oil.capillary_pressure(so),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
