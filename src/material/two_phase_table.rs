use crate::base::interp_linear;
use crate::deck::{SgofTable, SwofTable};
use crate::StrError;
use serde::{Deserialize, Serialize};

/// Implements a piecewise-linear two-phase saturation function
///
/// Monotonic saturation samples map the wetting-phase saturation to the
/// relative permeability of the wetting and non-wetting phases and to the
/// capillary pressure. Evaluations outside the sampled range are clamped to
/// the endpoint values.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TwoPhaseTable {
    /// Wetting-phase saturation samples (strictly increasing)
    sat: Vec<f64>,

    /// Relative permeability of the wetting phase
    kr_wetting: Vec<f64>,

    /// Relative permeability of the non-wetting phase
    kr_non_wetting: Vec<f64>,

    /// Capillary pressure (non-wetting minus wetting pressure)
    capillary_pressure: Vec<f64>,
}

impl TwoPhaseTable {
    /// Allocates a new instance from raw sample columns
    pub fn new(
        sat: Vec<f64>,
        kr_wetting: Vec<f64>,
        kr_non_wetting: Vec<f64>,
        capillary_pressure: Vec<f64>,
    ) -> Result<Self, StrError> {
        if sat.len() < 2 {
            return Err("two-phase table requires at least two samples");
        }
        if kr_wetting.len() != sat.len()
            || kr_non_wetting.len() != sat.len()
            || capillary_pressure.len() != sat.len()
        {
            return Err("two-phase table columns must have the same length");
        }
        if !sat.windows(2).all(|w| w[0] < w[1]) {
            return Err("two-phase table saturation samples must be strictly increasing");
        }
        Ok(TwoPhaseTable {
            sat,
            kr_wetting,
            kr_non_wetting,
            capillary_pressure,
        })
    }

    /// Builds the oil-water law from an SWOF table
    ///
    /// Water is the wetting phase; the abscissa is the water saturation.
    pub fn from_swof(table: &SwofTable) -> Result<Self, StrError> {
        TwoPhaseTable::new(
            table.sw.clone(),
            table.krw.clone(),
            table.krow.clone(),
            table.pcow.clone(),
        )
    }

    /// Builds the gas-oil law from an SGOF table
    ///
    /// Oil is the wetting phase and the abscissa is the oil saturation;
    /// the gas-saturation samples are converted via `So = 1 - Sg`, which
    /// reverses the sample order so that the abscissa stays increasing.
    pub fn from_sgof(table: &SgofTable) -> Result<Self, StrError> {
        let n = table.sg.len();
        let mut so = Vec::with_capacity(n);
        let mut krog = Vec::with_capacity(n);
        let mut krg = Vec::with_capacity(n);
        let mut pcog = Vec::with_capacity(n);
        for i in (0..n).rev() {
            so.push(1.0 - table.sg[i]);
            krog.push(table.krog[i]);
            krg.push(table.krg[i]);
            pcog.push(table.pcog[i]);
        }
        TwoPhaseTable::new(so, krog, krg, pcog)
    }

    /// Returns the smallest saturation sample (e.g., the connate saturation)
    pub fn min_saturation(&self) -> f64 {
        self.sat[0]
    }

    /// Evaluates the relative permeability of the wetting phase
    pub fn kr_wetting(&self, sat: f64) -> f64 {
        interp_linear(&self.sat, &self.kr_wetting, sat)
    }

    /// Evaluates the relative permeability of the non-wetting phase
    pub fn kr_non_wetting(&self, sat: f64) -> f64 {
        interp_linear(&self.sat, &self.kr_non_wetting, sat)
    }

    /// Evaluates the capillary pressure
    pub fn capillary_pressure(&self, sat: f64) -> f64 {
        interp_linear(&self.sat, &self.capillary_pressure, sat)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
