use crate::StrError;
use serde::{Deserialize, Serialize};

/// Holds one oil-water saturation function table (SWOF keyword)
///
/// All columns are sampled at the water saturation values in `sw`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SwofTable {
    pub sw: Vec<f64>,   // water saturation samples
    pub krw: Vec<f64>,  // relative permeability of water
    pub krow: Vec<f64>, // relative permeability of oil in the oil-water system
    pub pcow: Vec<f64>, // oil-water capillary pressure
}

/// Holds one gas-oil saturation function table (SGOF keyword)
///
/// All columns are sampled at the gas saturation values in `sg`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SgofTable {
    pub sg: Vec<f64>,   // gas saturation samples
    pub krg: Vec<f64>,  // relative permeability of gas
    pub krog: Vec<f64>, // relative permeability of oil in the gas-oil system
    pub pcog: Vec<f64>, // gas-oil capillary pressure
}

/// Holds the live-oil PVT table (PVTO keyword, saturated curve)
///
/// All columns are sampled at the pressure values in `pressure`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PvtoTable {
    pub pressure: Vec<f64>,  // pressure samples
    pub rs: Vec<f64>,        // dissolved gas-oil ratio Rs(p)
    pub fvf: Vec<f64>,       // oil formation volume factor Bo(p)
    pub viscosity: Vec<f64>, // oil viscosity μo(p)
}

/// Holds the water PVT data (PVTW keyword, single record)
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PvtwTable {
    pub p_ref: f64,           // reference pressure
    pub fvf_ref: f64,         // water formation volume factor at p_ref
    pub compressibility: f64, // water compressibility cw
    pub viscosity: f64,       // constant water viscosity μw
}

/// Holds the dry-gas PVT table (PVDG keyword)
///
/// All columns are sampled at the pressure values in `pressure`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PvdgTable {
    pub pressure: Vec<f64>,  // pressure samples
    pub fvf: Vec<f64>,       // gas formation volume factor Bg(p)
    pub viscosity: Vec<f64>, // gas viscosity μg(p)
}

/// Holds the reference (surface) densities of the phases (DENSITY keyword)
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct DensityRecord {
    pub oil: f64,   // oil surface density
    pub water: f64, // water surface density
    pub gas: f64,   // gas surface density
}

impl SwofTable {
    /// Allocates a new instance with validated columns
    pub fn new(sw: Vec<f64>, krw: Vec<f64>, krow: Vec<f64>, pcow: Vec<f64>) -> Result<Self, StrError> {
        if sw.len() < 2 {
            return Err("SWOF table requires at least two samples");
        }
        if krw.len() != sw.len() || krow.len() != sw.len() || pcow.len() != sw.len() {
            return Err("SWOF table columns must have the same length");
        }
        if !strictly_increasing(&sw) {
            return Err("SWOF saturation samples must be strictly increasing");
        }
        Ok(SwofTable { sw, krw, krow, pcow })
    }
}

impl SgofTable {
    /// Allocates a new instance with validated columns
    pub fn new(sg: Vec<f64>, krg: Vec<f64>, krog: Vec<f64>, pcog: Vec<f64>) -> Result<Self, StrError> {
        if sg.len() < 2 {
            return Err("SGOF table requires at least two samples");
        }
        if krg.len() != sg.len() || krog.len() != sg.len() || pcog.len() != sg.len() {
            return Err("SGOF table columns must have the same length");
        }
        if !strictly_increasing(&sg) {
            return Err("SGOF saturation samples must be strictly increasing");
        }
        Ok(SgofTable { sg, krg, krog, pcog })
    }
}

impl PvtoTable {
    /// Allocates a new instance with validated columns
    pub fn new(pressure: Vec<f64>, rs: Vec<f64>, fvf: Vec<f64>, viscosity: Vec<f64>) -> Result<Self, StrError> {
        if pressure.len() < 2 {
            return Err("PVTO table requires at least two samples");
        }
        if rs.len() != pressure.len() || fvf.len() != pressure.len() || viscosity.len() != pressure.len() {
            return Err("PVTO table columns must have the same length");
        }
        if !strictly_increasing(&pressure) {
            return Err("PVTO pressure samples must be strictly increasing");
        }
        if fvf.iter().any(|b| *b <= 0.0) {
            return Err("PVTO formation volume factors must be positive");
        }
        Ok(PvtoTable {
            pressure,
            rs,
            fvf,
            viscosity,
        })
    }
}

impl PvtwTable {
    /// Allocates a new instance with validated values
    pub fn new(p_ref: f64, fvf_ref: f64, compressibility: f64, viscosity: f64) -> Result<Self, StrError> {
        if fvf_ref <= 0.0 {
            return Err("PVTW formation volume factor must be positive");
        }
        if compressibility < 0.0 {
            return Err("PVTW compressibility must not be negative");
        }
        if viscosity <= 0.0 {
            return Err("PVTW viscosity must be positive");
        }
        Ok(PvtwTable {
            p_ref,
            fvf_ref,
            compressibility,
            viscosity,
        })
    }
}

impl PvdgTable {
    /// Allocates a new instance with validated columns
    pub fn new(pressure: Vec<f64>, fvf: Vec<f64>, viscosity: Vec<f64>) -> Result<Self, StrError> {
        if pressure.len() < 2 {
            return Err("PVDG table requires at least two samples");
        }
        if fvf.len() != pressure.len() || viscosity.len() != pressure.len() {
            return Err("PVDG table columns must have the same length");
        }
        if !strictly_increasing(&pressure) {
            return Err("PVDG pressure samples must be strictly increasing");
        }
        if fvf.iter().any(|b| *b <= 0.0) {
            return Err("PVDG formation volume factors must be positive");
        }
        Ok(PvdgTable {
            pressure,
            fvf,
            viscosity,
        })
    }
}

impl DensityRecord {
    /// Allocates a new instance with validated values
    pub fn new(oil: f64, water: f64, gas: f64) -> Result<Self, StrError> {
        if oil <= 0.0 || water <= 0.0 || gas <= 0.0 {
            return Err("DENSITY surface densities must be positive");
        }
        Ok(DensityRecord { oil, water, gas })
    }
}

/// Checks whether the samples are strictly increasing
fn strictly_increasing(xx: &[f64]) -> bool {
    xx.windows(2).all(|w| w[0] < w[1])
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{DensityRecord, PvdgTable, PvtoTable, PvtwTable, SgofTable, SwofTable};

    #[test]
    fn swof_and_sgof_capture_wrong_input() {
        assert_eq!(
            SwofTable::new(vec![0.2], vec![0.0], vec![1.0], vec![0.0]).err(),
            Some("SWOF table requires at least two samples")
        );
        assert_eq!(
            SwofTable::new(vec![0.2, 0.8], vec![0.0], vec![1.0, 0.0], vec![0.0, 0.0]).err(),
            Some("SWOF table columns must have the same length")
        );
        assert_eq!(
            SwofTable::new(vec![0.8, 0.2], vec![0.0, 1.0], vec![1.0, 0.0], vec![0.0, 0.0]).err(),
            Some("SWOF saturation samples must be strictly increasing")
        );
        assert_eq!(
            SgofTable::new(vec![0.0, 0.0], vec![0.0, 1.0], vec![1.0, 0.0], vec![0.0, 0.0]).err(),
            Some("SGOF saturation samples must be strictly increasing")
        );
    }

    #[test]
    fn pvt_tables_capture_wrong_input() {
        assert_eq!(
            PvtoTable::new(vec![1e7, 2e7], vec![50.0, 90.0], vec![1.1, -0.2], vec![1e-3, 1e-3]).err(),
            Some("PVTO formation volume factors must be positive")
        );
        assert_eq!(
            PvtoTable::new(vec![2e7, 1e7], vec![50.0, 90.0], vec![1.1, 1.2], vec![1e-3, 1e-3]).err(),
            Some("PVTO pressure samples must be strictly increasing")
        );
        assert_eq!(
            PvtwTable::new(2e7, 0.0, 4e-10, 3e-4).err(),
            Some("PVTW formation volume factor must be positive")
        );
        assert_eq!(
            PvtwTable::new(2e7, 1.03, -4e-10, 3e-4).err(),
            Some("PVTW compressibility must not be negative")
        );
        assert_eq!(
            PvdgTable::new(vec![1e7], vec![0.01], vec![1e-5]).err(),
            Some("PVDG table requires at least two samples")
        );
        assert_eq!(
            DensityRecord::new(850.0, 1000.0, 0.0).err(),
            Some("DENSITY surface densities must be positive")
        );
    }

    #[test]
    fn new_works() {
        let swof = SwofTable::new(vec![0.2, 0.8], vec![0.0, 1.0], vec![1.0, 0.0], vec![1e4, 0.0]).unwrap();
        assert_eq!(swof.sw.len(), 2);
        let sgof = SgofTable::new(vec![0.0, 0.8], vec![0.0, 1.0], vec![1.0, 0.0], vec![0.0, 1e4]).unwrap();
        assert_eq!(sgof.sg.len(), 2);
        let pvto = PvtoTable::new(vec![1e7, 2e7], vec![50.0, 90.0], vec![1.1, 1.2], vec![1e-3, 1e-3]).unwrap();
        assert_eq!(pvto.fvf.len(), 2);
    }
}
