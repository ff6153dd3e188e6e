use crate::StrError;

/// Holds configuration data for the black-oil model setup
pub struct Config {
    /// Uniform temperature of the reservoir (K)
    ///
    /// The black-oil model assumes a constant temperature to define its
    /// parameters; the value is copied into every initial fluid state.
    pub temperature: f64,

    /// Molar mass of the water component (kg/mol)
    pub molar_mass_water: f64,

    /// Molar mass of the oil pseudo-component (kg/mol)
    pub molar_mass_oil: f64,
}

impl Config {
    /// Allocates a new instance with default values
    pub fn new() -> Self {
        Config {
            temperature: 293.15,
            molar_mass_water: 18.02e-3,
            molar_mass_oil: 350.0e-3,
        }
    }

    /// Sets the uniform reservoir temperature (K)
    pub fn set_temperature(&mut self, value: f64) -> Result<&mut Self, StrError> {
        if value <= 0.0 {
            return Err("temperature must be > 0.0");
        }
        self.temperature = value;
        Ok(self)
    }

    /// Sets the molar mass of the water component (kg/mol)
    pub fn set_molar_mass_water(&mut self, value: f64) -> Result<&mut Self, StrError> {
        if value <= 0.0 {
            return Err("molar mass of water must be > 0.0");
        }
        self.molar_mass_water = value;
        Ok(self)
    }

    /// Sets the molar mass of the oil pseudo-component (kg/mol)
    pub fn set_molar_mass_oil(&mut self, value: f64) -> Result<&mut Self, StrError> {
        if value <= 0.0 {
            return Err("molar mass of oil must be > 0.0");
        }
        self.molar_mass_oil = value;
        Ok(self)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
