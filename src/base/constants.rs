/// Defines the number of fluid phases (water, oil, gas)
pub const NUM_PHASES: usize = 3;

/// Defines the number of pseudo-components (water, oil, gas)
pub const NUM_COMPONENTS: usize = 3;

/// Standard (surface) pressure in Pa
pub const STANDARD_PRESSURE: f64 = 101325.0;

/// Standard (surface) temperature in K
pub const STANDARD_TEMPERATURE: f64 = 288.71;

/// Universal gas constant in J/(mol·K)
pub const UNIVERSAL_GAS_CONSTANT: f64 = 8.3145;

/// Defines an auxiliary directory where the test result files are saved
pub const DEFAULT_TEST_DIR: &str = "/tmp/bosim/test";
