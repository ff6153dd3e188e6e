use super::{DensityRecord, PvdgTable, PvtoTable, PvtwTable, SgofTable, SwofTable};
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds the raw per-cartesian-cell arrays and keyword tables of a deck
///
/// The scalar and integer arrays are stored in raw file order with one entry
/// per cell of the uncompressed cartesian grid. Whether a keyword is present
/// is a pure existence check; the consumers of this deck attach the fatal
/// error corresponding to each missing mandatory keyword.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct PropertyDeck {
    /// Named per-cartesian-cell scalar arrays (e.g., PERMX, PORO, SWAT)
    scalar_properties: HashMap<String, Vec<f64>>,

    /// Named per-cartesian-cell integer arrays (e.g., SATNUM)
    int_properties: HashMap<String, Vec<i32>>,

    /// Oil-water saturation function tables, one per saturation region
    pub swof: Vec<SwofTable>,

    /// Gas-oil saturation function tables, one per saturation region
    pub sgof: Vec<SgofTable>,

    /// Live-oil PVT table (saturated curve)
    pub pvto: Option<PvtoTable>,

    /// Water PVT record
    pub pvtw: Option<PvtwTable>,

    /// Dry-gas PVT table
    pub pvdg: Option<PvdgTable>,

    /// Reference (surface) densities of the phases
    pub density: Option<DensityRecord>,
}

impl PropertyDeck {
    /// Allocates a new empty instance
    pub fn new() -> Self {
        PropertyDeck::default()
    }

    /// Sets a named per-cartesian-cell scalar array
    pub fn set_scalar(&mut self, name: &str, data: Vec<f64>) -> &mut Self {
        self.scalar_properties.insert(name.to_string(), data);
        self
    }

    /// Sets a named per-cartesian-cell integer array
    pub fn set_int(&mut self, name: &str, data: Vec<i32>) -> &mut Self {
        self.int_properties.insert(name.to_string(), data);
        self
    }

    /// Checks whether a named scalar array is present
    pub fn has_scalar(&self, name: &str) -> bool {
        self.scalar_properties.contains_key(name)
    }

    /// Checks whether a named integer array is present
    pub fn has_int(&self, name: &str) -> bool {
        self.int_properties.contains_key(name)
    }

    /// Returns a named scalar array or None if the keyword is absent
    pub fn scalar(&self, name: &str) -> Option<&[f64]> {
        self.scalar_properties.get(name).map(|v| v.as_slice())
    }

    /// Returns a named integer array or None if the keyword is absent
    pub fn int(&self, name: &str) -> Option<&[i32]> {
        self.int_properties.get(name).map(|v| v.as_slice())
    }

    /// Reads a JSON file containing a property deck
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(path).map_err(|_| "cannot open deck file")?;
        let reader = BufReader::new(file);
        let deck = serde_json::from_reader(reader).map_err(|_| "cannot parse deck file")?;
        Ok(deck)
    }

    /// Writes a JSON file with this property deck
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create deck file")?;
        serde_json::to_writer(&mut file, &self).map_err(|_| "cannot write deck file")?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
