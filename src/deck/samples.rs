use super::{DensityRecord, PropertyDeck, PvdgTable, PvtoTable, PvtwTable, SgofTable, SwofTable};
use crate::StrError;

/// Holds functions to generate sample property decks
pub struct SampleDecks {}

impl SampleDecks {
    /// Returns a single-region pair of saturation function tables
    pub fn saturation_tables() -> Result<(SwofTable, SgofTable), StrError> {
        let swof = SwofTable::new(
            vec![0.15, 0.5, 0.85, 1.0],
            vec![0.0, 0.2, 0.6, 1.0],
            vec![1.0, 0.5, 0.1, 0.0],
            vec![4e4, 2e4, 1e4, 0.0],
        )?;
        let sgof = SgofTable::new(
            vec![0.0, 0.3, 0.6, 0.85],
            vec![0.0, 0.1, 0.5, 1.0],
            vec![1.0, 0.4, 0.1, 0.0],
            vec![0.0, 1e4, 2e4, 3e4],
        )?;
        Ok((swof, sgof))
    }

    /// Returns the PVT tables and surface densities shared by the sample decks
    pub fn fluid_tables() -> Result<(PvtoTable, PvtwTable, PvdgTable, DensityRecord), StrError> {
        let pvto = PvtoTable::new(
            vec![1e7, 2e7, 3e7],
            vec![50.0, 90.0, 120.0],
            vec![1.12, 1.25, 1.35],
            vec![1.5e-3, 1.2e-3, 1.0e-3],
        )?;
        let pvtw = PvtwTable::new(2e7, 1.03, 4.5e-10, 3e-4)?;
        let pvdg = PvdgTable::new(
            vec![1e7, 2e7, 3e7],
            vec![0.012, 0.006, 0.004],
            vec![1.5e-5, 1.8e-5, 2.1e-5],
        )?;
        let density = DensityRecord::new(850.0, 1000.0, 0.9)?;
        Ok((pvto, pvtw, pvdg, density))
    }

    /// Returns a deck with uniform properties for a given number of cartesian cells
    ///
    /// The deck carries PERMX (no PERMY/PERMZ), PORO, the initial state
    /// arrays, a single saturation region, and the fluid tables.
    pub fn uniform(num_cartesian_cells: usize) -> Result<PropertyDeck, StrError> {
        let n = num_cartesian_cells;
        let mut deck = PropertyDeck::new();
        deck.set_scalar("PERMX", vec![100.0; n])
            .set_scalar("PORO", vec![0.25; n])
            .set_scalar("SWAT", vec![0.3; n])
            .set_scalar("SGAS", vec![0.2; n])
            .set_scalar("PRESSURE", vec![2e7; n])
            .set_scalar("RS", vec![60.0; n]);
        let (swof, sgof) = SampleDecks::saturation_tables()?;
        deck.swof.push(swof);
        deck.sgof.push(sgof);
        let (pvto, pvtw, pvdg, density) = SampleDecks::fluid_tables()?;
        deck.pvto = Some(pvto);
        deck.pvtw = Some(pvtw);
        deck.pvdg = Some(pvdg);
        deck.density = Some(density);
        Ok(deck)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
