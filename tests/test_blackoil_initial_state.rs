use bosim::{Component, CompressedGrid, Config, Phase, ReservoirModel, SampleDecks, StrError, SwofTable};
use russell_lab::approx_eq;

#[test]
fn test_saturation_regions_select_the_material_law() -> Result<(), StrError> {
    // two regions with distinct oil-water tables; SATNUM selects per cell
    let grid = CompressedGrid::new(2, 1, 1, None)?;
    let mut deck = SampleDecks::uniform(2)?;
    let (_, sgof) = SampleDecks::saturation_tables()?;
    let steep = SwofTable::new(vec![0.15, 1.0], vec![0.0, 1.0], vec![1.0, 0.0], vec![8e4, 0.0])?;
    deck.swof.push(steep);
    deck.sgof.push(sgof);
    deck.set_int("SATNUM", vec![1, 2]);
    let model = ReservoirModel::new(&grid, &deck, &Config::new())?;
    assert_eq!(model.materials().num_regions(), 2);
    assert_eq!(model.materials().region(0), 0);
    assert_eq!(model.materials().region(1), 1);
    // the two cells now evaluate different capillary pressures
    let pc0 = model.material_params(0).evaluate(0.15, 0.85, 0.0).pc_oil_water;
    let pc1 = model.material_params(1).evaluate(0.15, 0.85, 0.0).pc_oil_water;
    assert_eq!(pc0, 4e4);
    assert_eq!(pc1, 8e4);
    Ok(())
}

#[test]
fn test_out_of_range_satnum_aborts_initialization() -> Result<(), StrError> {
    let grid = CompressedGrid::new(2, 1, 1, None)?;
    let mut deck = SampleDecks::uniform(2)?;
    deck.set_int("SATNUM", vec![0, 1]);
    assert_eq!(
        ReservoirModel::new(&grid, &deck, &Config::new()).err(),
        Some("SATNUM region index is out of range")
    );
    deck.set_int("SATNUM", vec![1, 2]);
    assert_eq!(
        ReservoirModel::new(&grid, &deck, &Config::new()).err(),
        Some("SATNUM region index is out of range")
    );
    Ok(())
}

#[test]
fn test_initial_state_follows_the_cartesian_map() -> Result<(), StrError> {
    // middle cell removed: active cell 1 must read cartesian cell 2
    let grid = CompressedGrid::new(3, 1, 1, Some(&[true, false, true]))?;
    let mut deck = SampleDecks::uniform(3)?;
    deck.set_scalar("SWAT", vec![0.3, 0.9, 0.4])
        .set_scalar("SGAS", vec![0.2, 0.0, 0.1])
        .set_scalar("PRESSURE", vec![2e7, 0.0, 1e7]);
    let model = ReservoirModel::new(&grid, &deck, &Config::new())?;
    let state = model.initial_state(1);
    approx_eq(state.saturation[Phase::Water as usize], 0.4, 1e-15);
    approx_eq(state.saturation[Phase::Oil as usize], 0.5, 1e-15);
    approx_eq(state.saturation[Phase::Gas as usize], 0.1, 1e-15);
    assert_eq!(state.pressure, [1e7, 1e7, 1e7]);
    // lower pressure dissolves less gas into the oil phase
    let x_gas_0 = model.initial_state(0).mole_fraction[Phase::Oil as usize][Component::Gas as usize];
    let x_gas_1 = state.mole_fraction[Phase::Oil as usize][Component::Gas as usize];
    assert!(x_gas_1 < x_gas_0);
    Ok(())
}

#[test]
fn test_inconsistent_saturations_abort_initialization() -> Result<(), StrError> {
    let grid = CompressedGrid::new(1, 1, 1, None)?;
    let mut deck = SampleDecks::uniform(1)?;
    deck.set_scalar("SWAT", vec![0.8]).set_scalar("SGAS", vec![0.3]);
    assert_eq!(
        ReservoirModel::new(&grid, &deck, &Config::new()).err(),
        Some("initial saturations must define an oil saturation within [0,1]")
    );
    Ok(())
}
