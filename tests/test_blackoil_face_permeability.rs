use bosim::{CompressedGrid, Config, Permeability, PropertyDeck, ReservoirModel, SampleDecks, StrError};
use russell_lab::approx_eq;

#[test]
fn test_two_cell_harmonic_average() -> Result<(), StrError> {
    // two neighboring cells with permeabilities 2 and 8 and no multipliers
    let grid = CompressedGrid::new(2, 1, 1, None)?;
    let mut deck = SampleDecks::uniform(2)?;
    deck.set_scalar("PERMX", vec![2.0, 8.0]);
    let model = ReservoirModel::new(&grid, &deck, &Config::new())?;
    let face = model.face_permeability(0, 1)?;
    approx_eq(face.get(0, 0), 3.2, 1e-15);
    approx_eq(face.get(1, 1), 3.2, 1e-15);
    approx_eq(face.get(2, 2), 3.2, 1e-15);
    // the lookup is symmetric in the pair
    let swapped = model.face_permeability(1, 0)?;
    assert_eq!(swapped.get(0, 0), face.get(0, 0));
    Ok(())
}

#[test]
fn test_removed_cells_have_no_faces() -> Result<(), StrError> {
    // 3x1x1 with the middle cell removed: the two active cells are not
    // neighbors, so no interior face exists
    let grid = CompressedGrid::new(3, 1, 1, Some(&[true, false, true]))?;
    let mut deck = SampleDecks::uniform(3)?;
    deck.set_scalar("PERMX", vec![2.0, 999.0, 8.0]);
    let model = ReservoirModel::new(&grid, &deck, &Config::new())?;
    assert_eq!(model.num_cells(), 2);
    assert!(model.face_permeability(0, 1).is_err());
    // the removed cell's value must not leak into the active tensors
    assert_eq!(model.permeability(0).get(0, 0), 2.0);
    assert_eq!(model.permeability(1).get(0, 0), 8.0);
    Ok(())
}

#[test]
fn test_directional_multipliers_along_each_axis() -> Result<(), StrError> {
    // 2x2x1 grid: x-faces use MULTX/MULTX- and y-faces use MULTY/MULTY-
    let grid = CompressedGrid::new(2, 2, 1, None)?;
    let mut deck = PropertyDeck::new();
    deck.set_scalar("PERMX", vec![4.0, 4.0, 4.0, 4.0])
        .set_scalar("MULTX", vec![0.5, 1.0, 1.0, 1.0])
        .set_scalar("MULTY", vec![1.0, 1.0, 1.0, 1.0])
        .set_scalar("MULTY-", vec![1.0, 1.0, 0.25, 1.0]);
    let perm = Permeability::new(&grid, &deck)?;
    // four unique faces in a 2x2 grid
    assert_eq!(perm.num_faces(), 4);
    // face (0,1): MULTX of cell 0 scales its side, H(4·0.5, 4) = 8/3
    approx_eq(perm.face(0, 1)?.get(0, 0), 8.0 / 3.0, 1e-15);
    // face (0,2): MULTY- of cell 2 scales its side, H(4, 4·0.25) = 1.6
    approx_eq(perm.face(0, 2)?.get(1, 1), 1.6, 1e-15);
    // face (1,3): no multipliers, H(4,4) = 4
    approx_eq(perm.face(1, 3)?.get(0, 0), 4.0, 1e-15);
    Ok(())
}

#[test]
fn test_ntg_scales_horizontal_permeability_only() -> Result<(), StrError> {
    let grid = CompressedGrid::new(2, 1, 1, None)?;
    let mut deck = SampleDecks::uniform(2)?;
    deck.set_scalar("PERMX", vec![10.0, 10.0])
        .set_scalar("PERMZ", vec![7.0, 7.0])
        .set_scalar("NTG", vec![0.5, 0.5]);
    let model = ReservoirModel::new(&grid, &deck, &Config::new())?;
    for cell in 0..2 {
        assert_eq!(model.permeability(cell).get(0, 0), 5.0);
        assert_eq!(model.permeability(cell).get(1, 1), 5.0);
        assert_eq!(model.permeability(cell).get(2, 2), 7.0);
    }
    // NTG also scales the porosity (0.25 · 0.5)
    approx_eq(model.porosity(0), 0.125, 1e-15);
    Ok(())
}
