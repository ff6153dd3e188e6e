use crate::deck::PropertyDeck;
use crate::grid::{CompressedGrid, FaceDirection};
use crate::{ActiveCellId, StrError};
use russell_tensor::{Mandel, Tensor2};
use std::collections::HashMap;

/// Computes the harmonic average of two permeability entries
///
/// `H(a,b) = 2ab/(a+b)`, or zero when either entry vanishes. The harmonic
/// mean is the correct combination rule for properties in series along the
/// flow direction.
pub fn harmonic_average(a: f64, b: f64) -> f64 {
    if a * b <= 0.0 {
        return 0.0;
    }
    2.0 * a * b / (a + b)
}

/// Holds the permeability tensors of all active cells and interior faces
///
/// The cell tensors are diagonal, built from the PERMX/PERMY/PERMZ arrays
/// (PERMY and PERMZ default to PERMX) with NTG applied to the horizontal
/// entries. The face tensors are entry-wise harmonic averages of the two
/// neighboring cell tensors after applying the directional transmissibility
/// multipliers (MULTX, MULTX-, MULTY, MULTY-, MULTZ, MULTZ-).
///
/// Since the topology may be non-conforming, the face tensors are accessed
/// via the unordered pair of active cell indices, canonicalized as
/// (min, max) and packed into the single key `min*num_active_cells + max`.
/// Each pair is computed exactly once no matter how many times the topology
/// visits it from either side.
pub struct Permeability {
    /// Number of active cells (defines the packing of the pair keys)
    num_active: usize,

    /// Diagonal permeability tensor of each active cell
    cells: Vec<Tensor2>,

    /// Harmonically-averaged tensor of each interior face, keyed by pair
    faces: HashMap<usize, Tensor2>,
}

impl Permeability {
    /// Allocates a new instance from the deck arrays
    pub fn new(grid: &CompressedGrid, deck: &PropertyDeck) -> Result<Self, StrError> {
        let num_active = grid.num_active_cells();
        let num_cartesian = grid.num_cartesian_cells();

        // cell permeabilities; PERMY and PERMZ fall back to PERMX
        let permx = deck.scalar("PERMX").ok_or("PERMX keyword is missing")?;
        if permx.len() != num_cartesian {
            return Err("PERMX array length must match the number of cartesian cells");
        }
        let permy = match deck.scalar("PERMY") {
            Some(data) => {
                if data.len() != num_cartesian {
                    return Err("PERMY array length must match the number of cartesian cells");
                }
                data
            }
            None => permx,
        };
        let permz = match deck.scalar("PERMZ") {
            Some(data) => {
                if data.len() != num_cartesian {
                    return Err("PERMZ array length must match the number of cartesian cells");
                }
                data
            }
            None => permx,
        };
        let mut cells = Vec::with_capacity(num_active);
        for active in 0..num_active {
            let cartesian = grid.cartesian_cell(active);
            let mut tensor = Tensor2::new(Mandel::Symmetric);
            tensor.sym_set(0, 0, permx[cartesian]);
            tensor.sym_set(1, 1, permy[cartesian]);
            tensor.sym_set(2, 2, permz[cartesian]);
            cells.push(tensor);
        }

        // NTG scales the horizontal entries only (vertical flow capacity
        // is unaffected by the net-to-gross ratio)
        if let Some(ntg) = deck.scalar("NTG") {
            if ntg.len() != num_cartesian {
                return Err("NTG array length must match the number of cartesian cells");
            }
            for active in 0..num_active {
                let cartesian = grid.cartesian_cell(active);
                let tensor = &mut cells[active];
                tensor.sym_set(0, 0, tensor.get(0, 0) * ntg[cartesian]);
                tensor.sym_set(1, 1, tensor.get(1, 1) * ntg[cartesian]);
            }
        }

        // transmissibility multipliers (used as permeability multipliers)
        let multx = multiplier_array(deck, "MULTX", num_cartesian)?;
        let multx_minus = multiplier_array(deck, "MULTX-", num_cartesian)?;
        let multy = multiplier_array(deck, "MULTY", num_cartesian)?;
        let multy_minus = multiplier_array(deck, "MULTY-", num_cartesian)?;
        let multz = multiplier_array(deck, "MULTZ", num_cartesian)?;
        let multz_minus = multiplier_array(deck, "MULTZ-", num_cartesian)?;

        let mut faces = HashMap::with_capacity(grid.interior_faces().len() / 2);
        for face in grid.interior_faces() {
            let key = pair_key(face.inside, face.outside, num_active);

            // do nothing if this face was already seen from the other side
            if faces.contains_key(&key) {
                continue;
            }

            let cartesian_in = grid.cartesian_cell(face.inside);
            let cartesian_out = grid.cartesian_cell(face.outside);

            // the positive-direction multiplier applies to the cell whose
            // local face points in the positive direction; the negative
            // variant applies to its neighbor
            let (mult_in, mult_out) = match face.direction {
                FaceDirection::IPlus => (multx[cartesian_in], multx_minus[cartesian_out]),
                FaceDirection::IMinus => (multx_minus[cartesian_in], multx[cartesian_out]),
                FaceDirection::JPlus => (multy[cartesian_in], multy_minus[cartesian_out]),
                FaceDirection::JMinus => (multy_minus[cartesian_in], multy[cartesian_out]),
                FaceDirection::KPlus => (multz[cartesian_in], multz_minus[cartesian_out]),
                FaceDirection::KMinus => (multz_minus[cartesian_in], multz[cartesian_out]),
            };

            let k1 = &cells[face.inside];
            let k2 = &cells[face.outside];
            let mut tensor = Tensor2::new(Mandel::Symmetric);
            for i in 0..3 {
                tensor.sym_set(i, i, harmonic_average(k1.get(i, i) * mult_in, k2.get(i, i) * mult_out));
            }
            faces.insert(key, tensor);
        }

        Ok(Permeability {
            num_active,
            cells,
            faces,
        })
    }

    /// Returns the permeability tensor of an active cell
    pub fn cell(&self, active: ActiveCellId) -> &Tensor2 {
        &self.cells[active]
    }

    /// Returns the harmonically-averaged tensor of an interior face
    ///
    /// The lookup is symmetric in the two cell indices.
    pub fn face(&self, a: ActiveCellId, b: ActiveCellId) -> Result<&Tensor2, StrError> {
        self.faces
            .get(&pair_key(a, b, self.num_active))
            .ok_or("face permeability is not available for this cell pair")
    }

    /// Returns the number of cached interior faces
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }
}

/// Packs the canonical unordered pair (min, max) into a single key
fn pair_key(a: ActiveCellId, b: ActiveCellId, num_active: usize) -> usize {
    let min = usize::min(a, b);
    let max = usize::max(a, b);
    min * num_active + max
}

/// Returns a multiplier array or the default of 1.0 everywhere
fn multiplier_array(deck: &PropertyDeck, name: &str, num_cartesian: usize) -> Result<Vec<f64>, StrError> {
    match deck.scalar(name) {
        Some(data) => {
            if data.len() != num_cartesian {
                return Err("transmissibility multiplier array length must match the number of cartesian cells");
            }
            Ok(data.to_vec())
        }
        None => Ok(vec![1.0; num_cartesian]),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
