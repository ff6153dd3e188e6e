use crate::{ActiveCellId, CartesianCellId, StrError};
use serde::{Deserialize, Serialize};

/// Defines the six local face directions of a hexahedral cell
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum FaceDirection {
    /// Negative-x face
    IMinus,

    /// Positive-x face
    IPlus,

    /// Negative-y face
    JMinus,

    /// Positive-y face
    JPlus,

    /// Negative-z face
    KMinus,

    /// Positive-z face
    KPlus,
}

/// Holds one interior half-face between two active cells
///
/// Every interior face appears twice in the iteration, once as seen from
/// each of its two cells; the face-permeability cache de-duplicates them.
#[derive(Clone, Copy, Debug)]
pub struct InteriorFace {
    /// Active index of the cell owning the local face
    pub inside: ActiveCellId,

    /// Active index of the neighboring cell
    pub outside: ActiveCellId,

    /// Local direction of the face on the inside cell
    pub direction: FaceDirection,
}

/// Maps active (compressed) cells to the uncompressed cartesian grid
///
/// The active cells are the degrees of freedom of the finite-volume model;
/// cells removed during grid processing are skipped, so the cartesian ids of
/// consecutive active cells may have gaps.
pub struct CompressedGrid {
    /// Number of cartesian cells along x
    nx: usize,

    /// Number of cartesian cells along y
    ny: usize,

    /// Number of cartesian cells along z
    nz: usize,

    /// Maps an active cell to its cartesian cell (len = num_active_cells)
    active_to_cartesian: Vec<CartesianCellId>,

    /// Interior half-faces, both orientations of each face
    faces: Vec<InteriorFace>,
}

impl CompressedGrid {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `nx, ny, nz` -- cartesian grid dimensions
    /// * `active_mask` -- optional flags (len = nx*ny*nz, raw file order)
    ///   selecting the cells kept in the simulation; None keeps all cells
    pub fn new(nx: usize, ny: usize, nz: usize, active_mask: Option<&[bool]>) -> Result<Self, StrError> {
        if nx < 1 || ny < 1 || nz < 1 {
            return Err("grid dimensions must be at least 1x1x1");
        }
        let num_cartesian = nx * ny * nz;
        if let Some(mask) = active_mask {
            if mask.len() != num_cartesian {
                return Err("active mask length must match the number of cartesian cells");
            }
        }
        let is_active = |cartesian: CartesianCellId| match active_mask {
            Some(mask) => mask[cartesian],
            None => true,
        };

        // active cells in cartesian (raw file) order
        let mut active_to_cartesian = Vec::new();
        let mut cartesian_to_active = vec![None; num_cartesian];
        for cartesian in 0..num_cartesian {
            if is_active(cartesian) {
                cartesian_to_active[cartesian] = Some(active_to_cartesian.len());
                active_to_cartesian.push(cartesian);
            }
        }
        if active_to_cartesian.is_empty() {
            return Err("grid must have at least one active cell");
        }

        // interior half-faces: each active cell visits its six neighbors;
        // boundary faces and faces against removed cells are skipped
        let neighbors = [
            (-1, 0, 0, FaceDirection::IMinus),
            (1, 0, 0, FaceDirection::IPlus),
            (0, -1, 0, FaceDirection::JMinus),
            (0, 1, 0, FaceDirection::JPlus),
            (0, 0, -1, FaceDirection::KMinus),
            (0, 0, 1, FaceDirection::KPlus),
        ];
        let mut faces = Vec::new();
        for (inside, &cartesian) in active_to_cartesian.iter().enumerate() {
            let i = (cartesian % (nx * ny)) % nx;
            let j = (cartesian % (nx * ny)) / nx;
            let k = cartesian / (nx * ny);
            for &(di, dj, dk, direction) in &neighbors {
                let (ni, nj, nk) = (i as isize + di, j as isize + dj, k as isize + dk);
                if ni < 0 || nj < 0 || nk < 0 {
                    continue;
                }
                let (ni, nj, nk) = (ni as usize, nj as usize, nk as usize);
                if ni >= nx || nj >= ny || nk >= nz {
                    continue;
                }
                let neighbor_cartesian = nk * nx * ny + nj * nx + ni;
                if let Some(outside) = cartesian_to_active[neighbor_cartesian] {
                    faces.push(InteriorFace {
                        inside,
                        outside,
                        direction,
                    });
                }
            }
        }

        Ok(CompressedGrid {
            nx,
            ny,
            nz,
            active_to_cartesian,
            faces,
        })
    }

    /// Returns the number of active (compressed) cells
    pub fn num_active_cells(&self) -> usize {
        self.active_to_cartesian.len()
    }

    /// Returns the number of cells of the uncompressed cartesian grid
    pub fn num_cartesian_cells(&self) -> usize {
        self.nx * self.ny * self.nz
    }

    /// Returns the cartesian grid dimensions (nx, ny, nz)
    pub fn cartesian_dims(&self) -> (usize, usize, usize) {
        (self.nx, self.ny, self.nz)
    }

    /// Returns the cartesian cell corresponding to an active cell
    pub fn cartesian_cell(&self, active: ActiveCellId) -> CartesianCellId {
        self.active_to_cartesian[active]
    }

    /// Returns the interior half-faces (both orientations of each face)
    pub fn interior_faces(&self) -> &[InteriorFace] {
        &self.faces
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
