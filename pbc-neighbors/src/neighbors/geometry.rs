use ndarray::{Array2, ArrayView2};

use crate::{Error, Vector3D};
use crate::systems::{AtomicConfiguration, UnitCell};

/// Read-only geometric data used by all the neighbor list construction steps:
/// positions (as a `N x 3` array), the unit cell, species labels and cutoff.
///
/// Creating a `GeometryState` validates the input, so that no pairwise work is
/// started on invalid data.
#[derive(Debug, Clone)]
pub struct GeometryState {
    positions: Array2<f64>,
    cell: UnitCell,
    species: Vec<String>,
    cutoff: f64,
}

impl GeometryState {
    pub fn new(configuration: &AtomicConfiguration, cutoff: f64) -> Result<GeometryState, Error> {
        if !(cutoff > 0.0 && cutoff.is_finite()) {
            return Err(Error::InvalidParameter(format!(
                "cutoff must be a finite positive number, got {}", cutoff
            )));
        }

        let n_atoms = configuration.size();
        if n_atoms < 2 {
            return Err(Error::InvalidParameter(format!(
                "expected at least 2 atoms to build a neighbor list, got {}", n_atoms
            )));
        }

        let mut positions = Array2::zeros((n_atoms, 3));
        for (atom, (mut row, position)) in positions.outer_iter_mut().zip(configuration.positions()).enumerate() {
            for axis in 0..3 {
                if !position[axis].is_finite() {
                    return Err(Error::InvalidParameter(format!(
                        "position of atom {} is not finite: {:?}", atom, position.as_array()
                    )));
                }
                row[axis] = position[axis];
            }
        }

        return Ok(GeometryState {
            positions: positions,
            cell: configuration.cell(),
            species: configuration.species().to_vec(),
            cutoff: cutoff,
        });
    }

    /// Get the number of atoms
    pub fn size(&self) -> usize {
        self.positions.nrows()
    }

    /// Get the positions of all atoms, as a `N x 3` array
    pub fn positions(&self) -> ArrayView2<'_, f64> {
        self.positions.view()
    }

    /// Get the position of a single atom
    pub fn position(&self, atom: usize) -> Vector3D {
        let row = self.positions.row(atom);
        Vector3D::new(row[0], row[1], row[2])
    }

    pub fn cell(&self) -> UnitCell {
        self.cell
    }

    pub fn cell_lengths(&self) -> Vector3D {
        self.cell.lengths()
    }

    pub fn species(&self) -> &[String] {
        &self.species
    }

    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }
}
