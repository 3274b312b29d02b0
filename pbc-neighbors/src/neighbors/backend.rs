use ndarray::{Array2, Array3, ArrayView2, ArrayViewMut1, ArrayViewMut2};
use rayon::prelude::*;

use crate::Vector3D;
use crate::systems::minimum_image;

use super::GeometryState;

/// Wrapped displacement vectors and distances between all ordered pairs of
/// atoms in a [`GeometryState`].
#[derive(Debug, Clone, PartialEq)]
pub struct PairwiseDistances {
    /// `N x N x 3` array, `vectors[[i, j, :]]` is the minimum image of
    /// `positions[j] - positions[i]`
    pub vectors: Array3<f64>,
    /// `N x N` array containing the norm of the vectors
    pub distances: Array2<f64>,
}

impl PairwiseDistances {
    /// Allocate zero-initialized storage for `n_atoms` atoms
    pub fn zeros(n_atoms: usize) -> PairwiseDistances {
        PairwiseDistances {
            vectors: Array3::zeros((n_atoms, n_atoms, 3)),
            distances: Array2::zeros((n_atoms, n_atoms)),
        }
    }

    /// Get the number of atoms
    pub fn size(&self) -> usize {
        self.distances.nrows()
    }

    /// Get the wrapped vector going from atom `first` to atom `second`
    pub fn vector(&self, first: usize, second: usize) -> Vector3D {
        Vector3D::new(
            self.vectors[[first, second, 0]],
            self.vectors[[first, second, 1]],
            self.vectors[[first, second, 2]],
        )
    }
}

/// Which [`PairwiseBackend`] to use when building neighbor lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[derive(serde::Deserialize, serde::Serialize, schemars::JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// Compute all pairs on the calling thread
    Serial,
    /// Distribute the pairs over rayon's thread pool
    #[default]
    Parallel,
}

impl BackendKind {
    pub(crate) fn create(self) -> Box<dyn PairwiseBackend> {
        match self {
            BackendKind::Serial => Box::new(SerialBackend),
            BackendKind::Parallel => Box::new(ParallelBackend),
        }
    }
}

/// A `PairwiseBackend` computes the minimum image displacement vectors and
/// distances between all pairs of atoms.
///
/// This is the `O(N^2)` part of the neighbor list construction. All
/// implementations must produce the same values for the same input: the
/// choice of backend is only a performance concern.
pub trait PairwiseBackend: Send + Sync {
    /// Get the name of this backend, used for logging
    fn name(&self) -> &'static str;

    /// Compute all pairwise wrapped vectors and distances for `geometry`
    fn compute(&self, geometry: &GeometryState) -> PairwiseDistances;
}

/// Single threaded backend
#[derive(Debug, Clone, Copy, Default)]
pub struct SerialBackend;

impl PairwiseBackend for SerialBackend {
    fn name(&self) -> &'static str {
        "serial"
    }

    #[time_graph::instrument(name = "SerialBackend::compute")]
    fn compute(&self, geometry: &GeometryState) -> PairwiseDistances {
        let positions = geometry.positions();
        let lengths = geometry.cell_lengths();

        let mut pairwise = PairwiseDistances::zeros(geometry.size());
        pairwise.vectors.outer_iter_mut()
            .zip(pairwise.distances.outer_iter_mut())
            .enumerate()
            .for_each(|(first, (vectors, distances))| {
                compute_row(first, positions, lengths, vectors, distances);
            });

        return pairwise;
    }
}

/// Multi-threaded backend, using one rayon task per first atom of the pairs
#[derive(Debug, Clone, Copy, Default)]
pub struct ParallelBackend;

impl PairwiseBackend for ParallelBackend {
    fn name(&self) -> &'static str {
        "parallel"
    }

    #[time_graph::instrument(name = "ParallelBackend::compute")]
    fn compute(&self, geometry: &GeometryState) -> PairwiseDistances {
        let positions = geometry.positions();
        let lengths = geometry.cell_lengths();

        let mut pairwise = PairwiseDistances::zeros(geometry.size());
        pairwise.vectors.outer_iter_mut()
            .into_par_iter()
            .zip(pairwise.distances.outer_iter_mut().into_par_iter())
            .enumerate()
            .for_each(|(first, (vectors, distances))| {
                compute_row(first, positions, lengths, vectors, distances);
            });

        return pairwise;
    }
}

/// Fill the wrapped vectors and distances between atom `first` and all the
/// other atoms.
#[inline]
fn compute_row(
    first: usize,
    positions: ArrayView2<'_, f64>,
    lengths: Vector3D,
    mut vectors: ArrayViewMut2<'_, f64>,
    mut distances: ArrayViewMut1<'_, f64>,
) {
    let origin = positions.row(first);
    for (second, position) in positions.outer_iter().enumerate() {
        let mut distance2 = 0.0;
        for axis in 0..3 {
            let wrapped = minimum_image(position[axis] - origin[axis], lengths[axis]);
            vectors[[second, axis]] = wrapped;
            distance2 += wrapped * wrapped;
        }
        distances[second] = f64::sqrt(distance2);
    }
}
