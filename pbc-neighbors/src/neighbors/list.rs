use ndarray::{Array2, Array3, ArrayView2, ArrayView3};

use crate::Vector3D;
use super::GeometryState;
use super::pairs::Pair;

/// Value used in [`NeighborList::neighbor_indices`] for unused slots
pub const NO_NEIGHBOR: i64 = -1;

/// A single neighbor of an atom, as returned by [`NeighborList::neighbors`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// index of the neighbor atom in the configuration
    pub index: usize,
    /// distance between the central atom and the neighbor
    pub distance: f64,
    /// minimum image vector from the central atom to the neighbor
    pub vector: Vector3D,
}

/// Neighbors of all atoms in a configuration, sorted by increasing distance
/// and packed in dense arrays.
///
/// All arrays have one row per atom, and `max_neighbors` columns, where
/// `max_neighbors` is the largest number of neighbors of any atom. For an atom
/// `i` with `count = neighbor_count(i)` neighbors, the slots `0..count` contain
/// the neighbors, and the slots `count..max_neighbors` are filled with
/// [`NO_NEIGHBOR`] for indices, `0.0` for distances and zero vectors.
///
/// The list is "full": if `j` is a neighbor of `i`, then `i` is also a
/// neighbor of `j`, with the same distance and opposite vector.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize)]
pub struct NeighborList {
    cutoff: f64,
    counts: Vec<usize>,
    neighbor_indices: Array2<i64>,
    distances: Array2<f64>,
    displacement_vectors: Array3<f64>,
    positions: Vec<Vector3D>,
    species: Vec<String>,
}

impl NeighborList {
    /// Pack the globally sorted `pairs` into per-atom rows. `counts[i]` must be
    /// the number of pairs with `first == i`.
    #[time_graph::instrument(name = "NeighborList::pack")]
    pub(crate) fn pack(geometry: &GeometryState, pairs: &[Pair], counts: Vec<usize>) -> NeighborList {
        let n_atoms = geometry.size();
        assert_eq!(counts.len(), n_atoms);
        let max_neighbors = counts.iter().copied().max().unwrap_or(0);

        let mut neighbor_indices = Array2::from_elem((n_atoms, max_neighbors), NO_NEIGHBOR);
        let mut distances = Array2::zeros((n_atoms, max_neighbors));
        let mut displacement_vectors = Array3::zeros((n_atoms, max_neighbors, 3));

        // pairs are already sorted by distance, so filling each row in
        // iteration order keeps the rows sorted
        let mut next_slot = vec![0; n_atoms];
        for pair in pairs {
            let slot = next_slot[pair.first];
            next_slot[pair.first] += 1;

            neighbor_indices[[pair.first, slot]] = pair.second as i64;
            distances[[pair.first, slot]] = pair.distance;
            for axis in 0..3 {
                displacement_vectors[[pair.first, slot, axis]] = pair.vector[axis];
            }
        }
        debug_assert_eq!(next_slot, counts);

        let positions = (0..n_atoms).map(|atom| geometry.position(atom)).collect();

        return NeighborList {
            cutoff: geometry.cutoff(),
            counts: counts,
            neighbor_indices: neighbor_indices,
            distances: distances,
            displacement_vectors: displacement_vectors,
            positions: positions,
            species: geometry.species().to_vec(),
        };
    }

    /// Get the number of atoms in this neighbor list
    pub fn size(&self) -> usize {
        self.counts.len()
    }

    /// Get the cutoff used to create this neighbor list
    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }

    /// Get the largest number of neighbors of any atom, i.e. the number of
    /// columns of the neighbor arrays
    pub fn max_neighbors(&self) -> usize {
        self.distances.ncols()
    }

    /// Get the number of neighbors of all atoms
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Get the number of neighbors of the given `atom`
    pub fn neighbor_count(&self, atom: usize) -> usize {
        self.counts[atom]
    }

    /// `N x max_neighbors` array of neighbor indices, padded with
    /// [`NO_NEIGHBOR`]
    pub fn neighbor_indices(&self) -> ArrayView2<'_, i64> {
        self.neighbor_indices.view()
    }

    /// `N x max_neighbors` array of distances, padded with `0.0`
    pub fn distances(&self) -> ArrayView2<'_, f64> {
        self.distances.view()
    }

    /// `N x max_neighbors x 3` array of minimum image vectors from each atom
    /// to its neighbors, padded with `0.0`
    pub fn displacement_vectors(&self) -> ArrayView3<'_, f64> {
        self.displacement_vectors.view()
    }

    /// Get the positions of the atoms, as given when building this list
    pub fn positions(&self) -> &[Vector3D] {
        &self.positions
    }

    /// Get the chemical species of the atoms
    pub fn species(&self) -> &[String] {
        &self.species
    }

    /// Iterate over the neighbors of `atom`, from the closest to the furthest
    pub fn neighbors(&self, atom: usize) -> impl ExactSizeIterator<Item = Neighbor> + '_ {
        (0..self.counts[atom]).map(move |slot| {
            let vector = self.displacement_vectors.slice(ndarray::s![atom, slot, ..]);
            Neighbor {
                index: self.neighbor_indices[[atom, slot]] as usize,
                distance: self.distances[[atom, slot]],
                vector: Vector3D::new(vector[0], vector[1], vector[2]),
            }
        })
    }
}
