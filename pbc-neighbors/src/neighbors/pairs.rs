use log::warn;
use ndarray::{Array2, Zip};

use crate::Vector3D;
use super::PairwiseDistances;

/// Atoms closer than this get a warning, they are likely overlapping
const CLOSE_ATOMS_THRESHOLD: f64 = 1e-3;

/// Directed pair of atoms, from `first` to `second`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Pair {
    /// index of the first atom in the pair
    pub first: usize,
    /// index of the second atom in the pair
    pub second: usize,
    /// distance between the two atoms
    pub distance: f64,
    /// minimum image vector from the first atom to the second atom
    pub vector: Vector3D,
}

/// Select the pairs with `0 < distance < cutoff`. Self pairs have a distance
/// of exactly 0 and are never selected.
#[time_graph::instrument(name = "neighbors::pairs_mask")]
pub(crate) fn pairs_mask(pairwise: &PairwiseDistances, cutoff: f64) -> Array2<bool> {
    Zip::from(&pairwise.distances).par_map_collect(|&distance| {
        distance > 0.0 && distance < cutoff
    })
}

/// Number of selected pairs for each first atom
pub(crate) fn count_by_atom(mask: &Array2<bool>) -> Vec<usize> {
    mask.rows()
        .into_iter()
        .map(|row| row.iter().filter(|&&selected| selected).count())
        .collect()
}

/// Collect all the pairs selected in `mask`, in `(first, second)` order.
#[time_graph::instrument(name = "neighbors::select_pairs")]
pub(crate) fn select_pairs(pairwise: &PairwiseDistances, mask: &Array2<bool>) -> Vec<Pair> {
    let mut pairs = Vec::new();
    for ((first, second), &selected) in mask.indexed_iter() {
        let distance = pairwise.distances[[first, second]];
        if first < second && distance < CLOSE_ATOMS_THRESHOLD {
            warn!(
                "atoms {} and {} are very close to one another ({} A)",
                first, second, distance
            );
        }

        if selected {
            pairs.push(Pair {
                first: first,
                second: second,
                distance: distance,
                vector: pairwise.vector(first, second),
            });
        }
    }
    return pairs;
}

/// Sort pairs by increasing distance. The sort is stable, so pairs at the same
/// distance stay in `(first, second)` order.
#[time_graph::instrument(name = "neighbors::sort_pairs")]
pub(crate) fn sort_pairs(pairs: &mut [Pair]) {
    pairs.sort_by(|a, b| a.distance.total_cmp(&b.distance));
}

#[cfg(test)]
mod tests {
    use crate::neighbors::{GeometryState, PairwiseBackend, SerialBackend};
    use crate::systems::test_utils::{test_configuration, simple_cubic};
    use super::*;

    #[test]
    fn mask() {
        let geometry = GeometryState::new(&test_configuration("water"), 1.2).unwrap();
        let pairwise = SerialBackend.compute(&geometry);
        let mask = pairs_mask(&pairwise, 1.2);

        // O-H bonds are ~0.96 A, H-H is ~1.51 A
        assert_eq!(mask, ndarray::arr2(&[
            [false, true, true],
            [true, false, false],
            [true, false, false],
        ]));
        assert_eq!(count_by_atom(&mask), [2, 1, 1]);

        let pairs = select_pairs(&pairwise, &mask);
        let indexes = pairs.iter().map(|p| (p.first, p.second)).collect::<Vec<_>>();
        assert_eq!(indexes, [(0, 1), (0, 2), (1, 0), (2, 0)]);
        assert_eq!(pairs[0].vector, -pairs[2].vector);
        assert_eq!(pairs[0].distance, pairs[2].distance);
    }

    #[test]
    fn cutoff_is_excluded() {
        let geometry = GeometryState::new(&test_configuration("pair"), 1.0).unwrap();
        let pairwise = SerialBackend.compute(&geometry);

        let mask = pairs_mask(&pairwise, 1.0);
        assert_eq!(count_by_atom(&mask), [0, 0]);
        assert!(select_pairs(&pairwise, &mask).is_empty());

        let mask = pairs_mask(&pairwise, 1.0 + 1e-9);
        assert_eq!(count_by_atom(&mask), [1, 1]);
    }

    #[test]
    fn overlapping_atoms() {
        let mut configuration = test_configuration("pair");
        configuration.add_atom("Ar", configuration.positions()[0]);

        let geometry = GeometryState::new(&configuration, 2.0).unwrap();
        let pairwise = SerialBackend.compute(&geometry);
        let mask = pairs_mask(&pairwise, 2.0);

        // atoms 0 and 2 are at distance 0, and are not neighbors
        assert!(!mask[[0, 2]] && !mask[[2, 0]]);
        assert_eq!(count_by_atom(&mask), [1, 2, 1]);
    }

    #[test]
    fn sorting() {
        let geometry = GeometryState::new(&test_configuration("methane"), 2.0).unwrap();
        let pairwise = SerialBackend.compute(&geometry);
        let mask = pairs_mask(&pairwise, 2.0);

        let mut pairs = select_pairs(&pairwise, &mask);
        sort_pairs(&mut pairs);
        for window in pairs.windows(2) {
            assert!(window[0].distance <= window[1].distance);
        }
    }

    #[test]
    fn stable_sort() {
        // all first neighbors are at the same distance in a simple cubic
        // lattice, the sort must keep them in (first, second) order
        let configuration = simple_cubic(3, 1.0);
        let geometry = GeometryState::new(&configuration, 1.1).unwrap();
        let pairwise = SerialBackend.compute(&geometry);
        let mask = pairs_mask(&pairwise, 1.1);

        let mut pairs = select_pairs(&pairwise, &mask);
        let before = pairs.clone();
        sort_pairs(&mut pairs);

        assert_eq!(pairs.len(), 27 * 6);
        assert_eq!(pairs, before);
    }
}
