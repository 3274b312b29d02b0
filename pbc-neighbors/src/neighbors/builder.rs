use log::{debug, warn};

use crate::{AtomicConfiguration, Error};

use super::{BackendKind, GeometryState, NeighborList, PairwiseBackend};
use super::pairs::{pairs_mask, count_by_atom, select_pairs, sort_pairs};

/// Parameters for [`PeriodicNeighborListBuilder`], usually given as JSON:
///
/// ```json
/// {"backend": "serial", "check_cutoff": true}
/// ```
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Deserialize, serde::Serialize, schemars::JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct NeighborListOptions {
    /// Where to compute the pairwise distances
    #[serde(default)]
    pub backend: BackendKind,
    /// Should we refuse cutoffs larger than half of the shortest cell length?
    /// The minimum image convention misses some neighbors for such cutoffs.
    /// When this is `false`, a warning is emitted instead.
    #[serde(default = "default_check_cutoff")]
    pub check_cutoff: bool,
}

fn default_check_cutoff() -> bool {
    true
}

impl Default for NeighborListOptions {
    fn default() -> NeighborListOptions {
        NeighborListOptions {
            backend: BackendKind::default(),
            check_cutoff: default_check_cutoff(),
        }
    }
}

impl NeighborListOptions {
    /// Get the JSON schema describing these options
    pub fn schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(NeighborListOptions)
    }
}

/// Builder for periodic neighbor lists, using the minimum image convention in
/// orthorhombic cells.
///
/// All pairs of atoms are considered, which makes the cost of a build scale
/// as `O(N^2)` in time and memory with the number of atoms.
pub struct PeriodicNeighborListBuilder {
    backend: Box<dyn PairwiseBackend>,
    check_cutoff: bool,
}

impl std::fmt::Debug for PeriodicNeighborListBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PeriodicNeighborListBuilder")
            .field("backend", &self.backend.name())
            .field("check_cutoff", &self.check_cutoff)
            .finish()
    }
}

impl Default for PeriodicNeighborListBuilder {
    fn default() -> PeriodicNeighborListBuilder {
        PeriodicNeighborListBuilder::new(NeighborListOptions::default())
    }
}

impl PeriodicNeighborListBuilder {
    /// Create a new builder with the given `options`
    pub fn new(options: NeighborListOptions) -> PeriodicNeighborListBuilder {
        PeriodicNeighborListBuilder {
            backend: options.backend.create(),
            check_cutoff: options.check_cutoff,
        }
    }

    /// Create a new builder with options given as a JSON string
    pub fn from_json(parameters: &str) -> Result<PeriodicNeighborListBuilder, Error> {
        let options = serde_json::from_str::<NeighborListOptions>(parameters)?;
        return Ok(PeriodicNeighborListBuilder::new(options));
    }

    /// Use a custom `backend` to compute pairwise distances
    #[must_use]
    pub fn with_backend(mut self, backend: impl PairwiseBackend + 'static) -> PeriodicNeighborListBuilder {
        self.backend = Box::new(backend);
        self
    }

    /// Get the name of the backend used by this builder
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Build the neighbor list of `configuration`, including all pairs of
    /// atoms strictly closer than `cutoff`.
    #[time_graph::instrument(name = "PeriodicNeighborListBuilder::build")]
    pub fn build(&self, configuration: &AtomicConfiguration, cutoff: f64) -> Result<NeighborList, Error> {
        let geometry = GeometryState::new(configuration, cutoff)?;

        let max_cutoff = 0.5 * geometry.cell().min_length();
        if cutoff > max_cutoff {
            if self.check_cutoff {
                return Err(Error::UnsupportedCutoff { cutoff, max: max_cutoff });
            }

            warn!(
                "cutoff ({}) is larger than half of the shortest cell length ({}), \
                some neighbors will be missing from the neighbor list",
                cutoff, max_cutoff
            );
        }

        let pairwise = self.backend.compute(&geometry);
        let mask = pairs_mask(&pairwise, cutoff);
        let counts = count_by_atom(&mask);

        let mut pairs = select_pairs(&pairwise, &mask);
        sort_pairs(&mut pairs);

        let neighbors = NeighborList::pack(&geometry, &pairs, counts);
        debug!(
            "built neighbor list for {} atoms with the {} backend: {} pairs, up to {} neighbors per atom",
            neighbors.size(), self.backend.name(), pairs.len(), neighbors.max_neighbors()
        );

        return Ok(neighbors);
    }
}
