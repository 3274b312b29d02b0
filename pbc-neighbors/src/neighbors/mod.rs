//! Construction of periodic neighbor lists.
//!
//! Building a neighbor list goes through the following steps:
//!
//! 1. validate the input and store it in a [`GeometryState`];
//! 2. compute the minimum image vectors and distances between all pairs of
//!    atoms with a [`PairwiseBackend`];
//! 3. select the pairs with `0 < distance < cutoff`;
//! 4. sort all selected pairs by distance;
//! 5. pack the sorted pairs into the dense per-atom arrays of a
//!    [`NeighborList`].

mod geometry;
pub use self::geometry::GeometryState;

mod backend;
pub use self::backend::{PairwiseBackend, PairwiseDistances, BackendKind};
pub use self::backend::{SerialBackend, ParallelBackend};

mod pairs;

mod list;
pub use self::list::{NeighborList, Neighbor, NO_NEIGHBOR};

mod builder;
pub use self::builder::{PeriodicNeighborListBuilder, NeighborListOptions};
