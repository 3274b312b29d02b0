#![warn(clippy::all, clippy::pedantic)]

// disable some style lints
#![allow(clippy::needless_return, clippy::must_use_candidate, clippy::redundant_field_names)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc, clippy::module_name_repetitions)]

#![allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]

// Tests lints
#![cfg_attr(test, allow(clippy::float_cmp))]

//! Periodic neighbor lists for atomistic systems.
//!
//! Given the positions and chemical species of a set of atoms in an
//! orthorhombic periodic cell, [`PeriodicNeighborListBuilder`] finds all
//! pairs of atoms closer than a cutoff under the minimum image convention,
//! and packs them into a dense, padded [`NeighborList`] where the neighbors of
//! each atom are sorted by increasing distance.
//!
//! ```
//! use pbc_neighbors::{AtomicConfiguration, PeriodicNeighborListBuilder, Vector3D};
//! use pbc_neighbors::systems::UnitCell;
//!
//! let mut configuration = AtomicConfiguration::new(UnitCell::cubic(10.0));
//! configuration.add_atom("O", Vector3D::new(0.1, 0.0, 0.0));
//! configuration.add_atom("H", Vector3D::new(9.9, 0.0, 0.0));
//!
//! let builder = PeriodicNeighborListBuilder::default();
//! let neighbors = builder.build(&configuration, 1.0).unwrap();
//!
//! assert_eq!(neighbors.max_neighbors(), 1);
//! assert_eq!(neighbors.neighbor_indices()[[0, 0]], 1);
//! assert!((neighbors.distances()[[0, 0]] - 0.2).abs() < 1e-12);
//! ```

pub mod types;
pub use types::*;

mod errors;
pub use self::errors::Error;

pub mod systems;
pub use systems::AtomicConfiguration;

pub mod neighbors;
pub use neighbors::{NeighborList, Neighbor};
pub use neighbors::{PeriodicNeighborListBuilder, NeighborListOptions, BackendKind};
