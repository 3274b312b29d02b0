use crate::{Error, Vector3D};

use super::UnitCell;

/// A set of atoms, with their chemical species and positions, inside an
/// orthorhombic periodic unit cell.
///
/// The positions and species are always index-aligned: the configuration can
/// only be constructed through [`AtomicConfiguration::add_atom`] or the
/// validating [`AtomicConfiguration::from_parts`].
///
/// The JSON representation of a configuration is
///
/// ```json
/// {
///     "cell": [10.0, 10.0, 10.0],
///     "species": ["O", "H", "H"],
///     "positions": [[0.0, 0.0, 0.0], [0.0, 0.75, -0.59], [0.0, -0.75, -0.59]]
/// }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct AtomicConfiguration {
    cell: UnitCell,
    species: Vec<String>,
    positions: Vec<Vector3D>,
}

impl AtomicConfiguration {
    /// Create a new empty configuration with the given unit cell
    pub fn new(cell: UnitCell) -> AtomicConfiguration {
        AtomicConfiguration {
            cell: cell,
            species: Vec::new(),
            positions: Vec::new(),
        }
    }

    /// Create a configuration from separate arrays of positions, species
    /// labels and cell lengths. All of them are checked for consistency.
    pub fn from_parts(
        positions: Vec<Vector3D>,
        species: Vec<String>,
        cell_lengths: &[f64],
    ) -> Result<AtomicConfiguration, Error> {
        if positions.len() != species.len() {
            return Err(Error::GeometryMismatch(format!(
                "got {} positions but {} species labels",
                positions.len(), species.len()
            )));
        }

        let cell = UnitCell::from_lengths(cell_lengths)?;
        return Ok(AtomicConfiguration {
            cell: cell,
            species: species,
            positions: positions,
        });
    }

    /// Add an atom with the given chemical species and position to this
    /// configuration
    pub fn add_atom(&mut self, species: impl Into<String>, position: Vector3D) {
        self.species.push(species.into());
        self.positions.push(position);
    }

    /// Get the number of atoms in this configuration
    pub fn size(&self) -> usize {
        self.positions.len()
    }

    /// Get the positions of all atoms in this configuration
    pub fn positions(&self) -> &[Vector3D] {
        &self.positions
    }

    /// Get the chemical species labels of all atoms in this configuration
    pub fn species(&self) -> &[String] {
        &self.species
    }

    /// Get the unit cell of this configuration
    pub fn cell(&self) -> UnitCell {
        self.cell
    }
}

/// Unchecked deserialization representation of `AtomicConfiguration`
#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigurationData {
    cell: Vec<f64>,
    species: Vec<String>,
    positions: Vec<Vector3D>,
}

impl<'de> serde::Deserialize<'de> for AtomicConfiguration {
    fn deserialize<D>(deserializer: D) -> Result<AtomicConfiguration, D::Error> where D: serde::Deserializer<'de> {
        let data = <ConfigurationData as serde::Deserialize>::deserialize(deserializer)?;
        AtomicConfiguration::from_parts(data.positions, data.species, &data.cell)
            .map_err(serde::de::Error::custom)
    }
}

impl serde::Serialize for AtomicConfiguration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: serde::Serializer {
        #[derive(serde::Serialize)]
        struct ConfigurationRef<'a> {
            cell: [f64; 3],
            species: &'a [String],
            positions: &'a [Vector3D],
        }

        let configuration = ConfigurationRef {
            cell: self.cell.lengths().into(),
            species: &self.species,
            positions: &self.positions,
        };
        serde::Serialize::serialize(&configuration, serializer)
    }
}
