//! The `UnitCell` type represents the periodic box enclosing an atomic
//! configuration. Only orthorhombic cells are supported: the cell is fully
//! described by the three lengths along the cartesian axes.
use crate::{Error, Vector3D};

/// Off-diagonal components of a cell matrix larger than this are considered
/// to make the cell triclinic
const TILT_TOLERANCE: f64 = 1e-6;

/// An orthorhombic `UnitCell`, with periodic boundary conditions in all three
/// directions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitCell {
    lengths: Vector3D,
}

impl UnitCell {
    /// Create an orthorhombic unit cell, with side lengths `a, b, c`.
    ///
    /// This panics if any of the lengths is not strictly positive and finite,
    /// use [`UnitCell::from_lengths`] to get an error instead.
    pub fn orthorhombic(a: f64, b: f64, c: f64) -> UnitCell {
        assert!(is_valid_length(a) && is_valid_length(b) && is_valid_length(c), "Cell lengths must be positive");
        UnitCell {
            lengths: Vector3D::new(a, b, c),
        }
    }

    /// Create a cubic unit cell, with side lengths `length, length, length`.
    pub fn cubic(length: f64) -> UnitCell {
        UnitCell::orthorhombic(length, length, length)
    }

    /// Create an orthorhombic unit cell from a slice containing the three
    /// cell lengths.
    pub fn from_lengths(lengths: &[f64]) -> Result<UnitCell, Error> {
        if lengths.len() != 3 {
            return Err(Error::GeometryMismatch(format!(
                "expected 3 cell lengths, got {}", lengths.len()
            )));
        }

        for (axis, &length) in lengths.iter().enumerate() {
            if !is_valid_length(length) {
                return Err(Error::InvalidParameter(format!(
                    "cell length along axis {} must be positive and finite, got {}",
                    axis, length
                )));
            }
        }

        return Ok(UnitCell {
            lengths: Vector3D::new(lengths[0], lengths[1], lengths[2]),
        });
    }

    /// Create a unit cell from a full cell matrix, where each row is one of
    /// the cell vectors. Matrices with non-zero off-diagonal terms describe
    /// triclinic cells, which are rejected.
    pub fn from_matrix(matrix: [[f64; 3]; 3]) -> Result<UnitCell, Error> {
        for (i, row) in matrix.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                if i != j && !(f64::abs(value) < TILT_TOLERANCE) {
                    return Err(Error::UnsupportedCell(format!(
                        "only orthorhombic cells are supported, but the cell matrix has a non-zero off-diagonal term ({}) at [{}][{}]",
                        value, i, j
                    )));
                }
            }
        }

        return UnitCell::from_lengths(&[matrix[0][0], matrix[1][1], matrix[2][2]]);
    }

    /// Get the three lengths of this cell
    pub fn lengths(&self) -> Vector3D {
        self.lengths
    }

    /// Get the length of the shortest side of this cell
    pub fn min_length(&self) -> f64 {
        f64::min(self.lengths[0], f64::min(self.lengths[1], self.lengths[2]))
    }

    /// Get the volume of the cell
    pub fn volume(&self) -> f64 {
        self.lengths[0] * self.lengths[1] * self.lengths[2]
    }

    /// Get the matrix representation of the unit cell, with cell vectors as
    /// rows
    pub fn matrix(&self) -> [[f64; 3]; 3] {
        [
            [self.lengths[0], 0.0, 0.0],
            [0.0, self.lengths[1], 0.0],
            [0.0, 0.0, self.lengths[2]],
        ]
    }

    /// Find the minimum image of a displacement vector, obeying the periodic
    /// boundary conditions. For a cubic cell of side length `L`, this produce
    /// a vector with all components in `[-L/2, L/2]`.
    #[inline]
    pub fn vector_image(&self, vector: &mut Vector3D) {
        for axis in 0..3 {
            vector[axis] = minimum_image(vector[axis], self.lengths[axis]);
        }
    }

    /// Periodic boundary conditions distance between the point `u` and the
    /// point `v`
    pub fn distance(&self, u: Vector3D, v: Vector3D) -> f64 {
        let mut d = v - u;
        self.vector_image(&mut d);
        return d.norm();
    }
}

/// Wrap a single displacement component `value` along an axis of size
/// `length` to its closest periodic image
#[inline]
pub(crate) fn minimum_image(value: f64, length: f64) -> f64 {
    value - length * f64::round(value / length)
}

fn is_valid_length(length: f64) -> bool {
    length > 0.0 && length.is_finite()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_ulps_eq, assert_relative_eq};

    #[test]
    #[should_panic(expected = "Cell lengths must be positive")]
    fn negative_cubic() {
        let _ = UnitCell::cubic(-4.0);
    }

    #[test]
    #[should_panic(expected = "Cell lengths must be positive")]
    fn negative_ortho() {
        let _ = UnitCell::orthorhombic(3.0, 0.0, -5.0);
    }

    #[test]
    fn orthorhombic() {
        let cell = UnitCell::orthorhombic(3.0, 4.0, 5.0);
        assert_eq!(cell.lengths(), Vector3D::new(3.0, 4.0, 5.0));
        assert_eq!(cell.min_length(), 3.0);
        assert_eq!(cell.volume(), 3.0 * 4.0 * 5.0);
        assert_eq!(cell.matrix()[1], [0.0, 4.0, 0.0]);
    }

    #[test]
    fn from_lengths() {
        let cell = UnitCell::from_lengths(&[3.0, 4.0, 5.0]).unwrap();
        assert_eq!(cell, UnitCell::orthorhombic(3.0, 4.0, 5.0));

        let error = UnitCell::from_lengths(&[3.0, 4.0]).unwrap_err();
        assert!(matches!(error, Error::GeometryMismatch(_)));

        let error = UnitCell::from_lengths(&[3.0, 4.0, 5.0, 6.0]).unwrap_err();
        assert!(matches!(error, Error::GeometryMismatch(_)));

        let error = UnitCell::from_lengths(&[3.0, -4.0, 5.0]).unwrap_err();
        assert!(matches!(error, Error::InvalidParameter(_)));

        let error = UnitCell::from_lengths(&[3.0, 4.0, f64::INFINITY]).unwrap_err();
        assert!(matches!(error, Error::InvalidParameter(_)));

        let error = UnitCell::from_lengths(&[f64::NAN, 4.0, 5.0]).unwrap_err();
        assert!(matches!(error, Error::InvalidParameter(_)));
    }

    #[test]
    fn from_matrix() {
        let cell = UnitCell::from_matrix([
            [3.0, 0.0, 0.0],
            [0.0, 4.0, 1e-9],
            [0.0, 0.0, 5.0],
        ]).unwrap();
        assert_eq!(cell.lengths(), Vector3D::new(3.0, 4.0, 5.0));

        let error = UnitCell::from_matrix([
            [0.0, 1.5, 1.5],
            [1.5, 0.0, 1.5],
            [1.5, 1.5, 0.0],
        ]).unwrap_err();
        assert!(matches!(error, Error::UnsupportedCell(_)));

        let error = UnitCell::from_matrix([
            [3.0, 0.0, 0.0],
            [0.0, 4.0, 0.0],
            [f64::NAN, 0.0, 5.0],
        ]).unwrap_err();
        assert!(matches!(error, Error::UnsupportedCell(_)));
    }

    #[test]
    fn vector_image() {
        let cell = UnitCell::cubic(10.0);
        let mut v = Vector3D::new(9.0, 18.0, -6.0);
        cell.vector_image(&mut v);
        assert_eq!(v, Vector3D::new(-1.0, -2.0, 4.0));

        let cell = UnitCell::orthorhombic(3.0, 4.0, 5.0);
        let mut v = Vector3D::new(1.0, 1.5, 6.0);
        cell.vector_image(&mut v);
        assert_eq!(v, Vector3D::new(1.0, 1.5, 1.0));

        // the image of a vector is the opposite of the image of the opposite
        // vector, except exactly on the half-length boundary
        let cell = UnitCell::orthorhombic(3.0, 4.0, 5.0);
        let mut v = Vector3D::new(2.2, -3.1, 7.3);
        let mut w = -v;
        cell.vector_image(&mut v);
        cell.vector_image(&mut w);
        assert_ulps_eq!(v, -w);
    }

    #[test]
    fn distances() {
        let cell = UnitCell::orthorhombic(3.0, 4.0, 5.0);
        let u = Vector3D::zero();
        let v = Vector3D::new(1.0, 2.0, 6.0);
        assert_eq!(cell.distance(u, v), f64::sqrt(6.0));

        let cell = UnitCell::cubic(10.0);
        let u = Vector3D::new(0.1, 0.0, 0.0);
        let v = Vector3D::new(9.9, 0.0, 0.0);
        assert_relative_eq!(cell.distance(u, v), 0.2, epsilon = 1e-12);
    }
}
