use crate::Vector3D;
use super::{AtomicConfiguration, UnitCell};

pub fn test_configuration(name: &str) -> AtomicConfiguration {
    match name {
        "water" => get_water(),
        "pair" => get_pair(),
        "wrapped-pair" => get_wrapped_pair(),
        "methane" => get_methane(),
        _ => panic!("unknown test configuration {}", name)
    }
}

/// Simple cubic lattice with `n x n x n` atoms and a lattice parameter of
/// `spacing`, filling a periodic cubic cell
pub fn simple_cubic(n: usize, spacing: f64) -> AtomicConfiguration {
    let mut configuration = AtomicConfiguration::new(UnitCell::cubic(n as f64 * spacing));
    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                let position = Vector3D::new(i as f64, j as f64, k as f64) * spacing;
                configuration.add_atom("Po", position);
            }
        }
    }
    return configuration;
}

fn get_water() -> AtomicConfiguration {
    let mut configuration = AtomicConfiguration::new(UnitCell::cubic(10.0));
    configuration.add_atom("O", Vector3D::new(0.0, 0.0, 0.0));
    configuration.add_atom("H", Vector3D::new(0.0, 0.75545, -0.58895));
    configuration.add_atom("H", Vector3D::new(0.0, -0.75545, -0.58895));
    return configuration;
}

fn get_pair() -> AtomicConfiguration {
    let mut configuration = AtomicConfiguration::new(UnitCell::cubic(10.0));
    configuration.add_atom("Ar", Vector3D::new(0.0, 0.0, 0.0));
    configuration.add_atom("Ar", Vector3D::new(1.0, 0.0, 0.0));
    return configuration;
}

fn get_wrapped_pair() -> AtomicConfiguration {
    let mut configuration = AtomicConfiguration::new(UnitCell::cubic(10.0));
    configuration.add_atom("Ar", Vector3D::new(0.1, 0.0, 0.0));
    configuration.add_atom("Ar", Vector3D::new(9.9, 0.0, 0.0));
    return configuration;
}

/// Methane molecule, with one of the hydrogen atoms outside of the cell
fn get_methane() -> AtomicConfiguration {
    let mut configuration = AtomicConfiguration::new(UnitCell::cubic(5.0));
    configuration.add_atom("C", Vector3D::new(5.0000, 5.0000, 5.0000));
    configuration.add_atom("H", Vector3D::new(5.5288, 5.1610, 5.9359));
    configuration.add_atom("H", Vector3D::new(5.2051, 5.8240, 4.3214));
    configuration.add_atom("H", Vector3D::new(5.3345, 4.0686, 4.5504));
    configuration.add_atom("H", Vector3D::new(3.9315, 4.9463, 5.1921));
    return configuration;
}
