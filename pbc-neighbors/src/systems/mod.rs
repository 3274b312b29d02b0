//! Atomic configurations and the periodic unit cell they live in

mod cell;
pub use self::cell::UnitCell;
pub(crate) use self::cell::minimum_image;

mod configuration;
pub use self::configuration::AtomicConfiguration;

#[cfg(test)]
pub(crate) mod test_utils;
