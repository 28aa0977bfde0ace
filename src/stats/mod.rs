pub mod dispersion;

pub use dispersion::{Dispersion, DispersionMethod, standard_deviation, variance};
