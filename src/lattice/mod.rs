mod cubic;

pub use cubic::{lattice_parameter, Cubic, AMU, CARBON_MASS};

use crate::Container;

pub trait Lattice {
    fn cell_lengths(&self) -> [f64; 3];
    /// Fully periodic container spanning one unit cell from the origin
    fn periodic_container(&self) -> Container;
}
