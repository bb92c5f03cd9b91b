use crate::{region::Rect, Container};

use super::Lattice;

/// Atomic mass unit, scaled so that mass / (g cm^-3) comes out in m^3
pub const AMU: f64 = 1.66054e-30;
/// Mass of a carbon atom in atomic mass units
pub const CARBON_MASS: f64 = 12.0;

/// Lattice parameter in Angstrom of a cubic cell holding `num_atoms` carbon
/// atoms at `density` in g cm^-3.
///
/// ```rust
/// use amorph::lattice::lattice_parameter;
///
/// let a = lattice_parameter(200, 3.5);
/// assert!((a - 10.4423).abs() < 1e-3);
/// ```
pub fn lattice_parameter(num_atoms: usize, density: f64) -> f64 {
    let cell_vol = CARBON_MASS * AMU * num_atoms as f64 / density;
    cell_vol.cbrt() * 1e10
}

#[derive(Clone, Copy, Debug)]
pub struct Cubic {
    a: f64,
}
impl Cubic {
    pub fn new(a: f64) -> Self {
        let s = Self { a };
        s.assert_positive();
        s
    }
    /// Cubic cell sized for `num_atoms` carbon atoms at `density` in g cm^-3
    pub fn from_density(num_atoms: usize, density: f64) -> Self {
        Self::new(lattice_parameter(num_atoms, density))
    }
    pub fn a(&self) -> f64 {
        self.a
    }
    fn assert_positive(&self) {
        assert!(
            self.a > 0.0 && self.a.is_finite(),
            "Lattice constant should be positive, found {}",
            self.a
        );
    }
}
impl Lattice for Cubic {
    fn cell_lengths(&self) -> [f64; 3] {
        [self.a, self.a, self.a]
    }
    fn periodic_container(&self) -> Container {
        let [lx, ly, lz] = self.cell_lengths();
        Container::from_rect_periodic(Rect::new(0.0, lx, 0.0, ly, 0.0, lz))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lattice_parameter_is_positive() {
        for n in [1, 2, 10, 200, 5000] {
            for density in [0.1, 1.0, 2.0, 3.5] {
                assert!(lattice_parameter(n, density) > 0.0);
            }
        }
    }

    #[test]
    fn doubling_atoms_scales_edge_by_cube_root_of_two() {
        let a1 = lattice_parameter(100, 2.2);
        let a2 = lattice_parameter(200, 2.2);
        assert!((a2 / a1 - 2f64.cbrt()).abs() < 1e-12);
    }

    #[test]
    fn volume_matches_density() {
        let a = lattice_parameter(64, 2.0);
        let vol_cm3 = (a * 1e-8).powi(3);
        let mass_g = 64.0 * CARBON_MASS * 1.66054e-24;
        assert!((mass_g / vol_cm3 - 2.0).abs() < 1e-9);
    }

    #[test]
    fn container_is_periodic_cube() {
        let lattice = Cubic::new(3.0);
        let container = lattice.periodic_container();
        assert_eq!(lattice.cell_lengths(), [3.0; 3]);
        assert_eq!(container.rect().lengths(), [3.0; 3]);
        let d2 = container.distance_squared(&[0.1, 0.1, 0.1], &[2.9, 2.9, 2.9]);
        assert!((d2 - 3.0 * 0.04).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "Lattice constant should be positive")]
    fn non_positive_lattice_constant_panics() {
        Cubic::new(0.0);
    }
}
