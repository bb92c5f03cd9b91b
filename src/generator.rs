use log::{debug, info};
use rand::Rng;

use crate::{
    lattice::{Cubic, Lattice, CARBON_MASS},
    region::Region,
    Atoms, Container, Error,
};

pub const DEFAULT_HARD_SPHERE_R: f64 = 0.5;

/// Physical inputs of one placement run
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorSettings {
    pub num_atoms: usize,
    /// Density in g cm^-3
    pub density: f64,
    /// Half of the minimum allowed separation, in Angstrom
    pub hard_sphere_r: f64,
    /// Candidate draws allowed per atom. `None` retries forever.
    pub max_attempts: Option<u64>,
}
impl GeneratorSettings {
    pub fn new(num_atoms: usize, density: f64) -> Self {
        Self {
            num_atoms,
            density,
            hard_sphere_r: DEFAULT_HARD_SPHERE_R,
            max_attempts: None,
        }
    }
    pub fn validate(&self) -> Result<(), Error> {
        if self.num_atoms == 0 {
            return Err(Error::InvalidParameter(String::from(
                "N should be positive, found 0",
            )));
        }
        if !(self.density > 0.0 && self.density.is_finite()) {
            return Err(Error::InvalidParameter(format!(
                "density should be positive, found {}",
                self.density
            )));
        }
        if !self.hard_sphere_r.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "hard_sphere_r should be finite, found {}",
                self.hard_sphere_r
            )));
        }
        if self.max_attempts == Some(0) {
            return Err(Error::InvalidParameter(String::from(
                "max attempts should be positive, found 0",
            )));
        }
        Ok(())
    }
}

/// Carbon atoms inside a periodic cubic cell
#[derive(Clone, Debug)]
pub struct Structure {
    pub atoms: Atoms,
    container: Container,
}
impl Structure {
    pub fn new(atoms: Atoms, container: Container) -> Self {
        Self { atoms, container }
    }
    pub fn container(&self) -> &Container {
        &self.container
    }
    pub fn num_atoms(&self) -> usize {
        self.atoms.num_atoms()
    }
    /// Smallest pairwise distance under the container's boundary conditions
    pub fn min_pair_distance(&self) -> Option<f64> {
        let positions = self.atoms.positions();
        let mut min_sq: Option<f64> = None;
        for i in 0..positions.len() {
            for j in 0..i {
                let d2 = self.container.distance_squared(&positions[i], &positions[j]);
                min_sq = Some(min_sq.map_or(d2, |m| m.min(d2)));
            }
        }
        min_sq.map(f64::sqrt)
    }
}

/// Place `num_atoms` carbon atoms at random in a periodic cubic cell so that
/// no two are closer than `2 * hard_sphere_r` under the minimum image.
///
/// The first atom starts at the origin and every later atom is redrawn until
/// it clears all atoms placed before it. The whole configuration is then
/// shifted by one random vector and wrapped back into the cell.
pub fn generate_structure<R: Rng + ?Sized>(
    settings: &GeneratorSettings,
    rng: &mut R,
) -> Result<Structure, Error> {
    settings.validate()?;

    let lattice = Cubic::from_density(settings.num_atoms, settings.density);
    let container = lattice.periodic_container();
    info!(
        "Placing {} atoms in a cubic cell with a = {:.4} A",
        settings.num_atoms,
        lattice.a()
    );

    let mut atoms = Atoms::new();
    let carbon = atoms.add_type(CARBON_MASS);
    atoms.add_atoms(carbon, vec![[0.0, 0.0, 0.0]; settings.num_atoms]);

    // a non-positive radius places no constraint
    let min_dist = (2.0 * settings.hard_sphere_r).max(0.0);
    let min_dist_sq = min_dist * min_dist;
    let mut total_attempts: u64 = 0;

    for i in 1..settings.num_atoms {
        let mut attempts: u64 = 0;
        let position = loop {
            if let Some(max_attempts) = settings.max_attempts {
                if attempts >= max_attempts {
                    return Err(Error::PlacementFailed { index: i, attempts });
                }
            }
            attempts += 1;

            let candidate = container.rect().get_random_coord(rng);
            let clear = atoms.positions()[..i]
                .iter()
                .all(|placed| container.distance_squared(&candidate, placed) >= min_dist_sq);
            if clear {
                break candidate;
            }
        };
        atoms.set_position(i, position);
        total_attempts += attempts;
        if attempts > 1 {
            debug!("Atom {} placed after {} attempts", i, attempts);
        }
    }

    let shift = container.rect().get_random_coord(rng);
    for i in 0..atoms.num_atoms() {
        atoms.increment_position(i, shift);
        container.wrap(&mut atoms.positions[i]);
        debug_assert!(container.contains(&atoms.positions()[i]));
    }
    info!(
        "Placed {} atoms with {} candidate draws",
        settings.num_atoms,
        total_attempts + 1
    );

    Ok(Structure::new(atoms, container))
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::lattice::lattice_parameter;

    fn settings(num_atoms: usize, density: f64, hard_sphere_r: f64) -> GeneratorSettings {
        GeneratorSettings {
            hard_sphere_r,
            ..GeneratorSettings::new(num_atoms, density)
        }
    }

    #[test]
    fn respects_hard_sphere_constraint() {
        let mut rng = StdRng::seed_from_u64(42);
        for (n, density, r) in [(10, 2.0, 0.5), (200, 1.5, 0.5), (64, 3.0, 0.6), (50, 0.5, 1.2)] {
            let structure = generate_structure(&settings(n, density, r), &mut rng).unwrap();
            let positions = structure.atoms.positions();
            for i in 0..positions.len() {
                for j in 0..i {
                    let d2 = structure
                        .container()
                        .distance_squared(&positions[i], &positions[j]);
                    assert!(d2.sqrt() >= 2.0 * r - 1e-9, "atoms {} and {} overlap", i, j);
                }
            }
        }
    }

    #[test]
    fn positions_lie_inside_cell() {
        let mut rng = StdRng::seed_from_u64(3);
        let structure = generate_structure(&settings(300, 2.5, 0.5), &mut rng).unwrap();
        let a = lattice_parameter(300, 2.5);
        assert_eq!(structure.container().rect().lengths(), [a; 3]);
        for p in structure.atoms.positions() {
            assert!(structure.container().contains(p), "{:?} outside cell", p);
        }
    }

    #[test]
    fn produces_requested_number_of_carbon_atoms() {
        let mut rng = StdRng::seed_from_u64(0);
        let structure = generate_structure(&GeneratorSettings::new(10, 2.0), &mut rng).unwrap();
        assert_eq!(structure.num_atoms(), 10);
        assert_eq!(structure.atoms.num_types(), 1);
        assert!(structure.atoms.types().iter().all(|&t| t == 0));
        assert_eq!(structure.atoms.type_masses(), &vec![CARBON_MASS]);
    }

    #[test]
    fn first_atom_is_shifted_off_origin() {
        let mut rng = StdRng::seed_from_u64(11);
        let structure = generate_structure(&GeneratorSettings::new(5, 1.0), &mut rng).unwrap();
        assert_ne!(structure.atoms.positions()[0], [0.0, 0.0, 0.0]);
    }

    #[test]
    fn same_seed_gives_same_structure() {
        let s = GeneratorSettings::new(40, 2.0);
        let a = generate_structure(&s, &mut StdRng::seed_from_u64(9)).unwrap();
        let b = generate_structure(&s, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a.atoms, b.atoms);
    }

    #[test]
    fn single_atom_structure() {
        let mut rng = StdRng::seed_from_u64(1);
        let structure = generate_structure(&GeneratorSettings::new(1, 2.0), &mut rng).unwrap();
        assert_eq!(structure.num_atoms(), 1);
        assert_eq!(structure.min_pair_distance(), None);
    }

    #[test]
    fn retry_cap_reports_failure() {
        // Spheres far larger than the cell cannot fit a second atom
        let s = GeneratorSettings {
            max_attempts: Some(25),
            ..settings(10, 2.0, 50.0)
        };
        let err = generate_structure(&s, &mut StdRng::seed_from_u64(5)).unwrap_err();
        assert!(matches!(
            err,
            Error::PlacementFailed {
                index: 1,
                attempts: 25
            }
        ));
    }

    #[test]
    fn rejects_invalid_parameters() {
        let mut rng = StdRng::seed_from_u64(0);
        for s in [
            GeneratorSettings::new(0, 2.0),
            GeneratorSettings::new(10, 0.0),
            GeneratorSettings::new(10, -1.0),
            settings(10, 2.0, f64::NAN),
            GeneratorSettings {
                max_attempts: Some(0),
                ..GeneratorSettings::new(10, 2.0)
            },
        ] {
            assert!(matches!(
                generate_structure(&s, &mut rng),
                Err(Error::InvalidParameter(_))
            ));
        }
    }

    #[test]
    fn negative_radius_accepts_every_candidate() {
        let s = GeneratorSettings {
            max_attempts: Some(1),
            ..settings(200, 3.5, -5.0)
        };
        let structure = generate_structure(&s, &mut StdRng::seed_from_u64(8)).unwrap();
        assert_eq!(structure.num_atoms(), 200);
    }

    #[test]
    fn min_pair_distance_matches_constraint() {
        let mut rng = StdRng::seed_from_u64(21);
        let structure = generate_structure(&settings(80, 2.0, 0.7), &mut rng).unwrap();
        assert!(structure.min_pair_distance().unwrap() >= 1.4 - 1e-9);
    }
}
