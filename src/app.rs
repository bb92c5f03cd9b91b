use log::{info, log_enabled, Level};
use rand::{rngs::StdRng, SeedableRng};

use crate::{config::Config, generator, naming, output, Error};

/// Generate one structure for `config` and write it under the config's output
/// directory without overwriting earlier runs. Returns the file's base name.
pub fn run(config: &Config) -> Result<String, Error> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let structure = generator::generate_structure(&config.generator_settings(), &mut rng)?;
    if log_enabled!(Level::Info) {
        if let Some(d) = structure.min_pair_distance() {
            info!("Closest pair at {:.4} A", d);
        }
    }

    let (name, path) = naming::next_available(&config.output_dir, &config.name_fields())?;
    output::write_data_file(&path, &structure, &name)?;
    info!("Wrote {}", path.display());
    Ok(name)
}
