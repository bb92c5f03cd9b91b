use std::{collections::BTreeMap, ffi::OsString, path::PathBuf};

use clap::Parser;

use crate::{
    error::USAGE,
    generator::{GeneratorSettings, DEFAULT_HARD_SPHERE_R},
    utils::{float_repr, round_to},
    Error,
};

pub const KEY_N: &str = "N";
pub const KEY_DENSITY: &str = "density";
pub const KEY_HARD_SPHERE_R: &str = "hard_sphere_r";

/// Decimal places kept for real-valued parameters
const DECIMALS: usize = 3;

/// Generate a random cubic cell of carbon atoms under a hard-sphere constraint
#[derive(Debug, Parser)]
#[command(name = "amorph", version, after_help = USAGE)]
pub struct Cli {
    /// Parameters as key=value pairs: N, density, hard_sphere_r and any naming tags
    #[arg(value_name = "KEY=VALUE")]
    pub params: Vec<String>,

    /// Seed for the random number generator
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory receiving the data file
    #[arg(long, default_value = "structures")]
    pub output_dir: PathBuf,

    /// Give up on an atom after this many rejected candidates
    #[arg(long)]
    pub max_attempts: Option<u64>,
}

/// Run configuration, parsed once from the command line
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub num_atoms: usize,
    /// Density in g cm^-3, rounded to three decimals
    pub density: f64,
    /// Only set when passed explicitly, so the default stays out of the name
    pub hard_sphere_r: Option<f64>,
    /// Extra keys used for naming only
    pub tags: BTreeMap<String, String>,
    pub seed: Option<u64>,
    pub output_dir: PathBuf,
    pub max_attempts: Option<u64>,
}
impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self, Error> {
        let kwargs = parse_kwargs(cli.params.as_slice())?;
        let mut config = Self::from_kwargs(kwargs)?;
        config.seed = cli.seed;
        config.output_dir = cli.output_dir;
        config.max_attempts = cli.max_attempts;
        Ok(config)
    }
    pub fn from_args<I, T>(args: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = Cli::try_parse_from(args).map_err(|e| Error::InvalidParameter(e.to_string()))?;
        Self::from_cli(cli)
    }
    /// Build a config from parsed `key=value` pairs, with default ambient options
    pub fn from_kwargs(mut kwargs: BTreeMap<String, String>) -> Result<Self, Error> {
        let n = kwargs.remove(KEY_N).ok_or(Error::MissingKey(KEY_N))?;
        let density = kwargs
            .remove(KEY_DENSITY)
            .ok_or(Error::MissingKey(KEY_DENSITY))?;
        let hard_sphere_r = kwargs.remove(KEY_HARD_SPHERE_R);

        let num_atoms = n.trim().parse::<usize>().map_err(|_| Error::InvalidValue {
            key: String::from(KEY_N),
            value: n.clone(),
        })?;
        let density = parse_real(KEY_DENSITY, &density)?;
        let hard_sphere_r = hard_sphere_r
            .map(|r| parse_real(KEY_HARD_SPHERE_R, &r))
            .transpose()?;

        Ok(Self {
            num_atoms,
            density,
            hard_sphere_r,
            tags: kwargs,
            seed: None,
            output_dir: PathBuf::from("structures"),
            max_attempts: None,
        })
    }

    pub fn generator_settings(&self) -> GeneratorSettings {
        GeneratorSettings {
            hard_sphere_r: self.hard_sphere_r.unwrap_or(DEFAULT_HARD_SPHERE_R),
            max_attempts: self.max_attempts,
            ..GeneratorSettings::new(self.num_atoms, self.density)
        }
    }
    /// Every key that takes part in the output name, with its rendered value
    pub fn name_fields(&self) -> BTreeMap<String, String> {
        let mut fields = self.tags.clone();
        fields.insert(String::from(KEY_N), self.num_atoms.to_string());
        fields.insert(String::from(KEY_DENSITY), float_repr(self.density));
        if let Some(r) = self.hard_sphere_r {
            fields.insert(String::from(KEY_HARD_SPHERE_R), float_repr(r));
        }
        fields
    }
}

/// Split each token on `=` into a key and a value. Later keys overwrite
/// earlier ones.
pub fn parse_kwargs<S: AsRef<str>>(tokens: &[S]) -> Result<BTreeMap<String, String>, Error> {
    let mut kwargs = BTreeMap::new();
    for token in tokens {
        let token = token.as_ref();
        let parts: Vec<&str> = token.split('=').collect();
        let [key, value] = parts.as_slice() else {
            return Err(Error::ArgumentParse(String::from(token)));
        };
        kwargs.insert(String::from(*key), String::from(*value));
    }
    Ok(kwargs)
}

fn parse_real(key: &str, value: &str) -> Result<f64, Error> {
    let invalid = || Error::InvalidValue {
        key: String::from(key),
        value: String::from(value),
    };
    let parsed = value.trim().parse::<f64>().map_err(|_| invalid())?;
    round_to(parsed, DECIMALS).map_err(|_| invalid())
}
