pub mod app;
pub mod atoms;
pub mod config;
pub mod container;
pub mod error;
pub mod generator;
pub mod lattice;
pub mod naming;
pub mod output;
pub mod region;
pub mod utils;

pub use atoms::Atoms;
pub use config::{Cli, Config};
pub use container::Container;
pub use error::Error;
pub use generator::{generate_structure, GeneratorSettings, Structure};
pub use lattice::{lattice_parameter, Cubic, Lattice};
