pub mod lammps_data;

pub use lammps_data::{read_data, read_data_file, write_data, write_data_file};
