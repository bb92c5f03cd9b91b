use std::process;

use amorph::{app, Cli, Config};
use clap::Parser;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let result = Config::from_cli(cli).and_then(|config| app::run(&config));
    match result {
        Ok(name) => println!("{}", name),
        Err(e) => {
            eprintln!("{}", e);
            process::exit(e.exit_code());
        }
    }
}
