use clap::Parser;

use rand_cnf::generator::Generator;

mod args;

use args::{config_from_args, Args};

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let args = Args::parse();

    let config = match config_from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid option: {e}");
            std::process::exit(1);
        }
    };

    let mut generator = match Generator::from_config(config) {
        Ok(generator) => generator,
        Err(e) => {
            eprintln!("Failed to configure generator: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = generator.write_dimacs_file(&args.out) {
        eprintln!("Failed to write {}: {e}", args.out.display());
        std::process::exit(1);
    }

    println!("CNF file written to {}", args.out.display());
}
