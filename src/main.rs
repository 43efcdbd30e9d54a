use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};
use rand::rngs::StdRng;
use rand::SeedableRng;

use prop_cnf::err::ErrorKind;
use prop_cnf::pl::{self, random::parse_ratio};

fn cli() -> Command {
    Command::new("prop_cnf")
        .about("Generates random 3-SAT instances over the variables A-Z")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("ratio")
            .required(true)
            .allow_negative_numbers(true)
            .help("The ratio of clauses to variables, e.g. 2.2 gives 57 clauses over 26 variables."))

        .arg(Arg::new("output")
            .required(false)
            .value_parser(value_parser!(PathBuf))
            .help("File to write the instance to. Without one the instance is written to standard out."))

        .arg(Arg::new("seed")
            .long("seed")
            .value_parser(value_parser!(u64))
            .required(false)
            .num_args(1)
            .help("Seed for the generator, for reproducible instances."))

        .arg(Arg::new("dimacs")
            .long("dimacs")
            .action(ArgAction::SetTrue)
            .help("Write the instance in DIMACS form."))
}

fn instance(ratio: f64, seed: Option<u64>, dimacs: bool) -> Result<String, ErrorKind> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let clause_count = pl::clause_count_for_ratio(ratio);
    log::info!("Ratio {ratio} gives {clause_count} clauses");

    let text = pl::random_instance(clause_count, &mut rng);
    if dimacs {
        let sentence = pl::parse(&text)?;
        Ok(pl::to_dimacs(&sentence)?)
    } else {
        Ok(text)
    }
}

fn main() {
    env_logger::init();

    let matches = cli().get_matches();

    let ratio = match matches.get_one::<String>("ratio").map(|r| parse_ratio(r)) {
        Some(Ok(ratio)) => ratio,
        Some(Err(e)) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
        None => return,
    };
    let seed = matches.get_one::<u64>("seed").copied();
    let dimacs = matches.get_flag("dimacs");

    let text = match instance(ratio, seed, dimacs) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    match matches.get_one::<PathBuf>("output") {
        None => println!("{text}"),
        Some(path) => {
            if let Err(e) = pl::write_text(path, &text) {
                log::error!("{e}");
                eprintln!("{e}");
            }
        }
    }
}
