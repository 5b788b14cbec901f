//! Command line driver over `sat-core`: a toy cipher key-recovery demo, a
//! fixed-width comparison demo, and a random 3-SAT satisfiability check.

mod cipher;
mod config;
mod error;

use clap::{App, AppSettings, Arg, SubCommand};
use rand::{Rng, SeedableRng};
use sat_core::integer::{compare, integer_constant_constraint, Integer};
use sat_core::{solve, Builder};
use std::process;

use config::{Command, Config};
use error::CliError;

fn init_logging() {
    // Honors SAT_CLI_LOG the way varisat-cli honors VARISAT_LOG: unset means
    // "info and above".
    let env = env_logger::Env::default().filter_or("SAT_CLI_LOG", "info");
    env_logger::Builder::from_env(env).init();
}

fn build_cli() -> App<'static, 'static> {
    App::new("sat-cli")
        .version("0.1.0")
        .about("DPLL solver and bit-blasting circuit compiler demos")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .subcommand(
            SubCommand::with_name("cipher")
                .about("Recover a toy cipher's key from a plaintext/ciphertext pair")
                .arg(Arg::with_name("width").long("width").takes_value(true).default_value("4"))
                .arg(Arg::with_name("seed").long("seed").takes_value(true).default_value("12345")),
        )
        .subcommand(
            SubCommand::with_name("compare")
                .about("Solve a fixed-width unsigned comparison of two constants")
                .arg(Arg::with_name("width").long("width").takes_value(true).default_value("8"))
                .arg(Arg::with_name("x").long("x").takes_value(true).required(true))
                .arg(Arg::with_name("y").long("y").takes_value(true).required(true)),
        )
        .subcommand(
            SubCommand::with_name("random-3sat")
                .about("Generate a random 3-SAT instance and report satisfiability")
                .arg(Arg::with_name("vars").long("vars").takes_value(true).default_value("20"))
                .arg(Arg::with_name("clauses").long("clauses").takes_value(true).default_value("80"))
                .arg(Arg::with_name("seed").long("seed").takes_value(true).default_value("1")),
        )
}

fn run_cipher(width: usize, seed: u64) -> Result<(), CliError> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let (plaintext, secret_key) = cipher::random_plaintext_and_key(&mut rng, width);
    let ciphertext = cipher::encrypt(plaintext, secret_key, width);
    log::info!(
        "cipher: width={} plaintext={:?} secret_key={:?} ciphertext={:?}",
        width,
        plaintext,
        secret_key,
        ciphertext
    );

    let recovered = cipher::recover_key(plaintext, ciphertext, width)?;
    println!("recovered key: {:?}", recovered);
    println!("matches secret key exactly: {}", recovered == secret_key);
    Ok(())
}

fn run_compare(width: usize, x: u64, y: u64) -> Result<(), CliError> {
    let mut builder = Builder::new();
    let x_var = Integer::new(&mut builder, width);
    integer_constant_constraint(&mut builder, &x_var, x);
    let y_var = Integer::new(&mut builder, width);
    integer_constant_constraint(&mut builder, &y_var, y);
    let cmp = compare(&mut builder, &x_var, &y_var);

    let instance = builder.make_instance();
    let model = solve(&instance).next().expect("constants are always satisfiable");

    let relation = if model[&cmp.less_than] {
        "<"
    } else if model[&cmp.equal] {
        "=="
    } else {
        ">"
    };
    println!("{} {} {} (width {})", x, relation, y, width);
    Ok(())
}

fn run_random_3sat(num_vars: usize, num_clauses: usize, seed: u64) -> Result<(), CliError> {
    use sat_core::Clause;

    if num_vars < 3 {
        return Err(CliError::InvalidArgument {
            name: "vars",
            reason: "need at least 3 variables for 3-SAT clauses".to_string(),
        });
    }

    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let mut clauses = Vec::with_capacity(num_clauses);
    for _ in 0..num_clauses {
        let mut vars: Vec<usize> = (1..=num_vars).collect();
        for i in 0..3 {
            let j = rng.gen_range(i, num_vars);
            vars.swap(i, j);
        }
        let mut positive = Vec::new();
        let mut negative = Vec::new();
        for &var in &vars[0..3] {
            if rng.gen::<bool>() {
                positive.push(var);
            } else {
                negative.push(var);
            }
        }
        clauses.push(Clause::new(positive, negative));
    }

    log::debug!("random-3sat: {} variables, {} clauses, seed {}", num_vars, num_clauses, seed);
    let instance = sat_core::Instance::new(clauses);
    match solve(&instance).next() {
        Some(model) => {
            println!("SATISFIABLE");
            let mut assigned: Vec<_> = model.into_iter().collect();
            assigned.sort();
            for (var, value) in assigned {
                println!("  {} = {}", var, value);
            }
        }
        None => println!("UNSATISFIABLE"),
    }
    Ok(())
}

fn run(config: Config) -> Result<(), CliError> {
    match config.command {
        Command::Cipher { width, seed } => run_cipher(width, seed),
        Command::Compare { width, x, y } => run_compare(width, x, y),
        Command::Random3Sat {
            num_vars,
            num_clauses,
            seed,
        } => run_random_3sat(num_vars, num_clauses, seed),
    }
}

fn main() {
    init_logging();
    let matches = build_cli().get_matches();
    let config = match Config::from_matches(&matches) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            process::exit(2);
        }
    };

    if let Err(e) = run(config) {
        log::error!("{}", e);
        process::exit(1);
    }
}
