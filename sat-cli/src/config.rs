//! Command line configuration, parsed once in `main` and handed down to
//! whichever subcommand runs. Mirrors the shape of a plain config struct
//! built from `clap::ArgMatches` rather than exposing `ArgMatches` itself
//! past `main`.

use clap::ArgMatches;

use crate::error::CliError;

pub struct Config {
    pub command: Command,
}

pub enum Command {
    /// Recover a toy cipher's key from a plaintext/ciphertext pair via
    /// bit-blasting and DPLL search.
    Cipher { width: usize, seed: u64 },
    /// Build and solve a fixed-width unsigned comparison circuit for two
    /// constants, printing the result.
    Compare { width: usize, x: u64, y: u64 },
    /// Generate a random 3-SAT instance and report satisfiability.
    Random3Sat {
        num_vars: usize,
        num_clauses: usize,
        seed: u64,
    },
}

fn parse_int<T>(matches: &ArgMatches, name: &'static str) -> Result<T, CliError>
where
    T: std::str::FromStr,
{
    let raw = matches.value_of(name).expect("clap required this argument");
    raw.parse::<T>().map_err(|_| CliError::InvalidArgument {
        name,
        reason: format!("`{}` is not a valid number", raw),
    })
}

impl Config {
    pub fn from_matches(matches: &ArgMatches) -> Result<Config, CliError> {
        let command = match matches.subcommand() {
            ("cipher", Some(sub)) => Command::Cipher {
                width: parse_int(sub, "width")?,
                seed: parse_int(sub, "seed")?,
            },
            ("compare", Some(sub)) => Command::Compare {
                width: parse_int(sub, "width")?,
                x: parse_int(sub, "x")?,
                y: parse_int(sub, "y")?,
            },
            ("random-3sat", Some(sub)) => Command::Random3Sat {
                num_vars: parse_int(sub, "vars")?,
                num_clauses: parse_int(sub, "clauses")?,
                seed: parse_int(sub, "seed")?,
            },
            _ => unreachable!("clap's SubcommandRequiredElseHelp guarantees a subcommand matched"),
        };
        Ok(Config { command })
    }
}
