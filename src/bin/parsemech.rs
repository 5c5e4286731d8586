//! parsemech MECHNAME
//!
//! Reads `./mechs/MECHNAME/MECHNAME.eqn`, lists its unique species and writes a first
//! version of the species file to `./mechs/MECHNAME/init_MECHNAME.spc`.
use mechprep::cli::cli_main::{finish, init_logging, run_parsemech};
use mechprep::mech_config::MechConfig;
use std::process::ExitCode;

fn main() -> ExitCode {
    init_logging();
    let result =
        MechConfig::from_default_location().and_then(|config| run_parsemech(std::env::args_os(), &config));
    finish(result)
}
