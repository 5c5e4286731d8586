//! mechformat MECHDIR MECHFILENAME
//!
//! Reads `./mechs/MECHDIR/MECHFILENAME` and writes the reformatted mechanism with
//! double precision rate coefficients to `./mechs/MECHDIR/rf_MECHDIR.eqn`.
use mechprep::cli::cli_main::{finish, init_logging, run_mechformat};
use mechprep::mech_config::MechConfig;
use std::process::ExitCode;

fn main() -> ExitCode {
    init_logging();
    let result =
        MechConfig::from_default_location().and_then(|config| run_mechformat(std::env::args_os(), &config));
    finish(result)
}
