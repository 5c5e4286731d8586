use crate::Mechanism::errors::MechError;
use crate::Mechanism::mech_format::reformat_mechanism;
use crate::Mechanism::species::{initial_species, render_species_file};
use crate::Utils::load_from_file::{load_mechanism, write_document};
use crate::mech_config::MechConfig;
use clap::{Arg, ArgMatches, Command};
use log::{error, info};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::ffi::OsString;
use std::process::ExitCode;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_USAGE: u8 = 2;

pub fn init_logging() {
    // a logger set up earlier (e.g. by a test harness) stays in place
    let _ = TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
}

pub fn mechformat_command() -> Command {
    Command::new("mechformat")
        .about("Reformats a mechanism file and converts its rate coefficients to double precision")
        .arg(
            Arg::new("MECHDIR")
                .help("Mechanism directory under the mechanisms root")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("MECHFILENAME")
                .help("Mechanism file inside MECHDIR")
                .required(true)
                .index(2),
        )
}

pub fn parsemech_command() -> Command {
    Command::new("parsemech")
        .about("Collects the unique species of a mechanism into an initial species file")
        .arg(
            Arg::new("MECHNAME")
                .help("Mechanism name, reads MECHNAME/MECHNAME.eqn")
                .required(true)
                .index(1),
        )
}

/// None when help or version was requested and printed
fn parse_args<I, T>(command: Command, args: I) -> Result<Option<ArgMatches>, MechError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match command.try_get_matches_from(args) {
        Ok(matches) => Ok(Some(matches)),
        Err(e) if e.use_stderr() => Err(MechError::Usage(e.to_string())),
        Err(e) => {
            e.print()?;
            Ok(None)
        }
    }
}

fn positional<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a str, MechError> {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .ok_or_else(|| MechError::Usage(format!("missing argument {}", name)))
}

/// mechformat MECHDIR MECHFILENAME: writes MECHDIR/rf_MECHDIR.eqn
pub fn run_mechformat<I, T>(args: I, config: &MechConfig) -> Result<(), MechError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let Some(matches) = parse_args(mechformat_command(), args)? else {
        return Ok(());
    };
    let mech_dir = positional(&matches, "MECHDIR")?;
    let mech_file = positional(&matches, "MECHFILENAME")?;

    let dir = config.mech_dir(mech_dir);
    let source = load_mechanism(&dir.join(mech_file))?;
    let document = reformat_mechanism(&source, config)?;

    let outfile = dir.join(format!("rf_{}.eqn", mech_dir));
    info!("Writing reformatted file: {}", outfile.display());
    write_document(&outfile, &document)?;
    info!("Success!");
    Ok(())
}

/// parsemech MECHNAME: writes MECHNAME/init_MECHNAME.spc
pub fn run_parsemech<I, T>(args: I, config: &MechConfig) -> Result<(), MechError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let Some(matches) = parse_args(parsemech_command(), args)? else {
        return Ok(());
    };
    let mech_name = positional(&matches, "MECHNAME")?;

    let dir = config.mech_dir(mech_name);
    let source = load_mechanism(&dir.join(format!("{}.eqn", mech_name)))?;
    let species = initial_species(&source, config)?;

    let spc_file = dir.join(format!("init_{}.spc", mech_name));
    info!("Writing {} species to {}", species.len(), spc_file.display());
    write_document(
        &spc_file,
        &render_species_file(&species, config.species_column_width),
    )?;
    Ok(())
}

/// process exit status: 0 success, 2 wrong usage, 1 anything else
pub fn exit_status(result: &Result<(), MechError>) -> u8 {
    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(MechError::Usage(_)) => EXIT_USAGE,
        Err(_) => EXIT_FAILURE,
    }
}

/// reports the outcome of a tool run and turns it into the exit code
pub fn finish(result: Result<(), MechError>) -> ExitCode {
    let status = exit_status(&result);
    match result {
        Ok(()) => {}
        Err(MechError::Usage(msg)) => eprintln!("{}", msg),
        Err(e) => error!("{}", e),
    }
    ExitCode::from(status)
}
