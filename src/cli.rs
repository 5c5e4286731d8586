/// command line entry points of the mechformat and parsemech tools
pub mod cli_main;
