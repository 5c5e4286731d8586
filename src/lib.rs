#[allow(non_snake_case)]
pub mod Mechanism;
#[allow(non_snake_case)]
pub mod Utils;
pub mod cli;
pub mod mech_config;
