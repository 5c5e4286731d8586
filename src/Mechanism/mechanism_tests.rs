use crate::Mechanism::line_tokenizer::{MechanismLine, strip_stoichiometry};
use crate::Mechanism::mech_format::reformat_mechanism;
use crate::Mechanism::rate_normalizer::RateNormalizer;
use crate::Mechanism::species::{SpeciesSet, initial_species, render_species_file};
use crate::Utils::load_from_file::{MechanismSource, load_mechanism, write_document};
use crate::mech_config::MechConfig;
use std::fs;
use std::io::Write;
use tempfile::{NamedTempFile, tempdir};

const CB_MECH: &str = "#  small ozone mechanism\n\
    1   NO2 + hv -> NO + O          : TJPL(1.40D-2,TEMP) ;\n\
    2   O + O2 + M -> O3 + M        : TERM(6.0E-34,-2.4,AIR) ;\n\
    3   O3 + NO -> NO2 + O2         : 3.0E-12*EXP(-1500./TEMP) ;\n\
    4   HO2 + HO2 -> H2O2 + O2      : ARR2(2.2E-13,600.)*(1.0+1.4E-21*h2oz*EXP(2200./TEMP)) ;\n\
    5   2NO2 + hv -> 0.5HNO3 + NO3  : kphoto(jNO2)*1.0e-3 ;\n";

#[test]
fn test_reformat_whole_mechanism() {
    let source = MechanismSource::from_text("cb.eqn", CB_MECH).unwrap();
    let out = reformat_mechanism(&source, &MechConfig::default()).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "#  small ozone mechanism");
    let rates: Vec<&str> = lines[1..]
        .iter()
        .map(|l| l.split(" : ").nth(1).unwrap().trim())
        .collect();
    assert_eq!(
        rates,
        vec![
            "TJPL(1.40D-2,TEMP) ;",
            "TERM(6.0D-34,-2.4D0,AIR) ;",
            "3.0D-12*EXP(-1500./TEMP) ;",
            "ARR2(2.2D-13,600.D0)*(1.0+1.4D-21*H2Oz*EXP(2200./TEMP)) ;",
            "kphoto(jNO2)*1.0e-3 ;",
        ]
    );
    for (i, line) in lines[1..].iter().enumerate() {
        assert!(line.starts_with(&format!("{{{}.}}", i + 1)));
    }
}

#[test]
fn test_reformatted_output_is_stable() {
    // rates of a reformatted file come out the same when it is read again
    let source = MechanismSource::from_text("cb.eqn", CB_MECH).unwrap();
    let normalizer = RateNormalizer::new();
    for line in source.parse_lines().unwrap() {
        let once = normalizer.normalize(&line.rate).unwrap();
        assert_eq!(normalizer.normalize(&once).unwrap(), once);
    }
}

#[test]
fn test_species_of_whole_mechanism() {
    let source = MechanismSource::from_text("cb.eqn", CB_MECH).unwrap();
    let species = initial_species(&source, &MechConfig::default()).unwrap();
    assert_eq!(
        species.as_slice(),
        ["NO2", "NO", "O", "O3", "HO2", "H2O2", "HNO3", "NO3"]
            .map(String::from)
            .as_slice()
    );
}

#[test]
fn test_species_from_scenario_tokens() {
    let line = MechanismLine::parse("1 2NO2 + hv -> NO + O : 1.0 ;", 2).unwrap();
    assert_eq!(
        line.left_tokens,
        vec!["2NO2", "+", "hv", "->", "NO", "+", "O"]
    );
    let mut species = SpeciesSet::from_lines(&[line]);
    species.remove_operators(&MechConfig::default().operator_tokens);
    assert_eq!(species.as_slice(), ["NO2", "NO", "O"].map(String::from).as_slice());
    assert_eq!(strip_stoichiometry("100"), "");
}

#[test]
fn test_custom_config_tables() {
    let config = MechConfig {
        rate_function_prefixes: vec!["KFAL".to_string()],
        common_species: vec![],
        column_padding: 2,
        ..MechConfig::default()
    };
    let source =
        MechanismSource::from_text("m.eqn", "h\n1 A + M -> B : KFAL(1.0,AIR) ;\n").unwrap();
    let out = reformat_mechanism(&source, &config).unwrap();
    assert_eq!(
        out.lines().nth(1).unwrap(),
        format!("{:<8}{:<15}KFAL(1.0D0,AIR) ;", "{1.}", "A + M -> B : ")
    );
    let species = initial_species(&source, &config).unwrap();
    assert!(species.contains("M"));
}

#[test]
fn test_files_round_trip_through_disk() {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", CB_MECH).unwrap();
    let source = load_mechanism(temp_file.path()).unwrap();
    let config = MechConfig::default();

    let dir = tempdir().unwrap();
    let rf = dir.path().join("rf_cb.eqn");
    write_document(&rf, &reformat_mechanism(&source, &config).unwrap()).unwrap();
    let reread = load_mechanism(&rf).unwrap();
    assert_eq!(reread.header, source.header);
    assert_eq!(reread.parse_lines().unwrap().len(), 5);

    let spc = dir.path().join("init_cb.spc");
    let species = initial_species(&source, &config).unwrap();
    write_document(&spc, &render_species_file(&species, config.species_column_width)).unwrap();
    let text = fs::read_to_string(&spc).unwrap();
    assert_eq!(text.lines().count(), species.len());
    assert!(text.starts_with("NO2           NO2"));
}
