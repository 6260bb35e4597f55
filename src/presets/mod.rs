// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 edmflow contributors

//! Canned process descriptors
//!
//! Complete wirings built from the template library, ready to emit or
//! validate.

use crate::errors::EdmflowResult;
use crate::filter::OutputRules;
use crate::params::{InputTag, ParameterSet};
use crate::process::{OutputDescriptor, Process, ProcessBuilder, SourceDescriptor, TaskPath};
use crate::templates::TemplateLibrary;

/// Names of the available presets
pub const PRESET_NAMES: &[&str] = &["regression-from-aod"];

/// Look up a preset by name
pub fn by_name(name: &str) -> Option<EdmflowResult<Process>> {
    match name {
        "regression-from-aod" => Some(regression_from_aod()),
        _ => None,
    }
}

/// Electron regression and calibration from an AOD input file
///
/// Process `ExREG`: clusters kt6 particle-flow jets for the rho estimate,
/// runs the electron energy regression over `gsfElectrons`, applies the
/// energy-scale calibration for the Fall11 simulation campaign, and writes
/// only the products made within this process.
pub fn regression_from_aod() -> EdmflowResult<Process> {
    let library = TemplateLibrary::builtin();
    let process_name = "ExREG";

    let rng_service = library
        .service("RandomNumberGeneratorService")?
        .with(
            "calibratedElectrons",
            ParameterSet::new()
                .with_untracked("initialSeed", 1u32)
                .with_untracked("engineName", "TRandom3"),
        );

    let kt6_pf_jets = library
        .instantiate("kt6PFJets")?
        .with("Rho_EtaMax", 2.5)
        .with("Ghost_EtaMax", 2.5);

    let ele_regression_energy = library
        .instantiate("eleRegressionEnergy")?
        .with("inputElectronsTag", InputTag::new("gsfElectrons"))
        .with("inputCollectionType", 0u32)
        .with("useRecHitCollections", true)
        .with("produceValueMaps", true)
        .with("rhoCollection", InputTag::with_instance("kt6PFJets", "rho"));

    let calibrated_electrons = library
        .instantiate("calibratedElectrons")?
        .with("isMC", true)
        .with("inputDataset", "Fall11")
        .with("updateEnergyError", true)
        .with("applyCorrections", 10)
        .with_untracked("debug", true);

    let process = ProcessBuilder::new(process_name)
        .global_tag("START44_V7::All")
        .max_events(1000)
        .service("RandomNumberGeneratorService", rng_service)
        .service("MessageLogger", library.service("MessageLogger")?)
        .module("kt6PFJets", kt6_pf_jets)
        .module("eleRegressionEnergy", ele_regression_energy)
        .module("calibratedElectrons", calibrated_electrons)
        .source(SourceDescriptor::pool(vec![
            "root://pcmssd12//data/gpetrucc/7TeV/hzz/aod/HToZZTo4L_M-120_Fall11S6.00215E21D5C4.root"
                .to_string(),
        ]))
        .output(OutputDescriptor::pool(
            "electrons-AOD.root",
            OutputRules::drop_all_keep_process(process_name),
        ))
        .path(TaskPath::new(
            "p",
            vec!["kt6PFJets", "eleRegressionEnergy", "calibratedElectrons"],
        ))
        .end_path(TaskPath::new("outpath", vec!["out"]))
        .build();

    Ok(process)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Selection;
    use crate::process::ProcessValidator;

    #[test]
    fn test_stage_order_is_cluster_regress_calibrate() {
        let process = regression_from_aod().unwrap();
        let path = process.get_path("p").unwrap();
        assert_eq!(
            path.modules,
            vec!["kt6PFJets", "eleRegressionEnergy", "calibratedElectrons"]
        );
    }

    #[test]
    fn test_output_rules_drop_all_keep_own() {
        let process = regression_from_aod().unwrap();
        let rules = &process.output.as_ref().unwrap().output_commands;

        let commands: Vec<String> =
            rules.commands().iter().map(|c| c.to_string()).collect();
        assert_eq!(commands, vec!["drop *", "keep *_*_*_ExREG"]);

        let own: crate::filter::BranchName =
            "doubleMap_calibratedElectrons_eneRegForGsfEle_ExREG".parse().unwrap();
        let upstream: crate::filter::BranchName =
            "recoGsfElectrons_gsfElectrons__RECO".parse().unwrap();
        assert_eq!(rules.selects(&own), Selection::Keep);
        assert_eq!(rules.selects(&upstream), Selection::Drop);
    }

    #[test]
    fn test_event_limit_is_1000() {
        let process = regression_from_aod().unwrap();
        assert_eq!(process.max_events, 1000);
    }

    #[test]
    fn test_calibration_overrides() {
        let process = regression_from_aod().unwrap();
        let module = process.get_module("calibratedElectrons").unwrap();

        assert_eq!(module.params.get_bool("isMC"), Some(true));
        assert_eq!(module.params.get_str("inputDataset"), Some("Fall11"));
        assert_eq!(module.params.get_bool("updateEnergyError"), Some(true));
        assert_eq!(module.params.get_i32("applyCorrections"), Some(10));
        assert_eq!(module.params.get_bool("debug"), Some(true));
        assert!(!module.params.get("debug").unwrap().tracked);
    }

    #[test]
    fn test_jet_clustering_overrides() {
        let process = regression_from_aod().unwrap();
        let module = process.get_module("kt6PFJets").unwrap();

        assert_eq!(module.params.get_f64("Rho_EtaMax"), Some(2.5));
        assert_eq!(module.params.get_f64("Ghost_EtaMax"), Some(2.5));
        // clone-with-override keeps the template defaults
        assert_eq!(module.params.get_f64("rParam"), Some(0.6));
    }

    #[test]
    fn test_round_trips_in_all_formats() {
        use crate::process::DescriptorFormat;

        // the preset carries the crate's trickiest shapes: nested service
        // parameter sets and untracked parameters
        let process = regression_from_aod().unwrap();

        for format in [
            DescriptorFormat::Yaml,
            DescriptorFormat::Json,
            DescriptorFormat::Toml,
        ] {
            let rendered = process.render(format).unwrap();
            let back = match format {
                DescriptorFormat::Yaml => Process::from_yaml(&rendered).unwrap(),
                DescriptorFormat::Json => serde_json::from_str(&rendered).unwrap(),
                DescriptorFormat::Toml => toml::from_str(&rendered).unwrap(),
            };
            assert_eq!(back, process, "round trip through {:?}", format);
        }
    }

    #[test]
    fn test_construction_is_idempotent() {
        assert_eq!(
            regression_from_aod().unwrap(),
            regression_from_aod().unwrap()
        );
    }

    #[test]
    fn test_preset_validates_cleanly() {
        let process = regression_from_aod().unwrap();
        let result = ProcessValidator::validate(&process);
        assert!(result.is_valid(), "errors: {:?}", result.errors);
        assert!(!result.has_warnings(), "warnings: {:?}", result.warnings);
    }

    #[test]
    fn test_by_name() {
        assert!(by_name("regression-from-aod").is_some());
        assert!(by_name("nosuchpreset").is_none());
    }
}
