// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 edmflow contributors

//! Built-in template defaults
//!
//! Default parameter records for the externally implemented modules this
//! crate knows how to wire: kt-algorithm jet clustering, electron energy
//! regression, and electron energy-scale calibration.

use crate::params::{InputTag, ParameterSet};
use crate::process::ModuleConfig;

/// kt-algorithm particle-flow jet clustering with rho estimation
pub fn kt6_pf_jets() -> ModuleConfig {
    ModuleConfig::new("FastjetJetProducer")
        .with("src", InputTag::new("particleFlow"))
        .with("jetAlgorithm", "Kt")
        .with("rParam", 0.6)
        .with("doRhoFastjet", true)
        .with("doAreaFastjet", true)
        .with("Rho_EtaMax", 4.4)
        .with("Ghost_EtaMax", 5.0)
}

/// Electron energy regression producer
pub fn ele_regression_energy() -> ModuleConfig {
    ModuleConfig::new("RegressionEnergyPatElectronProducer")
        .with("inputElectronsTag", InputTag::new("gsfElectrons"))
        // 0 = GsfElectron collection, 1 = pat::Electron collection
        .with("inputCollectionType", 0u32)
        .with("useRecHitCollections", false)
        .with("produceValueMaps", false)
        .with("nameEnergyReg", "eneRegForGsfEle")
        .with("nameEnergyErrorReg", "eneErrorRegForGsfEle")
        .with("recHitCollectionEB", InputTag::new("reducedEcalRecHitsEB"))
        .with("recHitCollectionEE", InputTag::new("reducedEcalRecHitsEE"))
        .with("rhoCollection", InputTag::with_instance("kt6PFJets", "rho"))
        .with("vertexCollection", InputTag::new("offlinePrimaryVertices"))
        .with("energyRegressionType", 1)
        .with(
            "regressionInputFile",
            "EgammaAnalysis/ElectronTools/data/eleEnergyRegWeights_V1.root",
        )
        .with_untracked("debug", false)
}

/// Electron energy-scale calibration producer
pub fn calibrated_electrons() -> ModuleConfig {
    ModuleConfig::new("CalibratedElectronProducer")
        .with("inputElectronsTag", InputTag::new("gsfElectrons"))
        .with(
            "nameEnergyReg",
            InputTag::with_instance("eleRegressionEnergy", "eneRegForGsfEle"),
        )
        .with(
            "nameEnergyErrorReg",
            InputTag::with_instance("eleRegressionEnergy", "eneErrorRegForGsfEle"),
        )
        .with("recHitCollectionEB", InputTag::new("reducedEcalRecHitsEB"))
        .with("recHitCollectionEE", InputTag::new("reducedEcalRecHitsEE"))
        .with("nameNewEnergyReg", "eneRegForGsfEle")
        .with("nameNewEnergyErrorReg", "eneErrorRegForGsfEle")
        .with("outputGsfElectronCollectionLabel", "calibratedGsfElectrons")
        .with("isMC", false)
        .with("inputDataset", "Prompt")
        .with("updateEnergyError", true)
        .with("lumiRatio", 0.0)
        .with("correctionsType", 1)
        .with("combinationType", 1)
        .with("applyCorrections", 1)
        .with("verbose", false)
        .with("synchronization", false)
        .with_untracked("debug", false)
}

/// Message logger service defaults
pub fn message_logger() -> ParameterSet {
    ParameterSet::new().with_untracked("destinations", vec!["cerr".to_string()])
}
