// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 edmflow contributors

//! Named module templates
//!
//! A template is a module configuration carrying the plugin name and its
//! default parameter record. Instantiating one yields a fresh clone whose
//! fields can then be overridden, which is how processes are assembled:
//! obtain the defaults by name, override what differs.

mod builtin;

use std::collections::BTreeMap;

use crate::errors::{EdmflowError, EdmflowResult};
use crate::params::ParameterSet;
use crate::process::ModuleConfig;

/// Registry of built-in module and service templates
pub struct TemplateLibrary {
    modules: BTreeMap<String, ModuleConfig>,
    services: BTreeMap<String, ParameterSet>,
}

impl TemplateLibrary {
    /// The built-in library
    pub fn builtin() -> Self {
        let mut modules = BTreeMap::new();
        modules.insert("kt6PFJets".to_string(), builtin::kt6_pf_jets());
        modules.insert(
            "eleRegressionEnergy".to_string(),
            builtin::ele_regression_energy(),
        );
        modules.insert(
            "calibratedElectrons".to_string(),
            builtin::calibrated_electrons(),
        );

        let mut services = BTreeMap::new();
        services.insert(
            "RandomNumberGeneratorService".to_string(),
            ParameterSet::new(),
        );
        services.insert("MessageLogger".to_string(), builtin::message_logger());

        Self { modules, services }
    }

    /// Instantiate a module template by name
    pub fn instantiate(&self, name: &str) -> EdmflowResult<ModuleConfig> {
        self.modules.get(name).cloned().ok_or_else(|| {
            EdmflowError::unknown_template(name, &self.module_names())
        })
    }

    /// Default parameters for a service template by name
    pub fn service(&self, name: &str) -> EdmflowResult<ParameterSet> {
        self.services.get(name).cloned().ok_or_else(|| {
            EdmflowError::unknown_template(name, &self.service_names())
        })
    }

    /// Names of the available module templates
    pub fn module_names(&self) -> Vec<&str> {
        self.modules.keys().map(|k| k.as_str()).collect()
    }

    /// Names of the available service templates
    pub fn service_names(&self) -> Vec<&str> {
        self.services.keys().map(|k| k.as_str()).collect()
    }
}

impl Default for TemplateLibrary {
    fn default() -> Self {
        Self::builtin()
    }
}
