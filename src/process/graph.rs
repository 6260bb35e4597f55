// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 edmflow contributors

//! Data-dependency graph over scheduled modules
//!
//! Edges are induced by input-tag parameters: a module whose configuration
//! references another module's label consumes that module's products. The
//! graph must be acyclic, and consumers must be scheduled after their
//! producers within a path.

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

use crate::errors::EdmflowError;
use crate::process::Process;

/// Dependency graph for a process's modules
pub struct ScheduleGraph {
    graph: DiGraph<(), ()>,
    label_to_index: HashMap<String, NodeIndex>,
    index_to_label: HashMap<NodeIndex, String>,
}

impl ScheduleGraph {
    /// Build the dependency graph from a process descriptor
    ///
    /// Input tags whose label is not a module of this process refer to
    /// upstream data already in the input file and induce no edge.
    pub fn build(process: &Process) -> Result<Self, EdmflowError> {
        let mut graph = DiGraph::new();
        let mut label_to_index = HashMap::new();
        let mut index_to_label = HashMap::new();

        for label in process.modules.keys() {
            let node = graph.add_node(());
            label_to_index.insert(label.clone(), node);
            index_to_label.insert(node, label.clone());
        }

        for (label, module) in &process.modules {
            let consumer = label_to_index[label];

            for tag in module.params.input_tags() {
                if tag.label == *label {
                    continue;
                }
                if let Some(&producer) = label_to_index.get(&tag.label) {
                    if !graph.contains_edge(producer, consumer) {
                        graph.add_edge(producer, consumer, ());
                    }
                }
            }
        }

        let schedule = Self {
            graph,
            label_to_index,
            index_to_label,
        };
        schedule.validate_acyclic()?;

        Ok(schedule)
    }

    /// Validate that the graph is acyclic
    fn validate_acyclic(&self) -> Result<(), EdmflowError> {
        match toposort(&self.graph, None) {
            Ok(_) => Ok(()),
            Err(cycle) => Err(EdmflowError::CircularDependency {
                modules: self.find_cycle_members(cycle.node_id()),
            }),
        }
    }

    /// Find all modules involved in the cycle through `start`
    ///
    /// A node is on that cycle exactly when it is reachable from `start`
    /// and can reach `start` back.
    fn find_cycle_members(&self, start: NodeIndex) -> Vec<String> {
        let mut members: Vec<String> = self
            .graph
            .node_indices()
            .filter(|&node| {
                petgraph::algo::has_path_connecting(&self.graph, start, node, None)
                    && petgraph::algo::has_path_connecting(&self.graph, node, start, None)
            })
            .map(|node| self.index_to_label[&node].clone())
            .collect();
        members.sort();
        members
    }

    /// Module labels in dependency order
    pub fn topological_order(&self) -> Result<Vec<String>, EdmflowError> {
        toposort(&self.graph, None)
            .map(|nodes| {
                nodes
                    .into_iter()
                    .map(|n| self.index_to_label[&n].clone())
                    .collect()
            })
            .map_err(|cycle| EdmflowError::CircularDependency {
                modules: self.find_cycle_members(cycle.node_id()),
            })
    }

    /// Modules whose products the given module consumes
    pub fn producers_for(&self, label: &str) -> Option<Vec<String>> {
        let node = self.label_to_index.get(label)?;
        Some(
            self.graph
                .neighbors_directed(*node, petgraph::Direction::Incoming)
                .map(|n| self.index_to_label[&n].clone())
                .collect(),
        )
    }

    /// Modules that consume the given module's products
    pub fn consumers_of(&self, label: &str) -> Option<Vec<String>> {
        let node = self.label_to_index.get(label)?;
        Some(
            self.graph
                .neighbors_directed(*node, petgraph::Direction::Outgoing)
                .map(|n| self.index_to_label[&n].clone())
                .collect(),
        )
    }

    /// Check whether `consumer` depends (directly or transitively) on `producer`
    pub fn depends_on(&self, consumer: &str, producer: &str) -> bool {
        let Some(consumer_node) = self.label_to_index.get(consumer) else {
            return false;
        };
        let Some(producer_node) = self.label_to_index.get(producer) else {
            return false;
        };

        petgraph::algo::has_path_connecting(&self.graph, *producer_node, *consumer_node, None)
    }

    /// Generate a text rendering of the declared schedule
    pub fn to_text(&self, process: &Process) -> String {
        let mut out = String::new();

        for path in process.paths.iter().chain(process.end_paths.iter()) {
            out.push_str(&format!("{}:\n", path.name));
            for (i, label) in path.modules.iter().enumerate() {
                let plugin = process
                    .get_module(label)
                    .map(|m| m.plugin.as_str())
                    .unwrap_or("?");
                let producers = self.producers_for(label).unwrap_or_default();

                out.push_str(&format!("  {}. {} ({})", i + 1, label, plugin));
                if !producers.is_empty() {
                    out.push_str(&format!(" [consumes: {}]", producers.join(", ")));
                }
                out.push('\n');
            }
        }

        out
    }

    /// Generate a Mermaid diagram of the dependency graph
    pub fn to_mermaid(&self) -> String {
        let mut out = String::from("graph TD\n");

        let mut labels: Vec<&String> = self.label_to_index.keys().collect();
        labels.sort();
        for label in labels {
            out.push_str(&format!("    {}[{}]\n", label, label));
        }

        for edge in self.graph.edge_indices() {
            if let Some((from, to)) = self.graph.edge_endpoints(edge) {
                let from_label = &self.index_to_label[&from];
                let to_label = &self.index_to_label[&to];
                out.push_str(&format!("    {} --> {}\n", from_label, to_label));
            }
        }

        out
    }

    /// Generate a DOT diagram of the dependency graph
    pub fn to_dot(&self) -> String {
        let mut out = String::from("digraph schedule {\n");
        out.push_str("    rankdir=TB;\n");
        out.push_str("    node [shape=box, style=rounded];\n\n");

        for edge in self.graph.edge_indices() {
            if let Some((from, to)) = self.graph.edge_endpoints(edge) {
                let from_label = &self.index_to_label[&from];
                let to_label = &self.index_to_label[&to];
                out.push_str(&format!("    \"{}\" -> \"{}\";\n", from_label, to_label));
            }
        }

        let mut entries: Vec<(&String, &NodeIndex)> = self.label_to_index.iter().collect();
        entries.sort_by_key(|(label, _)| *label);
        for (label, node) in entries {
            if self.graph.neighbors_undirected(*node).count() == 0 {
                out.push_str(&format!("    \"{}\";\n", label));
            }
        }

        out.push_str("}\n");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::InputTag;
    use crate::process::{ModuleConfig, ProcessBuilder, TaskPath};

    fn chained_process() -> Process {
        ProcessBuilder::new("TEST")
            .module("jets", ModuleConfig::new("FastjetJetProducer"))
            .module(
                "regression",
                ModuleConfig::new("RegressionEnergyPatElectronProducer")
                    .with("rhoCollection", InputTag::with_instance("jets", "rho")),
            )
            .module(
                "calibration",
                ModuleConfig::new("CalibratedElectronProducer")
                    .with("nameEnergyReg", InputTag::with_instance("regression", "eneReg")),
            )
            .path(TaskPath::new("p", vec!["jets", "regression", "calibration"]))
            .build()
    }

    #[test]
    fn test_dependency_edges_from_input_tags() {
        let process = chained_process();
        let graph = ScheduleGraph::build(&process).unwrap();

        assert!(graph.depends_on("regression", "jets"));
        assert!(graph.depends_on("calibration", "regression"));
        assert!(graph.depends_on("calibration", "jets")); // transitive
        assert!(!graph.depends_on("jets", "calibration"));
    }

    #[test]
    fn test_topological_order() {
        let process = chained_process();
        let graph = ScheduleGraph::build(&process).unwrap();

        let order = graph.topological_order().unwrap();
        assert_eq!(order, vec!["jets", "regression", "calibration"]);
    }

    #[test]
    fn test_cycle_detection() {
        let process = ProcessBuilder::new("TEST")
            .module(
                "a",
                ModuleConfig::new("PluginA").with("input", InputTag::new("b")),
            )
            .module(
                "b",
                ModuleConfig::new("PluginB").with("input", InputTag::new("a")),
            )
            .build();

        let result = ScheduleGraph::build(&process);
        assert!(matches!(
            result,
            Err(EdmflowError::CircularDependency { .. })
        ));
    }

    #[test]
    fn test_cycle_members_list_only_the_cycle() {
        // c consumes b but is not part of the a <-> b cycle
        let process = ProcessBuilder::new("TEST")
            .module(
                "a",
                ModuleConfig::new("PluginA").with("input", InputTag::new("b")),
            )
            .module(
                "b",
                ModuleConfig::new("PluginB").with("input", InputTag::new("a")),
            )
            .module(
                "c",
                ModuleConfig::new("PluginC").with("input", InputTag::new("b")),
            )
            .build();

        match ScheduleGraph::build(&process) {
            Err(EdmflowError::CircularDependency { modules }) => {
                assert_eq!(modules, vec!["a", "b"]);
            }
            other => panic!("expected circular dependency, got {:?}", other.is_ok()),
        }
    }

    #[test]
    fn test_external_tags_induce_no_edge() {
        let process = ProcessBuilder::new("TEST")
            .module(
                "regression",
                ModuleConfig::new("RegressionEnergyPatElectronProducer")
                    .with("inputElectronsTag", InputTag::new("gsfElectrons")),
            )
            .build();

        let graph = ScheduleGraph::build(&process).unwrap();
        assert_eq!(graph.producers_for("regression"), Some(vec![]));
    }

    #[test]
    fn test_mermaid_output() {
        let process = chained_process();
        let graph = ScheduleGraph::build(&process).unwrap();
        let mermaid = graph.to_mermaid();

        assert!(mermaid.contains("graph TD"));
        assert!(mermaid.contains("jets --> regression"));
    }

    #[test]
    fn test_renderings_are_deterministic() {
        let process = chained_process();
        let first = ScheduleGraph::build(&process).unwrap();
        let second = ScheduleGraph::build(&process).unwrap();

        assert_eq!(first.to_mermaid(), second.to_mermaid());
        assert_eq!(first.to_dot(), second.to_dot());

        // node declarations come out in label order
        let mermaid = first.to_mermaid();
        let calibration = mermaid.find("calibration[").unwrap();
        let jets = mermaid.find("jets[").unwrap();
        let regression = mermaid.find("regression[").unwrap();
        assert!(calibration < jets && jets < regression);
    }

    #[test]
    fn test_dot_lists_isolated_nodes() {
        let process = ProcessBuilder::new("TEST")
            .module("alone", ModuleConfig::new("PluginA"))
            .module("also", ModuleConfig::new("PluginB"))
            .build();

        let dot = ScheduleGraph::build(&process).unwrap().to_dot();
        let alone = dot.find("\"alone\";").unwrap();
        let also = dot.find("\"also\";").unwrap();
        assert!(alone < also);
    }

    #[test]
    fn test_text_output_lists_schedule() {
        let process = chained_process();
        let graph = ScheduleGraph::build(&process).unwrap();
        let text = graph.to_text(&process);

        assert!(text.contains("p:"));
        assert!(text.contains("1. jets (FastjetJetProducer)"));
        assert!(text.contains("[consumes: jets]"));
    }
}
