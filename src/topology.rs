/*!
 * Topology files
 *
 * A topology file lists the nodes, links and hooks handed to the
 * orchestrator. Files ending in `.json` are read as JSON, everything else
 * as TOML:
 *
 * ```toml
 * [[nodes]]
 * id = 1
 * type = "default"
 * model = "PC"
 * position = { x = 100.0, y = 100.0 }
 *
 * [[nodes]]
 * id = 2
 * type = "wireless_lan"
 *
 * [[links]]
 * node_one = 1
 * node_two = 2
 *
 * [[hooks]]
 * state = "RUNTIME"
 * file = "ready.sh"
 * data = "echo ready"
 * ```
 */

use crate::error::{NetemuError, Result};
use netemu_connect::model::{Hook, Link, Node};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Topology {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub hooks: Vec<Hook>,
}

/// On-disk encoding, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopologyFormat {
    Toml,
    Json,
}

impl TopologyFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => TopologyFormat::Json,
            _ => TopologyFormat::Toml,
        }
    }
}

impl Topology {
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let invalid = |reason: String| NetemuError::InvalidFile {
            path: path.to_path_buf(),
            reason,
        };

        let topology: Topology = match TopologyFormat::from_path(path) {
            TopologyFormat::Json => {
                serde_json::from_str(&contents).map_err(|e| invalid(e.to_string()))?
            }
            TopologyFormat::Toml => toml::from_str(&contents).map_err(|e| invalid(e.to_string()))?,
        };

        topology.validate().map_err(invalid)?;
        Ok(topology)
    }

    pub fn to_file(&self, path: &Path) -> Result<()> {
        let contents = match TopologyFormat::from_path(path) {
            TopologyFormat::Json => serde_json::to_string_pretty(self)
                .map_err(|e| NetemuError::Config(format!("Failed to encode topology: {}", e)))?,
            TopologyFormat::Toml => toml::to_string_pretty(self)
                .map_err(|e| NetemuError::Config(format!("Failed to encode topology: {}", e)))?,
        };
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Reject files the daemon would only fail on halfway through a start
    ///
    /// Node ids must be unique, WLAN nodes need an id for their configuration
    /// calls, and every link joins two different nodes. Link endpoints may
    /// name nodes outside the file that already live in the session.
    pub fn validate(&self) -> std::result::Result<(), String> {
        let mut ids = BTreeSet::new();
        for (index, node) in self.nodes.iter().enumerate() {
            match node.id {
                Some(id) if !ids.insert(id) => {
                    return Err(format!("duplicate node id {}", id));
                }
                None if node.is_wlan() => {
                    return Err(format!("WLAN node #{} has no id", index + 1));
                }
                _ => {}
            }
        }

        for (index, link) in self.links.iter().enumerate() {
            let (Some(one), Some(two)) = (link.node_one, link.node_two) else {
                return Err(format!("link #{} must name both nodes", index + 1));
            };
            if one == two {
                return Err(format!("link #{} connects node {} to itself", index + 1, one));
            }
        }

        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.links.is_empty() && self.hooks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netemu_connect::model::{NodeType, Position, SessionState};
    use std::io::Write;
    use tempfile::Builder;

    const TOML_TOPOLOGY: &str = r#"
[[nodes]]
id = 1
type = "default"
model = "PC"
position = { x = 100.0, y = 150.0 }

[[nodes]]
id = 2
type = "wireless_lan"

[[links]]
node_one = 1
node_two = 2

[[hooks]]
state = "RUNTIME"
file = "ready.sh"
data = "echo ready"
"#;

    fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(TopologyFormat::from_path(Path::new("a.json")), TopologyFormat::Json);
        assert_eq!(TopologyFormat::from_path(Path::new("a.JSON")), TopologyFormat::Json);
        assert_eq!(TopologyFormat::from_path(Path::new("a.toml")), TopologyFormat::Toml);
        assert_eq!(TopologyFormat::from_path(Path::new("topology")), TopologyFormat::Toml);
    }

    #[test]
    fn test_load_toml() {
        let file = write_temp(".toml", TOML_TOPOLOGY);
        let topology = Topology::from_file(file.path()).unwrap();

        assert_eq!(topology.nodes.len(), 2);
        assert_eq!(topology.nodes[0].model.as_deref(), Some("PC"));
        assert_eq!(topology.nodes[0].position, Some(Position::new(100.0, 150.0)));
        assert!(topology.nodes[1].is_wlan());
        assert_eq!(topology.links[0].node_two, Some(2));
        assert_eq!(topology.hooks[0].state, SessionState::Runtime);
    }

    #[test]
    fn test_load_json() {
        let file = write_temp(
            ".json",
            r#"{
                "nodes": [{"id": 1, "type": "switch"}, {"id": 2}],
                "links": [{"node_one": 1, "node_two": 2, "options": {"delay": 20.0}}]
            }"#,
        );
        let topology = Topology::from_file(file.path()).unwrap();

        assert_eq!(topology.nodes[0].node_type, NodeType::Switch);
        assert_eq!(topology.nodes[1].node_type, NodeType::Default);
        let options = topology.links[0].options.as_ref().unwrap();
        assert_eq!(options.delay, Some(20.0));
        assert_eq!(options.bandwidth, None);
        assert!(topology.hooks.is_empty());
    }

    #[test]
    fn test_file_round_trip() {
        let file = write_temp(".toml", TOML_TOPOLOGY);
        let topology = Topology::from_file(file.path()).unwrap();

        let out = Builder::new().suffix(".json").tempfile().unwrap();
        topology.to_file(out.path()).unwrap();
        assert_eq!(Topology::from_file(out.path()).unwrap(), topology);
    }

    #[test]
    fn test_parse_error_names_file() {
        let file = write_temp(".json", "{ not json");
        let err = Topology::from_file(file.path()).unwrap_err();
        assert!(matches!(err, NetemuError::InvalidFile { .. }));
    }

    #[test]
    fn test_duplicate_node_ids_rejected() {
        let topology = Topology {
            nodes: vec![
                Node::new(NodeType::Default).with_id(1),
                Node::new(NodeType::Default).with_id(1),
            ],
            ..Default::default()
        };
        assert_eq!(topology.validate().unwrap_err(), "duplicate node id 1");
    }

    #[test]
    fn test_wlan_without_id_rejected() {
        let topology = Topology {
            nodes: vec![Node::new(NodeType::WirelessLan)],
            ..Default::default()
        };
        assert!(topology.validate().is_err());

        let topology = Topology {
            nodes: vec![Node::new(NodeType::Default)],
            ..Default::default()
        };
        assert!(topology.validate().is_ok());
    }

    #[test]
    fn test_link_endpoints_checked() {
        let half = Topology {
            links: vec![Link {
                node_one: Some(1),
                ..Default::default()
            }],
            ..Default::default()
        };
        assert!(half.validate().is_err());

        let looped = Topology {
            links: vec![Link::between(3, 3)],
            ..Default::default()
        };
        assert!(looped.validate().is_err());

        let external = Topology {
            links: vec![Link::between(7, 8)],
            ..Default::default()
        };
        assert!(external.validate().is_ok());
    }
}
