use credset_common::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// What a bundle needs from a credential set.
pub trait BundleRequirements {
    /// Bundle name, used as the default credential set name.
    fn name(&self) -> &str;

    /// Names of the credentials the bundle declares, in a stable order.
    fn credential_names(&self) -> Vec<String>;
}

/// Bundle description file (`bundle.json` or YAML equivalent).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BundleManifest {
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub credentials: BTreeMap<String, CredentialRequirement>,
}

/// A single declared credential. Every declared credential is generated;
/// the description is carried for people editing the bundle.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CredentialRequirement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl BundleManifest {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Bundle(format!("failed to read bundle {}: {e}", path.display()))
        })?;
        Self::parse(&content)
            .map_err(|e| Error::Bundle(format!("invalid bundle {}: {e}", path.display())))
    }

    /// Parse JSON, falling back to YAML.
    pub fn parse(content: &str) -> std::result::Result<Self, String> {
        match serde_json::from_str(content) {
            Ok(manifest) => Ok(manifest),
            Err(json_err) => serde_yaml::from_str(content)
                .map_err(|yaml_err| format!("not JSON ({json_err}) or YAML ({yaml_err})")),
        }
    }
}

impl BundleRequirements for BundleManifest {
    fn name(&self) -> &str {
        &self.name
    }

    fn credential_names(&self) -> Vec<String> {
        self.credentials.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_json_bundle() {
        let json = r#"{
            "name": "testbundle",
            "version": "0.1.0",
            "credentials": {
                "username": { "description": "login" },
                "kubeconfig": {}
            }
        }"#;

        let manifest = BundleManifest::parse(json).unwrap();
        assert_eq!(manifest.name(), "testbundle");
        assert_eq!(manifest.credential_names(), vec!["kubeconfig", "username"]);
        assert_eq!(manifest.credentials["username"].description.as_deref(), Some("login"));
        assert_eq!(manifest.credentials["kubeconfig"].description, None);
    }

    #[test]
    fn every_declared_credential_is_generated() {
        let json = r#"{
            "name": "optional",
            "credentials": {
                "token": { "required": false },
                "password": { "required": true }
            }
        }"#;

        let manifest = BundleManifest::parse(json).unwrap();
        assert_eq!(manifest.credential_names(), vec!["password", "token"]);
    }

    #[test]
    fn parses_yaml_bundle() {
        let yaml = "name: mysql\ncredentials:\n  password: {}\n";
        let manifest = BundleManifest::parse(yaml).unwrap();
        assert_eq!(manifest.name(), "mysql");
        assert_eq!(manifest.credential_names(), vec!["password"]);
    }

    #[test]
    fn bundle_without_credentials_is_allowed() {
        let manifest = BundleManifest::parse(r#"{"name": "bare"}"#).unwrap();
        assert!(manifest.credential_names().is_empty());
    }

    #[test]
    fn missing_file_is_a_bundle_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = BundleManifest::from_file(&dir.path().join("bundle.json")).unwrap_err();
        assert!(matches!(err, Error::Bundle(_)), "{err}");
    }

    #[test]
    fn garbage_is_a_bundle_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bundle.json");
        std::fs::write(&path, "- just\n- a list\n").unwrap();

        let err = BundleManifest::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("invalid bundle"), "{err}");
    }
}
