use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A named collection of credential entries consumed when running a bundle.
///
/// Field order here is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialSet {
    pub name: String,
    pub created: DateTime<FixedOffset>,
    pub modified: DateTime<FixedOffset>,
    #[serde(default)]
    pub credentials: Vec<CredentialEntry>,
}

/// One named slot in a credential set, bound to where its value comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialEntry {
    pub name: String,
    #[serde(with = "serde_yaml::with::singleton_map")]
    pub source: Source,
}

/// Where a credential value is obtained at bundle run time.
///
/// Serialized as a single-key map, e.g. `{"env": "KUBECONFIG"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Path(String),
    #[serde(rename = "env")]
    EnvVar(String),
    Command(String),
    Value(String),
}

impl CredentialSet {
    /// A freshly created set: `created` and `modified` are both `now`.
    pub fn new(
        name: impl Into<String>,
        credentials: Vec<CredentialEntry>,
        now: DateTime<FixedOffset>,
    ) -> Self {
        Self {
            name: name.into(),
            created: now,
            modified: now,
            credentials,
        }
    }

    /// Replace the entries of an existing set, keeping its creation time.
    pub fn regenerate(&mut self, credentials: Vec<CredentialEntry>, now: DateTime<FixedOffset>) {
        self.credentials = credentials;
        self.modified = now.max(self.created);
    }
}

impl CredentialEntry {
    pub fn new(name: impl Into<String>, source: Source) -> Self {
        Self {
            name: name.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(raw: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(raw).unwrap()
    }

    #[test]
    fn new_set_has_equal_timestamps() {
        let now = ts("2019-06-24T16:07:57.415378-05:00");
        let set = CredentialSet::new("kool-kreds", Vec::new(), now);
        assert_eq!(set.created, set.modified);
        assert!(set.credentials.is_empty());
    }

    #[test]
    fn regenerate_keeps_created() {
        let created = ts("2019-06-24T16:07:57-05:00");
        let later = ts("2019-07-01T09:00:00-05:00");
        let mut set = CredentialSet::new("kool-kreds", Vec::new(), created);

        set.regenerate(
            vec![CredentialEntry::new("token", Source::Value("abc".into()))],
            later,
        );

        assert_eq!(set.created, created);
        assert_eq!(set.modified, later);
        assert_eq!(set.credentials.len(), 1);
    }

    #[test]
    fn regenerate_never_moves_modified_before_created() {
        let created = ts("2019-07-01T09:00:00Z");
        let earlier = ts("2019-06-01T09:00:00Z");
        let mut set = CredentialSet::new("skewed", Vec::new(), created);

        set.regenerate(Vec::new(), earlier);
        assert!(set.created <= set.modified);
    }

    #[test]
    fn json_shape_uses_single_source_key() {
        let set = CredentialSet::new(
            "kool-kreds",
            vec![
                CredentialEntry::new("kool-envvar", Source::EnvVar("KOOL_ENV_VAR".into())),
                CredentialEntry::new("kool-cmd", Source::Command("echo 'kool'".into())),
            ],
            ts("2019-06-24T16:07:57.415378-05:00"),
        );

        let value = serde_json::to_value(&set).unwrap();
        assert_eq!(value["created"], "2019-06-24T16:07:57.415378-05:00");
        assert_eq!(value["credentials"][0]["source"]["env"], "KOOL_ENV_VAR");
        assert_eq!(value["credentials"][1]["source"]["command"], "echo 'kool'");
    }

    #[test]
    fn yaml_uses_plain_maps_not_tags() {
        let set = CredentialSet::new(
            "kool-kreds",
            vec![CredentialEntry::new(
                "kool-config",
                Source::Path("/path/to/kool-config".into()),
            )],
            ts("2019-06-24T16:07:57-05:00"),
        );

        let yaml = serde_yaml::to_string(&set).unwrap();
        assert!(yaml.contains("path: /path/to/kool-config"), "{yaml}");
        assert!(!yaml.contains('!'), "{yaml}");

        let parsed: CredentialSet = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, set);
    }

    #[test]
    fn json_parses_stored_record() {
        let raw = r#"{
          "name": "kool-kreds",
          "created": "2019-06-24T16:07:57.415378-05:00",
          "modified": "2019-06-24T16:07:57.415378-05:00",
          "credentials": [
            { "name": "kool-val", "source": { "value": "kool" } }
          ]
        }"#;

        let set: CredentialSet = serde_json::from_str(raw).unwrap();
        assert_eq!(set.credentials[0].source, Source::Value("kool".into()));
        assert_eq!(set.created.offset().local_minus_utc(), -5 * 3600);
    }

    #[test]
    fn unknown_source_kind_is_rejected() {
        let raw = r#"{ "name": "x", "source": { "vault": "secret/x" } }"#;
        assert!(serde_json::from_str::<CredentialEntry>(raw).is_err());
    }
}
