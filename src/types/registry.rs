use crate::error::BumpError;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// The fields of a registry entry this tool reads. Everything else in the
/// entry stays in the underlying JSON value untouched.
///
/// Reading never fails: a `name` or `version` that is missing or not a
/// string becomes `None`, and `source` is kept as raw JSON since only the
/// record being bumped needs it to be a path.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct PackageRecord {
    #[serde(default, deserialize_with = "string_or_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub version: Option<String>,
    #[serde(default)]
    pub source: Option<Value>,
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

impl PackageRecord {
    /// Entries that are not even objects read as an empty record.
    pub fn from_value(value: &Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }

    /// The `source` as a path, `Ok(None)` when absent.
    pub fn source_path(&self) -> Result<Option<&str>, String> {
        match &self.source {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(format!("\"source\" is not a path: {}", other)),
        }
    }
}

/// The marketplace registry, kept as raw JSON so that key order and unknown
/// fields survive a rewrite.
#[derive(Debug, Clone)]
pub struct Registry {
    path: PathBuf,
    doc: Value,
}

impl Registry {
    pub fn new(path: impl Into<PathBuf>, doc: Value) -> Self {
        Registry {
            path: path.into(),
            doc,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn document(&self) -> &Value {
        &self.doc
    }

    fn plugins(&self) -> Result<&Vec<Value>, BumpError> {
        self.doc
            .get("plugins")
            .and_then(Value::as_array)
            .ok_or_else(|| self.invalid("missing \"plugins\" array"))
    }

    /// All records in list order, one per entry.
    pub fn records(&self) -> Result<Vec<PackageRecord>, BumpError> {
        Ok(self.plugins()?.iter().map(PackageRecord::from_value).collect())
    }

    /// Index of the first record whose `name` is exactly `name`.
    pub fn position(&self, name: &str) -> Result<Option<usize>, BumpError> {
        Ok(self
            .plugins()?
            .iter()
            .position(|v| v.get("name").and_then(Value::as_str) == Some(name)))
    }

    pub fn record(&self, index: usize) -> Result<PackageRecord, BumpError> {
        self.plugins()?
            .get(index)
            .map(PackageRecord::from_value)
            .ok_or_else(|| self.invalid(format!("no plugin at index {index}")))
    }

    /// Replaces the `version` of the record at `index`, leaving its other fields as they are.
    pub fn set_version(&mut self, index: usize, version: &str) -> Result<(), BumpError> {
        let invalid = self.invalid(format!("plugin at index {index} is not an object"));
        let record = self
            .doc
            .get_mut("plugins")
            .and_then(Value::as_array_mut)
            .and_then(|plugins| plugins.get_mut(index))
            .and_then(Value::as_object_mut)
            .ok_or(invalid)?;
        record.insert("version".to_string(), Value::String(version.to_string()));
        Ok(())
    }

    pub fn invalid(&self, reason: impl Into<String>) -> BumpError {
        BumpError::InvalidDocument {
            path: self.path.clone(),
            reason: reason.into(),
        }
    }
}

/// Sets `version` on a plugin manifest.
pub fn set_manifest_version(path: &Path, doc: &mut Value, version: &str) -> Result<(), BumpError> {
    let obj = doc
        .as_object_mut()
        .ok_or_else(|| BumpError::InvalidDocument {
            path: path.to_path_buf(),
            reason: "manifest is not a JSON object".to_string(),
        })?;
    obj.insert("version".to_string(), Value::String(version.to_string()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample() -> Registry {
        Registry::new(
            "marketplace.json",
            json!({
                "$schema": "https://example.com/marketplace.schema.json",
                "name": "market",
                "plugins": [
                    { "name": "alpha", "version": "1.0.0", "source": "./plugins/alpha", "category": "x" },
                    { "name": "beta", "version": "0.3.1", "source": "./plugins/beta" },
                    { "name": "alpha", "version": "9.9.9" }
                ]
            }),
        )
    }

    #[test]
    fn finds_first_exact_match() {
        let reg = sample();
        assert_eq!(reg.position("alpha").unwrap(), Some(0));
        assert_eq!(reg.position("beta").unwrap(), Some(1));
        assert_eq!(reg.position("Alpha").unwrap(), None);
        assert_eq!(reg.position("alp").unwrap(), None);
    }

    #[test]
    fn lists_records_in_order() {
        let names: Vec<Option<String>> =
            sample().records().unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![Some("alpha".into()), Some("beta".into()), Some("alpha".into())]
        );
    }

    #[test]
    fn odd_entries_still_list() {
        let reg = Registry::new(
            "marketplace.json",
            json!({
                "plugins": [
                    { "name": "local", "version": "1.0.0", "source": "./plugins/local" },
                    { "name": "remote", "version": "2.0.0", "source": { "source": "github", "repo": "o/r" } },
                    { "name": "numeric", "version": 3 },
                    { "version": "0.1.0" },
                    "not-an-object"
                ]
            }),
        );
        let records = reg.records().unwrap();
        assert_eq!(records.len(), 5);
        assert_eq!(records[1].name.as_deref(), Some("remote"));
        assert_eq!(records[1].version.as_deref(), Some("2.0.0"));
        assert!(records[1].source_path().is_err());
        assert_eq!(records[0].source_path(), Ok(Some("./plugins/local")));
        assert_eq!(records[2].version, None);
        assert_eq!(records[3].name, None);
        assert_eq!(records[4], PackageRecord::default());
        assert_eq!(records[4].source_path(), Ok(None));
    }

    #[test]
    fn set_version_touches_only_that_field() {
        let mut reg = sample();
        reg.set_version(0, "1.0.1").unwrap();
        assert_eq!(
            reg.document()["plugins"][0],
            json!({ "name": "alpha", "version": "1.0.1", "source": "./plugins/alpha", "category": "x" })
        );
        assert_eq!(reg.document()["plugins"][1], sample().document()["plugins"][1]);
        assert_eq!(reg.document()["plugins"][2], sample().document()["plugins"][2]);
    }

    #[test]
    fn set_version_keeps_key_order() {
        let mut reg = sample();
        reg.set_version(0, "2.0.0").unwrap();
        let keys: Vec<&String> = reg.document()["plugins"][0]
            .as_object()
            .unwrap()
            .keys()
            .collect();
        assert_eq!(keys, vec!["name", "version", "source", "category"]);
    }

    #[test]
    fn missing_plugins_array_is_invalid() {
        let reg = Registry::new("m.json", json!({ "name": "market" }));
        assert!(matches!(
            reg.position("alpha"),
            Err(BumpError::InvalidDocument { .. })
        ));
    }

    #[test]
    fn manifest_must_be_an_object() {
        let mut doc = json!(["not", "an", "object"]);
        assert!(set_manifest_version(Path::new("plugin.json"), &mut doc, "1.0.0").is_err());

        let mut doc = json!({ "name": "alpha", "version": "1.0.0", "keywords": ["a"] });
        set_manifest_version(Path::new("plugin.json"), &mut doc, "1.1.0").unwrap();
        assert_eq!(doc, json!({ "name": "alpha", "version": "1.1.0", "keywords": ["a"] }));
    }
}
