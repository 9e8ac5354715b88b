//! Ordered class names aligned with the classifier's output positions.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::path::Path;

use crate::error::{NimbusError, Result};

const ARTIFACT: &str = "labels";

/// On-disk form of the label map.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LabelMapFile {
    classes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    class_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fingerprint: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LabelMapFile", into = "LabelMapFile")]
pub struct LabelMap {
    classes: Vec<String>,
}

impl LabelMap {
    pub fn new<I, S>(classes: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let classes: Vec<String> = classes.into_iter().map(Into::into).collect();
        validate_classes(&classes).map_err(|reason| NimbusError::artifact_load(ARTIFACT, reason))?;
        Ok(Self { classes })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            NimbusError::artifact_load(ARTIFACT, format!("{}: {e}", path.display()))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            NimbusError::artifact_load(ARTIFACT, format!("{}: {e}", path.display()))
        })
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.classes.get(index).map(String::as_str)
    }

    pub fn index_of(&self, class: &str) -> Option<usize> {
        self.classes.iter().position(|c| c == class)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// SHA-256 over the ordered class names, newline-joined, as lowercase hex.
    pub fn fingerprint(&self) -> String {
        fingerprint_classes(&self.classes)
    }
}

pub fn fingerprint_classes(classes: &[String]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(classes.join("\n").as_bytes());
    hex::encode(hasher.finalize())
}

fn validate_classes(classes: &[String]) -> std::result::Result<(), String> {
    if classes.is_empty() {
        return Err("classes must not be empty".to_string());
    }
    let mut seen = HashSet::new();
    for (idx, class) in classes.iter().enumerate() {
        if class.trim().is_empty() {
            return Err(format!("class[{idx}] is blank"));
        }
        if !seen.insert(class.as_str()) {
            return Err(format!("duplicate class {class:?}"));
        }
    }
    Ok(())
}

impl TryFrom<LabelMapFile> for LabelMap {
    type Error = String;

    fn try_from(file: LabelMapFile) -> std::result::Result<Self, Self::Error> {
        validate_classes(&file.classes)?;
        if let Some(count) = file.class_count {
            if count != file.classes.len() {
                return Err(format!(
                    "class_count {count} != number of classes {}",
                    file.classes.len()
                ));
            }
        }
        if let Some(expected) = &file.fingerprint {
            let actual = fingerprint_classes(&file.classes);
            if !expected.eq_ignore_ascii_case(&actual) {
                return Err(format!(
                    "fingerprint {expected} does not match class list ({actual})"
                ));
            }
        }
        Ok(Self {
            classes: file.classes,
        })
    }
}

impl From<LabelMap> for LabelMapFile {
    fn from(map: LabelMap) -> Self {
        let fingerprint = map.fingerprint();
        Self {
            class_count: Some(map.classes.len()),
            fingerprint: Some(fingerprint),
            classes: map.classes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_encoder_order() {
        let labels = LabelMap::new(["drizzle", "fog", "rain", "snow", "sun"]).unwrap();
        assert_eq!(labels.len(), 5);
        assert_eq!(labels.get(2), Some("rain"));
        assert_eq!(labels.index_of("sun"), Some(4));
        assert_eq!(labels.get(5), None);
    }

    #[test]
    fn rejects_duplicates_and_blanks() {
        assert!(LabelMap::new(["rain", "sun", "rain"]).is_err());
        assert!(LabelMap::new(["rain", " "]).is_err());
        assert!(LabelMap::new(Vec::<String>::new()).is_err());
    }

    #[test]
    fn fingerprint_depends_on_order() {
        let a = LabelMap::new(["rain", "sun"]).unwrap();
        let b = LabelMap::new(["sun", "rain"]).unwrap();
        assert_ne!(a.fingerprint(), b.fingerprint());
        assert_eq!(a.fingerprint().len(), 64);
    }

    #[test]
    fn serialized_form_embeds_count_and_fingerprint() {
        let labels = LabelMap::new(["fog", "rain"]).unwrap();
        let value = serde_json::to_value(&labels).unwrap();
        assert_eq!(value["class_count"], 2);
        assert_eq!(value["fingerprint"], labels.fingerprint());

        let back: LabelMap = serde_json::from_value(value).unwrap();
        assert_eq!(back, labels);
    }

    #[test]
    fn bare_class_list_is_accepted() {
        let labels: LabelMap = serde_json::from_str(r#"{"classes": ["fog", "rain"]}"#).unwrap();
        assert_eq!(labels.classes(), ["fog".to_string(), "rain".to_string()]);
    }

    #[test]
    fn count_mismatch_is_rejected() {
        let res: std::result::Result<LabelMap, _> =
            serde_json::from_str(r#"{"classes": ["fog", "rain"], "class_count": 3}"#);
        assert!(res.unwrap_err().to_string().contains("class_count"));
    }

    #[test]
    fn reordered_classes_fail_fingerprint() {
        let fp = LabelMap::new(["fog", "rain"]).unwrap().fingerprint();
        let json = format!(r#"{{"classes": ["rain", "fog"], "fingerprint": "{fp}"}}"#);
        let res: std::result::Result<LabelMap, _> = serde_json::from_str(&json);
        assert!(res.unwrap_err().to_string().contains("fingerprint"));
    }
}
