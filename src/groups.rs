use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
}

impl Group {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum GroupError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("group at position {0} has an empty id")]
    EmptyId(usize),

    #[error("duplicate group id: {0}")]
    DuplicateId(String),
}

/// Group files are either a bare list or a mapping with a `groups` key.
#[derive(Deserialize)]
#[serde(untagged)]
enum GroupFile {
    List(Vec<Group>),
    Wrapped { groups: Vec<Group> },
}

impl GroupFile {
    fn into_groups(self) -> Vec<Group> {
        match self {
            GroupFile::List(groups) | GroupFile::Wrapped { groups } => groups,
        }
    }
}

/// Ordered set of groups a command can address. Order is significant: it
/// breaks ties between group names of equal length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupDirectory {
    groups: Vec<Group>,
}

impl GroupDirectory {
    pub fn new(groups: Vec<Group>) -> Self {
        Self { groups }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, GroupError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let file: GroupFile = if is_json {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };
        Ok(Self::new(file.into_groups()))
    }

    pub fn validate(&self) -> Result<(), GroupError> {
        let mut seen = HashSet::new();
        for (position, group) in self.groups.iter().enumerate() {
            if group.id.trim().is_empty() {
                return Err(GroupError::EmptyId(position));
            }
            if !seen.insert(group.id.as_str()) {
                return Err(GroupError::DuplicateId(group.id.clone()));
            }
        }
        Ok(())
    }

    pub fn extend(&mut self, groups: impl IntoIterator<Item = Group>) {
        self.groups.extend(groups);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Group> {
        self.groups.iter()
    }

    pub fn as_slice(&self) -> &[Group] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::{Group, GroupDirectory, GroupError};

    fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_bare_yaml_list_in_order() {
        let file = write_temp(
            ".yaml",
            "- id: \"1\"\n  name: hotline\n- id: \"2\"\n  name: A very long Name\n",
        );
        let directory = GroupDirectory::load_from_file(file.path()).unwrap();
        assert_eq!(
            directory.as_slice(),
            &[Group::new("1", "hotline"), Group::new("2", "A very long Name")]
        );
    }

    #[test]
    fn loads_wrapped_json_file() {
        let file = write_temp(
            ".json",
            r#"{"groups": [{"id": "7", "name": "test copy"}]}"#,
        );
        let directory = GroupDirectory::load_from_file(file.path()).unwrap();
        assert_eq!(directory.as_slice(), &[Group::new("7", "test copy")]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = GroupDirectory::load_from_file("/nonexistent/groups.yaml");
        assert!(matches!(result, Err(GroupError::Io(_))));
    }

    #[test]
    fn validate_rejects_duplicate_ids() {
        let directory =
            GroupDirectory::new(vec![Group::new("1", "hotline"), Group::new("1", "other")]);
        assert!(matches!(
            directory.validate(),
            Err(GroupError::DuplicateId(id)) if id == "1"
        ));
    }

    #[test]
    fn validate_rejects_empty_ids_but_not_empty_names() {
        let directory = GroupDirectory::new(vec![Group::new("1", ""), Group::new(" ", "x")]);
        assert!(matches!(directory.validate(), Err(GroupError::EmptyId(1))));

        let names_only = GroupDirectory::new(vec![Group::new("1", "")]);
        assert!(names_only.validate().is_ok());
    }
}
