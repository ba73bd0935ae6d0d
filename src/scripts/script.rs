use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Problems with user-entered script fields, reported before a definition is stored
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScriptInputError {
    #[error("Name cannot be empty")]
    EmptyName,
    #[error("Command cannot be empty")]
    EmptyCommand,
}

fn default_enabled() -> bool {
    true
}

/// A stored, named command configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptDefinition {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub command: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub working_directory: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default = "default_enabled")]
    pub is_enabled: bool,
    #[serde(default)]
    pub is_startup_script: bool,
    #[serde(default)]
    pub ignore_errors: bool,
}

impl Default for ScriptDefinition {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            command: String::new(),
            working_directory: String::new(),
            description: String::new(),
            is_enabled: true,
            is_startup_script: false,
            ignore_errors: false,
        }
    }
}

impl ScriptDefinition {
    /// A blank definition with a freshly generated id
    #[must_use]
    pub fn create_empty() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            ..Default::default()
        }
    }

    /// Whether the definition can be executed at all: both name and command must be non-blank.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && !self.command.trim().is_empty()
    }

    /// Check user input before it is stored.
    ///
    /// # Errors
    ///
    /// Returns `ScriptInputError::EmptyName` or `ScriptInputError::EmptyCommand` for the first
    /// blank required field.
    pub fn validate_input(&self) -> Result<(), ScriptInputError> {
        if self.name.trim().is_empty() {
            return Err(ScriptInputError::EmptyName);
        }
        if self.command.trim().is_empty() {
            return Err(ScriptInputError::EmptyCommand);
        }
        Ok(())
    }

    /// Display markers for listings, in a stable order
    #[must_use]
    pub fn tags(&self) -> Vec<&'static str> {
        let mut tags = Vec::new();
        if self.is_startup_script {
            tags.push("STARTUP");
        }
        if self.ignore_errors {
            tags.push("IGNORE ERRORS");
        }
        if !self.is_enabled {
            tags.push("DISABLED");
        }
        tags
    }

    /// Member of the startup batch: flagged for startup and enabled
    #[must_use]
    pub fn runs_at_startup(&self) -> bool {
        self.is_startup_script && self.is_enabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(name: &str, command: &str) -> ScriptDefinition {
        ScriptDefinition {
            id: "id".to_string(),
            name: name.to_string(),
            command: command.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_validity_requires_name_and_command() {
        assert!(script("build", "make").is_valid());
        assert!(!script("", "make").is_valid());
        assert!(!script("build", "").is_valid());
        assert!(!script("  \t", "make").is_valid());
        assert!(!script("build", "   ").is_valid());
    }

    #[test]
    fn test_validate_input_reports_first_blank_field() {
        assert_eq!(
            script("", "").validate_input(),
            Err(ScriptInputError::EmptyName)
        );
        assert_eq!(
            script("build", " ").validate_input(),
            Err(ScriptInputError::EmptyCommand)
        );
        assert_eq!(script("build", "make").validate_input(), Ok(()));
    }

    #[test]
    fn test_create_empty_generates_unique_ids() {
        let a = ScriptDefinition::create_empty();
        let b = ScriptDefinition::create_empty();
        assert!(!a.id.is_empty());
        assert_ne!(a.id, b.id);
        assert!(a.is_enabled);
        assert!(!a.is_startup_script);
        assert!(!a.ignore_errors);
        assert!(!a.is_valid());
    }

    #[test]
    fn test_tags() {
        let mut s = script("build", "make");
        assert!(s.tags().is_empty());
        s.is_startup_script = true;
        s.ignore_errors = true;
        s.is_enabled = false;
        assert_eq!(s.tags(), vec!["STARTUP", "IGNORE ERRORS", "DISABLED"]);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let parsed: ScriptDefinition =
            serde_yaml::from_str("id: x\nname: build\ncommand: make\n").unwrap();
        assert!(parsed.is_enabled);
        assert!(!parsed.is_startup_script);
        assert!(!parsed.ignore_errors);
        assert!(parsed.working_directory.is_empty());
    }
}
