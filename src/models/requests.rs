//! Request DTOs for the recipes API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Request body for creating a recipe (POST /recipes)
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeDraft {
    /// Recipe name
    pub name: String,
    /// Ingredient list
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Preparation steps
    #[serde(default)]
    pub instructions: Vec<String>,
    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
}

impl RecipeDraft {
    /// Validates the draft.
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some("Recipe name cannot be empty".to_string());
        }
        None
    }
}

/// Partial field set for updating a recipe (PUT /recipes/:id)
///
/// Absent fields are left untouched; the identifier and published
/// timestamp are never part of the mutable set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipePatch {
    /// New recipe name
    pub name: Option<String>,
    /// Replacement ingredient list
    pub ingredients: Option<Vec<String>>,
    /// Replacement preparation steps
    pub instructions: Option<Vec<String>>,
    /// Replacement tags
    pub tags: Option<Vec<String>>,
}

impl RecipePatch {
    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.ingredients.is_none()
            && self.instructions.is_none()
            && self.tags.is_none()
    }

    /// Validates the patch.
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Some("Recipe name cannot be empty".to_string());
            }
        }
        None
    }
}

/// Credentials for sign-in and sign-up (POST /signin, POST /signup)
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    /// Username
    pub username: String,
    /// Plain-text password, digested before any store access
    pub password: String,
}

impl Credentials {
    /// Validates the credentials payload.
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.username.trim().is_empty() {
            return Some("Username cannot be empty".to_string());
        }
        if self.password.is_empty() {
            return Some("Password cannot be empty".to_string());
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_deserialize_defaults() {
        let json = r#"{"name": "Toast"}"#;
        let draft: RecipeDraft = serde_json::from_str(json).unwrap();
        assert_eq!(draft.name, "Toast");
        assert!(draft.ingredients.is_empty());
        assert!(draft.tags.is_empty());
    }

    #[test]
    fn test_draft_validate_empty_name() {
        let json = r#"{"name": "  "}"#;
        let draft: RecipeDraft = serde_json::from_str(json).unwrap();
        assert!(draft.validate().is_some());
    }

    #[test]
    fn test_patch_deserialize_partial() {
        let json = r#"{"tags": ["vegan"]}"#;
        let patch: RecipePatch = serde_json::from_str(json).unwrap();
        assert!(patch.name.is_none());
        assert_eq!(patch.tags.as_deref(), Some(&["vegan".to_string()][..]));
        assert!(!patch.is_empty());
    }

    #[test]
    fn test_patch_empty() {
        let patch: RecipePatch = serde_json::from_str("{}").unwrap();
        assert!(patch.is_empty());
        assert!(patch.validate().is_none());
    }

    #[test]
    fn test_patch_rejects_blank_name() {
        let patch = RecipePatch {
            name: Some("".to_string()),
            ..Default::default()
        };
        assert!(patch.validate().is_some());
    }

    #[test]
    fn test_credentials_validate() {
        let creds = Credentials {
            username: "alice".to_string(),
            password: "pw".to_string(),
        };
        assert!(creds.validate().is_none());

        let creds = Credentials {
            username: "".to_string(),
            password: "pw".to_string(),
        };
        assert!(creds.validate().is_some());

        let creds = Credentials {
            username: "alice".to_string(),
            password: "".to_string(),
        };
        assert!(creds.validate().is_some());
    }
}
