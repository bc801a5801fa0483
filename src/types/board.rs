//! Board and board section types.

use super::Owner;
use serde::{Deserialize, Serialize};

/// A board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    /// Board identifier
    #[serde(default)]
    pub id: Option<String>,
    /// Board name
    #[serde(default)]
    pub name: Option<String>,
    /// Board description
    #[serde(default)]
    pub description: Option<String>,
    /// Owner of the board
    #[serde(default)]
    pub owner: Option<Owner>,
    /// Privacy setting: `PUBLIC`, `PROTECTED` or `SECRET`
    #[serde(default)]
    pub privacy: Option<String>,
}

/// A section within a board
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardSection {
    /// Section identifier
    #[serde(default)]
    pub id: Option<String>,
    /// Section name
    #[serde(default)]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_board_decodes_with_absent_fields() {
        let board: Board = serde_json::from_value(json!({
            "id": "549755885175",
            "name": "Summer Recipes",
            "owner": {"username": "cook"}
        }))
        .unwrap();

        assert_eq!(board.name.as_deref(), Some("Summer Recipes"));
        assert_eq!(board.owner.unwrap().username.as_deref(), Some("cook"));
        assert!(board.privacy.is_none());
    }

    #[test]
    fn test_board_ignores_unknown_fields() {
        let board: Board =
            serde_json::from_value(json!({"id": "1", "collaborator_count": 4})).unwrap();
        assert_eq!(board.id.as_deref(), Some("1"));
    }
}
