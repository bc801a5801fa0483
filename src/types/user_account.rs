//! User account types.

use serde::{Deserialize, Serialize};

/// The authenticated user's account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    /// Username
    #[serde(default)]
    pub username: Option<String>,
    /// Account type: `BUSINESS` or `PINNER`
    #[serde(default)]
    pub account_type: Option<String>,
    /// Profile image URL
    #[serde(default)]
    pub profile_image: Option<String>,
    /// Website URL
    #[serde(default)]
    pub website_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_account_decodes() {
        let account: UserAccount = serde_json::from_value(json!({
            "username": "pinner",
            "account_type": "BUSINESS"
        }))
        .unwrap();
        assert_eq!(account.username.as_deref(), Some("pinner"));
        assert_eq!(account.account_type.as_deref(), Some("BUSINESS"));
        assert!(account.website_url.is_none());
    }
}
