//! Test fixtures for Pinterest API responses.
//!
//! Provides realistic test data for unit tests.

use crate::types::*;
use serde_json::json;
use std::collections::HashMap;

/// Create a fixture pin
pub fn pin() -> Pin {
    Pin {
        id: Some("813744226420795884".to_string()),
        created_at: Some("2023-04-28T00:00:00".to_string()),
        link: Some("https://www.example.com/".to_string()),
        title: Some("Fall recipes".to_string()),
        description: Some("Our favorite fall harvest recipes".to_string()),
        alt_text: Some("A bowl of squash soup".to_string()),
        board_id: Some("813744226420795885".to_string()),
        board_section_id: None,
        parent_pin_id: None,
        board_owner: Some(Owner {
            username: Some("operating_user".to_string()),
        }),
        media: Some(pin_media()),
    }
}

/// Create a fixture saved pin
pub fn saved_pin() -> Pin {
    let mut p = pin();
    p.id = Some("813744226420795886".to_string());
    p.parent_pin_id = Some("813744226420795884".to_string());
    p
}

/// Create fixture pin media
pub fn pin_media() -> PinMedia {
    let mut images = HashMap::new();
    images.insert(
        "150x150".to_string(),
        ImageDetail {
            width: Some(150),
            height: Some(150),
            url: Some("https://i.pinimg.com/150x150/3e/82/fb/cafe.jpg".to_string()),
        },
    );
    images.insert(
        "1200x".to_string(),
        ImageDetail {
            width: Some(1200),
            height: Some(1800),
            url: Some("https://i.pinimg.com/1200x/3e/82/fb/cafe.jpg".to_string()),
        },
    );
    PinMedia {
        images: Some(images),
        media_type: Some("image".to_string()),
    }
}

/// Create a fixture board
pub fn board() -> Board {
    Board {
        id: Some("813744226420795885".to_string()),
        name: Some("Summer Recipes".to_string()),
        description: Some("Recipes for warm evenings".to_string()),
        owner: Some(Owner {
            username: Some("operating_user".to_string()),
        }),
        privacy: Some("PUBLIC".to_string()),
    }
}

/// Create a fixture secret board
pub fn secret_board() -> Board {
    let mut b = board();
    b.id = Some("813744226420795887".to_string());
    b.name = Some("Gift Ideas".to_string());
    b.privacy = Some("SECRET".to_string());
    b
}

/// Create a fixture board section
pub fn board_section() -> BoardSection {
    BoardSection {
        id: Some("5196034703893725230".to_string()),
        name: Some("Drinks".to_string()),
    }
}

/// Create a fixture user account
pub fn user_account() -> UserAccount {
    UserAccount {
        username: Some("operating_user".to_string()),
        account_type: Some("BUSINESS".to_string()),
        profile_image: Some("https://i.pinimg.com/280x280_RS/3e/82/fb/avatar.jpg".to_string()),
        website_url: Some("https://www.example.com/".to_string()),
    }
}

/// Create a fixture media upload
pub fn media_upload() -> MediaUpload {
    MediaUpload {
        media_id: Some("1111111111111".to_string()),
        media_type: Some("video".to_string()),
        status: Some("succeeded".to_string()),
    }
}

/// Create a fixture ad account
pub fn ad_account() -> AdAccount {
    AdAccount {
        id: Some("549755885175".to_string()),
        name: Some("Example Ads".to_string()),
        owner: Some(json!({ "username": "operating_user" })),
        country: Some("US".to_string()),
        currency: Some("USD".to_string()),
    }
}

/// Create a fixture campaign
pub fn campaign() -> Campaign {
    Campaign {
        id: Some("626735565838".to_string()),
        ad_account_id: Some("549755885175".to_string()),
        name: Some("Fall launch".to_string()),
        status: Some("ACTIVE".to_string()),
        lifetime_spend_cap: Some(1_000_000_000),
        daily_spend_cap: Some(50_000_000),
        objective_type: Some("AWARENESS".to_string()),
        start_time: Some(1_667_304_000),
        end_time: None,
    }
}

/// Create a fixture catalog feed
pub fn catalog_feed() -> CatalogFeed {
    CatalogFeed {
        id: Some("278913891".to_string()),
        name: Some("Retail feed".to_string()),
        status: Some("ACTIVE".to_string()),
        format: Some("TSV".to_string()),
        location: Some("https://www.example.com/feed.tsv".to_string()),
        country: Some("US".to_string()),
        default_currency: Some("USD".to_string()),
        locale: Some("en-US".to_string()),
        default_availability: Some("IN_STOCK".to_string()),
        credentials: None,
        preferred_processing_schedule: None,
        created_at: Some("2023-04-28T00:00:00".to_string()),
        updated_at: Some("2023-05-01T12:00:00".to_string()),
    }
}

/// Create fixture JSON responses
pub mod responses {
    use serde_json::json;

    /// Create a GET /pins/{id} response
    pub fn pin() -> serde_json::Value {
        json!({
            "id": "813744226420795884",
            "created_at": "2023-04-28T00:00:00",
            "link": "https://www.example.com/",
            "title": "Fall recipes",
            "description": "Our favorite fall harvest recipes",
            "alt_text": "A bowl of squash soup",
            "board_id": "813744226420795885",
            "board_section_id": null,
            "board_owner": { "username": "operating_user" },
            "media": {
                "media_type": "image",
                "images": {
                    "150x150": {
                        "width": 150,
                        "height": 150,
                        "url": "https://i.pinimg.com/150x150/3e/82/fb/cafe.jpg"
                    }
                }
            }
        })
    }

    /// Create a GET /boards/{id} response
    pub fn board() -> serde_json::Value {
        json!({
            "id": "813744226420795885",
            "name": "Summer Recipes",
            "description": "Recipes for warm evenings",
            "owner": { "username": "operating_user" },
            "privacy": "PUBLIC"
        })
    }

    /// Create a GET /boards response page
    pub fn boards_page(bookmark: Option<&str>) -> serde_json::Value {
        json!({
            "items": [
                {
                    "id": "813744226420795885",
                    "name": "Summer Recipes",
                    "privacy": "PUBLIC"
                },
                {
                    "id": "813744226420795887",
                    "name": "Gift Ideas",
                    "privacy": "SECRET"
                }
            ],
            "bookmark": bookmark
        })
    }

    /// Create a GET /user_account response
    pub fn user_account() -> serde_json::Value {
        json!({
            "username": "operating_user",
            "account_type": "BUSINESS",
            "profile_image": "https://i.pinimg.com/280x280_RS/3e/82/fb/avatar.jpg",
            "website_url": "https://www.example.com/"
        })
    }

    /// Create an analytics response with one daily metric
    pub fn analytics() -> serde_json::Value {
        json!({
            "all": {
                "daily_metrics": [
                    {
                        "date": "2023-04-28",
                        "data_status": "READY",
                        "metrics": { "IMPRESSION": 1523, "SAVE": 47 }
                    }
                ],
                "summary_metrics": { "IMPRESSION": 1523, "SAVE": 47 }
            }
        })
    }

    /// Create a POST /media response
    pub fn register_media() -> serde_json::Value {
        json!({
            "media_id": "1111111111111",
            "media_type": "video",
            "upload_url": "https://pinterest-media-upload.s3-accelerate.amazonaws.com/",
            "upload_parameters": {
                "key": "uploads/1111111111111",
                "policy": "eyJleHAiOiAxMjM0NTY3ODkwfQ"
            }
        })
    }

    /// Create a token endpoint response
    pub fn token() -> serde_json::Value {
        json!({
            "access_token": "pina_exchanged_token",
            "refresh_token": "pinr_refresh_token",
            "token_type": "bearer",
            "expires_in": 2592000,
            "refresh_token_expires_in": 31536000,
            "scope": "pins:read boards:read"
        })
    }

    /// Create an API error response body
    pub fn error(code: i64, message: &str) -> serde_json::Value {
        json!({
            "code": code,
            "message": message
        })
    }
}
