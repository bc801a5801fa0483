//! Service implementations for Pinterest API endpoints.
//!
//! Each service module covers one resource family and exposes a trait plus
//! its default implementation over the shared transport.

pub mod ad_accounts;
pub mod boards;
pub mod catalogs;
pub mod media;
pub mod oauth;
pub mod pins;
pub mod user_account;

pub use ad_accounts::AdAccountsService;
pub use boards::BoardsService;
pub use catalogs::CatalogsService;
pub use media::MediaService;
pub use oauth::OAuthService;
pub use pins::PinsService;
pub use user_account::UserAccountService;

/// Build the `page_size`/`bookmark` query pairs shared by every paged
/// listing. The default page size applies when the caller sets none.
pub(crate) fn paging_query(
    page_size: Option<u32>,
    bookmark: Option<&str>,
) -> Vec<(String, String)> {
    let mut query = vec![(
        "page_size".to_string(),
        page_size.unwrap_or(crate::DEFAULT_PAGE_SIZE).to_string(),
    )];
    if let Some(bookmark) = bookmark {
        query.push(("bookmark".to_string(), bookmark.to_string()));
    }
    query
}
