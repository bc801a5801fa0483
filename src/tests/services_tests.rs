//! Service tests against a mock HTTP server.

use crate::client::{PinterestClient, PinterestClientImpl};
use crate::config::PinterestConfigBuilder;
use crate::errors::{ConfigurationError, PinterestError};
use crate::fixtures;
use crate::services::ad_accounts::{
    AdAccountsServiceTrait, AnalyticsParams, EntityAnalyticsRequest, ListCampaignsRequest,
};
use crate::services::boards::{
    BoardsServiceTrait, ListBoardPinsRequest, ListBoardsRequest, UpdateBoardRequest,
};
use crate::services::catalogs::{CatalogsServiceTrait, GetItemsRequest, ItemsBatchRequest};
use crate::services::media::MediaServiceTrait;
use crate::services::user_account::{UserAccountAnalyticsRequest, UserAccountServiceTrait};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> PinterestClientImpl {
    let config = PinterestConfigBuilder::new()
        .access_token("pina_test_token")
        .base_url(&server.uri())
        .unwrap()
        .build()
        .unwrap();
    PinterestClientImpl::new(config).unwrap()
}

#[tokio::test]
async fn test_list_boards_follows_bookmark_until_exhausted() {
    let server = MockServer::start().await;

    // The page behind the cursor; mounted first so the more specific
    // matcher wins.
    Mock::given(method("GET"))
        .and(path("/boards"))
        .and(query_param("bookmark", "cursor_abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{ "id": "3", "name": "Third", "privacy": "PUBLIC" }],
            "bookmark": ""
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/boards"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(fixtures::responses::boards_page(Some("cursor_abc"))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;

    let mut names = Vec::new();
    let mut bookmark: Option<String> = None;
    loop {
        let mut request = ListBoardsRequest::new();
        if let Some(cursor) = &bookmark {
            request = request.bookmark(cursor.clone());
        }
        let page = client.boards().list(request).await.unwrap();
        names.extend(page.items.iter().filter_map(|b| b.name.clone()));

        match page.bookmark() {
            Some(cursor) => bookmark = Some(cursor.to_string()),
            None => break,
        }
    }

    assert_eq!(names, vec!["Summer Recipes", "Gift Ideas", "Third"]);
}

#[tokio::test]
async fn test_empty_bookmark_reads_as_exhausted() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/boards"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(fixtures::responses::boards_page(Some(""))),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let page = client.boards().list(ListBoardsRequest::new()).await.unwrap();

    assert_eq!(page.items.len(), 2);
    assert!(page.bookmark().is_none());
}

#[tokio::test]
async fn test_empty_board_update_issues_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::responses::board()))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .boards()
        .update(UpdateBoardRequest::new("813744226420795885"))
        .await
        .unwrap_err();

    match err {
        PinterestError::Configuration(ConfigurationError::EmptyUpdate { message }) => {
            assert!(message.contains("name"));
        }
        other => panic!("expected empty-update error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_list_section_pins_uses_section_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(
            "/boards/813744226420795885/sections/5196034703893725230/pins",
        ))
        .and(query_param("page_size", "25"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [fixtures::responses::pin()],
            "bookmark": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let page = client
        .boards()
        .list_pins(
            ListBoardPinsRequest::new("813744226420795885").section("5196034703893725230"),
        )
        .await
        .unwrap();

    assert_eq!(page.items.len(), 1);
}

#[tokio::test]
async fn test_list_campaigns_transmits_filters_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ad_accounts/549755885175/campaigns"))
        .and(query_param("campaign_ids", "626735565838,626735565839"))
        .and(query_param("entity_statuses", "ACTIVE,PAUSED"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{ "id": "626735565838", "name": "Fall launch", "status": "ACTIVE" }],
            "bookmark": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let page = client
        .ad_accounts()
        .list_campaigns(
            ListCampaignsRequest::new("549755885175")
                .campaign_ids(vec!["626735565838", "626735565839"])
                .entity_statuses(vec!["ACTIVE", "PAUSED"]),
        )
        .await
        .unwrap();

    assert_eq!(page.items[0].id.as_deref(), Some("626735565838"));
}

#[tokio::test]
async fn test_campaign_analytics_report_as_query_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ad_accounts/549755885175/campaigns/analytics"))
        .and(query_param("campaign_ids", "626735565838"))
        .and(query_param("start_date", "2024-06-01"))
        .and(query_param("end_date", "2024-06-30"))
        .and(query_param("columns", "SPEND_IN_MICRO_DOLLAR,IMPRESSION_1"))
        .and(query_param("granularity", "DAY"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "DATE": "2024-06-01", "SPEND_IN_MICRO_DOLLAR": 1234567, "IMPRESSION_1": 400 },
            { "DATE": "2024-06-02", "SPEND_IN_MICRO_DOLLAR": 2345678, "IMPRESSION_1": 512 }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let rows = client
        .ad_accounts()
        .get_campaign_analytics(EntityAnalyticsRequest::new(
            "549755885175",
            vec!["626735565838"],
            AnalyticsParams::new(
                "2024-06-01",
                "2024-06-30",
                vec!["SPEND_IN_MICRO_DOLLAR", "IMPRESSION_1"],
                "DAY",
            ),
        ))
        .await
        .unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["SPEND_IN_MICRO_DOLLAR"], 1234567);
}

#[tokio::test]
async fn test_get_catalog_items_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/catalogs/items"))
        .and(query_param("country", "US"))
        .and(query_param("item_ids", "CR-1,CR-2"))
        .and(query_param("language", "EN"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{ "item_id": "CR-1" }, { "item_id": "CR-2" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let items = client
        .catalogs()
        .get_items(GetItemsRequest::new("US", vec!["CR-1", "CR-2"], "EN"))
        .await
        .unwrap();

    assert_eq!(items.items.len(), 2);
}

#[tokio::test]
async fn test_items_batch_posts_body_and_decodes_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/catalogs/items/batch"))
        .and(body_json(json!({
            "operation": "UPSERT",
            "items": [{ "item_id": "CR-1" }],
            "country": "US"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "batch_id": "595953100599279259",
            "status": "PROCESSING",
            "created_time": "2023-05-01T12:00:00",
            "items": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let batch = client
        .catalogs()
        .perform_items_batch(
            ItemsBatchRequest::new("UPSERT", vec![json!({"item_id": "CR-1"})]).country("US"),
        )
        .await
        .unwrap();

    assert_eq!(batch.batch_id.as_deref(), Some("595953100599279259"));
    assert_eq!(batch.status.as_deref(), Some("PROCESSING"));
}

#[tokio::test]
async fn test_delete_feed_returns_true() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/catalogs/feeds/278913891"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    assert!(client.catalogs().delete_feed("278913891").await.unwrap());
}

#[tokio::test]
async fn test_register_media_returns_upload_target() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/media"))
        .and(body_json(json!({ "media_type": "video" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(fixtures::responses::register_media()),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let registered = client.media().register("video").await.unwrap();

    assert_eq!(registered.media_id.as_deref(), Some("1111111111111"));
    assert!(registered
        .upload_url
        .as_deref()
        .unwrap()
        .starts_with("https://"));
    assert!(registered.upload_parameters.unwrap().contains_key("key"));
}

#[tokio::test]
async fn test_user_account_analytics_decodes_daily_metrics() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user_account/analytics"))
        .and(query_param("metric_types", "IMPRESSION,SAVE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::responses::analytics()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let analytics = client
        .user_account()
        .get_analytics(
            UserAccountAnalyticsRequest::new("2023-04-28", "2023-04-28")
                .metric_types(vec!["IMPRESSION", "SAVE"]),
        )
        .await
        .unwrap();

    let all = analytics.all.unwrap();
    let daily = all.daily_metrics.unwrap();
    assert_eq!(daily.len(), 1);
    assert_eq!(daily[0].data_status.as_deref(), Some("READY"));
    assert_eq!(daily[0].metrics.as_ref().unwrap()["IMPRESSION"], 1523);
}
