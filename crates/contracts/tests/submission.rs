use async_trait::async_trait;
use contracts::domain::a001_catalog_item::{DraftField, ItemDraft, SubmitError};
use contracts::enums::item_category::ItemCategory;
use contracts::shared::config::ApiConfig;
use contracts::usecases::u001_publish_item::{
    CatalogClient, HttpResponse, HttpTransport, ItemComposer, SubmissionStatus, SubmitRejected,
};
use serde_json::{json, Value};
use std::cell::RefCell;

const TEST_CONFIG: ApiConfig = ApiConfig {
    base_url: "http://backend.test/api",
    keep_alive_interval_ms: 1000,
};

#[derive(Debug, Clone)]
struct Recorded {
    method: &'static str,
    url: String,
    body: Option<String>,
}

/// Records every request and answers with a canned reply
struct FakeTransport {
    reply: Result<HttpResponse, String>,
    requests: RefCell<Vec<Recorded>>,
}

impl FakeTransport {
    fn replying(status: u16, body: &str) -> Self {
        Self {
            reply: Ok(HttpResponse {
                status,
                body: body.to_string(),
            }),
            requests: RefCell::new(Vec::new()),
        }
    }

    fn unreachable(reason: &str) -> Self {
        Self {
            reply: Err(reason.to_string()),
            requests: RefCell::new(Vec::new()),
        }
    }
}

#[async_trait(?Send)]
impl<'a> HttpTransport for &'a FakeTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<HttpResponse, String> {
        self.requests.borrow_mut().push(Recorded {
            method: "POST",
            url: url.to_string(),
            body: Some(body),
        });
        tokio::task::yield_now().await;
        self.reply.clone()
    }

    async fn get(&self, url: &str) -> Result<HttpResponse, String> {
        self.requests.borrow_mut().push(Recorded {
            method: "GET",
            url: url.to_string(),
            body: None,
        });
        self.reply.clone()
    }
}

/// Same sequence the frontend view model runs
async fn submit(
    composer: &RefCell<ItemComposer>,
    client: &CatalogClient<&FakeTransport>,
) -> Result<(), SubmitRejected> {
    let request = composer.borrow_mut().begin_submit()?;
    let outcome = client.create_item(&request).await;
    composer.borrow_mut().finish_submit(request.category, outcome);
    Ok(())
}

fn composer_for(category: ItemCategory) -> ItemComposer {
    let mut composer = ItemComposer::default();
    composer.select_category(category);
    composer.set_field(DraftField::Title, "Rose scrapbook".into());
    composer.set_field(DraftField::Price, "500-1000".into());
    composer.set_field(DraftField::Description, "Twenty pages, kraft paper".into());
    composer.set_field(DraftField::Image, "https://img/rose.jpg".into());
    composer
}

#[tokio::test]
async fn test_envelope_posts_tags_and_resets() {
    let transport = FakeTransport::replying(201, r#"{"_id":"abc"}"#);
    let client = CatalogClient::new(TEST_CONFIG, &transport);

    let mut composer = composer_for(ItemCategory::Envelope);
    composer.toggle_tag("Shagun");
    composer.toggle_tag("Diwali");
    let composer = RefCell::new(composer);

    submit(&composer, &client).await.unwrap();

    let requests = transport.requests.borrow();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].url, "http://backend.test/api/envelope");
    let body: Value = serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
    assert_eq!(body["tags"], json!(["Diwali", "Shagun"]));
    assert_eq!(body["price"], json!("500-1000"));

    let composer = composer.borrow();
    assert_eq!(composer.draft(), &ItemDraft::default());
    assert_eq!(composer.category(), ItemCategory::Envelope);
    assert_eq!(
        composer.status(),
        &SubmissionStatus::Success("Successfully added to ENVELOPE!".into())
    );
}

#[tokio::test]
async fn test_workshop_posts_feature_list() {
    let transport = FakeTransport::replying(200, "");
    let client = CatalogClient::new(TEST_CONFIG, &transport);

    let mut composer = ItemComposer::default();
    composer.select_category(ItemCategory::Workshop);
    composer.set_field(DraftField::Title, "Resin coaster workshop".into());
    composer.set_field(DraftField::Price, "1200".into());
    composer.set_field(DraftField::Description, "Beginner friendly".into());
    composer.set_field(DraftField::Features, "A, B,  ,C".into());
    let composer = RefCell::new(composer);

    submit(&composer, &client).await.unwrap();

    let requests = transport.requests.borrow();
    assert_eq!(requests[0].url, "http://backend.test/api/workshops");
    let body: Value = serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
    assert_eq!(body["features"], json!(["A", "B", "C"]));
    assert!(body.get("video_link").is_none());
}

#[tokio::test]
async fn test_missing_image_sends_nothing() {
    let transport = FakeTransport::replying(201, "");
    let client = CatalogClient::new(TEST_CONFIG, &transport);

    for category in ItemCategory::all().into_iter().filter(|c| c.is_product()) {
        let mut composer = composer_for(category);
        composer.set_field(DraftField::Image, String::new());
        let composer = RefCell::new(composer);

        let rejected = submit(&composer, &client).await.unwrap_err();
        assert_eq!(rejected, SubmitRejected::Invalid(SubmitError::MissingImage));
    }
    assert!(transport.requests.borrow().is_empty());
}

#[tokio::test]
async fn test_blank_title_sends_nothing() {
    let transport = FakeTransport::replying(201, "");
    let client = CatalogClient::new(TEST_CONFIG, &transport);
    let mut composer = composer_for(ItemCategory::Envelope);
    composer.set_field(DraftField::Title, "   ".into());
    let composer = RefCell::new(composer);

    let rejected = submit(&composer, &client).await.unwrap_err();

    assert_eq!(
        rejected,
        SubmitRejected::Invalid(SubmitError::MissingField(DraftField::Title))
    );
    assert_eq!(
        composer.borrow().status().message(),
        Some("Title is required.")
    );
    assert!(transport.requests.borrow().is_empty());
}

#[tokio::test]
async fn test_workshop_without_image_is_posted() {
    let transport = FakeTransport::replying(201, "");
    let client = CatalogClient::new(TEST_CONFIG, &transport);
    let mut composer = composer_for(ItemCategory::Workshop);
    composer.set_field(DraftField::Image, String::new());
    composer.set_field(DraftField::LocationName, "Studio 4".into());
    let composer = RefCell::new(composer);

    submit(&composer, &client).await.unwrap();

    let requests = transport.requests.borrow();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url, "http://backend.test/api/workshops");
    let body: Value = serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
    assert_eq!(body["locationName"], json!("Studio 4"));
    assert_eq!(body["features"], json!([]));
    assert!(body.get("video_link").is_none());
}

#[tokio::test]
async fn test_server_message_is_surfaced_and_draft_kept() {
    let transport = FakeTransport::replying(409, r#"{"message":"Title already exists"}"#);
    let client = CatalogClient::new(TEST_CONFIG, &transport);
    let composer = RefCell::new(composer_for(ItemCategory::Scrapbook));

    submit(&composer, &client).await.unwrap();

    let composer = composer.borrow();
    assert_eq!(
        composer.status(),
        &SubmissionStatus::Error("Title already exists".into())
    );
    assert_eq!(composer.draft().title, "Rose scrapbook");
    assert!(!composer.is_in_flight());
}

#[tokio::test]
async fn test_error_without_message_uses_fallback() {
    let transport = FakeTransport::replying(500, r#"{"status":"error"}"#);
    let client = CatalogClient::new(TEST_CONFIG, &transport);
    let composer = RefCell::new(composer_for(ItemCategory::Resin));

    submit(&composer, &client).await.unwrap();

    assert_eq!(
        composer.borrow().status(),
        &SubmissionStatus::Error("Failed to save data".into())
    );
}

#[tokio::test]
async fn test_transport_failure_is_surfaced() {
    let transport = FakeTransport::unreachable("TypeError: Failed to fetch");
    let client = CatalogClient::new(TEST_CONFIG, &transport);
    let composer = RefCell::new(composer_for(ItemCategory::Coinbox));

    submit(&composer, &client).await.unwrap();

    let composer = composer.borrow();
    assert_eq!(
        composer.status(),
        &SubmissionStatus::Error("TypeError: Failed to fetch".into())
    );
    assert_eq!(composer.draft().price, "500-1000");
}

#[tokio::test]
async fn test_concurrent_submit_issues_one_request() {
    let transport = FakeTransport::replying(201, "");
    let client = CatalogClient::new(TEST_CONFIG, &transport);
    let composer = RefCell::new(composer_for(ItemCategory::Toran));

    let (first, second) = tokio::join!(submit(&composer, &client), submit(&composer, &client));

    assert!(first.is_ok());
    assert_eq!(second, Err(SubmitRejected::InFlight));
    assert_eq!(transport.requests.borrow().len(), 1);
    assert_eq!(transport.requests.borrow()[0].url, "http://backend.test/api/torans");
}

#[tokio::test]
async fn test_ping_hits_base_url() {
    let transport = FakeTransport::replying(404, "Not Found");
    let client = CatalogClient::new(TEST_CONFIG, &transport);

    assert_eq!(client.ping().await, Ok(404));
    let requests = transport.requests.borrow();
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].url, "http://backend.test/api");
}
