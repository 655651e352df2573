// tests/search_session_tests.rs - Tokio-driven debounced search
//
// The clock is paused, so sleeps advance virtual time instantly and the
// debounce interval can be checked exactly.
//
// Run with: cargo test --test search_session_tests --features native

use std::sync::{Arc, Mutex};
use std::time::Duration;

use product_catalog::fixtures::product_page;
use product_catalog::web_app::api::{ApiError, ProductApi};
use product_catalog::web_app::model::{CreateOutcome, NewProduct, ProductPage};
use product_catalog::web_app::search::session::{QueryChange, SearchSession};
use product_catalog::web_app::search::{
    MemoryUrl, QueryParams, SearchController, SearchQueryState, TriggerConfig, UrlStore,
};
use tokio::sync::mpsc;
use tokio::time::{self, Instant};

const LATENCY: Duration = Duration::from_millis(50);

/// Records every search and answers after a fixed latency
#[derive(Clone)]
struct RecordingApi {
    calls: Arc<Mutex<Vec<(SearchQueryState, Instant)>>>,
    fail_on: Option<&'static str>,
    latency: Duration,
}

impl Default for RecordingApi {
    fn default() -> Self {
        Self {
            calls: Arc::default(),
            fail_on: None,
            latency: LATENCY,
        }
    }
}

impl RecordingApi {
    fn slow(latency: Duration) -> Self {
        Self {
            latency,
            ..Self::default()
        }
    }

    fn texts(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(query, _)| query.text.clone())
            .collect()
    }

    fn queries(&self) -> Vec<SearchQueryState> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(query, _)| query.clone())
            .collect()
    }
}

impl ProductApi for RecordingApi {
    async fn search(&self, query: &SearchQueryState) -> Result<ProductPage, ApiError> {
        self.calls.lock().unwrap().push((query.clone(), Instant::now()));
        time::sleep(self.latency).await;
        if self.fail_on == Some(query.text.as_str()) {
            return Err(ApiError::Status(503));
        }
        Ok(product_page(&query.text, 2, 3))
    }

    async fn create(&self, _product: &NewProduct) -> Result<CreateOutcome, ApiError> {
        Ok(CreateOutcome::Created(serde_json::json!({})))
    }
}

fn session(api: &RecordingApi, query: &str) -> SearchSession<RecordingApi, MemoryUrl> {
    let controller = SearchController::new(MemoryUrl::new(query), TriggerConfig::default());
    SearchSession::new(api.clone(), controller)
}

async fn send(changes: &mpsc::Sender<QueryChange>, text: &str) {
    changes
        .send(QueryChange::Text(text.to_string()))
        .await
        .unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_two_characters_never_call_the_api() {
    let api = RecordingApi::default();
    let (changes, receiver) = mpsc::channel(8);

    let (controller, ()) = tokio::join!(session(&api, "").run(receiver), async move {
        send(&changes, "l").await;
        send(&changes, "la").await;
        time::sleep(Duration::from_secs(2)).await;
    });

    assert!(api.texts().is_empty());
    assert!(controller.results().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_three_characters_call_after_the_interval() {
    let api = RecordingApi::default();
    let (changes, receiver) = mpsc::channel(8);
    let started = Instant::now();

    let (controller, ()) = tokio::join!(session(&api, "").run(receiver), async move {
        send(&changes, "lam").await;
    });

    let calls = api.calls.lock().unwrap().clone();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0.text, "lam");
    let waited = calls[0].1 - started;
    assert!(waited >= Duration::from_millis(500), "fired after {:?}", waited);
    assert!(waited < Duration::from_millis(510), "fired after {:?}", waited);
    assert_eq!(controller.results().items.len(), 2);
    assert!(!controller.is_loading());
}

#[tokio::test(start_paused = true)]
async fn test_changes_within_the_interval_make_one_call() {
    let api = RecordingApi::default();
    let (changes, receiver) = mpsc::channel(8);

    tokio::join!(session(&api, "").run(receiver), async move {
        send(&changes, "lam").await;
        time::sleep(Duration::from_millis(300)).await;
        send(&changes, "lamp").await;
        time::sleep(Duration::from_millis(300)).await;
        send(&changes, "lamps").await;
    });

    assert_eq!(api.texts(), ["lamps"]);
}

#[tokio::test(start_paused = true)]
async fn test_pauses_longer_than_the_interval_call_each_time() {
    let api = RecordingApi::default();
    let (changes, receiver) = mpsc::channel(8);

    tokio::join!(session(&api, "").run(receiver), async move {
        send(&changes, "lam").await;
        time::sleep(Duration::from_millis(600)).await;
        send(&changes, "lamp").await;
    });

    assert_eq!(api.texts(), ["lam", "lamp"]);
}

#[tokio::test(start_paused = true)]
async fn test_shortening_below_threshold_cancels_pending_search() {
    let api = RecordingApi::default();
    let (changes, receiver) = mpsc::channel(8);

    let (controller, ()) = tokio::join!(session(&api, "").run(receiver), async move {
        send(&changes, "lamp").await;
        time::sleep(Duration::from_millis(100)).await;
        send(&changes, "la").await;
        time::sleep(Duration::from_secs(1)).await;
    });

    assert!(api.texts().is_empty());
    assert_eq!(QueryParams::parse(&controller.url().query()).get("q"), None);
}

#[tokio::test(start_paused = true)]
async fn test_page_and_size_changes_refetch() {
    let api = RecordingApi::default();
    let (changes, receiver) = mpsc::channel(8);

    let (controller, ()) = tokio::join!(session(&api, "").run(receiver), async move {
        send(&changes, "lamp").await;
        time::sleep(Duration::from_millis(600)).await;
        changes.send(QueryChange::Page(2)).await.unwrap();
        time::sleep(Duration::from_millis(600)).await;
        changes.send(QueryChange::PageSize(20)).await.unwrap();
    });

    let pages: Vec<(u32, u32)> = api
        .queries()
        .iter()
        .map(|query| (query.page, query.page_size))
        .collect();
    assert_eq!(pages, [(1, 10), (2, 10), (2, 20)]);

    let params = QueryParams::parse(&controller.url().query());
    assert_eq!(params.get("q"), Some("lamp"));
    assert_eq!(params.get("page"), Some("2"));
    assert_eq!(params.get("per_page"), Some("20"));
}

#[tokio::test(start_paused = true)]
async fn test_failed_search_keeps_previous_results() {
    let api = RecordingApi {
        fail_on: Some("lamps"),
        ..RecordingApi::default()
    };
    let (changes, receiver) = mpsc::channel(8);

    let (controller, ()) = tokio::join!(session(&api, "").run(receiver), async move {
        send(&changes, "lamp").await;
        time::sleep(Duration::from_millis(600)).await;
        send(&changes, "lamps").await;
    });

    assert_eq!(api.texts(), ["lamp", "lamps"]);
    assert!(!controller.is_loading());
    assert_eq!(
        controller.results().items[0].title.as_deref(),
        Some("lamp 1")
    );
    // `q` still holds the last text that produced results
    assert_eq!(
        QueryParams::parse(&controller.url().query()).get("q"),
        Some("lamp")
    );
}

#[tokio::test(start_paused = true)]
async fn test_typing_during_a_slow_search_restarts_the_interval() {
    let api = RecordingApi::slow(Duration::from_secs(1));
    let (changes, receiver) = mpsc::channel(8);
    let started = Instant::now();

    let (controller, ()) = tokio::join!(session(&api, "").run(receiver), async move {
        send(&changes, "lamp").await;
        // First request goes out at 500ms and answers at 1500ms
        time::sleep(Duration::from_millis(700)).await;
        send(&changes, "lamps").await;
    });

    let calls = api.calls.lock().unwrap().clone();
    let texts: Vec<&str> = calls.iter().map(|(query, _)| query.text.as_str()).collect();
    assert_eq!(texts, ["lamp", "lamps"]);
    // Due at 1200ms, sent as soon as the first response is applied
    let second = calls[1].1 - started;
    assert!(second >= Duration::from_millis(1500), "sent after {:?}", second);
    assert!(second < Duration::from_millis(1510), "sent after {:?}", second);
    assert_eq!(
        controller.results().items[0].title.as_deref(),
        Some("lamps 1")
    );
}

#[tokio::test(start_paused = true)]
async fn test_clearing_during_a_slow_search_discards_its_response() {
    let api = RecordingApi::slow(Duration::from_secs(1));
    let (changes, receiver) = mpsc::channel(8);

    let (controller, ()) = tokio::join!(session(&api, "").run(receiver), async move {
        send(&changes, "lamp").await;
        time::sleep(Duration::from_millis(700)).await;
        send(&changes, "la").await;
    });

    assert_eq!(api.texts(), ["lamp"]);
    assert!(controller.results().is_empty());
    assert!(!controller.is_loading());
    assert_eq!(QueryParams::parse(&controller.url().query()).get("q"), None);
}

#[tokio::test(start_paused = true)]
async fn test_search_from_url_on_mount() {
    let api = RecordingApi::default();
    let (changes, receiver) = mpsc::channel::<QueryChange>(8);
    drop(changes);

    let controller = session(&api, "q=desk&page=2&per_page=5").run(receiver).await;

    let queries = api.queries();
    assert_eq!(queries.len(), 1);
    assert_eq!(
        queries[0],
        SearchQueryState {
            text: "desk".to_string(),
            page: 2,
            page_size: 5,
        }
    );
    assert_eq!(controller.results().total_pages, 3);
}
