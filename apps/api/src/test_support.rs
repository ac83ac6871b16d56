//! Fixtures shared by unit tests: generated PDFs, multipart bodies, a fake
//! `JobSearch` backend and a local stand-in for the Adzuna HTTP API.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Router,
};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use crate::config::{AdzunaConfig, Config, RESULTS_PER_PAGE};
use crate::jobs::aggregator::JobAggregator;
use crate::jobs::models::{Company, JobListing};
use crate::jobs::search::{JobSearch, SearchError};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Documents
// ────────────────────────────────────────────────────────────────────────────

/// Single-page PDF with one text line per entry.
pub fn pdf_with_lines(lines: &[&str]) -> Vec<u8> {
    build_pdf(&[lines.to_vec()])
}

/// One page per entry, each holding a single line of text.
pub fn pdf_with_pages(pages: &[&str]) -> Vec<u8> {
    let pages: Vec<Vec<&str>> = pages.iter().map(|p| vec![*p]).collect();
    build_pdf(&pages)
}

fn build_pdf(pages: &[Vec<&str>]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for lines in pages {
        let mut operations = vec![
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec!["F1".into(), 12.into()]),
            Operation::new("Td", vec![72.into(), 720.into()]),
        ];
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                operations.push(Operation::new("Td", vec![0.into(), (-16).into()]));
            }
            operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
        }
        operations.push(Operation::new("ET", vec![]));

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut out = Vec::new();
    doc.save_to(&mut out).unwrap();
    out
}

/// Returns `(content_type, body)` for a single-file multipart upload.
pub fn multipart_body(field: &str, file_name: &str, content: &[u8]) -> (String, Vec<u8>) {
    let boundary = "jobmatch-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"{file_name}\"\r\nContent-Type: application/pdf\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
    (format!("multipart/form-data; boundary={boundary}"), body)
}

// ────────────────────────────────────────────────────────────────────────────
// Job search fakes
// ────────────────────────────────────────────────────────────────────────────

pub fn listing(title: &str, company: &str) -> JobListing {
    JobListing {
        title: Some(title.to_string()),
        company: Some(Company {
            display_name: Some(company.to_string()),
        }),
        redirect_url: None,
    }
}

enum Canned {
    Listings(Vec<JobListing>),
    Status(u16),
}

/// In-memory `JobSearch`. Unknown terms return no listings.
#[derive(Default)]
pub struct FakeSearch {
    canned: HashMap<String, Canned>,
    queries: Mutex<Vec<String>>,
}

impl FakeSearch {
    pub fn with(mut self, term: &str, listings: Vec<JobListing>) -> Self {
        self.canned.insert(term.to_string(), Canned::Listings(listings));
        self
    }

    pub fn failing(mut self, term: &str, status: u16) -> Self {
        self.canned.insert(term.to_string(), Canned::Status(status));
        self
    }

    /// Terms searched so far, in call order.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl JobSearch for FakeSearch {
    async fn search(&self, term: &str) -> Result<Vec<JobListing>, SearchError> {
        self.queries.lock().unwrap().push(term.to_string());
        match self.canned.get(term) {
            Some(Canned::Listings(listings)) => Ok(listings.clone()),
            Some(Canned::Status(status)) => Err(SearchError::Api {
                status: *status,
                message: "canned failure".to_string(),
            }),
            None => Ok(Vec::new()),
        }
    }
}

pub fn test_state(search: Arc<dyn JobSearch>) -> AppState {
    AppState {
        config: Config {
            adzuna: AdzunaConfig {
                app_id: "test-id".to_string(),
                app_key: "test-key".to_string(),
                base_url: "http://127.0.0.1:1".to_string(),
                country: "in".to_string(),
                results_per_page: RESULTS_PER_PAGE,
            },
            port: 0,
            rust_log: "debug".to_string(),
            max_upload_bytes: 10 * 1024 * 1024,
        },
        aggregator: JobAggregator::new(search),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Adzuna stub server
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct StubRequest {
    pub country: String,
    pub page: u32,
    pub params: HashMap<String, String>,
}

impl StubRequest {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

#[derive(Default)]
struct StubInner {
    responses: Mutex<HashMap<String, (u16, String)>>,
    requests: Mutex<Vec<StubRequest>>,
}

/// Local HTTP server answering `/{country}/search/{page}` like Adzuna does.
/// Responses are keyed by the `what` parameter; unknown terms get an empty
/// result list.
pub struct StubAdzuna {
    addr: std::net::SocketAddr,
    inner: Arc<StubInner>,
}

impl StubAdzuna {
    pub async fn start() -> Self {
        let inner = Arc::new(StubInner::default());
        let app = Router::new()
            .route("/:country/search/:page", get(stub_search))
            .with_state(inner.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, inner }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn respond(&self, term: &str, status: u16, body: &str) {
        self.inner
            .responses
            .lock()
            .unwrap()
            .insert(term.to_string(), (status, body.to_string()));
    }

    pub fn requests(&self) -> Vec<StubRequest> {
        self.inner.requests.lock().unwrap().clone()
    }
}

async fn stub_search(
    State(inner): State<Arc<StubInner>>,
    Path((country, page)): Path<(String, u32)>,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, String) {
    let term = params.get("what").cloned().unwrap_or_default();
    inner.requests.lock().unwrap().push(StubRequest {
        country,
        page,
        params,
    });

    let (status, body) = inner
        .responses
        .lock()
        .unwrap()
        .get(&term)
        .cloned()
        .unwrap_or((200, r#"{"results": []}"#.to_string()));
    (StatusCode::from_u16(status).unwrap(), body)
}

/// URL of a loopback port with nothing listening on it.
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}
