#![allow(dead_code)]

use axum::{
    Form, Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use axum_test::TestServer;
use chrono::{Days, Local, NaiveDate};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::TempDir;
use tokio::net::TcpListener;
use wedding_site::core::config::sample_wedding_config;
use wedding_site::{AppState, Config};

pub const PDF_BYTES: &[u8] = b"%PDF-1.4 test invitation";

/// Stand-in for the form endpoint and the spreadsheet script
#[derive(Clone, Default)]
pub struct FakeSheet {
    /// `None` makes the script endpoint answer 500
    rows: Arc<Mutex<Option<Value>>>,
    submissions: Arc<Mutex<Vec<HashMap<String, String>>>>,
    pub addr: Option<SocketAddr>,
}

impl FakeSheet {
    pub async fn start() -> Self {
        let mut sheet = FakeSheet::default();
        let app = Router::new()
            .route("/exec", get(sheet_rows))
            .route("/formResponse", post(form_response))
            .with_state(sheet.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake sheet");
        sheet.addr = Some(listener.local_addr().expect("Fake sheet has no address"));
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Fake sheet stopped");
        });
        sheet
    }

    fn base_url(&self) -> String {
        format!("http://{}", self.addr.expect("Fake sheet not started"))
    }

    pub fn script_url(&self) -> String {
        format!("{}/exec", self.base_url())
    }

    pub fn form_url(&self) -> String {
        format!("{}/formResponse", self.base_url())
    }

    /// Serves `rows` as `{ "GoogleSheetData": rows }`
    pub fn set_rows(&self, rows: Value) {
        *self.rows.lock().unwrap() = Some(rows);
    }

    pub fn fail(&self) {
        *self.rows.lock().unwrap() = None;
    }

    pub fn submissions(&self) -> Vec<HashMap<String, String>> {
        self.submissions.lock().unwrap().clone()
    }

    /// Waits for the background form post to arrive
    pub async fn wait_for_submissions(&self, count: usize) -> Vec<HashMap<String, String>> {
        for _ in 0..50 {
            let submissions = self.submissions();
            if submissions.len() >= count {
                return submissions;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        self.submissions()
    }
}

async fn sheet_rows(State(sheet): State<FakeSheet>) -> Response {
    let rows = sheet.rows.lock().unwrap().clone();
    match rows {
        Some(rows) => Json(json!({ "GoogleSheetData": rows })).into_response(),
        None => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

async fn form_response(
    State(sheet): State<FakeSheet>,
    Form(form): Form<HashMap<String, String>>,
) -> StatusCode {
    sheet.submissions.lock().unwrap().push(form);
    StatusCode::OK
}

/// Header row plus two responses
pub fn sample_rows() -> Value {
    json!([
        ["Timestamp", "Full Name", "Email", "Attending", "Number Of Guests", "Additional Guests", "Dietary Restrictions", "Song Request", "Message"],
        ["7/1/2027 10:00:00", "Jane Doe", "jane@example.com", "Yes", 2, "[{\"name\":\"Sam Doe\"}]", "Vegetarian", "", "Can't wait!"],
        ["7/2/2027 11:30:00", "John Roe", "john@example.com", "No", "1", "", "", "", ""]
    ])
}

pub struct TestContext {
    pub state: Arc<AppState>,
    pub server: TestServer,
    pub sheet: FakeSheet,
    pub dir: TempDir,
}

pub fn days_from_today(days: i64) -> NaiveDate {
    let today = Local::now().date_naive();
    if days >= 0 {
        today + Days::new(days as u64)
    } else {
        today - Days::new(days.unsigned_abs())
    }
}

/// State wired to a fresh fake sheet and a temporary cache directory
pub async fn create_test_context(rsvp_deadline: NaiveDate) -> TestContext {
    let sheet = FakeSheet::start().await;
    sheet.set_rows(sample_rows());

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let public_dir = dir.path().join("public");
    std::fs::create_dir_all(&public_dir).expect("Failed to create public dir");
    std::fs::write(public_dir.join("index.html"), "<h1>Lance & Rosa</h1>")
        .expect("Failed to write index.html");
    let invitation_pdf_path = dir.path().join("invitation.pdf");
    std::fs::write(&invitation_pdf_path, PDF_BYTES).expect("Failed to write invitation");

    let config = Config {
        public_dir,
        invitation_pdf_path,
        cache_dir: dir.path().join("data"),
        remote_timeout: Duration::from_secs(2),
        refresh_delay: None,
        simulated_latency: Duration::ZERO,
        ..Config::default()
    };

    let mut site = sample_wedding_config().expect("Sample config must parse");
    site.wedding_details.rsvp_deadline = rsvp_deadline;
    site.rsvp_config.google_script_url = sheet.script_url();
    site.rsvp_config.google_form_url = sheet.form_url();

    let state = Arc::new(AppState::new(config, site).expect("Failed to build state"));
    let server = create_test_server(state.clone());

    TestContext {
        state,
        server,
        sheet,
        dir,
    }
}

/// Context whose RSVP deadline is a month away
pub async fn open_context() -> TestContext {
    create_test_context(days_from_today(30)).await
}

pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = wedding_site::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

pub fn attending_form(name: &str, email: &str, guest_count: u32) -> Value {
    json!({
        "name": name,
        "email": email,
        "attending": "yes",
        "guestCount": guest_count.to_string(),
        "dietaryRestrictions": "None",
        "message": "See you there"
    })
}
