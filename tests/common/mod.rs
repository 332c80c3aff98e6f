//! In-process mock of the Phlox API, served by axum on a random local port.
//!
//! Gallery indices 400, 404 and 500 answer with that status and a
//! `{"message": "mock <status>"}` body on every GET route. Index 999 answers
//! 200 with a body that matches no schema.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub const MALFORMED_INDEX: u64 = 999;
pub const LIST_TOTAL: u64 = 300;
pub const NO_MATCH_TERM: &str = "language:klingon";

/// Everything the mock saw, in arrival order.
#[derive(Clone, Default)]
pub struct Recorded {
    pub user_agents: Arc<Mutex<Vec<String>>>,
    pub bodies: Arc<Mutex<Vec<Value>>>,
}

impl Recorded {
    pub fn user_agents(&self) -> Vec<String> {
        self.user_agents.lock().unwrap().clone()
    }

    pub fn bodies(&self) -> Vec<Value> {
        self.bodies.lock().unwrap().clone()
    }

    fn see(&self, headers: &HeaderMap) {
        let ua = headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        self.user_agents.lock().unwrap().push(ua);
    }
}

// ─── Fixtures ────────────────────────────────────────────────────────────────

pub fn info_json(id: u64) -> Value {
    json!({
        "id": id,
        "title": format!("Gallery {id}"),
        "thumbnail": format!("https://tn.hitomi.la/bigtn/{id}.jpg"),
        "artist": ["someone"],
        "group": null,
        "type": "manga",
        "language": "korean",
        "series": [],
        "character": [],
        "tags": [
            {"tag": "sole female", "url": "/tag/female%3Asole%20female-all.html", "female": true, "male": false}
        ],
        "date": "2021-06-14 03:32:00-05"
    })
}

pub fn galleryinfo_json(id: u64) -> Value {
    json!({
        "date": "2021-06-14 03:32:00-05",
        "galleryurl": format!("/manga/gallery-{id}.html"),
        "id": id.to_string(),
        "japanese_title": "ギャラリー",
        "language": "korean",
        "language_localname": "한국어",
        "language_url": "/index-korean.html",
        "title": format!("Gallery {id}"),
        "type": "manga",
        "video": null,
        "videofilename": null,
        "artists": [{"artist": "someone", "url": "/artist/someone-all.html"}],
        "characters": [],
        "files": [
            {"name": "01.jpg", "hash": "aa11", "width": 1280, "height": 1810, "hasavif": 1, "haswebp": 1},
            {"name": "02.jpg", "hash": "bb22", "width": 1280, "height": 1810, "hasavif": 1, "haswebp": 0}
        ],
        "groups": null,
        "languages": [],
        "parodys": [],
        "related": [id + 1],
        "scene_indexes": [],
        "tags": [{"tag": "full color", "url": "/tag/full%20color-all.html", "female": "", "male": ""}]
    })
}

pub fn files_json(id: u64) -> Value {
    json!({
        "files": [
            format!("https://a.hitomi.la/webp/{id}/03.webp"),
            format!("https://a.hitomi.la/webp/{id}/01.webp"),
            format!("https://a.hitomi.la/webp/{id}/02.webp")
        ]
    })
}

pub fn list_json(index: u64) -> Value {
    let list: Vec<Value> = (0..3).map(|i| info_json(index * 10 + i)).collect();
    json!({"list": list, "total": LIST_TOTAL})
}

// ─── Handlers ────────────────────────────────────────────────────────────────

type Reply = (StatusCode, Json<Value>);

fn ok(body: Value) -> Reply {
    (StatusCode::OK, Json(body))
}

fn fail(status: StatusCode, message: &str) -> Reply {
    (status, Json(json!({"message": message})))
}

/// Index-driven failures shared by every GET route.
fn scripted(index: u64) -> Option<Reply> {
    match index {
        400 | 404 | 500 => {
            let status = StatusCode::from_u16(index as u16).unwrap();
            Some(fail(status, &format!("mock {index}")))
        }
        MALFORMED_INDEX => Some(ok(json!({"unexpected": true}))),
        _ => None,
    }
}

async fn galleryinfo(
    State(rec): State<Recorded>,
    headers: HeaderMap,
    Path(index): Path<u64>,
) -> Reply {
    rec.see(&headers);
    scripted(index).unwrap_or_else(|| ok(galleryinfo_json(index)))
}

async fn image(State(rec): State<Recorded>, headers: HeaderMap, Path(index): Path<u64>) -> Reply {
    rec.see(&headers);
    scripted(index).unwrap_or_else(|| ok(files_json(index)))
}

async fn info(State(rec): State<Recorded>, headers: HeaderMap, Path(index): Path<u64>) -> Reply {
    rec.see(&headers);
    scripted(index).unwrap_or_else(|| ok(info_json(index)))
}

async fn list(State(rec): State<Recorded>, headers: HeaderMap, Path(index): Path<u64>) -> Reply {
    rec.see(&headers);
    scripted(index).unwrap_or_else(|| ok(list_json(index)))
}

fn query_terms(body: &Value) -> Vec<String> {
    body["query"]
        .as_array()
        .map(|q| q.iter().filter_map(|t| t.as_str().map(str::to_string)).collect())
        .unwrap_or_default()
}

async fn random(State(rec): State<Recorded>, headers: HeaderMap, Json(body): Json<Value>) -> Reply {
    rec.see(&headers);
    rec.bodies.lock().unwrap().push(body.clone());
    if query_terms(&body).iter().any(|t| t == NO_MATCH_TERM) {
        return fail(StatusCode::NOT_FOUND, "No galleries match the query");
    }
    ok(info_json(777))
}

/// One hit per query term; `count` echoes the offset so callers can see it
/// arrived.
async fn search(State(rec): State<Recorded>, headers: HeaderMap, Json(body): Json<Value>) -> Reply {
    rec.see(&headers);
    rec.bodies.lock().unwrap().push(body.clone());
    let terms = query_terms(&body);
    if terms.is_empty() {
        return fail(StatusCode::BAD_REQUEST, "query must not be empty");
    }
    let offset = body["offset"].as_u64().unwrap_or(0);
    let result: Vec<Value> = (0..terms.len() as u64).map(|i| info_json(100 + i)).collect();
    ok(json!({"result": result, "count": 1000 + offset}))
}

pub fn app(rec: Recorded) -> Router {
    Router::new()
        .route("/api/hitomi/galleryinfo/{index}", get(galleryinfo))
        .route("/api/hitomi/image/{index}", get(image))
        .route("/api/hitomi/info/{index}", get(info))
        .route("/api/hitomi/list/{index}", get(list))
        .route("/api/hitomi/random", post(random))
        .route("/api/hitomi/search", post(search))
        .with_state(rec)
}

/// Start the mock and return its base URL (with a trailing slash, which the
/// client must strip) and the request recorder.
pub async fn spawn() -> (String, Recorded) {
    let rec = Recorded::default();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = app(rec.clone());
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    (format!("http://{addr}/"), rec)
}
