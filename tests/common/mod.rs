#![allow(dead_code)]

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, HeaderValue, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::thread;

/*-------------------------------------------------------------------------------------------------
  Mock Namikoda API
-------------------------------------------------------------------------------------------------*/

pub const API_KEY: &str = "aaaabbbb-cccc-dddd-eeee-ffffgggghhhh";

pub const DUMMY_SUCCESS: &str = r#"{ "ipv4s":[ "1.2.3.4/32" ], "ipv6s":[ "1111:222:3000::/44" ], "lastUpdate":"2017-01-01T00:00:00.000Z", "name":"Dummy success value", "owner":"public", "id":"dummy-success", "value":[ "1.2.3.4/32", "1111:222:3000::/44" ] }"#;

pub const OTHER_OWNER: &str = r#"{ "ipv4s":[ "5.6.7.8/32" ], "ipv6s":[ "5555:666:7000::/44" ], "lastUpdate":"2017-01-01T00:00:00.000Z", "name":"Dummy success value", "owner":"otherowner", "id":"dummy-success", "value":[ "5555:666:7000::/44", "5.6.7.8/32" ] }"#;

pub const ESCAPED: &str = r#"{ "ipv4s":[ "10.0.0.0/8" ], "ipv6s":[], "lastUpdate":"2018-06-30T12:00:00.000Z", "name":"Escaped id", "id":"a/b c", "value":[ "10.0.0.0/8" ] }"#;

pub const MALFORMED: &str = r#"{ "ipv4s":[ "1.2.3.4/32" "#;

/// Content-Type with a byte outside visible ASCII.
pub const LATIN1_CONTENT_TYPE: &[u8] = b"application/json\xe9";

type Requests = Arc<Mutex<Vec<String>>>;

/// An `axum` server on `127.0.0.1` serving the `ipsfor` routes used in tests. It runs on its own
/// tokio runtime in a background thread and records the raw path of every request it receives.
pub struct MockServer {
    address: SocketAddr,
    requests: Requests,
}

impl MockServer {
    pub fn start() -> Self {
        // Bound before returning so requests queue until the runtime accepts them.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind mock server");
        listener
            .set_nonblocking(true)
            .expect("non-blocking mock listener");
        let address = listener.local_addr().expect("mock server address");

        let requests: Requests = Arc::new(Mutex::new(Vec::new()));
        let app = router(Arc::clone(&requests));

        thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("mock server runtime");

            runtime.block_on(async move {
                let listener =
                    tokio::net::TcpListener::from_std(listener).expect("tokio mock listener");
                axum::serve(listener, app).await.expect("mock server");
            });
        });

        Self { address, requests }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.address)
    }

    /// Paths requested so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/*--------------------------------------------------------------------------------------
  Router
--------------------------------------------------------------------------------------*/

fn router(requests: Requests) -> Router {
    Router::new()
        .route("/v1/{owner}/ipsfor/{id}", get(ips_for))
        .fallback(not_found)
        .with_state(requests)
}

async fn ips_for(
    State(requests): State<Requests>,
    Path((owner, id)): Path<(String, String)>,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    record(&requests, &uri);
    if let Some(unauthorized) = check_api_key(&headers) {
        return unauthorized;
    }

    match (owner.as_str(), id.as_str()) {
        ("public", "dummy-success") => json(Some("application/json"), DUMMY_SUCCESS),
        ("otherowner", "dummy-success") => json(Some("application/json"), OTHER_OWNER),
        ("public", "a/b c") => json(Some("application/json"), ESCAPED),
        ("public", "dummy-no-content-type") => json(None, DUMMY_SUCCESS),
        ("public", "dummy-charset") => {
            json(Some("application/json; charset=utf-8"), DUMMY_SUCCESS)
        }
        ("public", "dummy-binary") => json(Some("application/octet-stream"), DUMMY_SUCCESS),
        ("public", "dummy-latin1") => {
            let mut response = json(None, DUMMY_SUCCESS);
            response.headers_mut().insert(
                CONTENT_TYPE,
                HeaderValue::from_bytes(LATIN1_CONTENT_TYPE).expect("obs-text header value"),
            );
            response
        }
        ("public", "dummy-malformed") => json(Some("application/json"), MALFORMED),
        ("public", "dummy-error") => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
        _ => (StatusCode::NOT_FOUND, format!("Not found: {}", uri.path())).into_response(),
    }
}

async fn not_found(State(requests): State<Requests>, uri: Uri, headers: HeaderMap) -> Response {
    record(&requests, &uri);
    check_api_key(&headers).unwrap_or_else(|| {
        (StatusCode::NOT_FOUND, format!("Not found: {}", uri.path())).into_response()
    })
}

/*--------------------------------------------------------------------------------------
  Helpers
--------------------------------------------------------------------------------------*/

fn record(requests: &Requests, uri: &Uri) {
    requests.lock().unwrap().push(uri.path().to_string());
}

fn check_api_key(headers: &HeaderMap) -> Option<Response> {
    let api_key = headers
        .get("x-namikoda-key")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    (api_key != API_KEY).then(|| {
        (
            StatusCode::UNAUTHORIZED,
            format!("Invalid auth header: {api_key}"),
        )
            .into_response()
    })
}

fn json(content_type: Option<&'static str>, body: &'static str) -> Response {
    let mut response = Response::new(Body::from(body));
    if let Some(content_type) = content_type {
        response
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    }
    response
}
