use crate::harness::http::{RawRequest, RawResponse, read_request, write_response};
use crate::harness::install_capture;
use gateadmin_core::conf::{ClientConfig, Credentials};
use gateadmin_core::{ClientRegistry, ConfigRepository, Session};
use serde_json::{Value, json};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};
use url::Url;

const TOKEN: &str = "test-token";

/// One request as the mock server saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Default)]
struct AdminState {
    version: u64,
    credentials: Option<(String, String)>,
    entries: Vec<(String, Value)>,
    requests: Vec<RecordedRequest>,
}

/// In-process stand-in for the admin server.
///
/// Emulates the version control of the real server on `/config` and
/// `/plugin`: every POST/PUT/DELETE whose `X-Client-Version` differs from the
/// server version is answered with `409` and `X-Server-Version`, an accepted
/// write bumps the version, and GET responses carry the current version.
/// Authentication is checked only after the version. Entities are stored by
/// path.
pub struct MockAdmin {
    base_url: Url,
    state: Arc<Mutex<AdminState>>,
}

impl MockAdmin {
    pub fn start() -> Self {
        Self::start_with(None)
    }

    /// Requires a bearer token on `/config` and `/plugin` calls.
    pub fn start_secured(access_key: &str, secret_key: &str) -> Self {
        Self::start_with(Some((access_key.to_string(), secret_key.to_string())))
    }

    fn start_with(credentials: Option<(String, String)>) -> Self {
        install_capture();

        let port = free_port();
        let listener = TcpListener::bind(("127.0.0.1", port)).expect("failed to bind mock admin");
        let state = Arc::new(Mutex::new(AdminState {
            credentials,
            ..Default::default()
        }));

        let shared = state.clone();
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { continue };
                let state = shared.clone();
                thread::spawn(move || serve(stream, &state));
            }
        });

        let base_url = Url::parse(&format!("http://127.0.0.1:{port}")).expect("valid url");
        wait_for_server(&base_url);

        Self { base_url, state }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn config(&self) -> ClientConfig {
        let mut config = ClientConfig::new(self.base_url.clone());
        config.timeout = Duration::from_secs(2);
        config
    }

    /// A fresh client with its own registry and session.
    pub fn client(&self) -> ConfigRepository {
        self.client_with_session(Session::new())
    }

    pub fn client_with_session(&self, session: Session) -> ConfigRepository {
        let registry = ClientRegistry::with_session(session);
        registry
            .connect(&self.config())
            .expect("failed to connect to mock admin");
        registry.repository().expect("transport installed")
    }

    pub fn credentials(&self) -> Option<Credentials> {
        let state = self.state.lock().unwrap();
        state
            .credentials
            .as_ref()
            .map(|(a, s)| Credentials::new(a.clone(), s.clone()))
    }

    pub fn server_version(&self) -> u64 {
        self.state.lock().unwrap().version
    }

    /// Simulates a write by another client.
    pub fn bump_version(&self) -> u64 {
        let mut state = self.state.lock().unwrap();
        state.version += 1;
        state.version
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests()
            .last()
            .cloned()
            .expect("no request recorded")
    }

    pub fn stored(&self, key: &str) -> Option<Value> {
        let state = self.state.lock().unwrap();
        state
            .entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    }
}

fn serve(stream: TcpStream, state: &Mutex<AdminState>) {
    let Ok(raw) = read_request(&stream) else {
        return;
    };
    let response = {
        let mut state = state.lock().unwrap();
        handle(&mut state, &raw)
    };
    let _ = write_response(&stream, &response);
}

//-----------------------------------------------------------------------------
// Request handling
//-----------------------------------------------------------------------------

fn handle(state: &mut AdminState, raw: &RawRequest) -> RawResponse {
    let (path, query) = split_target(&raw.target);
    state.requests.push(RecordedRequest {
        method: raw.method.clone(),
        path: path.clone(),
        query: query.clone(),
        headers: raw.headers.clone(),
        body: String::from_utf8_lossy(&raw.body).into_owned(),
    });

    if path == "/auth/login" {
        return login(state, raw);
    }
    if !path.starts_with("/config") && !path.starts_with("/plugin") {
        return route(state, raw, &path, &query);
    }

    // Version control wraps authentication, as on the real server.
    let is_write = matches!(raw.method.as_str(), "POST" | "PUT" | "DELETE");
    if is_write {
        let client_version = raw
            .header("x-client-version")
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or_default();
        if client_version != state.version {
            return RawResponse::new(409).with_header("X-Server-Version", state.version);
        }
        state.version += 1;
    }
    let version = state.version;

    let response = if state.credentials.is_some() && !authorized(raw) {
        RawResponse::new(401)
    } else {
        route(state, raw, &path, &query)
    };
    if raw.method == "GET" {
        response.with_header("X-Server-Version", version)
    } else {
        response
    }
}

fn route(
    state: &mut AdminState,
    raw: &RawRequest,
    path: &str,
    query: &[(String, String)],
) -> RawResponse {
    let key = storage_key(path, query);
    match raw.method.as_str() {
        "GET" => RawResponse::json(&read(state, path, &key)),
        "POST" | "PUT" => {
            let Ok(value) = serde_json::from_slice::<Value>(&raw.body) else {
                return RawResponse::new(400);
            };
            match state.entries.iter().position(|(k, _)| *k == key) {
                Some(idx) => state.entries[idx].1 = value,
                None => state.entries.push((key, value)),
            }
            RawResponse::new(200)
        }
        "DELETE" => {
            let nested = match path.strip_suffix("/route/all") {
                Some(prefix) => format!("{prefix}/route/item/"),
                None => format!("{key}/"),
            };
            state
                .entries
                .retain(|(k, _)| *k != key && !k.starts_with(&nested));
            RawResponse::new(200)
        }
        _ => RawResponse::new(404),
    }
}

fn read(state: &AdminState, path: &str, key: &str) -> Value {
    if path == "/config/names" {
        let names: Vec<Value> = state
            .entries
            .iter()
            .filter_map(|(k, _)| {
                k.strip_prefix("/config/item/")
                    .and_then(|rest| rest.strip_suffix("/gateway"))
            })
            .map(|name| json!(name))
            .collect();
        return Value::Array(names);
    }
    if let Some(prefix) = path.strip_suffix("/route/names") {
        let base = format!("{prefix}/route/item/");
        return Value::Array(
            state
                .entries
                .iter()
                .filter_map(|(k, _)| k.strip_prefix(&base))
                .map(|name| json!(name))
                .collect(),
        );
    }
    if let Some(prefix) = path.strip_suffix("/route/all") {
        // Rendered by hand so the object keeps insertion order.
        let base = format!("{prefix}/route/item/");
        let members: Vec<String> = state
            .entries
            .iter()
            .filter_map(|(k, v)| k.strip_prefix(&base).map(|name| (name, v)))
            .map(|(name, v)| format!("{}:{}", json!(name), v))
            .collect();
        return serde_json::from_str(&format!("{{{}}}", members.join(",")))
            .unwrap_or(Value::Null);
    }
    match path {
        "/discovery/instance/health" => return json!({"local": true}),
        "/discovery/instance/list" => return json!(["local"]),
        "/discovery/backends" => return json!([]),
        _ => {}
    }
    if path.starts_with("/discovery/instance/reload/") {
        return Value::Null;
    }
    state
        .entries
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
        .unwrap_or(Value::Null)
}

fn login(state: &AdminState, raw: &RawRequest) -> RawResponse {
    let Ok(body) = serde_json::from_slice::<Value>(&raw.body) else {
        return RawResponse::new(400);
    };
    let given = (
        body["accessKey"].as_str().unwrap_or_default(),
        body["secretKey"].as_str().unwrap_or_default(),
    );
    // Without credentials the server signs no token and leaves every route open.
    let Some((access, secret)) = &state.credentials else {
        return RawResponse::new(200);
    };
    if given != (access.as_str(), secret.as_str()) {
        return RawResponse::new(401);
    }
    RawResponse::new(200).with_header(
        "Set-Cookie",
        format!("jwt={TOKEN}; path=/; HttpOnly; Max-Age=3600"),
    )
}

fn authorized(raw: &RawRequest) -> bool {
    raw.header("authorization") == Some(format!("Bearer {TOKEN}").as_str())
}

fn split_target(target: &str) -> (String, Vec<(String, String)>) {
    let (path, query) = target.split_once('?').unwrap_or((target, ""));
    let pairs = url::form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect();
    (path.to_string(), pairs)
}

/// Plugin entries live under one path, keyed further by their sorted query.
fn storage_key(path: &str, query: &[(String, String)]) -> String {
    if query.is_empty() {
        return path.to_string();
    }
    let mut pairs = query.to_vec();
    pairs.sort();
    let rendered: Vec<String> = pairs.iter().map(|(k, v)| format!("{k}={v}")).collect();
    format!("{path}?{}", rendered.join("&"))
}

//-----------------------------------------------------------------------------
// Startup helpers
//-----------------------------------------------------------------------------

/// Poll until the server accepts connections (or panic).
fn wait_for_server(base_url: &Url) {
    let addr = format!(
        "{}:{}",
        base_url.host_str().unwrap_or("127.0.0.1"),
        base_url.port().unwrap_or(80)
    );

    let deadline = Instant::now() + Duration::from_secs(2);

    loop {
        match TcpStream::connect(&addr) {
            Ok(_) => return,
            Err(_) => {
                if Instant::now() > deadline {
                    panic!("mock admin failed to start at {}", base_url);
                }
                thread::sleep(Duration::from_millis(25));
            }
        }
    }
}

/// Allocate a free port on localhost.
/// This is required to avoid port collisions when running tests in parallel.
fn free_port() -> u16 {
    std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}
