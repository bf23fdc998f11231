//! An in-memory api server behind a real `kube::Client`.
#![allow(dead_code)]

use std::{
    collections::{BTreeMap, HashSet},
    convert::Infallible,
    sync::{Arc, Mutex},
};

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::{Method, Request, Response, StatusCode};
use serde_json::{json, Value};

/// `(namespace, plural, name)`
type Key = (String, String, String);

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub label_selector: Option<String>,
    pub field_selector: Option<String>,
}

#[derive(Default)]
struct State {
    objects: BTreeMap<Key, Value>,
    requests: Vec<RecordedRequest>,
    failing_lists: bool,
    failing_deletes: HashSet<String>,
    resource_version: u64,
}

#[derive(Clone, Default)]
pub struct FakeApiServer {
    state: Arc<Mutex<State>>,
}

impl FakeApiServer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn client(&self) -> kube::Client {
        let server = self.clone();
        let service = tower::service_fn(move |request: Request<kube::client::Body>| {
            let server = server.clone();
            async move { Ok::<_, Infallible>(server.handle(request).await) }
        });
        kube::Client::new(service, "default")
    }

    /// Store an object as-is, bypassing the client.
    pub fn seed(&self, namespace: &str, plural: &str, object: Value) {
        let name = object["metadata"]["name"].as_str().unwrap_or_default().to_string();
        self.lock().objects.insert((namespace.to_string(), plural.to_string(), name), object);
    }

    pub fn stored(&self, namespace: &str, plural: &str, name: &str) -> Option<Value> {
        self.lock().objects.get(&(namespace.to_string(), plural.to_string(), name.to_string())).cloned()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.lock().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.lock().requests.len()
    }

    /// Every list answers 500 from now on.
    pub fn fail_lists(&self) {
        self.lock().failing_lists = true;
    }

    /// Deleting `name` answers 200 with a `Failure` status.
    pub fn fail_delete_of(&self, name: &str) {
        self.lock().failing_deletes.insert(name.to_string());
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().expect("poisoned fake api server")
    }

    async fn handle(&self, request: Request<kube::client::Body>) -> Response<Full<Bytes>> {
        let (parts, body) = request.into_parts();
        let body = body.collect().await.map(|c| c.to_bytes()).unwrap_or_default();
        let query: BTreeMap<String, String> = parts.uri.query().map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect()).unwrap_or_default();

        let mut state = self.lock();
        state.requests.push(RecordedRequest {
            method: parts.method.clone(),
            path: parts.uri.path().to_string(),
            label_selector: query.get("labelSelector").cloned(),
            field_selector: query.get("fieldSelector").cloned(),
        });

        let segments: Vec<&str> = parts.uri.path().split('/').filter(|s| !s.is_empty()).collect();
        let Some(position) = segments.iter().position(|s| *s == "namespaces") else {
            return status(StatusCode::NOT_FOUND, "NotFound", "unknown path");
        };
        let (Some(namespace), Some(plural)) = (segments.get(position + 1), segments.get(position + 2)) else {
            return status(StatusCode::NOT_FOUND, "NotFound", "unknown path");
        };
        let (namespace, plural) = (namespace.to_string(), plural.to_string());
        let name = segments.get(position + 3).map(|s| s.to_string());

        match (parts.method, name) {
            (Method::GET, None) => {
                if state.failing_lists {
                    return status(StatusCode::INTERNAL_SERVER_ERROR, "InternalError", "etcd unavailable");
                }
                let items: Vec<Value> = state
                    .objects
                    .iter()
                    // newest names first, the client has to sort
                    .rev()
                    .filter(|((ns, p, _), _)| *ns == namespace && *p == plural)
                    .map(|(_, object)| object)
                    .filter(|object| matches_selector(object, query.get("labelSelector"), |o, k| o["metadata"]["labels"][k].as_str().map(str::to_string)))
                    .filter(|object| matches_selector(object, query.get("fieldSelector"), field_value))
                    .cloned()
                    .collect();
                ok(StatusCode::OK, json!({ "apiVersion": "v1", "kind": "List", "metadata": { "resourceVersion": "" }, "items": items }))
            }
            (Method::GET, Some(name)) => match state.objects.get(&(namespace, plural.clone(), name.clone())) {
                Some(object) => ok(StatusCode::OK, object.clone()),
                None => not_found(&plural, &name),
            },
            (Method::POST, None) => {
                let Ok(mut object) = serde_json::from_slice::<Value>(&body) else {
                    return status(StatusCode::BAD_REQUEST, "BadRequest", "malformed body");
                };
                let name = object["metadata"]["name"].as_str().unwrap_or_default().to_string();
                let key = (namespace, plural.clone(), name.clone());
                if state.objects.contains_key(&key) {
                    return status(StatusCode::CONFLICT, "AlreadyExists", &format!("{plural} \"{name}\" already exists"));
                }
                state.resource_version += 1;
                object["metadata"]["resourceVersion"] = json!(state.resource_version.to_string());
                state.objects.insert(key, object.clone());
                ok(StatusCode::CREATED, object)
            }
            (Method::PUT, Some(name)) => {
                let Ok(mut object) = serde_json::from_slice::<Value>(&body) else {
                    return status(StatusCode::BAD_REQUEST, "BadRequest", "malformed body");
                };
                let key = (namespace, plural.clone(), name.clone());
                if !state.objects.contains_key(&key) {
                    return not_found(&plural, &name);
                }
                state.resource_version += 1;
                object["metadata"]["resourceVersion"] = json!(state.resource_version.to_string());
                state.objects.insert(key, object.clone());
                ok(StatusCode::OK, object)
            }
            (Method::DELETE, Some(name)) => {
                if state.failing_deletes.contains(&name) {
                    return ok(
                        StatusCode::OK,
                        json!({ "kind": "Status", "apiVersion": "v1", "metadata": {}, "status": "Failure", "reason": "Conflict", "message": "finalizer refused", "code": 409 }),
                    );
                }
                match state.objects.remove(&(namespace, plural.clone(), name.clone())) {
                    Some(_) => ok(
                        StatusCode::OK,
                        json!({ "kind": "Status", "apiVersion": "v1", "metadata": {}, "status": "Success", "details": { "name": name, "kind": plural } }),
                    ),
                    None => not_found(&plural, &name),
                }
            }
            _ => status(StatusCode::METHOD_NOT_ALLOWED, "MethodNotAllowed", "unsupported"),
        }
    }
}

fn matches_selector(object: &Value, selector: Option<&String>, value_of: impl Fn(&Value, &str) -> Option<String>) -> bool {
    let Some(selector) = selector.filter(|s| !s.is_empty()) else {
        return true;
    };
    selector.split(',').all(|fragment| match fragment.split_once('=') {
        Some((key, expected)) => value_of(object, key).as_deref() == Some(expected),
        None => false,
    })
}

fn field_value(object: &Value, path: &str) -> Option<String> {
    path.split('.').try_fold(object, |value, segment| value.get(segment)).and_then(Value::as_str).map(str::to_string)
}

fn ok(code: StatusCode, body: Value) -> Response<Full<Bytes>> {
    Response::builder()
        .status(code)
        .header("content-type", "application/json")
        .body(Full::new(Bytes::from(body.to_string())))
        .expect("invalid response")
}

fn not_found(plural: &str, name: &str) -> Response<Full<Bytes>> {
    status(StatusCode::NOT_FOUND, "NotFound", &format!("{plural} \"{name}\" not found"))
}

fn status(code: StatusCode, reason: &str, message: &str) -> Response<Full<Bytes>> {
    ok(
        code,
        json!({ "kind": "Status", "apiVersion": "v1", "metadata": {}, "status": "Failure", "message": message, "reason": reason, "code": code.as_u16() }),
    )
}
