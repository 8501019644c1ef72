use serde_json::Value;
use std::thread::{self, JoinHandle};
use tiny_http::{Header, Response, Server};

/// What the fake API server saw.
#[derive(Debug)]
pub struct ReceivedRequest {
    pub url: String,
    pub authorization: Option<String>,
    pub accept: Option<String>,
}

/// Starts an API server on a random local port answering a single request.
/// Returns its base url and a handle yielding the request it received.
pub fn serve_once(status: u16, body: &str) -> (String, JoinHandle<ReceivedRequest>) {
    let server = Server::http("127.0.0.1:0").unwrap();
    let base = format!("http://{}", server.server_addr());
    let body = body.to_string();

    let handle = thread::spawn(move || {
        let request = server.recv().unwrap();

        let header = |name: &'static str| {
            request
                .headers()
                .iter()
                .find(|h| h.field.equiv(name))
                .map(|h| h.value.as_str().to_string())
        };
        let received = ReceivedRequest {
            url: request.url().to_string(),
            authorization: header("Authorization"),
            accept: header("Accept"),
        };

        let content_type =
            Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap();
        let response = Response::from_string(body)
            .with_status_code(status)
            .with_header(content_type);
        request.respond(response).unwrap();

        received
    });

    (base, handle)
}

pub fn managed_fields() -> Value {
    serde_json::json!([{
        "manager": "kubectl-client-side-apply",
        "operation": "Update",
        "apiVersion": "v1",
        "time": "2022-03-01T10:00:00Z",
        "fieldsType": "FieldsV1",
        "fieldsV1": {"f:metadata": {"f:labels": {".": {}, "f:app": {}}}}
    }])
}
