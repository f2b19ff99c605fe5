//! End-to-end tests over a real TCP socket.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use customer_registry::{CustomerStore, Server, UpdatePolicy, api};
use serde_json::{Value, json};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::timeout;

struct TestServer {
    addr: SocketAddr,
    shutdown: oneshot::Sender<()>,
    handle: JoinHandle<Result<(), customer_registry::Error>>,
}

impl TestServer {
    async fn start(policy: UpdatePolicy) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let server = Server::from_listener(listener);
        let addr = server.local_addr().unwrap();
        let router = api::routes(Arc::new(CustomerStore::seeded(policy)));

        let (shutdown, rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(server.serve_with_shutdown(router, async {
            let _ = rx.await;
        }));

        Self { addr, shutdown, handle }
    }

    async fn send(&self, method: &str, path: &str, body: &str) -> (u16, String) {
        let mut stream = TcpStream::connect(self.addr).await.unwrap();
        let request = format!(
            "{method} {path} HTTP/1.1\r\n\
             host: {}\r\n\
             connection: close\r\n\
             content-type: application/json\r\n\
             content-length: {}\r\n\
             \r\n\
             {body}",
            self.addr,
            body.len(),
        );
        stream.write_all(request.as_bytes()).await.unwrap();

        let mut raw = Vec::new();
        stream.read_to_end(&mut raw).await.unwrap();
        let raw = String::from_utf8(raw).unwrap();
        let (head, body) = raw.split_once("\r\n\r\n").unwrap();
        let status = head.split_whitespace().nth(1).unwrap().parse().unwrap();
        (status, body.to_owned())
    }

    async fn send_json(&self, method: &str, path: &str, body: &str) -> (u16, Value) {
        let (status, body) = self.send(method, path, body).await;
        (status, serde_json::from_str(&body).unwrap())
    }

    async fn stop(self) {
        self.shutdown.send(()).unwrap();
        self.handle.await.unwrap().unwrap();
    }
}

fn ids(list: &Value) -> Vec<u64> {
    list.as_array().unwrap().iter().map(|c| c["id"].as_u64().unwrap()).collect()
}

#[tokio::test]
async fn create_delete_get_scenario() {
    let server = TestServer::start(UpdatePolicy::default()).await;

    let (status, created) = server
        .send_json("POST", "/customers", r#"{"name":"novo","site":"www.novo.com"}"#)
        .await;
    assert_eq!(status, 201);
    assert_eq!(created, json!({ "id": 6, "name": "novo", "site": "www.novo.com" }));

    let (status, body) = server.send_json("DELETE", "/customers/3", "").await;
    assert_eq!(status, 200);
    assert_eq!(body, json!({ "message": "Cliente removido com sucesso" }));

    let (status, list) = server.send_json("GET", "/customers", "").await;
    assert_eq!(status, 200);
    assert_eq!(ids(&list), [1, 2, 4, 5, 6]);

    let (status, body) = server.send("GET", "/customers/3", "").await;
    assert_eq!(status, 404);
    assert_eq!(body, "null");

    server.stop().await;
}

#[tokio::test]
async fn update_keeps_unsent_fields() {
    let server = TestServer::start(UpdatePolicy::default()).await;

    let (status, body) = server.send_json("PUT", "/customers/1", r#"{"name":"Z"}"#).await;
    assert_eq!(status, 200);
    assert_eq!(body, json!({ "id": 1, "name": "Z", "site": "www.google.com" }));

    let (status, body) = server.send_json("PUT", "/customers/1", r#"{"name":""}"#).await;
    assert_eq!(status, 200);
    assert_eq!(body["name"], "Z");

    let (status, body) = server.send_json("PUT", "/customers/9", r#"{"name":"Z"}"#).await;
    assert_eq!(status, 404);
    assert_eq!(body, json!({ "message": "Cliente não encontrado" }));

    server.stop().await;
}

#[tokio::test]
async fn presence_policy_clears_fields() {
    let server = TestServer::start(UpdatePolicy::Presence).await;

    let (status, body) = server.send_json("PUT", "/customers/2", r#"{"site":""}"#).await;
    assert_eq!(status, 200);
    assert_eq!(body, json!({ "id": 2, "name": "fulano", "site": "" }));

    server.stop().await;
}

#[tokio::test]
async fn unknown_routes_and_methods() {
    let server = TestServer::start(UpdatePolicy::default()).await;

    let (status, _) = server.send("GET", "/orders", "").await;
    assert_eq!(status, 404);

    let (status, _) = server.send("PATCH", "/customers/1", "{}").await;
    assert_eq!(status, 405);

    let (status, body) = server.send("GET", "/healthz", "").await;
    assert_eq!(status, 200);
    assert_eq!(body, "ok");

    server.stop().await;
}

#[tokio::test]
async fn malformed_body_is_rejected_without_side_effects() {
    let server = TestServer::start(UpdatePolicy::default()).await;

    let (status, body) = server.send_json("POST", "/customers", "{\"name\":").await;
    assert_eq!(status, 400);
    assert!(body["error"].is_string());

    let (_, list) = server.send_json("GET", "/customers", "").await;
    assert_eq!(ids(&list), [1, 2, 3, 4, 5]);

    server.stop().await;
}

#[tokio::test]
async fn shutdown_closes_idle_keep_alive_connections() {
    let server = TestServer::start(UpdatePolicy::default()).await;

    let mut stream = TcpStream::connect(server.addr).await.unwrap();
    let request = format!("GET /healthz HTTP/1.1\r\nhost: {}\r\n\r\n", server.addr);
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut raw = Vec::new();
    let mut buf = [0u8; 1024];
    while !raw.ends_with(b"\r\n\r\nok") {
        let n = stream.read(&mut buf).await.unwrap();
        assert!(n > 0, "connection closed before the response arrived");
        raw.extend_from_slice(&buf[..n]);
    }
    assert!(raw.starts_with(b"HTTP/1.1 200"));

    timeout(Duration::from_secs(5), server.stop())
        .await
        .expect("server did not stop while a keep-alive connection was open");

    let n = stream.read(&mut buf).await.unwrap_or(0);
    assert_eq!(n, 0);
}
