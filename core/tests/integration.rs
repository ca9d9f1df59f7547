//! Blocking calls against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port in a background thread with its
//! own runtime, then drives the blocking `JsonService` methods over real
//! HTTP. DTOs are declared here independently of the server's so schema
//! drift shows up as a failure.

use std::net::SocketAddr;

use json_http_client::{ClientError, JsonHttpClient, JsonRequest, JsonService, Reply};
use mock_server::Inspection;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
struct Item {
    id: u64,
    name: String,
}

#[derive(Serialize)]
struct NewItem {
    name: String,
}

fn start_server(seed: Vec<mock_server::Item>) -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::serve(listener, mock_server::app_with(seed)).await
        })
        .unwrap();
    });

    addr
}

fn seeded(count: u64) -> Vec<mock_server::Item> {
    (1..=count)
        .map(|id| mock_server::Item {
            id,
            name: ((b'a' + (id - 1) as u8) as char).to_string(),
        })
        .collect()
}

fn client_for(addr: SocketAddr) -> JsonHttpClient {
    JsonHttpClient::new(format!("http://{addr}/"))
}

#[test]
fn get_decodes_success_body() {
    let client = client_for(start_server(seeded(1)));

    let items: Vec<Item> = client.get(&client.endpoint("api/items")).unwrap();

    assert_eq!(
        items,
        vec![Item {
            id: 1,
            name: "a".to_string()
        }]
    );
}

#[test]
fn get_non_success_returns_default() {
    let client = client_for(start_server(Vec::new()));

    for code in [400, 404, 500] {
        let items: Vec<Item> = client.get(&client.endpoint(&format!("status/{code}"))).unwrap();
        assert!(items.is_empty(), "status {code} should yield an empty list");
    }

    let missing: Option<Item> = client.get(&client.endpoint("api/items/99")).unwrap();
    assert!(missing.is_none());
}

#[test]
fn post_creates_and_returns_item() {
    let client = client_for(start_server(seeded(4)));

    let created: Item = client
        .post(&client.endpoint("api/items"), &NewItem { name: "x".to_string() })
        .unwrap();

    assert_eq!(
        created,
        Item {
            id: 5,
            name: "x".to_string()
        }
    );
}

#[test]
fn post_sends_json_body_and_headers() {
    let client = client_for(start_server(Vec::new()));

    let seen: Inspection = client
        .post(&client.endpoint("inspect"), &NewItem { name: "x".to_string() })
        .unwrap();

    assert_eq!(seen.method, "POST");
    assert_eq!(seen.accept.as_deref(), Some("application/json"));
    assert_eq!(
        seen.content_type.as_deref(),
        Some("application/json; charset=utf-8")
    );
    assert_eq!(seen.body, Some(serde_json::json!({"name": "x"})));
}

#[test]
fn get_sends_accept_header_without_body() {
    let client = client_for(start_server(Vec::new()));

    let seen: Inspection = client.get(&client.endpoint("inspect")).unwrap();

    assert_eq!(seen.method, "GET");
    assert_eq!(seen.accept.as_deref(), Some("application/json"));
    assert!(seen.body.is_none());
}

#[test]
fn put_round_trips_nested_payload() {
    let client = client_for(start_server(Vec::new()));
    let payload = serde_json::json!({
        "name": "ünïcödé",
        "tags": ["a", "b"],
        "nested": {"n": 1.5, "flag": true, "none": null}
    });

    let seen: Inspection = client.put(&client.endpoint("inspect"), &payload).unwrap();

    assert_eq!(seen.method, "PUT");
    assert_eq!(
        seen.content_type.as_deref(),
        Some("application/json; charset=utf-8")
    );
    assert_eq!(seen.body, Some(payload));
}

#[test]
fn put_updates_existing_and_defaults_on_missing() {
    let client = client_for(start_server(seeded(1)));

    let updated: Item = client
        .put(&client.endpoint("api/items/1"), &NewItem { name: "b".to_string() })
        .unwrap();
    assert_eq!(updated.name, "b");

    let missing: Item = client
        .put(&client.endpoint("api/items/7"), &NewItem { name: "b".to_string() })
        .unwrap();
    assert_eq!(missing, Item::default());
}

#[test]
fn post_and_put_non_success_return_default() {
    let client = client_for(start_server(Vec::new()));
    let payload = NewItem { name: "x".to_string() };

    for code in [400, 404, 500] {
        let url = client.endpoint(&format!("status/{code}"));

        let created: Item = client.post(&url, &payload).unwrap();
        assert_eq!(created, Item::default(), "POST status {code}");

        let updated: Vec<Item> = client.put(&url, &payload).unwrap();
        assert!(updated.is_empty(), "PUT status {code}");
    }
}

/// Over the 10 MiB default body cap of the blocking transport.
const LARGE_BODY_LEN: usize = 11 * 1024 * 1024;

#[test]
fn large_body_decodes_like_the_async_variant() {
    let client = client_for(start_server(Vec::new()));
    let url = client.endpoint(&format!("large/{LARGE_BODY_LEN}"));

    let blocking: String = client.get(&url).unwrap();

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();
    let non_blocking: String = rt.block_on(client.get_async(&url)).unwrap();

    assert_eq!(blocking.len(), LARGE_BODY_LEN);
    assert_eq!(blocking, non_blocking);
}

#[test]
fn malformed_success_body_is_an_error() {
    let client = client_for(start_server(Vec::new()));

    let err = client.get::<Item>(&client.endpoint("malformed")).unwrap_err();

    assert!(matches!(err, ClientError::Deserialization(_)), "got {err}");
}

#[test]
fn wrong_shape_is_an_error() {
    let client = client_for(start_server(seeded(1)));

    let err = client.get::<Item>(&client.endpoint("api/items")).unwrap_err();

    assert!(err.is_deserialization(), "got {err}");
}

#[test]
fn no_content_is_a_success_with_undecodable_body() {
    let client = client_for(start_server(Vec::new()));

    let err = client
        .get::<Option<Item>>(&client.endpoint("status/204"))
        .unwrap_err();

    assert!(err.is_deserialization(), "got {err}");
}

#[test]
fn send_keeps_the_status() {
    let client = client_for(start_server(Vec::new()));

    let reply: Reply<Vec<Item>> = client
        .send(JsonRequest::get(client.endpoint("status/404")))
        .unwrap();
    assert_eq!(reply, Reply::NonSuccess { status: 404 });

    let reply: Reply<Vec<Item>> = client
        .send(JsonRequest::get(client.endpoint("api/items")))
        .unwrap();
    assert_eq!(reply, Reply::Success(Vec::new()));
}

#[test]
fn connection_refused_is_a_transport_failure() {
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let client = client_for(addr);

    let err = client.get::<Vec<Item>>(&client.endpoint("api/items")).unwrap_err();

    assert!(err.is_transport(), "got {err}");
}

#[test]
fn base_url_can_be_changed_between_calls() {
    let first = start_server(seeded(1));
    let second = start_server(seeded(2));
    let mut client = client_for(first);

    let items: Vec<Item> = client.get(&client.endpoint("api/items")).unwrap();
    assert_eq!(items.len(), 1);

    client.set_url_service(format!("http://{second}/"));
    let items: Vec<Item> = client.get(&client.endpoint("api/items")).unwrap();
    assert_eq!(items.len(), 2);
}
