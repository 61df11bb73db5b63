//! Block endpoints.

use notionkit::{
    AppendBlockChildrenParameters, DeleteBlockParameters, ListBlockChildrenParameters,
    RetrieveBlockParameters, UpdateBlockParameters,
};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::common::client;

#[tokio::test]
async fn test_retrieve_block() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/blocks/b1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "block",
            "id": "b1",
            "type": "divider",
            "divider": {}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let block: Value = client(&server)
        .blocks()
        .retrieve(&RetrieveBlockParameters {
            block_id: "b1".into(),
            ..Default::default()
        })
        .await
        .expect("retrieve should succeed");

    assert_eq!(block["type"], "divider");
}

#[tokio::test]
async fn test_append_children() {
    let server = MockServer::start().await;

    let paragraph = json!({
        "object": "block",
        "type": "paragraph",
        "paragraph": {"rich_text": [{"type": "text", "text": {"content": "hi"}}]}
    });

    Mock::given(method("PATCH"))
        .and(path("/v1/blocks/b1/children"))
        .and(body_json(json!({
            "children": [paragraph.clone()],
            "after": "b0"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "results": [paragraph.clone()]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let result: Value = client
        .blocks()
        .children()
        .append(&AppendBlockChildrenParameters {
            block_id: "b1".into(),
            children: vec![paragraph],
            after: Some("b0".into()),
            ..Default::default()
        })
        .await
        .expect("append should succeed");

    assert_eq!(result["results"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_children() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/blocks/b1/children"))
        .and(query_param("page_size", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "results": [],
            "has_more": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let _: Value = client
        .blocks()
        .children()
        .list(&ListBlockChildrenParameters {
            block_id: "b1".into(),
            page_size: Some(100),
            ..Default::default()
        })
        .await
        .expect("list should succeed");
}

#[tokio::test]
async fn test_update_block_content_keys() {
    let server = MockServer::start().await;

    let to_do = json!({"rich_text": [], "checked": true});

    Mock::given(method("PATCH"))
        .and(path("/v1/blocks/b1"))
        .and(body_json(json!({"to_do": to_do.clone()})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"object": "block"})))
        .expect(1)
        .mount(&server)
        .await;

    let mut content = serde_json::Map::new();
    content.insert("to_do".into(), to_do);
    content.insert("not_a_block_type".into(), json!("dropped"));

    let client = client(&server);
    let _: Value = client
        .blocks()
        .update(&UpdateBlockParameters {
            block_id: "b1".into(),
            content,
            ..Default::default()
        })
        .await
        .expect("update should succeed");
}

#[tokio::test]
async fn test_delete_block() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/blocks/b1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "block",
            "archived": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let block: Value = client
        .blocks()
        .delete(&DeleteBlockParameters {
            block_id: "b1".into(),
            ..Default::default()
        })
        .await
        .expect("delete should succeed");

    assert_eq!(block["archived"], true);
    let received = server.received_requests().await.unwrap();
    assert!(received[0].body.is_empty());
}
