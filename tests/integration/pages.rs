//! Page endpoints.

use notionkit::{
    CreatePageParameters, RetrievePageParameters, RetrievePagePropertyParameters,
    UpdatePageParameters,
};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::common::client;

#[tokio::test]
async fn test_create_page_in_database() {
    let server = MockServer::start().await;

    let parent = json!({"database_id": "db1"});
    let properties = json!({
        "Name": {"title": [{"text": {"content": "Write tests"}}]}
    });

    Mock::given(method("POST"))
        .and(path("/v1/pages"))
        .and(body_json(json!({
            "parent": parent.clone(),
            "properties": properties.clone()
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "page",
            "id": "p1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let page: Value = client
        .pages()
        .create(&CreatePageParameters {
            parent,
            properties,
            ..Default::default()
        })
        .await
        .expect("create should succeed");

    assert_eq!(page["id"], "p1");
}

#[tokio::test]
async fn test_retrieve_page_repeats_filter_properties() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/pages/p1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"object": "page"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let _: Value = client
        .pages()
        .retrieve(&RetrievePageParameters {
            page_id: "p1".into(),
            filter_properties: Some(vec!["title".into(), "abc".into()]),
            ..Default::default()
        })
        .await
        .expect("retrieve should succeed");

    let received = server.received_requests().await.unwrap();
    let values: Vec<String> = received[0]
        .url
        .query_pairs()
        .filter(|(k, _)| k == "filter_properties")
        .map(|(_, v)| v.into_owned())
        .collect();
    assert_eq!(values, vec!["title", "abc"]);
}

#[tokio::test]
async fn test_update_page_properties() {
    let server = MockServer::start().await;

    let properties = json!({"Done": {"checkbox": true}});

    Mock::given(method("PATCH"))
        .and(path("/v1/pages/p1"))
        .and(body_json(json!({"properties": properties.clone()})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"object": "page"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let _: Value = client
        .pages()
        .update(&UpdatePageParameters {
            page_id: "p1".into(),
            properties: Some(properties),
            ..Default::default()
        })
        .await
        .expect("update should succeed");
}

#[tokio::test]
async fn test_retrieve_page_property_item() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/pages/p1/properties/title"))
        .and(query_param("page_size", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "results": [],
            "type": "property_item"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let item: Value = client
        .pages()
        .properties()
        .retrieve(&RetrievePagePropertyParameters {
            page_id: "p1".into(),
            property_id: "title".into(),
            page_size: Some(5),
            ..Default::default()
        })
        .await
        .expect("retrieve property should succeed");

    assert_eq!(item["type"], "property_item");
}
