//! Database endpoints.

use notionkit::{
    CreateDatabaseParameters, ListDatabasesParameters, QueryDatabaseParameters,
    UpdateDatabaseParameters,
};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::common::client;

#[tokio::test]
async fn test_query_database_filter_properties_in_query_string() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/databases/db1/query"))
        .and(query_param("filter_properties", "title"))
        .and(body_json(json!({
            "sorts": [{"property": "Due", "direction": "ascending"}],
            "page_size": 25
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "results": [{"object": "page", "id": "p1"}],
            "next_cursor": null,
            "has_more": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let result: Value = client
        .databases()
        .query(&QueryDatabaseParameters {
            database_id: "db1".into(),
            filter_properties: Some(vec!["title".into()]),
            sorts: Some(vec![json!({"property": "Due", "direction": "ascending"})]),
            page_size: Some(25),
            ..Default::default()
        })
        .await
        .expect("query should succeed");

    assert_eq!(result["results"][0]["id"], "p1");
}

#[tokio::test]
async fn test_query_database_without_arguments_sends_empty_object() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/databases/db1/query"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let _: Value = client
        .databases()
        .query(&QueryDatabaseParameters {
            database_id: "db1".into(),
            ..Default::default()
        })
        .await
        .expect("query should succeed");
}

#[tokio::test]
async fn test_list_databases_pagination_in_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/databases"))
        .and(query_param("start_cursor", "cur1"))
        .and(query_param("page_size", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let _: Value = client
        .databases()
        .list(&ListDatabasesParameters {
            start_cursor: Some("cur1".into()),
            page_size: Some(2),
            ..Default::default()
        })
        .await
        .expect("list should succeed");

    let received = server.received_requests().await.unwrap();
    assert!(received[0].body.is_empty());
}

#[tokio::test]
async fn test_create_database() {
    let server = MockServer::start().await;

    let parent = json!({"type": "page_id", "page_id": "page1"});
    let properties = json!({"Name": {"title": {}}});
    let title = json!([{"type": "text", "text": {"content": "Tasks"}}]);

    Mock::given(method("POST"))
        .and(path("/v1/databases"))
        .and(body_json(json!({
            "parent": parent.clone(),
            "properties": properties.clone(),
            "title": title.clone(),
            "is_inline": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "database",
            "id": "db2"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let db: Value = client
        .databases()
        .create(&CreateDatabaseParameters {
            parent,
            properties,
            title: title.as_array().cloned(),
            is_inline: Some(true),
            ..Default::default()
        })
        .await
        .expect("create should succeed");

    assert_eq!(db["id"], "db2");
}

#[tokio::test]
async fn test_update_database_archives() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/v1/databases/db1"))
        .and(body_json(json!({"archived": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "database",
            "archived": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let db: Value = client
        .databases()
        .update(&UpdateDatabaseParameters {
            database_id: "db1".into(),
            archived: Some(true),
            ..Default::default()
        })
        .await
        .expect("update should succeed");

    assert_eq!(db["archived"], true);
}
