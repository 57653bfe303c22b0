mod common;

use axum::http::{Method, StatusCode};
use common::{ADMIN, INVITED, USER, spawn_app};
use serde_json::{Value, json};

fn ids(list: &Value) -> Vec<i64> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_save_then_find() {
    let app = spawn_app().await;
    let maker = app.create_maker("Acme").await;

    let response = app
        .send(
            Method::POST,
            "/api/product/save",
            Some(ADMIN),
            Some(json!({ "name": "Anvil", "price": "9.99", "maker": { "id": maker } })),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    let id = response.json()["id"].as_i64().unwrap();

    let found = app.get(&format!("/api/product/find/{id}"), INVITED).await;
    assert_eq!(found.status, StatusCode::OK);
    assert_eq!(
        found.json(),
        json!({
            "id": id,
            "name": "Anvil",
            "price": 9.99,
            "maker": { "id": maker, "name": "Acme" }
        })
    );
}

#[tokio::test]
async fn test_price_keeps_full_precision() {
    let app = spawn_app().await;
    let maker = app.create_maker("Acme").await;
    let id = app
        .create_product("Gear", "12345678901234.123456789", maker)
        .await;

    let found = app.get(&format!("/api/product/find/{id}"), USER).await;
    let price = &found.json()["price"];
    assert!(price.is_number());
    assert_eq!(price.to_string(), "12345678901234.123456789");
    assert!(found.text().contains(r#""price":12345678901234.123456789"#));

    let created = app
        .send_raw(
            Method::POST,
            "/api/product/save",
            Some(ADMIN),
            Some(format!(
                r#"{{"name":"Cog","price":0.100000000000000000000000001,"maker":{{"id":{maker}}}}}"#
            )),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(
        created.json()["price"].to_string(),
        "0.100000000000000000000000001"
    );
}

#[tokio::test]
async fn test_save_requires_every_field() {
    let app = spawn_app().await;
    let maker = app.create_maker("Acme").await;

    let bodies = [
        json!({ "price": "1", "maker": { "id": maker } }),
        json!({ "name": " ", "price": "1", "maker": { "id": maker } }),
        json!({ "name": "Anvil", "maker": { "id": maker } }),
        json!({ "name": "Anvil", "price": null, "maker": { "id": maker } }),
        json!({ "name": "Anvil", "price": "1" }),
        json!({ "name": "Anvil", "price": "1", "maker": {} }),
        json!({ "name": "Anvil", "price": "not-a-number", "maker": { "id": maker } }),
    ];

    for body in bodies {
        let response = app
            .send(Method::POST, "/api/product/save", Some(ADMIN), Some(body.clone()))
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "body: {body}");
    }

    let listed = app.get("/api/product/findAll", ADMIN).await;
    assert_eq!(listed.json(), json!([]));
}

#[tokio::test]
async fn test_save_with_unknown_maker_is_a_server_error() {
    let app = spawn_app().await;

    let response = app
        .send(
            Method::POST,
            "/api/product/save",
            Some(ADMIN),
            Some(json!({ "name": "Orphan", "price": "1", "maker": { "id": 4040 } })),
        )
        .await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.json()["success"], json!(false));

    let listed = app.get("/api/product/findAll", ADMIN).await;
    assert_eq!(listed.json(), json!([]));
}

#[tokio::test]
async fn test_find_unknown_and_invalid_ids() {
    let app = spawn_app().await;

    let unknown = app.get("/api/product/find/5", USER).await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);

    let invalid = app.get("/api/product/find/five", USER).await;
    assert_eq!(invalid.status, StatusCode::BAD_REQUEST);

    let beyond_i32 = app.get("/api/product/find/3000000000", USER).await;
    assert_eq!(beyond_i32.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_overwrites_every_field() {
    let app = spawn_app().await;
    let acme = app.create_maker("Acme").await;
    let globex = app.create_maker("Globex").await;
    let id = app.create_product("Anvil", "19.99", acme).await;

    let response = app
        .send(
            Method::PUT,
            &format!("/api/product/update/{id}"),
            Some(ADMIN),
            Some(json!({ "name": "Heavy Anvil", "price": 25, "maker": { "id": globex } })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text(), "Registro Actualizado");

    let found = app.get(&format!("/api/product/find/{id}"), ADMIN).await.json();
    assert_eq!(found["name"], json!("Heavy Anvil"));
    assert_eq!(found["price"], json!(25));
    assert_eq!(found["maker"], json!({ "id": globex, "name": "Globex" }));

    let old_owner = app.get(&format!("/api/maker/find/{acme}"), ADMIN).await;
    assert_eq!(old_owner.json()["productList"], json!([]));
}

#[tokio::test]
async fn test_update_unknown_id_creates_nothing() {
    let app = spawn_app().await;
    let maker = app.create_maker("Acme").await;

    let response = app
        .send(
            Method::PUT,
            "/api/product/update/31",
            Some(ADMIN),
            Some(json!({ "name": "Ghost", "price": "1", "maker": { "id": maker } })),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let listed = app.get("/api/product/findAll", ADMIN).await;
    assert_eq!(listed.json(), json!([]));
}

#[tokio::test]
async fn test_delete_product() {
    let app = spawn_app().await;
    let maker = app.create_maker("Acme").await;
    let id = app.create_product("Anvil", "19.99", maker).await;

    let forbidden = app
        .send(
            Method::DELETE,
            &format!("/api/product/delete/{id}"),
            Some(INVITED),
            None,
        )
        .await;
    assert_eq!(forbidden.status, StatusCode::FORBIDDEN);

    let response = app
        .send(
            Method::DELETE,
            &format!("/api/product/delete/{id}"),
            Some(ADMIN),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text(), "Registro Eliminado");

    let found = app.get(&format!("/api/product/find/{id}"), ADMIN).await;
    assert_eq!(found.status, StatusCode::NOT_FOUND);

    let owner = app.get(&format!("/api/maker/find/{maker}"), ADMIN).await;
    assert_eq!(owner.status, StatusCode::OK);

    let invalid = app
        .send(Method::DELETE, "/api/product/delete/x1", Some(ADMIN), None)
        .await;
    assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_find_by_price_in_range_is_inclusive() {
    let app = spawn_app().await;
    let maker = app.create_maker("Acme").await;
    let cheap = app.create_product("Bolt", "5", maker).await;
    let mid = app.create_product("Anvil", "10.00", maker).await;
    app.create_product("Rocket", "15.50", maker).await;

    let found = app
        .get("/api/product/findByPriceInRange?minPrice=5&maxPrice=10", USER)
        .await;
    assert_eq!(found.status, StatusCode::OK);
    assert_eq!(ids(&found.json()), [cheap, mid]);

    let none = app
        .get("/api/product/findByPriceInRange?minPrice=100&maxPrice=200", USER)
        .await;
    assert_eq!(none.json(), json!([]));
}

#[tokio::test]
async fn test_find_by_price_in_range_validates_bounds() {
    let app = spawn_app().await;

    for query in [
        "minPrice=1",
        "maxPrice=1",
        "minPrice=abc&maxPrice=1",
        "minPrice=10&maxPrice=1",
    ] {
        let response = app
            .get(&format!("/api/product/findByPriceInRange?{query}"), USER)
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "query: {query}");
    }
}
