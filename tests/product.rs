use serde_json::json;

mod common;

// test me: cargo t --test product -- --nocapture --show-output
#[tokio::test]
async fn list_starts_empty() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let client = reqwest::Client::new();

    let response = client
        .get(&format!("{}/product", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["list"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn add_product_returns_created_product() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let client = reqwest::Client::new();

    let body = common::create_product(
        &client,
        &app.address,
        json!({
            "title": "Oak chair",
            "description": "A chair made of oak",
            "price": 120.5,
            "images": [
                {"url": "chair-front.png", "main": true},
                {"url": "chair-side.png"}
            ]
        }),
    )
    .await;

    assert!(body["id"].as_str().is_some());
    assert_eq!(body["item"]["title"].as_str(), Some("Oak chair"));
    assert_eq!(body["item"]["price"].as_f64(), Some(120.5));
}

#[tokio::test]
async fn get_missing_product_is_not_found() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let client = reqwest::Client::new();

    let response = client
        .get(&format!("{}/product/{}", &app.address, uuid::Uuid::new_v4()))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(404, response.status().as_u16());
}

#[tokio::test]
async fn detail_carries_images_and_thumbnail() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let client = reqwest::Client::new();

    let created = common::create_product(
        &client,
        &app.address,
        json!({
            "title": "Oak chair",
            "price": 120.5,
            "images": [
                {"url": "chair-front.png"},
                {"url": "chair-side.png", "main": true}
            ]
        }),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let response = client
        .get(&format!("{}/product/{}", &app.address, id))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.unwrap();
    let item = &body["item"];
    assert_eq!(item["title"].as_str(), Some("Oak chair"));
    assert_eq!(item["images"].as_array().unwrap().len(), 2);
    assert_eq!(item["thumbnail"]["url"].as_str(), Some("chair-side.png"));
}

#[tokio::test]
async fn patch_updates_only_given_fields() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let client = reqwest::Client::new();

    let created = common::create_product(
        &client,
        &app.address,
        json!({"title": "Oak chair", "description": "Solid", "price": 120.5}),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let response = client
        .patch(&format!("{}/product/{}", &app.address, id))
        .json(&json!({"price": 99.0}))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["item"]["title"].as_str(), Some("Oak chair"));
    assert_eq!(body["item"]["description"].as_str(), Some("Solid"));
    assert_eq!(body["item"]["price"].as_f64(), Some(99.0));
}

#[tokio::test]
async fn patch_missing_product_is_not_found() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let client = reqwest::Client::new();

    let response = client
        .patch(&format!("{}/product/{}", &app.address, uuid::Uuid::new_v4()))
        .json(&json!({"title": "New"}))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(404, response.status().as_u16());
}

#[tokio::test]
async fn delete_product_removes_it() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let client = reqwest::Client::new();

    let created = common::create_product(
        &client,
        &app.address,
        json!({
            "title": "Oak chair",
            "images": [{"url": "chair.png", "main": true}]
        }),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let response = client
        .delete(&format!("{}/product/{}", &app.address, id))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success());

    let response = client
        .get(&format!("{}/product/{}", &app.address, id))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(404, response.status().as_u16());
}

#[tokio::test]
async fn search_with_empty_filter_is_bad_request() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let client = reqwest::Client::new();

    let response = client
        .get(&format!("{}/product/search", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn search_filters_by_title_and_price() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let client = reqwest::Client::new();

    common::create_product(
        &client,
        &app.address,
        json!({"title": "Oak Chair", "price": 120.0}),
    )
    .await;
    common::create_product(
        &client,
        &app.address,
        json!({"title": "Steel Table", "price": 300.0}),
    )
    .await;

    let response = client
        .get(&format!("{}/product/search", &app.address))
        .query(&[("title", "chair")])
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.unwrap();
    let list = body["list"].as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["title"].as_str(), Some("Oak Chair"));

    let response = client
        .get(&format!("{}/product/search", &app.address))
        .query(&[("priceFrom", "200")])
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.unwrap();
    let list = body["list"].as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["title"].as_str(), Some("Steel Table"));
}

#[tokio::test]
async fn search_without_matches_returns_empty_list() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let client = reqwest::Client::new();

    common::create_product(&client, &app.address, json!({"title": "Oak Chair"})).await;

    let response = client
        .get(&format!("{}/product/search", &app.address))
        .query(&[("title", "piano")])
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["list"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn overview_reports_count_and_sum() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let client = reqwest::Client::new();

    common::create_product(&client, &app.address, json!({"title": "A", "price": 10.0})).await;
    common::create_product(&client, &app.address, json!({"title": "B", "price": 20.0})).await;

    let response = client
        .get(&format!("{}/product/overview", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["item"]["count"].as_i64(), Some(2));
    assert_eq!(body["item"]["sum"].as_f64(), Some(30.0));
}

#[tokio::test]
async fn admin_list_carries_timestamps() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let client = reqwest::Client::new();

    common::create_product(&client, &app.address, json!({"title": "Oak chair"})).await;

    let response = client
        .get(&format!("{}/admin/product", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.unwrap();
    let list = body["list"].as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert!(list[0]["createdAt"].as_str().is_some());
    assert!(list[0]["updatedAt"].as_str().is_some());
}

#[tokio::test]
async fn admin_edit_updates_product() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let client = reqwest::Client::new();

    let created = common::create_product(
        &client,
        &app.address,
        json!({"title": "Oak chair", "price": 120.0}),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let response = client
        .post(&format!("{}/admin/product/{}", &app.address, id))
        .json(&json!({"title": "Walnut chair"}))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success());

    let response = client
        .get(&format!("{}/admin/product/{}", &app.address, id))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["item"]["title"].as_str(), Some("Walnut chair"));
    assert_eq!(body["item"]["price"].as_f64(), Some(120.0));
}
