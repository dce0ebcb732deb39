use serde_json::json;

mod common;

// test me: cargo t --test image -- --nocapture --show-output
#[tokio::test]
async fn add_images_with_empty_array_is_bad_request() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let client = reqwest::Client::new();

    let response = client
        .post(&format!("{}/product/add-images", &app.address))
        .json(&json!({"productId": uuid::Uuid::new_v4(), "images": []}))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn add_images_attaches_them_to_the_product() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let client = reqwest::Client::new();

    let created = common::create_product(&client, &app.address, json!({"title": "Oak chair"})).await;
    let id = created["id"].as_str().unwrap();

    let response = client
        .post(&format!("{}/product/add-images", &app.address))
        .json(&json!({
            "productId": id,
            "images": [
                {"url": "chair-front.png", "main": true},
                {"url": "chair-side.png"}
            ]
        }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(201, response.status().as_u16());

    let response = client
        .get(&format!("{}/product/{}", &app.address, id))
        .send()
        .await
        .expect("Failed to execute request.");
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["item"]["images"].as_array().unwrap().len(), 2);
    assert_eq!(
        body["item"]["thumbnail"]["url"].as_str(),
        Some("chair-front.png")
    );
}

#[tokio::test]
async fn remove_images_with_empty_array_is_bad_request() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let client = reqwest::Client::new();

    let response = client
        .post(&format!("{}/product/remove-images", &app.address))
        .json(&json!([]))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn remove_unknown_images_is_not_found() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let client = reqwest::Client::new();

    let response = client
        .post(&format!("{}/product/remove-images", &app.address))
        .json(&json!([uuid::Uuid::new_v4()]))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(404, response.status().as_u16());
}

#[tokio::test]
async fn remove_images_deletes_rows() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let client = reqwest::Client::new();

    let created = common::create_product(
        &client,
        &app.address,
        json!({
            "title": "Oak chair",
            "images": [
                {"url": "chair-front.png", "main": true},
                {"url": "chair-side.png"}
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
    let body: serde_json::Value = response.json().await.unwrap();
    let images = body["item"]["images"].as_array().unwrap();
    let side_image_id = images
        .iter()
        .find(|image| image["url"] == "chair-side.png")
        .and_then(|image| image["id"].as_str())
        .unwrap()
        .to_string();

    let response = client
        .post(&format!("{}/product/remove-images", &app.address))
        .json(&json!([side_image_id]))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success());

    let response = client
        .get(&format!("{}/product/{}", &app.address, id))
        .send()
        .await
        .expect("Failed to execute request.");
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["item"]["images"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn update_thumbnail_moves_the_main_flag() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let client = reqwest::Client::new();

    let created = common::create_product(
        &client,
        &app.address,
        json!({
            "title": "Oak chair",
            "images": [
                {"url": "chair-front.png", "main": true},
                {"url": "chair-side.png"}
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
    let body: serde_json::Value = response.json().await.unwrap();
    let images = body["item"]["images"].as_array().unwrap();
    let new_thumbnail_id = images
        .iter()
        .find(|image| image["url"] == "chair-side.png")
        .and_then(|image| image["id"].as_str())
        .unwrap()
        .to_string();

    let response = client
        .post(&format!("{}/product/update-thumbnail/{}", &app.address, id))
        .json(&json!({"newThumbnailId": new_thumbnail_id}))
        .send()
        .await
        .expect("Failed to execute request.");
    assert!(response.status().is_success());

    let response = client
        .get(&format!("{}/product/{}", &app.address, id))
        .send()
        .await
        .expect("Failed to execute request.");
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body["item"]["thumbnail"]["url"].as_str(),
        Some("chair-side.png")
    );
}

#[tokio::test]
async fn update_thumbnail_without_current_main_is_bad_request() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let client = reqwest::Client::new();

    let created = common::create_product(
        &client,
        &app.address,
        json!({
            "title": "Oak chair",
            "images": [{"url": "chair-front.png"}]
        }),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let response = client
        .post(&format!("{}/product/update-thumbnail/{}", &app.address, id))
        .json(&json!({"newThumbnailId": uuid::Uuid::new_v4()}))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(400, response.status().as_u16());
}
