mod common;

use serde_json::{json, Value};

// Full category -> component -> variant lifecycle, exercising conflicting and
// conditional deletes along the way.
#[tokio::test]
async fn category_component_variant_lifecycle() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    let client = reqwest::Client::new();

    // Create the category explicitly.
    let response = client
        .post(format!("{}/categories", app.address))
        .json(&json!({"name": "Buttons"}))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 201);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["item"]["name"], "Buttons");

    // Create a component referencing it, with one initial variant.
    let response = client
        .post(format!("{}/components", app.address))
        .json(&json!({
            "name": "PrimaryButton",
            "category": "Buttons",
            "variants": [{"name": "Solid", "code": "<button/>"}]
        }))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status().as_u16(), 201);
    let body: Value = response.json().await.unwrap();
    let component_id = body["item"]["id"].as_i64().unwrap();
    let variants = body["item"]["variants"].as_array().unwrap();
    assert_eq!(variants.len(), 1);
    assert_eq!(variants[0]["author"], "Anonymous");
    assert_eq!(variants[0]["deployedLink"], "");
    let variant_id = variants[0]["id"].as_str().unwrap().to_string();

    // The component is listed under its category.
    let response = client
        .get(format!("{}/components/category/Buttons", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    let list = body["list"].as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["name"], "PrimaryButton");

    // Deleting the category is blocked while the component references it.
    let response = client
        .delete(format!("{}/categories/Buttons", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.unwrap();
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("used by 1 component(s)"), "{}", message);

    // Delete the component's sole variant; the emptied component stays.
    let response = client
        .delete(format!(
            "{}/components/{}/variants/{}",
            app.address, component_id, variant_id
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 204);

    let response = client
        .get(format!("{}/components/{}", app.address, component_id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["item"]["variants"].as_array().unwrap().len(), 0);

    // Removing the component is a separate explicit call.
    let response = client
        .delete(format!("{}/components/{}", app.address, component_id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 204);

    // Now the category delete goes through.
    let response = client
        .delete(format!("{}/categories/Buttons", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 204);
}

#[tokio::test]
async fn create_component_validates_required_fields() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/components", app.address))
        .json(&json!({"name": "Orphan"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);

    let response = client
        .post(format!("{}/components", app.address))
        .json(&json!({"name": "", "category": "Buttons"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn creating_components_auto_creates_category_once() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    let client = reqwest::Client::new();

    for name in ["First", "Second"] {
        let response = client
            .post(format!("{}/components", app.address))
            .json(&json!({"name": name, "category": "Cards"}))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 201);
    }

    let response = client
        .get(format!("{}/categories", app.address))
        .send()
        .await
        .unwrap();
    let body: Value = response.json().await.unwrap();
    let cards: Vec<_> = body["list"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|category| category["name"] == "Cards")
        .collect();
    assert_eq!(cards.len(), 1);
}

#[tokio::test]
async fn partial_update_touches_only_supplied_fields() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/components", app.address))
        .json(&json!({"name": "Modal", "category": "Overlays", "description": "A modal"}))
        .send()
        .await
        .unwrap();
    let body: Value = response.json().await.unwrap();
    let id = body["item"]["id"].as_i64().unwrap();
    let updated_at = body["item"]["updatedAt"].as_str().unwrap().to_string();

    // Explicitly empty description clears it; name and category survive.
    let response = client
        .put(format!("{}/components/{}", app.address, id))
        .json(&json!({"description": ""}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["item"]["description"], "");
    assert_eq!(body["item"]["name"], "Modal");
    assert_eq!(body["item"]["category"], "Overlays");

    // An empty update still refreshes updated_at.
    let response = client
        .put(format!("{}/components/{}", app.address, id))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    let refreshed = chrono::DateTime::parse_from_rfc3339(body["item"]["updatedAt"].as_str().unwrap())
        .unwrap();
    let previous = chrono::DateTime::parse_from_rfc3339(&updated_at).unwrap();
    assert!(refreshed >= previous);
}

#[tokio::test]
async fn malformed_or_missing_component_id_is_not_found() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/components/not-a-real-id", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);

    let response = client
        .get(format!("{}/components/999999", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn variant_lifecycle_preserves_siblings() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/components", app.address))
        .json(&json!({"name": "Badge", "category": "Indicators"}))
        .send()
        .await
        .unwrap();
    let body: Value = response.json().await.unwrap();
    let id = body["item"]["id"].as_i64().unwrap();

    let mut variant_ids = Vec::new();
    for name in ["Solid", "Outline", "Dot"] {
        let response = client
            .post(format!("{}/components/{}/variants", app.address, id))
            .json(&json!({"name": name, "code": "<span/>"}))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status().as_u16(), 201);
        let body: Value = response.json().await.unwrap();
        variant_ids.push(body["item"]["id"].as_str().unwrap().to_string());
    }

    // Update the middle variant; description cleared explicitly, code kept.
    let response = client
        .put(format!(
            "{}/components/{}/variants/{}",
            app.address, id, variant_ids[1]
        ))
        .json(&json!({"description": "", "author": "ada"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["item"]["author"], "ada");
    assert_eq!(body["item"]["code"], "<span/>");

    // Delete it; siblings keep identity and order.
    let response = client
        .delete(format!(
            "{}/components/{}/variants/{}",
            app.address, id, variant_ids[1]
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 204);

    let response = client
        .get(format!("{}/components/{}", app.address, id))
        .send()
        .await
        .unwrap();
    let body: Value = response.json().await.unwrap();
    let remaining: Vec<_> = body["item"]["variants"]
        .as_array()
        .unwrap()
        .iter()
        .map(|variant| variant["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(remaining, vec![variant_ids[0].clone(), variant_ids[2].clone()]);

    // Deleting an id that is gone already is a no-op success.
    let response = client
        .delete(format!(
            "{}/components/{}/variants/{}",
            app.address, id, variant_ids[1]
        ))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 204);

    // But the pair must resolve for an update.
    let response = client
        .put(format!(
            "{}/components/{}/variants/{}",
            app.address, id, variant_ids[1]
        ))
        .json(&json!({"name": "Ghost"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn created_variant_round_trips_through_parent() {
    let app = match common::spawn_app().await {
        Some(app) => app,
        None => return,
    };
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/components", app.address))
        .json(&json!({"name": "Tooltip", "category": "Overlays"}))
        .send()
        .await
        .unwrap();
    let body: Value = response.json().await.unwrap();
    let id = body["item"]["id"].as_i64().unwrap();

    let response = client
        .post(format!("{}/components/{}/variants", app.address, id))
        .json(&json!({"name": "Dark", "code": "<div/>"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 201);
    let body: Value = response.json().await.unwrap();
    let variant_id = body["item"]["id"].as_str().unwrap().to_string();

    let response = client
        .get(format!("{}/components/{}", app.address, id))
        .send()
        .await
        .unwrap();
    let body: Value = response.json().await.unwrap();
    let variants = body["list"].as_array();
    assert!(variants.is_none());
    let variants = body["item"]["variants"].as_array().unwrap();
    assert_eq!(variants.len(), 1);
    assert_eq!(variants[0]["id"], variant_id.as_str());
    assert_eq!(variants[0]["author"], "Anonymous");
    assert_eq!(variants[0]["description"], "");
    assert_eq!(variants[0]["deployedLink"], "");
}
