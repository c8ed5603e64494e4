use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

mod common;

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };

    (status, json)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn with_json(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn test_health_check_endpoint() {
    let app = common::setup_test_app().await;

    let (status, json) = send(app, get("/debug/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["checks"]["place_count"], 15);
    assert_eq!(json["checks"]["tag_count"], 26);
    assert_eq!(json["checks"]["predefined_route_count"], 4);
}

#[tokio::test]
async fn test_list_places_with_filters() {
    let app = common::setup_test_app().await;

    let (status, json) = send(app.clone(), get("/places")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 15);
    assert_eq!(json[0]["id"], "conservatory");
    assert_eq!(json[0]["coordinates"], json!([51.533901, 46.008034]));

    let (status, json) = send(app.clone(), get("/places?category=gastronomy")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 2);

    let (status, json) = send(app.clone(), get("/places?tags=space,nightlife")).await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["space-museum", "gagarin-park", "night-club"]);

    let (status, json) = send(app, get("/places?category=museum")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Bad Request");
}

#[tokio::test]
async fn test_place_crud() {
    let app = common::setup_test_app().await;
    let place = json!({
        "id": "lipki-park",
        "name": "Lipki park",
        "description": "Old city garden",
        "coordinates": [51.5306, 46.0262],
        "category": "nature",
        "tags": ["parks", "leisurely"],
        "rating": 4.4
    });

    let (status, json) = send(app.clone(), with_json("POST", "/places", place.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"id": "lipki-park", "success": true}));

    let (status, _) = send(app.clone(), with_json("POST", "/places", place.clone())).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, json) = send(app.clone(), get("/places/lipki-park")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["category"], "nature");
    assert_eq!(json["photos"], json!([]));

    let mut updated = place.clone();
    updated["rating"] = json!(4.9);
    let (status, json) = send(
        app.clone(),
        with_json("PUT", "/places/lipki-park", updated.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"changes": 1, "success": true}));

    let (status, _) = send(app.clone(), with_json("PUT", "/places/missing", updated)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let request = Request::builder()
        .method("DELETE")
        .uri("/places/lipki-park")
        .body(Body::empty())
        .unwrap();
    let (status, json) = send(app.clone(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"changes": 1, "success": true}));

    let (status, _) = send(app, get("/places/lipki-park")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_place_validation() {
    let app = common::setup_test_app().await;
    let place = json!({
        "id": "nowhere",
        "name": "Nowhere",
        "description": "",
        "coordinates": [123.0, 46.0],
        "category": "nature",
        "tags": [],
        "rating": 3.0
    });

    let (status, json) = send(app, with_json("POST", "/places", place)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["message"].as_str().unwrap().contains("lat"));
}

#[tokio::test]
async fn test_list_tags() {
    let app = common::setup_test_app().await;

    let (status, json) = send(app, get("/tags")).await;
    let tags = json.as_array().unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(tags.len(), 26);
    assert_eq!(tags[0]["category"], "formats");
    assert_eq!(tags[25]["category"], "themes");
}

#[tokio::test]
async fn test_generate_route_endpoint() {
    let app = common::setup_test_app().await;

    let (status, json) = send(
        app,
        with_json("POST", "/routes/generate", json!({"tag_ids": ["space"]})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let route = &json["route"];
    let ids: Vec<&str> = route["places"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["gagarin-park", "space-museum"]);
    assert_eq!(route["tags"], json!(["space"]));
    assert_eq!(route["difficulty"], "easy");
    assert!(route["distance_km"].as_f64().unwrap() > 0.0);
    assert!(route["id"].is_string());
    assert!(route["created_at"].is_string());
}

#[tokio::test]
async fn test_generate_route_errors() {
    let app = common::setup_test_app().await;

    let (status, json) = send(
        app.clone(),
        with_json("POST", "/routes/generate", json!({"tag_ids": []})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "No tags selected");

    let (status, _) = send(
        app.clone(),
        with_json("POST", "/routes/generate", json!({"tag_ids": ["karaoke"]})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Both tags point at the same single place
    let (status, json) = send(
        app,
        with_json("POST", "/routes/generate", json!({"tag_ids": ["yankovsky", "tabakov"]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["route"]["places"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_generate_route_no_matching_places() {
    let repo = common::seeded_repository().await;
    let state = common::create_test_state(repo.clone());
    let app = cityroute::routes::create_router(state);

    // Drop every place tagged nightlife
    let (status, _) = send(
        app.clone(),
        Request::builder()
            .method("DELETE")
            .uri("/places/night-club")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, json) = send(
        app,
        with_json("POST", "/routes/generate", json!({"tag_ids": ["nightlife"]})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        json["message"],
        "No places found matching the selected criteria"
    );
}

#[tokio::test]
async fn test_generate_route_geojson() {
    let app = common::setup_test_app().await;

    let (status, json) = send(
        app,
        with_json(
            "POST",
            "/routes/generate/geojson",
            json!({"tag_ids": ["gastronomy"]}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["type"], "FeatureCollection");
    let features = json["features"].as_array().unwrap();
    assert_eq!(features.len(), 3);
    assert_eq!(features[0]["geometry"]["type"], "LineString");
    assert_eq!(features[1]["geometry"]["type"], "Point");
    // GeoJSON positions are [lng, lat]
    assert_eq!(
        features[1]["geometry"]["coordinates"],
        json!([46.008901, 51.532567])
    );
}

#[tokio::test]
async fn test_predefined_routes() {
    let app = common::setup_test_app().await;

    let (status, json) = send(app.clone(), get("/routes/predefined")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 4);
    assert_eq!(json[0]["id"], "historic-center");

    let request = Request::builder()
        .method("POST")
        .uri("/routes/predefined/volga-walk")
        .body(Body::empty())
        .unwrap();
    let (status, json) = send(app.clone(), request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["route"]["predefined_id"], "volga-walk");
    assert_eq!(json["route"]["duration_minutes"], 120.0);
    assert_eq!(json["route"]["places"][0]["id"], "volga-embankment");

    let request = Request::builder()
        .method("POST")
        .uri("/routes/predefined/unknown")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(app, request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_user_stats() {
    let app = common::setup_test_app().await;

    let (status, _) = send(app.clone(), get("/users/u-42/stats")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let stats = json!({"total_scanned": 3, "routes_completed": 1, "distance_walked": 2.5});
    let (status, json) = send(
        app.clone(),
        with_json("POST", "/users/u-42/stats", stats.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);

    let (status, json) = send(app, get("/users/u-42/stats")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, stats);
}
