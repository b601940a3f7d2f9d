//! End-to-end API tests against a PostGIS database.
//!
//! Each test gets a fresh database with migrations applied.
//! Run with: DATABASE_URL=postgres://... cargo test -p plantwatch-server -- --ignored

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

use plantwatch_server::{router, AppState, ServerConfig};

/// Collections that start empty after migrations (spatial_ref_sys is
/// populated by PostGIS itself).
const EMPTY_COLLECTIONS: [&str; 9] = [
    "/users",
    "/plants",
    "/samples",
    "/devices",
    "/annotations",
    "/diagnoses",
    "/treatments",
    "/audit_logs",
    "/sensores",
];

fn app(pool: PgPool) -> Router {
    router(AppState::new(pool), &ServerConfig::default())
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

async fn post_reading(app: &Router, body: Value) -> (StatusCode, Value) {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri("/sensores")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

async fn reading_count(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM sensores")
        .fetch_one(pool)
        .await
        .unwrap()
}

/// One row in every table, with a sample that references the rest.
async fn seed(pool: &PgPool) {
    sqlx::query(
        r#"
        INSERT INTO users (id, nome, email, role, created_at) VALUES
            (1, 'Ana', 'ana@example.org', 'admin', '2024-03-01 08:30:00'),
            (2, 'Rui', 'rui@example.org', 'annotator', NULL)
        "#,
    )
    .execute(pool)
    .await
    .unwrap();

    sqlx::query(
        "INSERT INTO plants (id, nome_comum, nome_cientifico) VALUES (1, 'Tomateiro', 'Solanum lycopersicum')",
    )
    .execute(pool)
    .await
    .unwrap();

    sqlx::query(
        r#"
        INSERT INTO devices (id, users_id, tipo, modelo, last_seen, location)
        VALUES (1, 1, 'camera', 'RPi HQ', '2024-05-20 14:00:00',
                ST_GeogFromText('SRID=4326;POINT(-46.63 -23.55)'))
        "#,
    )
    .execute(pool)
    .await
    .unwrap();

    sqlx::query(
        r#"
        INSERT INTO samples (id, device_id, user_id, plant_id, image_path, timestamp, location, weather_meta)
        VALUES (1, 1, 1, 1, '/data/img/1.jpg', '2024-05-20 14:05:09.25',
                ST_GeogFromText('SRID=4326;POINT(-46.63 -23.55)'),
                '{"temp_c": 21.5, "rain": false, "stations": [4, 7]}')
        "#,
    )
    .execute(pool)
    .await
    .unwrap();

    sqlx::query(
        r#"
        INSERT INTO annotations (id, sample_id, annotator_id, bbox, label, confidence)
        VALUES (1, 1, 2, '{"x": 10, "y": 20, "w": 64, "h": 48}', 'early_blight', 87.5)
        "#,
    )
    .execute(pool)
    .await
    .unwrap();

    sqlx::query(
        r#"
        INSERT INTO diagnoses (id, sample_id, model_version, predicted_label, confidence)
        VALUES (1, 1, 'leafnet-1.4', 'early_blight', 0)
        "#,
    )
    .execute(pool)
    .await
    .unwrap();

    sqlx::query(
        r#"
        INSERT INTO treatments (id, disease_label, recomendacoes_texto, severity_level)
        VALUES (1, 'early_blight', 'Remove affected leaves.', 'medium')
        "#,
    )
    .execute(pool)
    .await
    .unwrap();

    sqlx::query("INSERT INTO audit_logs (id, entity, entity_id, action, user_id) VALUES (1, 'samples', 1, 'create', 1)")
        .execute(pool)
        .await
        .unwrap();
}

#[sqlx::test(migrator = "plantwatch_server::db::MIGRATOR")]
#[ignore = "requires PostGIS database"]
async fn empty_tables_return_204(pool: PgPool) {
    let app = app(pool);

    for uri in EMPTY_COLLECTIONS {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::NO_CONTENT, "{uri}");
        assert!(body.as_object().map_or(true, |o| o.is_empty()), "{uri}");
    }
}

#[sqlx::test(migrator = "plantwatch_server::db::MIGRATOR")]
#[ignore = "requires PostGIS database"]
async fn latest_returns_highest_key(pool: PgPool) {
    seed(&pool).await;
    let app = app(pool);

    let (status, body) = get(&app, "/users").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 2);
    assert_eq!(body["nome"], "Rui");
    assert!(body["created_at"].is_null());
}

#[sqlx::test(migrator = "plantwatch_server::db::MIGRATOR")]
#[ignore = "requires PostGIS database"]
async fn latest_spatial_ref_sys_orders_by_srid(pool: PgPool) {
    let max_srid: i32 = sqlx::query_scalar("SELECT MAX(srid) FROM spatial_ref_sys")
        .fetch_one(&pool)
        .await
        .unwrap();
    let app = app(pool);

    let (status, body) = get(&app, "/spatial_ref_sys").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["srid"], max_srid);

    let (status, body) = get(&app, "/spatial_ref_sys/4326").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["auth_name"], "EPSG");
    assert_eq!(body["auth_srid"], 4326);
}

#[sqlx::test(migrator = "plantwatch_server::db::MIGRATOR")]
#[ignore = "requires PostGIS database"]
async fn missing_keys_return_404(pool: PgPool) {
    seed(&pool).await;
    let app = app(pool);

    for uri in [
        "/users/99",
        "/plants/99",
        "/samples/99",
        "/devices/99",
        "/annotations/99",
        "/diagnoses/99",
        "/treatments/99",
        "/audit_logs/99",
        "/spatial_ref_sys/-1",
        "/sensores/99",
    ] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body["error"], "not_found", "{uri}");
    }
}

#[sqlx::test(migrator = "plantwatch_server::db::MIGRATOR")]
#[ignore = "requires PostGIS database"]
async fn rows_serialize_stored_values(pool: PgPool) {
    seed(&pool).await;
    let app = app(pool);

    let (_, user) = get(&app, "/users/1").await;
    assert_eq!(
        user,
        json!({
            "id": 1,
            "nome": "Ana",
            "email": "ana@example.org",
            "role": "admin",
            "created_at": "2024-03-01T08:30:00"
        })
    );

    let (_, plant) = get(&app, "/plants/1").await;
    assert_eq!(plant["nome_cientifico"], "Solanum lycopersicum");
    assert!(plant["descricao"].is_null());

    let (_, device) = get(&app, "/devices/1").await;
    assert_eq!(device["users_id"], 1);
    assert_eq!(device["location"], "POINT(-46.63 -23.55)");
    assert_eq!(device["last_seen"], "2024-05-20T14:00:00");

    let (_, sample) = get(&app, "/samples/1").await;
    assert_eq!(sample["timestamp"], "2024-05-20T14:05:09.250");
    assert_eq!(sample["location"], "POINT(-46.63 -23.55)");
    assert_eq!(
        sample["weather_meta"],
        json!({"temp_c": 21.5, "rain": false, "stations": [4, 7]})
    );
    assert!(sample["thumb_path"].is_null());

    let (_, annotation) = get(&app, "/annotations/1").await;
    assert_eq!(annotation["confidence"], json!(87.5));
    assert_eq!(annotation["bbox"]["h"], 48);
    assert!(annotation["created_at"].is_string());

    let (_, diagnose) = get(&app, "/diagnoses/1").await;
    assert_eq!(diagnose["confidence"], json!(0.0));

    let (_, treatment) = get(&app, "/treatments/1").await;
    assert_eq!(treatment["recomendacoes_texto"], "Remove affected leaves.");

    let (_, audit) = get(&app, "/audit_logs/1").await;
    assert_eq!(audit["entity"], "samples");
    assert_eq!(audit["action"], "create");
}

#[sqlx::test(migrator = "plantwatch_server::db::MIGRATOR")]
#[ignore = "requires PostGIS database"]
async fn repeated_reads_are_identical(pool: PgPool) {
    seed(&pool).await;
    let app = app(pool);

    let first = get(&app, "/samples/1").await;
    let second = get(&app, "/samples/1").await;
    assert_eq!(first, second);
}

#[sqlx::test(migrator = "plantwatch_server::db::MIGRATOR")]
#[ignore = "requires PostGIS database"]
async fn post_reading_then_read_back(pool: PgPool) {
    let app = app(pool.clone());

    let (status, body) = post_reading(&app, json!({"temperatura": 25.5, "umidade": 60.0})).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "sensor reading saved");
    let id = body["id"].as_i64().expect("generated id");

    let (status, reading) = get(&app, &format!("/sensores/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reading["temperatura"], json!(25.5));
    assert_eq!(reading["umidade"], json!(60.0));
    assert!(reading["created_at"].is_string());

    let (_, latest) = get(&app, "/sensores").await;
    assert_eq!(latest["id"], id);
    assert_eq!(reading_count(&pool).await, 1);
}

#[sqlx::test(migrator = "plantwatch_server::db::MIGRATOR")]
#[ignore = "requires PostGIS database"]
async fn numeric_strings_are_stored(pool: PgPool) {
    let app = app(pool);

    let (status, body) = post_reading(&app, json!({"temperatura": "19.75", "umidade": "71"})).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, reading) = get(&app, &format!("/sensores/{}", body["id"])).await;
    assert_eq!(reading["temperatura"], json!(19.75));
    assert_eq!(reading["umidade"], json!(71.0));
}

#[sqlx::test(migrator = "plantwatch_server::db::MIGRATOR")]
#[ignore = "requires PostGIS database"]
async fn invalid_readings_create_no_rows(pool: PgPool) {
    let app = app(pool.clone());

    let (status, _) = post_reading(&app, json!({"temperatura": 25.5})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = post_reading(&app, json!({"temperatura": "abc", "umidade": 10})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(reading_count(&pool).await, 0);
}

#[sqlx::test(migrator = "plantwatch_server::db::MIGRATOR")]
#[ignore = "requires PostGIS database"]
async fn failed_insert_rolls_back(pool: PgPool) {
    let app = app(pool.clone());

    // numeric(5,2) holds at most 999.99; the insert itself fails.
    let (status, body) = post_reading(&app, json!({"temperatura": 5000, "umidade": 10})).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["message"]
        .as_str()
        .is_some_and(|m| m.starts_with("server error:")));

    assert_eq!(reading_count(&pool).await, 0);
}
