//! End-to-end client tests against an in-process mock backend.
//!
//! Each test spins up a small axum router on an ephemeral port and points
//! an `ApiClient` with a fresh in-memory session store at it.

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use medidesk::client::appointments::AppointmentPayload;
use medidesk::client::patients::PatientPayload;
use medidesk::models::enums::{AppointmentStatus, Gender, Role};
use medidesk::session::{MemoryStore, Session, SessionStore};
use medidesk::shell::GuardState;
use medidesk::{ApiClient, RouteGuard};

const TOKEN: &str = "tok-e2e-1";

fn sample_user() -> Value {
    json!({
        "id": "6f1e1f6a-8f2a-4f0e-9c3d-2b1a0e9d8c7b",
        "username": "admin",
        "email": "admin@hospital.com",
        "role": "admin",
        "full_name": "System Administrator",
        "phone": "",
        "created_at": "2024-03-01T09:30:00",
        "active": true
    })
}

async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn client_with_store(base: &str) -> (ApiClient, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let client = ApiClient::new(base, store.clone() as Arc<dyn SessionStore>);
    (client, store)
}

fn logged_in_store() -> Arc<MemoryStore> {
    let store = Arc::new(MemoryStore::new());
    let session = Session {
        token: TOKEN.into(),
        user: serde_json::from_value(sample_user()).unwrap(),
    };
    store.save(&session).unwrap();
    store
}

// ═══════════════════════════════════════════════════════════
// Auth + session lifecycle
// ═══════════════════════════════════════════════════════════

#[tokio::test]
async fn login_with_valid_credentials_stores_session() {
    let app = Router::new().route(
        "/api/auth/login",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body["username"], "admin");
            assert_eq!(body["password"], "admin123");
            Json(json!({"token": TOKEN, "user": sample_user()}))
        }),
    );
    let base = spawn(app).await;
    let (client, store) = client_with_store(&base);

    let user = client.login("admin", "admin123").await.unwrap();
    assert_eq!(user.role, Role::Admin);

    let session = store.current().expect("session stored after login");
    assert_eq!(session.token, TOKEN);
    assert_eq!(session.user.username, "admin");
}

#[tokio::test]
async fn failed_login_leaves_prior_session_untouched() {
    let app = Router::new().route(
        "/api/auth/login",
        post(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({"error": "Invalid credentials"})),
            )
        }),
    );
    let base = spawn(app).await;
    let store = logged_in_store();
    let client = ApiClient::new(&base, store.clone() as Arc<dyn SessionStore>);

    let err = client.login("admin", "wrong").await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.to_string(), "Invalid credentials");

    // The previously stored token survives a rejected login.
    assert_eq!(store.current().unwrap().token, TOKEN);
}

#[tokio::test]
async fn bearer_header_attached_when_token_present() {
    let app = Router::new().route(
        "/api/auth/me",
        get(|headers: HeaderMap| async move {
            match headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()) {
                Some(value) if value == format!("Bearer {TOKEN}") => {
                    Json(sample_user()).into_response()
                }
                _ => (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({"error": "Unauthorized"})),
                )
                    .into_response(),
            }
        }),
    );
    let base = spawn(app).await;
    let store = logged_in_store();
    let client = ApiClient::new(&base, store as Arc<dyn SessionStore>);

    let user = client.current_user().await.unwrap();
    assert_eq!(user.full_name, "System Administrator");
}

#[tokio::test]
async fn missing_token_omits_authorization_header() {
    let app = Router::new().route(
        "/api/auth/me",
        get(|headers: HeaderMap| async move {
            if headers.contains_key(header::AUTHORIZATION) {
                // A malformed or empty bearer header would land here.
                return (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"error": "unexpected Authorization header"})),
                );
            }
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({"error": "Unauthorized"})),
            )
        }),
    );
    let base = spawn(app).await;
    let (client, _store) = client_with_store(&base);

    let err = client.current_user().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.to_string(), "Unauthorized");
}

#[tokio::test]
async fn logout_clears_session_even_when_server_fails() {
    let app = Router::new().route(
        "/api/auth/logout",
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "session table unavailable"})),
            )
        }),
    );
    let base = spawn(app).await;
    let store = logged_in_store();
    let client = ApiClient::new(&base, store.clone() as Arc<dyn SessionStore>);

    client.logout().await.unwrap();
    assert!(store.current().is_none());
}

#[tokio::test]
async fn logout_clears_session_on_success() {
    let app = Router::new().route(
        "/api/auth/logout",
        post(|| async { Json(json!({"message": "Logged out successfully"})) }),
    );
    let base = spawn(app).await;
    let store = logged_in_store();
    let client = ApiClient::new(&base, store.clone() as Arc<dyn SessionStore>);

    client.logout().await.unwrap();
    assert!(store.current().is_none());
}

// ═══════════════════════════════════════════════════════════
// Error normalization
// ═══════════════════════════════════════════════════════════

#[tokio::test]
async fn non_json_error_body_yields_status_fallback() {
    let app = Router::new().route(
        "/api/patients",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "upstream down") }),
    );
    let base = spawn(app).await;
    let store = logged_in_store();
    let client = ApiClient::new(&base, store as Arc<dyn SessionStore>);

    let err = client.patients().await.unwrap_err();
    assert_eq!(err.to_string(), "HTTP 503");
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    // Nothing listens on this port.
    let (client, _store) = client_with_store("http://127.0.0.1:9");
    let err = client.health().await.unwrap_err();
    assert!(matches!(err, medidesk::ApiError::Network(_)));
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
    let app = Router::new().route(
        "/api/reports/dashboard",
        get(|| async { Json(json!({"totally": "unexpected"})) }),
    );
    let base = spawn(app).await;
    let store = logged_in_store();
    let client = ApiClient::new(&base, store as Arc<dyn SessionStore>);

    let err = client.dashboard_report().await.unwrap_err();
    assert!(matches!(err, medidesk::ApiError::Decode(_)));
}

// ═══════════════════════════════════════════════════════════
// Resource round trips
// ═══════════════════════════════════════════════════════════

type PatientDb = Arc<Mutex<Vec<Value>>>;

fn patients_app() -> (Router, PatientDb) {
    let db: PatientDb = Arc::new(Mutex::new(Vec::new()));

    async fn list(State(db): State<PatientDb>) -> Json<Value> {
        Json(Value::Array(db.lock().unwrap().clone()))
    }

    async fn create(State(db): State<PatientDb>, Json(body): Json<Value>) -> impl IntoResponse {
        let mut record = json!({
            "id": uuid::Uuid::new_v4(),
            "created_at": "2024-05-01T12:00:00"
        });
        record
            .as_object_mut()
            .unwrap()
            .extend(body.as_object().unwrap().clone());
        db.lock().unwrap().push(record.clone());
        (StatusCode::CREATED, Json(record))
    }

    let app = Router::new()
        .route("/api/patients", get(list).post(create))
        .with_state(db.clone());
    (app, db)
}

fn sample_patient_payload() -> PatientPayload {
    PatientPayload {
        full_name: "Jane Doe".into(),
        date_of_birth: chrono::NaiveDate::from_ymd_opt(1988, 7, 14).unwrap(),
        gender: Gender::Female,
        phone: "555-0100".into(),
        email: "jane@example.org".into(),
        address: "12 Elm St".into(),
        blood_group: "O+".into(),
        emergency_contact: "555-0101".into(),
        medical_history: "".into(),
    }
}

#[tokio::test]
async fn create_then_list_contains_record_exactly_once() {
    let (app, _db) = patients_app();
    let base = spawn(app).await;
    let store = logged_in_store();
    let client = ApiClient::new(&base, store as Arc<dyn SessionStore>);

    let created = client
        .create_patient(&sample_patient_payload())
        .await
        .unwrap();
    assert_eq!(created.full_name, "Jane Doe");

    let listed = client.patients().await.unwrap();
    let matches: Vec<_> = listed.iter().filter(|p| p.id == created.id).collect();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].gender, Gender::Female);
}

fn appointments_app() -> Router {
    let db: PatientDb = Arc::new(Mutex::new(Vec::new()));

    async fn list(State(db): State<PatientDb>) -> Json<Value> {
        Json(Value::Array(db.lock().unwrap().clone()))
    }

    async fn create(State(db): State<PatientDb>, Json(body): Json<Value>) -> impl IntoResponse {
        let mut record = json!({
            "id": uuid::Uuid::new_v4(),
            "created_at": "2024-05-01T12:00:00",
            "status": "scheduled"
        });
        record
            .as_object_mut()
            .unwrap()
            .extend(body.as_object().unwrap().clone());
        db.lock().unwrap().push(record.clone());
        (StatusCode::CREATED, Json(record))
    }

    Router::new()
        .route("/api/appointments", get(list).post(create))
        .with_state(db)
}

#[tokio::test]
async fn appointment_create_then_list_contains_record_exactly_once() {
    let base = spawn(appointments_app()).await;
    let store = logged_in_store();
    let client = ApiClient::new(&base, store as Arc<dyn SessionStore>);

    let payload = AppointmentPayload {
        patient_id: uuid::Uuid::new_v4(),
        date: chrono::NaiveDate::from_ymd_opt(2024, 5, 20).unwrap(),
        time: "14:30".into(),
        doctor_name: "Dr. Patel".into(),
        department: "Cardiology".into(),
        reason: "Follow-up".into(),
        notes: "".into(),
        status: None,
    };
    let created = client.create_appointment(&payload).await.unwrap();
    assert_eq!(created.status, AppointmentStatus::Scheduled);

    let listed = client.appointments().await.unwrap();
    assert_eq!(listed.iter().filter(|a| a.id == created.id).count(), 1);
}

#[tokio::test]
async fn settings_round_trip_replaces_whole_document() {
    async fn get_settings() -> Json<Value> {
        Json(json!({
            "features": {"billing": true, "pharmacy": true},
            "system": {"hospital_name": "General Hospital", "timezone": "UTC", "currency": "USD"},
            "whatsapp": {"enabled": false, "api_key": "", "phone_number": ""}
        }))
    }

    async fn put_settings(Json(body): Json<Value>) -> Json<Value> {
        Json(body)
    }

    let app = Router::new().route("/api/settings", get(get_settings).put(put_settings));
    let base = spawn(app).await;
    let store = logged_in_store();
    let client = ApiClient::new(&base, store as Arc<dyn SessionStore>);

    let mut settings = client.settings().await.unwrap();
    settings.system.hospital_name = "Riverside Clinic".into();
    settings.whatsapp.enabled = true;

    let saved = client.update_settings(&settings).await.unwrap();
    assert_eq!(saved.system.hospital_name, "Riverside Clinic");
    assert!(saved.whatsapp.enabled);
}

#[tokio::test]
async fn joint_report_load_fails_whole_without_partial_data() {
    // Two of the three lists succeed; billing is down. The joint fetch
    // must fail as a unit rather than hand back partial data.
    let app = Router::new()
        .route("/api/patients", get(|| async { Json(json!([])) }))
        .route("/api/appointments", get(|| async { Json(json!([])) }))
        .route(
            "/api/billing",
            get(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": "billing table unavailable"})),
                )
            }),
        );
    let base = spawn(app).await;
    let store = logged_in_store();
    let client = ApiClient::new(&base, store as Arc<dyn SessionStore>);

    let err = medidesk::reports::load_report_data(&client)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "billing table unavailable");
}

#[tokio::test]
async fn dashboard_report_decodes_counters() {
    let app = Router::new().route(
        "/api/reports/dashboard",
        get(|| async {
            Json(json!({
                "total_patients": 42,
                "total_appointments": 18,
                "today_appointments": 3,
                "total_revenue": 1250.75,
                "pending_bills": 5
            }))
        }),
    );
    let base = spawn(app).await;
    let store = logged_in_store();
    let client = ApiClient::new(&base, store as Arc<dyn SessionStore>);

    let report = client.dashboard_report().await.unwrap();
    assert_eq!(report.total_patients, 42);
    assert_eq!(report.pending_bills, 5);
}

// ═══════════════════════════════════════════════════════════
// Route guard
// ═══════════════════════════════════════════════════════════

#[tokio::test]
async fn guard_authenticates_with_valid_session() {
    let app = Router::new().route("/api/auth/me", get(|| async { Json(sample_user()) }));
    let base = spawn(app).await;
    let store = logged_in_store();
    let client = ApiClient::new(&base, store as Arc<dyn SessionStore>);

    let mut guard = RouteGuard::mount();
    assert!(matches!(guard.state(), GuardState::Checking));

    guard.resolve(&client).await;
    let user = guard.state().user().expect("authenticated");
    assert_eq!(user.role, Role::Admin);
}

#[tokio::test]
async fn guard_redirects_on_any_identity_failure() {
    // Rejected token and unreachable backend both end in Redirecting.
    let app = Router::new().route(
        "/api/auth/me",
        get(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({"error": "Unauthorized"})),
            )
        }),
    );
    let base = spawn(app).await;
    let (client, _store) = client_with_store(&base);

    let mut guard = RouteGuard::mount();
    guard.resolve(&client).await;
    assert!(matches!(guard.state(), GuardState::Redirecting));

    let (offline_client, _store) = client_with_store("http://127.0.0.1:9");
    let mut guard = RouteGuard::mount();
    guard.resolve(&offline_client).await;
    assert!(matches!(guard.state(), GuardState::Redirecting));
}
