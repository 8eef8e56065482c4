//! HTTP behaviour of the API client against an in-process fake backend.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use moodicat_core::auth::{describe_login_error, describe_register_error};
use moodicat_core::chat::{failure_message, Resource};
use moodicat_core::models::{
    DiaryDraft, DiaryRange, ReminderDraft, TaskStatus, TrendPeriod, UserInfo,
};
use moodicat_core::{
    ApiClient, AuthService, AuthSession, ClientConfig, Error, MemorySessionStore,
    SessionPersistence,
};

const TOKEN: &str = "tok-mimi";

#[derive(Clone, Default)]
struct Backend {
    authorization: Arc<Mutex<Vec<Option<String>>>>,
    task_filters: Arc<Mutex<Vec<Option<String>>>>,
    deleted_tasks: Arc<Mutex<Vec<i64>>>,
    diary_ranges: Arc<Mutex<Vec<(Option<String>, Option<String>)>>>,
    diary_writes: Arc<Mutex<Vec<(&'static str, Value)>>>,
    deleted_entries: Arc<Mutex<Vec<i64>>>,
    summary_dates: Arc<Mutex<Vec<Option<String>>>>,
    created_reminders: Arc<Mutex<Vec<Value>>>,
    deleted_chat_sessions: Arc<Mutex<Vec<String>>>,
}

impl Backend {
    fn record_auth(&self, headers: &HeaderMap) -> bool {
        let value = headers
            .get("authorization")
            .and_then(|value| value.to_str().ok())
            .map(ToString::to_string);
        let valid = value.as_deref() == Some(&format!("Bearer {TOKEN}"));
        self.authorization.lock().unwrap().push(value);
        valid
    }
}

async fn login(Json(body): Json<Value>) -> Response {
    if body["password"] == "meow" {
        Json(json!({
            "token": TOKEN,
            "user": {"id": 1, "username": body["username"], "email": "mimi@example.com"}
        }))
        .into_response()
    } else {
        (StatusCode::UNAUTHORIZED, "Invalid credentials").into_response()
    }
}

async fn register(Json(body): Json<Value>) -> Response {
    if body["username"] == "taken" {
        return (StatusCode::CONFLICT, "Username already exists").into_response();
    }
    (
        StatusCode::CREATED,
        Json(json!({
            "id": 1,
            "username": body["username"],
            "email": body["email"],
            "passwordHash": "$2a$10$hash",
            "createdAt": "2024-06-01T09:00:00"
        })),
    )
        .into_response()
}

async fn me(State(backend): State<Backend>, headers: HeaderMap) -> Response {
    if !backend.record_auth(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    Json(json!({"id": 1, "username": "mimi", "email": "mimi@example.com"})).into_response()
}

async fn list_tasks(
    State(backend): State<Backend>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if !backend.record_auth(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    backend
        .task_filters
        .lock()
        .unwrap()
        .push(params.get("status").cloned());
    Json(json!([
        {"id": 1, "title": "Water plants", "status": "IN_PROGRESS", "dueDate": "2024-06-01"},
        {"id": 2, "title": "Feed cat", "status": "completed", "priority": "high"}
    ]))
    .into_response()
}

async fn delete_task(
    State(backend): State<Backend>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> StatusCode {
    if !backend.record_auth(&headers) {
        return StatusCode::UNAUTHORIZED;
    }
    backend.deleted_tasks.lock().unwrap().push(id);
    StatusCode::NO_CONTENT
}

async fn get_task(Path(id): Path<i64>) -> Response {
    if id != 1 {
        return (StatusCode::NOT_FOUND, Json(json!({"message": "Task not found"})))
            .into_response();
    }
    Json(json!({"id": 1, "title": "Water plants", "status": "pending", "priority": "low"}))
        .into_response()
}

async fn list_entries(
    State(backend): State<Backend>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    backend.diary_ranges.lock().unwrap().push((
        params.get("startDate").cloned(),
        params.get("endDate").cloned(),
    ));
    Json(json!([
        {"id": 7, "title": "Park", "content": "Sunny walk", "mood": "happy", "entryDate": "2024-06-02"}
    ]))
}

async fn get_entry(Path(id): Path<i64>) -> Response {
    if id != 7 {
        return (StatusCode::NOT_FOUND, Json(json!({"message": "Diary entry not found"})))
            .into_response();
    }
    Json(json!({"id": 7, "content": "Sunny walk", "mood": "happy", "entryDate": "2024-06-02"}))
        .into_response()
}

fn entry_from_body(id: i64, body: &Value) -> Value {
    json!({
        "id": id,
        "userId": 1,
        "title": body["title"],
        "content": body["content"],
        "mood": body["mood"],
        "entryDate": body["entryDate"]
    })
}

async fn create_entry(State(backend): State<Backend>, Json(body): Json<Value>) -> Response {
    let entry = entry_from_body(8, &body);
    backend.diary_writes.lock().unwrap().push(("create", body));
    (StatusCode::CREATED, Json(entry)).into_response()
}

async fn update_entry(
    State(backend): State<Backend>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Json<Value> {
    let entry = entry_from_body(id, &body);
    backend.diary_writes.lock().unwrap().push(("update", body));
    Json(entry)
}

async fn delete_entry(State(backend): State<Backend>, Path(id): Path<i64>) -> StatusCode {
    backend.deleted_entries.lock().unwrap().push(id);
    StatusCode::NO_CONTENT
}

async fn daily_summary(
    State(backend): State<Backend>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let date = params.get("date").cloned();
    backend.summary_dates.lock().unwrap().push(date.clone());
    Json(json!({
        "date": date,
        "tasksCompleted": 2,
        "tasksPending": 1,
        "aiSuggestion": "Take a short walk.",
        "moodAnalysis": null,
        "tasks": null,
        "entries": [{"id": 7, "content": "Sunny walk", "mood": "happy"}]
    }))
}

async fn reminders() -> StatusCode {
    StatusCode::UNAUTHORIZED
}

async fn create_reminder(State(backend): State<Backend>, Json(body): Json<Value>) -> Json<Value> {
    backend.created_reminders.lock().unwrap().push(body.clone());
    Json(json!({
        "id": 5,
        "userId": 1,
        "taskId": body["taskId"],
        "reminderTime": body["reminderTime"],
        "sent": false
    }))
}

async fn mood_trend(Query(params): Query<HashMap<String, String>>) -> String {
    if params.get("period").map(String::as_str) == Some("last7days") {
        r#"[{"date":"2024-06-03","mood":"calm"},{"date":"2024-06-01","mood":"happy"}]"#
            .to_string()
    } else {
        "[]".to_string()
    }
}

async fn today_mood() -> &'static str {
    "Happy\n"
}

async fn chat(Json(body): Json<Value>) -> Response {
    match body["message"].as_str() {
        Some("boom") => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Sorry, I'm having trouble processing your request. Please try again later.",
        )
            .into_response(),
        Some("remind me") => Json(json!({
            "reply": "Reminder set.",
            "actions": [{"type": "reminder_created", "id": 4}]
        }))
        .into_response(),
        Some("silent") => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        Some(message) => format!("You said: {message}").into_response(),
        None => StatusCode::BAD_REQUEST.into_response(),
    }
}

async fn list_chat_sessions() -> Json<Value> {
    Json(json!([
        {"id": 3, "sessionId": "sess-3", "title": "Evening", "updatedAt": "2024-06-01T20:05:00"},
        {"id": 4, "sessionId": "sess-4", "title": null}
    ]))
}

async fn delete_chat_session(
    State(backend): State<Backend>,
    Path(session_id): Path<String>,
) -> StatusCode {
    backend.deleted_chat_sessions.lock().unwrap().push(session_id);
    StatusCode::NO_CONTENT
}

async fn create_chat_session(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    Json(json!({
        "id": 3,
        "sessionId": "sess-3",
        "title": params.get("title"),
        "createdAt": "2024-06-01T20:00:00"
    }))
}

async fn chat_session_messages(Path(session_id): Path<String>) -> Response {
    if session_id != "sess-3" {
        return (StatusCode::NOT_FOUND, Json(json!({"message": "Session not found"})))
            .into_response();
    }
    Json(json!([
        {"id": 1, "sessionId": 3, "role": "user", "content": "hello"},
        {"id": 2, "sessionId": 3, "role": "assistant", "content": "Meow!", "timestamp": "2024-06-01T20:00:05"}
    ]))
    .into_response()
}

async fn spawn_backend() -> (String, Backend) {
    let backend = Backend::default();
    let api = Router::new()
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
        .route("/auth/me", get(me))
        .route("/tasks", get(list_tasks))
        .route("/tasks/{id}", get(get_task).delete(delete_task))
        .route("/diary-entries", get(list_entries).post(create_entry))
        .route(
            "/diary-entries/{id}",
            get(get_entry).put(update_entry).delete(delete_entry),
        )
        .route("/reminders", get(reminders).post(create_reminder))
        .route("/reports/daily-summary", get(daily_summary))
        .route("/reports/mood-trend", get(mood_trend))
        .route("/reports/today-mood-summary", get(today_mood))
        .route("/ai/chat", post(chat))
        .route(
            "/chat-sessions",
            get(list_chat_sessions).post(create_chat_session),
        )
        .route("/chat-sessions/{session_id}", delete(delete_chat_session))
        .route("/chat-sessions/{session_id}/messages", get(chat_session_messages));
    let app = Router::new()
        .nest("/api/v1", api)
        .with_state(backend.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/api/v1"), backend)
}

fn client(base_url: &str, store: MemorySessionStore) -> ApiClient<MemorySessionStore> {
    ApiClient::new(&ClientConfig::new(base_url).unwrap(), store).unwrap()
}

fn signed_in_store() -> MemorySessionStore {
    MemorySessionStore::with_session(AuthSession {
        token: TOKEN.to_string(),
        user: UserInfo {
            id: 1,
            username: "mimi".to_string(),
            email: None,
        },
    })
}

#[tokio::test]
async fn login_persists_session_and_token_is_injected() {
    let (base_url, backend) = spawn_backend().await;
    let store = MemorySessionStore::default();
    let auth = AuthService::new(client(&base_url, store.clone()));

    let session = auth.login(" mimi ", "meow").await.unwrap();
    assert_eq!(session.token, TOKEN);
    assert_eq!(session.user.username, "mimi");
    assert_eq!(store.load_session().unwrap(), Some(session));

    let tasks = auth.api().list_tasks(None).await.unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(
        backend.authorization.lock().unwrap().last().cloned().flatten(),
        Some(format!("Bearer {TOKEN}"))
    );
}

#[tokio::test]
async fn wrong_password_is_not_treated_as_expired_session() {
    let (base_url, _backend) = spawn_backend().await;
    let hook_calls = Arc::new(AtomicUsize::new(0));
    let calls = hook_calls.clone();
    let api = client(&base_url, MemorySessionStore::default()).with_unauthorized_hook(move || {
        calls.fetch_add(1, Ordering::SeqCst);
    });
    let auth = AuthService::new(api);

    let error = auth.login("mimi", "woof").await.unwrap_err();
    assert_eq!(error.status(), Some(401));
    assert_eq!(
        describe_login_error(&error),
        "Invalid username or password. Please try again."
    );
    assert_eq!(hook_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn register_signs_in_automatically() {
    let (base_url, _backend) = spawn_backend().await;
    let store = MemorySessionStore::default();
    let auth = AuthService::new(client(&base_url, store.clone()));

    let session = auth
        .register("mimi", "mimi@example.com", "meow")
        .await
        .unwrap();
    assert_eq!(session.user.id, 1);
    assert!(store.load_session().unwrap().is_some());
}

#[tokio::test]
async fn duplicate_username_suggests_signing_in() {
    let (base_url, _backend) = spawn_backend().await;
    let auth = AuthService::new(client(&base_url, MemorySessionStore::default()));

    let error = auth
        .register("taken", "taken@example.com", "meow")
        .await
        .unwrap_err();
    assert!(matches!(error, Error::Api { status: 409, .. }));
    assert_eq!(
        describe_register_error(&error),
        "Username already exists. Please sign in instead."
    );
}

#[tokio::test]
async fn unauthorized_response_clears_session_and_fires_hook() {
    let (base_url, _backend) = spawn_backend().await;
    let store = signed_in_store();
    let hook_calls = Arc::new(AtomicUsize::new(0));
    let calls = hook_calls.clone();
    let api = client(&base_url, store.clone()).with_unauthorized_hook(move || {
        calls.fetch_add(1, Ordering::SeqCst);
    });

    let error = api.list_reminders().await.unwrap_err();
    assert!(matches!(error, Error::Unauthorized));
    assert!(store.load_session().unwrap().is_none());
    assert!(!api.has_session());
    assert_eq!(hook_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn restore_session_validates_stored_token() {
    let (base_url, _backend) = spawn_backend().await;
    let auth = AuthService::new(client(&base_url, signed_in_store()));
    let user = auth.restore_session().await.unwrap().unwrap();
    assert_eq!(user.email.as_deref(), Some("mimi@example.com"));

    let stale = MemorySessionStore::with_session(AuthSession {
        token: "expired".to_string(),
        user: user.clone(),
    });
    let auth = AuthService::new(client(&base_url, stale.clone()));
    assert_eq!(auth.restore_session().await.unwrap(), None);
    assert!(stale.load_session().unwrap().is_none());
}

#[tokio::test]
async fn restore_session_keeps_user_when_backend_is_unreachable() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let store = signed_in_store();
    let auth = AuthService::new(client(&format!("http://{addr}/api/v1"), store.clone()));
    let user = auth.restore_session().await.unwrap();
    assert_eq!(user.map(|user| user.username), Some("mimi".to_string()));
    assert!(store.load_session().unwrap().is_some());
}

#[tokio::test]
async fn task_listing_sends_status_filter_and_parses_statuses() {
    let (base_url, backend) = spawn_backend().await;
    let api = client(&base_url, signed_in_store());

    let tasks = api.list_tasks(Some(TaskStatus::InProgress)).await.unwrap();
    assert_eq!(tasks[0].status, TaskStatus::InProgress);
    assert_eq!(tasks[1].status, TaskStatus::Completed);
    assert_eq!(
        backend.task_filters.lock().unwrap().clone(),
        vec![Some("in_progress".to_string())]
    );

    api.list_tasks(None).await.unwrap();
    assert_eq!(backend.task_filters.lock().unwrap().last().cloned(), Some(None));
}

#[tokio::test]
async fn delete_accepts_empty_body() {
    let (base_url, backend) = spawn_backend().await;
    let api = client(&base_url, signed_in_store());

    api.delete_task(2).await.unwrap();
    assert_eq!(backend.deleted_tasks.lock().unwrap().clone(), vec![2]);
}

#[tokio::test]
async fn reports_parse_text_bodies() {
    let (base_url, _backend) = spawn_backend().await;
    let api = client(&base_url, signed_in_store());

    let trend = api.mood_trend(TrendPeriod::Last7Days).await.unwrap();
    let moods: Vec<&str> = trend.points.iter().map(|point| point.mood.as_str()).collect();
    assert_eq!(moods, vec!["happy", "calm"]);

    assert!(api.mood_trend(TrendPeriod::Last30Days).await.unwrap().is_empty());
    assert_eq!(api.today_mood().await.unwrap().as_deref(), Some("Happy"));
}

#[tokio::test]
async fn chat_replies_are_normalized() {
    let (base_url, _backend) = spawn_backend().await;
    let api = client(&base_url, signed_in_store());

    let reply = api.send_chat("  hello  ").await.unwrap();
    assert_eq!(reply.text, "You said: hello");

    let reply = api.send_chat("remind me").await.unwrap();
    assert_eq!(reply.text, "Reminder set.");
    assert!(reply.touched_resources().contains(&Resource::Reminders));

    let error = api.send_chat("boom").await.unwrap_err();
    assert_eq!(error.status(), Some(500));
    assert!(failure_message(&error).starts_with("Sorry, I'm having trouble"));

    let error = api.send_chat("silent").await.unwrap_err();
    assert_eq!(error.status(), Some(500));
    assert_eq!(error.to_string(), "HTTP 500");
    assert_eq!(
        failure_message(&error),
        "Sorry, I'm having trouble connecting. Please try again later."
    );
}

#[tokio::test]
async fn chat_sessions_send_title_and_report_missing_sessions() {
    let (base_url, _backend) = spawn_backend().await;
    let api = client(&base_url, signed_in_store());

    let session = api.create_chat_session(Some("  Evening  ")).await.unwrap();
    assert_eq!(session.session_id, "sess-3");
    assert_eq!(session.title.as_deref(), Some("Evening"));

    let messages = api.chat_session_messages("sess-3").await.unwrap();
    let roles: Vec<_> = messages.iter().map(|m| m.role.as_str()).collect();
    assert_eq!(roles, ["user", "assistant"]);
    assert_eq!(messages[1].content, "Meow!");

    match api.chat_session_messages("sess-9").await {
        Err(Error::Api { status, message }) => {
            assert_eq!(status, 404);
            assert_eq!(message, "Session not found");
        }
        other => panic!("expected api error, got {other:?}"),
    }
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
}

#[tokio::test]
async fn diary_crud_round_trips_through_backend() {
    let (base_url, backend) = spawn_backend().await;
    let api = client(&base_url, signed_in_store());

    let entries = api.list_entries(DiaryRange::new(day(9), day(1))).await.unwrap();
    assert_eq!(entries[0].display_title(), "Park");
    assert_eq!(
        backend.diary_ranges.lock().unwrap().clone(),
        vec![(Some("2024-06-01".to_string()), Some("2024-06-09".to_string()))]
    );

    let entry = api.get_entry(7).await.unwrap();
    assert_eq!(entry.display_title(), "(No title)");
    assert_eq!(api.get_entry(99).await.unwrap_err().status(), Some(404));

    let draft = DiaryDraft::new(" ", " Rainy day ", Some("sad".to_string()), day(3)).unwrap();
    let created = api.create_entry(&draft).await.unwrap();
    assert_eq!(created.id, 8);
    assert_eq!(created.entry_date, Some(day(3)));

    let updated = api.update_entry(8, &draft).await.unwrap();
    assert_eq!(updated.content.as_deref(), Some("Rainy day"));

    let writes = backend.diary_writes.lock().unwrap().clone();
    assert_eq!(writes.len(), 2);
    assert_eq!(writes[0].0, "create");
    assert_eq!(
        writes[0].1,
        json!({"content": "Rainy day", "mood": "sad", "entryDate": "2024-06-03"})
    );
    assert_eq!(writes[1].0, "update");

    api.delete_entry(8).await.unwrap();
    assert_eq!(backend.deleted_entries.lock().unwrap().clone(), vec![8]);
}

#[tokio::test]
async fn blank_diary_content_is_rejected_before_sending() {
    let (base_url, backend) = spawn_backend().await;
    let api = client(&base_url, signed_in_store());
    let draft = DiaryDraft {
        title: None,
        content: "   ".to_string(),
        mood: None,
        entry_date: Some(day(3)),
    };

    assert!(matches!(
        api.create_entry(&draft).await,
        Err(Error::InvalidInput(_))
    ));
    assert!(backend.diary_writes.lock().unwrap().is_empty());
}

#[tokio::test]
async fn get_task_fetches_single_task() {
    let (base_url, _backend) = spawn_backend().await;
    let api = client(&base_url, signed_in_store());

    let task = api.get_task(1).await.unwrap();
    assert_eq!(task.title, "Water plants");
    assert_eq!(task.status, TaskStatus::Pending);

    let error = api.get_task(42).await.unwrap_err();
    assert_eq!(error.server_message(), Some("Task not found"));
}

#[tokio::test]
async fn daily_summary_sends_date_and_fills_defaults() {
    let (base_url, backend) = spawn_backend().await;
    let api = client(&base_url, signed_in_store());

    let summary = api.daily_summary(day(2)).await.unwrap();
    assert_eq!(summary.date, Some(day(2)));
    assert_eq!(summary.tasks_completed, 2);
    assert_eq!(summary.tasks_pending, 1);
    assert!(summary.tasks.is_empty());
    assert_eq!(summary.entries.len(), 1);
    assert_eq!(summary.suggestion_text(), "Take a short walk.");
    assert_eq!(summary.mood_analysis_text(), None);
    assert_eq!(
        backend.summary_dates.lock().unwrap().clone(),
        vec![Some("2024-06-02".to_string())]
    );
}

#[tokio::test]
async fn create_reminder_posts_task_and_time() {
    let (base_url, backend) = spawn_backend().await;
    let api = client(&base_url, signed_in_store());

    let draft = ReminderDraft::parse(Some(2), "2024-06-01T10:30").unwrap();
    let reminder = api.create_reminder(&draft).await.unwrap();
    assert_eq!(reminder.id, 5);
    assert_eq!(reminder.task_id, 2);
    assert!(!reminder.is_sent);
    assert_eq!(
        backend.created_reminders.lock().unwrap().clone(),
        vec![json!({"taskId": 2, "reminderTime": "2024-06-01T10:30:00"})]
    );
}

#[tokio::test]
async fn chat_sessions_are_listed_and_deleted_by_encoded_id() {
    let (base_url, backend) = spawn_backend().await;
    let api = client(&base_url, signed_in_store());

    let sessions = api.list_chat_sessions().await.unwrap();
    let ids: Vec<&str> = sessions.iter().map(|s| s.session_id.as_str()).collect();
    assert_eq!(ids, ["sess-3", "sess-4"]);
    assert_eq!(sessions[1].title, None);

    api.delete_chat_session("night chat/2").await.unwrap();
    assert_eq!(
        backend.deleted_chat_sessions.lock().unwrap().clone(),
        vec!["night chat/2".to_string()]
    );
}
