use crate::helpers::TestApp;

#[tokio::test]
async fn register_returns_201_for_valid_input() {
    let app = TestApp::new().await;

    let response = app.register("new@example.com", "Sup3rSecret!", "standard").await;
    assert_eq!(response.status().as_u16(), 201);

    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["id"].is_i64());
}

#[tokio::test]
async fn register_rejects_invalid_email() {
    let app = TestApp::new().await;

    let response = app.register("not-an-email", "Sup3rSecret!", "standard").await;
    assert_eq!(response.status().as_u16(), 422);
}

#[tokio::test]
async fn register_rejects_weak_password() {
    let app = TestApp::new().await;

    let response = app.register("weak@example.com", "password", "standard").await;
    assert_eq!(response.status().as_u16(), 422);
}

#[tokio::test]
async fn register_rejects_duplicate_email() {
    let app = TestApp::new().await;

    let first = app.register("dup@example.com", "Sup3rSecret!", "standard").await;
    assert_eq!(first.status().as_u16(), 201);

    let second = app.register("dup@example.com", "Sup3rSecret!", "standard").await;
    assert_eq!(second.status().as_u16(), 409);
}
