use crate::helpers::TestApp;

#[tokio::test]
async fn login_returns_a_bearer_token() {
    let app = TestApp::new().await;
    let _ = app.register("alice@example.com", "Sup3rSecret!", "standard").await;

    let response = app.login("alice@example.com", "Sup3rSecret!").await;
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    let token = body["access_token"].as_str().unwrap();
    assert_eq!(token.split('.').count(), 3);
}

#[tokio::test]
async fn login_rejects_wrong_password() {
    let app = TestApp::new().await;
    let _ = app.register("bob@example.com", "Sup3rSecret!", "standard").await;

    let response = app.login("bob@example.com", "WrongSecret!").await;
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn login_rejects_unknown_user_with_the_same_answer() {
    let app = TestApp::new().await;

    let response = app.login("ghost@example.com", "Sup3rSecret!").await;
    assert_eq!(response.status().as_u16(), 401);
}
