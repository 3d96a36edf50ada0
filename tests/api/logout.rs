use crate::helpers::TestApp;

#[tokio::test]
async fn logout_revokes_the_session() {
    let app = TestApp::new().await;
    let token = app
        .signup_and_login("gina@example.com", "Sup3rSecret!", "standard")
        .await;

    let response = app.get_tasks(Some(&token)).await;
    assert_eq!(response.status().as_u16(), 200);

    let response = app.logout(&token).await;
    assert_eq!(response.status().as_u16(), 200);

    // The token still carries a valid signature, but its session entry is
    // gone, so every protected route turns it away.
    let response = app.get_tasks(Some(&token)).await;
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn second_logout_is_unauthorized() {
    let app = TestApp::new().await;
    let token = app
        .signup_and_login("hank@example.com", "Sup3rSecret!", "standard")
        .await;

    let first = app.logout(&token).await;
    assert_eq!(first.status().as_u16(), 200);

    let second = app.logout(&token).await;
    assert_eq!(second.status().as_u16(), 401);
}

#[tokio::test]
async fn relogin_issues_a_fresh_working_token() {
    let app = TestApp::new().await;
    let token = app
        .signup_and_login("iris@example.com", "Sup3rSecret!", "standard")
        .await;

    let _ = app.logout(&token).await;

    let response = app.login("iris@example.com", "Sup3rSecret!").await;
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    let fresh = body["access_token"].as_str().unwrap().to_owned();

    let response = app.get_tasks(Some(&fresh)).await;
    assert_eq!(response.status().as_u16(), 200);
}
