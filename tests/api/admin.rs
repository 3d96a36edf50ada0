use crate::helpers::TestApp;

#[tokio::test]
async fn admin_route_rejects_standard_users_with_403() {
    let app = TestApp::new().await;
    let token = app
        .signup_and_login("standard@example.com", "Sup3rSecret!", "standard")
        .await;

    // The auth stage accepts the token; the role gate is what says no.
    let response = app.get_admin(&token).await;
    assert_eq!(response.status().as_u16(), 403);
}

#[tokio::test]
async fn admin_route_accepts_admins() {
    let app = TestApp::new().await;
    let token = app
        .signup_and_login("root@example.com", "Sup3rSecret!", "admin")
        .await;

    let response = app.get_admin(&token).await;
    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["message"], "admin only");
}

#[tokio::test]
async fn admin_route_still_requires_a_token() {
    let app = TestApp::new().await;

    let response = app
        .http_client
        .get(format!("{}/admin", app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 401);
}
