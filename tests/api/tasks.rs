use crate::helpers::TestApp;

#[tokio::test]
async fn tasks_require_a_bearer_token() {
    let app = TestApp::new().await;

    let response = app.get_tasks(None).await;
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn tasks_reject_a_garbage_token() {
    let app = TestApp::new().await;

    let response = app.get_tasks(Some("not.a.token")).await;
    assert_eq!(response.status().as_u16(), 401);
}

#[tokio::test]
async fn added_tasks_show_up_in_the_listing() {
    let app = TestApp::new().await;
    let token = app
        .signup_and_login("carol@example.com", "Sup3rSecret!", "standard")
        .await;

    let response = app.get_tasks(Some(&token)).await;
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body.as_array().unwrap().len(), 0);

    let response = app.post_task(&token, "learn ownership").await;
    assert_eq!(response.status().as_u16(), 201);
    let created: serde_json::Value = response.json().await.unwrap();
    assert_eq!(created["title"], "learn ownership");
    assert_eq!(created["status"], "todo");

    let response = app.get_tasks(Some(&token)).await;
    let body: serde_json::Value = response.json().await.unwrap();
    let titles: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["learn ownership"]);
}

#[tokio::test]
async fn add_task_rejects_an_empty_title() {
    let app = TestApp::new().await;
    let token = app
        .signup_and_login("dave@example.com", "Sup3rSecret!", "standard")
        .await;

    let response = app.post_task(&token, "   ").await;
    assert_eq!(response.status().as_u16(), 422);
}

#[tokio::test]
async fn users_only_see_their_own_tasks() {
    let app = TestApp::new().await;
    let erin = app
        .signup_and_login("erin@example.com", "Sup3rSecret!", "standard")
        .await;
    let frank = app
        .signup_and_login("frank@example.com", "Sup3rSecret!", "standard")
        .await;

    let _ = app.post_task(&erin, "erin's task").await;

    let response = app.get_tasks(Some(&frank)).await;
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body.as_array().unwrap().len(), 0);
}
