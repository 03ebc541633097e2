//! Integration tests for the GET /users and GET /users/{id} endpoints.

use reqwest::StatusCode;
use rstest::rstest;

use crate::common::*;

#[rstest]
#[tokio::test]
async fn get_user_returns_created_user() {
    let client = spawn_app().await;
    client.create_user(&UserFactory::john()).await.unwrap();

    let result = client.get_user("1").await;

    assert_success(&result);
    let user = result.unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(user.first_name, "John");
}

#[rstest]
#[tokio::test]
async fn get_user_missing_id_is_404() {
    let client = spawn_app().await;

    let result = client.get_user("999").await;

    assert_api_error(&result, StatusCode::NOT_FOUND, "NOT_FOUND");
}

#[rstest]
#[tokio::test]
async fn get_user_malformed_id_is_400() {
    let client = spawn_app().await;

    let result = client.get_user("not-a-number").await;

    assert_api_error(&result, StatusCode::BAD_REQUEST, "INVALID_INPUT");
}

#[rstest]
#[tokio::test]
async fn get_users_lists_in_insertion_order() {
    let client = spawn_app().await;
    client.create_user(&UserFactory::john()).await.unwrap();
    client.create_user(&UserFactory::jane()).await.unwrap();

    let result = client.get_users().await;

    assert_success(&result);
    let users = result.unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0].first_name, "John");
    assert_eq!(users[1].first_name, "Jane");
}

#[rstest]
#[tokio::test]
async fn get_users_on_fresh_store_is_empty() {
    let client = spawn_app().await;

    let result = client.get_users().await;

    assert_success(&result);
    assert!(result.unwrap().is_empty());
}
