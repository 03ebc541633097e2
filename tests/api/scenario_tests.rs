//! The full ledger walkthrough, end to end over HTTP.

use rstest::rstest;

use crate::common::*;

#[rstest]
#[tokio::test]
async fn john_and_jane_walkthrough() {
    let client = spawn_app().await;

    // John opens an account.
    let john = client
        .create_user(&CreateUserBody {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john.doe@email.com".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(john.id, 1);
    assert_eq!(john.first_name, "John");
    assert_eq!(john.email, "john.doe@email.com");

    // A deposit of "10.099" truncates to 1009 cents.
    let transaction = client.deposit("1", "10.099").await.unwrap();
    assert_eq!(transaction.amount_in_cents, 1009);
    assert_eq!(client.get_balance("1").await.unwrap().balance_in_cents, 1009);

    // Jane arrives.
    let jane = client.create_user(&UserFactory::jane()).await.unwrap();
    assert_eq!(jane.id, 2);

    // John sends Jane 2.30.
    client.transfer("1", "2", "2.3").await.unwrap();
    assert_eq!(client.get_balance("1").await.unwrap().balance_in_cents, 779);
    assert_eq!(client.get_balance("2").await.unwrap().balance_in_cents, 230);
}
