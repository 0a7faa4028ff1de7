//! Integration tests for password hashing and credential verification.

use std::sync::Arc;

use pantry_auth::identity::{IdentityStore, NewUser};
use pantry_auth::password::{hash_password, validate_password, verify_password};
use pantry_auth::AuthError;
use pantry_store::test_utils::InMemoryBackend;

fn create_store() -> IdentityStore {
    IdentityStore::with_cost(Arc::new(InMemoryBackend::new()), 4)
}

#[tokio::test]
async fn test_hashes_are_salted() {
    let a = hash_password("Password123", Some(4)).await.unwrap();
    let b = hash_password("Password123", Some(4)).await.unwrap();

    // Same password, different salt, different hash; both verify.
    assert_ne!(a, b);
    assert!(verify_password("Password123", &a).await.unwrap());
    assert!(verify_password("Password123", &b).await.unwrap());
}

#[tokio::test]
async fn test_raw_password_is_never_stored() {
    let store = create_store();
    let user = store
        .create_user(NewUser {
            email: "alice@test.com".to_string(),
            password: "Password123".to_string(),
            name: "Alice".to_string(),
        })
        .await
        .unwrap();

    assert_ne!(user.password_hash, "Password123");
    assert!(user.password_hash.starts_with("$2b$"));
    assert!(!user.password_hash.contains("Password123"));
}

#[tokio::test]
async fn test_verify_rejects_tampered_hash() {
    let result = verify_password("Password123", "not-a-bcrypt-hash").await;
    assert!(matches!(result, Err(AuthError::HashingError(_))));
}

#[test]
fn test_password_length_bounds() {
    assert!(validate_password("1234567").is_err());
    assert!(validate_password("12345678").is_ok());
    assert!(validate_password(&"x".repeat(72)).is_ok());
    assert!(validate_password(&"x".repeat(73)).is_err());
}
