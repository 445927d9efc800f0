//! Sample users loaded at startup.

use identity_mock_common::User;

/// The two fixed sample users, in insertion order.
pub fn sample_users() -> Vec<User> {
    vec![
        User {
            user_id: "1".to_string(),
            name: Some("John Doe".to_string()),
            email: Some("john.doe@test.com".to_string()),
            phone_number: Some("777777777".to_string()),
            username: Some("user1".to_string()),
            password: Some("pass1".to_string()),
            pin: Some("1234".to_string()),
            ..Default::default()
        },
        User {
            user_id: "2".to_string(),
            name: Some("Jane Doe".to_string()),
            email: Some("jane.doe@test.com".to_string()),
            phone_number: Some("888888888".to_string()),
            username: Some("user2".to_string()),
            password: Some("pass2".to_string()),
            pin: Some("4321".to_string()),
            ..Default::default()
        },
    ]
}
