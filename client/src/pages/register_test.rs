use super::*;

#[test]
fn validate_register_input_trims_and_parses_role() {
    assert_eq!(
        validate_register_input(" Rita ", " rita@bricks.fit ", "hunter22", "personal"),
        Ok(RegisterInput {
            name: "Rita".to_owned(),
            email: "rita@bricks.fit".to_owned(),
            password: "hunter22".to_owned(),
            user_type: UserType::Personal,
        })
    );
}

#[test]
fn validate_register_input_requires_all_fields() {
    assert_eq!(
        validate_register_input("", "a@b.com", "hunter22", "student"),
        Err("Fill in name, email and password.")
    );
    assert_eq!(
        validate_register_input("Sam", "  ", "hunter22", "student"),
        Err("Fill in name, email and password.")
    );
}

#[test]
fn validate_register_input_enforces_min_password_length() {
    assert_eq!(
        validate_register_input("Sam", "a@b.com", "12345", "student"),
        Err("Password must be at least 6 characters.")
    );
    assert!(validate_register_input("Sam", "a@b.com", "123456", "student").is_ok());
}

#[test]
fn validate_register_input_rejects_unknown_role() {
    assert_eq!(
        validate_register_input("Sam", "a@b.com", "hunter22", "admin"),
        Err("Choose trainer or student.")
    );
}
