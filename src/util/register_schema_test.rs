use super::*;

fn input(name: &str, email: &str, password: &str, confirm: &str) -> RegisterInput {
    RegisterInput {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        confirm_password: confirm.to_owned(),
    }
}

// =============================================================
// RegisterField
// =============================================================

#[test]
fn field_keys_match_form_names() {
    let keys: Vec<_> = RegisterField::ALL.iter().map(|f| f.key()).collect();
    assert_eq!(keys, ["name", "email", "password", "confirmPassword"]);
}

#[test]
fn field_from_key_rejects_unknown() {
    assert_eq!(RegisterField::from_key("confirmPassword"), Some(RegisterField::ConfirmPassword));
    assert_eq!(RegisterField::from_key("confirm_password"), None);
}

#[test]
fn password_fields_use_password_inputs() {
    assert_eq!(RegisterField::Password.input_type(), "password");
    assert_eq!(RegisterField::ConfirmPassword.input_type(), "password");
    assert_eq!(RegisterField::Email.input_type(), "email");
}

// =============================================================
// RegisterInput
// =============================================================

#[test]
fn from_pairs_fills_known_fields_and_ignores_others() {
    let input = RegisterInput::from_pairs([
        ("name", "Ann"),
        ("email", "ann@x.com"),
        ("csrf", "zzz"),
        ("confirmPassword", "Secret123"),
    ]);
    assert_eq!(input.name, "Ann");
    assert_eq!(input.email, "ann@x.com");
    assert_eq!(input.password, "");
    assert_eq!(input.confirm_password, "Secret123");
}

// =============================================================
// validate_registration
// =============================================================

#[test]
fn valid_input_produces_payload() {
    let data = validate_registration(&input("Ann", "ann@x.com", "Secret123", "Secret123")).unwrap();
    assert_eq!(
        data,
        RegisterData {
            name: "Ann".to_owned(),
            email: "ann@x.com".to_owned(),
            password: "Secret123".to_owned(),
            confirm_password: "Secret123".to_owned(),
        }
    );
}

#[test]
fn valid_input_trims_name_and_email_only() {
    let data = validate_registration(&input("  Ann ", " ann@x.com ", " Secret123", " Secret123")).unwrap();
    assert_eq!(data.name, "Ann");
    assert_eq!(data.email, "ann@x.com");
    assert_eq!(data.password, " Secret123");
}

#[test]
fn empty_input_flags_every_field() {
    let errors = validate_registration(&RegisterInput::default()).unwrap_err();
    for field in RegisterField::ALL {
        assert!(errors.has(field), "{field:?} should have errors");
    }
    assert_eq!(errors.field_count(), 4);
}

#[test]
fn whitespace_name_is_required() {
    let errors = validate_registration(&input("   ", "ann@x.com", "Secret123", "Secret123")).unwrap_err();
    assert_eq!(errors.messages(RegisterField::Name), ["Name is required"]);
    assert_eq!(errors.field_count(), 1);
}

#[test]
fn empty_email_reports_required_before_format() {
    let errors = validate_registration(&input("Ann", "  ", "Secret123", "Secret123")).unwrap_err();
    assert_eq!(errors.messages(RegisterField::Email), ["Email is required", "Invalid email address"]);
}

#[test]
fn malformed_emails_are_rejected() {
    for email in ["ann", "@x.com", "ann@", "ann@.com", "ann@x.", "a@b..c", "a@b@c.com", "an n@x.com"] {
        let errors = validate_registration(&input("Ann", email, "Secret123", "Secret123")).unwrap_err();
        assert_eq!(errors.messages(RegisterField::Email), ["Invalid email address"], "{email}");
    }
}

#[test]
fn empty_password_reports_rules_in_order() {
    let errors = validate_registration(&input("Ann", "ann@x.com", "", "x")).unwrap_err();
    assert_eq!(
        errors.messages(RegisterField::Password),
        ["Password must be at least 8 characters", "Password must contain at least one number"]
    );
}

#[test]
fn password_without_digit_is_rejected() {
    let errors = validate_registration(&input("Ann", "ann@x.com", "SecretSecret", "SecretSecret")).unwrap_err();
    assert_eq!(errors.messages(RegisterField::Password), ["Password must contain at least one number"]);
    assert!(!errors.has(RegisterField::ConfirmPassword));
}

#[test]
fn mismatched_confirmation_is_flagged_on_confirm_field() {
    let errors = validate_registration(&input("Ann", "ann@x.com", "Secret123", "Secret124")).unwrap_err();
    assert_eq!(errors.messages(RegisterField::ConfirmPassword), ["Passwords do not match"]);
    assert!(!errors.has(RegisterField::Password));
}

#[test]
fn empty_confirmation_asks_to_confirm_then_mismatches() {
    let errors = validate_registration(&input("Ann", "ann@x.com", "Secret123", "")).unwrap_err();
    assert_eq!(
        errors.messages(RegisterField::ConfirmPassword),
        ["Please confirm your password", "Passwords do not match"]
    );
}

#[test]
fn both_passwords_empty_do_not_report_mismatch() {
    let errors = validate_registration(&input("Ann", "ann@x.com", "", "")).unwrap_err();
    assert_eq!(errors.messages(RegisterField::ConfirmPassword), ["Please confirm your password"]);
}

#[test]
fn subdomain_email_is_accepted() {
    let data = validate_registration(&input("Ann", "ann.lee+reg@mail.x-corp.com", "Secret123", "Secret123")).unwrap();
    assert_eq!(data.email, "ann.lee+reg@mail.x-corp.com");
}

// =============================================================
// ValidationErrors -> FieldErrors
// =============================================================

#[test]
fn schema_keys_map_rust_and_wire_spellings() {
    assert_eq!(RegisterField::from_schema_key("confirm_password"), Some(RegisterField::ConfirmPassword));
    assert_eq!(RegisterField::from_schema_key("confirmPassword"), Some(RegisterField::ConfirmPassword));
    assert_eq!(RegisterField::from_schema_key("email"), Some(RegisterField::Email));
    assert_eq!(RegisterField::from_schema_key("__all__"), None);
}

#[test]
fn conversion_keeps_rule_order_and_falls_back_to_code() {
    let mut errors = ValidationErrors::new();
    let mut first = ValidationError::new("length");
    first.message = Some("too short".into());
    errors.add("password", first);
    errors.add("password", ValidationError::new("digit"));
    errors.add("unknown", ValidationError::new("ignored"));

    let fields = FieldErrors::from(&errors);
    assert_eq!(fields.messages(RegisterField::Password), ["too short", "digit"]);
    assert_eq!(fields.field_count(), 1);
}

#[test]
fn messages_for_clean_field_is_empty_slice() {
    let errors = FieldErrors::default();
    assert!(errors.messages(RegisterField::Name).is_empty());
    assert!(errors.is_empty());
}
