use super::*;

#[test]
fn login_success_goes_to_list() {
    assert_eq!(success_path(AuthMode::Login), "/list");
}

#[test]
fn register_success_goes_to_login() {
    assert_eq!(success_path(AuthMode::Register), "/login");
}

#[test]
fn alternate_links_point_at_the_other_mode() {
    assert_eq!(alternate_path(AuthMode::Login), "/register");
    assert_eq!(alternate_path(AuthMode::Register), "/login");
}

#[test]
fn password_fields_are_masked() {
    assert_eq!(input_type(AuthField::Password), "password");
    assert_eq!(input_type(AuthField::ConfirmPassword), "password");
    assert_eq!(input_type(AuthField::Email), "email");
}

#[test]
fn every_register_field_has_a_label() {
    for field in AuthForm::new(AuthMode::Register).fields() {
        assert!(!field_label(*field).is_empty());
    }
}
