//! Login/registration form model with client-side validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth page re-validates on every field change and only shows messages
//! for touched fields. `submission` is the single gate to the network: it
//! returns the request body only when every rule passes.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

use std::collections::BTreeSet;

use crate::net::types::{LoginRequest, RegisterRequest};

pub const USERNAME_MIN_CHARS: usize = 3;
pub const PASSWORD_MIN_CHARS: usize = 7;

/// Which form the page presents; decided by the route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

impl AuthMode {
    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Register",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Login => "Sign in",
            Self::Register => "Create account",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum AuthField {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

/// Per-field validation messages; `None` means the field is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthErrors {
    pub username: Option<&'static str>,
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
    pub confirm_password: Option<&'static str>,
}

impl AuthErrors {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none() && self.password.is_none() && self.confirm_password.is_none()
    }

    pub fn get(&self, field: AuthField) -> Option<&'static str> {
        match field {
            AuthField::Username => self.username,
            AuthField::Email => self.email,
            AuthField::Password => self.password,
            AuthField::ConfirmPassword => self.confirm_password,
        }
    }
}

/// Validated request ready to send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthSubmission {
    Login(LoginRequest),
    Register(RegisterRequest),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    touched: BTreeSet<AuthField>,
}

impl AuthForm {
    /// Blank form for `mode`. Switching modes always starts from a fresh form.
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            username: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            touched: BTreeSet::new(),
        }
    }

    /// Fields rendered for the current mode.
    pub fn fields(&self) -> &'static [AuthField] {
        match self.mode {
            AuthMode::Login => &[AuthField::Email, AuthField::Password],
            AuthMode::Register => &[
                AuthField::Username,
                AuthField::Email,
                AuthField::Password,
                AuthField::ConfirmPassword,
            ],
        }
    }

    pub fn value(&self, field: AuthField) -> &str {
        match field {
            AuthField::Username => &self.username,
            AuthField::Email => &self.email,
            AuthField::Password => &self.password,
            AuthField::ConfirmPassword => &self.confirm_password,
        }
    }

    /// Update one field and mark it touched.
    pub fn set(&mut self, field: AuthField, value: String) {
        match field {
            AuthField::Username => self.username = value,
            AuthField::Email => self.email = value,
            AuthField::Password => self.password = value,
            AuthField::ConfirmPassword => self.confirm_password = value,
        }
        self.touched.insert(field);
    }

    pub fn touch_all(&mut self) {
        self.touched.extend(self.fields().iter().copied());
    }

    pub fn validate(&self) -> AuthErrors {
        match self.mode {
            AuthMode::Login => AuthErrors {
                email: validate_email(&self.email),
                password: self.password.is_empty().then_some("Password is required"),
                ..AuthErrors::default()
            },
            AuthMode::Register => AuthErrors {
                username: validate_username(&self.username),
                email: validate_email(&self.email),
                password: validate_new_password(&self.password),
                confirm_password: validate_confirmation(&self.password, &self.confirm_password),
            },
        }
    }

    /// Message to display for `field`, hidden until the field was touched.
    pub fn visible_error(&self, field: AuthField) -> Option<&'static str> {
        if !self.touched.contains(&field) {
            return None;
        }
        self.validate().get(field)
    }

    /// Request body when the form is valid, otherwise every field error.
    ///
    /// # Errors
    ///
    /// Returns the validation messages if any rule fails.
    pub fn submission(&self) -> Result<AuthSubmission, AuthErrors> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(match self.mode {
            AuthMode::Login => AuthSubmission::Login(LoginRequest {
                email: self.email.clone(),
                password: self.password.clone(),
            }),
            AuthMode::Register => AuthSubmission::Register(RegisterRequest {
                username: self.username.clone(),
                email: self.email.clone(),
                password: self.password.clone(),
            }),
        })
    }
}

fn validate_username(username: &str) -> Option<&'static str> {
    if username.is_empty() {
        Some("Username is required")
    } else if username.chars().count() < USERNAME_MIN_CHARS {
        Some("Username must be at least 3 characters")
    } else {
        None
    }
}

fn validate_email(email: &str) -> Option<&'static str> {
    if email.is_empty() {
        Some("Email is required")
    } else if !is_valid_email(email) {
        Some("Email is invalid")
    } else {
        None
    }
}

fn validate_new_password(password: &str) -> Option<&'static str> {
    if password.is_empty() {
        Some("Password is required")
    } else if password.chars().count() < PASSWORD_MIN_CHARS {
        Some("Password must be at least 7 characters")
    } else {
        None
    }
}

fn validate_confirmation(password: &str, confirmation: &str) -> Option<&'static str> {
    if confirmation.is_empty() {
        Some("Please confirm your password")
    } else if confirmation != password {
        Some("Passwords do not match")
    } else {
        None
    }
}

/// `local@domain.tld` with no whitespace, a single `@`, and non-empty dot-separated domain labels.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || !domain.contains('.') {
        return false;
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    let tld_ok = labels.last().is_some_and(|tld| tld.chars().count() >= 2);
    tld_ok
        && labels.iter().all(|label| {
            !label.is_empty()
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| c.is_alphanumeric() || c == '-')
        })
}
