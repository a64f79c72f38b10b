// File: src/validation/entities.rs
// Purpose: Per-form rule sets (login, signup, password reset, profile, address...)

use serde::{Deserialize, Serialize};
use tracing::debug;
use usercenter_validation::{
    check_confirmation, check_email, check_iso_date, check_one_of, check_optional_text,
    check_password,
};

use super::{validate, FieldCheck, ValidationOutcome};
use crate::form::FormData;

/// Allowed values of `gender`
pub const GENDERS: &[&str] = &["M", "F"];

/// Profile name fields
pub const NAME_FIELDS: &[&str] = &["familyName", "givenName"];

/// Address fields, all optional
pub const ADDRESS_FIELDS: &[&str] = &["country", "province", "city", "district", "street", "postcode"];

/// Length limits for the strict rule set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    #[serde(default = "default_email_max_len")]
    pub email_max_len: usize,

    #[serde(default = "default_password_min_len")]
    pub password_min_len: usize,

    #[serde(default = "default_name_max_len")]
    pub name_max_len: usize,

    #[serde(default = "default_address_max_len")]
    pub address_max_len: usize,
}

fn default_email_max_len() -> usize {
    64
}

fn default_password_min_len() -> usize {
    8
}

fn default_name_max_len() -> usize {
    50
}

fn default_address_max_len() -> usize {
    256
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            email_max_len: default_email_max_len(),
            password_min_len: default_password_min_len(),
            name_max_len: default_name_max_len(),
            address_max_len: default_address_max_len(),
        }
    }
}

/// How hard the email/password pair is checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strictness {
    /// Only presence and shape; the API decides if the credentials match
    Login,
    /// Full length rules for a new credential
    Signup,
}

/// The forms the user center validates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    /// Email + password
    Account(Strictness),
    /// Same as `Account(Strictness::Login)`
    Login,
    /// Same as `Account(Strictness::Signup)`
    Signup,
    /// A single email: forgot password, email change, verification resend
    Email,
    /// New password + confirmation, reached from a reset letter
    PasswordReset,
    /// Current password, new password + confirmation
    PasswordUpdate,
    Profile,
    Address,
}

/// Builds and runs the check list for each [`Entity`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validators {
    limits: Limits,
}

impl Validators {
    pub fn new(limits: Limits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    fn email(&self, strictness: Strictness) -> FieldCheck<'static> {
        let max_len = match strictness {
            Strictness::Login => 0,
            Strictness::Signup => self.limits.email_max_len,
        };
        FieldCheck::new("email", move |form: &FormData| {
            check_email(form.input("email"), max_len)
        })
    }

    fn password(&self, field: &'static str, strictness: Strictness) -> FieldCheck<'static> {
        let min_len = match strictness {
            Strictness::Login => 0,
            Strictness::Signup => self.limits.password_min_len,
        };
        FieldCheck::new(field, move |form: &FormData| {
            check_password(form.input(field), min_len)
        })
    }

    fn confirmation(field: &'static str, primary: &'static str) -> FieldCheck<'static> {
        FieldCheck::new(field, move |form: &FormData| {
            check_confirmation(form.input(field), form.input(primary))
        })
    }

    fn optional_text(field: &'static str, max_len: usize) -> FieldCheck<'static> {
        FieldCheck::new(field, move |form: &FormData| {
            check_optional_text(form.input(field), max_len)
        })
    }

    /// The ordered check list for an entity
    pub fn checks(&self, entity: Entity) -> Vec<FieldCheck<'static>> {
        match entity {
            Entity::Account(strictness) => vec![
                self.email(strictness),
                self.password("password", strictness),
            ],
            Entity::Login => self.checks(Entity::Account(Strictness::Login)),
            Entity::Signup => self.checks(Entity::Account(Strictness::Signup)),
            Entity::Email => vec![self.email(Strictness::Signup)],
            Entity::PasswordReset => vec![
                self.password("password", Strictness::Signup),
                Self::confirmation("confirmPassword", "password"),
            ],
            Entity::PasswordUpdate => vec![
                self.password("oldPassword", Strictness::Login),
                self.password("password", Strictness::Signup),
                Self::confirmation("confirmPassword", "password"),
            ],
            Entity::Profile => {
                let mut checks: Vec<_> = NAME_FIELDS
                    .iter()
                    .map(|&field| Self::optional_text(field, self.limits.name_max_len))
                    .collect();
                checks.push(FieldCheck::new("gender", |form: &FormData| {
                    check_one_of(form.input("gender"), GENDERS)
                }));
                checks.push(FieldCheck::new("birthday", |form: &FormData| {
                    check_iso_date(form.input("birthday"))
                }));
                checks
            }
            Entity::Address => ADDRESS_FIELDS
                .iter()
                .map(|&field| Self::optional_text(field, self.limits.address_max_len))
                .collect(),
        }
    }

    /// Validate a submitted form as the given entity
    pub fn validate(&self, entity: Entity, form: &FormData) -> ValidationOutcome {
        let outcome = validate(form, &self.checks(entity));
        debug!(
            ?entity,
            errors = outcome.errors().map_or(0, |errors| errors.len()),
            "form validated"
        );
        outcome
    }

    pub fn login(&self, form: &FormData) -> ValidationOutcome {
        self.validate(Entity::Login, form)
    }

    pub fn signup(&self, form: &FormData) -> ValidationOutcome {
        self.validate(Entity::Signup, form)
    }

    pub fn email_only(&self, form: &FormData) -> ValidationOutcome {
        self.validate(Entity::Email, form)
    }

    pub fn password_reset(&self, form: &FormData) -> ValidationOutcome {
        self.validate(Entity::PasswordReset, form)
    }

    pub fn password_update(&self, form: &FormData) -> ValidationOutcome {
        self.validate(Entity::PasswordUpdate, form)
    }

    pub fn profile(&self, form: &FormData) -> ValidationOutcome {
        self.validate(Entity::Profile, form)
    }

    pub fn address(&self, form: &FormData) -> ValidationOutcome {
        self.validate(Entity::Address, form)
    }
}
