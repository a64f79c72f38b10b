//! User center field validators
//!
//! Pure, total checks over a single raw form value. Each check answers
//! `None` when the value passes or `Some(Rule)` naming the rule it broke.
//! The caller attaches the field name to turn a [`Rule`] into a message code.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod date;
pub mod email;
pub mod input;
pub mod password;
pub mod string;

pub use date::check_iso_date;
pub use email::{check_email, is_valid_email};
pub use input::{char_len, Input, Rule};
pub use password::{check_password, PASSWORD_MAX_LEN};
pub use string::{check_confirmation, check_one_of, check_optional_text, check_required_text};
