// File: tests/form_flows.rs
// Purpose: End-to-end form flows. A submitted body is validated locally or an
// upstream failure is normalized; either way the template gets the same
// field -> message state.

use pretty_assertions::assert_eq;
use rstest::rstest;
use usercenter::{
    Catalog, Config, FormData, FormState, Locale, Normalized, Normalizer, StatusCode,
    UpstreamError, ValidationOutcome,
};

fn english() -> Config {
    toml::from_str("[messages]\nlocale = \"en\"").unwrap()
}

#[test]
fn test_signup_body_with_two_errors_shows_both() {
    let config = english();
    let form = FormData::from_urlencoded("email=&password=abc");

    let outcome = config.validators().signup(&form);
    let state = FormState::from_outcome(outcome, &config.catalog());

    assert_eq!(state.error("email"), Some("Please enter your email address"));
    assert_eq!(state.error("password"), Some("Password must be at least 8 characters"));
}

#[test]
fn test_upstream_conflict_renders_like_local_error() {
    let config = Config::default();
    let catalog = config.catalog();

    let form = FormData::from_urlencoded("email=taken%40example.com&password=abcdefgh");
    assert!(config.validators().signup(&form).is_valid());

    // Upstream rejects the otherwise valid signup
    let err = UpstreamError::from_response(
        422,
        br#"{"message":"Validation Failed","error":{"field":"email","code":"already_exists"}}"#,
    );
    let normalized = Normalizer::new(&catalog).normalize(err).unwrap();
    let state = FormState::from_normalized(normalized);

    assert_eq!(state.error("email"), Some("邮箱地址已经存在"));
    assert_eq!(state.alert, None);
}

#[test]
fn test_reset_with_stale_token() {
    let catalog = Catalog::builtin(Locale::En);
    let err = UpstreamError::api(StatusCode::NOT_FOUND, None);

    let state = FormState::from_normalized(Normalizer::new(&catalog).normalize(err).unwrap());

    assert_eq!(state.alert.as_deref(), Some("This link is invalid or has expired"));
    assert_eq!(state.errors, None);
}

#[rstest]
#[case(500)]
#[case(403)]
#[case(400)]
fn test_server_side_failures_propagate(#[case] status: u16) {
    let catalog = Catalog::default();
    let err = UpstreamError::from_response(status, br#"{"message":"nope"}"#);

    let returned = Normalizer::new(&catalog).normalize(err);

    assert!(matches!(returned, Err(UpstreamError::Api { .. })));
}

#[test]
fn test_profile_json_body() {
    let config = Config::default();
    let json = serde_json::json!({
        "familyName": "  李 ",
        "givenName": "",
        "gender": "M",
        "birthday": "1985-12-01",
    });

    let outcome = config.validators().profile(&FormData::from_json(&json));

    let ValidationOutcome::Valid(record) = outcome else {
        panic!("profile should validate");
    };
    assert_eq!(record.get("familyName"), Some(&Some("李".to_string())));
    assert_eq!(record.get("givenName"), Some(&None));
    assert_eq!(record.get("birthday"), Some(&Some("1985-12-01".to_string())));
}

#[test]
fn test_password_reset_mismatch_in_chinese() {
    let config = Config::default();
    let form = FormData::from_urlencoded("password=abcdefgh&confirmPassword=abcdefgi");

    let state = FormState::from_outcome(config.validators().password_reset(&form), &config.catalog());

    assert_eq!(state.error("confirmPassword"), Some("两次输入的密码不一致"));
    assert_eq!(state.error("password"), None);
}

#[test]
fn test_not_found_for_unknown_email() {
    let catalog = Catalog::default();
    let err = UpstreamError::from_response(404, b"");

    let normalized = Normalizer::new(&catalog)
        .with_not_found("email.any.notFound")
        .normalize(err)
        .unwrap();

    assert_eq!(normalized, Normalized::NotFound("该邮箱地址尚未注册".to_string()));
}

#[test]
fn test_padded_password_is_measured_after_trimming() {
    let config = english();
    let form = FormData::from_urlencoded("password=+123456+&confirmPassword=123456");

    let state = FormState::from_outcome(config.validators().password_reset(&form), &config.catalog());

    assert_eq!(state.error("password"), Some("Password must be at least 8 characters"));
    assert_eq!(state.error("confirmPassword"), None);
}
