// File: src/message.rs
// Purpose: Message codes and the catalog that turns them into display text

use serde::{Deserialize, Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use usercenter_validation::Rule;

use crate::upstream::ApiCode;

/// Language-independent identifier of a failed field rule,
/// rendered as `"{field}.{validator}.{rule}"`, e.g. `email.any.required`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageCode {
    field: String,
    rule: Rule,
}

impl MessageCode {
    pub fn new(field: impl Into<String>, rule: Rule) -> Self {
        Self {
            field: field.into(),
            rule,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// Catalog key for this code
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MessageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.field, self.rule)
    }
}

impl Serialize for MessageCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Field name to the code of the first rule it broke
pub type FieldErrors = BTreeMap<String, MessageCode>;

/// Field name to display text; what templates key error display by
pub type ErrorMessages = BTreeMap<String, String>;

/// Built-in catalog languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "zh-CN")]
    ZhCn,
    #[serde(rename = "en")]
    En,
}

const ZH_CN_MESSAGES: &[(&str, &str)] = &[
    ("email.any.required", "请输入邮箱地址"),
    ("email.string.invalid", "请输入有效的邮箱地址"),
    ("email.string.max", "邮箱地址不能超过{limit}个字符"),
    ("email.any.notFound", "该邮箱地址尚未注册"),
    ("password.any.required", "请输入密码"),
    ("password.string.min", "密码长度不能少于{limit}个字符"),
    ("password.string.max", "密码长度不能超过{limit}个字符"),
    ("oldPassword.any.required", "请输入当前密码"),
    ("confirmPassword.any.mismatched", "两次输入的密码不一致"),
    ("familyName.string.max", "姓氏不能超过{limit}个字符"),
    ("givenName.string.max", "名字不能超过{limit}个字符"),
    ("gender.any.allowOnly", "请选择性别"),
    ("birthday.date.invalid", "请输入有效的日期，格式为 YYYY-MM-DD"),
    ("token.any.notFound", "链接无效或已过期"),
    // Per-rule defaults for fields without a dedicated entry
    ("any.required", "此项不能为空"),
    ("string.base", "输入格式错误"),
    ("string.invalid", "输入无效"),
    ("string.min", "不能少于{limit}个字符"),
    ("string.max", "不能超过{limit}个字符"),
    ("any.mismatched", "两次输入不一致"),
    ("any.allowOnly", "请选择有效的选项"),
    ("date.invalid", "日期格式无效"),
];

const ZH_CN_LABELS: &[(&str, &str)] = &[
    ("email", "邮箱地址"),
    ("password", "密码"),
    ("oldPassword", "当前密码"),
    ("confirmPassword", "确认密码"),
    ("familyName", "姓"),
    ("givenName", "名"),
    ("gender", "性别"),
    ("birthday", "生日"),
    ("country", "国家/地区"),
    ("province", "省份"),
    ("city", "城市"),
    ("district", "区县"),
    ("street", "街道"),
    ("postcode", "邮编"),
];

const ZH_CN_PHRASES: &[(ApiCode, &str)] = &[
    (ApiCode::Missing, "不存在"),
    (ApiCode::MissingField, "不能为空"),
    (ApiCode::Invalid, "无效"),
    (ApiCode::AlreadyExists, "已经存在"),
];

const ZH_CN_SERVER_ERROR: &str = "服务器错误，请稍后再试";

const EN_MESSAGES: &[(&str, &str)] = &[
    ("email.any.required", "Please enter your email address"),
    ("email.string.invalid", "Please enter a valid email address"),
    ("email.string.max", "Email address must be at most {limit} characters"),
    ("email.any.notFound", "No account is registered with this email address"),
    ("password.any.required", "Please enter your password"),
    ("password.string.min", "Password must be at least {limit} characters"),
    ("password.string.max", "Password must be at most {limit} characters"),
    ("oldPassword.any.required", "Please enter your current password"),
    ("confirmPassword.any.mismatched", "Passwords do not match"),
    ("familyName.string.max", "Family name must be at most {limit} characters"),
    ("givenName.string.max", "Given name must be at most {limit} characters"),
    ("gender.any.allowOnly", "Please select a gender"),
    ("birthday.date.invalid", "Please enter a valid date as YYYY-MM-DD"),
    ("token.any.notFound", "This link is invalid or has expired"),
    ("any.required", "This field is required"),
    ("string.base", "Invalid input format"),
    ("string.invalid", "Invalid value"),
    ("string.min", "Must be at least {limit} characters"),
    ("string.max", "Must be at most {limit} characters"),
    ("any.mismatched", "Values do not match"),
    ("any.allowOnly", "Please choose a valid option"),
    ("date.invalid", "Invalid date"),
];

const EN_LABELS: &[(&str, &str)] = &[
    ("email", "Email address"),
    ("password", "Password"),
    ("oldPassword", "Current password"),
    ("confirmPassword", "Password confirmation"),
    ("familyName", "Family name"),
    ("givenName", "Given name"),
    ("gender", "Gender"),
    ("birthday", "Birthday"),
    ("country", "Country"),
    ("province", "Province"),
    ("city", "City"),
    ("district", "District"),
    ("street", "Street"),
    ("postcode", "Postcode"),
];

// Appended straight to the label, hence the leading space
const EN_PHRASES: &[(ApiCode, &str)] = &[
    (ApiCode::Missing, " does not exist"),
    (ApiCode::MissingField, " is required"),
    (ApiCode::Invalid, " is invalid"),
    (ApiCode::AlreadyExists, " already exists"),
];

const EN_SERVER_ERROR: &str = "Server error, please try again later";

fn table(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Flat code → text catalog.
///
/// Passed explicitly to whatever renders messages; nothing reads a global.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    messages: HashMap<String, String>,
    labels: HashMap<String, String>,
    phrases: HashMap<ApiCode, String>,
    server_error: String,
}

impl Catalog {
    pub fn builtin(locale: Locale) -> Self {
        let (messages, labels, phrases, server_error) = match locale {
            Locale::ZhCn => (ZH_CN_MESSAGES, ZH_CN_LABELS, ZH_CN_PHRASES, ZH_CN_SERVER_ERROR),
            Locale::En => (EN_MESSAGES, EN_LABELS, EN_PHRASES, EN_SERVER_ERROR),
        };

        Self {
            messages: table(messages),
            labels: table(labels),
            phrases: phrases
                .iter()
                .map(|(code, phrase)| (*code, phrase.to_string()))
                .collect(),
            server_error: server_error.to_string(),
        }
    }

    /// Replace or add message entries
    pub fn with_messages<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.messages
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Replace or add field labels
    pub fn with_labels<I, K, V>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Text for a raw key, or the generic server error
    pub fn lookup(&self, key: &str) -> &str {
        self.messages
            .get(key)
            .map_or(self.server_error.as_str(), String::as_str)
    }

    /// Text for a field code: the field's own entry, then the per-rule
    /// default, then the generic server error. `{limit}` is filled in.
    pub fn message(&self, code: &MessageCode) -> String {
        let rule = code.rule();
        let text = self
            .messages
            .get(&code.key())
            .or_else(|| self.messages.get(&rule.to_string()))
            .map_or(self.server_error.as_str(), String::as_str);

        match rule.limit() {
            Some(limit) => text.replace("{limit}", &limit.to_string()),
            None => text.to_string(),
        }
    }

    /// Display label for a field, defaulting to the field name
    pub fn label<'a>(&'a self, field: &'a str) -> &'a str {
        self.labels.get(field).map_or(field, String::as_str)
    }

    pub fn phrase(&self, code: ApiCode) -> Option<&str> {
        self.phrases.get(&code).map(String::as_str)
    }

    pub fn server_error(&self) -> &str {
        &self.server_error
    }

    /// Render locally produced codes into the template error shape
    pub fn render(&self, errors: &FieldErrors) -> ErrorMessages {
        errors
            .iter()
            .map(|(field, code)| (field.clone(), self.message(code)))
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin(Locale::default())
    }
}
