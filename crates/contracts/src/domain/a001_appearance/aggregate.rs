use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Participant / Appearance
// ============================================================================

/// Участник выступления
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    #[serde(default)]
    pub given_name: String,
    #[serde(default)]
    pub family_name: String,
    /// Дата рождения без часового пояса.
    /// Принимает "YYYY-MM-DD", полный timestamp (берётся дата) или пустую строку.
    #[serde(default, deserialize_with = "deserialize_birthdate")]
    pub birthdate: Option<NaiveDate>,
}

impl Participant {
    /// "Имя Фамилия" без лишних пробелов; пустая строка, если имени нет
    pub fn full_name(&self) -> String {
        format!("{} {}", self.given_name, self.family_name)
            .trim()
            .to_string()
    }
}

/// Одна запись в списке выступлений (участник + роль)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appearance {
    #[serde(default)]
    pub participant: Participant,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub instrument: Option<String>,
}

impl Appearance {
    /// Ключ роли; пустая строка считается отсутствием роли
    pub fn role(&self) -> Option<&str> {
        self.role.as_deref().filter(|r| !r.is_empty())
    }

    pub fn instrument(&self) -> Option<&str> {
        self.instrument.as_deref().filter(|i| !i.is_empty())
    }
}

fn deserialize_birthdate<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    let Some(raw) = raw else {
        return Ok(None);
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    let date_part = raw.split('T').next().unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map(Some)
        .map_err(|e| serde::de::Error::custom(format!("Invalid birthdate '{}': {}", raw, e)))
}

// ============================================================================
// Lookup tables
// ============================================================================

/// Роль → отображаемое название
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleTerms(pub BTreeMap<String, String>);

impl RoleTerms {
    pub fn label(&self, role: &str) -> Option<&str> {
        self.0.get(role).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RoleTerms {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Ошибки валидации одного выступления: поле → сообщения.
/// Панель проверяет только наличие ошибок.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppearanceErrors(pub BTreeMap<String, Vec<String>>);

impl AppearanceErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }
}

/// Элемент списка выбора
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SelectOptionRepr")]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Форматы, в которых страница передаёт варианты выбора:
/// `{"value": .., "label": ..}`, пара `[label, value]` или просто значение.
#[derive(Deserialize)]
#[serde(untagged)]
enum SelectOptionRepr {
    // Pair идёт первым: struct-вариант принял бы и массив
    Pair(Scalar, Scalar),
    Object { value: Scalar, label: Scalar },
    Single(Scalar),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    fn into_string(self) -> String {
        match self {
            Scalar::Int(i) => i.to_string(),
            Scalar::Float(f) => f.to_string(),
            Scalar::Text(s) => s,
        }
    }
}

impl From<SelectOptionRepr> for SelectOption {
    fn from(repr: SelectOptionRepr) -> Self {
        match repr {
            SelectOptionRepr::Object { value, label } => {
                Self::new(value.into_string(), label.into_string())
            }
            SelectOptionRepr::Pair(label, value) => {
                Self::new(value.into_string(), label.into_string())
            }
            SelectOptionRepr::Single(scalar) => {
                let s = scalar.into_string();
                Self::new(s.clone(), s)
            }
        }
    }
}

/// Наборы вариантов для селекторов панели
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppearanceFormOptions {
    #[serde(default)]
    pub birthdate_year_options: Vec<SelectOption>,
    #[serde(default)]
    pub birthdate_month_options: Vec<SelectOption>,
    #[serde(default)]
    pub role_options: Vec<SelectOption>,
    #[serde(default)]
    pub instrument_options: Vec<SelectOption>,
}

/// Термины формы регистрации
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationTerms {
    #[serde(default = "default_participant_term")]
    pub participant_term: String,
    #[serde(default)]
    pub role_terms: RoleTerms,
}

fn default_participant_term() -> String {
    "Participant".to_string()
}

impl Default for RegistrationTerms {
    fn default() -> Self {
        Self {
            participant_term: default_participant_term(),
            role_terms: RoleTerms::default(),
        }
    }
}
