// Tagged reading of the `unique` key

use super::job_item::value_text;
use serde_json::Value;

/// What a `unique` value says about the lock type
///
/// The raw value is overloaded: a boolean means "no explicit type", text
/// names a lock type. Reading it through this enum keeps the two apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UniqueSetting {
    /// Key missing or `null`
    Absent,
    /// `false`
    Disabled,
    /// `true`: no explicit type, use the default
    UseDefault,
    /// Anything else, rendered as text
    Explicit(String),
}

impl UniqueSetting {
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => UniqueSetting::Absent,
            Some(Value::Bool(false)) => UniqueSetting::Disabled,
            Some(Value::Bool(true)) => UniqueSetting::UseDefault,
            Some(other) => UniqueSetting::Explicit(value_text(other)),
        }
    }

    /// The explicit identifier, if this setting names one
    pub fn explicit(&self) -> Option<&str> {
        match self {
            UniqueSetting::Explicit(identifier) => Some(identifier),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value() {
        assert_eq!(UniqueSetting::from_value(None), UniqueSetting::Absent);
        assert_eq!(UniqueSetting::from_value(Some(&Value::Null)), UniqueSetting::Absent);
        assert_eq!(UniqueSetting::from_value(Some(&json!(false))), UniqueSetting::Disabled);
        assert_eq!(UniqueSetting::from_value(Some(&json!(true))), UniqueSetting::UseDefault);
        assert_eq!(
            UniqueSetting::from_value(Some(&json!("until_timeout"))),
            UniqueSetting::Explicit("until_timeout".to_string())
        );
    }

    #[test]
    fn test_string_true_is_explicit() {
        // Only the worker-level legacy check treats the text "true" specially
        let setting = UniqueSetting::from_value(Some(&json!("true")));
        assert_eq!(setting.explicit(), Some("true"));
    }

    #[test]
    fn test_non_string_values_render_as_text() {
        let setting = UniqueSetting::from_value(Some(&json!(7)));
        assert_eq!(setting.explicit(), Some("7"));
        assert_eq!(UniqueSetting::UseDefault.explicit(), None);
    }
}
