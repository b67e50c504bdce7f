use serde::{Deserialize, Serialize};

/// Options accepted by [`crate::ArrayModel::bind`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BindOptions {
    /// Field used for keyed lookup. When unset, `get` looks records up by
    /// position instead.
    pub primary_key: Option<String>,
}

impl BindOptions {
    /// Options for positional lookup.
    pub fn positional() -> Self {
        Self::default()
    }

    /// Options for lookup by the value of `field`.
    pub fn keyed(field: impl Into<String>) -> Self {
        Self {
            primary_key: Some(field.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_positional() {
        let options = BindOptions::default();
        assert!(options.primary_key.is_none());
        assert_eq!(options, BindOptions::positional());
    }

    #[test]
    fn keyed_sets_primary_key() {
        let options = BindOptions::keyed("username");
        assert_eq!(options.primary_key.as_deref(), Some("username"));
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let options: BindOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, BindOptions::default());

        let options: BindOptions =
            serde_json::from_str(r#"{"primary_key": "username"}"#).unwrap();
        assert_eq!(options, BindOptions::keyed("username"));
    }
}
