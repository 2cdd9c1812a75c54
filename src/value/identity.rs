//! Identity references

use serde::{Deserialize, Serialize};
use std::fmt;

/// A reference to a YANG identity, qualified by its usage prefix and the
/// module defining it
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdentityRef {
    /// Bare identity name
    pub value: String,
    /// Prefix used for the identity in the schema
    pub prefix: String,
    /// Module defining the identity
    pub module: String,
}

impl IdentityRef {
    /// Create an identity reference
    pub fn new(
        value: impl Into<String>,
        prefix: impl Into<String>,
        module: impl Into<String>,
    ) -> Self {
        Self {
            value: value.into(),
            prefix: prefix.into(),
            module: module.into(),
        }
    }

    /// Schema form `prefix:value`
    pub fn yang_string(&self) -> String {
        format!("{}:{}", self.prefix, self.value)
    }

    /// RFC 7951 JSON form `module:value`
    pub fn json_ietf_string(&self) -> String {
        format!("{}:{}", self.module, self.value)
    }

    /// Key used for ordering: value, module and prefix concatenated
    pub(crate) fn sort_key(&self) -> String {
        format!("{}{}{}", self.value, self.module, self.prefix)
    }
}

/// Renders the bare identity name
impl fmt::Display for IdentityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
