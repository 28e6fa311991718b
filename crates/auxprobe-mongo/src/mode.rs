use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantNames};

use crate::Error;

/// What the user-management script does to the subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(AsRefStr, Display, EnumString, VariantNames)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserMode {
    /// Create the user and seed its database.
    Create,
    /// Drop the user and its database.
    Delete,
}

impl UserMode {
    /// Parses a mode, rejecting anything other than `create` and `delete`.
    pub fn parse(mode: &str) -> Result<Self, Error> {
        Self::from_str(mode).map_err(|_| Error::UnknownMode(mode.to_owned()))
    }

    /// Returns whether the mode needs an authentication secret.
    #[inline]
    pub fn requires_auth(self) -> bool {
        matches!(self, Self::Create)
    }
}
