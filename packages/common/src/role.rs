#[cfg(feature = "sea-orm")]
use sea_orm::prelude::StringLen;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ParseLabelError;

/// Coarse permission tier, fixed when the account is registered.
///
/// When the `sea-orm` feature is enabled, this enum can be used directly in SeaORM entities.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(
    feature = "sea-orm",
    derive(sea_orm::DeriveActiveEnum, sea_orm::EnumIter),
    sea_orm(rs_type = "String", db_type = "String(StringLen::None)")
)]
pub enum Role {
    /// May publish news, edit content and manage images.
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "Admin"))]
    Admin,
    /// Reads news only.
    #[default]
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "User"))]
    User,
}

impl Role {
    pub const ALL: &'static [Role] = &[Self::Admin, Self::User];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::User => "User",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Role granted at registration: `Admin` only when the supplied secret
    /// matches the expected one exactly. An empty expected secret never matches.
    pub fn for_secret(supplied: Option<&str>, expected: &str) -> Self {
        match supplied {
            Some(secret) if !expected.is_empty() && secret == expected => Self::Admin,
            _ => Self::User,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin" => Ok(Self::Admin),
            "User" => Ok(Self::User),
            _ => Err(ParseLabelError::new(
                "role",
                s,
                Self::ALL.iter().map(|r| r.as_str()).collect(),
            )),
        }
    }
}
