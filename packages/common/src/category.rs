#[cfg(feature = "sea-orm")]
use sea_orm::prelude::StringLen;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ParseLabelError;

/// Classification of a news item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(
    feature = "sea-orm",
    derive(sea_orm::DeriveActiveEnum, sea_orm::EnumIter),
    sea_orm(rs_type = "String", db_type = "String(StringLen::None)")
)]
pub enum Category {
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "Updates"))]
    Updates,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "Releases"))]
    Releases,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "Technical"))]
    Technical,
}

impl Category {
    pub const ALL: &'static [Category] = &[Self::Updates, Self::Releases, Self::Technical];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Updates => "Updates",
            Self::Releases => "Releases",
            Self::Technical => "Technical",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Updates" => Ok(Self::Updates),
            "Releases" => Ok(Self::Releases),
            "Technical" => Ok(Self::Technical),
            _ => Err(ParseLabelError::new(
                "category",
                s,
                Self::ALL.iter().map(|c| c.as_str()).collect(),
            )),
        }
    }
}
