#[cfg(feature = "sea-orm")]
use sea_orm::prelude::StringLen;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ParseLabelError;

/// Game a news item is tagged with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(
    feature = "sea-orm",
    derive(sea_orm::DeriveActiveEnum, sea_orm::EnumIter),
    sea_orm(rs_type = "String", db_type = "String(StringLen::None)")
)]
pub enum GameTag {
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "CS2"))]
    #[serde(rename = "CS2")]
    Cs2,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "DOTA2"))]
    #[serde(rename = "DOTA2")]
    Dota2,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "Deadlock"))]
    Deadlock,
}

impl GameTag {
    pub const ALL: &'static [GameTag] = &[Self::Cs2, Self::Dota2, Self::Deadlock];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cs2 => "CS2",
            Self::Dota2 => "DOTA2",
            Self::Deadlock => "Deadlock",
        }
    }

    /// Parse an optional game label. A blank label means "no game".
    pub fn parse_optional(s: &str) -> Result<Option<Self>, ParseLabelError> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(None);
        }
        s.parse().map(Some)
    }
}

impl fmt::Display for GameTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameTag {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CS2" => Ok(Self::Cs2),
            "DOTA2" => Ok(Self::Dota2),
            "Deadlock" => Ok(Self::Deadlock),
            _ => Err(ParseLabelError::new(
                "game",
                s,
                Self::ALL.iter().map(|g| g.as_str()).collect(),
            )),
        }
    }
}
