//! Theme application scope

use crate::error::ThemeError;
use std::fmt;
use std::str::FromStr;

/// Whether a theme choice applies everywhere or only to the current page
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeScope {
    #[default]
    Global,
    Page,
}

impl ThemeScope {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeScope::Global => "global",
            ThemeScope::Page => "page",
        }
    }

    pub fn is_global(self) -> bool {
        self == ThemeScope::Global
    }
}

impl fmt::Display for ThemeScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeScope {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "global" => Ok(ThemeScope::Global),
            "page" => Ok(ThemeScope::Page),
            other => Err(ThemeError::UnknownScope(other.to_string())),
        }
    }
}
