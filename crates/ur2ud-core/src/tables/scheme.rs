use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Romanization scheme the input is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    #[default]
    Iso15919,
    Iast,
}

impl Scheme {
    pub const ALL: [Scheme; 2] = [Scheme::Iso15919, Scheme::Iast];

    pub fn name(self) -> &'static str {
        match self {
            Scheme::Iso15919 => "iso15919",
            Scheme::Iast => "iast",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown scheme {0:?} (expected \"iso15919\" or \"iast\")")]
pub struct UnknownScheme(pub String);

impl FromStr for Scheme {
    type Err = UnknownScheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "iso15919" | "iso-15919" | "iso" => Ok(Scheme::Iso15919),
            "iast" => Ok(Scheme::Iast),
            _ => Err(UnknownScheme(s.to_string())),
        }
    }
}
