//! Source API descriptors.

use core::fmt;
use core::time::Duration;

/// One of the two source APIs the pipeline can pull from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Wizarding-world API: a single non-paginated `characters` collection.
    Wizarding,
    /// Galactic API: paginated `people`, `planets`, and `starships`
    /// collections.
    Galactic,
}

impl Source {
    /// Default base URL of the remote API.
    pub fn default_base_url(&self) -> &'static str {
        match self {
            Source::Wizarding => "https://hp-api.onrender.com/api",
            Source::Galactic => "https://swapi.dev/api",
        }
    }

    /// Default inter-request delay.
    ///
    /// The wizarding API is rate-limited aggressively; the galactic API
    /// tolerates a much shorter pause.
    pub fn default_delay(&self) -> Duration {
        match self {
            Source::Wizarding => Duration::from_millis(1000),
            Source::Galactic => Duration::from_millis(100),
        }
    }

    /// Collection endpoints served by this source, in extraction order.
    pub fn collections(&self) -> &'static [&'static str] {
        match self {
            Source::Wizarding => &["characters"],
            Source::Galactic => &["people", "planets", "starships"],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Wizarding => "wizarding",
            Source::Galactic => "galactic",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
