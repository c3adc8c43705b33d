use regex::Regex;
use serde::{Serialize, Serializer};
use std::sync::LazyLock;

static BASIC_KEY: LazyLock<Regex> = LazyLock::new(|| compile_key_pattern("bsc"));
static PRO_KEY: LazyLock<Regex> = LazyLock::new(|| compile_key_pattern("pro"));
static ENTERPRISE_KEY: LazyLock<Regex> = LazyLock::new(|| compile_key_pattern("ent"));

#[expect(clippy::unwrap_used, reason = "pattern is a fixed literal")]
fn compile_key_pattern(prefix: &str) -> Regex {
    // A single trailing newline is tolerated before end of text
    Regex::new(&format!("^{prefix}_[a-f0-9]{{16}}\n?$")).unwrap()
}

/// Subscription level. Unknown names are kept verbatim in `Other` and never
/// validate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Tier {
    #[default]
    Free,
    Basic,
    Pro,
    Enterprise,
    Other(String),
}

impl Tier {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Tier::Free => "free",
            Tier::Basic => "basic",
            Tier::Pro => "pro",
            Tier::Enterprise => "enterprise",
            Tier::Other(name) => name,
        }
    }

    #[must_use]
    pub fn is_free(&self) -> bool {
        matches!(self, Tier::Free)
    }

    /// Key format for paid tiers; `None` for free and unknown tiers.
    #[must_use]
    pub fn key_pattern(&self) -> Option<&'static Regex> {
        match self {
            Tier::Basic => Some(&*BASIC_KEY),
            Tier::Pro => Some(&*PRO_KEY),
            Tier::Enterprise => Some(&*ENTERPRISE_KEY),
            Tier::Free | Tier::Other(_) => None,
        }
    }

    /// Whether `license_key` is acceptable for this tier.
    ///
    /// Free accepts anything, including no key. Unknown tiers accept nothing.
    #[must_use]
    pub fn accepts(&self, license_key: Option<&str>) -> bool {
        if self.is_free() {
            return true;
        }
        match (self.key_pattern(), license_key) {
            (Some(pattern), Some(key)) => pattern.is_match(key),
            _ => false,
        }
    }
}

impl std::str::FromStr for Tier {
    type Err = std::convert::Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "free" => Tier::Free,
            "basic" => Tier::Basic,
            "pro" => Tier::Pro,
            "enterprise" => Tier::Enterprise,
            other => Tier::Other(other.to_string()),
        })
    }
}

impl From<&str> for Tier {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(tier) => tier,
            Err(never) => match never {},
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Tier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
