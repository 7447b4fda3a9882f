use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifier for a game format a round can be played under.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormatId {
    #[default]
    StrokeNet,
    StrokeGross,
    Stableford,
    Match,
    Skins,
    Nassau,
    BingoBangoBongo,
    Wolf,
    Scramble,
    Chapman,
    FourBall,
    Greenies,
}

impl FormatId {
    pub const ALL: [FormatId; 12] = [
        FormatId::StrokeNet,
        FormatId::StrokeGross,
        FormatId::Stableford,
        FormatId::Match,
        FormatId::Skins,
        FormatId::Nassau,
        FormatId::BingoBangoBongo,
        FormatId::Wolf,
        FormatId::Scramble,
        FormatId::Chapman,
        FormatId::FourBall,
        FormatId::Greenies,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::StrokeNet => "stroke_net",
            Self::StrokeGross => "stroke_gross",
            Self::Stableford => "stableford",
            Self::Match => "match",
            Self::Skins => "skins",
            Self::Nassau => "nassau",
            Self::BingoBangoBongo => "bingo_bango_bongo",
            Self::Wolf => "wolf",
            Self::Scramble => "scramble",
            Self::Chapman => "chapman",
            Self::FourBall => "four_ball",
            Self::Greenies => "greenies",
        }
    }

    /// Whether the engine settles this format. Team formats are listed for
    /// selection only.
    pub fn is_computed(self) -> bool {
        !matches!(
            self,
            Self::Wolf | Self::Scramble | Self::Chapman | Self::FourBall | Self::Greenies
        )
    }

    pub fn metadata(self) -> FormatMetadata {
        let (name, icon, description) = match self {
            Self::StrokeNet => (
                "Stroke Play – Net",
                "🏌️",
                "Lowest net score wins (gross minus course handicap)",
            ),
            Self::StrokeGross => (
                "Stroke Play – Gross",
                "📊",
                "Lowest gross score wins, no handicap applied",
            ),
            Self::Stableford => (
                "Stableford",
                "⭐",
                "Points per hole: Eagle=4, Birdie=3, Par=2, Bogey=1, Dbl+=0",
            ),
            Self::Match => (
                "Round Robin Match Play",
                "⚔️",
                "Head-to-head match play; all player pairs compete",
            ),
            Self::Skins => (
                "Skins",
                "💰",
                "Win a skin on each hole; ties carry over to next hole",
            ),
            Self::Nassau => (
                "Nassau",
                "🔱",
                "Three separate bets: Front 9, Back 9, and Overall 18",
            ),
            Self::BingoBangoBongo => (
                "Bingo Bango Bongo",
                "🎯",
                "3 points per hole: first on green, closest to pin, first in hole",
            ),
            Self::Wolf => (
                "Wolf",
                "🐺",
                "Rotating selector picks partner (or goes alone) each hole",
            ),
            Self::Scramble => (
                "Scramble",
                "🤝",
                "Team format: all play from best shot each stroke",
            ),
            Self::Chapman => (
                "Chapman / Pinehurst",
                "🌲",
                "Partners swap after drive, choose best 2nd, then alternate",
            ),
            Self::FourBall => (
                "Four-Ball Better Ball",
                "⛳",
                "Partners play own ball; team score = best ball each hole",
            ),
            Self::Greenies => (
                "Greenies + Sandies",
                "🌿",
                "Bonus points: hit green in regulation (greenie) or save par from sand (sandie)",
            ),
        };
        FormatMetadata {
            id: self,
            name: name.to_string(),
            icon: icon.to_string(),
            description: description.to_string(),
            computed: self.is_computed(),
        }
    }
}

impl fmt::Display for FormatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A format id that is not in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFormat(pub String);

impl fmt::Display for UnknownFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown game format: {}", self.0)
    }
}

impl std::error::Error for UnknownFormat {}

impl FromStr for FormatId {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownFormat(s.to_string()))
    }
}

impl Serialize for FormatId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FormatId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Deserialize a persisted round's format, resolving unknown ids to the
/// default format instead of failing the whole snapshot.
pub(crate) fn lenient_format_id<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<FormatId, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(match raw {
        Some(s) => s.parse().unwrap_or_else(|e: UnknownFormat| {
            tracing::warn!("{e}, using {}", FormatId::default());
            FormatId::default()
        }),
        None => FormatId::default(),
    })
}

/// Catalog entry for the format picker and report headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatMetadata {
    pub id: FormatId,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub computed: bool,
}

/// Every known format, in picker order.
pub fn catalog() -> Vec<FormatMetadata> {
    FormatId::ALL.into_iter().map(FormatId::metadata).collect()
}

/// Formats the engine settles, in picker order.
pub fn computed_formats() -> Vec<FormatId> {
    FormatId::ALL
        .into_iter()
        .filter(|id| id.is_computed())
        .collect()
}
