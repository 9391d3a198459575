//! Leaderboard rows and pure display helpers for testing outside wasm.

use cafechain_api_models::LeaderboardEntryDto;

/// Number of rows the leaderboard widget shows.
pub const LEADERBOARD_WIDGET_SIZE: usize = 5;

/// Recent ranking movement of a cafe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Trend {
    /// Climbed since the last period.
    Up,
    /// Dropped since the last period.
    Down,
    /// Unchanged or unknown.
    #[default]
    Flat,
}

impl Trend {
    /// Parse the wire value; anything unrecognized is [`Trend::Flat`].
    #[must_use]
    pub fn from_wire(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "up" => Self::Up,
            "down" => Self::Down,
            _ => Self::Flat,
        }
    }

    /// Glyph rendered next to the points.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Up => "▲",
            Self::Down => "▼",
            Self::Flat => "–",
        }
    }

    /// CSS modifier for colouring the glyph.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Up => "trend-up",
            Self::Down => "trend-down",
            Self::Flat => "trend-flat",
        }
    }

    /// Accessible label for the glyph.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Up => "Moving up",
            Self::Down => "Moving down",
            Self::Flat => "No change",
        }
    }
}

/// Read-only leaderboard projection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardEntry {
    /// Cafe identifier.
    pub id: String,
    /// Cafe name.
    pub name: String,
    /// Logo URL.
    pub logo: Option<String>,
    /// Points in the current period.
    pub points: u64,
    /// Ranking movement.
    pub trend: Trend,
}

impl From<LeaderboardEntryDto> for LeaderboardEntry {
    fn from(value: LeaderboardEntryDto) -> Self {
        Self {
            id: value.id,
            name: value.name,
            logo: value.logo.filter(|logo| !logo.trim().is_empty()),
            points: value.points,
            trend: Trend::from_wire(&value.trend),
        }
    }
}

/// Row ready for rendering: entry plus its rank badge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankedRow {
    /// Badge such as `#1`.
    pub badge: String,
    /// Underlying entry.
    pub entry: LeaderboardEntry,
}

/// Rank badge for a zero-based position.
#[must_use]
pub fn rank_badge(index: usize) -> String {
    format!("#{}", index + 1)
}

/// Attach rank badges to the first `limit` entries, keeping the given order.
#[must_use]
pub fn ranked_rows(entries: &[LeaderboardEntry], limit: usize) -> Vec<RankedRow> {
    entries
        .iter()
        .take(limit)
        .enumerate()
        .map(|(index, entry)| RankedRow {
            badge: rank_badge(index),
            entry: entry.clone(),
        })
        .collect()
}

/// Format points with thousands separators.
#[must_use]
pub fn format_points(points: u64) -> String {
    let digits = points.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Initial shown when a logo is missing.
#[must_use]
pub fn logo_initial(name: &str) -> char {
    name.trim()
        .chars()
        .next()
        .and_then(|ch| ch.to_uppercase().next())
        .unwrap_or('?')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, points: u64) -> LeaderboardEntry {
        LeaderboardEntry {
            id: id.into(),
            name: format!("Cafe {id}"),
            logo: None,
            points,
            trend: Trend::Up,
        }
    }

    #[test]
    fn widget_renders_first_five_with_badges() {
        // Deliberately not sorted by points; order must be preserved.
        let entries = vec![
            entry("a", 10),
            entry("b", 90),
            entry("c", 30),
            entry("d", 70),
            entry("e", 50),
            entry("f", 99),
            entry("g", 1),
        ];
        let rows = ranked_rows(&entries, LEADERBOARD_WIDGET_SIZE);
        assert_eq!(rows.len(), 5);
        let badges: Vec<_> = rows.iter().map(|r| r.badge.as_str()).collect();
        assert_eq!(badges, ["#1", "#2", "#3", "#4", "#5"]);
        let ids: Vec<_> = rows.iter().map(|r| r.entry.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn short_lists_render_as_is() {
        let rows = ranked_rows(&[entry("solo", 5)], LEADERBOARD_WIDGET_SIZE);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].badge, "#1");
    }

    #[test]
    fn unknown_trend_is_neutral() {
        assert_eq!(Trend::from_wire("up"), Trend::Up);
        assert_eq!(Trend::from_wire(" DOWN "), Trend::Down);
        assert_eq!(Trend::from_wire("sideways"), Trend::Flat);
        assert_eq!(Trend::from_wire(""), Trend::Flat);
        assert_eq!(Trend::from_wire("sideways").icon(), Trend::Flat.icon());
    }

    #[test]
    fn dto_conversion_maps_trend_and_blank_logo() {
        let dto = LeaderboardEntryDto {
            id: "c1".into(),
            name: "Brew Lab".into(),
            logo: Some(String::new()),
            points: 1200,
            trend: "down".into(),
        };
        let entry = LeaderboardEntry::from(dto);
        assert_eq!(entry.trend, Trend::Down);
        assert_eq!(entry.logo, None);
    }

    #[test]
    fn points_are_grouped() {
        assert_eq!(format_points(0), "0");
        assert_eq!(format_points(999), "999");
        assert_eq!(format_points(1_000), "1,000");
        assert_eq!(format_points(1_234_567), "1,234,567");
    }

    #[test]
    fn logo_initial_handles_empty_names() {
        assert_eq!(logo_initial("brew lab"), 'B');
        assert_eq!(logo_initial(""), '?');
    }
}
