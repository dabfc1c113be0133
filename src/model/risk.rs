use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Broad family a risk profile belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum RiskCategory {
	Technical,
	Creative,
	Social,
	Manual,
	Analytical,
}

impl RiskCategory {
	/// Filter button label.
	pub fn label(self) -> &'static str {
		match self {
			Self::Technical => "Technical",
			Self::Creative => "Creative",
			Self::Social => "Social",
			Self::Manual => "Manual",
			Self::Analytical => "Analytical",
		}
	}

	/// Emoji shown on cards and filter buttons.
	pub fn icon(self) -> &'static str {
		match self {
			Self::Technical => "💻",
			Self::Creative => "🎨",
			Self::Social => "👥",
			Self::Manual => "🔧",
			Self::Analytical => "📊",
		}
	}
}

/// Editorial risk bucket. Authored independently of [`SkillRisk::risk_score`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum RiskLevel {
	Low,
	Medium,
	High,
}

/// Band a numeric score falls in: `<= 30` low, `<= 60` mid, else high.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ScoreBand {
	Low,
	Mid,
	High,
}

impl ScoreBand {
	/// Bands a 0-100 score.
	pub fn of(score: u8) -> Self {
		match score {
			0..=30 => Self::Low,
			31..=60 => Self::Mid,
			_ => Self::High,
		}
	}

	/// The level a reader would expect for this band.
	pub fn matching_level(self) -> RiskLevel {
		match self {
			Self::Low => RiskLevel::Low,
			Self::Mid => RiskLevel::Medium,
			Self::High => RiskLevel::High,
		}
	}
}

/// Current market demand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Demand {
	Rising,
	Stable,
	Declining,
}

/// Projected outlook.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Outlook {
	Positive,
	Neutral,
	Negative,
}

/// Trend signals attached to a risk profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trends {
	pub current_demand: Demand,
	pub future_outlook: Outlook,
}

/// An assessed automation-risk profile for a skill or occupation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRisk {
	/// Unique key within the store.
	pub id: String,
	/// Display name; also the target of exact-name lookups.
	pub name: String,
	/// Family used by the category filter.
	pub category: RiskCategory,
	/// Editorial bucket, may disagree with `risk_score`.
	pub risk_level: RiskLevel,
	/// 0 to 100.
	pub risk_score: u8,
	/// Short summary, searched alongside the name.
	pub description: String,
	/// Capabilities that make the work automatable.
	#[serde(default)]
	pub automation_factors: Vec<String>,
	/// What people still do better.
	#[serde(default)]
	pub human_advantages: Vec<String>,
	/// Demand and outlook signals.
	pub trends: Trends,
	/// Occupations built on this skill.
	#[serde(default)]
	pub related_jobs: Vec<String>,
	/// Adjacent skills worth learning next.
	#[serde(default)]
	pub suggestions: Vec<String>,
}

impl SkillRisk {
	/// Band of the numeric score.
	pub fn score_band(&self) -> ScoreBand {
		ScoreBand::of(self.risk_score)
	}

	/// True when the score band and the authored level point at different
	/// buckets. Neither field is normalised from the other.
	pub fn band_disagrees_with_level(&self) -> bool {
		self.score_band().matching_level() != self.risk_level
	}

	/// Case-insensitive substring match on name or description. An empty
	/// query matches everything.
	pub fn matches_search(&self, query: &str) -> bool {
		if query.is_empty() {
			return true;
		}
		let query = query.to_lowercase();
		self.name.to_lowercase().contains(&query) || self.description.to_lowercase().contains(&query)
	}

	/// Case-insensitive full-name equality.
	pub fn name_equals(&self, query: &str) -> bool {
		self.name.to_lowercase() == query.to_lowercase()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn score_bands_use_inclusive_upper_bounds() {
		assert_eq!(ScoreBand::of(0), ScoreBand::Low);
		assert_eq!(ScoreBand::of(30), ScoreBand::Low);
		assert_eq!(ScoreBand::of(31), ScoreBand::Mid);
		assert_eq!(ScoreBand::of(60), ScoreBand::Mid);
		assert_eq!(ScoreBand::of(61), ScoreBand::High);
		assert_eq!(ScoreBand::of(100), ScoreBand::High);
	}

	#[test]
	fn category_round_trips_through_strings() {
		use strum::IntoEnumIterator;
		for category in RiskCategory::iter() {
			assert_eq!(category.to_string().parse::<RiskCategory>().ok(), Some(category));
		}
		assert!("gardening".parse::<RiskCategory>().is_err());
	}
}
