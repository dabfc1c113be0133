//! Colour keys for risk cards and the analysis panel.

use crate::model::{Demand, Outlook, RiskLevel, ScoreBand, SkillRisk};

/// Three-way colour key shared by levels, bands and trends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
	/// Green.
	Good,
	/// Yellow for risk, blue for trends.
	Neutral,
	/// Red.
	Bad,
}

impl Tone {
	/// Foreground colour.
	pub fn text(self) -> &'static str {
		match self {
			Self::Good => "#16a34a",
			Self::Neutral => "#ca8a04",
			Self::Bad => "#dc2626",
		}
	}

	/// Solid fill for bars.
	pub fn fill(self) -> &'static str {
		match self {
			Self::Good => "#22c55e",
			Self::Neutral => "#eab308",
			Self::Bad => "#ef4444",
		}
	}

	/// Badge style (background, text, border).
	pub fn badge(self) -> (&'static str, &'static str, &'static str) {
		match self {
			Self::Good => ("#dcfce7", "#166534", "#bbf7d0"),
			Self::Neutral => ("#fef9c3", "#854d0e", "#fef08a"),
			Self::Bad => ("#fee2e2", "#991b1b", "#fecaca"),
		}
	}
}

/// Tone of the authored risk level.
pub fn level_tone(level: RiskLevel) -> Tone {
	match level {
		RiskLevel::Low => Tone::Good,
		RiskLevel::Medium => Tone::Neutral,
		RiskLevel::High => Tone::Bad,
	}
}

/// Tone of the score band.
pub fn band_tone(band: ScoreBand) -> Tone {
	match band {
		ScoreBand::Low => Tone::Good,
		ScoreBand::Mid => Tone::Neutral,
		ScoreBand::High => Tone::Bad,
	}
}

/// Trend colours use blue, not yellow, for the middle value.
pub fn trend_color(tone: Tone) -> &'static str {
	match tone {
		Tone::Neutral => "#2563eb",
		other => other.text(),
	}
}

/// Tone of the current demand.
pub fn demand_tone(demand: Demand) -> Tone {
	match demand {
		Demand::Rising => Tone::Good,
		Demand::Stable => Tone::Neutral,
		Demand::Declining => Tone::Bad,
	}
}

/// Tone of the future outlook.
pub fn outlook_tone(outlook: Outlook) -> Tone {
	match outlook {
		Outlook::Positive => Tone::Good,
		Outlook::Neutral => Tone::Neutral,
		Outlook::Negative => Tone::Bad,
	}
}

/// Arrow glyph for the demand trend.
pub fn demand_arrow(demand: Demand) -> &'static str {
	match demand {
		Demand::Rising => "↗️",
		Demand::Stable => "→",
		Demand::Declining => "↘️",
	}
}

/// How one risk card is coloured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RiskCardVisual {
	/// From the authored level; drives the badge.
	pub level_tone: Tone,
	/// From the numeric score; drives the percentage and the bar.
	pub score_tone: Tone,
	/// The two tones point at different buckets.
	pub mismatch: bool,
	/// Colour of the demand arrow.
	pub demand_tone: Tone,
	/// The card is open in the analysis panel.
	pub selected: bool,
}

impl RiskCardVisual {
	/// Colours for `risk`'s card.
	pub fn derive(risk: &SkillRisk, selected: bool) -> Self {
		Self {
			level_tone: level_tone(risk.risk_level),
			score_tone: band_tone(risk.score_band()),
			mismatch: risk.band_disagrees_with_level(),
			demand_tone: demand_tone(risk.trends.current_demand),
			selected,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::controller::FixedScore;
	use crate::controller::analysis::synthesize;
	use crate::store::RiskStore;

	#[test]
	fn data_entry_is_red_on_both_keys() {
		let store = RiskStore::seed().unwrap();
		let visual = RiskCardVisual::derive(store.get("data-entry").unwrap(), false);
		assert_eq!(visual.level_tone, Tone::Bad);
		assert_eq!(visual.score_tone, Tone::Bad);
		assert_eq!(visual.demand_tone, Tone::Bad);
		assert!(!visual.mismatch);
	}

	#[test]
	fn placeholder_score_can_disagree_with_its_level() {
		let risk = synthesize("Juggling", &mut FixedScore(12));
		let visual = RiskCardVisual::derive(&risk, true);
		assert_eq!(visual.level_tone, Tone::Neutral);
		assert_eq!(visual.score_tone, Tone::Good);
		assert!(visual.mismatch);
	}

	#[test]
	fn neutral_trends_are_blue() {
		assert_eq!(trend_color(outlook_tone(Outlook::Neutral)), "#2563eb");
		assert_eq!(trend_color(demand_tone(Demand::Rising)), Tone::Good.text());
	}
}
