//! Ad-hoc risk analysis for queries the store does not know.
//!
//! There is no model behind this: the record is a fixed template and the
//! score comes from an injected [`ScoreSource`].

use crate::model::{Demand, Outlook, RiskCategory, RiskLevel, SkillRisk, Trends};

/// Id given to every synthesized record.
pub const AD_HOC_ID: &str = "custom-analysis";

/// Placeholder score used when nothing better is injected.
pub const PLACEHOLDER_SCORE: u8 = 50;

/// Supplies the risk score for an ad-hoc analysis. Scores are in `[0, 100)`.
pub trait ScoreSource {
	/// Score for `query`.
	fn score(&mut self, query: &str) -> u8;
}

/// Always returns the same score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedScore(pub u8);

impl Default for FixedScore {
	fn default() -> Self {
		Self(PLACEHOLDER_SCORE)
	}
}

impl ScoreSource for FixedScore {
	fn score(&mut self, _query: &str) -> u8 {
		self.0.min(99)
	}
}

/// Reproducible pseudo-random scores from a 64-bit LCG.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeededScore {
	state: u64,
}

impl SeededScore {
	/// Score sequence starting from `seed`.
	pub fn new(seed: u64) -> Self {
		Self {
			state: seed ^ 0x9E37_79B9_7F4A_7C15,
		}
	}

	fn next_u64(&mut self) -> u64 {
		self.state = self
			.state
			.wrapping_mul(6_364_136_223_846_793_005)
			.wrapping_add(1_442_695_040_888_963_407);
		self.state
	}
}

impl ScoreSource for SeededScore {
	fn score(&mut self, _query: &str) -> u8 {
		// High bits of an LCG are the well-mixed ones.
		((self.next_u64() >> 33) % 100) as u8
	}
}

impl<F: FnMut(&str) -> u8> ScoreSource for F {
	fn score(&mut self, query: &str) -> u8 {
		self(query).min(99)
	}
}

/// Builds the placeholder record for `query`.
///
/// The level is always medium whatever the score; callers can detect the
/// mismatch with [`SkillRisk::band_disagrees_with_level`].
pub fn synthesize(query: &str, source: &mut dyn ScoreSource) -> SkillRisk {
	SkillRisk {
		id: AD_HOC_ID.to_string(),
		name: query.to_string(),
		category: RiskCategory::Technical,
		risk_level: RiskLevel::Medium,
		risk_score: source.score(query).min(99),
		description: format!("AI analysis of {query}"),
		automation_factors: vec![
			"AI and automation capabilities".into(),
			"Pattern recognition".into(),
		],
		human_advantages: vec![
			"Creative problem-solving".into(),
			"Context understanding".into(),
		],
		trends: Trends {
			current_demand: Demand::Stable,
			future_outlook: Outlook::Neutral,
		},
		related_jobs: vec!["Various roles".into()],
		suggestions: vec![
			"Enhance with AI collaboration".into(),
			"Focus on strategic aspects".into(),
		],
	}
}
