//! Read-only skill and risk stores, loaded once from embedded seed data.
//!
//! The JSON documents under `seed/` are the data-fetch boundary: a backend
//! would hand the same shape to [`SkillStore::from_json`] and
//! [`RiskStore::from_json`].

mod error;

use std::collections::HashSet;

use log::{info, warn};

use crate::model::{DanglingPrerequisite, Skill, SkillRisk};

pub use error::StoreError;

const SKILLS_SEED: &str = include_str!("seed/skills.json");
const RISKS_SEED: &str = include_str!("seed/risks.json");

/// Ordered, immutable collection of skills. Order drives the layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkillStore {
	skills: Vec<Skill>,
}

impl SkillStore {
	/// The built-in sample skills.
	pub fn seed() -> Result<Self, StoreError> {
		Self::from_json(SKILLS_SEED)
	}

	/// Parses and validates a JSON array of skills.
	pub fn from_json(json: &str) -> Result<Self, StoreError> {
		let skills = serde_json::from_str(json).map_err(|source| StoreError::Parse {
			store: "skills",
			source,
		})?;
		Self::new(skills)
	}

	/// Validates ids and progress. Dangling prerequisites are reported but
	/// do not fail the load.
	pub fn new(skills: Vec<Skill>) -> Result<Self, StoreError> {
		check_ids("skills", skills.iter().map(|s| s.id.as_str()))?;
		if let Some(skill) = skills.iter().find(|s| s.progress > 100) {
			return Err(StoreError::ProgressOutOfRange {
				id: skill.id.clone(),
				progress: skill.progress,
			});
		}

		let store = Self { skills };
		for dangling in store.dangling_prerequisites() {
			warn!(
				"skill `{}` lists unknown prerequisite `{}`",
				dangling.dependent, dangling.missing
			);
		}
		info!("Loaded {} skills", store.skills.len());
		Ok(store)
	}

	/// Skills in store order.
	pub fn skills(&self) -> &[Skill] {
		&self.skills
	}

	/// Linear lookup by id.
	pub fn get(&self, id: &str) -> Option<&Skill> {
		self.index_of(id).map(|idx| &self.skills[idx])
	}

	/// Store ordinal of `id`.
	pub fn index_of(&self, id: &str) -> Option<usize> {
		self.skills.iter().position(|s| s.id == id)
	}

	/// Every prerequisite reference that does not resolve, in store order.
	pub fn dangling_prerequisites(&self) -> Vec<DanglingPrerequisite> {
		self.skills
			.iter()
			.flat_map(|skill| {
				skill
					.prerequisites
					.iter()
					.filter(|id| self.get(id).is_none())
					.map(|id| DanglingPrerequisite {
						dependent: skill.id.clone(),
						missing: id.clone(),
					})
			})
			.collect()
	}

	/// Number of skills.
	pub fn len(&self) -> usize {
		self.skills.len()
	}

	/// True when the store holds no skills.
	pub fn is_empty(&self) -> bool {
		self.skills.is_empty()
	}
}

/// Ordered, immutable collection of risk profiles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RiskStore {
	risks: Vec<SkillRisk>,
}

impl RiskStore {
	/// The built-in sample risk profiles.
	pub fn seed() -> Result<Self, StoreError> {
		Self::from_json(RISKS_SEED)
	}

	/// Parses and validates a JSON array of risk profiles.
	pub fn from_json(json: &str) -> Result<Self, StoreError> {
		let risks = serde_json::from_str(json).map_err(|source| StoreError::Parse {
			store: "risks",
			source,
		})?;
		Self::new(risks)
	}

	/// Validates ids and scores.
	pub fn new(risks: Vec<SkillRisk>) -> Result<Self, StoreError> {
		check_ids("risks", risks.iter().map(|r| r.id.as_str()))?;
		if let Some(risk) = risks.iter().find(|r| r.risk_score > 100) {
			return Err(StoreError::ScoreOutOfRange {
				id: risk.id.clone(),
				score: risk.risk_score,
			});
		}
		info!("Loaded {} risk profiles", risks.len());
		Ok(Self { risks })
	}

	/// Risk profiles in store order.
	pub fn risks(&self) -> &[SkillRisk] {
		&self.risks
	}

	/// Linear lookup by id.
	pub fn get(&self, id: &str) -> Option<&SkillRisk> {
		self.risks.iter().find(|r| r.id == id)
	}

	/// Number of risk profiles.
	pub fn len(&self) -> usize {
		self.risks.len()
	}

	/// True when the store holds no risk profiles.
	pub fn is_empty(&self) -> bool {
		self.risks.is_empty()
	}
}

fn check_ids<'a>(store: &'static str, ids: impl Iterator<Item = &'a str>) -> Result<(), StoreError> {
	let mut seen = HashSet::new();
	for (index, id) in ids.enumerate() {
		if id.trim().is_empty() {
			return Err(StoreError::EmptyId { store, index });
		}
		if !seen.insert(id) {
			return Err(StoreError::DuplicateId {
				store,
				id: id.to_string(),
			});
		}
	}
	Ok(())
}
