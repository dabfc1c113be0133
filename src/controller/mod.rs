//! Transient UI state for the skill tree and the risk browser.
//!
//! Views hold a [`SelectionState`] in a signal and feed it one event at a
//! time; everything shown is re-derived from the state afterwards.

pub mod analysis;
mod filter;

use log::debug;

use crate::model::{Skill, SkillRisk};
use crate::store::RiskStore;

pub use analysis::{FixedScore, ScoreSource, SeededScore};
pub use filter::{CategoryFilter, ParseCategoryError};

/// What [`SelectionState::analyze`] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnalysisOutcome {
	/// The search box was empty.
	Skipped,
	/// A visible stored record has exactly this name; it is now selected.
	Matched(String),
	/// No stored record matched; a placeholder record is now selected.
	Synthesized,
}

/// Selection, category filter and search text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionState {
	selected_skill: Option<Skill>,
	selected_risk: Option<SkillRisk>,
	category: CategoryFilter,
	search: String,
}

impl SelectionState {
	/// Skill shown in the detail panel.
	pub fn selected_skill(&self) -> Option<&Skill> {
		self.selected_skill.as_ref()
	}

	/// Risk profile shown in the analysis panel.
	pub fn selected_risk(&self) -> Option<&SkillRisk> {
		self.selected_risk.as_ref()
	}

	/// Active category filter.
	pub fn category(&self) -> CategoryFilter {
		self.category
	}

	/// Search text as typed.
	pub fn search(&self) -> &str {
		&self.search
	}

	/// Replaces the category filter.
	pub fn set_category(&mut self, category: CategoryFilter) {
		self.category = category;
	}

	/// Replaces the search text verbatim.
	pub fn set_search(&mut self, text: impl Into<String>) {
		self.search = text.into();
	}

	/// Selects a skill, or clears the detail panel with `None`.
	pub fn select_skill(&mut self, skill: Option<Skill>) {
		self.selected_skill = skill;
	}

	/// Selects a risk profile, or clears the analysis panel with `None`.
	pub fn select_risk(&mut self, risk: Option<SkillRisk>) {
		self.selected_risk = risk;
	}

	/// Risks passing both the category filter and the search, in store order.
	pub fn visible_risks<'a>(&self, store: &'a RiskStore) -> Vec<&'a SkillRisk> {
		store
			.risks()
			.iter()
			.filter(|r| self.category.admits(r) && r.matches_search(&self.search))
			.collect()
	}

	/// Resolves the current search to a risk profile and selects it.
	///
	/// A visible stored record whose name equals the search (ignoring case)
	/// wins. Otherwise a placeholder is synthesized, replacing any previous
	/// placeholder.
	pub fn analyze(&mut self, store: &RiskStore, source: &mut dyn ScoreSource) -> AnalysisOutcome {
		if self.search.is_empty() {
			return AnalysisOutcome::Skipped;
		}

		let matched = self
			.visible_risks(store)
			.into_iter()
			.find(|r| r.name_equals(&self.search))
			.cloned();
		if let Some(risk) = matched {
			debug!("analysis of `{}` matched stored `{}`", self.search, risk.id);
			let id = risk.id.clone();
			self.selected_risk = Some(risk);
			return AnalysisOutcome::Matched(id);
		}

		let risk = analysis::synthesize(&self.search, source);
		debug!("synthesized analysis for `{}` with score {}", risk.name, risk.risk_score);
		self.selected_risk = Some(risk);
		AnalysisOutcome::Synthesized
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::store::SkillStore;

	#[test]
	fn defaults_show_everything() {
		let state = SelectionState::default();
		assert_eq!(state.category(), CategoryFilter::All);
		assert_eq!(state.search(), "");
		assert!(state.selected_risk().is_none());
		assert!(state.selected_skill().is_none());
	}

	#[test]
	fn search_is_case_insensitive_over_name_and_description() {
		let store = RiskStore::seed().unwrap();
		let mut state = SelectionState::default();
		state.set_search("DATA");
		let ids: Vec<_> = state.visible_risks(&store).iter().map(|r| r.id.as_str()).collect();
		assert_eq!(ids, vec!["data-entry"]);

		state.set_search("planning");
		let ids: Vec<_> = state.visible_risks(&store).iter().map(|r| r.id.as_str()).collect();
		assert_eq!(ids, vec!["strategic-thinking"]);
	}

	#[test]
	fn empty_search_does_nothing() {
		let store = RiskStore::seed().unwrap();
		let mut state = SelectionState::default();
		assert_eq!(state.analyze(&store, &mut FixedScore::default()), AnalysisOutcome::Skipped);
		assert!(state.selected_risk().is_none());
	}

	#[test]
	fn hidden_exact_match_is_not_used() {
		let store = RiskStore::seed().unwrap();
		let mut state = SelectionState::default();
		state.set_category(CategoryFilter::Only(crate::model::RiskCategory::Creative));
		state.set_search("data entry");
		assert_eq!(state.analyze(&store, &mut FixedScore(10)), AnalysisOutcome::Synthesized);
		assert_eq!(state.selected_risk().map(|r| r.risk_score), Some(10));
	}

	#[test]
	fn new_analysis_replaces_the_previous_placeholder() {
		let store = RiskStore::seed().unwrap();
		let mut state = SelectionState::default();
		state.set_search("Welding");
		state.analyze(&store, &mut FixedScore(20));
		state.set_search("Pottery");
		state.analyze(&store, &mut FixedScore(30));
		let risk = state.selected_risk().unwrap();
		assert_eq!((risk.name.as_str(), risk.risk_score), ("Pottery", 30));
		assert_eq!(store.len(), 6);
	}

	#[test]
	fn skill_selection_can_be_cleared() {
		let skills = SkillStore::seed().unwrap();
		let mut state = SelectionState::default();
		state.select_skill(skills.get("react-basics").cloned());
		assert_eq!(state.selected_skill().map(|s| s.id.as_str()), Some("react-basics"));
		state.select_skill(None);
		assert!(state.selected_skill().is_none());
	}
}
