//! Browsing, filtering and ad-hoc analysis against the seed stores.

use std::collections::BTreeSet;

use proptest::prelude::*;

use skillforge::components::skill_tree::SkillDetailContent;
use skillforge::controller::analysis::AD_HOC_ID;
use skillforge::controller::{AnalysisOutcome, CategoryFilter, FixedScore, SeededScore, SelectionState};
use skillforge::model::{RiskCategory, RiskLevel};
use skillforge::store::{RiskStore, SkillStore};

fn visible_ids(state: &SelectionState, store: &RiskStore) -> Vec<String> {
	state.visible_risks(store).iter().map(|r| r.id.clone()).collect()
}

#[test]
fn defaults_list_the_whole_store_in_order() {
	let store = RiskStore::seed().unwrap();
	let state = SelectionState::default();
	let expected: Vec<String> = store.risks().iter().map(|r| r.id.clone()).collect();
	assert_eq!(visible_ids(&state, &store), expected);
}

#[test]
fn technical_filter_keeps_two_records() {
	let store = RiskStore::seed().unwrap();
	let mut state = SelectionState::default();
	state.set_category("technical".parse().unwrap());
	assert_eq!(visible_ids(&state, &store), vec!["data-entry", "basic-coding"]);
}

#[test]
fn search_matches_inside_names() {
	let store = RiskStore::seed().unwrap();
	let mut state = SelectionState::default();
	state.set_search("emotional");
	assert_eq!(visible_ids(&state, &store), vec!["emotional-intelligence"]);
}

#[test]
fn filter_and_search_compose() {
	let store = RiskStore::seed().unwrap();
	let mut state = SelectionState::default();
	state.set_category(CategoryFilter::Only(RiskCategory::Technical));
	state.set_search("emotional");
	assert!(state.visible_risks(&store).is_empty());
}

#[test]
fn categories_partition_the_store() {
	let store = RiskStore::seed().unwrap();
	let mut seen = Vec::new();
	for filter in CategoryFilter::options().filter(|f| *f != CategoryFilter::All) {
		let mut state = SelectionState::default();
		state.set_category(filter);
		seen.extend(visible_ids(&state, &store));
	}
	seen.sort();
	let mut all: Vec<String> = store.risks().iter().map(|r| r.id.clone()).collect();
	all.sort();
	assert_eq!(seen, all);
}

#[test]
fn unknown_category_is_rejected() {
	assert!("robotic".parse::<CategoryFilter>().is_err());
	assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
}

#[test]
fn exact_name_selects_the_stored_record() {
	let store = RiskStore::seed().unwrap();
	let mut state = SelectionState::default();
	state.set_search("Emotional Intelligence");
	let outcome = state.analyze(&store, &mut FixedScore(99));
	assert_eq!(outcome, AnalysisOutcome::Matched("emotional-intelligence".into()));
	let risk = state.selected_risk().unwrap();
	assert_eq!(risk.risk_score, 15);
	assert_eq!(risk.risk_level, RiskLevel::Low);
}

#[test]
fn unknown_query_gets_a_placeholder_record() {
	let store = RiskStore::seed().unwrap();
	let mut state = SelectionState::default();
	state.set_search("Quantum Computing");
	let outcome = state.analyze(&store, &mut FixedScore::default());
	assert_eq!(outcome, AnalysisOutcome::Synthesized);

	let risk = state.selected_risk().unwrap();
	assert_eq!(risk.id, AD_HOC_ID);
	assert_eq!(risk.name, "Quantum Computing");
	assert_eq!(risk.description, "AI analysis of Quantum Computing");
	assert_eq!(risk.category, RiskCategory::Technical);
	assert_eq!(risk.risk_level, RiskLevel::Medium);
	assert_eq!(risk.risk_score, 50);
	assert!(store.get(AD_HOC_ID).is_none());
}

#[test]
fn placeholder_scores_vary_with_the_seed_but_nothing_else_does() {
	let store = RiskStore::seed().unwrap();
	let mut scores = BTreeSet::new();
	let mut first = None;
	for seed in 0..32u64 {
		let mut state = SelectionState::default();
		state.set_search("Quantum Computing");
		state.analyze(&store, &mut SeededScore::new(seed));
		let mut risk = state.selected_risk().cloned().unwrap();
		scores.insert(risk.risk_score);
		risk.risk_score = 0;
		match &first {
			None => first = Some(risk),
			Some(f) => assert_eq!(f, &risk),
		}
	}
	assert!(scores.len() > 1, "{scores:?}");
}

#[test]
fn placeholder_level_can_disagree_with_its_score() {
	let store = RiskStore::seed().unwrap();
	let mut state = SelectionState::default();
	state.set_search("Juggling");
	state.analyze(&store, &mut FixedScore(90));
	assert!(state.selected_risk().unwrap().band_disagrees_with_level());
}

#[test]
fn skill_selection_round_trips_through_the_panel() {
	let skills = SkillStore::seed().unwrap();
	let mut state = SelectionState::default();
	state.select_skill(skills.get("react-basics").cloned());

	let content = SkillDetailContent::derive(state.selected_skill().unwrap(), &skills);
	assert_eq!(content.prerequisites, vec!["JavaScript Fundamentals"]);
	assert!(content.action.enabled);

	state.select_skill(None);
	assert!(state.selected_skill().is_none());
}

#[test]
fn locked_skills_still_open_a_detail_panel() {
	let skills = SkillStore::seed().unwrap();
	let locked = skills.get("database-design").unwrap();
	let content = SkillDetailContent::derive(locked, &skills);
	assert_eq!(content.action.label, "Complete Prerequisites First");
	assert!(!content.action.enabled);
	assert_eq!(content.progress, None);
	assert_eq!(content.prerequisites, vec!["Node.js Basics"]);
}

proptest! {
	#[test]
	fn visible_risks_are_an_ordered_subset(query in "[a-zA-Z ]{0,8}") {
		let store = RiskStore::seed().unwrap();
		let mut state = SelectionState::default();
		state.set_search(query.clone());
		let visible = visible_ids(&state, &store);
		let mut cursor = store.risks().iter();
		for id in &visible {
			prop_assert!(cursor.any(|r| &r.id == id));
		}
		for id in &visible {
			prop_assert!(store.get(id).unwrap().matches_search(&query));
		}
	}

	#[test]
	fn any_nonempty_query_selects_something(query in "[a-z]{1,12}", seed: u64) {
		let store = RiskStore::seed().unwrap();
		let mut state = SelectionState::default();
		state.set_search(query);
		let outcome = state.analyze(&store, &mut SeededScore::new(seed));
		prop_assert_ne!(outcome, AnalysisOutcome::Skipped);
		prop_assert!(state.selected_risk().unwrap().risk_score < 100);
	}
}
