//! What each skill node and its detail panel look like, derived from the
//! record and the current selection. Nothing here touches the DOM.

use crate::model::{Skill, SkillLevel, SkillStatus, humanize_id};
use crate::store::SkillStore;

/// Gradient stops (top-left, bottom-right) for a node fill.
pub fn status_gradient(status: SkillStatus) -> (&'static str, &'static str) {
	match status {
		SkillStatus::Completed => ("#4ade80", "#16a34a"),
		SkillStatus::InProgress => ("#60a5fa", "#2563eb"),
		SkillStatus::Available => ("#818cf8", "#9333ea"),
		SkillStatus::Locked => ("#d1d5db", "#9ca3af"),
	}
}

/// Badge glyph for a level.
pub fn level_icon(level: SkillLevel) -> &'static str {
	match level {
		SkillLevel::Beginner => "🌱",
		SkillLevel::Intermediate => "🌿",
		SkillLevel::Advanced => "🌳",
	}
}

/// Visual state of one node on the canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeVisual {
	/// Fill gradient keyed by status.
	pub gradient: (&'static str, &'static str),
	/// Node opacity; locked nodes are faded.
	pub opacity: f64,
	/// Fraction of the ring to stroke. Only in-progress nodes have one.
	pub progress_ring: Option<f64>,
	/// Level glyph shown in the corner badge.
	pub badge: &'static str,
	/// Completed nodes get a checkmark.
	pub checkmark: bool,
	/// Drawn with the selection ring.
	pub selected: bool,
	/// Under the cursor.
	pub hovered: bool,
}

impl NodeVisual {
	/// Visual for `skill` given its selection and hover state.
	pub fn derive(skill: &Skill, selected: bool, hovered: bool) -> Self {
		Self {
			gradient: status_gradient(skill.status),
			opacity: if skill.status == SkillStatus::Locked { 0.6 } else { 1.0 },
			progress_ring: skill.displayed_progress().map(|p| f64::from(p) / 100.0),
			badge: level_icon(skill.level),
			checkmark: skill.status == SkillStatus::Completed,
			selected,
			hovered,
		}
	}
}

/// The call-to-action at the bottom of the detail panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LearningAction {
	/// Button text.
	pub label: &'static str,
	/// Locked skills show the action but cannot trigger it.
	pub enabled: bool,
}

impl LearningAction {
	/// Action offered for a skill in `status`.
	pub fn for_status(status: SkillStatus) -> Self {
		match status {
			SkillStatus::Available => Self {
				label: "Start Learning",
				enabled: true,
			},
			SkillStatus::InProgress => Self {
				label: "Continue Learning",
				enabled: true,
			},
			SkillStatus::Completed => Self {
				label: "Review & Practice",
				enabled: true,
			},
			SkillStatus::Locked => Self {
				label: "Complete Prerequisites First",
				enabled: false,
			},
		}
	}
}

/// Everything the detail panel shows for one skill.
#[derive(Clone, Debug, PartialEq)]
pub struct SkillDetailContent {
	/// The skill being shown.
	pub skill: Skill,
	/// Present only for in-progress skills.
	pub progress: Option<u8>,
	/// Prerequisite titles, or a humanised id when the reference dangles.
	pub prerequisites: Vec<String>,
	/// Call-to-action at the bottom of the panel.
	pub action: LearningAction,
}

impl SkillDetailContent {
	/// Locked skills are shown in full; only their action is disabled.
	pub fn derive(skill: &Skill, store: &SkillStore) -> Self {
		Self {
			skill: skill.clone(),
			progress: skill.displayed_progress(),
			prerequisites: skill
				.prerequisites
				.iter()
				.map(|id| store.get(id).map_or_else(|| humanize_id(id), |p| p.title.clone()))
				.collect(),
			action: LearningAction::for_status(skill.status),
		}
	}
}

/// Badge colours (background, text) for a level in the detail panel.
pub fn level_badge_colors(level: SkillLevel) -> (&'static str, &'static str) {
	match level {
		SkillLevel::Beginner => ("#dcfce7", "#166534"),
		SkillLevel::Intermediate => ("#fef9c3", "#854d0e"),
		SkillLevel::Advanced => ("#fee2e2", "#991b1b"),
	}
}

/// Badge colours (background, text) for a status in the detail panel.
pub fn status_badge_colors(status: SkillStatus) -> (&'static str, &'static str) {
	match status {
		SkillStatus::Completed => ("#dcfce7", "#166534"),
		SkillStatus::InProgress => ("#dbeafe", "#1e40af"),
		SkillStatus::Available => ("#f3e8ff", "#6b21a8"),
		SkillStatus::Locked => ("#f3f4f6", "#1f2937"),
	}
}

#[cfg(test)]
mod tests {
	use strum::IntoEnumIterator;

	use super::*;

	#[test]
	fn in_progress_node_draws_its_progress_ring() {
		let store = SkillStore::seed().unwrap();
		let js = store.get("javascript-fundamentals").unwrap();
		let visual = NodeVisual::derive(js, false, false);
		assert_eq!(visual.progress_ring, Some(0.65));
		assert!(!visual.checkmark);
		assert_eq!(visual.badge, "🌱");
	}

	#[test]
	fn completed_nodes_get_a_checkmark_and_no_ring() {
		let store = SkillStore::seed().unwrap();
		let visual = NodeVisual::derive(store.get("html-basics").unwrap(), true, false);
		assert!(visual.checkmark);
		assert!(visual.selected);
		assert_eq!(visual.progress_ring, None);
	}

	#[test]
	fn locked_nodes_are_faded() {
		let store = SkillStore::seed().unwrap();
		let visual = NodeVisual::derive(store.get("nodejs-basics").unwrap(), false, true);
		assert_eq!(visual.opacity, 0.6);
		assert_eq!(visual.gradient, status_gradient(SkillStatus::Locked));
	}

	#[test]
	fn locked_skill_still_has_detail_content() {
		let store = SkillStore::seed().unwrap();
		let content = SkillDetailContent::derive(store.get("database-design").unwrap(), &store);
		assert_eq!(content.skill.title, "Database Design");
		assert_eq!(content.prerequisites, vec!["Node.js Basics".to_string()]);
		assert_eq!(content.progress, None);
		assert!(!content.action.enabled);
	}

	#[test]
	fn dangling_prerequisites_fall_back_to_a_readable_id() {
		let store = SkillStore::seed().unwrap();
		let mut skill = store.get("react-basics").unwrap().clone();
		skill.prerequisites.push("type-script-basics".into());
		let content = SkillDetailContent::derive(&skill, &store);
		assert_eq!(
			content.prerequisites,
			vec!["JavaScript Fundamentals".to_string(), "Type Script Basics".to_string()]
		);
		assert_eq!(content.action.label, "Start Learning");
	}

	#[test]
	fn only_locked_skills_have_a_disabled_action() {
		for status in SkillStatus::iter() {
			let action = LearningAction::for_status(status);
			assert_eq!(action.enabled, status != SkillStatus::Locked);
			if status != SkillStatus::Available {
				assert_ne!(action.label, "Start Learning");
			}
		}
	}
}
