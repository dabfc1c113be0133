use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Difficulty tier of a skill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SkillLevel {
	/// Entry level.
	Beginner,
	/// Requires some grounding.
	Intermediate,
	/// Requires substantial prior work.
	Advanced,
}

/// Where the learner currently stands on a skill.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SkillStatus {
	/// Prerequisites are not met yet.
	Locked,
	/// Ready to start.
	Available,
	/// Started; `Skill::progress` is meaningful.
	InProgress,
	/// Done.
	Completed,
}

impl SkillStatus {
	/// Human label, e.g. `in progress`.
	pub fn label(self) -> &'static str {
		match self {
			Self::Locked => "locked",
			Self::Available => "available",
			Self::InProgress => "in progress",
			Self::Completed => "completed",
		}
	}
}

/// One learnable unit in the prerequisite graph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
	/// Unique key within the store.
	pub id: String,
	/// Display title.
	pub title: String,
	/// Free-form grouping label such as `Frontend`.
	pub category: String,
	/// Difficulty tier.
	pub level: SkillLevel,
	/// Learner status.
	pub status: SkillStatus,
	/// Percentage complete, 0 to 100.
	#[serde(default)]
	pub progress: u8,
	/// Longer description shown in tooltips and the detail panel.
	pub description: String,
	/// Ids of the skills this one depends on, in display order.
	#[serde(default)]
	pub prerequisites: Vec<String>,
	/// Practice project names.
	#[serde(default)]
	pub projects: Vec<String>,
	/// Estimated effort.
	pub estimated_hours: u32,
}

impl Skill {
	/// Progress to show, if any. Only in-progress skills report one.
	pub fn displayed_progress(&self) -> Option<u8> {
		(self.status == SkillStatus::InProgress).then_some(self.progress.min(100))
	}
}

/// A prerequisite id that does not resolve to any skill in the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DanglingPrerequisite {
	/// The skill declaring the prerequisite.
	pub dependent: String,
	/// The id that could not be found.
	pub missing: String,
}

/// Turns `javascript-fundamentals` into `Javascript Fundamentals`.
pub fn humanize_id(id: &str) -> String {
	id.split(['-', '_'])
		.filter(|word| !word.is_empty())
		.map(|word| {
			let mut chars = word.chars();
			match chars.next() {
				Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
				None => String::new(),
			}
		})
		.collect::<Vec<_>>()
		.join(" ")
}

#[cfg(test)]
mod tests {
	use super::*;

	fn skill(status: SkillStatus, progress: u8) -> Skill {
		Skill {
			id: "s".into(),
			title: "S".into(),
			category: "Frontend".into(),
			level: SkillLevel::Beginner,
			status,
			progress,
			description: String::new(),
			prerequisites: vec![],
			projects: vec![],
			estimated_hours: 1,
		}
	}

	#[test]
	fn progress_only_shown_in_progress() {
		assert_eq!(skill(SkillStatus::InProgress, 65).displayed_progress(), Some(65));
		assert_eq!(skill(SkillStatus::Completed, 100).displayed_progress(), None);
		assert_eq!(skill(SkillStatus::Available, 40).displayed_progress(), None);
	}

	#[test]
	fn status_parses_kebab_case() {
		assert_eq!("in-progress".parse::<SkillStatus>().ok(), Some(SkillStatus::InProgress));
		assert_eq!(SkillStatus::InProgress.to_string(), "in-progress");
		assert_eq!(SkillStatus::InProgress.label(), "in progress");
	}

	#[test]
	fn humanize_replaces_every_separator() {
		assert_eq!(humanize_id("javascript-fundamentals"), "Javascript Fundamentals");
		assert_eq!(humanize_id("a-b-c"), "A B C");
		assert_eq!(humanize_id("html"), "Html");
	}
}
