use std::fmt;
use std::str::FromStr;

use strum::IntoEnumIterator;
use thiserror::Error;

use crate::model::{RiskCategory, SkillRisk};

/// Which categories the risk browser shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
	/// No category restriction.
	#[default]
	All,
	/// Only risks in this category.
	Only(RiskCategory),
}

impl CategoryFilter {
	/// `All` followed by every category, in filter-bar order.
	pub fn options() -> impl Iterator<Item = CategoryFilter> {
		std::iter::once(Self::All).chain(RiskCategory::iter().map(Self::Only))
	}

	/// Whether `risk` passes this filter.
	pub fn admits(self, risk: &SkillRisk) -> bool {
		match self {
			Self::All => true,
			Self::Only(category) => risk.category == category,
		}
	}

	/// Filter button label.
	pub fn label(self) -> &'static str {
		match self {
			Self::All => "All Skills",
			Self::Only(category) => category.label(),
		}
	}

	/// Filter button emoji.
	pub fn icon(self) -> &'static str {
		match self {
			Self::All => "🌟",
			Self::Only(category) => category.icon(),
		}
	}
}

impl fmt::Display for CategoryFilter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::All => f.write_str("all"),
			Self::Only(category) => write!(f, "{category}"),
		}
	}
}

/// The string named neither `all` nor a known category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown risk category `{0}`")]
pub struct ParseCategoryError(pub String);

impl FromStr for CategoryFilter {
	type Err = ParseCategoryError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s == "all" {
			return Ok(Self::All);
		}
		s.parse::<RiskCategory>()
			.map(Self::Only)
			.map_err(|_| ParseCategoryError(s.to_string()))
	}
}
