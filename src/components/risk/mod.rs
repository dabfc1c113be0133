mod card;
mod category_filter;
mod suggestions;
pub mod visual;

pub use card::SkillRiskCard;
pub use category_filter::RiskCategoryFilter;
pub use suggestions::FutureProofSuggestions;
pub use visual::{RiskCardVisual, Tone};
