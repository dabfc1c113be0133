//! Skill and risk records shared by the stores, the controller and the views.

mod risk;
mod skill;

pub use risk::{Demand, Outlook, RiskCategory, RiskLevel, ScoreBand, SkillRisk, Trends};
pub use skill::{DanglingPrerequisite, Skill, SkillLevel, SkillStatus, humanize_id};
