//! Reusable views: the skill tree canvas, risk cards and the navigation bar.

pub mod navigation;
pub mod risk;
pub mod skill_tree;
