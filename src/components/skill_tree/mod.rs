mod component;
mod detail;
pub mod layout;
mod render;
mod state;
pub mod visual;

pub use component::SkillTreeCanvas;
pub use detail::SkillDetail;
pub use layout::{Edge, EdgeSet, LayoutConfig, Position, RingLayout};
pub use visual::{LearningAction, NodeVisual, SkillDetailContent};
