//! Ring layout for the skill tree.
//!
//! Placement depends only on a skill's ordinal in the store: the angle bucket
//! cycles through evenly spaced spokes, every full turn adds a fixed rotation,
//! and the radius cycles through concentric rings. The layout knows nothing
//! about graph depth.

use std::f64::consts::PI;

use log::warn;

use crate::model::{DanglingPrerequisite, Skill};

/// A point in layout space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
	pub x: f64,
	pub y: f64,
}

impl Position {
	/// Euclidean distance to `other`.
	pub fn distance(self, other: Position) -> f64 {
		(self.x - other.x).hypot(self.y - other.y)
	}
}

/// Ring layout constants.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutConfig {
	/// Center of every ring.
	pub center: Position,
	/// Radius of the innermost ring.
	pub base_radius: f64,
	/// Gap between consecutive rings.
	pub ring_step: f64,
	/// Number of rings; the ring is `index % ring_count`.
	pub ring_count: usize,
	/// Number of evenly spaced base angles; the spoke is `index % spokes`.
	pub spokes: usize,
	/// Rotation added per completed turn of spokes, in radians.
	pub turn_offset: f64,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			center: Position { x: 400.0, y: 300.0 },
			base_radius: 120.0,
			ring_step: 80.0,
			ring_count: 3,
			spokes: 6,
			turn_offset: PI / 6.0,
		}
	}
}

/// Directed prerequisite relation between two placed skills, with the ids and
/// layout positions of both ends.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
	/// Store index of the prerequisite.
	pub from: usize,
	/// Store index of the dependent skill.
	pub to: usize,
	pub from_id: String,
	pub to_id: String,
	pub from_pos: Position,
	pub to_pos: Position,
}

/// Resolved edges plus the references that could not be resolved.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EdgeSet {
	/// One entry per resolvable (prerequisite, dependent) pair.
	pub edges: Vec<Edge>,
	/// One entry per unresolvable reference.
	pub dangling: Vec<DanglingPrerequisite>,
}

/// Deterministic ring placement.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RingLayout {
	config: LayoutConfig,
}

impl RingLayout {
	/// Layout with the given constants.
	pub fn new(config: LayoutConfig) -> Self {
		Self { config }
	}

	/// Constants this layout places nodes with.
	pub fn config(&self) -> &LayoutConfig {
		&self.config
	}

	/// Angle in radians for the node at `index`.
	pub fn angle(&self, index: usize) -> f64 {
		let spokes = self.config.spokes.max(1);
		let base = (index % spokes) as f64 * 2.0 * PI / spokes as f64;
		base + (index / spokes) as f64 * self.config.turn_offset
	}

	/// Ring radius for the node at `index`.
	pub fn radius(&self, index: usize) -> f64 {
		let rings = self.config.ring_count.max(1);
		self.config.base_radius + (index % rings) as f64 * self.config.ring_step
	}

	/// Position of the node at store ordinal `index`.
	pub fn position(&self, index: usize) -> Position {
		let (angle, radius) = (self.angle(index), self.radius(index));
		Position {
			x: self.config.center.x + radius * angle.cos(),
			y: self.config.center.y + radius * angle.sin(),
		}
	}

	/// Positions for every skill, in store order.
	pub fn positions(&self, skills: &[Skill]) -> Vec<Position> {
		(0..skills.len()).map(|i| self.position(i)).collect()
	}

	/// Scans every prerequisite list and resolves each id by linear search.
	pub fn edges(&self, skills: &[Skill]) -> EdgeSet {
		let mut set = EdgeSet::default();
		for (to, skill) in skills.iter().enumerate() {
			for prereq in &skill.prerequisites {
				match skills.iter().position(|s| &s.id == prereq) {
					Some(from) => set.edges.push(Edge {
						from,
						to,
						from_id: prereq.clone(),
						to_id: skill.id.clone(),
						from_pos: self.position(from),
						to_pos: self.position(to),
					}),
					None => {
						warn!("dropping edge {} -> {}: prerequisite not found", prereq, skill.id);
						set.dangling.push(DanglingPrerequisite {
							dependent: skill.id.clone(),
							missing: prereq.clone(),
						});
					}
				}
			}
		}
		set
	}
}
