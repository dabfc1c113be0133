use std::collections::HashSet;

use super::layout::{EdgeSet, Position, RingLayout};
use super::visual::NodeVisual;
use crate::model::Skill;

pub const NODE_RADIUS: f64 = 40.0;
pub const HIT_RADIUS: f64 = 44.0;

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub moved: bool,
	pub press_node: Option<usize>,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<usize>,
	pub neighbors: HashSet<usize>,
	pub highlight_t: f64,
	pub prev_node: Option<usize>,
	pub prev_neighbors: HashSet<usize>,
	delay_t: f64,
}

/// Everything the canvas needs between frames.
pub struct SkillTreeState {
	pub skills: Vec<Skill>,
	pub positions: Vec<Position>,
	pub edges: EdgeSet,
	pub transform: ViewTransform,
	pub pan: PanState,
	pub hover: HoverState,
	pub selected: Option<usize>,
	pub width: f64,
	pub height: f64,
	pub flow_time: f64,
}

impl SkillTreeState {
	pub fn new(skills: Vec<Skill>, layout: &RingLayout, width: f64, height: f64) -> Self {
		let positions = layout.positions(&skills);
		let edges = layout.edges(&skills);
		let center = layout.config().center;

		Self {
			skills,
			positions,
			edges,
			// Keep the layout center in the middle of the canvas.
			transform: ViewTransform {
				x: width / 2.0 - center.x,
				y: height / 2.0 - center.y,
				k: 1.0,
			},
			pan: PanState::default(),
			hover: HoverState::default(),
			selected: None,
			width,
			height,
			flow_time: 0.0,
		}
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	/// Topmost node under a screen point. Later nodes are drawn on top.
	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<usize> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let point = Position { x: gx, y: gy };
		self.positions
			.iter()
			.rposition(|p| p.distance(point) < HIT_RADIUS)
	}

	pub fn select_id(&mut self, id: Option<&str>) {
		self.selected = id.and_then(|id| self.skills.iter().position(|s| s.id == id));
	}

	pub fn set_hover(&mut self, node: Option<usize>) {
		if self.hover.node == node {
			return;
		}
		let was_hovering = self.hover.node.is_some();

		// Save previous state for fade-out
		if was_hovering && node.is_none() {
			self.hover.prev_node = self.hover.node.take();
			self.hover.prev_neighbors = std::mem::take(&mut self.hover.neighbors);
		} else {
			self.hover.prev_node = None;
			self.hover.prev_neighbors.clear();
		}

		self.hover.node = node;
		self.hover.neighbors.clear();

		if let Some(idx) = node {
			if !was_hovering {
				self.hover.delay_t = 0.0;
			}
			for edge in &self.edges.edges {
				if edge.from == idx {
					self.hover.neighbors.insert(edge.to);
				} else if edge.to == idx {
					self.hover.neighbors.insert(edge.from);
				}
			}
		}
	}

	pub fn is_highlighted(&self, idx: usize) -> bool {
		self.hover.node == Some(idx)
			|| self.hover.neighbors.contains(&idx)
			|| self.hover.prev_node == Some(idx)
			|| self.hover.prev_neighbors.contains(&idx)
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some() || self.hover.prev_node.is_some()
	}

	pub fn visual(&self, idx: usize) -> NodeVisual {
		NodeVisual::derive(
			&self.skills[idx],
			self.selected == Some(idx),
			self.hover.node == Some(idx),
		)
	}

	pub fn tick(&mut self, dt: f64) {
		self.flow_time += dt;

		let (target, delay, speed) = if self.hover.node.is_some() {
			(1.0, 0.08, 6.0)
		} else {
			(0.0, 0.0, 4.0)
		};

		if self.hover.node.is_some() {
			self.hover.delay_t = (self.hover.delay_t + dt).min(delay);
			if self.hover.delay_t >= delay {
				self.hover.highlight_t += (target - self.hover.highlight_t) * (speed * dt).min(1.0);
			}
		} else {
			self.hover.highlight_t += (target - self.hover.highlight_t) * (speed * dt).min(1.0);
			if self.hover.highlight_t < 0.01 {
				self.hover.highlight_t = 0.0;
				self.hover.prev_node = None;
				self.hover.prev_neighbors.clear();
			}
		}
	}

	pub fn begin_press(&mut self, x: f64, y: f64) {
		self.pan = PanState {
			active: true,
			moved: false,
			press_node: self.node_at_position(x, y),
			start_x: x,
			start_y: y,
			transform_start_x: self.transform.x,
			transform_start_y: self.transform.y,
		};
	}

	pub fn drag_to(&mut self, x: f64, y: f64) {
		if !self.pan.active {
			return;
		}
		let (dx, dy) = (x - self.pan.start_x, y - self.pan.start_y);
		if !self.pan.moved && dx.hypot(dy) < 3.0 {
			return;
		}
		self.pan.moved = true;
		self.transform.x = self.pan.transform_start_x + dx;
		self.transform.y = self.pan.transform_start_y + dy;
	}

	/// Ends a press. Returns the node clicked, if the press was not a drag.
	pub fn end_press(&mut self) -> Option<usize> {
		let pan = std::mem::take(&mut self.pan);
		if pan.active && !pan.moved { pan.press_node } else { None }
	}

	pub fn zoom_at(&mut self, x: f64, y: f64, zoom_in: bool) {
		let factor = if zoom_in { 1.1 } else { 0.9 };
		let new_k = (self.transform.k * factor).clamp(0.3, 4.0);
		let ratio = new_k / self.transform.k;
		self.transform.x = x - (x - self.transform.x) * ratio;
		self.transform.y = y - (y - self.transform.y) * ratio;
		self.transform.k = new_k;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::store::SkillStore;

	fn state() -> SkillTreeState {
		let store = SkillStore::seed().unwrap();
		SkillTreeState::new(store.skills().to_vec(), &RingLayout::default(), 800.0, 600.0)
	}

	#[test]
	fn clicking_a_node_center_hits_it() {
		let s = state();
		for (i, p) in s.positions.iter().enumerate() {
			let (sx, sy) = (p.x + s.transform.x, p.y + s.transform.y);
			assert_eq!(s.node_at_position(sx, sy), Some(i));
		}
		assert_eq!(s.node_at_position(400.0, 300.0), None);
	}

	#[test]
	fn hover_collects_prerequisite_neighbors() {
		let mut s = state();
		s.set_hover(Some(2));
		let expected: HashSet<usize> = [0, 1, 3, 4].into_iter().collect();
		assert_eq!(s.hover.neighbors, expected);
		assert!(s.is_highlighted(3));
		assert!(!s.is_highlighted(5));
	}

	#[test]
	fn hover_fades_out_after_leaving() {
		let mut s = state();
		s.set_hover(Some(0));
		for _ in 0..30 {
			s.tick(0.016);
		}
		assert!(s.hover.highlight_t > 0.5);
		s.set_hover(None);
		assert_eq!(s.hover.prev_node, Some(0));
		for _ in 0..200 {
			s.tick(0.016);
		}
		assert!(!s.has_active_highlight());
	}

	#[test]
	fn selection_tracks_ids() {
		let mut s = state();
		s.select_id(Some("react-basics"));
		assert_eq!(s.selected, Some(3));
		assert!(s.visual(3).selected);
		s.select_id(None);
		assert_eq!(s.selected, None);
	}

	#[test]
	fn press_without_drag_is_a_click() {
		let mut s = state();
		let p = s.positions[3];
		let (sx, sy) = (p.x + s.transform.x, p.y + s.transform.y);
		s.begin_press(sx, sy);
		s.drag_to(sx + 1.0, sy);
		assert_eq!(s.end_press(), Some(3));

		s.begin_press(sx, sy);
		s.drag_to(sx + 40.0, sy + 10.0);
		assert_eq!(s.end_press(), None);
		assert!(!s.pan.active);
	}

	#[test]
	fn zoom_keeps_the_cursor_point_fixed() {
		let mut s = state();
		let before = s.screen_to_graph(250.0, 180.0);
		s.zoom_at(250.0, 180.0, true);
		let after = s.screen_to_graph(250.0, 180.0);
		assert!((before.0 - after.0).abs() < 1e-9 && (before.1 - after.1).abs() < 1e-9);
	}
}
