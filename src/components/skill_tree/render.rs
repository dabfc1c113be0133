use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::layout::Position;
use super::state::{NODE_RADIUS, SkillTreeState};

const TOOLTIP_WIDTH: f64 = 220.0;

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

pub fn render(state: &SkillTreeState, ctx: &CanvasRenderingContext2d) {
	ctx.clear_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	draw_tooltip(state, ctx);
	ctx.restore();
}

fn draw_edges(state: &SkillTreeState, ctx: &CanvasRenderingContext2d) {
	let t = ease_out_cubic(state.hover.highlight_t);
	let dash_offset = -(state.flow_time * 20.0) % 10.0;

	for edge in &state.edges.edges {
		let (from, to) = (edge.from_pos, edge.to_pos);
		let is_highlighted = state.is_highlighted(edge.from) && state.is_highlighted(edge.to);

		let (color, width, offset) = if is_highlighted && t > 0.01 {
			(format!("rgba(129, 140, 248, {})", 0.4 + 0.6 * t), 2.0 + t, dash_offset)
		} else {
			("#e5e7eb".to_string(), 2.0, 0.0)
		};

		ctx.set_stroke_style_str(&color);
		ctx.set_line_width(width);
		let _ = ctx.set_line_dash(&js_sys::Array::of2(&JsValue::from_f64(5.0), &JsValue::from_f64(5.0)));
		ctx.set_line_dash_offset(offset);
		ctx.begin_path();
		ctx.move_to(from.x, from.y);
		ctx.line_to(to.x, to.y);
		ctx.stroke();
	}
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_nodes(state: &SkillTreeState, ctx: &CanvasRenderingContext2d) {
	let (has_highlight, t) = (state.has_active_highlight(), ease_out_cubic(state.hover.highlight_t));

	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");

	for (idx, &pos) in state.positions.iter().enumerate() {
		let skill = &state.skills[idx];
		let visual = state.visual(idx);
		let dim = if has_highlight && !state.is_highlighted(idx) {
			1.0 - 0.5 * t
		} else {
			1.0
		};
		let radius = if visual.hovered {
			NODE_RADIUS * (1.0 + 0.1 * t)
		} else {
			NODE_RADIUS
		};
		let Position { x, y } = pos;

		if visual.hovered && t > 0.01 {
			draw_glow(ctx, pos, radius, t);
		}

		ctx.set_global_alpha(visual.opacity * dim);
		let gradient = ctx.create_linear_gradient(x - radius, y - radius, x + radius, y + radius);
		let _ = gradient.add_color_stop(0.0, visual.gradient.0);
		let _ = gradient.add_color_stop(1.0, visual.gradient.1);
		ctx.begin_path();
		let _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_canvas_gradient(&gradient);
		ctx.fill();

		if visual.selected {
			ctx.begin_path();
			let _ = ctx.arc(x, y, radius + 4.0, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str("rgba(250, 204, 21, 0.75)");
			ctx.set_line_width(4.0);
			ctx.stroke();
		}

		if let Some(fraction) = visual.progress_ring {
			let ring = radius - 6.0;
			ctx.set_line_width(3.0);
			ctx.begin_path();
			let _ = ctx.arc(x, y, ring, 0.0, 2.0 * PI);
			ctx.set_stroke_style_str("rgba(255, 255, 255, 0.3)");
			ctx.stroke();
			ctx.begin_path();
			let _ = ctx.arc(x, y, ring, -PI / 2.0, -PI / 2.0 + 2.0 * PI * fraction);
			ctx.set_stroke_style_str("white");
			ctx.stroke();
		}

		ctx.set_fill_style_str("white");
		ctx.set_font("bold 11px sans-serif");
		let _ = ctx.fill_text_with_max_width(&skill.title, x, y - 6.0, radius * 1.6);
		ctx.set_font("10px sans-serif");
		let _ = ctx.fill_text_with_max_width(&skill.category, x, y + 9.0, radius * 1.6);

		let (bx, by) = (x + radius * 0.72, y - radius * 0.72);
		draw_disc(ctx, bx, by, 12.0, "white");
		ctx.set_font("12px sans-serif");
		let _ = ctx.fill_text(visual.badge, bx, by + 1.0);

		if visual.checkmark {
			let (cx, cy) = (x + radius * 0.78, y + radius * 0.78);
			draw_disc(ctx, cx, cy, 12.0, "#22c55e");
			ctx.set_fill_style_str("white");
			ctx.set_font("bold 12px sans-serif");
			let _ = ctx.fill_text("✓", cx, cy + 1.0);
		}
		ctx.set_global_alpha(1.0);
	}
}

fn draw_glow(ctx: &CanvasRenderingContext2d, pos: Position, radius: f64, t: f64) {
	let Ok(gradient) = ctx.create_radial_gradient(pos.x, pos.y, radius * 0.8, pos.x, pos.y, radius * 1.6) else {
		return;
	};
	let _ = gradient.add_color_stop(0.0, &format!("rgba(129, 140, 248, {})", 0.35 * t));
	let _ = gradient.add_color_stop(1.0, "rgba(129, 140, 248, 0)");
	ctx.begin_path();
	let _ = ctx.arc(pos.x, pos.y, radius * 1.6, 0.0, 2.0 * PI);
	ctx.set_fill_style_canvas_gradient(&gradient);
	ctx.fill();
}

fn draw_disc(ctx: &CanvasRenderingContext2d, x: f64, y: f64, r: f64, color: &str) {
	ctx.begin_path();
	let _ = ctx.arc(x, y, r, 0.0, 2.0 * PI);
	ctx.set_fill_style_str(color);
	ctx.fill();
}

fn draw_tooltip(state: &SkillTreeState, ctx: &CanvasRenderingContext2d) {
	let Some(idx) = state.hover.node else {
		return;
	};
	let t = ease_out_cubic(state.hover.highlight_t);
	if t < 0.05 {
		return;
	}
	let skill = &state.skills[idx];
	let pos = state.positions[idx];

	ctx.set_font("12px sans-serif");
	let mut lines = vec![skill.title.clone()];
	lines.extend(wrap_text(ctx, &skill.description, TOOLTIP_WIDTH - 24.0));
	lines.push(format!("⏱️ {}h", skill.estimated_hours));
	lines.push(format!("📁 {} projects", skill.projects.len()));

	let line_height = 16.0;
	let height = lines.len() as f64 * line_height + 20.0;
	let (left, top) = (pos.x - TOOLTIP_WIDTH / 2.0, pos.y - NODE_RADIUS - 12.0 - height);

	ctx.set_global_alpha(t);
	ctx.set_fill_style_str("rgba(0, 0, 0, 0.9)");
	ctx.fill_rect(left, top, TOOLTIP_WIDTH, height);
	ctx.set_text_align("left");
	ctx.set_text_baseline("top");
	for (i, line) in lines.iter().enumerate() {
		let (font, color) = match i {
			0 => ("bold 12px sans-serif", "white"),
			_ if i + 2 >= lines.len() => ("12px sans-serif", "#9ca3af"),
			_ => ("12px sans-serif", "#d1d5db"),
		};
		ctx.set_font(font);
		ctx.set_fill_style_str(color);
		let _ = ctx.fill_text(line, left + 12.0, top + 10.0 + i as f64 * line_height);
	}
	ctx.set_global_alpha(1.0);
}

fn wrap_text(ctx: &CanvasRenderingContext2d, text: &str, max_width: f64) -> Vec<String> {
	let mut lines = Vec::new();
	let mut current = String::new();
	for word in text.split_whitespace() {
		let candidate = if current.is_empty() {
			word.to_string()
		} else {
			format!("{current} {word}")
		};
		let width = ctx.measure_text(&candidate).map(|m| m.width()).unwrap_or(0.0);
		if width > max_width && !current.is_empty() {
			lines.push(std::mem::replace(&mut current, word.to_string()));
		} else {
			current = candidate;
		}
	}
	if !current.is_empty() {
		lines.push(current);
	}
	lines
}
