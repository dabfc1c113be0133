use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};

use leptos::prelude::*;
use log::{debug, error};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::layout::RingLayout;
use super::render;
use super::state::SkillTreeState;
use crate::model::Skill;

const FRAME_DT: f64 = 0.016;

/// Run flag and queued frame of the animation loop, shared with the unmount
/// hook. Frame handles from the browser are never zero.
#[derive(Clone, Debug, Default)]
struct FrameLoop {
	stopped: Arc<AtomicBool>,
	pending: Arc<AtomicI32>,
}

impl FrameLoop {
	fn running(&self) -> bool {
		!self.stopped.load(Ordering::Relaxed)
	}

	fn scheduled(&self, handle: i32) {
		self.pending.store(handle, Ordering::Relaxed);
	}

	/// Stops the loop and returns the frame still queued, the first time only.
	fn stop(&self) -> Option<i32> {
		if self.stopped.swap(true, Ordering::Relaxed) {
			return None;
		}
		Some(self.pending.swap(0, Ordering::Relaxed)).filter(|h| *h != 0)
	}
}

/// Canvas view of the skill tree. Clicking a node reports it through
/// `on_select`; dragging pans, the wheel zooms.
#[component]
pub fn SkillTreeCanvas(
	skills: Vec<Skill>,
	#[prop(into)] selected: Signal<Option<String>>,
	on_select: Callback<Option<Skill>>,
	#[prop(optional)] layout: RingLayout,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<SkillTreeState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let frames = FrameLoop::default();
	let (state_init, animate_init, frames_init) = (state.clone(), animate.clone(), frames.clone());

	// The frame closure is dropped with the effect; nothing may still be queued.
	on_cleanup(move || {
		if let (Some(handle), Some(win)) = (frames.stop(), web_sys::window()) {
			let _ = win.cancel_animation_frame(handle);
		}
	});

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			error!("skill tree canvas: no window");
			return;
		};

		let (w, h) = (
			width.unwrap_or_else(|| {
				canvas
					.parent_element()
					.map(|p| f64::from(p.client_width()))
					.filter(|w| *w > 0.0)
					.unwrap_or(800.0)
			}),
			height.unwrap_or_else(|| {
				canvas
					.parent_element()
					.map(|p| f64::from(p.client_height()))
					.filter(|h| *h > 0.0)
					.unwrap_or(600.0)
			}),
		);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = match canvas.get_context("2d") {
			Ok(Some(ctx)) => match ctx.dyn_into() {
				Ok(ctx) => ctx,
				Err(_) => {
					error!("skill tree canvas: context is not 2d");
					return;
				}
			},
			_ => {
				error!("skill tree canvas: 2d context unavailable");
				return;
			}
		};

		let mut initial = SkillTreeState::new(skills.clone(), &layout, w, h);
		initial.select_id(selected.get_untracked().as_deref());
		for dangling in &initial.edges.dangling {
			debug!("not drawing {} -> {}", dangling.missing, dangling.dependent);
		}
		*state_init.borrow_mut() = Some(initial);

		let (state_anim, frames_anim) = (state_init.clone(), frames_init.clone());
		let animate_inner: Weak<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::downgrade(&animate_init);
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if !frames_anim.running() {
				return;
			}
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(FRAME_DT);
				render::render(s, &ctx);
			}
			let Some(cell) = animate_inner.upgrade() else {
				return;
			};
			if let (Some(cb), Some(win)) = (cell.borrow().as_ref(), web_sys::window()) {
				if let Ok(handle) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
					frames_anim.scheduled(handle);
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			if let Ok(handle) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				frames_init.scheduled(handle);
			}
		}
	});

	let state_sel = state.clone();
	Effect::new(move |_| {
		let id = selected.get();
		if let Some(ref mut s) = *state_sel.borrow_mut() {
			s.select_id(id.as_deref());
		}
	});

	let local_point = move |ev: &MouseEvent| -> Option<(f64, f64)> {
		let canvas: HtmlCanvasElement = canvas_ref.get_untracked()?.into();
		let rect = canvas.get_bounding_client_rect();
		Some((
			f64::from(ev.client_x()) - rect.left(),
			f64::from(ev.client_y()) - rect.top(),
		))
	};

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = local_point(&ev) else {
			return;
		};
		if let Some(ref mut s) = *state_md.borrow_mut() {
			s.begin_press(x, y);
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = local_point(&ev) else {
			return;
		};
		if let Some(ref mut s) = *state_mm.borrow_mut() {
			if !s.pan.moved {
				let hovered = s.node_at_position(x, y);
				s.set_hover(hovered);
			}
			s.drag_to(x, y);
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |_: MouseEvent| {
		let clicked = state_mu
			.borrow_mut()
			.as_mut()
			.and_then(|s| s.end_press().map(|idx| s.skills[idx].clone()));
		if let Some(skill) = clicked {
			on_select.run(Some(skill));
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.pan = Default::default();
			s.set_hover(None);
		}
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let mouse: &MouseEvent = &ev;
		let Some((x, y)) = local_point(mouse) else {
			return;
		};
		if let Some(ref mut s) = *state_wh.borrow_mut() {
			s.zoom_at(x, y, ev.delta_y() < 0.0);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="skill-tree-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: pointer;"
		/>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn stopping_hands_back_the_queued_frame_once() {
		let frames = FrameLoop::default();
		let hook = frames.clone();
		frames.scheduled(7);
		frames.scheduled(8);
		assert!(hook.running());
		assert_eq!(hook.stop(), Some(8));
		assert!(!frames.running());
		assert_eq!(hook.stop(), None);
	}

	#[test]
	fn stopping_before_any_frame_cancels_nothing() {
		let frames = FrameLoop::default();
		assert_eq!(frames.stop(), None);
		assert!(!frames.running());
	}
}
