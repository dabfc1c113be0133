use leptos::prelude::*;
use strum::IntoEnumIterator;

use super::load_errors;
use crate::components::skill_tree::visual::status_gradient;
use crate::components::skill_tree::{SkillDetail, SkillDetailContent, SkillTreeCanvas};
use crate::controller::SelectionState;
use crate::model::{Skill, SkillStatus};
use crate::store::SkillStore;

/// Skill tree route: loads the store and mounts the canvas.
#[component]
pub fn SkillTreePage() -> impl IntoView {
	let store = SkillStore::seed();

	view! {
		<ErrorBoundary fallback=load_errors>
			{store.map(|store| view! { <SkillTreeView store /> })}
		</ErrorBoundary>
	}
}

#[component]
fn SkillTreeView(store: SkillStore) -> impl IntoView {
	let skills = store.skills().to_vec();
	let store = StoredValue::new(store);
	let selection = RwSignal::new(SelectionState::default());

	let selected_id =
		Signal::derive(move || selection.with(|s| s.selected_skill().map(|skill| skill.id.clone())));
	let on_select = Callback::new(move |skill: Option<Skill>| selection.update(|s| s.select_skill(skill)));
	let on_close = Callback::new(move |_: ()| selection.update(|s| s.select_skill(None)));

	let detail = move || {
		selection.with(|s| {
			s.selected_skill()
				.map(|skill| store.with_value(|st| SkillDetailContent::derive(skill, st)))
		})
	};

	view! {
		<div class="skill-tree">
			<div class="skill-tree__canvas">
				<SkillTreeCanvas skills selected=selected_id on_select />
				<StatusLegend />
			</div>
			{move || {
				detail()
					.map(|content| {
						view! {
							<aside class="skill-tree__detail">
								<SkillDetail content on_close />
							</aside>
						}
					})
			}}
		</div>
	}
}

#[component]
fn StatusLegend() -> impl IntoView {
	view! {
		<div class="legend">
			<h3>"Skill Status"</h3>
			{SkillStatus::iter()
				.rev()
				.map(|status| {
					let (from, to) = status_gradient(status);
					view! {
						<div class="legend__row">
							<span
								class="legend__swatch"
								style=format!("background: linear-gradient(135deg, {from}, {to});")
							></span>
							<span class="capitalize">{status.label()}</span>
						</div>
					}
				})
				.collect_view()}
		</div>
	}
}
