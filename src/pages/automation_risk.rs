use leptos::prelude::*;
use log::info;
use web_sys::KeyboardEvent;

use super::load_errors;
use crate::components::risk::{FutureProofSuggestions, RiskCategoryFilter, SkillRiskCard};
use crate::controller::{CategoryFilter, SeededScore, SelectionState};
use crate::model::SkillRisk;
use crate::store::RiskStore;

/// Automation-risk route: search, category filter, cards and analysis panel.
#[component]
pub fn AutomationRiskPage() -> impl IntoView {
	let store = RiskStore::seed();

	view! {
		<ErrorBoundary fallback=load_errors>
			{store.map(|store| view! { <RiskExplorer store /> })}
		</ErrorBoundary>
	}
}

#[component]
fn RiskExplorer(store: RiskStore) -> impl IntoView {
	let store = StoredValue::new(store);
	let selection = RwSignal::new(SelectionState::default());
	// Seeded once per mount; every analysis advances the same sequence.
	let scorer = StoredValue::new(SeededScore::new(js_sys::Date::now() as u64));

	let visible = Memo::new(move |_| {
		store.with_value(|st| selection.with(|s| s.visible_risks(st).into_iter().cloned().collect::<Vec<_>>()))
	});

	let run_analysis = move || {
		let mut source = scorer.get_value();
		let outcome = store.with_value(|st| selection.try_update(|s| s.analyze(st, &mut source)));
		scorer.set_value(source);
		if let Some(outcome) = outcome {
			info!("risk analysis: {outcome:?}");
		}
	};

	let active = Signal::derive(move || selection.with(|s| s.category()));
	let on_category = Callback::new(move |c: CategoryFilter| selection.update(|s| s.set_category(c)));
	let on_card = Callback::new(move |risk: SkillRisk| selection.update(|s| s.select_risk(Some(risk))));

	view! {
		<div class="page risk-explorer">
			<header class="page__header">
				<h1>"AI-Proof Skills Explorer"</h1>
				<p class="muted">
					"Discover which skills will survive the AI revolution and how to future-proof your career"
				</p>
			</header>

			<section class="card search">
				<div class="search__row">
					<input
						type="text"
						placeholder="Search for any skill or job (e.g., 'graphic design', 'project management')"
						prop:value=move || selection.with(|s| s.search().to_string())
						on:input=move |ev| selection.update(|s| s.set_search(event_target_value(&ev)))
						on:keydown=move |ev: KeyboardEvent| {
							if ev.key() == "Enter" {
								run_analysis();
							}
						}
					/>
					<button class="action" on:click=move |_| run_analysis()>
						"Analyze Risk"
					</button>
				</div>
				<RiskCategoryFilter active on_change=on_category />
			</section>

			<section class="grid grid--3">
				<div class="span-2 grid grid--2">
					{move || {
						let selected_id = selection.with(|s| s.selected_risk().map(|r| r.id.clone()));
						visible
							.get()
							.into_iter()
							.map(|risk| {
								let selected = selected_id.as_deref() == Some(risk.id.as_str());
								view! { <SkillRiskCard risk selected on_select=on_card /> }
							})
							.collect_view()
					}}
				</div>

				<div>
					{move || match selection.with(|s| s.selected_risk().cloned()) {
						Some(risk) => view! { <FutureProofSuggestions risk /> }.into_any(),
						None => {
							view! {
								<div class="card">
									<h3>"Select a skill to see detailed analysis"</h3>
									<p class="muted">
										"Click on any skill card to see automation risk factors, human advantages, and suggestions for future-proofing your career."
									</p>
								</div>
							}
								.into_any()
						}
					}}
				</div>
			</section>
		</div>
	}
}
