use leptos::prelude::*;

use crate::controller::CategoryFilter;

/// Row of category buttons. The active one is highlighted.
#[component]
pub fn RiskCategoryFilter(
	#[prop(into)] active: Signal<CategoryFilter>,
	on_change: Callback<CategoryFilter>,
) -> impl IntoView {
	view! {
		<div class="category-filter">
			{CategoryFilter::options()
				.map(|filter| {
					view! {
						<button
							class="chip"
							class:active=move || active.get() == filter
							on:click=move |_| on_change.run(filter)
						>
							<span>{filter.icon()}</span>
							<span>{filter.label()}</span>
						</button>
					}
				})
				.collect_view()}
		</div>
	}
}
