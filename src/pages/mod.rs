use leptos::error::Errors;
use leptos::prelude::*;

pub mod automation_risk;
pub mod dashboard;
pub mod not_found;
pub mod placeholder;
pub mod skill_tree;

/// `ErrorBoundary` fallback for pages whose seed data failed to load.
fn load_errors(errors: ArcRwSignal<Errors>) -> impl IntoView {
	view! {
		<div class="page">
			<h1>"Uh oh! Something went wrong!"</h1>

			<p>"Errors: "</p>
			<ul>
				{move || {
					errors
						.get()
						.into_iter()
						.map(|(_, e)| view! { <li>{e.to_string()}</li> })
						.collect_view()
				}}
			</ul>
		</div>
	}
}
