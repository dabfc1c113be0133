use leptos::prelude::*;

/// 404 page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="page page--centered">
			<h1>"404"</h1>
			<p class="muted">"Oops! Page not found"</p>
			<a href="/">"Return to Home"</a>
		</div>
	}
}
