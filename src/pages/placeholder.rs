use leptos::prelude::*;

/// Static stand-in for sections that are not built yet.
#[component]
pub fn ComingSoon(title: &'static str) -> impl IntoView {
	view! { <div class="page page--centered muted">{format!("{title} - Coming Soon")}</div> }
}
