//! SkillForge: a Leptos client-side app with a learning dashboard, a skill
//! tree canvas and an automation-risk explorer, backed by embedded seed data.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

pub mod components;
pub mod controller;
pub mod model;
pub mod store;

mod pages;

use crate::components::navigation::Navigation;
use crate::pages::automation_risk::AutomationRiskPage;
use crate::pages::dashboard::Dashboard;
use crate::pages::not_found::NotFound;
use crate::pages::placeholder::ComingSoon;
use crate::pages::skill_tree::SkillTreePage;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let level = if cfg!(debug_assertions) { Level::Debug } else { Level::Info };
	let _ = console_log::init_with_level(level);
	console_error_panic_hook::set_once();
	info!("Logging initialized at {level}");
}

/// App shell: navigation bar plus the route table.
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="light" />

		<Title text="SkillForge" />

		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<div class="app">
				<Navigation />
				<main>
					<Routes fallback=|| view! { <NotFound /> }>
						<Route path=path!("/") view=Dashboard />
						<Route path=path!("/skill-tree") view=SkillTreePage />
						<Route path=path!("/automation-risk") view=AutomationRiskPage />
						<Route path=path!("/curriculum") view=|| view! { <ComingSoon title="Curriculum Builder" /> } />
						<Route path=path!("/projects") view=|| view! { <ComingSoon title="Project Library" /> } />
						<Route path=path!("/community") view=|| view! { <ComingSoon title="Community Hub" /> } />
						<Route path=path!("/profile") view=|| view! { <ComingSoon title="User Profile" /> } />
					</Routes>
				</main>
			</div>
		</Router>
	}
}
