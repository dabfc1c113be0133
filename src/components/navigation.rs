use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// One entry in the top navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
	pub path: &'static str,
	pub label: &'static str,
	pub icon: &'static str,
}

/// Navigation entries, in bar order. Every path has a route in `App`.
pub const NAV_ITEMS: &[NavItem] = &[
	NavItem {
		path: "/",
		label: "Dashboard",
		icon: "🏠",
	},
	NavItem {
		path: "/skill-tree",
		label: "Skill Tree",
		icon: "🌳",
	},
	NavItem {
		path: "/automation-risk",
		label: "AI-Proof Skills",
		icon: "🤖",
	},
	NavItem {
		path: "/curriculum",
		label: "Curriculum",
		icon: "📚",
	},
	NavItem {
		path: "/projects",
		label: "Projects",
		icon: "🛠️",
	},
	NavItem {
		path: "/community",
		label: "Community",
		icon: "👥",
	},
	NavItem {
		path: "/profile",
		label: "Profile",
		icon: "👤",
	},
];

fn nav_links(menu_open: RwSignal<bool>, class: &'static str) -> impl IntoView + use<> {
	let pathname = use_location().pathname;
	NAV_ITEMS
		.iter()
		.map(|item| {
			let path = item.path;
			view! {
				<a
					href=path
					class=class
					class:active=move || pathname.get() == path
					on:click=move |_| menu_open.set(false)
				>
					<span>{item.icon}</span>
					<span>{item.label}</span>
				</a>
			}
		})
		.collect_view()
}

/// Sticky top bar with a collapsible menu on narrow screens.
#[component]
pub fn Navigation() -> impl IntoView {
	let menu_open = RwSignal::new(false);

	view! {
		<nav class="navigation">
			<div class="navigation__bar">
				<a href="/" class="brand">
					<span class="brand__mark">"SF"</span>
					<span class="brand__name">"SkillForge"</span>
				</a>
				<div class="navigation__links">{nav_links(menu_open, "nav-link")}</div>
				<button class="navigation__toggle" on:click=move |_| menu_open.update(|open| *open = !*open)>
					<span class="sr-only">"Open main menu"</span>
					{move || if menu_open.get() { "✕" } else { "☰" }}
				</button>
			</div>
			<Show when=move || menu_open.get()>
				<div class="navigation__mobile">{nav_links(menu_open, "nav-link nav-link--mobile")}</div>
			</Show>
		</nav>
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	#[test]
	fn nav_paths_are_unique_and_absolute() {
		let paths: HashSet<_> = NAV_ITEMS.iter().map(|i| i.path).collect();
		assert_eq!(paths.len(), NAV_ITEMS.len());
		assert!(NAV_ITEMS.iter().all(|i| i.path.starts_with('/')));
		assert_eq!(NAV_ITEMS[0].path, "/");
	}
}
