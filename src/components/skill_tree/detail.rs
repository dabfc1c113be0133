use leptos::prelude::*;

use super::visual::{SkillDetailContent, level_badge_colors, status_badge_colors};

const RESOURCES: &[(&str, &str)] = &[
	("📺", "Video Tutorial Series"),
	("📖", "Interactive Documentation"),
	("💻", "Code Examples"),
	("🧪", "Practice Exercises"),
];

/// Side panel describing the selected skill.
#[component]
pub fn SkillDetail(content: SkillDetailContent, on_close: Callback<()>) -> impl IntoView {
	let SkillDetailContent {
		skill,
		progress,
		prerequisites,
		action,
	} = content;
	let (level_bg, level_fg) = level_badge_colors(skill.level);
	let (status_bg, status_fg) = status_badge_colors(skill.status);
	let title = skill.title.clone();

	view! {
		<div class="skill-detail">
			<header class="skill-detail__header">
				<div class="skill-detail__heading">
					<h2>{skill.title.clone()}</h2>
					<div class="badges">
						<span class="badge" style=format!("background: {level_bg}; color: {level_fg};")>
							{skill.level.to_string()}
						</span>
						<span class="badge" style=format!("background: {status_bg}; color: {status_fg};")>
							{skill.status.label()}
						</span>
					</div>
					<p class="muted">{skill.description.clone()}</p>
				</div>
				<button class="close" on:click=move |_| on_close.run(())>"✕"</button>
			</header>

			{progress.map(|p| {
				view! {
					<div class="progress">
						<div class="progress__label">
							<span>"Progress"</span>
							<span>{format!("{p}%")}</span>
						</div>
						<div class="progress__track">
							<div class="progress__fill" style=format!("width: {p}%;")></div>
						</div>
					</div>
				}
			})}

			<section class="skill-detail__body">
				<div class="stats">
					<div class="stat">
						<div class="stat__value">{format!("{}h", skill.estimated_hours)}</div>
						<div class="muted">"Estimated Time"</div>
					</div>
					<div class="stat">
						<div class="stat__value">{skill.projects.len()}</div>
						<div class="muted">"Projects"</div>
					</div>
				</div>

				{(!prerequisites.is_empty()).then(|| {
					view! {
						<div>
							<h3>"Prerequisites"</h3>
							<ul class="bullets">
								{prerequisites.into_iter().map(|p| view! { <li>{p}</li> }).collect_view()}
							</ul>
						</div>
					}
				})}

				<div>
					<h3>"Projects"</h3>
					{skill
						.projects
						.iter()
						.map(|project| {
							view! {
								<div class="project">
									<h4>{project.clone()}</h4>
									<p class="muted">
										{format!("Apply your {title} skills in a real-world project")}
									</p>
								</div>
							}
						})
						.collect_view()}
				</div>

				<div>
					<h3>"Resources"</h3>
					{RESOURCES
						.iter()
						.map(|(icon, label)| {
							view! {
								<div class="resource">
									<span>{*icon}</span>
									<span>{*label}</span>
								</div>
							}
						})
						.collect_view()}
				</div>
			</section>

			<footer class="skill-detail__actions">
				<button class="action" disabled=!action.enabled>
					{action.label}
				</button>
			</footer>
		</div>
	}
}
