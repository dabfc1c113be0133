use leptos::prelude::*;

/// Learner totals shown in the stat cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DashboardStats {
	pub skills_completed: u32,
	pub skills_in_progress: u32,
	pub total_skills: u32,
	pub total_hours: u32,
	pub certificates: u32,
	pub current_streak: u32,
}

impl DashboardStats {
	/// Completed share of all skills, rounded to a whole percent.
	pub fn overall_progress(&self) -> u32 {
		if self.total_skills == 0 {
			return 0;
		}
		(f64::from(self.skills_completed) / f64::from(self.total_skills) * 100.0).round() as u32
	}
}

const STATS: DashboardStats = DashboardStats {
	skills_completed: 3,
	skills_in_progress: 2,
	total_skills: 12,
	total_hours: 45,
	certificates: 1,
	current_streak: 7,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ActivityKind {
	Completed,
	Started,
	Project,
	Certificate,
}

impl ActivityKind {
	fn icon(self) -> &'static str {
		match self {
			Self::Completed => "✅",
			Self::Started => "🚀",
			Self::Project => "🛠️",
			Self::Certificate => "🏆",
		}
	}
}

struct Activity {
	kind: ActivityKind,
	skill: &'static str,
	project: Option<&'static str>,
	time: &'static str,
}

const RECENT_ACTIVITY: &[Activity] = &[
	Activity {
		kind: ActivityKind::Completed,
		skill: "HTML Basics",
		project: None,
		time: "2 hours ago",
	},
	Activity {
		kind: ActivityKind::Started,
		skill: "JavaScript Fundamentals",
		project: None,
		time: "1 day ago",
	},
	Activity {
		kind: ActivityKind::Project,
		skill: "CSS Basics",
		project: Some("Portfolio Website"),
		time: "2 days ago",
	},
	Activity {
		kind: ActivityKind::Certificate,
		skill: "Frontend Foundations",
		project: None,
		time: "1 week ago",
	},
];

struct Goal {
	title: &'static str,
	progress: u8,
	target: &'static str,
}

const CURRENT_GOALS: &[Goal] = &[
	Goal {
		title: "Complete JavaScript Fundamentals",
		progress: 65,
		target: "End of month",
	},
	Goal {
		title: "Build 3 Portfolio Projects",
		progress: 33,
		target: "Next 2 weeks",
	},
	Goal {
		title: "Earn Frontend Certificate",
		progress: 80,
		target: "End of quarter",
	},
];

// (icon, title, blurb, route)
const QUICK_ACTIONS: &[(&str, &str, &str, &str)] = &[
	("🌳", "Explore Skill Tree", "Discover new learning paths", "/skill-tree"),
	("🤖", "AI Curriculum", "Generate custom learning plan", "/curriculum"),
	("🛠️", "Start Project", "Build something amazing", "/projects"),
	("👥", "Join Community", "Connect with learners", "/community"),
];

fn progress_bar(value: u32) -> impl IntoView {
	view! {
		<div class="progress__track">
			<div class="progress__fill" style=format!("width: {}%;", value.min(100))></div>
		</div>
	}
}

/// Landing page with learner stats, goals and recent activity.
#[component]
pub fn Dashboard() -> impl IntoView {
	let overall = STATS.overall_progress();

	view! {
		<div class="page dashboard">
			<header class="page__header">
				<h1>"Welcome back to SkillForge"</h1>
				<p class="muted">"Continue your learning journey and unlock new skills"</p>
			</header>

			<section class="grid grid--4">
				<div class="card">
					<div class="muted">"Overall Progress"</div>
					<div class="stat__value">{format!("{overall}%")}</div>
					{progress_bar(overall)}
					<p class="muted">
						{format!("{} of {} skills completed", STATS.skills_completed, STATS.total_skills)}
					</p>
				</div>
				<div class="card">
					<div class="muted">"Learning Time"</div>
					<div class="stat__value">{format!("{}h", STATS.total_hours)}</div>
					<p class="muted">"Total time invested"</p>
				</div>
				<div class="card">
					<div class="muted">"Current Streak"</div>
					<div class="stat__value">{STATS.current_streak}</div>
					<p class="muted">"Days learning"</p>
					<p class="hint">"🔥 Keep it up!"</p>
				</div>
				<div class="card">
					<div class="muted">"Certificates"</div>
					<div class="stat__value">{STATS.certificates}</div>
					<p class="muted">"Earned this month"</p>
					<p class="hint">{format!("{} skills in progress", STATS.skills_in_progress)}</p>
				</div>
			</section>

			<section class="grid grid--3">
				<div class="card span-2">
					<h2>"🎯 Current Goals"</h2>
					<p class="muted">"Track your progress towards learning objectives"</p>
					{CURRENT_GOALS
						.iter()
						.map(|goal| {
							view! {
								<div class="goal">
									<div class="goal__header">
										<h4>{goal.title}</h4>
										<span class="badge outline">{goal.target}</span>
									</div>
									{progress_bar(u32::from(goal.progress))}
									<p class="muted">{format!("{}% complete", goal.progress)}</p>
								</div>
							}
						})
						.collect_view()}
				</div>

				<div class="card">
					<h2>"📈 Recent Activity"</h2>
					<p class="muted">"Your latest learning milestones"</p>
					{RECENT_ACTIVITY
						.iter()
						.map(|activity| {
							view! {
								<div class="activity">
									<span class="icon">{activity.kind.icon()}</span>
									<div>
										<p class="activity__skill">{activity.skill}</p>
										{activity.project.map(|p| view! { <p class="muted">{p}</p> })}
										<p class="muted">{activity.time}</p>
									</div>
								</div>
							}
						})
						.collect_view()}
				</div>
			</section>

			<section class="card">
				<h2>"⚡ Quick Actions"</h2>
				<p class="muted">"Jump into your learning journey"</p>
				<div class="grid grid--4">
					{QUICK_ACTIONS
						.iter()
						.map(|(icon, title, blurb, href)| {
							view! {
								<a class="quick-action" href=*href>
									<div class="icon">{*icon}</div>
									<h4>{*title}</h4>
									<p class="muted">{*blurb}</p>
								</a>
							}
						})
						.collect_view()}
				</div>
			</section>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sample_progress_rounds_to_a_quarter() {
		assert_eq!(STATS.overall_progress(), 25);
	}

	#[test]
	fn empty_stats_report_zero_progress() {
		let stats = DashboardStats {
			skills_completed: 0,
			total_skills: 0,
			..STATS
		};
		assert_eq!(stats.overall_progress(), 0);
	}

	#[test]
	fn quick_actions_point_at_nav_routes() {
		use crate::components::navigation::NAV_ITEMS;
		for (_, _, _, href) in QUICK_ACTIONS {
			assert!(NAV_ITEMS.iter().any(|item| item.path == *href), "{href}");
		}
	}
}
