use leptos::prelude::*;

use super::visual::{demand_tone, level_tone, outlook_tone, trend_color};
use crate::model::SkillRisk;

fn bullet_list(items: &[String], color: &'static str) -> impl IntoView + use<> {
	let items = items.to_vec();
	view! {
		<ul class="bullets">
			{items
				.into_iter()
				.map(|item| view! { <li style=format!("color: {color};")>{item}</li> })
				.collect_view()}
		</ul>
	}
}

/// Expanded analysis for the selected risk profile. Lists are shown verbatim.
#[component]
pub fn FutureProofSuggestions(risk: SkillRisk) -> impl IntoView {
	let demand = risk.trends.current_demand;
	let outlook = risk.trends.future_outlook;

	view! {
		<div class="card suggestions">
			<div>
				<h3>{risk.name.clone()}</h3>
				<div class="suggestions__meta">
					<span class="badge">{risk.category.to_string()}</span>
					<strong style=format!("color: {};", level_tone(risk.risk_level).text())>
						{format!("{}% Risk", risk.risk_score)}
					</strong>
				</div>
				<p class="muted">{risk.description.clone()}</p>
			</div>

			<div>
				<h4>"🤖 Automation Factors"</h4>
				{bullet_list(&risk.automation_factors, "#dc2626")}
			</div>

			<div>
				<h4>"💪 Human Advantages"</h4>
				{bullet_list(&risk.human_advantages, "#16a34a")}
			</div>

			<div>
				<h4>"📈 Market Trends"</h4>
				<div class="trend">
					<span>"Current Demand:"</span>
					<span style=format!("color: {};", trend_color(demand_tone(demand)))>
						{demand.to_string()}
					</span>
				</div>
				<div class="trend">
					<span>"Future Outlook:"</span>
					<span style=format!("color: {};", trend_color(outlook_tone(outlook)))>
						{outlook.to_string()}
					</span>
				</div>
			</div>

			<div>
				<h4>"💼 Related Jobs"</h4>
				<div class="tags">
					{risk
						.related_jobs
						.iter()
						.map(|job| view! { <span class="badge outline">{job.clone()}</span> })
						.collect_view()}
				</div>
			</div>

			<div>
				<h4>"🚀 Future-Proof Suggestions"</h4>
				<ul class="plain">
					{risk
						.suggestions
						.iter()
						.map(|s| view! { <li><button class="ghost">{s.clone()}</button></li> })
						.collect_view()}
				</ul>
			</div>

			<button class="action">"Add to Learning Path"</button>
		</div>
	}
}
