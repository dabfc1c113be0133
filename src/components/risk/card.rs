use leptos::prelude::*;

use super::visual::{RiskCardVisual, demand_arrow, trend_color};
use crate::model::SkillRisk;

/// Summary card for one risk profile.
#[component]
pub fn SkillRiskCard(risk: SkillRisk, selected: bool, on_select: Callback<SkillRisk>) -> impl IntoView {
	let visual = RiskCardVisual::derive(&risk, selected);
	let (badge_bg, badge_fg, badge_border) = visual.level_tone.badge();
	let demand = risk.trends.current_demand;
	let score = risk.risk_score;
	let clicked = risk.clone();

	view! {
		<div
			class="card risk-card"
			class:selected=visual.selected
			class:mismatch=visual.mismatch
			on:click=move |_| on_select.run(clicked.clone())
		>
			<div class="risk-card__header">
				<div class="risk-card__title">
					<span class="icon">{risk.category.icon()}</span>
					<h3>{risk.name.clone()}</h3>
				</div>
				<span
					class="badge"
					style=format!(
						"background: {badge_bg}; color: {badge_fg}; border: 1px solid {badge_border};",
					)
				>
					{format!("{} risk", risk.risk_level)}
				</span>
			</div>

			<p class="muted clamp">{risk.description.clone()}</p>

			<div class="risk-card__row">
				<span class="muted">"Automation Risk"</span>
				<strong style=format!("color: {};", visual.score_tone.text())>{format!("{score}%")}</strong>
			</div>
			<div class="bar">
				<div
					class="bar__fill"
					style=format!("width: {score}%; background: {};", visual.score_tone.fill())
				></div>
			</div>

			<div class="risk-card__row">
				<span class="muted">"Demand"</span>
				<span style=format!("color: {};", trend_color(visual.demand_tone))>
					{format!("{} {demand}", demand_arrow(demand))}
				</span>
			</div>
		</div>
	}
}
