use common::results::IDLE_HINT;
use common::{RecommendationItem, ResultsState};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ResultsPanelProps {
    pub state: ResultsState,
}

/// Results section. The list is replaced wholesale on every state change.
#[function_component(ResultsPanel)]
pub fn results_panel(props: &ResultsPanelProps) -> Html {
    let list = match props.state.message() {
        Some(text) => html! { <p class="muted text-sm text-gray-500">{text}</p> },
        None => props
            .state
            .items()
            .iter()
            .map(|item| html! { <RecommendationCard item={item.clone()} /> })
            .collect::<Html>(),
    };

    html! {
        <section id="results" class="space-y-4">
            <h2 class="text-xl font-semibold">{"Recommendations"}</h2>
            if props.state.is_idle() {
                <p class="muted text-sm text-gray-500">{IDLE_HINT}</p>
            }
            <div id="results-list" class="grid grid-cols-1 gap-4">
                {list}
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct RecommendationCardProps {
    pub item: RecommendationItem,
}

#[function_component(RecommendationCard)]
pub fn recommendation_card(props: &RecommendationCardProps) -> Html {
    let item = &props.item;
    let badge_class = if item.eligible { "badge-success" } else { "badge-error ineligible" };

    html! {
        <div class="result-card card bg-base-100 shadow">
            <div class="card-body">
                <div class="flex justify-between items-start">
                    <div>
                        <h3 class="card-title text-base">{&item.name}</h3>
                        <p class="text-sm text-gray-500">{&item.provider}</p>
                    </div>
                    <span class={classes!("badge", badge_class)}>{item.eligibility_label()}</span>
                </div>
                <p>{&item.description}</p>
                <div class="grid grid-cols-2 gap-2 text-sm">
                    <div><strong>{"Match Score:"}</strong>{" "}{item.match_score_label()}</div>
                    <div><strong>{"Award:"}</strong>{" "}{item.award_label()}</div>
                    <div><strong>{"Deadline:"}</strong>{" "}{&item.deadline}</div>
                    <div><strong>{"Country:"}</strong>{" "}{&item.country}</div>
                    <div><strong>{"Field:"}</strong>{" "}{&item.field}</div>
                    <div><strong>{"Min GPA:"}</strong>{" "}{item.min_gpa_label()}</div>
                </div>
                if let Some(notes) = item.eligibility_notes() {
                    <div class="eligibility-notes text-sm text-gray-500">
                        <strong>{"Eligibility Notes:"}</strong>{" "}{notes}
                    </div>
                }
            </div>
        </div>
    }
}
