use crate::{
    api::client_for,
    components::{ErrorAlert, Loading},
    hooks::use_remote_resource,
    models::app_state::AppState,
};
use shared::{RemoteResource, models::Dashboard};
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub struct DashboardViewProps {
    pub dashboard: Dashboard,
}

#[function_component(DashboardView)]
pub fn dashboard_view(props: &DashboardViewProps) -> Html {
    let volume = &props.dashboard.volume;
    let ranked = props.dashboard.ranked_muscle_groups();

    html! {
        <div class="space-y-6">
            <div class="stats stats-vertical lg:stats-horizontal shadow w-full">
                <div class="stat">
                    <div class="stat-title">{"Total workouts"}</div>
                    <div class="stat-value">{volume.total_workouts.to_string()}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">{"Total volume"}</div>
                    <div class="stat-value">{format!("{:.0} kg", volume.total_volume)}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">{"Average per workout"}</div>
                    <div class="stat-value">{format!("{:.1} kg", volume.average_volume_per_workout)}</div>
                </div>
            </div>
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{"Muscle group insights"}</h2>
                    if ranked.is_empty() {
                        <p class="opacity-70">{"Log a workout to see where your volume goes."}</p>
                    } else {
                        <ul class="space-y-2">
                            { for ranked.iter().map(|(group, insight)| html! {
                                <li key={group.to_string()}>
                                    <div class="flex justify-between">
                                        <span class="capitalize">{group.to_string()}</span>
                                        <span>
                                            {format!(
                                                "{:.1} kg ({:.1}% of total volume)",
                                                insight.total_volume,
                                                insight.percentage_of_total
                                            )}
                                        </span>
                                    </div>
                                    <progress
                                        class="progress progress-primary w-full"
                                        value={format!("{:.1}", insight.percentage_of_total)}
                                        max="100"
                                    />
                                </li>
                            }) }
                        </ul>
                    }
                </div>
            </div>
        </div>
    }
}

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let token = use_selector(AppState::token);
    let dashboard = use_remote_resource((*token).clone(), |token| async move {
        client_for(token.as_deref()).dashboard().await
    });

    let content = match &*dashboard {
        RemoteResource::Loading => html! { <Loading /> },
        RemoteResource::Failed(message) => html! { <ErrorAlert message={message.clone()} /> },
        RemoteResource::Ready(dashboard) => html! { <DashboardView dashboard={dashboard.clone()} /> },
    };

    html! {
        <div class="space-y-4">
            <h1 class="text-3xl font-bold">{"Dashboard"}</h1>
            {content}
        </div>
    }
}
