use crate::{
    api::client_for,
    components::{ErrorAlert, Loading, PaginationControls},
    hooks::{page_callback, use_paginated},
    models::app_state::AppState,
    routes::MainRoute,
};
use shared::{RemoteResource, models::WorkoutLog};
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

fn workout_row(workout: &WorkoutLog) -> Html {
    let date = workout
        .date
        .map_or_else(|| "-".to_string(), |date| date.format("%Y-%m-%d").to_string());
    let duration = workout
        .duration
        .map_or_else(|| "-".to_string(), |minutes| format!("{minutes} min"));
    let feeling = workout
        .feeling_rating
        .map_or_else(|| "-".to_string(), |rating| format!("{rating}/5"));

    html! {
        <tr key={workout.id.clone()}>
            <td class="font-semibold">{workout.routine_name().to_string()}</td>
            <td>{date}</td>
            <td>{duration}</td>
            <td>{format!("{:.1} kg", workout.total_volume())}</td>
            <td>{feeling}</td>
        </tr>
    }
}

#[function_component(WorkoutsPage)]
pub fn workouts_page() -> Html {
    let token = use_selector(AppState::token);
    let (workouts, pager) = use_paginated((*token).clone(), |token, page| async move {
        client_for(token.as_deref()).workouts(page).await
    });

    let content = match &*workouts {
        RemoteResource::Loading => html! { <Loading /> },
        RemoteResource::Failed(message) => html! { <ErrorAlert message={message.clone()} /> },
        RemoteResource::Ready(page) if page.items.is_empty() => html! {
            <p class="opacity-70">{"No workouts logged yet."}</p>
        },
        RemoteResource::Ready(page) => html! {
            <>
                <div class="overflow-x-auto">
                    <table class="table table-zebra">
                        <thead>
                            <tr>
                                <th>{"Routine"}</th>
                                <th>{"Date"}</th>
                                <th>{"Duration"}</th>
                                <th>{"Volume"}</th>
                                <th>{"Feeling"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for page.items.iter().map(workout_row) }
                        </tbody>
                    </table>
                </div>
                <PaginationControls pager={*pager} on_change={page_callback(&pager)} />
            </>
        },
    };

    html! {
        <div class="space-y-4">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">{"Workouts"}</h1>
                <Link<MainRoute> to={MainRoute::StartWorkout} classes="btn btn-primary btn-sm">
                    {"Start Workout"}
                </Link<MainRoute>>
            </div>
            {content}
        </div>
    }
}
