use crate::{
    api::client_for,
    components::{ErrorAlert, Loading},
    hooks::use_remote_resource,
    models::app_state::AppState,
    routes::MainRoute,
};
use shared::{RemoteResource, forms::WorkoutHandoff, models::Routine};
use yew::prelude::*;
use yew_router::prelude::{Link, use_navigator};
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub struct RoutineDetailProps {
    pub id: AttrValue,
}

fn badges(label: &'static str, items: &[String]) -> Html {
    if items.is_empty() {
        return html! {};
    }
    html! {
        <div class="flex flex-wrap items-center gap-2">
            <span class="font-semibold">{label}</span>
            { for items.iter().map(|item| html! { <span class="badge badge-outline">{item.clone()}</span> }) }
        </div>
    }
}

fn routine_body(routine: &Routine, on_start: Callback<MouseEvent>) -> Html {
    html! {
        <div class="space-y-4">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">{routine.name.clone()}</h1>
                <button class="btn btn-primary" onclick={on_start}>{"Start Workout"}</button>
            </div>
            <p>{routine.description.clone()}</p>
            <div class="flex flex-wrap gap-2">
                if !routine.difficulty.is_empty() {
                    <span class="badge badge-primary">{routine.difficulty.clone()}</span>
                }
                if !routine.workout_type.is_empty() {
                    <span class="badge badge-secondary">{routine.workout_type.clone()}</span>
                }
                if let Some(minutes) = routine.estimated_duration {
                    <span class="badge badge-outline">{format!("{minutes} min")}</span>
                }
            </div>
            {badges("Muscle groups:", &routine.target_muscle_groups)}
            {badges("Equipment:", &routine.equipment)}
            {badges("Tags:", &routine.tags)}
            <table class="table">
                <thead>
                    <tr>
                        <th>{"Exercise"}</th>
                        <th>{"Sets"}</th>
                        <th>{"Reps"}</th>
                        <th>{"Rest (s)"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for routine.exercises.iter().map(|entry| html! {
                        <tr>
                            <td>{entry.exercise.display_name().to_string()}</td>
                            <td>{entry.sets.to_string()}</td>
                            <td>{entry.reps.to_string()}</td>
                            <td>{entry.rest_between_sets.to_string()}</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}

#[function_component(RoutineDetailPage)]
pub fn routine_detail_page(props: &RoutineDetailProps) -> Html {
    let token = use_selector(AppState::token);
    let navigator = use_navigator();
    let routine = use_remote_resource(
        ((*token).clone(), props.id.clone()),
        |(token, id)| async move { client_for(token.as_deref()).routine(&id).await },
    );

    let on_start = {
        let id = props.id.to_string();
        Callback::from(move |_: MouseEvent| {
            let handoff = WorkoutHandoff { routine_id: id.clone() };
            if let Some(navigator) = &navigator {
                navigator.push_with_state(&MainRoute::LogWorkout, handoff);
            }
        })
    };

    let content = match &*routine {
        RemoteResource::Loading => html! { <Loading /> },
        RemoteResource::Failed(message) => html! { <ErrorAlert message={message.clone()} /> },
        RemoteResource::Ready(routine) => routine_body(routine, on_start),
    };

    html! {
        <div class="space-y-4">
            {content}
            <Link<MainRoute> to={MainRoute::Routines} classes="link">{"Back to routines"}</Link<MainRoute>>
        </div>
    }
}
