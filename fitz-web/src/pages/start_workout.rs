use crate::{
    api::client_for,
    components::{ErrorAlert, Loading, form::SelectField},
    hooks::use_remote_resource,
    models::app_state::AppState,
    routes::MainRoute,
};
use shared::{RemoteResource, forms::StartWorkoutSelection};
use yew::prelude::*;
use yew_router::prelude::use_navigator;
use yewdux::prelude::use_selector;

/// Pick a routine and hand it to the log screen through navigation state.
#[function_component(StartWorkoutPage)]
pub fn start_workout_page() -> Html {
    let token = use_selector(AppState::token);
    let navigator = use_navigator();
    let routines = use_remote_resource((*token).clone(), |token| async move {
        client_for(token.as_deref()).routine_catalogue().await
    });
    let selection = use_state(StartWorkoutSelection::default);
    let error = use_state(|| None::<String>);

    let on_select = {
        let selection = selection.clone();
        let error = error.clone();
        Callback::from(move |routine_id: String| {
            let mut next = (*selection).clone();
            next.select(routine_id);
            selection.set(next);
            error.set(None);
        })
    };

    let on_start = {
        let selection = selection.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| match selection.handoff() {
            Ok(handoff) => {
                if let Some(navigator) = &navigator {
                    navigator.push_with_state(&MainRoute::LogWorkout, handoff);
                }
            }
            Err(err) => error.set(Some(err.to_string())),
        })
    };

    let content = match &*routines {
        RemoteResource::Loading => html! { <Loading /> },
        RemoteResource::Failed(message) => html! { <ErrorAlert message={message.clone()} /> },
        RemoteResource::Ready(routines) => {
            let options = routines
                .iter()
                .map(|routine| (AttrValue::from(routine.id.clone()), AttrValue::from(routine.name.clone())))
                .collect::<Vec<_>>();
            html! {
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        if let Some(message) = &*error {
                            <ErrorAlert message={message.clone()} />
                        }
                        <SelectField
                            id="routine"
                            label="Routine"
                            value={selection.selected().unwrap_or_default().to_string()}
                            {options}
                            on_change={on_select}
                        />
                        <div class="card-actions justify-end mt-4">
                            <button class="btn btn-primary" onclick={on_start}>{"Start Workout"}</button>
                        </div>
                    </div>
                </div>
            }
        }
    };

    html! {
        <div class="space-y-4">
            <h1 class="text-3xl font-bold">{"Start Workout"}</h1>
            {content}
        </div>
    }
}
