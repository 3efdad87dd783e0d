use crate::{
    api::client_for,
    components::{ErrorAlert, Loading, PaginationControls},
    hooks::{page_callback, use_paginated},
    models::app_state::AppState,
};
use shared::{RemoteResource, models::Exercise};
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub struct ExerciseTableProps {
    pub exercises: Vec<Exercise>,
}

#[function_component(ExerciseTable)]
pub fn exercise_table(props: &ExerciseTableProps) -> Html {
    if props.exercises.is_empty() {
        return html! { <p class="opacity-70">{"No exercises found."}</p> };
    }

    html! {
        <div class="overflow-x-auto">
            <table class="table table-zebra">
                <thead>
                    <tr>
                        <th>{"Name"}</th>
                        <th>{"Muscle group"}</th>
                        <th>{"Equipment"}</th>
                        <th>{"Description"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for props.exercises.iter().map(|exercise| html! {
                        <tr key={exercise.id.clone()}>
                            <td class="font-semibold">{exercise.name.clone()}</td>
                            <td>{exercise.muscle_group.clone()}</td>
                            <td>{exercise.equipment.clone()}</td>
                            <td>{exercise.description.clone()}</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}

#[function_component(ExercisesPage)]
pub fn exercises_page() -> Html {
    let token = use_selector(AppState::token);
    let (exercises, pager) = use_paginated((*token).clone(), |token, page| async move {
        client_for(token.as_deref()).exercises(page).await
    });

    let content = match &*exercises {
        RemoteResource::Loading => html! { <Loading /> },
        RemoteResource::Failed(message) => html! { <ErrorAlert message={message.clone()} /> },
        RemoteResource::Ready(page) => html! {
            <>
                <ExerciseTable exercises={page.items.clone()} />
                <PaginationControls pager={*pager} on_change={page_callback(&pager)} />
            </>
        },
    };

    html! {
        <div class="space-y-4">
            <h1 class="text-3xl font-bold">{"Exercises"}</h1>
            {content}
        </div>
    }
}
