use crate::{
    api::client_for,
    components::{ErrorAlert, Loading, PaginationControls},
    hooks::{page_callback, use_paginated},
    models::app_state::AppState,
    routes::MainRoute,
};
use shared::{RemoteResource, models::Routine};
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

fn routine_card(routine: &Routine) -> Html {
    html! {
        <div key={routine.id.clone()} class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{routine.name.clone()}</h2>
                if !routine.description.is_empty() {
                    <p>{routine.description.clone()}</p>
                }
                <div class="flex flex-wrap gap-2">
                    if !routine.difficulty.is_empty() {
                        <span class="badge badge-primary">{routine.difficulty.clone()}</span>
                    }
                    <span class="badge badge-outline">
                        {format!("{} exercises", routine.exercises.len())}
                    </span>
                    if let Some(minutes) = routine.estimated_duration {
                        <span class="badge badge-outline">{format!("{minutes} min")}</span>
                    }
                </div>
                <div class="card-actions justify-end">
                    <Link<MainRoute>
                        to={MainRoute::RoutineDetail { id: routine.id.clone() }}
                        classes="btn btn-sm btn-outline"
                    >
                        {"View"}
                    </Link<MainRoute>>
                </div>
            </div>
        </div>
    }
}

#[function_component(RoutinesPage)]
pub fn routines_page() -> Html {
    let token = use_selector(AppState::token);
    let (routines, pager) = use_paginated((*token).clone(), |token, page| async move {
        client_for(token.as_deref()).routines(page).await
    });

    let content = match &*routines {
        RemoteResource::Loading => html! { <Loading /> },
        RemoteResource::Failed(message) => html! { <ErrorAlert message={message.clone()} /> },
        RemoteResource::Ready(page) if page.items.is_empty() => html! {
            <p class="opacity-70">{"No routines yet. Create your first one!"}</p>
        },
        RemoteResource::Ready(page) => html! {
            <>
                <div class="grid gap-4 md:grid-cols-2">
                    { for page.items.iter().map(routine_card) }
                </div>
                <PaginationControls pager={*pager} on_change={page_callback(&pager)} />
            </>
        },
    };

    html! {
        <div class="space-y-4">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">{"Routines"}</h1>
                <Link<MainRoute> to={MainRoute::AddRoutine} classes="btn btn-primary btn-sm">
                    {"Add Routine"}
                </Link<MainRoute>>
            </div>
            {content}
        </div>
    }
}
