use crate::{
    api::client_for,
    components::{ErrorAlert, Loading, form::{TextField, event_value}},
    hooks::use_remote_resource,
    models::app_state::AppState,
    routes::MainRoute,
};
use shared::{
    RemoteResource,
    forms::{SetEntry, SetField, WorkoutDraft, WorkoutHandoff, prepare_workout_log},
    validation::{Field, FieldErrors},
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::{Link, use_location, use_navigator};
use yewdux::prelude::use_selector;

const SET_COLUMNS: [(SetField, &str); 4] = [
    (SetField::Weight, "Weight (kg)"),
    (SetField::Reps, "Reps"),
    (SetField::Duration, "Duration (s)"),
    (SetField::RestAfter, "Rest after (s)"),
];

fn set_value(entry: &SetEntry, field: SetField) -> String {
    match field {
        SetField::Weight => entry.weight.clone(),
        SetField::Reps => entry.reps.clone(),
        SetField::Duration => entry.duration.clone(),
        SetField::RestAfter => entry.rest_after.clone(),
    }
}

#[derive(Properties, PartialEq)]
struct WorkoutFormProps {
    draft: WorkoutDraft,
}

#[function_component(WorkoutForm)]
fn workout_form(props: &WorkoutFormProps) -> Html {
    let draft = use_state(|| props.draft.clone());
    let field_errors = use_state(FieldErrors::new);
    let error = use_state(|| None::<String>);
    let saving = use_state(|| false);
    let session = use_selector(|state: &AppState| {
        (state.token(), state.user().and_then(|user| user.id.clone()))
    });
    let navigator = use_navigator();

    let on_set = {
        let draft = draft.clone();
        Callback::from(move |(exercise, set, field, value): (usize, usize, SetField, String)| {
            let mut next = (*draft).clone();
            next.set_field(exercise, set, field, value);
            draft.set(next);
        })
    };

    let update = |apply: fn(&mut WorkoutDraft, String)| {
        let draft = draft.clone();
        Callback::from(move |value: String| {
            let mut next = (*draft).clone();
            apply(&mut next, value);
            draft.set(next);
        })
    };

    let on_notes = {
        let draft = draft.clone();
        Callback::from(move |event: InputEvent| {
            let mut next = (*draft).clone();
            next.notes = event_value(&event).unwrap_or_default();
            draft.set(next);
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let field_errors = field_errors.clone();
        let error = error.clone();
        let saving = saving.clone();
        let session = session.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            error.set(None);
            let (token, user_id) = (*session).clone();
            let request = match draft.to_request(user_id.as_deref()) {
                Ok(request) => request,
                Err(errors) => {
                    field_errors.set(errors);
                    return;
                }
            };
            field_errors.set(FieldErrors::new());
            saving.set(true);
            let error = error.clone();
            let saving = saving.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                match client_for(token.as_deref()).log_workout(&request).await {
                    Ok(workout) => {
                        log::info!("logged workout {}", workout.id);
                        if let Some(navigator) = &navigator {
                            navigator.push(&MainRoute::Dashboard);
                        }
                    }
                    Err(err) => {
                        log::warn!("workout logging failed: {err}");
                        error.set(Some(err.to_string()));
                    }
                }
                saving.set(false);
            });
        })
    };

    let exercises = draft
        .exercises
        .iter()
        .enumerate()
        .map(|(exercise_index, exercise)| {
            html! {
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{exercise.exercise_name.clone()}</h2>
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>{"Set"}</th>
                                    { for SET_COLUMNS.iter().map(|(_, label)| html! { <th>{*label}</th> }) }
                                </tr>
                            </thead>
                            <tbody>
                                { for exercise.sets.iter().enumerate().map(|(set_index, entry)| {
                                    let cells = SET_COLUMNS.iter().map(|&(field, _)| {
                                        let onchange = on_set.reform(move |event: Event| {
                                            (exercise_index, set_index, field, event_value(&event).unwrap_or_default())
                                        });
                                        html! {
                                            <td>
                                                <input
                                                    class="input input-bordered input-sm w-24"
                                                    type="number"
                                                    value={set_value(entry, field)}
                                                    {onchange}
                                                />
                                            </td>
                                        }
                                    });
                                    let set_error = field_errors.message(Field::Set {
                                        exercise: exercise_index,
                                        set: set_index,
                                    });
                                    html! {
                                        <>
                                            <tr>
                                                <td>{(set_index + 1).to_string()}</td>
                                                { for cells }
                                            </tr>
                                            if let Some(message) = set_error {
                                                <tr><td colspan="5" class="text-error text-sm">{message}</td></tr>
                                            }
                                        </>
                                    }
                                }) }
                            </tbody>
                        </table>
                    </div>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <form class="space-y-4" {onsubmit}>
            <h1 class="text-3xl font-bold">{format!("Log Workout: {}", draft.routine_name)}</h1>
            if let Some(message) = &*error {
                <ErrorAlert message={message.clone()} />
            }
            {exercises}
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <TextField
                        id="duration"
                        label="Duration (min)"
                        input_type="number"
                        value={draft.duration.clone()}
                        on_input={update(|draft, value| draft.duration = value)}
                        error={field_errors.message(Field::Duration)}
                    />
                    <TextField
                        id="feeling-rating"
                        label="How did it feel? (1-5)"
                        input_type="number"
                        value={draft.feeling_rating.clone()}
                        on_input={update(|draft, value| draft.feeling_rating = value)}
                        error={field_errors.message(Field::FeelingRating)}
                    />
                    <div class="form-control">
                        <label class="label" for="notes">
                            <span class="label-text">{"Notes"}</span>
                        </label>
                        <textarea
                            id="notes"
                            class="textarea textarea-bordered"
                            value={draft.notes.clone()}
                            oninput={on_notes}
                        />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={*saving}>
                            {if *saving { "Saving..." } else { "Finish Workout" }}
                        </button>
                    </div>
                </div>
            </div>
        </form>
    }
}

#[function_component(LogWorkoutPage)]
pub fn log_workout_page() -> Html {
    let token = use_selector(AppState::token);
    let location = use_location();
    let routine_id = location
        .and_then(|location| location.state::<WorkoutHandoff>())
        .map(|handoff| handoff.routine_id.clone());
    let draft = use_remote_resource(((*token).clone(), routine_id), |(token, routine_id)| async move {
        let handoff = routine_id.map(|routine_id| WorkoutHandoff { routine_id });
        prepare_workout_log(&client_for(token.as_deref()), handoff.as_ref()).await
    });

    match &*draft {
        RemoteResource::Loading => html! { <Loading /> },
        RemoteResource::Failed(message) => html! {
            <div class="space-y-4">
                <ErrorAlert message={message.clone()} />
                <Link<MainRoute> to={MainRoute::StartWorkout} classes="btn btn-outline">
                    {"Choose a routine"}
                </Link<MainRoute>>
            </div>
        },
        RemoteResource::Ready(draft) => html! { <WorkoutForm draft={draft.clone()} /> },
    }
}
