use crate::{
    api::client_for,
    components::{
        ErrorAlert, Loading,
        form::{SelectField, TextField, event_checked, event_value},
    },
    hooks::use_remote_resource,
    models::app_state::AppState,
    routes::MainRoute,
};
use shared::{
    RemoteResource,
    forms::{ExerciseEntryRow, RoutineDraft, RowField},
    models::{Difficulty, Exercise},
    validation::{Field, FieldErrors},
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::use_navigator;
use yewdux::prelude::use_selector;

const TEXT_FIELDS: [(Field, &str, &str, &str, &str); 7] = [
    (Field::Name, "name", "Name", "text", ""),
    (Field::Description, "description", "Description", "text", ""),
    (Field::EstimatedDuration, "estimated-duration", "Estimated duration (min)", "number", ""),
    (Field::WorkoutType, "workout-type", "Workout type", "text", "Strength, Cardio..."),
    (
        Field::TargetMuscleGroups,
        "target-muscle-groups",
        "Target muscle groups",
        "text",
        "chest, back, legs",
    ),
    (Field::Equipment, "equipment", "Equipment", "text", "barbell, dumbbells"),
    (Field::Tags, "tags", "Tags", "text", "push, beginner"),
];

#[derive(Properties, PartialEq)]
struct ExerciseRowProps {
    index: usize,
    row: ExerciseEntryRow,
    catalogue: Vec<Exercise>,
    error: Option<String>,
    on_update: Callback<(usize, RowField, String)>,
    on_remove: Callback<usize>,
}

#[function_component(ExerciseRowEditor)]
fn exercise_row_editor(props: &ExerciseRowProps) -> Html {
    let index = props.index;
    let update = |field: RowField| {
        props
            .on_update
            .reform(move |event: Event| (index, field, event_value(&event).unwrap_or_default()))
    };
    let on_remove = props.on_remove.reform(move |_: MouseEvent| index);

    html! {
        <div class="flex flex-wrap items-end gap-2 border-b border-base-300 pb-2">
            <select class="select select-bordered" onchange={update(RowField::Exercise)}>
                <option value="" selected={props.row.exercise_id.is_empty()}>{"Select exercise"}</option>
                { for props.catalogue.iter().map(|exercise| html! {
                    <option
                        value={exercise.id.clone()}
                        selected={exercise.id == props.row.exercise_id}
                    >
                        {exercise.name.clone()}
                    </option>
                }) }
            </select>
            <input class="input input-bordered w-20" type="number" placeholder="Sets"
                value={props.row.sets.clone()} onchange={update(RowField::Sets)} />
            <input class="input input-bordered w-20" type="number" placeholder="Reps"
                value={props.row.reps.clone()} onchange={update(RowField::Reps)} />
            <input class="input input-bordered w-28" type="number" placeholder="Rest (s)"
                value={props.row.rest_between_sets.clone()} onchange={update(RowField::RestBetweenSets)} />
            <button type="button" class="btn btn-ghost btn-sm" onclick={on_remove}>{"Remove"}</button>
            if let Some(error) = &props.error {
                <span class="text-error text-sm w-full">{error.clone()}</span>
            }
        </div>
    }
}

#[function_component(AddRoutinePage)]
pub fn add_routine_page() -> Html {
    let token = use_selector(AppState::token);
    let navigator = use_navigator();
    let catalogue = use_remote_resource((*token).clone(), |token| async move {
        client_for(token.as_deref()).exercise_catalogue().await
    });
    let draft = use_state(RoutineDraft::default);
    let field_errors = use_state(FieldErrors::new);
    let error = use_state(|| None::<String>);
    let saving = use_state(|| false);

    let on_field = |field: Field| {
        let draft = draft.clone();
        Callback::from(move |value: String| {
            let mut next = (*draft).clone();
            if let Some(slot) = next.field_mut(field) {
                *slot = value;
            }
            draft.set(next);
        })
    };

    let on_public = {
        let draft = draft.clone();
        Callback::from(move |event: Event| {
            let mut next = (*draft).clone();
            next.is_public = event_checked(&event);
            draft.set(next);
        })
    };

    let on_add_row = {
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*draft).clone();
            next.add_exercise();
            draft.set(next);
        })
    };

    let on_update_row = {
        let draft = draft.clone();
        Callback::from(move |(index, field, value): (usize, RowField, String)| {
            let mut next = (*draft).clone();
            next.update_exercise(index, field, value);
            draft.set(next);
        })
    };

    let on_remove_row = {
        let draft = draft.clone();
        Callback::from(move |index: usize| {
            let mut next = (*draft).clone();
            next.remove_exercise(index);
            draft.set(next);
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let token = token.clone();
        let field_errors = field_errors.clone();
        let error = error.clone();
        let saving = saving.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            error.set(None);
            let request = match draft.to_request() {
                Ok(request) => request,
                Err(errors) => {
                    field_errors.set(errors);
                    return;
                }
            };
            field_errors.set(FieldErrors::new());
            saving.set(true);
            let token = (*token).clone();
            let error = error.clone();
            let saving = saving.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                match client_for(token.as_deref()).create_routine(&request).await {
                    Ok(routine) => {
                        log::info!("created routine {}", routine.id);
                        if let Some(navigator) = &navigator {
                            navigator.push(&MainRoute::Routines);
                        }
                    }
                    Err(err) => {
                        log::warn!("routine creation failed: {err}");
                        error.set(Some(err.to_string()));
                    }
                }
                saving.set(false);
            });
        })
    };

    let exercises: Vec<Exercise> = match &*catalogue {
        RemoteResource::Loading => return html! { <Loading /> },
        RemoteResource::Failed(message) => return html! { <ErrorAlert message={message.clone()} /> },
        RemoteResource::Ready(exercises) => exercises.clone(),
    };

    let text_fields = TEXT_FIELDS
        .iter()
        .map(|&(field, id, label, input_type, placeholder)| {
            let value = AttrValue::from(draft.field(field).unwrap_or_default().to_string());
            let placeholder = (!placeholder.is_empty()).then(|| AttrValue::from(placeholder));
            html! {
                <TextField
                    {id}
                    {label}
                    {input_type}
                    {value}
                    {placeholder}
                    on_input={on_field(field)}
                    error={field_errors.message(field)}
                />
            }
        })
        .collect::<Html>();

    let difficulty_options = Difficulty::ALL
        .iter()
        .map(|level| (AttrValue::from(level.as_str()), AttrValue::from(level.as_str())))
        .collect::<Vec<_>>();

    let rows = draft
        .exercises
        .iter()
        .enumerate()
        .map(|(index, row)| {
            html! {
                <ExerciseRowEditor
                    {index}
                    row={row.clone()}
                    catalogue={exercises.clone()}
                    error={field_errors.message(Field::ExerciseRow(index))}
                    on_update={on_update_row.clone()}
                    on_remove={on_remove_row.clone()}
                />
            }
        })
        .collect::<Html>();

    html! {
        <div class="space-y-4">
            <h1 class="text-3xl font-bold">{"Add Routine"}</h1>
            if let Some(message) = &*error {
                <ErrorAlert message={message.clone()} />
            }
            <form class="card bg-base-100 shadow" {onsubmit}>
                <div class="card-body">
                    {text_fields}
                    <SelectField
                        id="difficulty"
                        label="Difficulty"
                        value={draft.difficulty.clone()}
                        options={difficulty_options}
                        on_change={on_field(Field::Difficulty)}
                        error={field_errors.message(Field::Difficulty)}
                    />
                    <label class="label cursor-pointer justify-start gap-3">
                        <input
                            type="checkbox"
                            class="checkbox"
                            checked={draft.is_public}
                            onchange={on_public}
                        />
                        <span class="label-text">{"Public routine"}</span>
                    </label>
                    <h2 class="text-xl font-semibold mt-4">{"Exercises"}</h2>
                    {rows}
                    if let Some(message) = field_errors.message(Field::Exercises) {
                        <span class="text-error text-sm">{message}</span>
                    }
                    <button type="button" class="btn btn-outline btn-sm w-fit" onclick={on_add_row}>
                        {"Add exercise"}
                    </button>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={*saving}>
                            {if *saving { "Saving..." } else { "Create Routine" }}
                        </button>
                    </div>
                </div>
            </form>
        </div>
    }
}
