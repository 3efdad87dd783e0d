use crate::{
    components::{
        ErrorAlert,
        form::{SelectField, TextField},
        theme_toggle::ThemeToggle,
    },
    models::app_state::AppState,
    storage::BrowserStorage,
};
use shared::{
    ClientError, SessionStore,
    forms::ProfileForm,
    models::{FitnessLevel, Gender},
    validation::{Field, FieldErrors},
};
use yew::prelude::*;
use yewdux::prelude::{use_dispatch, use_selector};

const TEXT_FIELDS: [(Field, &str, &str, &str); 8] = [
    (Field::Username, "username", "Username", "text"),
    (Field::Email, "email", "Email", "email"),
    (Field::Age, "age", "Age", "number"),
    (Field::Height, "height", "Height (cm)", "number"),
    (Field::Weight, "weight", "Weight (kg)", "number"),
    (Field::WeightGoal, "weight-goal", "Weight goal (kg)", "number"),
    (Field::MainGoal, "main-goal", "Main goal", "text"),
    (
        Field::PreferredWorkoutSplit,
        "preferred-workout-split",
        "Preferred workout split",
        "text",
    ),
];

#[derive(Clone, PartialEq)]
enum Outcome {
    Saved,
    Failed(String),
}

/// Local profile editing. Changes are written to the cached session only.
#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    let user = use_selector(|state: &AppState| state.user().cloned());
    let dispatch = use_dispatch::<AppState>();
    let form = {
        let user = user.clone();
        use_state(move || (*user).as_ref().map(ProfileForm::from_user).unwrap_or_default())
    };
    let field_errors = use_state(FieldErrors::new);
    let outcome = use_state(|| None::<Outcome>);

    let on_field = |field: Field| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            if let Some(slot) = next.field_mut(field) {
                *slot = value;
            }
            form.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let user = user.clone();
        let field_errors = field_errors.clone();
        let outcome = outcome.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(current) = (*user).as_ref() else {
                outcome.set(Some(Outcome::Failed(ClientError::NotAuthenticated.to_string())));
                return;
            };
            let updated = match form.apply(current) {
                Ok(updated) => updated,
                Err(errors) => {
                    field_errors.set(errors);
                    outcome.set(None);
                    return;
                }
            };
            field_errors.set(FieldErrors::new());
            let mut store = SessionStore::restore(BrowserStorage);
            match store.update_user(updated) {
                Ok(session) => {
                    let session = session.clone();
                    dispatch.reduce_mut(|state| state.session = Some(session));
                    outcome.set(Some(Outcome::Saved));
                }
                Err(err) => {
                    log::warn!("profile update failed: {err}");
                    outcome.set(Some(Outcome::Failed(err.to_string())));
                }
            }
        })
    };

    let text_fields = TEXT_FIELDS
        .iter()
        .map(|&(field, id, label, input_type)| {
            let value = AttrValue::from(form.field(field).unwrap_or_default().to_string());
            html! {
                <TextField
                    {id}
                    {label}
                    {input_type}
                    {value}
                    on_input={on_field(field)}
                    error={field_errors.message(field)}
                />
            }
        })
        .collect::<Html>();

    let gender_options = Gender::ALL
        .iter()
        .map(|gender| (AttrValue::from(gender.as_str()), AttrValue::from(gender.label())))
        .collect::<Vec<_>>();
    let fitness_options = FitnessLevel::ALL
        .iter()
        .map(|level| (AttrValue::from(level.as_str()), AttrValue::from(level.label())))
        .collect::<Vec<_>>();

    html! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold">{"Settings"}</h1>
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">{"Appearance"}</h2>
                    <ThemeToggle />
                </div>
            </div>
            <div class="card bg-base-100 shadow">
                <form class="card-body" {onsubmit}>
                    <h2 class="card-title">{"Profile"}</h2>
                    {
                        match &*outcome {
                            Some(Outcome::Saved) => html! {
                                <div class="alert alert-success">
                                    <span>{"Profile updated successfully!"}</span>
                                </div>
                            },
                            Some(Outcome::Failed(message)) => html! {
                                <ErrorAlert message={message.clone()} />
                            },
                            None => html! {},
                        }
                    }
                    {text_fields}
                    <SelectField
                        id="gender"
                        label="Gender"
                        value={form.gender.clone()}
                        options={gender_options}
                        on_change={on_field(Field::Gender)}
                        error={field_errors.message(Field::Gender)}
                    />
                    <SelectField
                        id="fitness-level"
                        label="Fitness level"
                        value={form.fitness_level.clone()}
                        options={fitness_options}
                        on_change={on_field(Field::FitnessLevel)}
                        error={field_errors.message(Field::FitnessLevel)}
                    />
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit">{"Save changes"}</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
