use crate::{
    api::shared_client,
    components::{
        ErrorAlert,
        form::{SelectField, TextField},
    },
    models::app_state::AppState,
    routes::MainRoute,
    storage::BrowserStorage,
};
use shared::{
    ClientError, SessionStore,
    forms::RegisterForm,
    models::{FitnessLevel, Gender},
    validation::{Field, FieldErrors},
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::{Link, use_navigator};
use yewdux::prelude::use_dispatch;

/// Text inputs of the registration form: field, element id, label, input type.
const TEXT_FIELDS: [(Field, &str, &str, &str); 9] = [
    (Field::Username, "username", "Username", "text"),
    (Field::Email, "email", "Email", "email"),
    (Field::Password, "password", "Password", "password"),
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

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let form = use_state(RegisterForm::default);
    let field_errors = use_state(FieldErrors::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let navigator = use_navigator();
    let dispatch = use_dispatch::<AppState>();

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
        let field_errors = field_errors.clone();
        let error = error.clone();
        let loading = loading.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let submitted = (*form).clone();
            error.set(None);
            field_errors.set(FieldErrors::new());
            loading.set(true);
            let field_errors = field_errors.clone();
            let error = error.clone();
            let loading = loading.clone();
            let navigator = navigator.clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                let mut store = SessionStore::restore(BrowserStorage);
                match store.register(&shared_client(), &submitted).await {
                    Ok(session) => {
                        let session = session.clone();
                        dispatch.reduce_mut(|state| state.session = Some(session));
                        if let Some(navigator) = &navigator {
                            navigator.push(&MainRoute::Dashboard);
                        }
                    }
                    Err(ClientError::Validation(errors)) => field_errors.set(errors),
                    Err(err) => {
                        log::warn!("registration failed: {err}");
                        error.set(Some(err.to_string()));
                    }
                }
                loading.set(false);
            });
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
        <div class="flex items-center justify-center py-8">
            <div class="card w-full max-w-xl shadow-lg bg-base-100">
                <form class="card-body" {onsubmit}>
                    <h2 class="card-title text-2xl">{"Register"}</h2>
                    if let Some(message) = &*error {
                        <ErrorAlert message={message.clone()} />
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
                        <button class="btn btn-primary" type="submit" disabled={*loading}>
                            {if *loading { "Registering..." } else { "Register" }}
                        </button>
                    </div>
                    <p class="text-sm">
                        {"Already have an account? "}
                        <Link<MainRoute> to={MainRoute::Login} classes="link">{"Login"}</Link<MainRoute>>
                    </p>
                </form>
            </div>
        </div>
    }
}
