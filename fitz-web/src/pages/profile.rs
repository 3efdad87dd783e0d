use crate::{models::app_state::AppState, routes::MainRoute};
use shared::models::User;
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub struct ProfileViewProps {
    pub user: Option<User>,
}

fn row(label: &'static str, value: Option<String>) -> Html {
    html! {
        <tr>
            <th>{label}</th>
            <td>{value.unwrap_or_else(|| "Not set".to_string())}</td>
        </tr>
    }
}

/// Read-only rendering of the cached user.
#[function_component(ProfileView)]
pub fn profile_view(props: &ProfileViewProps) -> Html {
    let Some(user) = &props.user else {
        return html! {
            <div class="alert alert-info">
                <span>{"Please log in to view your profile."}</span>
            </div>
        };
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{user.username.clone()}</h2>
                <table class="table">
                    <tbody>
                        {row("Email", Some(user.email.clone()).filter(|email| !email.is_empty()))}
                        {row("Age", user.age.map(|age| age.to_string()))}
                        {row("Gender", user.gender.map(|gender| gender.label().to_string()))}
                        {row("Height", user.height.map(|height| format!("{height} cm")))}
                        {row("Weight", user.weight.map(|weight| format!("{weight} kg")))}
                        {row("Weight goal", user.weight_goal.map(|goal| format!("{goal} kg")))}
                        {row("Main goal", user.main_goal.clone())}
                        {row("Fitness level", user.fitness_level.map(|level| level.label().to_string()))}
                        {row("Preferred workout split", user.preferred_workout_split.clone())}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let user = use_selector(|state: &AppState| state.user().cloned());

    html! {
        <div class="space-y-4">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">{"Profile"}</h1>
                if user.is_some() {
                    <Link<MainRoute> to={MainRoute::Settings} classes="btn btn-outline btn-sm">
                        {"Edit"}
                    </Link<MainRoute>>
                }
            </div>
            <ProfileView user={(*user).clone()} />
        </div>
    }
}
