use crate::{models::app_state::AppState, routes::MainRoute};
use yew::{Html, function_component, html};
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

/// `HomePage` page component
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let username = use_selector(|state: &AppState| state.user().map(|user| user.username.clone()));

    html! {
        <div class="hero min-h-[60vh]">
            <div class="hero-content text-center">
                <div class="max-w-md space-y-4">
                    <h1 class="text-4xl font-bold">{"Welcome to Fitz"}</h1>
                    <p>{"Plan routines, log every set, and watch your training volume grow."}</p>
                    {
                        match (*username).clone() {
                            Some(username) => html! {
                                <>
                                    <p class="text-lg">{format!("Hello, {username}!")}</p>
                                    <Link<MainRoute> to={MainRoute::Dashboard} classes="btn btn-primary">
                                        {"Start Tracking"}
                                    </Link<MainRoute>>
                                </>
                            },
                            None => html! {
                                <div class="flex justify-center gap-2">
                                    <Link<MainRoute> to={MainRoute::Login} classes="btn btn-primary">
                                        {"Login"}
                                    </Link<MainRoute>>
                                    <Link<MainRoute> to={MainRoute::Register} classes="btn btn-outline">
                                        {"Register"}
                                    </Link<MainRoute>>
                                </div>
                            },
                        }
                    }
                </div>
            </div>
        </div>
    }
}
