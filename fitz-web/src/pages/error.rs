use crate::routes::MainRoute;
use yew::{Html, function_component, html};
use yew_router::prelude::Link;

#[function_component(ErrorPage)]
pub fn error_page() -> Html {
    html! {
        <div class="hero min-h-[50vh]">
            <div class="hero-content text-center">
                <div class="space-y-4">
                    <h1 class="text-5xl font-bold">{"404"}</h1>
                    <p>{"The page you are looking for does not exist."}</p>
                    <Link<MainRoute> to={MainRoute::Home} classes="btn btn-primary">{"Go home"}</Link<MainRoute>>
                </div>
            </div>
        </div>
    }
}
