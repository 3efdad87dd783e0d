use crate::routes::{MainRoute, switch};
use yew::{Html, function_component, html};
use yew_router::prelude::*;

/// Routes every page. The session is already in the store by the time the
/// first route renders; it is trusted as persisted and not re-checked.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<MainRoute> render={switch} />
        </BrowserRouter>
    }
}
