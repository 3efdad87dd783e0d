use crate::containers::{footer::Footer, header::Header};
use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use web_sys::window;
use yew::{Children, Html, Properties, classes, function_component, html, use_effect_with};
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let theme = use_selector(|state: &AppState| state.theme());

    // Mirrors the theme onto the html tag so DaisyUI picks it up
    use_effect_with(*theme, |theme| {
        if let Some(html_element) = window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        {
            html_element
                .set_attribute("data-theme", theme)
                .unwrap_or_default();
        }
        || {}
    });

    html! {
    <>
        <Header current_route={props.current_route.clone()} />
        <div class="min-h-screen bg-base-100 flex flex-col">
            <main class={classes!(
                "flex-grow",
                "p-4",
                "container",
                "mx-auto"
            )}>
                {props.children.clone()}
            </main>
            <Footer />
        </div>
    </>
    }
}
