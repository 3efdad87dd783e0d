use crate::{
    components::header_nav_item::HeaderNavItem,
    models::app_state::AppState,
    routes::{MainRoute, nav_routes},
    storage::BrowserStorage,
};
use i18nrs::yew::use_translation;
use shared::SessionStore;
use yew::prelude::*;
use yew_router::prelude::{Link, use_navigator};
use yewdux::prelude::{use_dispatch, use_selector};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let (i18n, ..) = use_translation();
    let username = use_selector(|state: &AppState| state.user().map(|user| user.username.clone()));
    let dispatch = use_dispatch::<AppState>();
    let navigator = use_navigator();
    let is_authenticated = username.is_some();

    let on_logout = Callback::from(move |event: MouseEvent| {
        event.prevent_default();
        SessionStore::restore(BrowserStorage).logout();
        dispatch.reduce_mut(|state| state.session = None);
        log::info!("logged out");
        if let Some(navigator) = &navigator {
            navigator.push(&MainRoute::Login);
        }
    });

    let links = nav_routes(is_authenticated)
        .into_iter()
        .map(|route| {
            html! {
                <HeaderNavItem
                    current_route={props.current_route.clone()}
                    {route}
                />
            }
        })
        .collect::<Html>();

    html! {
        <nav class="navbar justify-between bg-base-300">
            <Link<MainRoute> to={MainRoute::Home} classes="btn btn-ghost text-lg">
                {i18n.t("app.title")}
            </Link<MainRoute>>
            <ul class="menu menu-horizontal gap-1">
                {links}
            </ul>
            {
                if let Some(username) = (*username).clone() {
                    html! {
                        <div class="flex items-center gap-2">
                            <span class="text-sm text-base-content/80">{ username }</span>
                            <button class="btn btn-ghost btn-sm" onclick={on_logout}>
                                {i18n.t("header.logout")}
                            </button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </nav>
    }
}
