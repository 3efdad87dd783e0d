use i18nrs::yew::use_translation;
use yew::{Callback, Event, Html, function_component, html};
use yew_icons::{Icon, IconId};
use yewdux::prelude::use_store;

use crate::models::app_state::AppState;

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let (i18n, ..) = use_translation();
    let (state, dispatch) = use_store::<AppState>();

    let toggle_theme: Callback<Event> = dispatch
        .reduce_mut_callback(|state: &mut AppState| state.dark_mode = !state.dark_mode);

    // Show sun icon in dark mode (to switch to light) and moon icon in light mode (to switch to dark)
    let theme_icon = if state.dark_mode {
        IconId::HeroiconsSolidSun
    } else {
        IconId::HeroiconsSolidMoon
    };

    html! {
        <label class="label cursor-pointer gap-3">
            <span class="label-text">{"Dark mode"}</span>
            <input
                type="checkbox"
                class="toggle"
                checked={state.dark_mode}
                onchange={toggle_theme}
                aria-label={i18n.t("theme.toggle")}
            />
            <Icon icon_id={theme_icon} class="h-5 w-5" />
        </label>
    }
}
