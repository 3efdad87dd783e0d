use i18nrs::yew::use_translation;
use yew::{Html, Properties, classes, function_component, html};
use yew_icons::Icon;
use yew_router::prelude::Link;

use crate::routes::MainRoute;

#[derive(Properties, PartialEq, Eq)]
pub struct HeaderNavItemProps {
    pub route: MainRoute,
    pub current_route: Option<MainRoute>,
}

#[function_component(HeaderNavItem)]
pub fn header_nav_item(props: &HeaderNavItemProps) -> Html {
    let (i18n, ..) = use_translation();

    let route_name = i18n.t(&format!("routes.{}.title", props.route.key()));
    let active_route_class = if props.current_route.as_ref() == Some(&props.route) {
        "btn-soft"
    } else {
        ""
    };

    html! {
      <li>
          <Link<MainRoute> to={props.route.clone()} classes={classes!("btn", "btn-ghost", "gap-2", active_route_class)}>
              <Icon icon_id={props.route.icon()} class="h-4 w-4" />
              {route_name}
          </Link<MainRoute>>
      </li>
    }
}
