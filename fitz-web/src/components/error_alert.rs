use yew::{AttrValue, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct ErrorAlertProps {
    pub message: AttrValue,
}

/// Inline error banner; screens show it in place of their content.
#[function_component(ErrorAlert)]
pub fn error_alert(props: &ErrorAlertProps) -> Html {
    html! {
        <div class="alert alert-error" role="alert">
            <span>{props.message.clone()}</span>
        </div>
    }
}
