//! Small form building blocks shared by every screen that takes input.

use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::{AttrValue, Callback, Event, Html, InputEvent, Properties, function_component, html};

/// Current value of the input, select or textarea that fired `event`.
pub fn event_value(event: &Event) -> Option<String> {
    let target = event.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        return Some(select.value());
    }
    target
        .dyn_ref::<HtmlTextAreaElement>()
        .map(HtmlTextAreaElement::value)
}

/// Checked state of the checkbox that fired `event`.
pub fn event_checked(event: &Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
        .is_some_and(|input| input.checked())
}

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    pub on_input: Callback<String>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub error: Option<String>,
}

#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let oninput = props.on_input.reform(|event: InputEvent| {
        event_value(&event).unwrap_or_default()
    });

    html! {
        <div class="form-control">
            <label class="label" for={props.id.clone()}>
                <span class="label-text">{props.label.clone()}</span>
            </label>
            <input
                id={props.id.clone()}
                class="input input-bordered"
                type={props.input_type.clone()}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                {oninput}
            />
            if let Some(error) = &props.error {
                <span class="text-error text-sm mt-1">{error.clone()}</span>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    /// `(value, label)` pairs after the empty placeholder option.
    pub options: Vec<(AttrValue, AttrValue)>,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub error: Option<String>,
}

#[function_component(SelectField)]
pub fn select_field(props: &SelectFieldProps) -> Html {
    let onchange = props
        .on_change
        .reform(|event: Event| event_value(&event).unwrap_or_default());

    html! {
        <div class="form-control">
            <label class="label" for={props.id.clone()}>
                <span class="label-text">{props.label.clone()}</span>
            </label>
            <select id={props.id.clone()} class="select select-bordered" {onchange}>
                <option value="" selected={props.value.is_empty()}>{"Select..."}</option>
                { for props.options.iter().map(|(value, label)| html! {
                    <option value={value.clone()} selected={*value == props.value}>{label.clone()}</option>
                }) }
            </select>
            if let Some(error) = &props.error {
                <span class="text-error text-sm mt-1">{error.clone()}</span>
            }
        </div>
    }
}
