use shared::Pager;
use yew::{Callback, Html, MouseEvent, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct PaginationControlsProps {
    pub pager: Pager,
    /// Receives the page to request next.
    pub on_change: Callback<u32>,
}

/// Previous/next buttons, disabled at the first and last page.
#[function_component(PaginationControls)]
pub fn pagination_controls(props: &PaginationControlsProps) -> Html {
    let pager = props.pager;

    let on_previous = {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| {
            let mut pager = pager;
            if let Some(page) = pager.previous() {
                on_change.emit(page);
            }
        })
    };

    let on_next = {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| {
            let mut pager = pager;
            if let Some(page) = pager.next() {
                on_change.emit(page);
            }
        })
    };

    html! {
        <div class="join mt-4">
            <button class="join-item btn" disabled={!pager.has_previous()} onclick={on_previous}>
                {"Previous"}
            </button>
            <span class="join-item btn btn-disabled">
                {format!("Page {} of {}", pager.current(), pager.total_pages())}
            </span>
            <button class="join-item btn" disabled={!pager.has_next()} onclick={on_next}>
                {"Next"}
            </button>
        </div>
    }
}
