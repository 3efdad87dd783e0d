use yew::{Html, function_component, html};

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
            <div>
                <p>{"© 2023 Fitz Fitness Tracker. All rights reserved."}</p>
            </div>
        </footer>
    }
}
