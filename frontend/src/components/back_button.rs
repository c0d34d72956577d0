use shared::Route;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BackButtonProps {
    pub navigate: Callback<Route>,
}

#[function_component(BackButton)]
pub fn back_button(props: &BackButtonProps) -> Html {
    let on_click = {
        let navigate = props.navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(Route::Home))
    };

    html! {
        <button type="button" class="back-button" onclick={on_click} aria-label="Back">
            {"← Back"}
        </button>
    }
}
