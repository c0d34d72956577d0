use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PictureDialogProps {
    pub is_open: bool,
    pub link: String,
    /// Error message, or the "len/max" counter when there is none
    pub helper_text: String,
    pub has_error: bool,
    pub on_link_input: Callback<String>,
    pub on_delete: Callback<()>,
    pub on_cancel: Callback<()>,
    pub on_confirm: Callback<()>,
}

#[function_component(PictureDialog)]
pub fn picture_dialog(props: &PictureDialogProps) -> Html {
    let on_backdrop_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_cancel.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_input = {
        let on_link_input = props.on_link_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_link_input.emit(input.value());
        })
    };

    let on_delete_click = {
        let on_delete = props.on_delete.clone();
        Callback::from(move |_: MouseEvent| on_delete.emit(()))
    };

    let on_cancel_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    let on_confirm_click = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };

    if !props.is_open {
        return html! {};
    }

    html! {
        <div class="dialog-backdrop" onclick={on_backdrop_click}>
            <div class="dialog" onclick={on_modal_click}>
                <h3 class="dialog-title">{"Change Profile Picture"}</h3>
                <div class="dialog-content">
                    <div class="form-group">
                        <label for="picture-link">{"Link To Profile Picture"}</label>
                        <input
                            id="picture-link"
                            type="url"
                            class={classes!("settings-input", props.has_error.then_some("settings-input-invalid"))}
                            value={props.link.clone()}
                            oninput={on_input}
                            autofocus=true
                        />
                        <small class={classes!("helper-text", props.has_error.then_some("helper-text-error"))}>
                            {&props.helper_text}
                        </small>
                    </div>
                    <button type="button" class="btn btn-danger" onclick={on_delete_click}>
                        {"🗑 Delete Image"}
                    </button>
                </div>
                <div class="dialog-actions">
                    <button type="button" class="btn btn-secondary" onclick={on_cancel_click}>
                        {"cancel"}
                    </button>
                    <button type="button" class="btn btn-primary" onclick={on_confirm_click}>
                        {"ok"}
                    </button>
                </div>
            </div>
        </div>
    }
}
