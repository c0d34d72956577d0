use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LogoutDialogProps {
    pub is_open: bool,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component(LogoutDialog)]
pub fn logout_dialog(props: &LogoutDialogProps) -> Html {
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

    let on_no = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    let on_yes = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };

    if !props.is_open {
        return html! {};
    }

    html! {
        <div class="dialog-backdrop" onclick={on_backdrop_click}>
            <div class="dialog" onclick={on_modal_click}>
                <h3 class="dialog-title">{"Are You Sure You Want To Log Out?"}</h3>
                <div class="dialog-content">{"Your profile will not be saved"}</div>
                <div class="dialog-actions">
                    <button type="button" class="btn btn-secondary" onclick={on_no}>{"no"}</button>
                    <button type="button" class="btn btn-primary" onclick={on_yes}>{"yes"}</button>
                </div>
            </div>
        </div>
    }
}
