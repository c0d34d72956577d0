use shared::NoticeLevel;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::hooks::use_toasts::Toast;

#[derive(Properties, PartialEq)]
pub struct ToastStackProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u32>,
}

#[function_component(ToastStack)]
pub fn toast_stack(props: &ToastStackProps) -> Html {
    html! {
        <div class="toast-stack" role="status" aria-live="polite">
            {for props.toasts.iter().map(|toast| {
                let id = toast.id;
                let on_dismiss = props.on_dismiss.clone();
                let onclick = Callback::from(move |_: MouseEvent| on_dismiss.emit(id));
                let level_class = match toast.notice.level {
                    NoticeLevel::Success => "toast-success",
                    NoticeLevel::Error => "toast-error",
                };
                html! {
                    <div key={id} class={classes!("toast", level_class)} {onclick}>
                        {&toast.notice.message}
                    </div>
                }
            })}
        </div>
    }
}
