use yew::prelude::*;

/// Keep `document.title` in sync with `title`
#[hook]
pub fn use_document_title(title: String) {
    use_effect_with(title, |title| {
        if let Some(document) = web_sys::window().and_then(|window| window.document()) {
            document.set_title(title);
        }
        || ()
    });
}
