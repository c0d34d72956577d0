use std::rc::Rc;

use gloo::timers::callback::Timeout;
use shared::Notice;
use yew::prelude::*;

/// A notice on screen, identified so it can be dismissed
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub notice: Notice,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(u32),
}

/// Toasts currently on screen, oldest first
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    /// Older toasts are dropped once this many are showing
    pub const MAX_VISIBLE: usize = 4;

    pub fn push(&mut self, toast: Toast) {
        self.toasts.push(toast);
        if self.toasts.len() > Self::MAX_VISIBLE {
            let overflow = self.toasts.len() - Self::MAX_VISIBLE;
            self.toasts.drain(..overflow);
        }
    }

    /// Unknown ids are ignored; the timer may fire after a manual dismiss
    pub fn dismiss(&mut self, id: u32) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(toast) => next.push(toast),
            ToastAction::Dismiss(id) => next.dismiss(id),
        }
        next.into()
    }
}

pub struct UseToastsResult {
    pub toasts: Vec<Toast>,
    pub actions: UseToastsActions,
}

#[derive(Clone, PartialEq)]
pub struct UseToastsActions {
    pub notify: Callback<Notice>,
    pub dismiss: Callback<u32>,
}

/// Toast stack whose entries dismiss themselves after `timeout_ms`
#[hook]
pub fn use_toasts(timeout_ms: u32) -> UseToastsResult {
    let queue = use_reducer(ToastQueue::default);
    let next_id = use_mut_ref(|| 0u32);

    let dismiss = {
        let dispatcher = queue.dispatcher();
        use_callback((), move |id: u32, _| {
            dispatcher.dispatch(ToastAction::Dismiss(id));
        })
    };

    let notify = {
        let dispatcher = queue.dispatcher();
        let dismiss = dismiss.clone();
        use_callback(timeout_ms, move |notice: Notice, timeout_ms| {
            let id = {
                let mut next_id = next_id.borrow_mut();
                *next_id = next_id.wrapping_add(1);
                *next_id
            };
            dispatcher.dispatch(ToastAction::Push(Toast { id, notice }));

            let dismiss = dismiss.clone();
            Timeout::new(*timeout_ms, move || dismiss.emit(id)).forget();
        })
    };

    UseToastsResult {
        toasts: queue.toasts().to_vec(),
        actions: UseToastsActions { notify, dismiss },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn toast(id: u32) -> Toast {
        Toast {
            id,
            notice: Notice::success(format!("toast {}", id)),
        }
    }

    #[wasm_bindgen_test]
    fn test_push_and_dismiss() {
        let mut queue = ToastQueue::default();
        queue.push(toast(1));
        queue.push(toast(2));
        assert_eq!(queue.toasts().len(), 2);

        queue.dismiss(1);
        assert_eq!(queue.toasts(), &[toast(2)]);

        queue.dismiss(42);
        assert_eq!(queue.toasts().len(), 1);
    }

    #[wasm_bindgen_test]
    fn test_oldest_dropped_when_full() {
        let mut queue = ToastQueue::default();
        for id in 1..=6 {
            queue.push(toast(id));
        }
        let ids: Vec<u32> = queue.toasts().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 4, 5, 6]);
    }

    #[wasm_bindgen_test]
    fn test_reducer() {
        let queue = Rc::new(ToastQueue::default());
        let queue = queue.reduce(ToastAction::Push(toast(7)));
        assert_eq!(queue.toasts(), &[toast(7)]);
        let queue = queue.reduce(ToastAction::Dismiss(7));
        assert!(queue.toasts().is_empty());
    }
}
