use gloo::events::EventListener;
use shared::{redirect_guard, Route, UserProfile};
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::home_view::HomeView;
use components::settings_view::SettingsView;
use components::toast_stack::ToastStack;
use hooks::use_toasts::use_toasts;
use services::config::config_or_default;
use services::logging::Logger;
use services::navigation::{current_route, push_route};

/// Owns the player profile and the current route; every screen gets the
/// profile by value plus callbacks to replace it or navigate.
#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| config_or_default());
    let user_profile = use_state(UserProfile::logged_out);
    let route = use_state(current_route);
    let toasts = use_toasts(config.toast_timeout_ms);

    // Browser back/forward
    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "popstate", move |_| {
                    route.set(current_route());
                })
            });
            move || drop(listener)
        });
    }

    let navigate = {
        let route = route.clone();
        Callback::from(move |next: Route| {
            if *route != next {
                Logger::info_with_component("app", &format!("navigating to {}", next.path()));
                push_route(next);
                route.set(next);
            }
        })
    };

    // Whole-value replace, followed by the redirect check
    let set_user_profile = {
        let user_profile = user_profile.clone();
        let navigate = navigate.clone();
        Callback::from(move |next: UserProfile| {
            Logger::info_with_component(
                "app",
                &format!("profile replaced (session: {})", next.has_session()),
            );
            let redirect = redirect_guard(&next);
            user_profile.set(next);
            if let Some(target) = redirect {
                navigate.emit(target);
            }
        })
    };

    let screen = match *route {
        Route::Home => html! {
            <HomeView
                user_profile={(*user_profile).clone()}
                config={config.clone()}
                set_user_profile={set_user_profile.clone()}
                on_notify={toasts.actions.notify.clone()}
                navigate={navigate.clone()}
            />
        },
        Route::Settings => html! {
            <SettingsView
                user_profile={(*user_profile).clone()}
                config={config.clone()}
                set_user_profile={set_user_profile.clone()}
                on_notify={toasts.actions.notify.clone()}
                navigate={navigate.clone()}
            />
        },
    };

    html! {
        <main class="app">
            {screen}
            <ToastStack toasts={toasts.toasts.clone()} on_dismiss={toasts.actions.dismiss.clone()} />
        </main>
    }
}

fn main() {
    Logger::init();
    yew::Renderer::<App>::new().render();
}
