use yew::prelude::*;

use crate::utils::i18n::{current_language, save_current_language, t};
use crate::views::{ForgotPasswordView, HomeView, SettingsView};

/// In-app navigation targets. The entry route optionally carries a
/// one-shot notice key (e.g. the success banner after a password reset).
#[derive(Clone, PartialEq)]
pub enum Route {
    Entry { notice: Option<String> },
    Home,
    PasswordRecovery,
    Settings,
    AttendanceDetails { attendance_id: String },
    Attendances,
}

#[function_component(App)]
pub fn app() -> Html {
    let route = use_state(|| Route::Home);
    let lang = use_state(current_language);

    let navigate = {
        let route = route.clone();
        Callback::from(move |target: Route| route.set(target))
    };

    let on_switch_language = {
        let lang = lang.clone();
        Callback::from(move |next: String| {
            if let Err(e) = save_current_language(&next) {
                log::error!("❌ Could not persist language: {}", e);
            }
            lang.set(next);
        })
    };

    match (*route).clone() {
        Route::Home => html! {
            <HomeView lang={(*lang).clone()} navigate={navigate} />
        },
        Route::PasswordRecovery => html! {
            <ForgotPasswordView
                lang={(*lang).clone()}
                on_switch_language={on_switch_language}
                navigate={navigate}
            />
        },
        Route::Settings => html! {
            <SettingsView lang={(*lang).clone()} navigate={navigate} />
        },
        Route::Entry { notice } => {
            let on_recover = {
                let navigate = navigate.clone();
                Callback::from(move |_: MouseEvent| navigate.emit(Route::PasswordRecovery))
            };
            html! {
                <div class="screen entry-screen">
                    <div class="card">
                        <h1>{ "Attendance" }</h1>
                        if let Some(key) = notice {
                            <p class="message message-success">{ t(&key, &lang) }</p>
                        }
                        // sign-in lives outside this core; recovery is the
                        // one flow reachable from here
                        <a class="link" onclick={on_recover}>{ t("change-password", &lang) }</a>
                    </div>
                </div>
            }
        }
        // read-only stubs; attendance CRUD is outside this core
        Route::AttendanceDetails { attendance_id } => html! {
            <div class="screen">
                <div class="card">
                    <h2>{ t("view-attendance-details", &lang) }</h2>
                    <p>{ attendance_id }</p>
                </div>
            </div>
        },
        Route::Attendances => html! {
            <div class="screen">
                <div class="card">
                    <h2>{ t("view-recent-attendance", &lang) }</h2>
                </div>
            </div>
        },
    }
}
