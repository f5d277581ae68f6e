use yew::prelude::*;

use crate::app::Route;
use crate::hooks::use_transient_message;
use crate::models::LocalUserData;
use crate::services::{delete_offline_user_data, delete_user, get_offline_user_data};
use crate::state::{Message, MessageSeverity};
use crate::utils::i18n::{delete_current_language, t};

#[derive(Properties, PartialEq)]
pub struct SettingsViewProps {
    pub lang: String,
    pub navigate: Callback<Route>,
}

/// Settings screen: change password, log out, delete the account.
#[function_component(SettingsView)]
pub fn settings_view(props: &SettingsViewProps) -> Html {
    let lang = props.lang.clone();
    let message = use_transient_message();
    let local_data = use_state(|| None::<LocalUserData>);

    {
        let local_data = local_data.clone();
        let navigate = props.navigate.clone();
        use_effect_with((), move |_| {
            match get_offline_user_data() {
                Some(user) => local_data.set(Some(user)),
                None => navigate.emit(Route::Entry { notice: None }),
            }
            || ()
        });
    }

    let on_change_password = {
        let navigate = props.navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(Route::PasswordRecovery))
    };

    let on_logout = {
        let navigate = props.navigate.clone();
        Callback::from(move |_: MouseEvent| {
            if let Err(e) = delete_offline_user_data() {
                log::error!("❌ Could not clear offline user data: {}", e);
            }
            log::info!("👋 Logged out");
            navigate.emit(Route::Entry {
                notice: Some("account-logout-success".to_string()),
            });
        })
    };

    let on_delete_account = {
        let navigate = props.navigate.clone();
        let message = message.clone();
        let local_data = local_data.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(user) = (*local_data).clone() else {
                return;
            };
            let navigate = navigate.clone();
            let message = message.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match delete_user(&user.uni_id).await {
                    Ok(()) => {
                        if let Err(e) = delete_current_language() {
                            log::error!("❌ Could not clear the stored language: {}", e);
                        }
                        if let Err(e) = delete_offline_user_data() {
                            log::error!("❌ Could not clear offline user data: {}", e);
                        }
                        navigate.emit(Route::Entry {
                            notice: Some("delete-account-success".to_string()),
                        });
                    }
                    Err(reason) => message.show.emit(Message::error(reason)),
                }
            });
        })
    };

    let banner = message.current().map(|msg| {
        let class = match msg.severity {
            MessageSeverity::Error => "message message-error",
            MessageSeverity::Info => "message message-info",
            MessageSeverity::Success => "message message-success",
        };
        html! { <p class={class}>{ t(&msg.text, &lang) }</p> }
    });

    html! {
        <div class="screen settings-screen">
            <div class="card">
                <h2>{ t("settings", &lang) }</h2>
                { banner }
                <button class="btn-primary" onclick={on_change_password}>
                    { t("change-password", &lang) }
                </button>
                <button class="btn-primary" onclick={on_logout}>
                    { t("log-out", &lang) }
                </button>
                <a class="link link-danger" onclick={on_delete_account}>
                    { t("delete-account", &lang) }
                </a>
            </div>
        </div>
    }
}
