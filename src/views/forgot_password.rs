use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::app::Route;
use crate::hooks::use_recovery_wizard;
use crate::state::{MessageSeverity, RecoveryStep};
use crate::utils::i18n::t;

#[derive(Properties, PartialEq)]
pub struct ForgotPasswordViewProps {
    pub lang: String,
    pub on_switch_language: Callback<String>,
    pub navigate: Callback<Route>,
}

/// Three-step credential recovery: verify account, confirm the mailed
/// one-time key, set a new password.
#[function_component(ForgotPasswordView)]
pub fn forgot_password_view(props: &ForgotPasswordViewProps) -> Html {
    let lang = props.lang.clone();

    let on_complete = {
        let navigate = props.navigate.clone();
        Callback::from(move |_| {
            navigate.emit(Route::Entry {
                notice: Some("password-change-success".to_string()),
            })
        })
    };
    let on_exit = {
        let navigate = props.navigate.clone();
        Callback::from(move |_| navigate.emit(Route::Entry { notice: None }))
    };

    let wizard = use_recovery_wizard(on_complete, on_exit);
    let state = &*wizard.state;

    let banner = if let Some(message) = wizard.message.current() {
        let class = match message.severity {
            MessageSeverity::Error => "message message-error",
            MessageSeverity::Info => "message message-info",
            MessageSeverity::Success => "message message-success",
        };
        let detail = message.detail.clone().unwrap_or_default();
        html! { <p class={class}>{ t(&message.text, &lang) }{ detail }</p> }
    } else if let Some(key) = state.advisory_key() {
        html! { <p class="message message-info">{ t(key, &lang) }</p> }
    } else {
        html! {}
    };

    let oninput = |setter: &Callback<String>| {
        let setter = setter.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            setter.emit(input.value());
        })
    };

    let on_submit = {
        let submit = wizard.submit.clone();
        Callback::from(move |_: MouseEvent| submit.emit(()))
    };
    let on_back = {
        let step_back = wizard.step_back.clone();
        Callback::from(move |_: MouseEvent| step_back.emit(()))
    };
    let on_toggle_language = {
        let lang = lang.clone();
        let on_switch = props.on_switch_language.clone();
        Callback::from(move |_: MouseEvent| {
            let next = if lang.eq_ignore_ascii_case("EN") { "ET" } else { "EN" };
            on_switch.emit(next.to_string());
        })
    };

    let step_form = match state.step {
        RecoveryStep::Identify => html! {
            <>
                <h2 class="step-title">{ t("verify-account", &lang) }</h2>
                <input
                    type="text"
                    class="text-box"
                    placeholder="UNI-ID"
                    value={state.uni_id.clone()}
                    oninput={oninput(&wizard.set_uni_id)}
                />
            </>
        },
        RecoveryStep::VerifyCode => html! {
            <>
                <h2 class="step-title">
                    { format!("{} {}@taltech.ee", t("one-time-key-prompt", &lang), state.uni_id) }
                </h2>
                <input
                    type="text"
                    class="text-box"
                    placeholder={t("one-time-key", &lang)}
                    value={state.otp_code.clone()}
                    oninput={oninput(&wizard.set_otp)}
                />
            </>
        },
        RecoveryStep::ResetPassword => html! {
            <>
                <h2 class="step-title">{ t("set-new-password", &lang) }</h2>
                <input
                    type="password"
                    class="text-box"
                    placeholder={t("password", &lang)}
                    value={state.new_password.clone()}
                    oninput={oninput(&wizard.set_password)}
                />
                <input
                    type="password"
                    class="text-box"
                    placeholder={t("repeat-password", &lang)}
                    value={state.new_password_confirm.clone()}
                    oninput={oninput(&wizard.set_password_confirm)}
                />
            </>
        },
    };

    html! {
        <div class="screen recovery-screen">
            <div class="card">
                { step_form }
                { banner }
                <button
                    class="btn-primary"
                    onclick={on_submit}
                    disabled={!state.can_continue()}
                >
                    { t("continue", &lang) }
                </button>
                <a class="link" onclick={on_back}>{ t("something-wrong-back", &lang) }</a>
                <a class="link" onclick={on_toggle_language}>
                    { if lang.eq_ignore_ascii_case("EN") { "ET" } else { "EN" } }
                </a>
            </div>
        </div>
    }
}
