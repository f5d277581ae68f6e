use yew::prelude::*;

use crate::hooks::{use_transient_message, UseTransientMessageHandle};
use crate::models::{ChangePasswordPayload, VerifyOtpPayload};
use crate::services::{change_user_password, request_otp, verify_otp};
use crate::state::{Message, RecoveryAction, RecoveryState, RecoveryStep};

/// Handle of the credential-recovery wizard.
#[derive(Clone)]
pub struct UseRecoveryWizardHandle {
    pub state: UseReducerHandle<RecoveryState>,
    pub message: UseTransientMessageHandle,
    pub set_uni_id: Callback<String>,
    pub set_otp: Callback<String>,
    pub set_password: Callback<String>,
    pub set_password_confirm: Callback<String>,
    /// Runs the gateway call of the current step. No-op while a call is
    /// pending or while the step's gate is not satisfied.
    pub submit: Callback<()>,
    /// Explicit back action; leaves the wizard via `on_exit` on step one.
    pub step_back: Callback<()>,
}

/// Drives the three wizard steps. `on_complete` fires after a successful
/// password change, `on_exit` when the user backs out of the first step;
/// navigation stays with the caller.
#[hook]
pub fn use_recovery_wizard(
    on_complete: Callback<()>,
    on_exit: Callback<()>,
) -> UseRecoveryWizardHandle {
    let state = use_reducer(RecoveryState::default);
    let message = use_transient_message();

    let set_uni_id = {
        let state = state.clone();
        Callback::from(move |value: String| state.dispatch(RecoveryAction::SetUniId(value)))
    };
    let set_otp = {
        let state = state.clone();
        Callback::from(move |value: String| state.dispatch(RecoveryAction::SetOtp(value)))
    };
    let set_password = {
        let state = state.clone();
        Callback::from(move |value: String| state.dispatch(RecoveryAction::SetPassword(value)))
    };
    let set_password_confirm = {
        let state = state.clone();
        Callback::from(move |value: String| {
            state.dispatch(RecoveryAction::SetPasswordConfirm(value))
        })
    };

    let submit = {
        let state = state.clone();
        let message = message.clone();
        let on_complete = on_complete.clone();
        Callback::from(move |_| {
            // the gate covers pending, so a double click cannot start a
            // second call for the same step
            if !state.can_continue() {
                return;
            }
            state.dispatch(RecoveryAction::SubmitStarted);

            let step = state.step;
            let uni_id = state.uni_id.clone();
            let otp = state.otp_code.clone();
            let password = state.new_password.clone();
            let state = state.clone();
            let message = message.clone();
            let on_complete = on_complete.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match step {
                    RecoveryStep::Identify => match request_otp(&uni_id).await {
                        Ok(()) => {
                            state.dispatch(RecoveryAction::StepAdvanced);
                            message.clear.emit(());
                        }
                        Err(_) => {
                            log::warn!("⚠️ No account found for {}", uni_id);
                            state.dispatch(RecoveryAction::SubmitFailed);
                            message.show.emit(Message::error("no-account-found"));
                        }
                    },
                    RecoveryStep::VerifyCode => {
                        let payload = VerifyOtpPayload { uni_id, otp };
                        match verify_otp(&payload).await {
                            Ok(()) => {
                                state.dispatch(RecoveryAction::StepAdvanced);
                                message.clear.emit(());
                            }
                            Err(reason) => {
                                state.dispatch(RecoveryAction::SubmitFailed);
                                message.show.emit(Message::error(reason));
                            }
                        }
                    }
                    RecoveryStep::ResetPassword => {
                        let payload = ChangePasswordPayload {
                            uni_id,
                            new_password: password,
                        };
                        match change_user_password(&payload).await {
                            Ok(()) => on_complete.emit(()),
                            Err(reason) => {
                                state.dispatch(RecoveryAction::SubmitFailed);
                                message.show.emit(Message::error(reason));
                            }
                        }
                    }
                }
            });
        })
    };

    let step_back = {
        let state = state.clone();
        let message = message.clone();
        let on_exit = on_exit.clone();
        Callback::from(move |_| {
            if state.step == RecoveryStep::Identify {
                on_exit.emit(());
            } else {
                message.clear.emit(());
                state.dispatch(RecoveryAction::StepBack);
            }
        })
    };

    UseRecoveryWizardHandle {
        state,
        message,
        set_uni_id,
        set_otp,
        set_password,
        set_password_confirm,
        submit,
        step_back,
    }
}
