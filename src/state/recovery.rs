// ============================================================================
// RECOVERY WIZARD STATE - identify -> verify code -> reset password
// ============================================================================

use std::rc::Rc;

use yew::Reducible;

use crate::utils::validators::{is_password_form_valid, is_valid_default_id, is_valid_uni_id};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryStep {
    Identify,
    VerifyCode,
    ResetPassword,
}

/// Full wizard state. Mutated only through `RecoveryAction`; the step
/// moves forward on confirmed gateway success and backward on explicit
/// user request, never otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct RecoveryState {
    pub step: RecoveryStep,
    pub uni_id: String,
    pub otp_code: String,
    pub new_password: String,
    pub new_password_confirm: String,
    /// A gateway call for the current step is in flight; submissions are
    /// ignored while set so a step can never be submitted twice.
    pub pending: bool,
}

impl Default for RecoveryState {
    fn default() -> Self {
        Self {
            step: RecoveryStep::Identify,
            uni_id: String::new(),
            otp_code: String::new(),
            new_password: String::new(),
            new_password_confirm: String::new(),
            pending: false,
        }
    }
}

pub enum RecoveryAction {
    SetUniId(String),
    SetOtp(String),
    SetPassword(String),
    SetPasswordConfirm(String),
    SubmitStarted,
    SubmitFailed,
    StepAdvanced,
    StepBack,
}

impl Reducible for RecoveryState {
    type Action = RecoveryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            RecoveryAction::SetUniId(value) => next.uni_id = value.trim().to_string(),
            RecoveryAction::SetOtp(value) => next.otp_code = value.trim().to_string(),
            RecoveryAction::SetPassword(value) => next.new_password = value.trim().to_string(),
            RecoveryAction::SetPasswordConfirm(value) => {
                next.new_password_confirm = value.trim().to_string()
            }
            RecoveryAction::SubmitStarted => next.pending = true,
            RecoveryAction::SubmitFailed => next.pending = false,
            RecoveryAction::StepAdvanced => {
                next.pending = false;
                next.step = match self.step {
                    RecoveryStep::Identify => RecoveryStep::VerifyCode,
                    // the final step exits the wizard through navigation,
                    // not through a state transition
                    RecoveryStep::VerifyCode | RecoveryStep::ResetPassword => {
                        RecoveryStep::ResetPassword
                    }
                };
            }
            RecoveryAction::StepBack => {
                next.pending = false;
                match self.step {
                    // backing out of the first step leaves the wizard;
                    // the view navigates, the state stays put
                    RecoveryStep::Identify => {}
                    RecoveryStep::VerifyCode => {
                        next.step = RecoveryStep::Identify;
                        next.otp_code.clear();
                    }
                    RecoveryStep::ResetPassword => next.step = RecoveryStep::VerifyCode,
                }
            }
        }
        Rc::new(next)
    }
}

impl RecoveryState {
    /// Gate for the current step's continue button.
    pub fn can_continue(&self) -> bool {
        if self.pending {
            return false;
        }
        match self.step {
            // the pattern rejects the empty string, so this also covers
            // "non-empty" after trimming
            RecoveryStep::Identify => is_valid_uni_id(&self.uni_id),
            RecoveryStep::VerifyCode => is_valid_default_id(&self.otp_code),
            RecoveryStep::ResetPassword => {
                is_password_form_valid(&self.new_password, &self.new_password_confirm)
            }
        }
    }

    /// Advisory hint re-evaluated on every keystroke. Purely informative;
    /// never blocks the continue button.
    pub fn advisory_key(&self) -> Option<&'static str> {
        match self.step {
            RecoveryStep::Identify => {
                if !self.uni_id.is_empty() {
                    Some("all-fields-required-message")
                } else {
                    None
                }
            }
            RecoveryStep::VerifyCode => None,
            RecoveryStep::ResetPassword => {
                let password = &self.new_password;
                let confirm = &self.new_password_confirm;
                if !password.is_empty() && password.chars().count() < 8 {
                    Some("password-length-message")
                } else if !password.is_empty() && !confirm.is_empty() && password != confirm {
                    Some("password-match-message")
                } else {
                    None
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: RecoveryState, action: RecoveryAction) -> RecoveryState {
        (*Rc::new(state).reduce(action)).clone()
    }

    fn state_on(step: RecoveryStep) -> RecoveryState {
        RecoveryState {
            step,
            ..RecoveryState::default()
        }
    }

    #[test]
    fn identify_continue_requires_non_empty_uni_id() {
        let state = RecoveryState::default();
        assert!(!state.can_continue());
        let state = reduce(state, RecoveryAction::SetUniId("student1".into()));
        assert!(state.can_continue());
        // whitespace-only input trims to empty
        let state = reduce(state, RecoveryAction::SetUniId("   ".into()));
        assert!(!state.can_continue());
    }

    #[test]
    fn identify_rejects_malformed_uni_ids() {
        let state = reduce(
            RecoveryState::default(),
            RecoveryAction::SetUniId("mari maasikas".into()),
        );
        assert!(!state.can_continue());
        let state = reduce(state, RecoveryAction::SetUniId("mari@taltech".into()));
        assert!(!state.can_continue());
        let state = reduce(state, RecoveryAction::SetUniId("mari.maasikas".into()));
        assert!(state.can_continue());
    }

    #[test]
    fn verify_code_is_gated_on_the_default_id_pattern() {
        let state = reduce(state_on(RecoveryStep::VerifyCode), RecoveryAction::SetOtp("1234".into()));
        assert!(!state.can_continue());
        let state = reduce(state, RecoveryAction::SetOtp("123456".into()));
        assert!(state.can_continue());
    }

    #[test]
    fn reset_password_is_gated_on_length_and_match() {
        let state = state_on(RecoveryStep::ResetPassword);
        let state = reduce(state, RecoveryAction::SetPassword("secret12".into()));
        assert!(!state.can_continue());
        let state = reduce(state, RecoveryAction::SetPasswordConfirm("secret12".into()));
        assert!(state.can_continue());
        let state = reduce(state, RecoveryAction::SetPassword("short".into()));
        assert!(!state.can_continue());
    }

    #[test]
    fn pending_disables_continue_until_the_call_settles() {
        let state = reduce(RecoveryState::default(), RecoveryAction::SetUniId("student1".into()));
        let state = reduce(state, RecoveryAction::SubmitStarted);
        assert!(state.pending);
        assert!(!state.can_continue());
        let state = reduce(state, RecoveryAction::SubmitFailed);
        assert!(!state.pending);
        assert!(state.can_continue());
    }

    #[test]
    fn failed_verification_stays_on_verify_code() {
        // uniId accepted, gateway rejects the otp: the wizard re-prompts
        let state = reduce(RecoveryState::default(), RecoveryAction::SetUniId("student1".into()));
        let state = reduce(state, RecoveryAction::SubmitStarted);
        let state = reduce(state, RecoveryAction::StepAdvanced);
        assert_eq!(state.step, RecoveryStep::VerifyCode);

        let state = reduce(state, RecoveryAction::SetOtp("123456".into()));
        let state = reduce(state, RecoveryAction::SubmitStarted);
        let state = reduce(state, RecoveryAction::SubmitFailed);
        assert_eq!(state.step, RecoveryStep::VerifyCode);
        assert!(!state.pending);
    }

    #[test]
    fn stepping_back_from_verify_code_clears_the_otp() {
        let state = reduce(state_on(RecoveryStep::VerifyCode), RecoveryAction::SetOtp("123456".into()));
        let state = reduce(state, RecoveryAction::StepBack);
        assert_eq!(state.step, RecoveryStep::Identify);
        assert!(state.otp_code.is_empty());
    }

    #[test]
    fn stepping_back_from_reset_password_returns_to_verify_code() {
        let state = reduce(state_on(RecoveryStep::ResetPassword), RecoveryAction::StepBack);
        assert_eq!(state.step, RecoveryStep::VerifyCode);
    }

    #[test]
    fn step_back_on_identify_leaves_state_unchanged() {
        let state = reduce(RecoveryState::default(), RecoveryAction::SetUniId("student1".into()));
        let stepped = reduce(state.clone(), RecoveryAction::StepBack);
        assert_eq!(stepped, state);
    }

    #[test]
    fn advisory_tracks_the_password_fields() {
        let state = state_on(RecoveryStep::ResetPassword);
        assert_eq!(state.advisory_key(), None);
        let state = reduce(state, RecoveryAction::SetPassword("short".into()));
        assert_eq!(state.advisory_key(), Some("password-length-message"));
        let state = reduce(state, RecoveryAction::SetPassword("longenough".into()));
        let state = reduce(state, RecoveryAction::SetPasswordConfirm("different1".into()));
        assert_eq!(state.advisory_key(), Some("password-match-message"));
        let state = reduce(state, RecoveryAction::SetPasswordConfirm("longenough".into()));
        assert_eq!(state.advisory_key(), None);
    }

    #[test]
    fn advisory_on_identify_prompts_once_typing_starts() {
        let state = RecoveryState::default();
        assert_eq!(state.advisory_key(), None);
        let state = reduce(state, RecoveryAction::SetUniId("s".into()));
        assert_eq!(state.advisory_key(), Some("all-fields-required-message"));
    }

}
