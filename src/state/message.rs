// ============================================================================
// TRANSIENT MESSAGE SLOT - one visible message, token-tracked expiry
// ============================================================================

use std::rc::Rc;

use yew::Reducible;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageSeverity {
    Error,
    Info,
    Success,
}

/// A message destined for the shared toast slot. `text` is a localization
/// key forwarded unmodified from the gateway; `detail` is an optional
/// non-localized suffix (e.g. the student code a success toast names).
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub severity: MessageSeverity,
    pub text: String,
    pub detail: Option<String>,
}

impl Message {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            severity: MessageSeverity::Error,
            text: text.into(),
            detail: None,
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            severity: MessageSeverity::Info,
            text: text.into(),
            detail: None,
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            severity: MessageSeverity::Success,
            text: text.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// The single toast slot. A newly shown message replaces the previous one
/// together with its deadline; the token identifies which message an
/// expiry timer belongs to, so a stale timer can never erase a newer
/// message.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MessageSlot {
    current: Option<Message>,
    token: u64,
}

pub enum MessageAction {
    Show { message: Message, token: u64 },
    Expire(u64),
    Clear,
}

impl Reducible for MessageSlot {
    type Action = MessageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            MessageAction::Show { message, token } => Rc::new(Self {
                current: Some(message),
                token,
            }),
            MessageAction::Expire(token) => {
                // Only the timer of the currently shown message may clear it.
                if token == self.token && self.current.is_some() {
                    Rc::new(Self {
                        current: None,
                        token: self.token,
                    })
                } else {
                    self
                }
            }
            MessageAction::Clear => Rc::new(Self {
                current: None,
                token: self.token,
            }),
        }
    }
}

impl MessageSlot {
    pub fn current(&self) -> Option<&Message> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(slot: MessageSlot, action: MessageAction) -> MessageSlot {
        (*Rc::new(slot).reduce(action)).clone()
    }

    #[test]
    fn expire_with_matching_token_clears_the_message() {
        let slot = reduce(
            MessageSlot::default(),
            MessageAction::Show {
                message: Message::error("wrong-otp"),
                token: 1,
            },
        );
        assert_eq!(slot.current().map(|m| m.text.as_str()), Some("wrong-otp"));

        let slot = reduce(slot, MessageAction::Expire(1));
        assert!(slot.current().is_none());
    }

    #[test]
    fn stale_expiry_cannot_erase_a_newer_message() {
        let slot = reduce(
            MessageSlot::default(),
            MessageAction::Show {
                message: Message::error("wrong-otp"),
                token: 1,
            },
        );
        let slot = reduce(
            slot,
            MessageAction::Show {
                message: Message::success("password-change-success"),
                token: 2,
            },
        );

        // The superseded message's timer fires; the newer one must survive.
        let slot = reduce(slot, MessageAction::Expire(1));
        assert_eq!(
            slot.current().map(|m| m.text.as_str()),
            Some("password-change-success")
        );

        let slot = reduce(slot, MessageAction::Expire(2));
        assert!(slot.current().is_none());
    }

    #[test]
    fn clear_cancels_early_without_blocking_future_shows() {
        let slot = reduce(
            MessageSlot::default(),
            MessageAction::Show {
                message: Message::info("no-active-attendance"),
                token: 1,
            },
        );
        let slot = reduce(slot, MessageAction::Clear);
        assert!(slot.current().is_none());

        let slot = reduce(
            slot,
            MessageAction::Show {
                message: Message::error("wrong-workplace-id"),
                token: 2,
            },
        );
        assert!(slot.current().is_some());
        // the old timer firing after the manual clear is still a no-op
        let slot = reduce(slot, MessageAction::Expire(1));
        assert!(slot.current().is_some());
    }

    #[test]
    fn detail_rides_along_with_the_message() {
        let message = Message::success("attendance-check-add-success").with_detail("123456ABCD");
        let slot = reduce(
            MessageSlot::default(),
            MessageAction::Show { message, token: 1 },
        );
        assert_eq!(
            slot.current().and_then(|m| m.detail.as_deref()),
            Some("123456ABCD")
        );
    }
}
