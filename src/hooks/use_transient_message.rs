use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::state::{Message, MessageAction, MessageSlot};
use crate::utils::MESSAGE_LIFETIME_MS;

/// Handle over the shared toast slot: show a message that clears itself
/// after `MESSAGE_LIFETIME_MS`, or clear it early.
#[derive(Clone)]
pub struct UseTransientMessageHandle {
    slot: UseReducerHandle<MessageSlot>,
    pub show: Callback<Message>,
    pub clear: Callback<()>,
}

impl UseTransientMessageHandle {
    pub fn current(&self) -> Option<Message> {
        self.slot.current().cloned()
    }
}

impl PartialEq for UseTransientMessageHandle {
    fn eq(&self, other: &Self) -> bool {
        self.slot == other.slot
    }
}

#[hook]
pub fn use_transient_message() -> UseTransientMessageHandle {
    let slot = use_reducer(MessageSlot::default);
    let next_token = use_mut_ref(|| 0u64);
    // exactly one expiry timer is alive at a time; replacing the handle
    // cancels the previous one
    let timer = use_mut_ref(|| None::<Timeout>);

    let show = {
        let slot = slot.clone();
        let next_token = next_token.clone();
        let timer = timer.clone();
        Callback::from(move |message: Message| {
            let token = {
                let mut counter = next_token.borrow_mut();
                *counter += 1;
                *counter
            };
            slot.dispatch(MessageAction::Show { message, token });

            let expiry = Timeout::new(MESSAGE_LIFETIME_MS, {
                let slot = slot.clone();
                move || slot.dispatch(MessageAction::Expire(token))
            });
            *timer.borrow_mut() = Some(expiry);
        })
    };

    let clear = {
        let slot = slot.clone();
        let timer = timer.clone();
        Callback::from(move |_| {
            *timer.borrow_mut() = None;
            slot.dispatch(MessageAction::Clear);
        })
    };

    // cancel the pending timer on unmount; no expiry may run after teardown
    {
        let timer = timer.clone();
        use_effect_with((), move |_| {
            move || {
                *timer.borrow_mut() = None;
            }
        });
    }

    UseTransientMessageHandle { slot, show, clear }
}
