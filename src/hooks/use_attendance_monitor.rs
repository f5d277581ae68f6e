use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::hooks::{use_transient_message, UseTransientMessageHandle};
use crate::models::LocalUserData;
use crate::services::{
    add_attendance_check, get_current_attendance, get_most_recent_attendance,
    get_offline_user_data, get_student_count_by_attendance_id,
};
use crate::state::{build_attendance_check, Message, MonitorAction, MonitorState};
use crate::utils::ATTENDANCE_POLL_INTERVAL_MS;

/// Handle of the live attendance monitor on the home screen.
#[derive(Clone)]
pub struct UseAttendanceMonitorHandle {
    pub state: UseReducerHandle<MonitorState>,
    pub message: UseTransientMessageHandle,
    pub set_student_code: Callback<String>,
    pub set_first_name: Callback<String>,
    pub set_last_name: Callback<String>,
    pub set_workplace_id: Callback<String>,
    /// Manual re-fetch of the ongoing attendance. May race with the poll;
    /// the last response to resolve wins, and each response replaces the
    /// whole snapshot, so no mixed state can result.
    pub refresh: Callback<()>,
    pub submit_check_in: Callback<()>,
}

/// Polls the ongoing attendance every 10 s while an offline identity is
/// present and a component is mounted. With no identity,
/// `on_missing_identity` fires once and nothing else runs.
#[hook]
pub fn use_attendance_monitor(on_missing_identity: Callback<()>) -> UseAttendanceMonitorHandle {
    let state = use_reducer(MonitorState::default);
    let message = use_transient_message();
    let identity = use_state(|| None::<LocalUserData>);

    // Resolve the offline identity once on mount.
    {
        let identity = identity.clone();
        let on_missing_identity = on_missing_identity.clone();
        use_effect_with((), move |_| {
            match get_offline_user_data() {
                Some(user) => identity.set(Some(user)),
                None => on_missing_identity.emit(()),
            }
            || ()
        });
    }

    let fetch_current = {
        let state = state.clone();
        let message = message.clone();
        let identity = identity.clone();
        Callback::from(move |_| {
            let Some(user) = (*identity).clone() else {
                return;
            };
            let state = state.clone();
            let message = message.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match get_current_attendance(&user.uni_id).await {
                    Err(reason) => {
                        // an expected outcome between sessions, not an error
                        state.dispatch(MonitorAction::SessionUnavailable { reason });
                    }
                    Ok(session) => {
                        // the count is fetched for exactly this session and
                        // dispatched together with it
                        let count = match session.attendance_id.parse::<i64>() {
                            Ok(id) => get_student_count_by_attendance_id(id).await,
                            Err(_) => Err("connection-error".to_string()),
                        };
                        match count {
                            Ok(n) => state.dispatch(MonitorAction::SessionLoaded {
                                session,
                                student_count: n.to_string(),
                            }),
                            Err(reason) => {
                                log::error!("❌ Student count fetch failed: {}", reason);
                                message.show.emit(Message::error(reason));
                                state.dispatch(MonitorAction::SessionLoaded {
                                    session,
                                    student_count: "0".to_string(),
                                });
                            }
                        }
                    }
                }
            });
        })
    };

    // Initial fetches plus the poll. The interval handle lives in the
    // effect; dropping it on cleanup cancels the poll, so no tick can
    // fire after teardown.
    {
        let fetch_current = fetch_current.clone();
        let state = state.clone();
        use_effect_with((*identity).clone(), move |user: &Option<LocalUserData>| {
            let mut poll = None;
            if let Some(user) = user.clone() {
                fetch_current.emit(());

                let state = state.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    // the shortcut is non-critical; failures stay silent
                    if let Ok(recent) = get_most_recent_attendance(&user.uni_id).await {
                        state.dispatch(MonitorAction::RecentLoaded {
                            attendance_id: recent.attendance_id,
                        });
                    }
                });

                log::info!("⏰ Polling ongoing attendance every {} s", ATTENDANCE_POLL_INTERVAL_MS / 1000);
                poll = Some(Interval::new(ATTENDANCE_POLL_INTERVAL_MS, move || {
                    fetch_current.emit(());
                }));
            }
            move || drop(poll)
        });
    }

    let set_student_code = {
        let state = state.clone();
        Callback::from(move |value: String| state.dispatch(MonitorAction::SetStudentCode(value)))
    };
    let set_first_name = {
        let state = state.clone();
        Callback::from(move |value: String| state.dispatch(MonitorAction::SetFirstName(value)))
    };
    let set_last_name = {
        let state = state.clone();
        Callback::from(move |value: String| state.dispatch(MonitorAction::SetLastName(value)))
    };
    let set_workplace_id = {
        let state = state.clone();
        Callback::from(move |value: String| state.dispatch(MonitorAction::SetWorkplaceId(value)))
    };

    let submit_check_in = {
        let state = state.clone();
        let message = message.clone();
        Callback::from(move |_| {
            if !state.can_submit() {
                return;
            }
            match build_attendance_check(&state) {
                Err(reason) => {
                    // rejected before any network call; still counts as an
                    // attempt, so the code and workplace inputs reset
                    message.show.emit(Message::error(reason));
                    state.dispatch(MonitorAction::SubmitSettled);
                }
                Ok(check) => {
                    state.dispatch(MonitorAction::SubmitStarted);
                    let state = state.clone();
                    let message = message.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        match add_attendance_check(&check).await {
                            Ok(()) => message.show.emit(
                                Message::success("attendance-check-add-success")
                                    .with_detail(check.student_code.clone()),
                            ),
                            Err(reason) => message.show.emit(Message::error(reason)),
                        }
                        state.dispatch(MonitorAction::SubmitSettled);
                    });
                }
            }
        })
    };

    UseAttendanceMonitorHandle {
        state,
        message,
        set_student_code,
        set_first_name,
        set_last_name,
        set_workplace_id,
        refresh: fetch_current,
        submit_check_in,
    }
}

// These drive a real browser timer, so they run in a browser only.
#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn the_poll_ticks_at_its_configured_period() {
        let ticks = Rc::new(Cell::new(0u32));
        let poll = {
            let ticks = ticks.clone();
            Interval::new(ATTENDANCE_POLL_INTERVAL_MS, move || {
                ticks.set(ticks.get() + 1)
            })
        };

        // no tick before the first period has elapsed
        TimeoutFuture::new(ATTENDANCE_POLL_INTERVAL_MS / 2).await;
        assert_eq!(ticks.get(), 0);

        // exactly one tick between the first and second period
        TimeoutFuture::new(ATTENDANCE_POLL_INTERVAL_MS).await;
        assert_eq!(ticks.get(), 1);

        drop(poll);
    }

    // A short period keeps the test fast; the cancellation semantics do
    // not depend on the period length.
    #[wasm_bindgen_test]
    async fn a_dropped_poll_handle_stops_further_ticks() {
        let ticks = Rc::new(Cell::new(0u32));
        let poll = {
            let ticks = ticks.clone();
            Interval::new(50, move || ticks.set(ticks.get() + 1))
        };

        TimeoutFuture::new(175).await;
        let seen = ticks.get();
        assert!(seen >= 2);

        // the effect cleanup drops the handle exactly like this
        drop(poll);
        TimeoutFuture::new(200).await;
        assert_eq!(ticks.get(), seen);
    }
}
