use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::app::Route;
use crate::hooks::use_attendance_monitor;
use crate::state::MessageSeverity;
use crate::utils::i18n::t;

#[derive(Properties, PartialEq)]
pub struct HomeViewProps {
    pub lang: String,
    pub navigate: Callback<Route>,
}

/// Home screen: the ongoing attendance with its live student count,
/// plus the staff check-in form.
#[function_component(HomeView)]
pub fn home_view(props: &HomeViewProps) -> Html {
    let lang = props.lang.clone();

    let on_missing_identity = {
        let navigate = props.navigate.clone();
        Callback::from(move |_| navigate.emit(Route::Entry { notice: None }))
    };
    let monitor = use_attendance_monitor(on_missing_identity);
    let state = &*monitor.state;

    let banner = if let Some(message) = monitor.message.current() {
        let class = match message.severity {
            MessageSeverity::Error => "message message-error",
            MessageSeverity::Info => "message message-info",
            MessageSeverity::Success => "message message-success",
        };
        let detail = message.detail.clone().unwrap_or_default();
        html! { <p class={class}>{ t(&message.text, &lang) }{ detail }</p> }
    } else if let Some(key) = &state.status_key {
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

    let on_add_student = {
        let submit = monitor.submit_check_in.clone();
        Callback::from(move |_: MouseEvent| submit.emit(()))
    };
    let on_refresh = {
        let refresh = monitor.refresh.clone();
        Callback::from(move |_: MouseEvent| refresh.emit(()))
    };

    let session_details = state.current.as_ref().map(|session| {
        let details_route = Route::AttendanceDetails {
            attendance_id: session.attendance_id.clone(),
        };
        let navigate = props.navigate.clone();
        html! {
            <div class="data-fields">
                <p>{ t("course-name", &lang) }{ ": " }{ &session.course_name }</p>
                <p>{ t("course-code", &lang) }{ ": " }{ &session.course_code }</p>
                <p>{ t("no-of-students", &lang) }{ ": " }{ &state.student_count }</p>
                <a class="link" onclick={Callback::from(move |_: MouseEvent| navigate.emit(details_route.clone()))}>
                    { t("view-attendance-details", &lang) }
                </a>
            </div>
        }
    });

    let check_in_form = state.current.as_ref().map(|_| {
        html! {
            <div class="check-in-form">
                <input
                    type="text"
                    class="text-box"
                    placeholder={format!("{} (123456ABCD)", t("student-code", &lang))}
                    value={state.student_code.clone()}
                    oninput={oninput(&monitor.set_student_code)}
                />
                <input
                    type="text"
                    class="text-box"
                    placeholder={t("first-name", &lang)}
                    value={state.first_name.clone()}
                    oninput={oninput(&monitor.set_first_name)}
                />
                <input
                    type="text"
                    class="text-box"
                    placeholder={t("last-name", &lang)}
                    value={state.last_name.clone()}
                    oninput={oninput(&monitor.set_last_name)}
                />
                <input
                    type="text"
                    class="text-box"
                    placeholder={format!("{} (xxxxxx)", t("workplace-id", &lang))}
                    value={state.workplace_id.clone()}
                    oninput={oninput(&monitor.set_workplace_id)}
                />
                <button
                    class="btn-primary"
                    onclick={on_add_student}
                    disabled={!state.can_submit()}
                >
                    { t("add-student", &lang) }
                </button>
            </div>
        }
    });

    let on_view_recent = {
        let navigate = props.navigate.clone();
        let recent = state.recent_attendance_id.clone();
        Callback::from(move |_: MouseEvent| match &recent {
            Some(id) => navigate.emit(Route::AttendanceDetails {
                attendance_id: id.clone(),
            }),
            None => navigate.emit(Route::Attendances),
        })
    };
    let on_settings = {
        let navigate = props.navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(Route::Settings))
    };

    html! {
        <div class="screen home-screen">
            <div class="card">
                <div class="card-header">
                    <h2>{ t("ongoing-attendance", &lang) }</h2>
                    <a class="link" onclick={on_refresh} title={t("refresh", &lang)}>{ "⟳" }</a>
                </div>
                { session_details }
                { banner }
                { check_in_form }
            </div>
            <nav class="quick-nav">
                <a class="link" onclick={on_view_recent}>{ t("view-recent-attendance", &lang) }</a>
                <a class="link" onclick={on_settings}>{ t("settings", &lang) }</a>
            </nav>
        </div>
    }
}
