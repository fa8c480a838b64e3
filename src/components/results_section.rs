//! Results Admin Section
//!
//! Declared-results table plus the add-result form. The department
//! dropdown reads the store, so it repopulates with every reload
//! cycle. The backend recomputes points and ranks on every mutation.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, NewResult};
use crate::components::{DeleteConfirmButton, Notifier};
use crate::context::AppContext;
use crate::format::{event_type_label_emoji, position_label_short};
use crate::store::{use_app_store, AppStateStoreFields};

/// Event type options for the add form
const EVENT_TYPES: &[(&str, &str)] = &[
    ("mens", "Men's"),
    ("womens", "Women's"),
    ("team", "Team"),
    ("individual", "Individual"),
];

/// Podium options for the add form
const POSITIONS: &[(&str, &str)] = &[
    ("1", "1st Place"),
    ("2", "2nd Place"),
    ("3", "3rd Place"),
];

#[component]
pub fn ResultsSection() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let notifier = use_context::<Notifier>().expect("Notifier should be provided");

    let (event_name, set_event_name) = signal(String::new());
    let (event_type, set_event_type) = signal(String::from("mens"));
    let (department_id, set_department_id) = signal(String::new());
    let (position, set_position) = signal(String::from("1"));
    let (points, set_points) = signal(String::new());

    let add_result = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = event_name.get();
        let selected_type = event_type.get();
        let (Ok(dept_id), Ok(pos), Ok(awarded)) = (
            department_id.get().parse::<u32>(),
            position.get().parse::<u32>(),
            points.get().parse::<i64>(),
        ) else {
            return;
        };
        if name.is_empty() {
            return;
        }

        spawn_local(async move {
            let args = NewResult {
                event_name: &name,
                event_type: &selected_type,
                department_id: dept_id,
                position: pos,
                points_awarded: awarded,
            };
            match api::create_result(&args).await {
                Ok(()) => {
                    notifier.success("Result added successfully! Point table updated.");
                    set_event_name.set(String::new());
                    set_event_type.set(String::from("mens"));
                    set_position.set(String::from("1"));
                    set_points.set(String::new());
                    ctx.reload();
                }
                Err(_) => notifier.error("Error adding result"),
            }
        });
    };

    let delete_result = move |id: u32| {
        spawn_local(async move {
            match api::delete_result(id).await {
                Ok(()) => {
                    notifier.success("Result deleted! Point table updated.");
                    ctx.reload();
                }
                Err(_) => notifier.error("Error deleting result"),
            }
        });
    };

    view! {
        <div class="section-header">
            <h2>"Results"</h2>
        </div>

        <form class="admin-form" on:submit=add_result>
            <input
                type="text"
                placeholder="Event name"
                prop:value=move || event_name.get()
                on:input=move |ev| set_event_name.set(event_target_value(&ev))
            />
            <select
                prop:value=move || event_type.get()
                on:change=move |ev| set_event_type.set(event_target_value(&ev))
            >
                {EVENT_TYPES.iter().map(|(value, label)| {
                    view! { <option value={*value}>{*label}</option> }
                }).collect_view()}
            </select>
            <select
                prop:value=move || department_id.get()
                on:change=move |ev| set_department_id.set(event_target_value(&ev))
            >
                <option value="">"Select department"</option>
                <For
                    each=move || store.departments().get()
                    key=|dept| dept.id
                    children=|dept| {
                        view! { <option value=dept.id.to_string()>{dept.name.clone()}</option> }
                    }
                />
            </select>
            <select
                prop:value=move || position.get()
                on:change=move |ev| set_position.set(event_target_value(&ev))
            >
                {POSITIONS.iter().map(|(value, label)| {
                    view! { <option value={*value}>{*label}</option> }
                }).collect_view()}
            </select>
            <input
                type="number"
                placeholder="Points awarded"
                prop:value=move || points.get()
                on:input=move |ev| set_points.set(event_target_value(&ev))
            />
            <button type="submit">"Add Result"</button>
        </form>

        <table class="admin-table">
            <thead>
                <tr>
                    <th>"Event"</th>
                    <th>"Type"</th>
                    <th>"Department"</th>
                    <th>"Position"</th>
                    <th>"Points"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || store.results().get()
                    key=|result| result.id
                    children=move |result| {
                        let id = result.id;
                        view! {
                            <tr>
                                <td>{result.event_name.clone()}</td>
                                <td>
                                    <strong class="event-type">
                                        {event_type_label_emoji(&result.event_type)}
                                    </strong>
                                </td>
                                <td>{result.department_name.clone()}</td>
                                <td>{position_label_short(result.position)}</td>
                                <td>{result.points_awarded}</td>
                                <td>
                                    <div class="action-btns">
                                        <DeleteConfirmButton
                                            button_class="btn-icon btn-delete"
                                            on_confirm=Callback::new(move |_| delete_result(id))
                                        />
                                    </div>
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
