//! Departments Admin Section
//!
//! Standings table with per-row delete plus the add-department form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, NewDepartment};
use crate::components::{DeleteConfirmButton, Notifier};
use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn DepartmentsSection() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let notifier = use_context::<Notifier>().expect("Notifier should be provided");

    let (new_name, set_new_name) = signal(String::new());

    let add_department = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get();
        if name.is_empty() {
            return;
        }

        spawn_local(async move {
            match api::create_department(&NewDepartment { name: &name }).await {
                Ok(()) => {
                    notifier.success("Department added successfully!");
                    set_new_name.set(String::new());
                    ctx.reload();
                }
                Err(_) => notifier.error("Error adding department"),
            }
        });
    };

    let delete_department = move |id: u32| {
        spawn_local(async move {
            match api::delete_department(id).await {
                Ok(()) => {
                    notifier.success("Department deleted!");
                    ctx.reload();
                }
                Err(_) => notifier.error("Error deleting department"),
            }
        });
    };

    view! {
        <div class="section-header">
            <h2>"Departments"</h2>
        </div>

        <form class="admin-form" on:submit=add_department>
            <input
                type="text"
                placeholder="Department name"
                prop:value=move || new_name.get()
                on:input=move |ev| set_new_name.set(event_target_value(&ev))
            />
            <button type="submit">"Add Department"</button>
        </form>

        <table class="admin-table">
            <thead>
                <tr>
                    <th>"Rank"</th>
                    <th>"Name"</th>
                    <th>"Points"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || store.departments().get()
                    key=|dept| dept.id
                    children=move |dept| {
                        let id = dept.id;
                        view! {
                            <tr>
                                <td>{format!("#{}", dept.rank)}</td>
                                <td>{dept.name.clone()}</td>
                                <td>{dept.total_points}</td>
                                <td>
                                    <div class="action-btns">
                                        <DeleteConfirmButton
                                            button_class="btn-icon btn-delete"
                                            on_confirm=Callback::new(move |_| delete_department(id))
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
