//! Media Admin Section
//!
//! Gallery image table plus the upload form. Selecting a file renders
//! a local data-URL preview immediately; the actual upload happens on
//! submit as a multipart request.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::{DeleteConfirmButton, Notifier};
use crate::context::AppContext;
use crate::format::image_src;
use crate::store::{use_app_store, AppStateStoreFields};

/// Media type options for the upload form
const MEDIA_TYPES: &[(&str, &str)] = &[
    ("winner", "Winner Photo"),
    ("event", "Event Photo"),
];

#[component]
pub fn MediaSection() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let notifier = use_context::<Notifier>().expect("Notifier should be provided");

    let (media_type, set_media_type) = signal(String::from("winner"));
    let (event_name, set_event_name) = signal(String::new());
    let (caption, set_caption) = signal(String::new());
    let (selected_file, set_selected_file) = signal(Option::<web_sys::File>::None);
    let (preview_src, set_preview_src) = signal(Option::<String>::None);
    let (input_version, set_input_version) = signal(0u32);

    // Read the first selected file as a data URL for the local preview.
    // No upload happens here.
    let on_file_change = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
        let file = input.files().and_then(|files| files.get(0));
        set_selected_file.set(file.clone());

        let Some(file) = file else {
            set_preview_src.set(None);
            return;
        };

        let reader = web_sys::FileReader::new().unwrap();
        let reader_for_load = reader.clone();
        let onload = Closure::<dyn FnMut()>::wrap(Box::new(move || {
            if let Some(data_url) = reader_for_load.result().ok().and_then(|v| v.as_string()) {
                set_preview_src.set(Some(data_url));
            }
        }));
        reader.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();
        let _ = reader.read_as_data_url(&file);
    };

    let upload = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(file) = selected_file.get() else {
            return;
        };

        let form = web_sys::FormData::new().unwrap();
        let _ = form.append_with_str("media_type", &media_type.get());
        let _ = form.append_with_str("event_name", &event_name.get());
        let _ = form.append_with_str("caption", &caption.get());
        let _ = form.append_with_blob("image", &file);

        spawn_local(async move {
            match api::upload_media(form).await {
                Ok(()) => {
                    notifier.success("Image uploaded successfully!");
                    set_media_type.set(String::from("winner"));
                    set_event_name.set(String::new());
                    set_caption.set(String::new());
                    set_selected_file.set(None);
                    set_preview_src.set(None);
                    // Remount the file input so its selection clears too
                    set_input_version.update(|v| *v += 1);
                    ctx.reload();
                }
                Err(_) => notifier.error("Error uploading image"),
            }
        });
    };

    let delete_media = move |id: u32| {
        spawn_local(async move {
            match api::delete_media(id).await {
                Ok(()) => {
                    notifier.success("Image deleted!");
                    ctx.reload();
                }
                Err(_) => notifier.error("Error deleting image"),
            }
        });
    };

    view! {
        <div class="section-header">
            <h2>"Media Gallery"</h2>
        </div>

        <form class="admin-form" on:submit=upload>
            <select
                prop:value=move || media_type.get()
                on:change=move |ev| set_media_type.set(event_target_value(&ev))
            >
                {MEDIA_TYPES.iter().map(|(value, label)| {
                    view! { <option value={*value}>{*label}</option> }
                }).collect_view()}
            </select>
            <input
                type="text"
                placeholder="Event name (optional)"
                prop:value=move || event_name.get()
                on:input=move |ev| set_event_name.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Caption (optional)"
                prop:value=move || caption.get()
                on:input=move |ev| set_caption.set(event_target_value(&ev))
            />
            {move || {
                let _ = input_version.get();
                view! {
                    <input type="file" accept="image/*" on:change=on_file_change />
                }
            }}
            {move || preview_src.get().map(|src| view! {
                <div class="image-preview">
                    <img src=src alt="Preview" />
                </div>
            })}
            <button type="submit">"Upload Image"</button>
        </form>

        <table class="admin-table">
            <thead>
                <tr>
                    <th>"Type"</th>
                    <th>"Event"</th>
                    <th>"Caption"</th>
                    <th>"Preview"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || store.media().get()
                    key=|item| item.id
                    children=move |item| {
                        let id = item.id;
                        let event = item.event_name.clone().unwrap_or_else(|| "N/A".to_string());
                        let item_caption = item.caption.clone().filter(|c| !c.is_empty()).unwrap_or_else(|| "-".to_string());
                        view! {
                            <tr>
                                <td>{item.media_type.clone()}</td>
                                <td>{event}</td>
                                <td>{item_caption}</td>
                                <td>
                                    <img class="media-thumb" src=image_src(&item.image_path) />
                                </td>
                                <td>
                                    <div class="action-btns">
                                        <DeleteConfirmButton
                                            button_class="btn-icon btn-delete"
                                            on_confirm=Callback::new(move |_| delete_media(id))
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
