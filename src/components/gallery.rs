//! Gallery Component
//!
//! Image grid for the winners and event galleries. The two sections
//! differ only in media filter, empty placeholder and caption
//! fallback, so one component covers both.

use leptos::prelude::*;

use crate::components::EmptyState;
use crate::format::image_src;
use crate::models::MediaItem;
use crate::store::{use_app_store, AppStateStoreFields};

#[derive(Clone, Copy, PartialEq)]
pub enum GalleryKind {
    Winners,
    Events,
}

impl GalleryKind {
    fn media_type(self) -> &'static str {
        match self {
            GalleryKind::Winners => "winner",
            GalleryKind::Events => "event",
        }
    }

    fn empty_icon(self) -> &'static str {
        match self {
            GalleryKind::Winners => "🏆",
            GalleryKind::Events => "📸",
        }
    }

    fn empty_message(self) -> &'static str {
        match self {
            GalleryKind::Winners => "No winners declared yet",
            GalleryKind::Events => "No photos uploaded yet",
        }
    }

    fn alt_fallback(self) -> &'static str {
        match self {
            GalleryKind::Winners => "Winner",
            GalleryKind::Events => "Event Photo",
        }
    }
}

/// Caption shown under a gallery image: caption, then event name,
/// then the per-kind fallback.
fn caption_text(item: &MediaItem, kind: GalleryKind) -> String {
    item.caption
        .clone()
        .filter(|c| !c.is_empty())
        .or_else(|| item.event_name.clone().filter(|n| !n.is_empty()))
        .unwrap_or_else(|| match kind {
            GalleryKind::Winners => String::new(),
            GalleryKind::Events => kind.alt_fallback().to_string(),
        })
}

#[component]
pub fn Gallery(kind: GalleryKind) -> impl IntoView {
    let store = use_app_store();
    let items = Memo::new(move |_| {
        store
            .media()
            .get()
            .into_iter()
            .filter(|m| m.media_type == kind.media_type())
            .collect::<Vec<_>>()
    });

    view! {
        <Show
            when=move || !items.get().is_empty()
            fallback=move || view! { <EmptyState icon=kind.empty_icon() message=kind.empty_message() /> }
        >
            <div class="gallery-grid">
                <For
                    each=move || items.get()
                    key=|item| item.id
                    children=move |item| {
                        let src = image_src(&item.image_path);
                        let alt = item
                            .caption
                            .clone()
                            .filter(|c| !c.is_empty())
                            .unwrap_or_else(|| kind.alt_fallback().to_string());
                        let caption = caption_text(&item, kind);
                        view! {
                            <div class="gallery-item">
                                <img src=src alt=alt />
                                <div class="gallery-caption">{caption}</div>
                            </div>
                        }
                    }
                />
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_media(caption: Option<&str>, event_name: Option<&str>) -> MediaItem {
        MediaItem {
            id: 1,
            media_type: "event".to_string(),
            event_name: event_name.map(str::to_string),
            caption: caption.map(str::to_string),
            image_path: "uploads/x.jpg".to_string(),
        }
    }

    #[test]
    fn test_caption_prefers_explicit_caption() {
        let item = make_media(Some("Podium moment"), Some("100m Sprint"));
        assert_eq!(caption_text(&item, GalleryKind::Winners), "Podium moment");
    }

    #[test]
    fn test_caption_falls_back_to_event_name() {
        let item = make_media(None, Some("100m Sprint"));
        assert_eq!(caption_text(&item, GalleryKind::Winners), "100m Sprint");
        // Empty caption counts as missing
        let item = make_media(Some(""), Some("100m Sprint"));
        assert_eq!(caption_text(&item, GalleryKind::Events), "100m Sprint");
    }

    #[test]
    fn test_caption_final_fallback_per_kind() {
        let item = make_media(None, None);
        assert_eq!(caption_text(&item, GalleryKind::Events), "Event Photo");
        assert_eq!(caption_text(&item, GalleryKind::Winners), "");
    }
}
