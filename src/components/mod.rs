//! UI Components
//!
//! Reusable Leptos components for the dashboard and admin panel.

mod delete_confirm_button;
mod departments_section;
mod empty_state;
mod gallery;
mod login_form;
mod media_section;
mod notifications;
mod point_table;
mod results_grid;
mod results_section;
mod schedule_grid;
mod tab_bar;

pub use delete_confirm_button::DeleteConfirmButton;
pub use departments_section::DepartmentsSection;
pub use empty_state::EmptyState;
pub use gallery::{Gallery, GalleryKind};
pub use login_form::LoginPage;
pub use media_section::MediaSection;
pub use notifications::{Notifications, Notifier};
pub use point_table::PointTable;
pub use results_grid::ResultsGrid;
pub use results_section::ResultsSection;
pub use schedule_grid::ScheduleGrid;
pub use tab_bar::{TabBar, DASHBOARD_TABS};
