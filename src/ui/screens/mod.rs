mod calendar;
mod clients;
mod dashboard;
mod not_found;
mod reports;
mod settings;

pub use calendar::render_calendar;
pub use clients::render_clients;
pub use dashboard::{render_dashboard, DashboardStats};
pub use not_found::render_not_found;
pub use reports::render_reports;
pub use settings::render_settings;
