//! Navigation paths.
//!
//! The console keeps the original deep-link path set so operators can
//! jump between screens with the goto prompt. Unknown paths land on the
//! not-found screen.

/// A recognized navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Bookings,
    Calendar,
    Clients,
    Reports,
    Settings,
}

impl Route {
    pub const ALL: [Route; 6] = [
        Route::Dashboard,
        Route::Bookings,
        Route::Calendar,
        Route::Clients,
        Route::Reports,
        Route::Settings,
    ];

    /// Parse a path as entered into the goto prompt.
    ///
    /// A leading slash is optional and trailing slashes are ignored, so
    /// `bookings`, `/bookings`, and `/bookings/` all resolve.
    pub fn parse(path: &str) -> Option<Route> {
        let normalized = path.trim().trim_start_matches('/').trim_end_matches('/');
        match normalized.to_ascii_lowercase().as_str() {
            "" => Some(Route::Dashboard),
            "bookings" => Some(Route::Bookings),
            "calendar" => Some(Route::Calendar),
            "clients" => Some(Route::Clients),
            "reports" => Some(Route::Reports),
            "settings" => Some(Route::Settings),
            _ => None,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Dashboard => "/",
            Route::Bookings => "/bookings",
            Route::Calendar => "/calendar",
            Route::Clients => "/clients",
            Route::Reports => "/reports",
            Route::Settings => "/settings",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Bookings => "Bookings",
            Route::Calendar => "Calendar",
            Route::Clients => "Clients",
            Route::Reports => "Reports",
            Route::Settings => "Settings",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_round_trips_through_its_path() {
        for route in Route::ALL {
            assert_eq!(Route::parse(route.path()), Some(route));
        }
    }

    #[test]
    fn parse_tolerates_missing_and_trailing_slashes() {
        assert_eq!(Route::parse("clients"), Some(Route::Clients));
        assert_eq!(Route::parse("/clients/"), Some(Route::Clients));
    }

    #[test]
    fn unknown_path_is_rejected() {
        assert_eq!(Route::parse("/invoices"), None);
    }
}
