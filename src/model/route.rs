#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Diagnosis,
    Voice,
    Patients,
    Reports,
    Appointments,
    Analytics,
    NotFound(String),
}

impl Route {
    /// Exact match against the declared paths; anything else is the catch-all.
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" => Route::Dashboard,
            "/diagnosis" => Route::Diagnosis,
            "/voice" => Route::Voice,
            "/patients" => Route::Patients,
            "/reports" => Route::Reports,
            "/appointments" => Route::Appointments,
            "/analytics" => Route::Analytics,
            other => Route::NotFound(other.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Dashboard => "/",
            Route::Diagnosis => "/diagnosis",
            Route::Voice => "/voice",
            Route::Patients => "/patients",
            Route::Reports => "/reports",
            Route::Appointments => "/appointments",
            Route::Analytics => "/analytics",
            Route::NotFound(path) => path,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Route::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DECLARED: [Route; 7] = [
        Route::Dashboard,
        Route::Diagnosis,
        Route::Voice,
        Route::Patients,
        Route::Reports,
        Route::Appointments,
        Route::Analytics,
    ];

    #[test]
    fn declared_routes_round_trip_through_their_paths() {
        for route in DECLARED {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        for path in ["/profile", "/diagnosis/", "/Patients", "", "/settings/account"] {
            let route = Route::from_path(path);
            assert_eq!(route, Route::NotFound(path.to_string()));
            assert!(route.is_not_found());
            assert_eq!(route.path(), path);
        }
    }
}
