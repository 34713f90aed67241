//! The trip planner's route table
//!
//! | pattern          | name         | page             | props | auth |
//! |------------------|--------------|------------------|-------|------|
//! | `/`              |              | `Homepage`       |       |      |
//! | `/detail/:id`    | `Detail`     | `Detailpage`     | yes   |      |
//! | `/my-trips`      | `MyTrips`    | `Mytripspage`    |       | yes  |
//! | `/create-trip`   | `CreateTrip` | `Createtrippage` |       | yes  |
//! | `/edit-trip/:id` | `EditTrip`   | `Edittrippage`   | yes   | yes  |

use crate::{AuthGuard, Navigator, Route, RouteError, Router};

/// Local storage key holding the authentication token
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// Page identifiers
pub mod pages {
    pub const HOME: &str = "Homepage";
    pub const DETAIL: &str = "Detailpage";
    pub const MY_TRIPS: &str = "Mytripspage";
    pub const CREATE_TRIP: &str = "Createtrippage";
    pub const EDIT_TRIP: &str = "Edittrippage";
}

/// The five trip planner routes
pub fn trip_routes() -> Result<Vec<Route>, RouteError> {
    Ok(vec![
        Route::new("/", pages::HOME)?,
        Route::new("/detail/:id", pages::DETAIL)?
            .with_name("Detail")
            .with_props(),
        Route::new("/my-trips", pages::MY_TRIPS)?
            .with_name("MyTrips")
            .with_auth_required(),
        Route::new("/create-trip", pages::CREATE_TRIP)?
            .with_name("CreateTrip")
            .with_auth_required(),
        Route::new("/edit-trip/:id", pages::EDIT_TRIP)?
            .with_name("EditTrip")
            .with_props()
            .with_auth_required(),
    ])
}

/// Route table for the trip planner (case-insensitive)
pub fn trip_router() -> Result<Router, RouteError> {
    Router::with_case_insensitive(true).with_routes(trip_routes()?)
}

/// Trip planner navigator guarded by [`AuthGuard`] redirecting to `/`
///
/// ```
/// use triproute_router::trips::trip_navigator;
/// use triproute_router::AuthContext;
///
/// let navigator = trip_navigator().unwrap();
/// let nav = navigator.resolve("/create-trip", &AuthContext::anonymous()).unwrap();
/// assert_eq!(nav.location.path, "/");
/// ```
pub fn trip_navigator() -> Result<Navigator, RouteError> {
    Ok(Navigator::new(trip_router()?).with_guard(AuthGuard::new()))
}
