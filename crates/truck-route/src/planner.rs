//! Route planner adapter: bounded-time oracle call → [`Route`].

use std::time::Duration;

use tracing::{debug, info};
use truck_core::GeoPoint;

use crate::{Route, RouteError, RouteOracle, RouteResult};

/// Ask `oracle` for a route from `from` to `to`, giving up after `timeout`.
///
/// On success the returned [`Route`] starts at `from`, ends at `to`, and has
/// its cursor at the first segment.  This function touches no truck state;
/// the caller decides what a success or failure means for the task.
pub async fn plan_route<O>(
    oracle:  &O,
    from:    GeoPoint,
    to:      GeoPoint,
    timeout: Duration,
) -> RouteResult<Route>
where
    O: RouteOracle + ?Sized,
{
    debug!(%from, %to, "requesting route");

    let answer = match tokio::time::timeout(timeout, oracle.route(from, to)).await {
        Ok(result) => result?,
        Err(_) => {
            return Err(RouteError::Timeout { after_ms: timeout.as_millis() as u64 });
        }
    };

    let route = Route::from_oracle(from, to, &answer);
    info!(
        points      = answer.points.len(),
        length_m    = answer.length_m,
        travel_secs = answer.travel_secs,
        "route found"
    );
    Ok(route)
}
