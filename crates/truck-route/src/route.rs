//! `Route`: a planned path plus the cursor that tracks the truck along it.

use truck_core::GeoPoint;

use crate::OracleRoute;

/// A planned drive: ordered waypoints, per-segment durations, and a cursor.
///
/// # Invariants
///
/// - `path.len() == segment_secs.len() + 1`, and there is at least one
///   segment.  Both constructors enforce this, and the fields are private.
/// - `current_segment` is always a valid index into `segment_secs`.
/// - The cursor only moves forward.  A new dispatch builds a new `Route`
///   rather than rewinding this one.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    path:            Vec<GeoPoint>,
    segment_secs:    Vec<f64>,
    current_segment: usize,
    completed_secs:  f64,
}

impl Route {
    /// Build a route from an oracle answer.
    ///
    /// The path is `[from] + oracle points + [to]`.  Every segment's duration
    /// is its great-circle length divided by the route's single average speed,
    /// so the oracle's own per-leg timing (if any) is not used.  A summary
    /// without a usable speed gives zero-length durations, i.e. the truck is
    /// placed at the destination on the next position update.
    pub fn from_oracle(from: GeoPoint, to: GeoPoint, answer: &OracleRoute) -> Self {
        let mut path = Vec::with_capacity(answer.points.len() + 2);
        path.push(from);
        path.extend_from_slice(&answer.points);
        path.push(to);

        let speed = answer.average_speed_mps();
        let segment_secs = path
            .windows(2)
            .map(|pair| match speed {
                Some(mps) => pair[0].distance_m(pair[1]) / mps,
                None => 0.0,
            })
            .collect();

        Self {
            path,
            segment_secs,
            current_segment: 0,
            completed_secs:  0.0,
        }
    }

    /// Build a route from explicit waypoints and durations.
    ///
    /// Returns `None` unless there is exactly one duration per consecutive
    /// waypoint pair and at least one segment.
    pub fn from_parts(path: Vec<GeoPoint>, segment_secs: Vec<f64>) -> Option<Self> {
        if segment_secs.is_empty() || path.len() != segment_secs.len() + 1 {
            return None;
        }
        Some(Self {
            path,
            segment_secs,
            current_segment: 0,
            completed_secs:  0.0,
        })
    }

    /// Advance the cursor to `time_on_task_secs` and return the interpolated
    /// position.
    ///
    /// The cursor skips every segment that ends strictly before
    /// `time_on_task_secs`, but never past the last one, so overshooting the
    /// total route duration pins the truck to the destination.
    pub fn update_position(&mut self, time_on_task_secs: f64) -> GeoPoint {
        let last = self.segment_secs.len() - 1;
        while self.current_segment < last
            && self.completed_secs + self.segment_secs[self.current_segment] < time_on_task_secs
        {
            self.completed_secs += self.segment_secs[self.current_segment];
            self.current_segment += 1;
        }

        let i = self.current_segment;
        let duration = self.segment_secs[i];
        let fraction = if duration > 0.0 {
            ((time_on_task_secs - self.completed_secs) / duration).clamp(0.0, 1.0)
        } else {
            1.0
        };

        if fraction >= 1.0 {
            return self.path[i + 1];
        }
        self.path[i].lerp(self.path[i + 1], fraction)
    }

    #[inline]
    pub fn path(&self) -> &[GeoPoint] {
        &self.path
    }

    #[inline]
    pub fn segment_secs(&self) -> &[f64] {
        &self.segment_secs
    }

    /// Index of the segment the truck currently occupies.
    #[inline]
    pub fn current_segment(&self) -> usize {
        self.current_segment
    }

    /// Summed duration of all segments before `current_segment`.
    #[inline]
    pub fn completed_secs(&self) -> f64 {
        self.completed_secs
    }

    pub fn total_secs(&self) -> f64 {
        self.segment_secs.iter().sum()
    }

    #[inline]
    pub fn destination(&self) -> GeoPoint {
        self.path[self.path.len() - 1]
    }
}
