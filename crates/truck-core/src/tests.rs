//! Unit tests for truck-core primitives.

#[cfg(test)]
mod geo {
    use crate::{GeoPoint, has_arrived, to_radians};

    #[test]
    fn radians_conversion() {
        assert!((to_radians(180.0) - std::f64::consts::PI).abs() < 1e-12);
        assert!((to_radians(-90.0) + std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert_eq!(to_radians(0.0), 0.0);
    }

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(47.644702, -122.130137);
        assert!(p.distance_m(p) < 1e-6);
    }

    #[test]
    fn one_degree_of_latitude() {
        // ~1 degree of latitude ≈ 111.2 km
        let a = GeoPoint::new(47.0, -122.0);
        let b = GeoPoint::new(48.0, -122.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 50.0, "got {d}");
    }

    #[test]
    fn distance_is_symmetric() {
        let base = GeoPoint::new(47.644702, -122.130137);
        let park = GeoPoint::new(47.645892, -122.336954);
        let there = base.distance_m(park);
        let back = park.distance_m(base);
        assert!((there - back).abs() < 1e-6);
        // Redmond → Gasworks is roughly 15.5 km as the crow flies.
        assert!((15_000.0..16_000.0).contains(&there), "got {there}");
    }

    #[test]
    fn arrival_radius_is_strict() {
        let dest = GeoPoint::new(0.0, 0.0);
        // 1e-4 degrees of latitude ≈ 11.1 m
        assert!(!has_arrived(GeoPoint::new(1e-4, 0.0), dest));
        // 5e-5 degrees ≈ 5.6 m
        assert!(has_arrived(GeoPoint::new(5e-5, 0.0), dest));
        assert!(has_arrived(dest, dest));
    }

    #[test]
    fn lerp_midpoint() {
        let a = GeoPoint::new(0.0, 1.0);
        let b = GeoPoint::new(0.0, 2.0);
        assert_eq!(a.lerp(b, 0.5), GeoPoint::new(0.0, 1.5));
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }
}

#[cfg(test)]
mod state {
    use crate::{ContentsState, FanState, TaskState};

    #[test]
    fn moving_states() {
        assert!(TaskState::Enroute.is_moving());
        assert!(TaskState::Returning.is_moving());
        assert!(!TaskState::Ready.is_moving());
        assert!(!TaskState::Delivering.is_moving());
    }

    #[test]
    fn display_is_lowercase() {
        assert_eq!(TaskState::Enroute.to_string(), "enroute");
        assert_eq!(ContentsState::Melting.to_string(), "melting");
        assert_eq!(FanState::Failed.to_string(), "failed");
    }

    #[test]
    fn defaults_match_startup_state() {
        assert_eq!(TaskState::default(), TaskState::Ready);
        assert_eq!(ContentsState::default(), ContentsState::Full);
        assert_eq!(FanState::default(), FanState::On);
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Tick};

    #[test]
    fn clock_elapsed() {
        let mut clock = SimClock::new(60);
        assert_eq!(clock.elapsed_secs(), 0);
        clock.advance();
        assert_eq!(clock.elapsed_secs(), 60);
        assert_eq!(clock.current_tick, Tick(1));
        assert_eq!(clock.interval_secs(), 60.0);
    }

    #[test]
    fn clock_dhm() {
        let mut clock = SimClock::new(60);
        // 25 hours and 1 minute
        for _ in 0..(25 * 60 + 1) {
            clock.advance();
        }
        assert_eq!(clock.elapsed_dhm(), (1, 1, 1));
        assert_eq!(clock.to_string(), "T1501 (day 1 01:01)");
    }
}

#[cfg(test)]
mod config {
    use crate::{SimConfig, TruckError};

    #[test]
    fn defaults_are_valid() {
        let cfg = SimConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.optimal_temperature_c, -5.0);
        assert_eq!(cfg.route_timeout_ms, 10_000);
        assert_eq!(cfg.truck_id(), "Truck number 1");
    }

    #[test]
    fn zero_interval_rejected() {
        let cfg = SimConfig { tick_interval_secs: 0, ..SimConfig::default() };
        assert!(matches!(cfg.validate(), Err(TruckError::Config(_))));
    }

    #[test]
    fn nan_set_point_rejected() {
        let cfg = SimConfig { optimal_temperature_c: f64::NAN, ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn make_clock_uses_interval() {
        let cfg = SimConfig { tick_interval_secs: 30, ..SimConfig::default() };
        assert_eq!(cfg.make_clock().tick_interval_secs, 30);
    }
}

#[cfg(test)]
mod sites {
    use crate::{GeoPoint, Sites, TruckError};

    #[test]
    fn customer_lookup() {
        let sites = Sites::seattle();
        assert_eq!(sites.customers.len(), 10);
        assert_eq!(sites.customer(0).unwrap(), GeoPoint::new(47.645892, -122.336954));
        assert_eq!(sites.customer(9).unwrap(), GeoPoint::new(47.544120, -122.221673));
    }

    #[test]
    fn out_of_range_customers() {
        let sites = Sites::seattle();
        assert!(matches!(sites.customer(10), Err(TruckError::CustomerNotFound(10))));
        assert!(matches!(sites.customer(-1), Err(TruckError::CustomerNotFound(-1))));
    }
}

#[cfg(test)]
mod rng {
    use proptest::prelude::*;

    use crate::{Dice, SimRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.roll(6.0), r2.roll(6.0));
        }
    }

    #[test]
    fn different_seeds_differ() {
        let mut r0 = SimRng::new(1);
        let mut r1 = SimRng::new(2);
        assert_ne!(r0.roll(1.0), r1.roll(1.0));
    }

    proptest! {
        #[test]
        fn roll_in_bounds(seed in any::<u64>(), max in 0.001f64..1_000.0) {
            let mut rng = SimRng::new(seed);
            for _ in 0..32 {
                let v = rng.roll(max);
                prop_assert!((0.0..max).contains(&v));
            }
        }
    }
}
