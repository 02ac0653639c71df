//! Unit tests for nav-guidance.
//!
//! Routes are laid out near the equator where 0.001° is roughly 111 m, far
//! outside the default 8 m proximity threshold.

#[cfg(test)]
mod helpers {
    use nav_core::{Coordinate, DistanceUnit, Timestamp};
    use nav_spatial::{OrientedSegment, RouteAnalyzer};

    use crate::{Instruction, InstructionSink};

    pub fn c(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon)
    }

    pub fn t(ms: u64) -> Timestamp {
        Timestamp::from_millis(ms)
    }

    pub const A: Coordinate = Coordinate { lat: 0.0, lon: 0.0 };
    pub const B: Coordinate = Coordinate { lat: 0.001, lon: 0.0 };
    pub const C: Coordinate = Coordinate { lat: 0.001, lon: 0.001 };

    /// North from A to B, then east from B to C.
    pub fn north_then_east() -> Vec<OrientedSegment> {
        RouteAnalyzer::new(DistanceUnit::Feet).analyze_coordinates(&[A, B, C])
    }

    #[derive(Default)]
    pub struct Recorder {
        pub instructions: Vec<Instruction>,
        pub distances: Vec<f64>,
        pub arrivals: usize,
    }

    impl InstructionSink for Recorder {
        fn on_instruction(&mut self, instruction: Instruction) {
            self.instructions.push(instruction);
        }

        fn on_distance_remaining(&mut self, distance: f64, _unit: DistanceUnit) {
            self.distances.push(distance);
        }

        fn on_arrived(&mut self) {
            self.arrivals += 1;
        }
    }
}

// ── Turn classification ──────────────────────────────────────────────────────

#[cfg(test)]
mod classify {
    use crate::{Instruction, classify_turn};

    #[test]
    fn right_left_straight() {
        assert_eq!(classify_turn(90.0, 0.0, 30.0), Instruction::TurnRight);
        assert_eq!(classify_turn(90.0, 180.0, 30.0), Instruction::TurnLeft);
        assert_eq!(classify_turn(90.0, 95.0, 30.0), Instruction::ContinueStraight);
    }

    #[test]
    fn deadband_is_inclusive() {
        assert_eq!(classify_turn(30.0, 0.0, 30.0), Instruction::ContinueStraight);
        assert_eq!(classify_turn(0.0, 30.0, 30.0), Instruction::ContinueStraight);
        assert_eq!(classify_turn(30.5, 0.0, 30.0), Instruction::TurnRight);
        assert_eq!(classify_turn(0.0, 30.5, 30.0), Instruction::TurnLeft);
    }

    #[test]
    fn wraps_across_north() {
        // Facing 350°, next leg at 10°: 20° to the right.
        assert_eq!(classify_turn(10.0, 350.0, 30.0), Instruction::ContinueStraight);
        // Facing 10°, next leg at 300°: 70° to the left.
        assert_eq!(classify_turn(300.0, 10.0, 30.0), Instruction::TurnLeft);
        // Facing 300°, next leg at 20°: 80° to the right.
        assert_eq!(classify_turn(20.0, 300.0, 30.0), Instruction::TurnRight);
    }

    #[test]
    fn about_face_counts_as_right() {
        assert_eq!(classify_turn(0.0, 180.0, 30.0), Instruction::TurnRight);
    }

    #[test]
    fn display_text() {
        assert_eq!(Instruction::TurnRight.to_string(), "turn right");
        assert_eq!(Instruction::TurnLeft.to_string(), "turn left");
        assert_eq!(Instruction::ContinueStraight.to_string(), "continue straight");
    }
}

// ── State machine ────────────────────────────────────────────────────────────

#[cfg(test)]
mod machine {
    use approx::assert_abs_diff_eq;
    use nav_core::{DistanceUnit, FEET_PER_METER};

    use super::helpers::{A, B, C, c, north_then_east, t};
    use crate::{GuidanceConfig, GuidanceError, GuidanceState, GuidanceStateMachine, Instruction};

    fn loaded() -> GuidanceStateMachine {
        let mut m = GuidanceStateMachine::default();
        m.load_route(north_then_east());
        m
    }

    #[test]
    fn idle_until_route_loaded() {
        let mut m = GuidanceStateMachine::default();
        assert_eq!(m.state(), GuidanceState::Idle);
        assert!(m.on_position_update(B, t(0)).is_none());
        assert_eq!(m.state(), GuidanceState::Idle);
    }

    #[test]
    fn load_starts_tracking_first_segment() {
        let m = loaded();
        assert_eq!(m.state(), GuidanceState::Tracking { segment: 0 });
        assert_eq!(m.current_segment().unwrap().end, B);
    }

    #[test]
    fn empty_route_is_already_arrived() {
        let mut m = GuidanceStateMachine::default();
        m.load_route(Vec::new());
        assert_eq!(m.state(), GuidanceState::Arrived);
        assert!(m.on_position_update(A, t(0)).is_none());
    }

    #[test]
    fn distance_remaining_in_display_unit() {
        let mut m = loaded();
        let u = m.on_position_update(A, t(0)).unwrap();
        assert_eq!(u.unit, DistanceUnit::Feet);
        assert_abs_diff_eq!(u.distance_remaining, A.distance_m(B) * FEET_PER_METER, epsilon = 1e-9);
        assert!(!u.advanced);
        assert_eq!(u.state, GuidanceState::Tracking { segment: 0 });

        let mut m = GuidanceStateMachine::new(GuidanceConfig {
            display_unit: DistanceUnit::Meters,
            ..GuidanceConfig::default()
        });
        m.load_route(north_then_east());
        let u = m.on_position_update(A, t(0)).unwrap();
        assert_abs_diff_eq!(u.distance_remaining, A.distance_m(B), epsilon = 1e-9);
    }

    #[test]
    fn right_turn_when_facing_north() {
        let mut m = loaded();
        m.on_heading_update(0.0, t(0));
        let u = m.on_position_update(B, t(1_000)).unwrap();
        assert!(u.advanced);
        assert_eq!(u.instruction, Some(Instruction::TurnRight));
        assert_eq!(u.state, GuidanceState::Tracking { segment: 1 });
    }

    #[test]
    fn left_turn_when_facing_south() {
        let mut m = loaded();
        m.on_heading_update(180.0, t(0));
        let u = m.on_position_update(B, t(1_000)).unwrap();
        assert_eq!(u.instruction, Some(Instruction::TurnLeft));
    }

    #[test]
    fn straight_when_already_facing_next_leg() {
        let mut m = loaded();
        m.on_heading_update(95.0, t(0));
        let u = m.on_position_update(B, t(1_000)).unwrap();
        assert_eq!(u.instruction, Some(Instruction::ContinueStraight));
    }

    #[test]
    fn within_threshold_counts_as_reached() {
        let mut m = loaded();
        m.on_heading_update(0.0, t(0));
        // ~5.6 m short of B.
        let near = c(0.00095, 0.0);
        assert!(near.distance_m(B) < 8.0);
        let u = m.on_position_update(near, t(1_000)).unwrap();
        assert!(u.advanced);
        assert_eq!(u.state, GuidanceState::Tracking { segment: 1 });
    }

    #[test]
    fn missing_heading_advances_without_instruction() {
        let mut m = loaded();
        let u = m.on_position_update(B, t(1_000)).unwrap();
        assert!(u.advanced);
        assert!(u.heading_unavailable);
        assert_eq!(u.instruction, None);
        assert_eq!(u.state, GuidanceState::Tracking { segment: 1 });
    }

    #[test]
    fn arrival_without_heading_is_an_error() {
        let mut m = loaded();
        let err = m.on_arrival_at_vertex(None, t(0)).unwrap_err();
        assert!(matches!(err, GuidanceError::SensorUnavailable("heading")));
    }

    #[test]
    fn repeated_instruction_suppressed_inside_cooldown() {
        let mut m = loaded();
        assert_eq!(m.on_arrival_at_vertex(Some(0.0), t(0)).unwrap(), Some(Instruction::TurnRight));
        assert_eq!(m.on_arrival_at_vertex(Some(0.0), t(5_000)).unwrap(), None);
        assert_eq!(m.on_arrival_at_vertex(Some(0.0), t(7_999)).unwrap(), None);
        assert_eq!(m.on_arrival_at_vertex(Some(0.0), t(8_000)).unwrap(), Some(Instruction::TurnRight));
        assert_eq!(m.last_instruction(), Some(Instruction::TurnRight));
    }

    #[test]
    fn different_instruction_emits_immediately() {
        let mut m = loaded();
        assert_eq!(m.on_arrival_at_vertex(Some(0.0), t(0)).unwrap(), Some(Instruction::TurnRight));
        assert_eq!(m.on_arrival_at_vertex(Some(180.0), t(1_000)).unwrap(), Some(Instruction::TurnLeft));
    }

    #[test]
    fn reload_clears_instruction_history() {
        let mut m = loaded();
        assert!(m.on_arrival_at_vertex(Some(0.0), t(0)).unwrap().is_some());
        m.load_route(north_then_east());
        assert_eq!(m.last_instruction(), None);
        assert_eq!(m.on_arrival_at_vertex(Some(0.0), t(1_000)).unwrap(), Some(Instruction::TurnRight));
    }

    #[test]
    fn out_of_order_position_is_dropped() {
        let mut m = loaded();
        m.on_heading_update(0.0, t(0));
        assert!(m.on_position_update(A, t(2_000)).is_some());
        assert!(m.on_position_update(B, t(1_000)).is_none());
        assert_eq!(m.state(), GuidanceState::Tracking { segment: 0 });
    }

    #[test]
    fn stale_heading_is_ignored() {
        let mut m = loaded();
        m.on_heading_update(0.0, t(2_000));
        m.on_heading_update(180.0, t(1_000));
        assert_eq!(m.heading(), Some(0.0));
        m.on_heading_update(-90.0, t(3_000));
        assert_eq!(m.heading(), Some(270.0));
    }

    #[test]
    fn segment_index_never_moves_back() {
        let mut m = loaded();
        m.on_heading_update(0.0, t(0));
        m.on_position_update(B, t(1_000));
        assert_eq!(m.state(), GuidanceState::Tracking { segment: 1 });
        // Wander back to the start; still tracking the second leg.
        let u = m.on_position_update(A, t(2_000)).unwrap();
        assert!(!u.advanced);
        assert_eq!(u.state, GuidanceState::Tracking { segment: 1 });
    }

    #[test]
    fn last_vertex_arrives_and_then_ignores_input() {
        let mut m = loaded();
        m.on_heading_update(0.0, t(0));
        m.on_position_update(B, t(1_000));
        let u = m.on_position_update(C, t(2_000)).unwrap();
        assert!(u.advanced);
        assert!(u.arrived());
        assert_eq!(u.instruction, None);
        assert_eq!(m.state(), GuidanceState::Arrived);
        assert!(m.on_position_update(C, t(3_000)).is_none());
        assert_eq!(m.on_arrival_at_vertex(Some(0.0), t(3_000)).unwrap(), None);
    }

    #[test]
    fn clear_returns_to_idle() {
        let mut m = loaded();
        m.clear();
        assert_eq!(m.state(), GuidanceState::Idle);
        assert!(m.segments().is_empty());
        assert!(m.current_segment().is_none());
    }
}

// ── Sample stream and sink ───────────────────────────────────────────────────

#[cfg(test)]
mod stream {
    use super::helpers::{A, B, C, Recorder, north_then_east, t};
    use crate::{GuidanceStateMachine, Instruction, NoopSink, SensorSample};

    #[test]
    fn sink_receives_distance_instruction_and_arrival() {
        let mut m = GuidanceStateMachine::default();
        m.load_route(north_then_east());
        let mut sink = Recorder::default();

        let samples = [
            SensorSample::Heading { degrees: 0.0, at: t(0) },
            SensorSample::Position { coordinate: A, at: t(0) },
            SensorSample::Position { coordinate: B, at: t(80_000) },
            SensorSample::Heading { degrees: 90.0, at: t(81_000) },
            SensorSample::Position { coordinate: C, at: t(160_000) },
        ];
        for sample in samples {
            m.apply(sample, &mut sink);
        }

        assert_eq!(sink.distances.len(), 3);
        assert_eq!(sink.instructions, vec![Instruction::TurnRight]);
        assert_eq!(sink.arrivals, 1);
    }

    #[test]
    fn heading_samples_produce_no_update() {
        let mut m = GuidanceStateMachine::default();
        m.load_route(north_then_east());
        let sample = SensorSample::Heading { degrees: 45.0, at: t(10) };
        assert_eq!(sample.at(), t(10));
        assert!(m.apply(sample, &mut NoopSink).is_none());
        assert_eq!(m.heading(), Some(45.0));
    }
}

// ── Navigator ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod navigator {
    use approx::assert_abs_diff_eq;
    use nav_spatial::{DijkstraRouter, FeatureRecord, GraphBuilder, RouteGraph, SpatialError};

    use super::helpers::{Recorder, c, t};
    use crate::{GuidanceConfig, GuidanceError, GuidanceState, Instruction, Navigator, SensorSample};

    /// Straight walk Gate → Library along the equator with a detour via
    /// (0.002, 0.0015).
    fn campus() -> RouteGraph {
        let features = vec![
            FeatureRecord::polyline(&[c(0.0, 0.0), c(0.0, 0.001), c(0.0, 0.002), c(0.0, 0.003)]),
            FeatureRecord::polyline(&[c(0.0, 0.001), c(0.002, 0.0015), c(0.0, 0.003)]),
            FeatureRecord::point(c(0.0, 0.0), Some("Gate")),
            FeatureRecord::point(c(0.0, 0.003), Some("Library")),
        ];
        GraphBuilder::new().build(&features).0
    }

    #[test]
    fn plans_from_fix_and_loads_guidance() {
        let g = campus();
        let mut nav = Navigator::new(DijkstraRouter, GuidanceConfig::default());
        let plan = nav.plan_from_fix(&g, Some(c(0.00001, 0.00001)), "Library").unwrap();

        assert_eq!(plan.path.vertices.len(), 4);
        assert_eq!(plan.segments.len(), 3);
        assert_eq!(plan.summary, "Gate → 0,0.001 → 0,0.002 → Library");
        for seg in &plan.segments {
            assert_abs_diff_eq!(seg.bearing_deg, 90.0, epsilon = 1e-6);
        }
        assert_abs_diff_eq!(
            plan.total_distance(),
            nav_core::DistanceUnit::Feet.from_meters(plan.path.total_distance_m),
            epsilon = 1e-6
        );
        assert_eq!(nav.guidance.state(), GuidanceState::Tracking { segment: 0 });
    }

    #[test]
    fn no_fix_is_sensor_unavailable() {
        let g = campus();
        let mut nav = Navigator::new(DijkstraRouter, GuidanceConfig::default());
        let err = nav.plan_from_fix(&g, None, "Library").unwrap_err();
        assert!(matches!(err, GuidanceError::SensorUnavailable("location")));
        assert_eq!(nav.guidance.state(), GuidanceState::Idle);
    }

    #[test]
    fn unknown_destination_is_routing_error() {
        let g = campus();
        let mut nav = Navigator::new(DijkstraRouter, GuidanceConfig::default());
        let err = nav.plan_from_fix(&g, Some(c(0.0, 0.0)), "Cafeteria").unwrap_err();
        assert!(matches!(err, GuidanceError::Routing(SpatialError::PointNotFound(ref n)) if n == "Cafeteria"));
    }

    #[test]
    fn empty_graph_is_routing_error() {
        let mut nav = Navigator::new(DijkstraRouter, GuidanceConfig::default());
        let err = nav.plan_from_fix(&RouteGraph::new(), Some(c(0.0, 0.0)), "Library").unwrap_err();
        assert!(matches!(err, GuidanceError::Routing(SpatialError::GraphEmpty)));
    }

    #[test]
    fn plan_by_name_from_named_start() {
        let g = campus();
        let mut nav = Navigator::new(DijkstraRouter, GuidanceConfig::default());
        let plan = nav.plan_by_name(&g, "Library", "Gate").unwrap();
        assert_eq!(plan.summary, "Library → 0,0.002 → 0,0.001 → Gate");
        assert_abs_diff_eq!(plan.segments[0].bearing_deg, 270.0, epsilon = 1e-6);
    }

    #[test]
    fn walk_straight_route_end_to_end() {
        let g = campus();
        let mut nav = Navigator::new(DijkstraRouter, GuidanceConfig::default());
        nav.plan_from_fix(&g, Some(c(0.0, 0.0)), "Library").unwrap();
        let mut sink = Recorder::default();

        let samples = [
            SensorSample::Heading { degrees: 88.0, at: t(0) },
            SensorSample::Position { coordinate: c(0.0, 0.0005), at: t(40_000) },
            SensorSample::Position { coordinate: c(0.0, 0.001), at: t(80_000) },
            // Second straight-on decision lands inside the cooldown.
            SensorSample::Position { coordinate: c(0.0, 0.002), at: t(84_000) },
            SensorSample::Position { coordinate: c(0.0, 0.003), at: t(120_000) },
        ];
        for sample in samples {
            nav.guidance.apply(sample, &mut sink);
        }

        assert_eq!(sink.instructions, vec![Instruction::ContinueStraight]);
        assert_eq!(sink.arrivals, 1);
        assert_eq!(nav.guidance.state(), GuidanceState::Arrived);
    }
}
