//! walk — end-to-end replay for the wayfinding core.
//!
//! Builds a walkway graph from an embedded GeoJSON campus, routes from a
//! noisy GPS fix to a named destination, then replays a simulated walk
//! through guidance, speed fusion and heading smoothing.
//!
//! Usage: `walk [config.json]`.  Every config field is optional; see
//! [`WalkConfig`].  Set `RUST_LOG=debug` for per-sample tracing.

mod campus;

use std::fs;

use anyhow::{Context, Result};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use nav_core::{Coordinate, DistanceUnit, Timestamp, normalize_deg};
use nav_guidance::{GuidanceConfig, GuidanceState, Instruction, InstructionSink, Navigator, SensorSample};
use nav_sensors::{AlignmentDetector, HeadingReading, HeadingSmoother, SpeedConfig, SpeedEstimator};
use nav_spatial::{DijkstraRouter, GraphBuilder, OrientedSegment, SnapIndex, load_features_geojson_str, path_to_geojson};

// ── Constants ─────────────────────────────────────────────────────────────────

const SAMPLE_INTERVAL_MS: u64 = 1_000;
const METERS_PER_DEG_LAT: f64 = 111_195.0;
const TRUE_HEADING_WARMUP: usize = 3;
/// Magnetic minus true heading at the campus.
const MAGNETIC_DECLINATION_DEG: f64 = 2.0;

// ── Configuration ─────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(default)]
struct WalkConfig {
    guidance:          GuidanceConfig,
    speed:             SpeedConfig,
    destination:       String,
    walking_speed_mps: f64,
    /// Uniform position jitter radius applied to each GPS sample.
    gps_noise_m:       f64,
    compass_noise_deg: f64,
    seed:              u64,
    /// Print the planned route as a GeoJSON Feature.
    print_geojson:     bool,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            guidance:          GuidanceConfig::default(),
            speed:             SpeedConfig::default(),
            destination:       "Cafe".to_owned(),
            walking_speed_mps: 1.4,
            gps_noise_m:       2.0,
            compass_noise_deg: 6.0,
            seed:              42,
            print_geojson:     false,
        }
    }
}

fn load_config(path: Option<&str>) -> Result<WalkConfig> {
    let Some(path) = path else {
        return Ok(WalkConfig::default());
    };
    let text = fs::read_to_string(path).with_context(|| format!("reading config {path}"))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {path}"))
}

// ── Output sink ───────────────────────────────────────────────────────────────

#[derive(Default)]
struct ConsoleSink {
    instructions: usize,
}

impl InstructionSink for ConsoleSink {
    fn on_instruction(&mut self, instruction: Instruction) {
        self.instructions += 1;
        println!("  >> {instruction}");
    }

    fn on_distance_remaining(&mut self, distance: f64, unit: DistanceUnit) {
        debug!(distance, %unit, "distance to next vertex");
    }

    fn on_arrived(&mut self) {
        println!("  >> you have arrived");
    }
}

// ── Walk simulation ───────────────────────────────────────────────────────────

/// One ground-truth sample along the route: position and direction of travel.
struct TruthSample {
    position: Coordinate,
    bearing_deg: f64,
}

/// Points spaced `step_m` apart along each segment, ending exactly on every
/// segment's end vertex.
fn walk_track(segments: &[OrientedSegment], step_m: f64) -> Vec<TruthSample> {
    let mut track = Vec::new();
    for seg in segments {
        let steps = (seg.length_m / step_m).ceil().max(1.0) as usize;
        for k in 1..=steps {
            let f = k as f64 / steps as f64;
            track.push(TruthSample {
                position: Coordinate::new(
                    seg.start.lat + (seg.end.lat - seg.start.lat) * f,
                    seg.start.lon + (seg.end.lon - seg.start.lon) * f,
                ),
                bearing_deg: seg.bearing_deg,
            });
        }
    }
    track
}

fn jitter(rng: &mut SmallRng, c: Coordinate, radius_m: f64) -> Coordinate {
    if radius_m <= 0.0 {
        return c;
    }
    let dn = rng.gen_range(-radius_m..=radius_m);
    let de = rng.gen_range(-radius_m..=radius_m);
    let meters_per_deg_lon = METERS_PER_DEG_LAT * c.lat.to_radians().cos();
    Coordinate::new(c.lat + dn / METERS_PER_DEG_LAT, c.lon + de / meters_per_deg_lon)
}

fn noise(rng: &mut SmallRng, amplitude: f64) -> f64 {
    if amplitude <= 0.0 { 0.0 } else { rng.gen_range(-amplitude..=amplitude) }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let arg = std::env::args().nth(1);
    let config = load_config(arg.as_deref())?;
    println!("=== walk — wayfinding replay ===");
    println!(
        "Destination: {}  |  Seed: {}  |  GPS noise: ±{} m",
        config.destination, config.seed, config.gps_noise_m
    );
    println!();

    // 1. Build the walkway graph.
    let records = load_features_geojson_str(campus::CAMPUS_GEOJSON)?;
    let (graph, report) = GraphBuilder::new().build(&records);
    println!(
        "Walkway graph: {} vertices, {} edges ({} of {} features skipped)",
        graph.vertex_count(),
        graph.edge_count(),
        report.skipped_count(),
        report.features_seen,
    );
    for skipped in &report.skipped {
        println!("  skipped: {skipped}");
    }

    // 2. Route from a noisy starting fix.
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let fix = jitter(&mut rng, campus::START, config.gps_noise_m);
    if let Some(snapped) = SnapIndex::build(&graph).nearest_vertex(fix) {
        info!(%fix, nearest = %graph.display_name(snapped), "starting fix");
    }

    let mut nav = Navigator::new(DijkstraRouter, config.guidance.clone());
    let plan = nav.plan_from_fix(&graph, Some(fix), &config.destination)?;
    let unit = config.guidance.display_unit;
    println!("Route: {}", plan.summary);
    println!("Length: {:.0} {unit} over {} segments", plan.total_distance(), plan.segments.len());
    for (i, seg) in plan.segments.iter().enumerate() {
        println!("  leg {i}: {:>5.0} {unit} bearing {:>5.1}°", seg.distance, seg.bearing_deg);
    }
    if config.print_geojson {
        println!("{}", serde_json::to_string_pretty(&path_to_geojson(&graph, &plan.path.vertices))?);
    }
    println!();

    // 3. Replay the walk.
    let step_m = (config.walking_speed_mps * SAMPLE_INTERVAL_MS as f64 / 1_000.0).max(0.1);
    let track = walk_track(&plan.segments, step_m);
    let first_bearing = track.first().map_or(0.0, |s| s.bearing_deg);

    let mut speed = SpeedEstimator::new(config.speed.clone());
    let mut smoother = HeadingSmoother::new(first_bearing);
    let mut alignment = AlignmentDetector::default();
    let mut sink = ConsoleSink::default();
    let mut cues = 0usize;

    println!("Walking...");
    for (i, truth) in track.iter().enumerate() {
        let at = Timestamp::from_millis(i as u64 * SAMPLE_INTERVAL_MS);

        // True north needs a location fix to calibrate; fall back to magnetic
        // for the first samples.
        let compass = normalize_deg(truth.bearing_deg + noise(&mut rng, config.compass_noise_deg));
        let reading = HeadingReading {
            true_heading:     if i < TRUE_HEADING_WARMUP { -1.0 } else { compass },
            magnetic_heading: normalize_deg(compass + MAGNETIC_DECLINATION_DEG),
        };
        if let Some(raw) = reading.best() {
            smoother.update(raw);
        }
        let heading = smoother.displayed_normalized();
        nav.guidance.apply(SensorSample::Heading { degrees: heading, at }, &mut sink);

        if let Some(seg) = nav.guidance.current_segment() {
            if alignment.update(heading, seg.bearing_deg).cue {
                cues += 1;
                debug!(%at, bearing = seg.bearing_deg, "aligned with segment");
            }
        }

        // Hand-held jitter, mostly under the motion threshold.
        let accel_g = [noise(&mut rng, 0.008), noise(&mut rng, 0.008), noise(&mut rng, 0.012)];
        speed.on_motion(accel_g, at);
        speed.on_gps_speed(config.walking_speed_mps + noise(&mut rng, 0.3));

        let position = jitter(&mut rng, truth.position, config.gps_noise_m);
        nav.guidance.apply(SensorSample::Position { coordinate: position, at }, &mut sink);

        if nav.guidance.state() == GuidanceState::Arrived {
            info!(%at, samples = i + 1, "walk complete");
            break;
        }
    }

    // 4. Summary.
    let snapshot = speed.snapshot();
    println!();
    println!("Final state: {:?}", nav.guidance.state());
    println!("Instructions announced: {}  |  alignment cues: {cues}", sink.instructions);
    println!(
        "Speed: fused {:.2} m/s  |  imu {:.2} m/s  |  gps {}",
        snapshot.fused_mps,
        snapshot.imu_mps,
        snapshot.gps_mps.map_or_else(|| "n/a".to_owned(), |v| format!("{v:.2} m/s")),
    );

    Ok(())
}
