// SPDX-License-Identifier: MPL-2.0
use parallax_card::application::{MotionSampler, SampleOutcome, SamplerState};
use parallax_card::config::{self, Config, MotionSourceKind, DEFAULT_UPDATE_INTERVAL_MS};
use parallax_card::domain::motion::AttitudeSample;
use parallax_card::domain::parallax::{
    direct_offset, inverse_offset, CardStack, LayerPlacement, Offset, ParallaxMotion,
};
use parallax_card::error::MotionError;
use parallax_card::i18n::fluent::I18n;
use parallax_card::infrastructure::motion::{build_source, TraceReplay};
use parallax_card::media::{CardArtwork, Compositor};
use std::time::{Duration, Instant};
use tempfile::tempdir;

const EPS: f32 = 1e-5;

fn tilted() -> AttitudeSample {
    AttitudeSample::new(0.1, -0.2, 0.0)
}

#[test]
fn direct_offset_follows_the_tilt() {
    let offset = direct_offset(0.1, -0.2, 10.0);
    assert!(offset.approx_eq(Offset::new(-2.0, 1.0), EPS));
}

#[test]
fn inverse_offset_counters_the_tilt() {
    let offset = ParallaxMotion::inverse(30.0).offset(&tilted());
    assert!(offset.approx_eq(Offset::new(6.0, -3.0), EPS));
    assert!(offset.approx_eq(inverse_offset(0.1, -0.2, 30.0), 0.0));
}

#[test]
fn hero_layer_nets_the_difference_of_its_motions() {
    let stack = CardStack::default();
    let hero = stack.placements(&tilted())[2];
    // (roll·20, pitch·20)
    assert!(hero.net().approx_eq(Offset::new(-4.0, 2.0), EPS));
}

#[test]
fn neutral_sample_leaves_every_layer_at_its_base() {
    let stack = CardStack::default();
    let placements = stack.placements(&AttitudeSample::NEUTRAL);
    let base: Vec<LayerPlacement> = stack
        .layers()
        .iter()
        .map(|layer| LayerPlacement {
            frame: layer.base_offset,
            content: Offset::ZERO,
        })
        .collect();
    assert_eq!(placements, base);
}

#[test]
fn repeated_sample_does_not_drift() {
    let stack = CardStack::default();
    let mut sampler = MotionSampler::new(build_source(
        MotionSourceKind::Simulated,
        &Config::default().motion,
        None,
    ));

    assert_eq!(sampler.accept(Some(tilted())), SampleOutcome::Updated);
    let first = stack.placements(&sampler.current());
    assert_eq!(sampler.accept(Some(tilted())), SampleOutcome::Unchanged);
    let second = stack.placements(&sampler.current());
    assert_eq!(first, second);
}

#[test]
fn missing_trace_frames_keep_the_last_value() {
    let interval = Duration::from_millis(DEFAULT_UPDATE_INTERVAL_MS);
    let replay = TraceReplay::new(vec![Some(tilted()), None, None], interval);
    let mut sampler = MotionSampler::new(Box::new(replay));
    let start = Instant::now();
    sampler.activate(start).expect("trace starts");

    assert_eq!(sampler.poll(start), SampleOutcome::Updated);
    assert_eq!(sampler.poll(start + interval), SampleOutcome::Skipped);
    assert_eq!(sampler.poll(start + interval * 2), SampleOutcome::Skipped);

    assert_eq!(sampler.current(), tilted());
    assert_eq!(sampler.skipped_count(), 2);
}

#[test]
fn unavailable_sensor_leaves_the_card_at_rest() {
    let mut sampler = MotionSampler::new(build_source(
        MotionSourceKind::Disabled,
        &Config::default().motion,
        None,
    ));

    let err = sampler.activate(Instant::now()).unwrap_err();
    assert!(matches!(err, MotionError::SensorUnavailable(_)));
    assert_eq!(sampler.state(), SamplerState::Inactive);
    assert_eq!(sampler.poll(Instant::now()), SampleOutcome::Idle);
    assert_eq!(sampler.current(), AttitudeSample::NEUTRAL);
}

#[test]
fn trace_file_drives_the_sampler() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let trace_path = dir.path().join("tilt.toml");
    std::fs::write(
        &trace_path,
        "interval_ms = 20\n\n[[sample]]\npitch = 0.1\nroll = -0.2\nyaw = 0.5\n",
    )
    .expect("Failed to write trace");

    let source = build_source(
        MotionSourceKind::Trace,
        &Config::default().motion,
        Some(&trace_path),
    );
    let mut sampler = MotionSampler::new(source);
    let start = Instant::now();
    sampler.activate(start).expect("trace starts");

    assert_eq!(sampler.poll(start), SampleOutcome::Updated);
    assert_eq!(sampler.current(), AttitudeSample::new(0.1, -0.2, 0.5));
}

#[test]
fn compositor_renders_rest_and_tilted_cards() {
    let stack = CardStack::default();
    let artwork = CardArtwork::bundled().expect("bundled artwork");
    let compositor = Compositor::new(&stack, &artwork, 1.0, 0.5).expect("compositor");

    let rest = compositor
        .compose(&stack.placements(&AttitudeSample::NEUTRAL))
        .expect("rest frame");
    let tilted = compositor
        .compose(&stack.placements(&tilted()))
        .expect("tilted frame");

    assert_eq!(rest.width(), tilted.width());
    assert_eq!(rest.height(), tilted.height());
    assert_ne!(rest.data(), tilted.data());
}

#[test]
fn settings_file_drives_source_and_locale() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(
        dir.path().join("settings.toml"),
        "[general]\nlanguage = \"fr\"\n\n[motion]\nsource = \"simulated\"\n",
    )
    .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded.motion.source, Some(MotionSourceKind::Simulated));

    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
}

#[test]
fn broken_settings_fall_back_with_a_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[motion\nsource = 3")
        .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());
    assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
}
