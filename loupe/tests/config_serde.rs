// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loading `Config` from JSON.

#![cfg(feature = "serde")]

use loupe::Config;
use loupe_gesture::MultiTouchMode;
use loupe_tiles::VisibilityTest;

#[test]
fn missing_fields_take_defaults() {
    let config: Config = serde_json::from_str(
        r#"{
            "image_source": "scans/map.tif",
            "tile_cache_capacity": 64,
            "allow_rotation": true,
            "multi_touch_mode": "Native"
        }"#,
    )
    .unwrap();

    assert_eq!(config.image_source, "scans/map.tif");
    assert_eq!(config.tile_cache_capacity, 64);
    assert!(config.allow_rotation);
    assert_eq!(config.multi_touch_mode, MultiTouchMode::Native);
    assert_eq!(config.visibility, VisibilityTest::Strict);
    assert_eq!(config.reconcile_delay_ms, 300);
    assert_eq!(
        config.tile_source_template,
        Config::default().tile_source_template
    );
}

#[test]
fn survives_a_round_trip() {
    let config = Config::default()
        .with_image_source("a.jpg")
        .with_visibility(VisibilityTest::Inclusive)
        .with_timing(40, 500);
    let json = serde_json::to_string(&config).unwrap();
    let back: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn unknown_visibility_is_rejected() {
    let result = serde_json::from_str::<Config>(r#"{ "visibility": "Sometimes" }"#);
    assert!(result.is_err());
}
