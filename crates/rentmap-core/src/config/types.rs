//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::viewport::LatLng;

/// Viewer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Path of the listing data file, relative to the config file's directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_path: Option<String>,

    /// Quiet period before a viewport change triggers a recompute
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Map display and zoom levels
    #[serde(default)]
    pub map: MapConfig,

    /// Filter input interpretation
    #[serde(default)]
    pub filter: FilterConfig,

    /// Transient notification timings
    #[serde(default)]
    pub notification: NotificationConfig,
}

/// Map display configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Initial map center (Seoul city hall by default)
    #[serde(default = "default_center")]
    pub center: LatLng,

    /// Zoom level when the map is created
    #[serde(default = "default_initial_zoom")]
    pub initial_zoom: u8,

    /// Zoom level used when a list row or marker is activated
    #[serde(default = "default_focus_zoom")]
    pub focus_zoom: u8,

    /// Zoom level used when jumping to the first search result
    #[serde(default = "default_search_zoom")]
    pub search_zoom: u8,
}

/// Filter input configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Multiplier from UI price inputs (만원) to stored prices (won)
    #[serde(default = "default_price_unit")]
    pub price_unit: f64,

    /// Gender select value meaning "only listings without a gender restriction"
    #[serde(default = "default_unrestricted_gender")]
    pub unrestricted_gender: String,
}

/// Notification timing configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_notification_duration_ms")]
    pub duration_ms: u64,

    #[serde(default = "default_notification_enter_delay_ms")]
    pub enter_delay_ms: u64,

    #[serde(default = "default_notification_exit_delay_ms")]
    pub exit_delay_ms: u64,
}

fn default_debounce_ms() -> u64 {
    200
}

fn default_center() -> LatLng {
    LatLng::new(37.5665, 126.9780)
}

fn default_initial_zoom() -> u8 {
    8
}

fn default_focus_zoom() -> u8 {
    3
}

fn default_search_zoom() -> u8 {
    5
}

fn default_price_unit() -> f64 {
    10_000.0
}

fn default_unrestricted_gender() -> String {
    "무관".to_string()
}

fn default_notification_duration_ms() -> u64 {
    3000
}

fn default_notification_enter_delay_ms() -> u64 {
    10
}

fn default_notification_exit_delay_ms() -> u64 {
    300
}

impl Default for ViewerConfig {
    fn default() -> Self {
        ViewerConfig {
            data_path: None,
            debounce_ms: default_debounce_ms(),
            map: MapConfig::default(),
            filter: FilterConfig::default(),
            notification: NotificationConfig::default(),
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        MapConfig {
            center: default_center(),
            initial_zoom: default_initial_zoom(),
            focus_zoom: default_focus_zoom(),
            search_zoom: default_search_zoom(),
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig {
            price_unit: default_price_unit(),
            unrestricted_gender: default_unrestricted_gender(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        NotificationConfig {
            duration_ms: default_notification_duration_ms(),
            enter_delay_ms: default_notification_enter_delay_ms(),
            exit_delay_ms: default_notification_exit_delay_ms(),
        }
    }
}
