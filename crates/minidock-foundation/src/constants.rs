//! Shared gesture constants.
//!
//! Values are in logical pixels. For very high-density touch screens these
//! could scale with the device's density factor; the current values work
//! well for typical desktop and mobile displays.

/// Drag threshold in logical pixels.
///
/// A contact must travel vertically further than this from its last recorded
/// position before it is classified as a drag rather than a tap. 8.0 is large
/// enough to ignore finger jitter and small enough to feel responsive, and
/// matches common platform conventions (~8dp touch slop).
pub const TOUCH_SLOP: f32 = 8.0;

/// Settle velocity floor in logical pixels per second.
///
/// A released drag always settles at an endpoint; gestures released slower
/// than this are sped up to it so the panel never crawls to rest.
pub const MIN_SETTLE_VELOCITY: f32 = 8_000.0;

/// Window, in milliseconds, that tracked velocity is normalised to.
///
/// 1000 yields velocities in pixels per second.
pub const VELOCITY_UNITS_MS: i64 = 1_000;
