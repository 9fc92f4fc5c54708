//! Active numeric settings encoder.

use ngc_common::consts::ACTIVE_SETTINGS;
use ngc_common::interp::settings::Settings;

/// Active numeric settings, one named field per array slot.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ActiveSettings {
    pub line_number: f64,
    pub feed_rate: f64,
    /// Spindle 0.
    pub spindle_speed: f64,
    pub tolerance: f64,
    pub naivecam_tolerance: f64,
}

impl ActiveSettings {
    /// Legacy array form.
    pub fn to_array(&self) -> [f64; ACTIVE_SETTINGS] {
        [
            self.line_number,
            self.feed_rate,
            self.spindle_speed,
            self.tolerance,
            self.naivecam_tolerance,
        ]
    }
}

/// Encode the active numeric settings.
pub fn encode_active_settings(settings: &Settings) -> ActiveSettings {
    ActiveSettings {
        line_number: f64::from(settings.sequence_number),
        feed_rate: settings.feed_rate,
        spindle_speed: settings.spindle0().speed,
        tolerance: settings.tolerance,
        naivecam_tolerance: settings.naivecam_tolerance,
    }
}
