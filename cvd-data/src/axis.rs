//! Linear/log axis scale toggle values.

use std::fmt;

/// Scale for one chart axis, driven by a Linear/Log radio toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisScale {
    #[default]
    Linear,
    Log,
}

impl AxisScale {
    /// The Plotly axis `type` value for this scale.
    pub fn plotly_type(&self) -> &'static str {
        match self {
            AxisScale::Linear => "linear",
            AxisScale::Log => "log",
        }
    }

    /// Parse a radio-button label ("Linear" / "Log").
    ///
    /// Unknown labels fall back to linear, matching the toggle default.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Log" => AxisScale::Log,
            _ => AxisScale::Linear,
        }
    }
}

impl fmt::Display for AxisScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisScale::Linear => write!(f, "Linear"),
            AxisScale::Log => write!(f, "Log"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plotly_type_matches_scale() {
        assert_eq!(AxisScale::Linear.plotly_type(), "linear");
        assert_eq!(AxisScale::Log.plotly_type(), "log");
    }

    #[test]
    fn label_round_trip() {
        for scale in [AxisScale::Linear, AxisScale::Log] {
            assert_eq!(AxisScale::from_label(&scale.to_string()), scale);
        }
    }

    #[test]
    fn unknown_label_defaults_to_linear() {
        assert_eq!(AxisScale::from_label("logarithmic"), AxisScale::Linear);
        assert_eq!(AxisScale::from_label(""), AxisScale::Linear);
    }
}
