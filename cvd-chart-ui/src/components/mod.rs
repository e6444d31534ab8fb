//! Reusable Dioxus RSX components for CVD dashboard apps.

mod axis_scale_toggle;
mod chart_container;
mod chart_header;
mod day_slider;
mod error_display;
mod indicator_selector;
mod loading_spinner;

pub use axis_scale_toggle::AxisScaleToggle;
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use day_slider::DaySlider;
pub use error_display::ErrorDisplay;
pub use indicator_selector::IndicatorSelector;
pub use loading_spinner::LoadingSpinner;
