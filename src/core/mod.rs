mod clock;
mod display_state;
mod range_label;
mod types;
mod window;

pub use clock::{Clock, FixedClock, SystemClock};
pub use display_state::{ControlAvailability, DisplayState};
pub use range_label::format_range_label;
pub use types::{NavigationDirection, NavigationTarget, STEP_HOURS, step_size};
pub use window::TimeWindowSnapshot;
