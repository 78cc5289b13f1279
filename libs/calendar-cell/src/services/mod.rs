pub mod grid;
pub mod session_window;

pub use grid::{generate_month_grid, local_day_start, local_day_window, resolve_timezone, viewing_timezone};
pub use session_window::{can_start_session, PRE_ROLL_MINUTES, POST_ROLL_MINUTES};
