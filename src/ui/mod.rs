pub mod app;
mod context;
mod month_pane;
mod side_pane;

pub use app::App;
pub use context::{Context, Mode, Theme};
pub use month_pane::{render_plain, MonthPane};
pub use side_pane::{SidePane, StatusBar};
