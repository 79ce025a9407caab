pub mod footer;
pub mod format;
pub mod header;
pub mod help_overlay;
pub mod tab_bar;

pub use footer::render_footer;
pub use header::render_header;
pub use help_overlay::render_help_overlay;
pub use tab_bar::render_tab_bar;
