pub(crate) mod error_alert;
pub(crate) mod form;
pub(crate) mod header_nav_item;
pub(crate) mod loading;
pub(crate) mod pagination;
pub(crate) mod theme_toggle;

pub use error_alert::ErrorAlert;
pub use loading::Loading;
pub use pagination::PaginationControls;
