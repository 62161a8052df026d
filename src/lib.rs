pub mod api;
pub mod errors;
pub mod fsutil;
pub mod paths;
pub mod scaffold;
pub mod templates;
