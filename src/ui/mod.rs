pub mod form;
pub mod panels;
pub mod presets;
