pub mod focus;
pub mod line_editor;
pub mod view;
