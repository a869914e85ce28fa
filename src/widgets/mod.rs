//! Built-in controls: Label, IconPanel, TextField, Spinner.

pub mod icon_panel;
pub mod label;
pub mod spinner;
pub mod text_field;

pub use icon_panel::IconPanel;
pub use label::Label;
pub use spinner::{format_value, Spinner, SpinnerEdit};
pub use text_field::TextField;
