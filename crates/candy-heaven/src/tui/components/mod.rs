//! Reusable UI components

mod toast;

pub use toast::{render_toast, Toast};
