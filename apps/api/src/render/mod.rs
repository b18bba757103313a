// Print-ready HTML output for the Compare & Print view.

pub mod print;

pub use print::{render_print_document, PrintEntry};
