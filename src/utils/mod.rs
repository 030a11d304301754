pub mod format_elapsed;
