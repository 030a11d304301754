/// Formats an elapsed-seconds counter as zero-padded "MM:SS".
pub fn format_elapsed(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
