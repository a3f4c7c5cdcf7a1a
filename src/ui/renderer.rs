// Renderer module - formatting utilities shared by the layout widgets

/// Format a throughput value for display
pub fn format_mbps(mbps: f64) -> String {
    format!("{:.2} Mbps", mbps)
}

/// Format a byte count as KB for display
pub fn format_kib(bytes: u64) -> String {
    format!("{:.1} KB", bytes as f64 / 1024.0)
}
