const UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

/// Format a byte count with binary units and one decimal, e.g. `1.5KB`.
pub fn format_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    let mut unit = 0;

    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{value:.1}{}", UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_boundaries() {
        assert_eq!(format_size(0), "0.0B");
        assert_eq!(format_size(100), "100.0B");
        assert_eq!(format_size(1023), "1023.0B");
        assert_eq!(format_size(1024), "1.0KB");
        assert_eq!(format_size(1536), "1.5KB");
        assert_eq!(format_size(1024 * 1024), "1.0MB");
        assert_eq!(format_size(1024 * 1024 * 1024), "1.0GB");
        assert_eq!(format_size(1024_u64.pow(4)), "1.0TB");
        assert_eq!(format_size(1024_u64.pow(5)), "1.0PB");
    }

    #[test]
    fn petabytes_is_the_last_unit() {
        assert_eq!(format_size(1024_u64.pow(5) * 2048), "2048.0PB");
    }
}
