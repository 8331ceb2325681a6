/// Quadratic ease-out over `progress` in `[0, 1]`.
pub fn ease_out_quad(progress: f64) -> f64 {
    progress * (2.0 - progress)
}

/// Value shown `elapsed_ms` into a count-up of `duration_ms` towards `target`,
/// and whether the animation has finished.
pub fn frame_value(target: u32, duration_ms: f64, elapsed_ms: f64) -> (u32, bool) {
    if duration_ms <= 0.0 {
        return (target, true);
    }
    let progress = (elapsed_ms / duration_ms).clamp(0.0, 1.0);
    if progress >= 1.0 {
        (target, true)
    } else {
        ((ease_out_quad(progress) * f64::from(target)).floor() as u32, false)
    }
}

/// Formats with comma thousands separators, e.g. `10,000`.
pub fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_starts_at_zero_and_lands_on_target() {
        assert_eq!(frame_value(10_000, 1500.0, 0.0), (0, false));
        assert_eq!(frame_value(10_000, 1500.0, 750.0), (7_500, false));
        assert_eq!(frame_value(10_000, 1500.0, 1500.0), (10_000, true));
        assert_eq!(frame_value(7, 1500.0, 9_000.0), (7, true));
    }

    #[test]
    fn count_never_goes_backwards() {
        let mut last = 0;
        for step in 0..=30 {
            let (value, _) = frame_value(150, 1500.0, f64::from(step) * 50.0);
            assert!(value >= last);
            last = value;
        }
        assert_eq!(last, 150);
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        assert_eq!(frame_value(42, 0.0, 0.0), (42, true));
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(7), "7");
        assert_eq!(group_thousands(150), "150");
        assert_eq!(group_thousands(3_000), "3,000");
        assert_eq!(group_thousands(10_000), "10,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }
}
