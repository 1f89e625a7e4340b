use lightsout_core::{Coord2, SIZE, SessionState};

/// Formats remaining seconds as `MM:SS`.
pub(crate) fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

pub(crate) const fn status_label(state: SessionState) -> &'static str {
    use SessionState::*;
    match state {
        Idle => "Waiting",
        Active => "In progress",
        Won => "Solved!",
        TimedOut => "Time's up",
    }
}

/// Inline style for a tile, lit tiles show their own slice of `image`.
pub(crate) fn tile_style((row, col): Coord2, on: bool, image: &str) -> String {
    if !on {
        return "background-color: #111".to_string();
    }

    let last = f32::from(SIZE - 1);
    let px = f32::from(col) / last * 100.;
    let py = f32::from(row) / last * 100.;
    let scale = u32::from(SIZE) * 100;
    format!(
        "background-image: url('{image}'); background-position: {px}% {py}%; background-size: {scale}% {scale}%"
    )
}

pub(crate) fn reveal_style(image: &str) -> String {
    format!(
        "background-image: url('{image}'); background-size: contain; background-position: center; background-repeat: no-repeat; width: 100%; aspect-ratio: 1/1"
    )
}

pub(crate) fn board_style() -> String {
    format!("grid-template-columns: repeat({SIZE}, 1fr)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_uses_minutes_and_seconds() {
        assert_eq!(format_clock(300), "05:00");
        assert_eq!(format_clock(59), "00:59");
        assert_eq!(format_clock(61), "01:01");
        assert_eq!(format_clock(0), "00:00");
    }

    #[test]
    fn lit_tiles_slice_the_image() {
        assert_eq!(
            tile_style((0, 0), true, "blur.jpg"),
            "background-image: url('blur.jpg'); background-position: 0% 0%; background-size: 500% 500%"
        );
        assert_eq!(
            tile_style((2, 4), true, "blur.jpg"),
            "background-image: url('blur.jpg'); background-position: 100% 50%; background-size: 500% 500%"
        );
    }

    #[test]
    fn unlit_tiles_are_dark() {
        assert_eq!(tile_style((3, 3), false, "blur.jpg"), "background-color: #111");
    }

    #[test]
    fn every_state_has_a_label() {
        assert_eq!(status_label(SessionState::Idle), "Waiting");
        assert_eq!(status_label(SessionState::TimedOut), "Time's up");
    }
}
