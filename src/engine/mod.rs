//! ffmpeg argument construction
//!
//! Builders here are pure: they turn domain decisions into argument lists.
//! Running them is the job of an [`ExecutePort`](crate::ports::ExecutePort).

pub mod segment;
pub mod transcode;

pub use segment::SegmentCommand;
pub use transcode::TranscodeCommand;

/// Seconds formatted with millisecond precision, as ffmpeg time options expect
pub fn format_seconds(seconds: f64) -> String {
    format!("{:.3}", seconds)
}

/// Render an argument list as a single shell-like line for logging
pub fn display_command(program: &str, args: &[String]) -> String {
    let mut line = String::from(program);
    for arg in args {
        line.push(' ');
        if arg.is_empty() || arg.contains(char::is_whitespace) {
            line.push('"');
            line.push_str(arg);
            line.push('"');
        } else {
            line.push_str(arg);
        }
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_seconds_uses_millisecond_precision() {
        assert_eq!(format_seconds(0.0), "0.000");
        assert_eq!(format_seconds(12.5), "12.500");
        assert_eq!(format_seconds(3.14159), "3.142");
    }

    #[test]
    fn test_display_command_quotes_spaces() {
        let args = vec!["-i".to_string(), "my clip.mp4".to_string(), "-y".to_string()];
        assert_eq!(display_command("ffmpeg", &args), "ffmpeg -i \"my clip.mp4\" -y");
    }
}
