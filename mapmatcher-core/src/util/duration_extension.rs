use std::time::Duration;

pub trait DurationExtension {
    /// renders the duration as `HH:MM:SS.mmm`
    fn hhmmss(&self) -> String;
}

impl DurationExtension for Duration {
    fn hhmmss(&self) -> String {
        let seconds = self.as_secs();
        let (hours, minutes, seconds) = (seconds / 3600, (seconds / 60) % 60, seconds % 60);
        format!(
            "{hours:02}:{minutes:02}:{seconds:02}.{:03}",
            self.subsec_millis()
        )
    }
}
