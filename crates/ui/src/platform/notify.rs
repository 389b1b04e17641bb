use std::process::Command;

use super::UiNotifier;

/// Plays the platform's stock alert sound when an interval finishes.
pub struct DesktopNotifier;

impl UiNotifier for DesktopNotifier {
    fn interval_complete(&self) {
        #[cfg(target_os = "macos")]
        {
            let _ = Command::new("afplay")
                .arg("/System/Library/Sounds/Glass.aiff")
                .spawn();
        }
        #[cfg(target_os = "windows")]
        {
            let _ = Command::new("powershell")
                .args([
                    "-NoProfile",
                    "-Command",
                    "(New-Object Media.SoundPlayer 'C:\\Windows\\Media\\notify.wav').Play()",
                ])
                .spawn();
        }
        #[cfg(target_os = "linux")]
        {
            let _ = Command::new("paplay")
                .arg("/usr/share/sounds/freedesktop/stereo/complete.oga")
                .spawn();
        }
    }
}

/// No-op cue for tests and headless runs.
pub struct SilentNotifier;

impl UiNotifier for SilentNotifier {
    fn interval_complete(&self) {}
}
