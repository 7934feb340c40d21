//! Voice command parsing

/// Commands understood by the listener
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceCommand {
    Start,
    Stop,
}

impl VoiceCommand {
    /// Match a transcript.
    ///
    /// Substring match on the lowercased phrase; "start" wins when both
    /// words appear.
    pub fn parse(transcript: &str) -> Option<Self> {
        let phrase = transcript.to_lowercase();
        if phrase.contains("start") {
            Some(VoiceCommand::Start)
        } else if phrase.contains("stop") {
            Some(VoiceCommand::Stop)
        } else {
            None
        }
    }

    /// Spoken confirmation
    pub fn confirmation(&self) -> &'static str {
        match self {
            VoiceCommand::Start => "Starting object detection",
            VoiceCommand::Stop => "Stopping object detection",
        }
    }
}
