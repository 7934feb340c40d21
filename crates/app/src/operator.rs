//! Console operator controls
//!
//! Stands in for the start/stop buttons and the microphone:
//! - `start` / `stop` act like the manual controls
//! - `say <phrase>` feeds a phrase to the voice recognizer
//! - `quit` (or end of input) shuts the loop down

use announcer::{AnnouncerError, ControlHandle};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, warn};
use voice_control::RecognitionError;

/// One line of operator input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperatorInput {
    Start,
    Stop,
    Say(String),
    Quit,
    Blank,
    Unknown(String),
}

impl OperatorInput {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            "" => OperatorInput::Blank,
            "start" if rest.is_empty() => OperatorInput::Start,
            "stop" if rest.is_empty() => OperatorInput::Stop,
            "quit" | "exit" if rest.is_empty() => OperatorInput::Quit,
            "say" if !rest.is_empty() => OperatorInput::Say(rest.to_string()),
            _ => OperatorInput::Unknown(line.to_string()),
        }
    }
}

/// Feed operator input to the loop until `quit` or end of input.
///
/// Always leaves the loop shut down (or already gone) on return.
pub async fn drive<R>(
    input: R,
    controls: &ControlHandle,
    voice: Option<&mpsc::Sender<Result<String, RecognitionError>>>,
) -> Result<(), AnnouncerError>
where
    R: AsyncRead + Unpin,
{
    let mut lines = BufReader::new(input).lines();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                warn!("Operator input error: {}", e);
                break;
            }
        };

        match OperatorInput::parse(&line) {
            OperatorInput::Start => controls.start().await?,
            OperatorInput::Stop => controls.stop().await?,
            OperatorInput::Say(phrase) => match voice {
                Some(voice) => {
                    if voice.send(Ok(phrase)).await.is_err() {
                        warn!("Voice recognizer is not listening");
                    }
                }
                None => warn!("Voice commands are disabled"),
            },
            OperatorInput::Quit => break,
            OperatorInput::Blank => {}
            OperatorInput::Unknown(line) => {
                warn!("Unknown input {:?}; use start, stop, say <phrase> or quit", line)
            }
        }
    }

    debug!("Operator input finished");
    match controls.shutdown().await {
        Ok(()) | Err(AnnouncerError::LoopClosed) => Ok(()),
        Err(e) => Err(e),
    }
}
