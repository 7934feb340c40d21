//! Start/stop controls

use tokio::sync::mpsc;
use tracing::debug;
use voice_control::VoiceCommand;

use crate::AnnouncerError;

/// Who asked for a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Manual start/stop control
    Operator,
    /// Recognized voice command; confirmed aloud
    Voice,
}

/// Message applied by the loop between cycles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Start(Origin),
    Stop(Origin),
    /// Stop and leave the loop
    Shutdown,
}

impl From<VoiceCommand> for Control {
    fn from(command: VoiceCommand) -> Self {
        match command {
            VoiceCommand::Start => Control::Start(Origin::Voice),
            VoiceCommand::Stop => Control::Stop(Origin::Voice),
        }
    }
}

/// Operator side of the control channel
#[derive(Debug, Clone)]
pub struct ControlHandle {
    tx: mpsc::Sender<Control>,
}

impl ControlHandle {
    /// Handle plus the receiver the loop reads
    pub fn channel(buffer: usize) -> (Self, mpsc::Receiver<Control>) {
        let (tx, rx) = mpsc::channel(buffer);
        (Self { tx }, rx)
    }

    pub async fn start(&self) -> Result<(), AnnouncerError> {
        self.send(Control::Start(Origin::Operator)).await
    }

    pub async fn stop(&self) -> Result<(), AnnouncerError> {
        self.send(Control::Stop(Origin::Operator)).await
    }

    pub async fn shutdown(&self) -> Result<(), AnnouncerError> {
        self.send(Control::Shutdown).await
    }

    /// Raw sender, e.g. for the voice listener
    pub fn sender(&self) -> mpsc::Sender<Control> {
        self.tx.clone()
    }

    async fn send(&self, control: Control) -> Result<(), AnnouncerError> {
        debug!("Control requested: {:?}", control);
        self.tx
            .send(control)
            .await
            .map_err(|_| AnnouncerError::LoopClosed)
    }
}
