use std::sync::{mpsc, Arc};
use std::thread;

use crate::upload::{ReqwestUploader, UploadFile, UploadSettings, Uploader};
use crate::EngineEvent;

enum EngineCommand {
    Upload { file: UploadFile },
}

/// Handle to the upload worker: a dedicated thread owning a tokio runtime.
/// Commands go in over a channel; settlements come back via `try_recv`.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: UploadSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let uploader = Arc::new(ReqwestUploader::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let uploader = uploader.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(uploader.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn upload(&self, file: UploadFile) {
        let _ = self.cmd_tx.send(EngineCommand::Upload { file });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    uploader: &dyn Uploader,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Upload { file } => {
            let result = uploader.upload(&file).await;
            let _ = event_tx.send(EngineEvent::UploadCompleted { result });
        }
    }
}
