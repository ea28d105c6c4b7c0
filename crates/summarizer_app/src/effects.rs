use app_logging::{app_error, app_info};
use summarizer_core::{Effect, Msg};
use summarizer_engine::{EngineEvent, EngineHandle, UploadFile, UploadSettings};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: UploadSettings) -> Self {
        Self {
            engine: EngineHandle::new(settings),
        }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::UploadPdf { file } => {
                    app_info!(
                        "UploadPdf file={} path={}",
                        file.file_name,
                        file.path.display()
                    );
                    self.engine.upload(UploadFile {
                        path: file.path,
                        file_name: file.file_name,
                    });
                }
            }
        }
    }

    /// Drains at most one engine event into a settlement message.
    pub fn poll(&self) -> Option<Msg> {
        self.engine.try_recv().map(|event| match event {
            EngineEvent::UploadCompleted { result } => match result {
                Ok(outcome) => Msg::UploadDone {
                    result: Ok(outcome.summary),
                },
                Err(err) => {
                    app_error!("upload failed ({}): {}", err.kind, err);
                    Msg::UploadDone {
                        result: Err(err.to_string()),
                    }
                }
            },
        })
    }
}
