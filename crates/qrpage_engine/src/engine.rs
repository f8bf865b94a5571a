use std::io;
use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use page_logging::{page_debug, page_info, page_warn};

use crate::download::save_download;
use crate::{
    DebounceTimer, DirectorySink, EncodeOptions, Encoder, EncodingError, EngineEvent, Generation,
    ImageSink, QrEncoder, Ticket,
};

#[derive(Debug, Clone)]
pub struct EngineSettings {
    pub options: EncodeOptions,
    pub download_dir: PathBuf,
}

enum EngineCommand {
    ScheduleSettle { ticket: Ticket, delay: Duration },
    Encode { generation: Generation, text: String },
    Save { png: Arc<[u8]>, timestamp_ms: i64 },
}

/// Command side of the engine thread. Events come back on the receiver
/// returned from the constructor.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(settings: EngineSettings) -> io::Result<(Self, mpsc::Receiver<EngineEvent>)> {
        Self::with_parts(
            settings.options,
            Arc::new(QrEncoder),
            Arc::new(DirectorySink::new(settings.download_dir)),
        )
    }

    pub fn with_parts(
        options: EncodeOptions,
        encoder: Arc<dyn Encoder>,
        sink: Arc<dyn ImageSink>,
    ) -> io::Result<(Self, mpsc::Receiver<EngineEvent>)> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_time()
            .build()?;

        thread::Builder::new()
            .name("qrpage-engine".to_string())
            .spawn(move || {
                let mut debounce = DebounceTimer::new();
                while let Ok(command) = cmd_rx.recv() {
                    handle_command(
                        &runtime,
                        &mut debounce,
                        command,
                        &options,
                        &encoder,
                        &sink,
                        &event_tx,
                    );
                }
                page_debug!("Engine command channel closed; shutting down");
            })?;

        Ok((Self { cmd_tx }, event_rx))
    }

    pub fn schedule_settle(&self, ticket: Ticket, delay: Duration) {
        let _ = self
            .cmd_tx
            .send(EngineCommand::ScheduleSettle { ticket, delay });
    }

    pub fn encode(&self, generation: Generation, text: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Encode {
            generation,
            text: text.into(),
        });
    }

    pub fn save(&self, png: Arc<[u8]>, timestamp_ms: i64) {
        let _ = self.cmd_tx.send(EngineCommand::Save { png, timestamp_ms });
    }
}

fn handle_command(
    runtime: &tokio::runtime::Runtime,
    debounce: &mut DebounceTimer,
    command: EngineCommand,
    options: &EncodeOptions,
    encoder: &Arc<dyn Encoder>,
    sink: &Arc<dyn ImageSink>,
    event_tx: &mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::ScheduleSettle { ticket, delay } => {
            let event_tx = event_tx.clone();
            debounce.restart(runtime.handle(), delay, move || async move {
                let _ = event_tx.send(EngineEvent::DebounceElapsed { ticket });
            });
        }
        EngineCommand::Encode { generation, text } => {
            page_debug!("Encode generation={} text_len={}", generation, text.len());
            let encoder = encoder.clone();
            let options = options.clone();
            let event_tx = event_tx.clone();
            runtime.spawn(async move {
                let result =
                    tokio::task::spawn_blocking(move || encoder.encode(&text, &options)).await;
                let result = match result {
                    Ok(result) => result,
                    Err(err) => Err(EncodingError::TaskFailed(err.to_string())),
                };
                let _ = event_tx.send(EngineEvent::EncodeCompleted { generation, result });
            });
        }
        EngineCommand::Save { png, timestamp_ms } => {
            let sink = sink.clone();
            let event_tx = event_tx.clone();
            runtime.spawn(async move {
                let result = tokio::task::spawn_blocking(move || {
                    save_download(sink.as_ref(), &png, timestamp_ms)
                })
                .await;
                let result = match result {
                    Ok(Ok(path)) => {
                        page_info!("Saved QR image to {:?}", path);
                        Ok(path)
                    }
                    Ok(Err(err)) => {
                        page_warn!("Failed to save QR image: {}", err);
                        Err(err.to_string())
                    }
                    Err(err) => Err(format!("save task did not complete: {err}")),
                };
                let _ = event_tx.send(EngineEvent::DownloadCompleted { result });
            });
        }
    }
}
