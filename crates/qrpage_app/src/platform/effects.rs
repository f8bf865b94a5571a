use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use chrono::Utc;
use page_logging::{page_debug, page_info, page_warn};
use qrpage_core::{DownloadOutcome, Effect, EncodeOutcome, EncodedImage, Msg};
use qrpage_engine::{EngineEvent, EngineHandle, EngineSettings, QrImage};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(msg_tx: mpsc::Sender<Msg>, settings: EngineSettings) -> io::Result<Self> {
        let (engine, events) = EngineHandle::new(settings)?;
        spawn_event_loop(events, msg_tx)?;
        Ok(Self { engine })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ScheduleSettle { ticket, delay } => {
                    self.engine.schedule_settle(ticket, delay);
                }
                Effect::Encode { generation, text } => {
                    page_info!(
                        "Encode generation={} text_len={}",
                        generation,
                        text.len()
                    );
                    self.engine.encode(generation, text);
                }
                Effect::SaveImage { image } => {
                    let timestamp_ms = Utc::now().timestamp_millis();
                    page_info!(
                        "SaveImage bytes={} timestamp_ms={}",
                        image.png.len(),
                        timestamp_ms
                    );
                    self.engine.save(image.png, timestamp_ms);
                }
            }
        }
    }
}

fn spawn_event_loop(
    events: mpsc::Receiver<EngineEvent>,
    msg_tx: mpsc::Sender<Msg>,
) -> io::Result<()> {
    thread::Builder::new()
        .name("qrpage-events".to_string())
        .spawn(move || {
            for event in events {
                if msg_tx.send(map_event(event)).is_err() {
                    break;
                }
            }
            page_debug!("Engine event loop finished");
        })?;
    Ok(())
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::DebounceElapsed { ticket } => Msg::DebounceElapsed { ticket },
        EngineEvent::EncodeCompleted { generation, result } => {
            let outcome = match result {
                Ok(image) => EncodeOutcome::Encoded(to_encoded_image(&image)),
                Err(err) => {
                    page_warn!(
                        "Failed to generate QR code (generation {}): {}",
                        generation,
                        err
                    );
                    EncodeOutcome::Failed
                }
            };
            Msg::EncodeFinished {
                generation,
                outcome,
            }
        }
        EngineEvent::DownloadCompleted { result } => Msg::DownloadFinished(match result {
            Ok(path) => DownloadOutcome::Saved {
                path: path.display().to_string(),
            },
            Err(reason) => DownloadOutcome::Failed { reason },
        }),
    }
}

fn to_encoded_image(image: &QrImage) -> EncodedImage {
    EncodedImage {
        png: Arc::from(image.png.as_slice()),
        width: image.width,
        height: image.height,
        preview: Arc::from(image.preview()),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use qrpage_core::{DownloadOutcome, EncodeOutcome, Msg};
    use qrpage_engine::{
        EncodeOptions, Encoder, EncodingError, EngineEvent, ErrorCorrection, QrEncoder,
    };

    use super::map_event;

    #[test]
    fn encode_success_maps_to_encoded_image() {
        let image = QrEncoder
            .encode("03339501", &EncodeOptions::default())
            .unwrap();
        let msg = map_event(EngineEvent::EncodeCompleted {
            generation: 3,
            result: Ok(image.clone()),
        });

        match msg {
            Msg::EncodeFinished {
                generation: 3,
                outcome: EncodeOutcome::Encoded(encoded),
            } => {
                assert_eq!(&*encoded.png, image.png.as_slice());
                assert_eq!((encoded.width, encoded.height), (400, 400));
                assert_eq!(encoded.preview.len(), image.preview().len());
            }
            other => panic!("unexpected msg {other:?}"),
        }
    }

    #[test]
    fn encode_failure_maps_to_failed() {
        let msg = map_event(EngineEvent::EncodeCompleted {
            generation: 9,
            result: Err(EncodingError::DataTooLong {
                level: ErrorCorrection::High,
            }),
        });

        assert_eq!(
            msg,
            Msg::EncodeFinished {
                generation: 9,
                outcome: EncodeOutcome::Failed,
            }
        );
    }

    #[test]
    fn download_result_maps_to_outcome() {
        let msg = map_event(EngineEvent::DownloadCompleted {
            result: Ok(PathBuf::from("downloads/qrcode-1.png")),
        });

        assert_eq!(
            msg,
            Msg::DownloadFinished(DownloadOutcome::Saved {
                path: PathBuf::from("downloads/qrcode-1.png").display().to_string(),
            })
        );
    }
}
