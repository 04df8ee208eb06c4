use crate::client::ServiceClient;
use crate::model::{AnalysisRequest, AnalysisResult};
use crate::report;
use crate::session::CachedAnalysis;
use std::path::PathBuf;
use std::sync::mpsc as std_mpsc;
use tokio::sync::mpsc as tokio_mpsc;
use tracing::{error, info};

#[derive(Debug)]
pub enum UiCommand {
    Analyze(AnalysisRequest),
    GenerateReport {
        analysis: CachedAnalysis,
        download_dir: PathBuf,
    },
}

#[derive(Debug)]
pub enum BackgroundEvent {
    AnalysisSucceeded {
        request: AnalysisRequest,
        result: AnalysisResult,
    },
    AnalysisFailed(String),
    ReportSaved(PathBuf),
    ReportFailed(String),
}

#[derive(Debug)]
pub struct BridgeChannels {
    pub cmd_tx: tokio_mpsc::UnboundedSender<UiCommand>,
    pub event_rx: std_mpsc::Receiver<BackgroundEvent>,
}

pub fn setup_bridge(client: ServiceClient, ctx: egui::Context) -> BridgeChannels {
    let (cmd_tx, cmd_rx) = tokio_mpsc::unbounded_channel::<UiCommand>();
    let (event_tx, event_rx) = std_mpsc::channel::<BackgroundEvent>();

    std::thread::spawn(move || {
        let rt = match tokio::runtime::Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                error!("Failed to create tokio runtime: {}", e);
                return;
            }
        };
        rt.block_on(background_loop(client, cmd_rx, event_tx, ctx));
    });

    BridgeChannels { cmd_tx, event_rx }
}

async fn background_loop(
    client: ServiceClient,
    mut cmd_rx: tokio_mpsc::UnboundedReceiver<UiCommand>,
    event_tx: std_mpsc::Sender<BackgroundEvent>,
    ctx: egui::Context,
) {
    while let Some(cmd) = cmd_rx.recv().await {
        let client = client.clone();
        let tx = event_tx.clone();
        let ctx2 = ctx.clone();
        tokio::spawn(async move {
            // A panicking task still has to release its busy control, so the
            // failure event is sent from outside the spawned work.
            let (work, on_panic) = match cmd {
                UiCommand::Analyze(request) => (
                    tokio::spawn(handle_analyze(client, request)),
                    BackgroundEvent::AnalysisFailed as fn(String) -> BackgroundEvent,
                ),
                UiCommand::GenerateReport {
                    analysis,
                    download_dir,
                } => (
                    tokio::spawn(handle_report(client, analysis, download_dir)),
                    BackgroundEvent::ReportFailed as fn(String) -> BackgroundEvent,
                ),
            };

            let event = match work.await {
                Ok(event) => event,
                Err(e) => {
                    error!("Background task panicked: {}", e);
                    on_panic(format!("internal error: {e}"))
                }
            };

            if let Err(e) = tx.send(event) {
                tracing::warn!("Failed to send event to UI: {}", e);
            }
            ctx2.request_repaint();
        });
    }
}

async fn handle_analyze(client: ServiceClient, request: AnalysisRequest) -> BackgroundEvent {
    match client.analyze(&request).await {
        Ok(result) => {
            info!(
                is_phishing = result.is_phishing,
                urls = result.urls().len(),
                "Analysis complete"
            );
            BackgroundEvent::AnalysisSucceeded { request, result }
        }
        Err(e) => {
            error!("Analysis failed: {}", e);
            BackgroundEvent::AnalysisFailed(e.user_message())
        }
    }
}

async fn handle_report(
    client: ServiceClient,
    analysis: CachedAnalysis,
    download_dir: PathBuf,
) -> BackgroundEvent {
    let bytes = match client.report(&analysis).await {
        Ok(bytes) => bytes,
        Err(e) => {
            error!("Report generation failed: {}", e);
            return BackgroundEvent::ReportFailed(e.user_message());
        }
    };

    match report::save_report(&bytes, &download_dir) {
        Ok(path) => BackgroundEvent::ReportSaved(path),
        Err(e) => {
            error!("Failed to save report: {}", e);
            BackgroundEvent::ReportFailed(e.user_message())
        }
    }
}
