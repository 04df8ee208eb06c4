pub mod app;
pub mod bridge;
pub mod card;
pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod render;
pub mod report;
pub mod sanitize;
pub mod session;
pub mod state;
pub mod ui;
pub mod workflow;

pub use error::AppError;
pub use model::{AnalysisRequest, AnalysisResult, UrlFinding};
