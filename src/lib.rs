//! 포장 상태 지수(PCI) 예측과 유지보수 예산 산정 로직을 라이브러리로 분리하여
//! CLI 뿐 아니라 HTTP 핸들러나 배치 작업에서도 그대로 호출할 수 있게 한다.

pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod pavement;
pub mod projection;
pub mod ui_cli;

pub use error::ProjectionError;
pub use pavement::{ModelConstants, PciBand, SurfaceType};
pub use projection::{
    calculate_projections, calculate_projections_with, ProjectionPoint, ProjectionResults,
    Scenario, SurfaceInputs,
};
