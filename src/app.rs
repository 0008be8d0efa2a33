use std::path::Path;

use thiserror::Error;

use crate::config::{self, Config, ConfigError, ReportFormat};
use crate::error::ProjectionError;
use crate::projection::{calculate_projections_with, SurfaceInputs};
use crate::ui_cli::{self, Cli, Command, InputArgs};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 입력 검증 오류
    #[error("{0}")]
    Projection(#[from] ProjectionError),
    /// JSON 직렬화 오류
    #[error("JSON 직렬화 오류: {0}")]
    Json(#[from] serde_json::Error),
}

/// 명령줄 인자에 따라 애플리케이션을 실행한다.
pub fn run(cli: Cli) -> Result<(), AppError> {
    let config_path = cli.config.as_path();
    match cli.command {
        Command::Project { inputs, format } => {
            let cfg = config::load_or_default(config_path)?;
            let format = format.unwrap_or(cfg.report.format);
            run_once(&cfg, &SurfaceInputs::from(inputs), format)
        }
        Command::Interactive => {
            let cfg = config::load_or_default(config_path)?;
            run_interactive(&cfg)
        }
        Command::InitConfig { force } => init_config(config_path, force),
    }
}

fn run_once(cfg: &Config, inputs: &SurfaceInputs, format: ReportFormat) -> Result<(), AppError> {
    let results = calculate_projections_with(inputs, &cfg.model)?;
    tracing::info!(
        suggested_budget = results.suggested_budget,
        attainable = results.floor_attainable,
        "projection complete"
    );
    match format {
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&results)?),
        ReportFormat::Text => ui_cli::print_report(inputs, &results, &cfg.model),
    }
    Ok(())
}

/// 입력을 반복해서 받아 매번 다시 계산한다. 잘못된 입력은 오류만 보여주고 계속한다.
fn run_interactive(cfg: &Config) -> Result<(), AppError> {
    let mut inputs = SurfaceInputs::default();
    loop {
        inputs = ui_cli::prompt_inputs(&inputs)?;
        match calculate_projections_with(&inputs, &cfg.model) {
            Ok(results) => ui_cli::print_report(&inputs, &results, &cfg.model),
            Err(err) => println!("{err}"),
        }
        if !ui_cli::prompt_continue()? {
            break;
        }
    }
    Ok(())
}

fn init_config(path: &Path, force: bool) -> Result<(), AppError> {
    if path.exists() && !force {
        println!("{} 이(가) 이미 존재합니다. 덮어쓰려면 --force 를 사용하세요.", path.display());
        return Ok(());
    }
    Config::default().save(path)?;
    println!("기본 설정을 {} 에 저장했습니다.", path.display());
    Ok(())
}

impl From<InputArgs> for SurfaceInputs {
    fn from(args: InputArgs) -> Self {
        SurfaceInputs {
            asphalt_miles: args.asphalt_miles,
            concrete_miles: args.concrete_miles,
            asphalt_pci: args.asphalt_pci,
            concrete_pci: args.concrete_pci,
            annual_budget: args.budget,
        }
    }
}
