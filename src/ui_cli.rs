use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::app::AppError;
use crate::config::{ReportFormat, DEFAULT_CONFIG_PATH};
use crate::pavement::{ModelConstants, PciBand, SurfaceType};
use crate::projection::{ProjectionResults, Scenario, SurfaceInputs};

/// 포장 상태 지수(PCI) 예측 및 유지보수 예산 산정 도구.
#[derive(Debug, Parser)]
#[command(name = "pci_projection", version, about)]
pub struct Cli {
    /// 모델 상수를 담은 설정 파일
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 입력 값으로 5년 예측을 한 번 계산한다.
    Project {
        #[command(flatten)]
        inputs: InputArgs,
        /// 출력 형식 (생략 시 설정 파일 값)
        #[arg(long, value_enum)]
        format: Option<ReportFormat>,
    },
    /// 입력을 반복해서 받아 매번 다시 계산한다.
    Interactive,
    /// 기본 설정 파일을 생성한다.
    InitConfig {
        /// 기존 파일을 덮어쓴다
        #[arg(long)]
        force: bool,
    },
}

/// 도로망 입력 인자.
#[derive(Debug, Clone, Args)]
pub struct InputArgs {
    /// 아스팔트 연장 [mile]
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub asphalt_miles: f64,
    /// 콘크리트 연장 [mile]
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub concrete_miles: f64,
    /// 현재 아스팔트 PCI (0~100)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub asphalt_pci: f64,
    /// 현재 콘크리트 PCI (0~100)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub concrete_pci: f64,
    /// 연간 유지보수 예산 [$]
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub budget: f64,
}

/// 다섯 가지 입력을 차례로 받는다. 빈 입력은 직전 값을 유지한다.
pub fn prompt_inputs(previous: &SurfaceInputs) -> Result<SurfaceInputs, AppError> {
    println!("\n=== PCI Projection ===");
    println!("(엔터만 누르면 직전 값을 유지합니다)");
    Ok(SurfaceInputs {
        asphalt_miles: read_f64_or("아스팔트 연장 [mile]", previous.asphalt_miles)?,
        concrete_miles: read_f64_or("콘크리트 연장 [mile]", previous.concrete_miles)?,
        asphalt_pci: read_f64_or("아스팔트 PCI", previous.asphalt_pci)?,
        concrete_pci: read_f64_or("콘크리트 PCI", previous.concrete_pci)?,
        annual_budget: read_f64_or("연간 예산 [$]", previous.annual_budget)?,
    })
}

/// 다시 계산할지 묻는다.
pub fn prompt_continue() -> Result<bool, AppError> {
    let answer = read_line("다시 계산하시겠습니까? (y/N): ")?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

/// 연도별 표와 최종 연도 요약을 출력한다.
pub fn print_report(
    inputs: &SurfaceInputs,
    results: &ProjectionResults,
    constants: &ModelConstants,
) {
    println!(
        "\n{:>4} | {:>10} {:>10} | {:>10} {:>10}",
        "Year", "AC none", "AC maint", "PCC none", "PCC maint"
    );
    println!("{}", "-".repeat(54));
    for p in &results.projections {
        println!(
            "{:>4} | {:>10.1} {:>10.1} | {:>10.1} {:>10.1}",
            p.year,
            p.asphalt_no_maintenance,
            p.asphalt_with_maintenance,
            p.concrete_no_maintenance,
            p.concrete_with_maintenance
        );
    }

    if let Some(last) = results.final_point() {
        println!("\n{}년 후 상태:", last.year);
        for surface in inputs.active_surfaces() {
            print_surface_summary(
                surface,
                last.value(surface, Scenario::NoMaintenance),
                last.value(surface, Scenario::WithMaintenance),
            );
        }
        if let Some(avg) = results.network_average(last.year, Scenario::WithMaintenance, inputs) {
            println!("  도로망 평균 (유지보수): {avg:.1} ({})", PciBand::classify(avg).label());
        }
    }

    println!("\n권장 최소 연간 예산: ${:.0}", results.suggested_budget);
    if !results.floor_attainable {
        println!(
            "  주의: 탐색 범위 내에서 PCI {:.0} 이상을 유지할 수 없습니다. 위 값은 탐색 상한입니다.",
            constants.safety_floor
        );
    }
}

fn print_surface_summary(surface: SurfaceType, none: f64, maint: f64) {
    println!(
        "  {:<8} 무투자 {:>5.1} ({:<9}) / 유지보수 {:>5.1} ({})",
        surface.label(),
        none,
        PciBand::classify(none).label(),
        maint,
        PciBand::classify(maint).label()
    );
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}

fn read_f64_or(label: &str, current: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(&format!("{label} [{current}]: "))?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(current);
        }
        match s.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("숫자를 입력하세요."),
        }
    }
}
