use crate::pavement::{allocate_budget, funding_ratio, next_year_pci, ModelConstants, SurfaceType};
use crate::projection::{ProjectionPoint, SurfaceInputs};

/// 예측 기간 [년]. 0년차를 포함해 HORIZON_YEARS + 1 개의 점을 만든다.
pub const HORIZON_YEARS: u32 = 5;

/// 기준 PCI 에서 시작하는 연도별 궤적. 0번 요소는 `p0` 그대로이다.
pub fn trajectory(
    p0: f64,
    surface: SurfaceType,
    ratio: f64,
    constants: &ModelConstants,
) -> Vec<f64> {
    let mut series = Vec::with_capacity(HORIZON_YEARS as usize + 1);
    series.push(p0);
    let mut pci = p0;
    for _ in 0..HORIZON_YEARS {
        pci = next_year_pci(pci, surface, ratio, constants);
        series.push(pci);
    }
    series
}

/// 표면 종류별 (무투자, 유지보수) 궤적 쌍.
struct SurfaceSeries {
    no_maintenance: Vec<f64>,
    with_maintenance: Vec<f64>,
}

/// 유지보수 시나리오의 궤적만 계산한다. 예산 탐색에서 반복 호출된다.
pub(crate) fn with_maintenance_series(
    inputs: &SurfaceInputs,
    surface: SurfaceType,
    constants: &ModelConstants,
) -> Vec<f64> {
    let p0 = inputs.pci(surface);
    if inputs.is_degenerate() {
        return vec![p0; HORIZON_YEARS as usize + 1];
    }
    let allocation = allocate_budget(
        inputs.annual_budget,
        inputs.asphalt_miles,
        inputs.concrete_miles,
        constants,
    );
    let miles = inputs.miles(surface);
    let ratio = funding_ratio(allocation.share(surface), miles, surface, constants);
    trajectory(p0, surface, ratio, constants)
}

fn surface_series(
    inputs: &SurfaceInputs,
    surface: SurfaceType,
    constants: &ModelConstants,
) -> SurfaceSeries {
    let p0 = inputs.pci(surface);
    // 관리 대상 도로망이 없으면 기준값에서 평탄한 궤적을 돌려준다.
    let no_maintenance = if inputs.is_degenerate() {
        vec![p0; HORIZON_YEARS as usize + 1]
    } else {
        trajectory(p0, surface, 0.0, constants)
    };
    SurfaceSeries {
        no_maintenance,
        with_maintenance: with_maintenance_series(inputs, surface, constants),
    }
}

/// 두 표면 종류와 두 시나리오에 대해 연도별 예측 점을 조립한다.
///
/// 연장이 0 인 종류도 생략하지 않고 계산하여 출력 형태를 고정한다.
pub fn project(inputs: &SurfaceInputs, constants: &ModelConstants) -> Vec<ProjectionPoint> {
    let asphalt = surface_series(inputs, SurfaceType::Asphalt, constants);
    let concrete = surface_series(inputs, SurfaceType::Concrete, constants);
    (0..=HORIZON_YEARS)
        .map(|year| {
            let i = year as usize;
            ProjectionPoint {
                year,
                asphalt_no_maintenance: asphalt.no_maintenance[i],
                asphalt_with_maintenance: asphalt.with_maintenance[i],
                concrete_no_maintenance: concrete.no_maintenance[i],
                concrete_with_maintenance: concrete.with_maintenance[i],
            }
        })
        .collect()
}
