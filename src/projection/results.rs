use serde::{Deserialize, Serialize};

use crate::pavement::SurfaceType;
use crate::projection::SurfaceInputs;

/// 예측 시나리오.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scenario {
    NoMaintenance,
    WithMaintenance,
}

/// 한 해의 예측 값. 모든 PCI 는 [0, 100] 범위로 제한된다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionPoint {
    pub year: u32,
    pub asphalt_no_maintenance: f64,
    pub asphalt_with_maintenance: f64,
    pub concrete_no_maintenance: f64,
    pub concrete_with_maintenance: f64,
}

impl ProjectionPoint {
    pub fn value(&self, surface: SurfaceType, scenario: Scenario) -> f64 {
        match (surface, scenario) {
            (SurfaceType::Asphalt, Scenario::NoMaintenance) => self.asphalt_no_maintenance,
            (SurfaceType::Asphalt, Scenario::WithMaintenance) => self.asphalt_with_maintenance,
            (SurfaceType::Concrete, Scenario::NoMaintenance) => self.concrete_no_maintenance,
            (SurfaceType::Concrete, Scenario::WithMaintenance) => self.concrete_with_maintenance,
        }
    }
}

/// 엔진의 유일한 출력 값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResults {
    /// 0년차부터 예측 기간 끝까지 오름차순.
    pub projections: Vec<ProjectionPoint>,
    /// 안전 하한을 지키는 최소 연간 예산 [$].
    pub suggested_budget: f64,
    /// `false` 이면 탐색 상한에서도 하한을 지킬 수 없어 `suggested_budget` 이 상한 값이다.
    pub floor_attainable: bool,
}

impl ProjectionResults {
    pub fn point(&self, year: u32) -> Option<&ProjectionPoint> {
        self.projections.iter().find(|p| p.year == year)
    }

    /// 마지막 해의 예측 값. 요약 화면이 읽는 값이다.
    pub fn final_point(&self) -> Option<&ProjectionPoint> {
        self.projections.last()
    }

    /// 연장 가중 평균 PCI. 연장이 0 인 종류는 가중치가 없고, 전체 연장이 0 이면 `None`.
    pub fn network_average(
        &self,
        year: u32,
        scenario: Scenario,
        inputs: &SurfaceInputs,
    ) -> Option<f64> {
        let point = self.point(year)?;
        let total = inputs.total_miles();
        if total <= 0.0 {
            return None;
        }
        let weighted: f64 = SurfaceType::ALL
            .iter()
            .map(|s| inputs.miles(*s) * point.value(*s, scenario))
            .sum();
        Some(weighted / total)
    }
}
