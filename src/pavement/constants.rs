use serde::{Deserialize, Serialize};

use crate::error::ProjectionError;
use crate::pavement::SurfaceType;

/// 아스팔트 기본 열화율 [PCI/년, PCI 100 기준]
pub const ASPHALT_DECAY_RATE: f64 = 2.5;
/// 콘크리트 기본 열화율 [PCI/년, PCI 100 기준]. 동일 교통량에서 아스팔트보다 느리다.
pub const CONCRETE_DECAY_RATE: f64 = 1.5;
/// 상태 악화에 따른 열화 가속 계수. PCI 0 에서 연간 손실이 기본 열화율의 (1 + 계수) 배가 된다.
pub const DECAY_ACCELERATION: f64 = 1.5;
/// 아스팔트 완전 예방정비 비용 [$/mile/년]
pub const ASPHALT_FULL_FUNDING_COST_PER_MILE: f64 = 15_000.0;
/// 콘크리트 완전 예방정비 비용 [$/mile/년]
pub const CONCRETE_FULL_FUNDING_COST_PER_MILE: f64 = 10_000.0;
/// 예산 산정 시 유지해야 하는 최소 PCI ("Fair" 기준)
pub const SAFETY_FLOOR_PCI: f64 = 60.0;
/// 예산 탐색 절대 허용오차 [$]
pub const SOLVER_ABS_TOLERANCE: f64 = 1.0;
/// 예산 탐색 상대 허용오차 (탐색 상한 대비)
pub const SOLVER_REL_TOLERANCE: f64 = 1e-6;
/// 예산 탐색 최대 반복 횟수
pub const SOLVER_MAX_ITERATIONS: u32 = 100;

/// 모델의 정책 파라미터 묶음.
///
/// 값은 도메인 전문가 보정 대상이므로 config.toml의 `[model]` 테이블로 덮어쓸 수 있다.
/// 누락된 항목은 기본값을 사용한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConstants {
    pub asphalt_decay_rate: f64,
    pub concrete_decay_rate: f64,
    pub decay_acceleration: f64,
    pub asphalt_cost_per_mile: f64,
    pub concrete_cost_per_mile: f64,
    pub safety_floor: f64,
    pub solver_abs_tolerance: f64,
    pub solver_rel_tolerance: f64,
    pub solver_max_iterations: u32,
}

impl Default for ModelConstants {
    fn default() -> Self {
        Self {
            asphalt_decay_rate: ASPHALT_DECAY_RATE,
            concrete_decay_rate: CONCRETE_DECAY_RATE,
            decay_acceleration: DECAY_ACCELERATION,
            asphalt_cost_per_mile: ASPHALT_FULL_FUNDING_COST_PER_MILE,
            concrete_cost_per_mile: CONCRETE_FULL_FUNDING_COST_PER_MILE,
            safety_floor: SAFETY_FLOOR_PCI,
            solver_abs_tolerance: SOLVER_ABS_TOLERANCE,
            solver_rel_tolerance: SOLVER_REL_TOLERANCE,
            solver_max_iterations: SOLVER_MAX_ITERATIONS,
        }
    }
}

impl ModelConstants {
    /// 표면 종류별 기본 열화율.
    pub fn decay_rate(&self, surface: SurfaceType) -> f64 {
        match surface {
            SurfaceType::Asphalt => self.asphalt_decay_rate,
            SurfaceType::Concrete => self.concrete_decay_rate,
        }
    }

    /// 표면 종류별 완전 예방정비 단가 [$/mile/년].
    pub fn cost_per_mile(&self, surface: SurfaceType) -> f64 {
        match surface {
            SurfaceType::Asphalt => self.asphalt_cost_per_mile,
            SurfaceType::Concrete => self.concrete_cost_per_mile,
        }
    }

    /// 상수 값을 검증한다.
    ///
    /// 열화율은 양수여야 PCI 100 도로도 노화하고, 가속 계수가 음수가 아니어야 무투자 궤적이
    /// 단조 감소한다. 단가가 양수여야 예산 탐색 상한이 정의된다.
    pub fn validate(&self) -> Result<(), ProjectionError> {
        let non_negative = [
            ("decay_acceleration", self.decay_acceleration),
            ("solver_rel_tolerance", self.solver_rel_tolerance),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ProjectionError::InvalidConstant { name, value });
            }
        }
        let positive = [
            ("asphalt_decay_rate", self.asphalt_decay_rate),
            ("concrete_decay_rate", self.concrete_decay_rate),
            ("asphalt_cost_per_mile", self.asphalt_cost_per_mile),
            ("concrete_cost_per_mile", self.concrete_cost_per_mile),
            ("solver_abs_tolerance", self.solver_abs_tolerance),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ProjectionError::InvalidConstant { name, value });
            }
        }
        if !self.safety_floor.is_finite() || !(0.0..=100.0).contains(&self.safety_floor) {
            return Err(ProjectionError::InvalidConstant {
                name: "safety_floor",
                value: self.safety_floor,
            });
        }
        if self.solver_max_iterations == 0 {
            return Err(ProjectionError::InvalidConstant {
                name: "solver_max_iterations",
                value: 0.0,
            });
        }
        Ok(())
    }
}
