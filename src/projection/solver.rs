use tracing::{debug, trace};

use crate::pavement::{full_funding_requirement, ModelConstants};
use crate::projection::driver::with_maintenance_series;
use crate::projection::SurfaceInputs;

/// 예산 탐색 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetSearch {
    /// 하한을 지키는 최소 예산, 또는 도달 불가 시 탐색 상한 [$]
    pub budget: f64,
    /// 상한 내에서 하한을 지킬 수 있는지 여부
    pub attainable: bool,
    /// 이분 탐색 반복 횟수
    pub iterations: u32,
}

/// 주어진 예산에서 연장이 있는 모든 표면 종류의 유지보수 궤적이 전 기간 하한 이상인지.
pub fn meets_floor(inputs: &SurfaceInputs, annual_budget: f64, constants: &ModelConstants) -> bool {
    let candidate = inputs.with_budget(annual_budget);
    inputs.active_surfaces().all(|surface| {
        with_maintenance_series(&candidate, surface, constants)
            .iter()
            .all(|pci| *pci >= constants.safety_floor)
    })
}

/// 탐색 상한: 전체 도로망 완전 정비 소요액.
///
/// 충족률은 1 에서 포화되므로 이 이상의 예산은 궤적을 바꾸지 않는다.
pub fn search_upper_bound(inputs: &SurfaceInputs, constants: &ModelConstants) -> f64 {
    inputs
        .active_surfaces()
        .map(|s| full_funding_requirement(inputs.miles(s), s, constants))
        .sum()
}

/// 안전 하한을 지키는 최소 연간 예산을 이분 탐색으로 찾는다.
///
/// 유지보수 궤적은 모든 연도에서 예산에 대해 단조 비감소이므로 판정식도 단조이다.
/// 허용오차는 절대 허용오차와 (상한 × 상대 허용오차) 중 큰 값이며 반복 횟수는 상수로 제한된다.
/// 상한에서도 하한을 지킬 수 없으면 오류 대신 상한 값을 돌려준다.
pub fn suggest_budget(inputs: &SurfaceInputs, constants: &ModelConstants) -> BudgetSearch {
    if inputs.active_surfaces().next().is_none() || meets_floor(inputs, 0.0, constants) {
        return BudgetSearch {
            budget: 0.0,
            attainable: true,
            iterations: 0,
        };
    }

    let upper = search_upper_bound(inputs, constants);
    if !meets_floor(inputs, upper, constants) {
        debug!(upper, floor = constants.safety_floor, "safety floor not attainable");
        return BudgetSearch {
            budget: upper,
            attainable: false,
            iterations: 0,
        };
    }

    let tolerance = constants
        .solver_abs_tolerance
        .max(upper * constants.solver_rel_tolerance);
    let mut lo = 0.0;
    let mut hi = upper;
    let mut iterations = 0;
    while hi - lo > tolerance && iterations < constants.solver_max_iterations {
        let mid = (lo + hi) * 0.5;
        if meets_floor(inputs, mid, constants) {
            hi = mid;
        } else {
            lo = mid;
        }
        iterations += 1;
        trace!(iterations, lo, hi, "budget bracket");
    }

    debug!(budget = hi, iterations, tolerance, "suggested budget");
    BudgetSearch {
        budget: hi,
        attainable: true,
        iterations,
    }
}
