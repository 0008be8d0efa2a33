//! PCI 예측 파이프라인: 입력 검증 → 연도별 궤적 → 예산 탐색 → 결과 조립.
//! 상태가 없는 순수 함수로, 같은 입력이면 비트 단위로 같은 결과를 돌려준다.

pub mod driver;
pub mod inputs;
pub mod results;
pub mod solver;

pub use driver::{project, trajectory, HORIZON_YEARS};
pub use inputs::SurfaceInputs;
pub use results::{ProjectionPoint, ProjectionResults, Scenario};
pub use solver::{meets_floor, search_upper_bound, suggest_budget, BudgetSearch};

use crate::error::ProjectionError;
use crate::pavement::ModelConstants;

/// 기본 모델 상수로 예측을 계산한다.
pub fn calculate_projections(inputs: &SurfaceInputs) -> Result<ProjectionResults, ProjectionError> {
    calculate_projections_with(inputs, &ModelConstants::default())
}

/// 지정한 모델 상수로 예측을 계산한다.
pub fn calculate_projections_with(
    inputs: &SurfaceInputs,
    constants: &ModelConstants,
) -> Result<ProjectionResults, ProjectionError> {
    constants.validate()?;
    inputs.validate()?;
    inputs.validate_requirement(constants)?;
    let projections = project(inputs, constants);
    let search = suggest_budget(inputs, constants);
    Ok(ProjectionResults {
        projections,
        suggested_budget: search.budget,
        floor_attainable: search.attainable,
    })
}
