//! 포장 열화 및 유지보수 모델.
//! 표면 종류별 상수, PCI 등급 분류, 무투자 열화 점화식과 유지보수 반영 점화식으로 구성한다.

pub mod constants;
pub mod deterioration;
pub mod maintenance;
pub mod surface;

pub use constants::ModelConstants;
pub use deterioration::{annual_loss, clamp_pci, decay, next_year_pci};
pub use maintenance::{
    allocate_budget, decay_with_maintenance, full_funding_requirement, funding_ratio,
    BudgetAllocation,
};
pub use surface::{PciBand, SurfaceType};
