use crate::pavement::deterioration::next_year_pci;
use crate::pavement::{ModelConstants, SurfaceType};

/// 표면 종류별로 배분된 연간 예산 [$].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BudgetAllocation {
    pub asphalt: f64,
    pub concrete: f64,
}

impl BudgetAllocation {
    pub fn share(&self, surface: SurfaceType) -> f64 {
        match surface {
            SurfaceType::Asphalt => self.asphalt,
            SurfaceType::Concrete => self.concrete,
        }
    }
}

/// 해당 연장의 PCI를 유지하는 데 필요한 연간 예방정비 비용 [$/년].
pub fn full_funding_requirement(
    miles: f64,
    surface: SurfaceType,
    constants: &ModelConstants,
) -> f64 {
    miles * constants.cost_per_mile(surface)
}

/// 공유 예산을 표면 종류별로 배분한다.
///
/// 배분 기준은 연장이 아니라 각 종류의 완전 정비 소요액 비율이다. 단가가 다른 두 종류를
/// 연장 비율로 나누면 단가가 높은 쪽이 항상 덜 충족되므로, 소요액 비율로 나누어 두 종류가
/// 같은 충족률(funding ratio)을 갖게 한다. 필요 소요액이 0 이면 배분도 0 이다.
pub fn allocate_budget(
    annual_budget: f64,
    asphalt_miles: f64,
    concrete_miles: f64,
    constants: &ModelConstants,
) -> BudgetAllocation {
    let asphalt_need = full_funding_requirement(asphalt_miles, SurfaceType::Asphalt, constants);
    let concrete_need = full_funding_requirement(concrete_miles, SurfaceType::Concrete, constants);
    let total_need = asphalt_need + concrete_need;
    if !total_need.is_finite() || total_need <= 0.0 {
        return BudgetAllocation::default();
    }
    let coverage = annual_budget / total_need;
    BudgetAllocation {
        asphalt: asphalt_need * coverage,
        concrete: concrete_need * coverage,
    }
}

/// 배분 예산 / 완전 정비 소요액, [0, 1] 로 제한.
///
/// 초과 투자는 완전 정비 이상의 효과를 내지 않는다. 소요액이나 배분액이 유한하지 않으면
/// 비율을 정의할 수 없으므로 0 으로 본다.
pub fn funding_ratio(
    budget_share: f64,
    miles: f64,
    surface: SurfaceType,
    constants: &ModelConstants,
) -> f64 {
    let need = full_funding_requirement(miles, surface, constants);
    if !need.is_finite() || !budget_share.is_finite() || need <= 0.0 || budget_share <= 0.0 {
        return 0.0;
    }
    (budget_share / need).min(1.0)
}

/// 연간 `budget_share` 를 투입했을 때 `years` 년 후의 PCI.
///
/// 비율 0 에서는 [`crate::pavement::decay`] 와 정확히 같고, 비율 1 에서는 연간 손실이
/// 모두 상쇄되어 기준값을 유지한다.
pub fn decay_with_maintenance(
    p0: f64,
    years: u32,
    surface: SurfaceType,
    miles: f64,
    budget_share: f64,
    constants: &ModelConstants,
) -> f64 {
    let ratio = funding_ratio(budget_share, miles, surface, constants);
    (0..years).fold(p0, |pci, _| next_year_pci(pci, surface, ratio, constants))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pavement::decay;

    #[test]
    fn allocation_follows_need_not_mileage() {
        let c = ModelConstants::default();
        // 동일 연장이라도 단가 비율(15,000 : 10,000)로 나뉜다.
        let alloc = allocate_budget(100_000.0, 10.0, 10.0, &c);
        assert!((alloc.asphalt - 60_000.0).abs() < 1e-6);
        assert!((alloc.concrete - 40_000.0).abs() < 1e-6);
        let ra = funding_ratio(alloc.asphalt, 10.0, SurfaceType::Asphalt, &c);
        let rc = funding_ratio(alloc.concrete, 10.0, SurfaceType::Concrete, &c);
        assert!((ra - rc).abs() < 1e-12);
    }

    #[test]
    fn empty_network_gets_nothing() {
        let c = ModelConstants::default();
        assert_eq!(allocate_budget(5_000.0, 0.0, 0.0, &c), BudgetAllocation::default());
    }

    #[test]
    fn ratio_is_capped_at_one() {
        let c = ModelConstants::default();
        assert_eq!(funding_ratio(1e12, 1.0, SurfaceType::Asphalt, &c), 1.0);
        assert_eq!(funding_ratio(1_000.0, 0.0, SurfaceType::Asphalt, &c), 0.0);
    }

    #[test]
    fn overflowing_requirement_is_not_full_funding() {
        let c = ModelConstants::default();
        assert_eq!(funding_ratio(1.0, 1e305, SurfaceType::Asphalt, &c), 0.0);
        assert_eq!(funding_ratio(f64::NAN, 10.0, SurfaceType::Asphalt, &c), 0.0);
        assert_eq!(allocate_budget(1.0, 1e305, 1.0, &c), BudgetAllocation::default());
    }

    #[test]
    fn full_funding_holds_condition() {
        let c = ModelConstants::default();
        let need = full_funding_requirement(20.0, SurfaceType::Concrete, &c);
        let p = decay_with_maintenance(72.0, 5, SurfaceType::Concrete, 20.0, need, &c);
        assert_eq!(p, 72.0);
    }

    #[test]
    fn zero_share_matches_decay_exactly() {
        let c = ModelConstants::default();
        for t in 0..=5 {
            let plain = decay(64.0, t, SurfaceType::Asphalt, &c);
            let funded = decay_with_maintenance(64.0, t, SurfaceType::Asphalt, 12.0, 0.0, &c);
            assert_eq!(plain.to_bits(), funded.to_bits());
        }
    }
}
