use serde::{Deserialize, Serialize};

use crate::error::ProjectionError;
use crate::pavement::{full_funding_requirement, ModelConstants, SurfaceType};

/// 호출자가 매 계산마다 구성하는 입력 값.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceInputs {
    /// 아스팔트 연장 [mile]
    pub asphalt_miles: f64,
    /// 콘크리트 연장 [mile]
    pub concrete_miles: f64,
    /// 현재 아스팔트 PCI (0~100)
    #[serde(rename = "asphaltPCI")]
    pub asphalt_pci: f64,
    /// 현재 콘크리트 PCI (0~100)
    #[serde(rename = "concretePCI")]
    pub concrete_pci: f64,
    /// 두 표면 종류가 공유하는 연간 유지보수 예산 [$]
    pub annual_budget: f64,
}

impl SurfaceInputs {
    pub fn miles(&self, surface: SurfaceType) -> f64 {
        match surface {
            SurfaceType::Asphalt => self.asphalt_miles,
            SurfaceType::Concrete => self.concrete_miles,
        }
    }

    pub fn pci(&self, surface: SurfaceType) -> f64 {
        match surface {
            SurfaceType::Asphalt => self.asphalt_pci,
            SurfaceType::Concrete => self.concrete_pci,
        }
    }

    pub fn total_miles(&self) -> f64 {
        self.asphalt_miles + self.concrete_miles
    }

    /// 두 종류 모두 연장이 0 인 경우.
    pub fn is_degenerate(&self) -> bool {
        self.asphalt_miles == 0.0 && self.concrete_miles == 0.0
    }

    /// 연장이 0 보다 큰 표면 종류.
    pub fn active_surfaces(&self) -> impl Iterator<Item = SurfaceType> + '_ {
        SurfaceType::ALL
            .into_iter()
            .filter(move |s| self.miles(*s) > 0.0)
    }

    /// 같은 입력에서 예산만 바꾼 사본.
    pub fn with_budget(&self, annual_budget: f64) -> Self {
        Self {
            annual_budget,
            ..*self
        }
    }

    /// 입력값을 검증한다. 잘못된 값은 보정하지 않고 필드명을 담아 즉시 거부한다.
    pub fn validate(&self) -> Result<(), ProjectionError> {
        check_miles("asphaltMiles", self.asphalt_miles)?;
        check_miles("concreteMiles", self.concrete_miles)?;
        check_pci("asphaltPCI", self.asphalt_pci)?;
        check_pci("concretePCI", self.concrete_pci)?;
        if !self.annual_budget.is_finite() {
            return Err(ProjectionError::NonFinite {
                field: "annualBudget",
            });
        }
        if self.annual_budget < 0.0 {
            return Err(ProjectionError::NegativeBudget {
                value: self.annual_budget,
            });
        }
        Ok(())
    }

    /// 연장 × 단가의 합이 유한한지 확인한다. 유한한 연장이라도 곱셈에서 넘칠 수 있다.
    pub fn validate_requirement(&self, constants: &ModelConstants) -> Result<(), ProjectionError> {
        let total: f64 = SurfaceType::ALL
            .iter()
            .map(|s| full_funding_requirement(self.miles(*s), *s, constants))
            .sum();
        if !total.is_finite() {
            return Err(ProjectionError::RequirementOverflow {
                asphalt_miles: self.asphalt_miles,
                concrete_miles: self.concrete_miles,
            });
        }
        Ok(())
    }
}

fn check_miles(field: &'static str, value: f64) -> Result<(), ProjectionError> {
    if !value.is_finite() {
        return Err(ProjectionError::NonFinite { field });
    }
    if value < 0.0 {
        return Err(ProjectionError::NegativeMileage { field, value });
    }
    Ok(())
}

fn check_pci(field: &'static str, value: f64) -> Result<(), ProjectionError> {
    if !value.is_finite() {
        return Err(ProjectionError::NonFinite { field });
    }
    if !(0.0..=100.0).contains(&value) {
        return Err(ProjectionError::PciOutOfRange { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> SurfaceInputs {
        SurfaceInputs {
            asphalt_miles: 100.0,
            concrete_miles: 50.0,
            asphalt_pci: 70.0,
            concrete_pci: 80.0,
            annual_budget: 250_000.0,
        }
    }

    #[test]
    fn accepts_valid_inputs() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn names_offending_field() {
        let inputs = SurfaceInputs {
            concrete_miles: -3.0,
            ..valid()
        };
        assert_eq!(
            inputs.validate(),
            Err(ProjectionError::NegativeMileage {
                field: "concreteMiles",
                value: -3.0
            })
        );

        let inputs = SurfaceInputs {
            asphalt_pci: 100.5,
            ..valid()
        };
        assert!(matches!(
            inputs.validate(),
            Err(ProjectionError::PciOutOfRange { field: "asphaltPCI", .. })
        ));

        let inputs = SurfaceInputs {
            annual_budget: f64::NAN,
            ..valid()
        };
        assert_eq!(
            inputs.validate(),
            Err(ProjectionError::NonFinite {
                field: "annualBudget"
            })
        );
    }

    #[test]
    fn huge_finite_mileage_overflows_requirement() {
        let c = ModelConstants::default();
        let inputs = SurfaceInputs {
            asphalt_miles: 1e305,
            concrete_miles: 1.0,
            ..valid()
        };
        assert!(inputs.validate().is_ok());
        assert!(matches!(
            inputs.validate_requirement(&c),
            Err(ProjectionError::RequirementOverflow { .. })
        ));
        assert!(valid().validate_requirement(&c).is_ok());
    }

    #[test]
    fn active_surfaces_skip_zero_mileage() {
        let inputs = SurfaceInputs {
            concrete_miles: 0.0,
            ..valid()
        };
        let active: Vec<_> = inputs.active_surfaces().collect();
        assert_eq!(active, vec![SurfaceType::Asphalt]);
    }
}
