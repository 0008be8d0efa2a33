use crate::pavement::{ModelConstants, SurfaceType};

/// PCI 값을 [0, 100] 범위로 제한한다.
pub fn clamp_pci(pci: f64) -> f64 {
    pci.clamp(0.0, 100.0)
}

/// 무투자 상태의 연간 PCI 손실량.
///
/// 손실 = 기본 열화율 × (1 + 가속계수 × (100 - PCI) / 100)
/// 상태가 나쁠수록 손실이 커진다 (양호 구간은 완만, Fair 이하에서 빠르게 열화).
pub fn annual_loss(pci: f64, surface: SurfaceType, constants: &ModelConstants) -> f64 {
    let deficit = (100.0 - pci) / 100.0;
    constants.decay_rate(surface) * (1.0 + constants.decay_acceleration * deficit)
}

/// 한 해 경과 후의 PCI. `funding_ratio` 만큼 연간 손실이 상쇄된다.
///
/// 무투자 모델과 유지보수 모델이 모두 이 점화식을 공유하므로 비율 0 에서
/// 두 모델의 결과는 비트 단위로 같다.
pub fn next_year_pci(
    pci: f64,
    surface: SurfaceType,
    funding_ratio: f64,
    constants: &ModelConstants,
) -> f64 {
    let loss = annual_loss(pci, surface, constants) * (1.0 - funding_ratio);
    clamp_pci(pci - loss)
}

/// 기준 PCI `p0` 에서 `years` 년 경과한 무투자 PCI.
///
/// 닫힌 식이 아니라 `p[t] = f(p[t-1])` 점화식을 매년 적용한다.
pub fn decay(p0: f64, years: u32, surface: SurfaceType, constants: &ModelConstants) -> f64 {
    (0..years).fold(p0, |pci, _| next_year_pci(pci, surface, 0.0, constants))
}
