use thiserror::Error;

/// 예측 엔진 호출 시 발생 가능한 오류를 표현한다.
///
/// 입력값은 엄격히 검증하며 조용히 보정하지 않는다. 계산 도중의 PCI 값만
/// [0, 100]으로 잘라낸다.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    /// NaN 또는 무한대 입력
    #[error("입력 오류: {field} 값이 유한한 숫자가 아닙니다.")]
    NonFinite { field: &'static str },
    /// 음수 연장
    #[error("입력 오류: {field} 연장은 0 이상이어야 합니다 (입력값 {value}).")]
    NegativeMileage { field: &'static str, value: f64 },
    /// PCI 범위 이탈
    #[error("입력 오류: {field} 는 0~100 범위여야 합니다 (입력값 {value}).")]
    PciOutOfRange { field: &'static str, value: f64 },
    /// 음수 예산
    #[error("입력 오류: annualBudget 는 0 이상이어야 합니다 (입력값 {value}).")]
    NegativeBudget { value: f64 },
    /// 연장이 너무 커서 완전 정비 소요액이 유한한 값이 아님
    #[error(
        "입력 오류: 연장이 너무 커서 완전 정비 소요액을 계산할 수 없습니다 \
         (asphaltMiles {asphalt_miles}, concreteMiles {concrete_miles})."
    )]
    RequirementOverflow {
        asphalt_miles: f64,
        concrete_miles: f64,
    },
    /// 모델 상수가 허용 범위를 벗어남
    #[error("모델 상수 오류: {name} = {value} 는 허용되지 않는 값입니다.")]
    InvalidConstant { name: &'static str, value: f64 },
}
