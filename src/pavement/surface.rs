use serde::{Deserialize, Serialize};

/// 포장 표면 종류. 종류마다 열화 속도와 유지보수 단가가 다르다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceType {
    Asphalt,
    Concrete,
}

impl SurfaceType {
    /// 결과 배열 순서와 동일한 전체 목록.
    pub const ALL: [SurfaceType; 2] = [SurfaceType::Asphalt, SurfaceType::Concrete];

    pub fn label(self) -> &'static str {
        match self {
            SurfaceType::Asphalt => "Asphalt",
            SurfaceType::Concrete => "Concrete",
        }
    }
}

/// 시스템 전반에서 쓰는 PCI 등급 구간.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PciBand {
    /// 0~24
    Failed,
    /// 25~49
    Poor,
    /// 50~69
    Fair,
    /// 70~89
    Good,
    /// 90~100
    Excellent,
}

impl PciBand {
    /// PCI 값을 등급으로 분류한다. 구간 경계 사이의 소수 값은 아래 등급으로 내린다.
    pub fn classify(pci: f64) -> PciBand {
        if pci >= 90.0 {
            PciBand::Excellent
        } else if pci >= 70.0 {
            PciBand::Good
        } else if pci >= 50.0 {
            PciBand::Fair
        } else if pci >= 25.0 {
            PciBand::Poor
        } else {
            PciBand::Failed
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PciBand::Excellent => "Excellent",
            PciBand::Good => "Good",
            PciBand::Fair => "Fair",
            PciBand::Poor => "Poor",
            PciBand::Failed => "Failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries() {
        assert_eq!(PciBand::classify(100.0), PciBand::Excellent);
        assert_eq!(PciBand::classify(90.0), PciBand::Excellent);
        assert_eq!(PciBand::classify(89.9), PciBand::Good);
        assert_eq!(PciBand::classify(70.0), PciBand::Good);
        assert_eq!(PciBand::classify(69.5), PciBand::Fair);
        assert_eq!(PciBand::classify(50.0), PciBand::Fair);
        assert_eq!(PciBand::classify(49.0), PciBand::Poor);
        assert_eq!(PciBand::classify(25.0), PciBand::Poor);
        assert_eq!(PciBand::classify(24.9), PciBand::Failed);
        assert_eq!(PciBand::classify(0.0), PciBand::Failed);
    }

    #[test]
    fn bands_are_ordered_by_condition() {
        assert!(PciBand::Failed < PciBand::Poor);
        assert!(PciBand::Fair < PciBand::Good);
        assert!(PciBand::Good < PciBand::Excellent);
    }
}
