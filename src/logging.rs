use tracing_subscriber::{fmt, EnvFilter};

/// 로그 시스템을 초기화한다. 바이너리에서만 호출하며 엔진은 구독자를 설치하지 않는다.
///
/// `RUST_LOG` 환경 변수로 레벨을 지정한다 (기본값 info).
/// 예: `RUST_LOG=pci_projection=debug` 로 예산 탐색 과정을 볼 수 있다.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// 테스트용 로그 초기화. 여러 번 호출해도 안전하다.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
