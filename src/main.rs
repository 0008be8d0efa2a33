use clap::Parser;
use pci_projection::{app, logging, ui_cli::Cli};

/// 프로그램의 엔트리 포인트. 로그를 초기화한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    logging::init();
    let cli = Cli::parse();
    if let Err(err) = app::run(cli) {
        eprintln!("오류: {err}");
        std::process::exit(1);
    }
}
