use tracing_subscriber::{fmt, EnvFilter};

/// 로그 초기화. `RUST_LOG`가 있으면 그 필터를 쓰고, 없으면 경고만 남긴다.
///
/// 프로그램 출력이 stdout을 쓰므로 로그는 항상 stderr로 보낸다.
pub fn init_logging(verbose: bool) {
    let default = if verbose {
        "debug,haebyeong_lang=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
