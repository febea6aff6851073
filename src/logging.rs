//! 日誌系統初始化

use tracing_subscriber::{fmt, EnvFilter};

/// 初始化日誌系統
///
/// 日誌級別由 `RUST_LOG` 控制，預設為 info，例如 `RUST_LOG=reorder_calc=debug`。
/// 日誌輸出至 stderr，補貨計劃本身輸出至 stdout。
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .init();
}
