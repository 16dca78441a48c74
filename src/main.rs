//! GlobalX - 物流门户智能客服
//!
//! 入口：初始化日志、创建客服编排器与 TUI，并运行主循环。

use anyhow::Context;
use globalx::{core::create_concierge, observability, ui::run_app};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // TUI 占用终端，默认只输出 warn 以上；可通过 RUST_LOG 覆盖
    observability::init("warn");

    let handle = create_concierge(None)
        .await
        .context("Failed to create concierge")?;

    run_app(handle).await.context("App run failed")?;

    Ok(())
}
