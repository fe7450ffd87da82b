//! # paracrystal 命令行入口
//!
//! ## 子命令
//! - `iq`    - 粉末平均 I(q) 曲线
//! - `iqxy`  - 定向二维探测器图像
//! - `sq`    - 单点结构因子
//! - `batch` - 在测量数据的 q 点上批量求值
//!
//! ## 依赖关系
//! - 使用 `paracrystal::cli` 解析参数
//! - 使用 `paracrystal::commands` 执行

use clap::Parser;
use paracrystal::cli::Cli;
use paracrystal::{commands, utils};

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
