//! # 美化输出工具
//!
//! 命令行层统一的终端状态行样式。数值核心不输出任何信息。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块与 `main.rs` 使用
//! - 使用 `colored` crate

use colored::{ColoredString, Colorize};

/// 状态行类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Error,
    Warning,
    Info,
    Done,
}

impl Status {
    fn tag(self) -> ColoredString {
        match self {
            Status::Ok => "[OK]".green().bold(),
            Status::Error => "[ERR]".red().bold(),
            Status::Warning => "[WARN]".yellow().bold(),
            Status::Info => "[*]".blue().bold(),
            Status::Done => "[DONE]".green().bold(),
        }
    }
}

/// 打印状态行（错误输出到 stderr）
pub fn print_status(status: Status, msg: &str) {
    match status {
        Status::Error => eprintln!("{} {}", status.tag(), msg),
        _ => println!("{} {}", status.tag(), msg),
    }
}

pub fn print_success(msg: &str) {
    print_status(Status::Ok, msg);
}

pub fn print_error(msg: &str) {
    print_status(Status::Error, msg);
}

pub fn print_warning(msg: &str) {
    print_status(Status::Warning, msg);
}

pub fn print_info(msg: &str) {
    print_status(Status::Info, msg);
}

pub fn print_done(msg: &str) {
    print_status(Status::Done, msg);
}

/// 打印对齐的参数行: `  name ........ value unit`
pub fn print_param(name: &str, value: f64, unit: &str) {
    println!("  {:<14} {:>12} {}", name.cyan(), format_number(value), unit.dimmed());
}

/// 数值显示：极大/极小值用科学计数法
pub fn format_number(value: f64) -> String {
    let abs = value.abs();
    if value != 0.0 && value.is_finite() && !(1e-3..1e5).contains(&abs) {
        format!("{:.4e}", value)
    } else {
        format!("{:.4}", value)
    }
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

/// 打印分隔线
pub fn print_separator() {
    println!("{}", "─".repeat(60).dimmed());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0), "0.0000");
        assert_eq!(format_number(12.5), "12.5000");
        assert_eq!(format_number(412587.5), "4.1259e5");
        assert_eq!(format_number(2.5e-5), "2.5000e-5");
        assert_eq!(format_number(f64::NAN), "NaN");
    }
}
