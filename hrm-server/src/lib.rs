//! HRM Server - 员工管理系统服务端
//!
//! # 架构概述
//!
//! 本模块是 HRM Server 的主入口，提供以下核心功能：
//!
//! - **认证** (`auth`): JWT + Argon2 认证体系、角色守卫、部门范围校验
//! - **数据库** (`db`): SQLite (sqlx) 存储，按聚合划分仓储
//! - **HTTP API** (`api`): RESTful API 接口
//! - **导出** (`export`): 考勤/薪资台账的 CSV / Excel / PDF 导出
//!
//! # 模块结构
//!
//! ```text
//! hrm-server/src/
//! ├── core/      # 配置、状态、服务器
//! ├── auth/      # JWT 认证、角色守卫、范围校验
//! ├── db/        # 连接池、迁移、模型、仓储
//! ├── api/       # HTTP 路由和处理器
//! ├── export/    # 台账导出格式化
//! └── utils/     # 日志等工具函数
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod export;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use utils::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

pub fn print_banner() {
    println!(
        r#"
    __  __ ____  __  ___
   / / / // __ \/  |/  /
  / /_/ // /_/ / /|_/ /
 / __  // _, _/ /  / /
/_/ /_//_/ |_/_/  /_/
    "#
    );
}

/// 初始化进程环境: dotenv + 日志
pub fn setup_environment() {
    dotenvy::dotenv().ok();
    init_logger_with_file(
        std::env::var("LOG_LEVEL").ok().as_deref(),
        std::env::var("LOG_DIR").ok().as_deref(),
    );
}
