//! 认证授权模块
//!
//! 提供 JWT 认证、角色守卫和范围校验：
//! - [`JwtService`] - JWT 令牌服务
//! - [`CurrentUser`] - 当前用户上下文
//! - [`require_auth`] - 认证中间件
//! - [`require_role`] - 角色检查中间件
//! - [`DepartmentScope`] - 部门范围校验

pub mod extractor;
pub mod jwt;
pub mod middleware;
pub mod scope;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::{CurrentUserExt, require_auth, require_role};
pub use scope::DepartmentScope;
