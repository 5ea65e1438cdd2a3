//! 部门范围校验
//!
//! Manager 只能操作自己管理部门内的员工数据。范围判定集中在
//! [`DepartmentScope`]，所有 manager 接口在访问数据前显式调用。

use sqlx::SqlitePool;

use crate::AppError;
use crate::auth::CurrentUser;
use shared::ErrorCode;

/// 当前用户的部门可见范围
///
/// - 超级管理员可见所有部门
/// - Manager 可见其管理的唯一部门
/// - 其他用户不可见任何部门 (构造时即报错)
#[derive(Debug, Clone, Copy)]
pub struct DepartmentScope {
    /// 管理的部门 ID (超级管理员为 None)
    managed: Option<i64>,
    /// 超级管理员绕过范围检查
    superuser: bool,
}

impl DepartmentScope {
    /// 加载用户的部门范围
    ///
    /// # 错误
    ///
    /// Manager 未被指派任何部门时返回 3003 NoManagedDepartment
    pub async fn load(pool: &SqlitePool, user: &CurrentUser) -> Result<Self, AppError> {
        if user.is_superuser {
            return Ok(Self {
                managed: None,
                superuser: true,
            });
        }

        let managed: Option<i64> =
            sqlx::query_scalar("SELECT id FROM departments WHERE manager_id = ?")
                .bind(user.id)
                .fetch_optional(pool)
                .await
                .map_err(|e| AppError::database(e.to_string()))?;

        match managed {
            Some(id) => Ok(Self {
                managed: Some(id),
                superuser: false,
            }),
            None => Err(AppError::new(ErrorCode::NoManagedDepartment)),
        }
    }

    /// 管理的部门 ID (超级管理员为 None)
    pub fn department_id(&self) -> Option<i64> {
        self.managed
    }

    /// 目标部门是否在范围内
    ///
    /// 无部门的员工 (`target == None`) 不属于任何 manager 的范围
    pub fn allows(&self, target: Option<i64>) -> bool {
        if self.superuser {
            return true;
        }
        match (self.managed, target) {
            (Some(mine), Some(theirs)) => mine == theirs,
            _ => false,
        }
    }

    /// 校验目标部门在范围内，否则返回 2004 DepartmentScopeDenied
    pub fn ensure(&self, target: Option<i64>) -> Result<(), AppError> {
        if self.allows(target) {
            Ok(())
        } else {
            Err(AppError::new(ErrorCode::DepartmentScopeDenied))
        }
    }
}
