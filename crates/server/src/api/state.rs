//! 统一的应用状态。

use std::sync::Arc;

use crate::repository::RecordRepository;

/// 统一的应用状态，由所有请求处理器共享。
#[derive(Clone)]
pub struct AppState {
    /// 成绩记录存储。
    pub records: Arc<dyn RecordRepository>,
}

impl AppState {
    /// 创建新的应用状态。
    pub fn new(records: Arc<dyn RecordRepository>) -> Self {
        Self { records }
    }
}
