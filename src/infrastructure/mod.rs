//! 基础设施层：数据库、日志、停机

pub mod database;
pub mod logger;
pub mod shutdown;
