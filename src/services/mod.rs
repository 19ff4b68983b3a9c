pub mod export_service;
pub mod quiz_service;
pub mod storage_service;
