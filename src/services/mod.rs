pub mod asset_service;
pub mod gate_service;
pub mod propfind_service;
pub mod resolver_service;
pub mod storage_service;
