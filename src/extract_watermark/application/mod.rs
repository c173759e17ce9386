pub mod error;
pub mod extraction_service;
