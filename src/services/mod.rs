pub mod catalog_service;
pub mod gemini_service;
pub mod generator;
pub mod suggestion_merge;
pub mod suggestion_service;
