pub mod catalog_service;
pub mod route_generator;
