pub mod api_client;
pub mod navigation_service;
pub mod product_gateway;
