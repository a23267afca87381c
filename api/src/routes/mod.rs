pub mod health_route;
pub mod proxy;
pub mod search_page;
