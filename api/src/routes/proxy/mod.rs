pub mod subsidies_proxy_route;
