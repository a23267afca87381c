pub mod search_form_params;
pub mod search_page_route;
