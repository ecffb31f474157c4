pub mod auth_gateway;
pub mod catalog_gateway;
pub mod client;
pub mod dto;
pub mod order_gateway;

#[cfg(test)]
mod test_server;
