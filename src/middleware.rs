pub mod auth_middleware;
pub mod household_middleware;
