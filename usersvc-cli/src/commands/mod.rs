pub mod openapi;
pub mod serve;
