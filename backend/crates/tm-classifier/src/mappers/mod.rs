pub mod access_denied_mapper;
pub mod domain_exception_mapper;
pub mod http_exception_mapper;
pub mod validation_exception_mapper;
