mod access_denied;
mod domain_exception;
mod http_exception;
