pub mod node;
pub mod node_request;
pub mod node_response;
pub mod tree;
pub mod tree_request;
pub mod tree_response;
