mod rest_delete_virtual_node_response;
pub use self::rest_delete_virtual_node_response::RestDeleteVirtualNodeResponse;
