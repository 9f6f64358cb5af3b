#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RestDeleteVirtualNodeResponse {
    /// whether the virtual node was deleted
    #[serde(rename = "Success", skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
}

impl RestDeleteVirtualNodeResponse {
    pub fn new() -> RestDeleteVirtualNodeResponse {
        RestDeleteVirtualNodeResponse { success: None }
    }
}

construct_from_object!(RestDeleteVirtualNodeResponse { success: "Success" });
