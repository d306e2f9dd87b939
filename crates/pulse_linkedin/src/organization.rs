use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize, Debug)]
pub struct OrganizationAclsResponse {
    pub elements: Vec<OrganizationAcl>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct OrganizationAcl {
    #[serde(rename = "organizationalTarget")]
    pub organizational_target: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

#[derive(Error, Debug)]
#[error("No organization is accessible to this member")]
pub struct NoOrganization;

impl OrganizationAclsResponse {
    /// URN of the first organization the member has a role on.
    pub fn first_organization(&self) -> Result<&str, NoOrganization> {
        self.elements
            .first()
            .map(|acl| acl.organizational_target.as_str())
            .ok_or(NoOrganization)
    }
}
