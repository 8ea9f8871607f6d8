#[derive(Debug, Clone, PartialEq)]
/// Request to list the commits between two refs.
pub struct CompareRequest {
    pub base: String,
    pub head: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Represents a normalized commit returned from the compare view
pub struct ForgeCommit {
    pub sha: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
/// Request to publish a new release.
pub struct CreateReleaseRequest {
    pub tag_name: String,
    pub name: String,
    pub target_commitish: String,
    pub body: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Release as reported back by the forge after creation.
pub struct Release {
    pub id: u64,
    pub name: String,
    pub tag_name: String,
    pub html_url: String,
}
