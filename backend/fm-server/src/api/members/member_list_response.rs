use crate::MembershipDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MemberListResponse {
    pub members: Vec<MembershipDto>,
}
