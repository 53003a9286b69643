use crate::{IdentityDto, MembershipDto};

use serde::Serialize;

/// The caller and every account they belong to
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: IdentityDto,
    pub memberships: Vec<MembershipDto>,
}
