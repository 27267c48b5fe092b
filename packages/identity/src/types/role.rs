use cosmwasm_schema::cw_serde;

/// The single role held by a principal in an identity manager.
///
/// Roles are not additive: a principal holds exactly one of these and every
/// permission check compares against the stored value for equality.
#[cw_serde]
#[derive(Copy, Default, Eq)]
pub enum Role {
    /// No permissions, the role of every principal never granted anything
    #[default]
    None,
    /// May administer the role table
    Owner,
    /// May forward calls through the identity, directly or by signature
    Action,
}

impl Role {
    pub fn is_none(&self) -> bool {
        matches!(self, Role::None)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}
