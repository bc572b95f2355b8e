use crate::entities::user::Role;
use uuid::Uuid;

/// The user on whose behalf a mutation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub user_id: Uuid,
    pub role: Role,
}

impl Actor {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Admins may act for anyone, other users only for themselves.
    pub fn may_act_for(&self, owner: Uuid) -> bool {
        self.is_admin() || self.user_id == owner
    }
}

/// Source of the authenticated caller, consulted before every mutation.
pub trait CurrentUser {
    fn current_user(&self) -> Option<Actor>;
}

impl CurrentUser for Actor {
    fn current_user(&self) -> Option<Actor> {
        Some(*self)
    }
}

impl<T: CurrentUser> CurrentUser for Option<T> {
    fn current_user(&self) -> Option<Actor> {
        self.as_ref().and_then(CurrentUser::current_user)
    }
}
