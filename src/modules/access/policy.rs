//! Role and ownership decisions for every mutable resource, kept in one
//! place so the moderator/owner asymmetry stays auditable.
//!
//! Roles: moderators may edit anyone's content but never create or delete
//! it; staff get full read breadth and user administration. Staff status
//! does not lift the moderator create ban.

use uuid::Uuid;

use crate::shared::error::CoreError;

/// The acting user, as resolved from the bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subject {
    pub id: Uuid,
    pub is_staff: bool,
    pub is_moderator: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Update,
    Delete,
}

/// Seeded rows have no owner; nobody owns them.
pub fn is_owner(subject: &Subject, owner_id: Option<Uuid>) -> bool {
    owner_id == Some(subject.id)
}

/// Whether list queries may return other users' rows unfiltered.
pub fn can_view_all(subject: &Subject) -> bool {
    subject.is_staff || subject.is_moderator
}

/// Whether a single course/lesson is readable by this subject.
pub fn can_read(subject: &Subject, owner_id: Option<Uuid>) -> bool {
    can_view_all(subject) || is_owner(subject, owner_id)
}

/// Decide a mutation on an owned content resource (course or lesson).
pub fn authorize_content(
    subject: &Subject,
    action: Action,
    owner_id: Option<Uuid>,
) -> Result<(), CoreError> {
    let allowed = match action {
        // The create ban applies to every moderator, staff included.
        Action::Create => !subject.is_moderator,
        Action::Update => subject.is_moderator || is_owner(subject, owner_id),
        Action::Delete => is_owner(subject, owner_id) && !subject.is_moderator,
    };

    if allowed {
        Ok(())
    } else {
        Err(CoreError::permission_denied(match action {
            Action::Create => "Moderators cannot create content",
            Action::Update => "You can only edit your own content",
            Action::Delete => "You can only delete your own content",
        }))
    }
}

/// Decide a mutation on a user profile: staff, or the subject acting on
/// their own account.
pub fn authorize_profile(subject: &Subject, target_user_id: Uuid) -> Result<(), CoreError> {
    if subject.is_staff || subject.id == target_user_id {
        Ok(())
    } else {
        Err(CoreError::permission_denied(
            "You can only manage your own profile",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject(is_staff: bool, is_moderator: bool) -> Subject {
        Subject {
            id: Uuid::new_v4(),
            is_staff,
            is_moderator,
        }
    }

    fn regular() -> Subject {
        subject(false, false)
    }

    fn moderator() -> Subject {
        subject(false, true)
    }

    fn staff() -> Subject {
        subject(true, false)
    }

    #[test]
    fn test_regular_user_can_create() {
        assert!(authorize_content(&regular(), Action::Create, None).is_ok());
    }

    #[test]
    fn test_staff_can_create() {
        assert!(authorize_content(&staff(), Action::Create, None).is_ok());
    }

    #[test]
    fn test_moderator_cannot_create() {
        let result = authorize_content(&moderator(), Action::Create, None);
        assert!(matches!(result, Err(CoreError::PermissionDenied(_))));
    }

    #[test]
    fn test_staff_moderator_still_cannot_create() {
        // Staff breadth does not override moderator restrictions.
        let both = subject(true, true);
        let result = authorize_content(&both, Action::Create, None);
        assert!(matches!(result, Err(CoreError::PermissionDenied(_))));
    }

    #[test]
    fn test_owner_can_update_own() {
        let s = regular();
        assert!(authorize_content(&s, Action::Update, Some(s.id)).is_ok());
    }

    #[test]
    fn test_regular_cannot_update_others() {
        let result = authorize_content(&regular(), Action::Update, Some(Uuid::new_v4()));
        assert!(matches!(result, Err(CoreError::PermissionDenied(_))));
    }

    #[test]
    fn test_moderator_can_update_any() {
        assert!(authorize_content(&moderator(), Action::Update, Some(Uuid::new_v4())).is_ok());
        assert!(authorize_content(&moderator(), Action::Update, None).is_ok());
    }

    #[test]
    fn test_owner_can_delete_own() {
        let s = regular();
        assert!(authorize_content(&s, Action::Delete, Some(s.id)).is_ok());
    }

    #[test]
    fn test_regular_cannot_delete_others() {
        let result = authorize_content(&regular(), Action::Delete, Some(Uuid::new_v4()));
        assert!(matches!(result, Err(CoreError::PermissionDenied(_))));
    }

    #[test]
    fn test_moderator_cannot_delete_even_own() {
        let m = moderator();
        let result = authorize_content(&m, Action::Delete, Some(m.id));
        assert!(matches!(result, Err(CoreError::PermissionDenied(_))));
    }

    #[test]
    fn test_nobody_owns_seeded_rows() {
        let s = regular();
        assert!(!is_owner(&s, None));
        assert!(authorize_content(&s, Action::Delete, None).is_err());
    }

    #[test]
    fn test_view_breadth() {
        assert!(can_view_all(&staff()));
        assert!(can_view_all(&moderator()));
        assert!(!can_view_all(&regular()));
    }

    #[test]
    fn test_read_own_only_for_regular() {
        let s = regular();
        assert!(can_read(&s, Some(s.id)));
        assert!(!can_read(&s, Some(Uuid::new_v4())));
        assert!(can_read(&moderator(), Some(Uuid::new_v4())));
    }

    #[test]
    fn test_profile_staff_or_self() {
        let s = regular();
        assert!(authorize_profile(&s, s.id).is_ok());
        assert!(authorize_profile(&staff(), Uuid::new_v4()).is_ok());

        let result = authorize_profile(&s, Uuid::new_v4());
        assert!(matches!(result, Err(CoreError::PermissionDenied(_))));

        // Moderator rights are content-scoped, not profile-scoped.
        let result = authorize_profile(&moderator(), Uuid::new_v4());
        assert!(matches!(result, Err(CoreError::PermissionDenied(_))));
    }
}
