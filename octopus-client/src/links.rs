//! Link resolution
//!
//! Follow-up operations on a resource are addressed through the paths in its
//! `Links` map rather than through hard-coded routes.

use octopus_shared::{LinkName, Resource};

use crate::{ClientError, ClientResult};

/// Returns the request path advertised by `resource` under `name`.
///
/// Links are concrete paths; no URI template expansion is performed.
pub fn resolve<R: Resource + ?Sized>(resource: &R, name: LinkName) -> ClientResult<&str> {
    resource
        .links()
        .get(name)
        .ok_or_else(|| ClientError::MissingLink {
            resource: resource.id().to_string(),
            link: name,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use octopus_shared::{Links, User};

    fn user(links: Links) -> User {
        User {
            id: "Users-1".into(),
            username: "user@example.com".into(),
            display_name: "User Name".into(),
            email_address: "user@example.com".into(),
            is_active: true,
            is_service: false,
            can_password_be_edited: true,
            is_requestor: true,
            links,
        }
    }

    #[test]
    fn test_resolve_present_link() {
        let user = user([("Self", "/api/users/Users-1")].into_iter().collect());
        assert_eq!(resolve(&user, LinkName::SelfLink).unwrap(), "/api/users/Users-1");
    }

    #[test]
    fn test_missing_link() {
        let user = user(Links::new());
        let err = resolve(&user, LinkName::Submit).unwrap_err();

        match err {
            ClientError::MissingLink { resource, link } => {
                assert_eq!(resource, "Users-1");
                assert_eq!(link, LinkName::Submit);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
