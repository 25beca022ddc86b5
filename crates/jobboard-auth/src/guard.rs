//! Role and ownership checks.
//!
//! Checks run after authentication and short-circuit on the first failure.
//! Resources are fetched through a [`ResourceLoader`] so the checks do not
//! care where records live.

use async_trait::async_trait;
use tracing::debug;

use jobboard_core::{AccessError, AppError};

use crate::claims::{Principal, Role};

/// Which column of a record names its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerField {
    RecruiterId,
    CandidateId,
}

/// A record that can report who owns it.
pub trait OwnedResource {
    /// Human-readable name used in error messages, e.g. `"Job offer"`.
    const KIND: &'static str;

    /// `None` when the record has no such field or it is null.
    fn owner_id(&self, field: OwnerField) -> Option<i64>;
}

#[async_trait]
pub trait ResourceLoader<T>: Send + Sync {
    async fn load(&self, id: i64) -> Result<Option<T>, AppError>;
}

pub fn require_role(principal: &Principal, role: Role) -> Result<(), AccessError> {
    if principal.has_role(role) {
        Ok(())
    } else {
        debug!(user_id = principal.id, required = %role, actual = %principal.role, "Role check failed");
        Err(AccessError::forbidden(format!(
            "This action requires the {} role",
            role
        )))
    }
}

/// Fails closed: a missing owner is treated as somebody else.
pub fn require_ownership<T: OwnedResource>(
    principal: &Principal,
    resource: &T,
    field: OwnerField,
) -> Result<(), AccessError> {
    match resource.owner_id(field) {
        Some(owner) if owner == principal.id => Ok(()),
        _ => Err(forbidden::<T>()),
    }
}

fn forbidden<T: OwnedResource>() -> AccessError {
    AccessError::forbidden(format!(
        "You do not have permission to access this {}",
        T::KIND.to_lowercase()
    ))
}

fn not_found<T: OwnedResource>() -> AccessError {
    AccessError::not_found(format!("{} not found", T::KIND))
}

/// Loads `id` and checks ownership. Existence is reported before ownership.
pub async fn require_resource_then_ownership<T, L>(
    loader: &L,
    id: i64,
    principal: &Principal,
    field: OwnerField,
) -> Result<T, AppError>
where
    T: OwnedResource + Send,
    L: ResourceLoader<T> + ?Sized,
{
    let resource = loader.load(id).await?.ok_or_else(not_found::<T>)?;
    require_ownership(principal, &resource, field)?;
    Ok(resource)
}

/// Loads child `id`, then its parent, and checks the principal owns the
/// parent. A missing child or parent is `NotFound`.
pub async fn require_parent_ownership<C, P, CL, PL>(
    children: &CL,
    parents: &PL,
    id: i64,
    parent_of: impl Fn(&C) -> i64 + Send,
    principal: &Principal,
    field: OwnerField,
) -> Result<C, AppError>
where
    C: OwnedResource + Send,
    P: OwnedResource + Send,
    CL: ResourceLoader<C> + ?Sized,
    PL: ResourceLoader<P> + ?Sized,
{
    let child = children.load(id).await?.ok_or_else(not_found::<C>)?;

    let parent = parents
        .load(parent_of(&child))
        .await?
        .ok_or_else(not_found::<P>)?;
    require_ownership(principal, &parent, field).map_err(|_| forbidden::<C>())?;
    Ok(child)
}

/// Like [`require_parent_ownership`] but also admits the child's own owner
/// through `child_field`.
pub async fn require_owner_or_parent_owner<C, P, CL, PL>(
    children: &CL,
    parents: &PL,
    id: i64,
    parent_of: impl Fn(&C) -> i64 + Send,
    principal: &Principal,
    child_field: OwnerField,
    parent_field: OwnerField,
) -> Result<C, AppError>
where
    C: OwnedResource + Send,
    P: OwnedResource + Send,
    CL: ResourceLoader<C> + ?Sized,
    PL: ResourceLoader<P> + ?Sized,
{
    let child = children.load(id).await?.ok_or_else(not_found::<C>)?;

    if require_ownership(principal, &child, child_field).is_ok() {
        return Ok(child);
    }

    let parent = parents.load(parent_of(&child)).await?;
    match parent {
        Some(parent) if require_ownership(principal, &parent, parent_field).is_ok() => Ok(child),
        _ => Err(forbidden::<C>().into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Debug, Clone, PartialEq)]
    struct Offer {
        id: i64,
        recruiter_id: Option<i64>,
    }

    impl OwnedResource for Offer {
        const KIND: &'static str = "Job offer";

        fn owner_id(&self, field: OwnerField) -> Option<i64> {
            match field {
                OwnerField::RecruiterId => self.recruiter_id,
                OwnerField::CandidateId => None,
            }
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Application {
        id: i64,
        candidate_id: i64,
        job_offer_id: i64,
    }

    impl OwnedResource for Application {
        const KIND: &'static str = "Application";

        fn owner_id(&self, field: OwnerField) -> Option<i64> {
            match field {
                OwnerField::CandidateId => Some(self.candidate_id),
                OwnerField::RecruiterId => None,
            }
        }
    }

    struct MapLoader<T>(HashMap<i64, T>);

    #[async_trait]
    impl<T: Clone + Send + Sync> ResourceLoader<T> for MapLoader<T> {
        async fn load(&self, id: i64) -> Result<Option<T>, AppError> {
            Ok(self.0.get(&id).cloned())
        }
    }

    fn offers() -> MapLoader<Offer> {
        MapLoader(HashMap::from([
            (5, Offer { id: 5, recruiter_id: Some(10) }),
            (6, Offer { id: 6, recruiter_id: None }),
        ]))
    }

    fn applications() -> MapLoader<Application> {
        MapLoader(HashMap::from([
            (7, Application { id: 7, candidate_id: 42, job_offer_id: 5 }),
            (8, Application { id: 8, candidate_id: 42, job_offer_id: 404 }),
        ]))
    }

    fn recruiter(id: i64) -> Principal {
        Principal::new(id, format!("r{}@example.com", id), Role::Recruiter)
    }

    fn candidate(id: i64) -> Principal {
        Principal::new(id, format!("c{}@example.com", id), Role::Candidate)
    }

    #[test]
    fn test_require_role_exact_match() {
        assert!(require_role(&recruiter(10), Role::Recruiter).is_ok());
        assert!(matches!(
            require_role(&candidate(42), Role::Recruiter),
            Err(AccessError::Forbidden(_))
        ));
        assert!(matches!(
            require_role(&recruiter(10), Role::Candidate),
            Err(AccessError::Forbidden(_))
        ));
    }

    #[test]
    fn test_require_ownership() {
        let offer = Offer { id: 5, recruiter_id: Some(10) };
        assert!(require_ownership(&recruiter(10), &offer, OwnerField::RecruiterId).is_ok());
        assert!(matches!(
            require_ownership(&recruiter(11), &offer, OwnerField::RecruiterId),
            Err(AccessError::Forbidden(_))
        ));
    }

    #[test]
    fn test_missing_owner_fails_closed() {
        let orphan = Offer { id: 6, recruiter_id: None };
        assert!(require_ownership(&recruiter(10), &orphan, OwnerField::RecruiterId).is_err());

        let offer = Offer { id: 5, recruiter_id: Some(10) };
        assert!(require_ownership(&recruiter(10), &offer, OwnerField::CandidateId).is_err());
    }

    #[tokio::test]
    async fn test_resource_then_ownership() {
        let loader = offers();

        let offer = require_resource_then_ownership(&loader, 5, &recruiter(10), OwnerField::RecruiterId)
            .await
            .unwrap();
        assert_eq!(offer.id, 5);

        let err = require_resource_then_ownership(&loader, 5, &recruiter(11), OwnerField::RecruiterId)
            .await
            .unwrap_err();
        assert_eq!(err.status.as_u16(), 403);

        let err = require_resource_then_ownership(&loader, 999, &recruiter(10), OwnerField::RecruiterId)
            .await
            .unwrap_err();
        assert_eq!(err.status.as_u16(), 404);
        assert_eq!(err.public_message(), "Job offer not found");
    }

    #[tokio::test]
    async fn test_two_hop_ownership() {
        let (apps, offers) = (applications(), offers());
        let parent = |a: &Application| a.job_offer_id;

        let app = require_parent_ownership(&apps, &offers, 7, parent, &recruiter(10), OwnerField::RecruiterId)
            .await
            .unwrap();
        assert_eq!(app.id, 7);

        let err = require_parent_ownership(&apps, &offers, 7, parent, &recruiter(11), OwnerField::RecruiterId)
            .await
            .unwrap_err();
        assert_eq!(err.status.as_u16(), 403);

        let err = require_parent_ownership(&apps, &offers, 999, parent, &recruiter(10), OwnerField::RecruiterId)
            .await
            .unwrap_err();
        assert_eq!(err.status.as_u16(), 404);
    }

    #[tokio::test]
    async fn test_two_hop_missing_parent_is_not_found() {
        let (apps, offers) = (applications(), offers());

        let err = require_parent_ownership(
            &apps,
            &offers,
            8,
            |a: &Application| a.job_offer_id,
            &recruiter(10),
            OwnerField::RecruiterId,
        )
        .await
        .unwrap_err();
        assert_eq!(err.status.as_u16(), 404);
        assert_eq!(err.public_message(), "Job offer not found");
    }

    async fn view_application(id: i64, principal: Principal) -> Result<Application, AppError> {
        require_owner_or_parent_owner(
            &applications(),
            &offers(),
            id,
            |a: &Application| a.job_offer_id,
            &principal,
            OwnerField::CandidateId,
            OwnerField::RecruiterId,
        )
        .await
    }

    #[tokio::test]
    async fn test_owner_or_parent_owner() {
        assert!(view_application(7, candidate(42)).await.is_ok());
        assert!(view_application(7, recruiter(10)).await.is_ok());
        assert_eq!(view_application(7, candidate(43)).await.unwrap_err().status.as_u16(), 403);
        assert_eq!(view_application(7, recruiter(11)).await.unwrap_err().status.as_u16(), 403);
    }

    #[tokio::test]
    async fn test_viewer_with_missing_parent_offer() {
        assert!(view_application(8, candidate(42)).await.is_ok());
        assert_eq!(view_application(8, recruiter(10)).await.unwrap_err().status.as_u16(), 403);
    }
}
