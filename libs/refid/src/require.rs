//! Requirements: predicates a decoded RefId must satisfy.
//!
//! A parse "as entity X" is the base decode followed by an ordered list of
//! requirements. The list is checked front to back and stops at the first
//! failure, so the tag check always goes first and caller extras only ever
//! see a RefId of the right type.

use crate::error::RefIdError;
use crate::refid::RefId;

/// A predicate over a decoded RefId.
///
/// Implemented by the built-in checks below and by any closure of the form
/// `Fn(&RefId) -> Result<(), RefIdError>`.
pub trait Requirement {
    fn check(&self, id: &RefId) -> Result<(), RefIdError>;
}

impl<F> Requirement for F
where
    F: Fn(&RefId) -> Result<(), RefIdError>,
{
    fn check(&self, id: &RefId) -> Result<(), RefIdError> {
        self(id)
    }
}

/// Requires the RefId to carry exactly this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HasTag(pub u8);

impl Requirement for HasTag {
    fn check(&self, id: &RefId) -> Result<(), RefIdError> {
        if id.has_tag(self.0) {
            Ok(())
        } else {
            Err(RefIdError::TagMismatch {
                expected: self.0,
                actual: id.tag(),
            })
        }
    }
}

/// Rejects the all-zero RefId.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotNil;

impl Requirement for NotNil {
    fn check(&self, id: &RefId) -> Result<(), RefIdError> {
        if id.is_nil() {
            Err(RefIdError::Requirement("refid is nil".to_string()))
        } else {
            Ok(())
        }
    }
}

/// Runs every requirement in order, stopping at the first failure.
pub fn check_all(id: &RefId, reqs: &[&dyn Requirement]) -> Result<(), RefIdError> {
    reqs.iter().try_for_each(|req| req.check(id))
}

/// Parses `s` and checks it against `reqs`.
pub fn parse_with_require(s: &str, reqs: &[&dyn Requirement]) -> Result<RefId, RefIdError> {
    let id = RefId::parse(s)?;
    check_all(&id, reqs)?;
    Ok(id)
}
