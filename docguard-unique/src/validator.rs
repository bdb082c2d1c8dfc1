use docguard_model::{Document, PeerAccessor, UniquenessSpec};

use crate::{CheckResult, Outcome, check};

/// A fixed set of uniqueness constraints for one kind of document.
///
/// Every spec is checked on each call and all failures are reported
/// together; one failing spec does not hide another.
#[derive(Debug, Clone, Default)]
pub struct UniquenessValidator {
    specs: Vec<UniquenessSpec>,
}

impl UniquenessValidator {
    /// Build a validator, rejecting any spec that cannot be evaluated.
    pub fn new(specs: Vec<UniquenessSpec>) -> CheckResult<Self> {
        for spec in &specs {
            spec.validate()?;
        }
        Ok(Self { specs })
    }

    /// Specs already validated by the caller.
    pub(crate) fn from_checked(specs: Vec<UniquenessSpec>) -> Self {
        Self { specs }
    }

    pub fn specs(&self) -> &[UniquenessSpec] {
        &self.specs
    }

    /// Run every spec against `accessor`. A failing peer query aborts the
    /// whole validation; there are no partial outcomes.
    pub fn validate<D, A>(&self, document: &D, accessor: &A) -> CheckResult<Outcome>
    where
        D: Document + ?Sized,
        A: PeerAccessor + ?Sized,
    {
        let mut outcome = Outcome::pass();
        for spec in &self.specs {
            outcome.merge(check(document, spec, accessor)?);
        }
        Ok(outcome)
    }
}
