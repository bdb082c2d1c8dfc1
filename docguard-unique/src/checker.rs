use docguard_model::{AbsencePolicy, Document, PeerAccessor, PeerQuery, UniquenessSpec};
use tracing::{debug, warn};

use crate::{CheckResult, MessageTag, Outcome};

/// Decide whether `document` violates `spec` against the peers `accessor`
/// returns.
///
/// Persisted documents are re-checked even when no key field changed, since a
/// changed scope value can move them into a different peer group. The
/// document itself is never its own peer.
pub fn check<D, A>(document: &D, spec: &UniquenessSpec, accessor: &A) -> CheckResult<Outcome>
where
    D: Document + ?Sized,
    A: PeerAccessor + ?Sized,
{
    spec.validate()?;

    let fields = spec.key_fields();
    let keys: Vec<_> = fields
        .iter()
        .map(|field| (*field, document.value_of(field)))
        .collect();

    if spec.absence == AbsencePolicy::Skip && keys.iter().all(|(_, value)| value.is_null()) {
        debug!(fields = ?fields, "key absent, uniqueness check skipped");
        return Ok(Outcome::pass());
    }

    let identity = document.id();
    let query = PeerQuery {
        scope: spec
            .scope_fields()
            .into_iter()
            .map(|field| (field, document.value_of(field)))
            .collect(),
        keys,
        case: spec.case,
        exclude: identity,
    };

    debug!(
        fields = ?fields,
        scope = ?query.scope,
        case = ?spec.case,
        new = identity.is_none(),
        changed = ?document.changed_fields(),
        "checking uniqueness"
    );

    let peers = accessor.find(&query).inspect_err(|e| {
        warn!(fields = ?fields, error = %e, "peer query failed");
    })?;

    let conflict = peers
        .filter(|peer| identity.is_none() || peer.id() != identity)
        .find(|peer| {
            query
                .keys
                .iter()
                .all(|(field, value)| spec.case.equals(peer.value_of(field), value))
        });

    let Some(peer) = conflict else {
        return Ok(Outcome::pass());
    };

    let tag = if identity.is_none() {
        MessageTag::AlreadyTaken
    } else {
        MessageTag::NotUnique
    };
    debug!(fields = ?fields, peer = ?peer.id(), %tag, "uniqueness conflict");
    Ok(Outcome::conflict(&fields, tag, spec.message.as_deref()))
}
