//! Boolean Combinator
//!
//! Implements: And, Or, Not over tri-state verdicts, plus `settle`, which turns
//! a final verdict into the include/exclude/propagate decision.
//!
//! This is the only place where an `Error` verdict may be downgraded to
//! `false`, and only when the context is not strict.

use crate::context::PredicateContext;
use crate::error::{EvalError, EvalResult};
use crate::verdict::Verdict;
use log::trace;

fn downgrade(ctx: &PredicateContext<'_>, err: EvalError) -> Verdict {
    if ctx.is_strict() {
        Verdict::Error(err)
    } else {
        trace!("treating unevaluable predicate as false: {}", err);
        Verdict::False
    }
}

/// Fold conjuncts
///
/// Truth table (strict / non-strict where they differ):
/// | A     | B     | A and B          |
/// |-------|-------|------------------|
/// | true  | true  | true             |
/// | true  | false | false            |
/// | true  | error | error / false    |
/// | false | *     | false            |
/// | error | *     | error / false    |
///
/// Stops pulling verdicts at the first `false` or `error`, so a lazy iterator
/// short-circuits evaluation. No conjuncts at all is `true`.
pub fn combine_and<I>(ctx: &PredicateContext<'_>, verdicts: I) -> Verdict
where
    I: IntoIterator<Item = Verdict>,
{
    for verdict in verdicts {
        match verdict {
            Verdict::True => {}
            Verdict::False => return Verdict::False,
            Verdict::Error(err) => return downgrade(ctx, err),
        }
    }
    Verdict::True
}

/// Fold disjuncts
///
/// Truth table (strict / non-strict where they differ):
/// | A     | B     | A or B           |
/// |-------|-------|------------------|
/// | true  | *     | true             |
/// | false | true  | true             |
/// | false | false | false            |
/// | false | error | error / false    |
/// | error | true  | true             |
/// | error | false | error / false    |
/// | error | error | error / false    |
///
/// An error is deferred until every disjunct has failed to produce `true`;
/// the first one seen is reported. No disjuncts at all is `false`.
pub fn combine_or<I>(ctx: &PredicateContext<'_>, verdicts: I) -> Verdict
where
    I: IntoIterator<Item = Verdict>,
{
    let mut deferred = None;
    for verdict in verdicts {
        match verdict {
            Verdict::True => return Verdict::True,
            Verdict::False => {}
            Verdict::Error(err) => {
                deferred.get_or_insert(err);
            }
        }
    }

    match deferred {
        Some(err) => downgrade(ctx, err),
        None => Verdict::False,
    }
}

/// Negate a verdict
///
/// not true -> false
/// not false -> true
/// not error -> error (negating an unevaluable predicate is still unevaluable)
pub fn combine_not(verdict: Verdict) -> Verdict {
    match verdict {
        Verdict::True => Verdict::False,
        Verdict::False => Verdict::True,
        Verdict::Error(err) => Verdict::Error(err),
    }
}

/// Resolve a final verdict for the query engine
///
/// `Ok(true)` includes the node, `Ok(false)` excludes it. An error is returned
/// in strict mode and excludes the node otherwise.
pub fn settle(verdict: Verdict, ctx: &PredicateContext<'_>) -> EvalResult<bool> {
    match verdict {
        Verdict::Error(err) => downgrade(ctx, err).into_result(),
        other => other.into_result(),
    }
}
