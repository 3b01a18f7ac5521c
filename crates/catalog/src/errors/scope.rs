/// Classification for how a failure should surface to the user.
///
/// # Behavior Summary
///
/// | Scope | User sees | Logged? |
/// |-------|-----------|---------|
/// | `PageLevel` | Error message + manual retry button | Yes |
/// | `Degrade` | Less data ("Unknown" field, missing section) | Yes |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FailureScope {
    /// Surface as a page-level error state with a retry affordance.
    ///
    /// Used for primary list and detail loads: the page has nothing to show
    /// without the data, so the failure is explicit and the user retries
    /// manually. No automatic backoff exists anywhere in the crate.
    PageLevel,

    /// Log and omit the affected piece; the rest of the page stands.
    ///
    /// Used for relation resolution and per-category search, where partial
    /// success is the default policy. A broken relation or one dead search
    /// category must not make the whole page or search appear to fail.
    Degrade,
}
