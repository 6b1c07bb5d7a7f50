use thiserror::Error;

/// The fatal error conditions of the interception shim.
///
/// Every variant is a contract violation or an unavailable collaborator, not
/// a recoverable condition: this is a development aid, and silently producing
/// wrong pseudo-text would hide exactly the bugs it exists to catch. Hosts
/// are expected to treat any of these as fatal and terminate. None of the
/// operations behind them are retryable; they are deterministic and
/// synchronous, so repeating a failed call cannot change the outcome.
#[derive(Debug, Error)]
pub enum ShimError {
    /// A translation was requested before `select_domain` was observed.
    #[error("translation requested before a text domain was selected")]
    DomainNotSelected,

    /// A translation was requested before `select_locale` was observed.
    #[error("translation requested before the locale was selected")]
    LocaleNotSelected,

    /// A codeset other than UTF-8 was requested. The engine's code-point
    /// iteration is only correct for UTF-8 text.
    #[error("unsupported codeset {requested:?}: the shim only operates on UTF-8")]
    UnsupportedCodeset {
        /// The codeset the caller asked for.
        requested: String,
    },

    /// A delegated backend routine failed or is unavailable. Without it,
    /// plural resolution or locale/domain setup cannot proceed.
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}
