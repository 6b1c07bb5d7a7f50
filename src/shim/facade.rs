//! # Interception Facade Module / 拦截门面模块
//!
//! This module implements the public entry points matching the gettext call
//! surface. Simple lookups feed the engine directly; plural lookups first ask
//! the real backend to resolve the singular/plural wording and then feed the
//! resolved string through the engine. The facade also enforces that domain
//! and locale setup happened before any transform, and forces the process
//! locale and codeset to fixed UTF-8 values regardless of what the caller
//! requested.
//!
//! 此模块实现了与 gettext 调用面匹配的公共入口点。
//! 简单查找直接送入引擎；复数查找首先请求真实后端解析单复数措辞，
//! 然后将解析后的字符串送入引擎。门面还强制要求在任何变换之前完成
//! 域和区域设置，并强制将进程区域设置和编码固定为 UTF-8，
//! 无论调用方请求的是什么。

use crate::core::cache::MessageCache;
use crate::core::mode::Mode;
use crate::error::ShimError;
use crate::shim::backend::{LocaleBackend, LocaleCategory};
use once_cell::sync::OnceCell;
use std::sync::atomic::{AtomicBool, Ordering};

/// The direction hint some toolkits place in their catalogs. It must only
/// ever take one of two literal forms, so it bypasses the transforms.
pub const DIRECTION_SENTINEL: &str = "default:LTR";

/// The right-to-left form of the direction hint.
pub const DIRECTION_SENTINEL_RTL: &str = "default:RTL";

/// The locale forced onto the backend for all categories. The transforms
/// assume UTF-8 text and code-point iteration, so the caller's requested
/// locale is never honored.
pub const FORCED_LOCALE: &str = "en_US.UTF-8";

/// The only codeset the shim accepts.
pub const FORCED_CODESET: &str = "UTF-8";

/// The process-scoped interception context.
///
/// One instance is constructed at startup and shared by reference across all
/// threads of the host application. It owns the resolved transform mode, the
/// message cache and the two setup flags, so the "once per process" lifetime
/// of the original design lives on an explicit object instead of hidden
/// globals.
pub struct PseudoGettext<B: LocaleBackend> {
    backend: B,
    mode: OnceCell<Mode>,
    cache: MessageCache,
    domain_selected: AtomicBool,
    locale_selected: AtomicBool,
}

impl<B: LocaleBackend> PseudoGettext<B> {
    /// Creates a context whose mode will be resolved from the environment on
    /// first engine use.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            mode: OnceCell::new(),
            cache: MessageCache::new(),
            domain_selected: AtomicBool::new(false),
            locale_selected: AtomicBool::new(false),
        }
    }

    /// Creates a context with the mode already resolved, bypassing the
    /// environment. The mode is still immutable afterwards.
    pub fn with_mode(backend: B, mode: Mode) -> Self {
        let ctx = Self::new(backend);
        // A fresh OnceCell cannot already be set.
        let _ = ctx.mode.set(mode);
        ctx
    }

    /// The mode this context operates in, resolving it on first use.
    pub fn mode(&self) -> Mode {
        *self.mode.get_or_init(Mode::from_env)
    }

    /// The injected backend, for bindings that need to reach the underlying
    /// library directly.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Translates a message id.
    pub fn translate(&self, msgid: &str) -> Result<String, ShimError> {
        self.ensure_ready()?;
        Ok(self.pseudo(msgid))
    }

    /// Translates a message id from a specific domain. The domain exists for
    /// signature compatibility only; behavior is keyed purely on the id.
    pub fn translate_with_domain(&self, _domain: &str, msgid: &str) -> Result<String, ShimError> {
        self.translate(msgid)
    }

    /// Translates a message id from a specific domain and category. Both are
    /// ignored by the engine.
    pub fn translate_with_category(
        &self,
        _domain: &str,
        msgid: &str,
        _category: LocaleCategory,
    ) -> Result<String, ShimError> {
        self.translate(msgid)
    }

    /// Translates a count-dependent message.
    ///
    /// The real backend resolves which of the two wordings applies to
    /// `count`; the shim implements no plural-rule arithmetic of its own.
    /// The resolved string then goes through the engine exactly as
    /// [`translate`](Self::translate) would send it.
    pub fn translate_plural(
        &self,
        singular: &str,
        plural: &str,
        count: u64,
    ) -> Result<String, ShimError> {
        self.ensure_ready()?;
        let resolved = self
            .backend
            .resolve_plural(None, singular, plural, count, None)?;
        Ok(self.pseudo(&resolved))
    }

    /// Plural translation with a domain, forwarded to the backend's
    /// resolution step only.
    pub fn translate_plural_with_domain(
        &self,
        domain: &str,
        singular: &str,
        plural: &str,
        count: u64,
    ) -> Result<String, ShimError> {
        self.ensure_ready()?;
        let resolved = self
            .backend
            .resolve_plural(Some(domain), singular, plural, count, None)?;
        Ok(self.pseudo(&resolved))
    }

    /// Plural translation with a domain and category, both forwarded to the
    /// backend's resolution step only.
    pub fn translate_plural_with_category(
        &self,
        domain: &str,
        singular: &str,
        plural: &str,
        count: u64,
        category: LocaleCategory,
    ) -> Result<String, ShimError> {
        self.ensure_ready()?;
        let resolved =
            self.backend
                .resolve_plural(Some(domain), singular, plural, count, Some(category))?;
        Ok(self.pseudo(&resolved))
    }

    /// Registers the text domain with the real backend and records that
    /// domain selection has occurred. Must happen before any translation.
    pub fn select_domain(&self, name: &str) -> Result<String, ShimError> {
        let result = self.backend.set_domain(name)?;
        self.domain_selected.store(true, Ordering::Release);
        Ok(result)
    }

    /// Records that locale selection has occurred and forces the backend to
    /// a fixed UTF-8 locale for all categories, regardless of what the
    /// caller asked for.
    pub fn select_locale(
        &self,
        _category: LocaleCategory,
        _requested_locale: &str,
    ) -> Result<String, ShimError> {
        let result = self
            .backend
            .set_locale(LocaleCategory::All, FORCED_LOCALE)?;
        self.locale_selected.store(true, Ordering::Release);
        Ok(result)
    }

    /// Binds a codeset for a domain. Anything other than UTF-8 is a fatal
    /// contract violation; UTF-8 is delegated unchanged.
    pub fn set_codeset(&self, domain: &str, codeset: &str) -> Result<String, ShimError> {
        if codeset != FORCED_CODESET {
            return Err(ShimError::UnsupportedCodeset {
                requested: codeset.to_string(),
            });
        }
        Ok(self.backend.set_codeset(domain, codeset)?)
    }

    /// Checks both setup flags. The two flags are independent; neither setup
    /// call requires the other to have happened first, but both must precede
    /// any translation. Domain is checked first only so the reported
    /// violation is deterministic when both are missing.
    fn ensure_ready(&self) -> Result<(), ShimError> {
        if !self.domain_selected.load(Ordering::Acquire) {
            return Err(ShimError::DomainNotSelected);
        }
        if !self.locale_selected.load(Ordering::Acquire) {
            return Err(ShimError::LocaleNotSelected);
        }
        Ok(())
    }

    /// The engine: memoized transform of one message id.
    ///
    /// The direction sentinel never runs through a transform. Under the
    /// RTL-simulating mode it becomes the backend's right-to-left literal;
    /// under every other mode it passes through unchanged, preserving the
    /// contract that the sentinel only ever takes one of its two recognized
    /// forms.
    fn pseudo(&self, msgid: &str) -> String {
        let mode = self.mode();
        self.cache.get_or_create(msgid, |original| {
            if original == DIRECTION_SENTINEL {
                return match mode {
                    Mode::MarkReverse => DIRECTION_SENTINEL_RTL.to_string(),
                    Mode::Decorate | Mode::Placeholder => original.to_string(),
                };
            }
            mode.apply(original)
        })
    }

    /// The number of distinct message ids translated so far.
    pub fn cached_messages(&self) -> usize {
        self.cache.len()
    }
}
