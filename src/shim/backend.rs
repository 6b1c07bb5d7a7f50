//! # Backend Interface Module / 后端接口模块
//!
//! This module defines the interface through which the shim reaches the real
//! localization backend. The shim never implements catalog lookup, plural
//! rules or locale negotiation itself; it only delegates the four routines
//! declared here. Production bindings resolve the trait to the actual
//! localization library at startup, while tests bind it to a stub.
//!
//! 此模块定义了垫片访问真实本地化后端的接口。
//! 垫片本身从不实现目录查找、复数规则或区域设置协商；
//! 它只委托这里声明的四个例程。生产绑定在启动时将该 trait 解析为
//! 实际的本地化库，而测试则将其绑定到桩实现。

use anyhow::Result;
use std::fmt;

/// The locale categories of the standard C localization API.
/// `select_locale` forces [`LocaleCategory::All`] regardless of what the
/// caller asked for, but the full set is kept so signatures stay a drop-in
/// match for the real call surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleCategory {
    All,
    Collate,
    Ctype,
    Messages,
    Monetary,
    Numeric,
    Time,
}

impl fmt::Display for LocaleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LocaleCategory::All => "LC_ALL",
            LocaleCategory::Collate => "LC_COLLATE",
            LocaleCategory::Ctype => "LC_CTYPE",
            LocaleCategory::Messages => "LC_MESSAGES",
            LocaleCategory::Monetary => "LC_MONETARY",
            LocaleCategory::Numeric => "LC_NUMERIC",
            LocaleCategory::Time => "LC_TIME",
        };
        write!(f, "{}", name)
    }
}

/// The delegated routines of the real localization backend.
///
/// An `Err` from any of these is fatal for the caller: without the backend,
/// plural resolution and locale/domain setup cannot proceed and the shim's
/// results would be undefined.
pub trait LocaleBackend: Send + Sync {
    /// Resolves the correct singular/plural wording for `count`.
    /// Plural-rule arithmetic lives entirely on this side of the interface.
    fn resolve_plural(
        &self,
        domain: Option<&str>,
        singular: &str,
        plural: &str,
        count: u64,
        category: Option<LocaleCategory>,
    ) -> Result<String>;

    /// Registers `name` as the active text domain and returns it as the
    /// backend reports it.
    fn set_domain(&self, name: &str) -> Result<String>;

    /// Applies `locale` to `category`, returning the locale the backend
    /// actually selected.
    fn set_locale(&self, category: LocaleCategory, locale: &str) -> Result<String>;

    /// Binds `codeset` as the output encoding of `domain`.
    fn set_codeset(&self, domain: &str, codeset: &str) -> Result<String>;
}

/// A minimal built-in backend with Germanic plural rules.
///
/// It carries no catalog and performs no real localization; the preview
/// binary and the test suite use it where the real library would otherwise
/// be injected. Setup calls echo their arguments the way the C API reports
/// the value it applied.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishRules;

impl LocaleBackend for EnglishRules {
    fn resolve_plural(
        &self,
        _domain: Option<&str>,
        singular: &str,
        plural: &str,
        count: u64,
        _category: Option<LocaleCategory>,
    ) -> Result<String> {
        let resolved = if count == 1 { singular } else { plural };
        Ok(resolved.to_string())
    }

    fn set_domain(&self, name: &str) -> Result<String> {
        Ok(name.to_string())
    }

    fn set_locale(&self, _category: LocaleCategory, locale: &str) -> Result<String> {
        Ok(locale.to_string())
    }

    fn set_codeset(&self, _domain: &str, codeset: &str) -> Result<String> {
        Ok(codeset.to_string())
    }
}
