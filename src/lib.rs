//! # Pseudoloc Library / Pseudoloc 库
//!
//! This library provides the core functionality for the Pseudoloc tool,
//! a pseudolocalization shim that sits between an application and its
//! gettext-style localization backend, rewriting every translatable string
//! so that layout and logic can be stress-tested without real catalogs.
//!
//! 此库为 Pseudoloc 工具提供核心功能，
//! 这是一个位于应用程序与其 gettext 风格本地化后端之间的伪本地化垫片，
//! 它会重写每一个可翻译字符串，从而无需真实翻译目录即可对布局和逻辑进行压力测试。
//!
//! ## Modules / 模块
//!
//! - `core` - Glyph table, transform functions, mode selection and the message cache
//! - `shim` - The interception facade and the delegated backend interface
//! - `error` - The fatal error taxonomy of the shim
//! - `cli` - Command-line interface for previewing pseudo-translations
//!
//! - `core` - 字形表、变换函数、模式选择和消息缓存
//! - `shim` - 拦截门面和被委托的后端接口
//! - `error` - 垫片的致命错误分类
//! - `cli` - 用于预览伪翻译的命令行接口

pub mod cli;
pub mod core;
pub mod error;
pub mod shim;

// Re-export commonly used items
pub use crate::core::cache::MessageCache;
pub use crate::core::mode::Mode;
pub use error::ShimError;
pub use shim::backend::{EnglishRules, LocaleBackend, LocaleCategory};
pub use shim::facade::PseudoGettext;

/// Initializes the tool's own user-interface language based on the system locale.
///
/// This only affects the messages the `pseudoloc` binary prints about itself;
/// the pseudo-translation engine is locale-independent by construction. It
/// attempts to match the full locale (e.g., "zh-CN"), then just the language
/// code (e.g., "en"), and finally falls back to the default language ("en").
pub fn init() {
    // Detect system locale and set it for i18n.
    // Fallback to "en" if detection fails.
    let locale = sys_locale::get_locale().unwrap_or_else(|| "en".to_string());
    let available_locales = rust_i18n::available_locales!();

    // Try to match the full locale first (e.g., "zh-CN")
    // Then try to match the language part only (e.g., "en" from "en-US")
    // Finally, fall back to "en"
    let lang = if available_locales.contains(&locale.as_str()) {
        &locale
    } else {
        locale
            .split('-')
            .next()
            .filter(|lang_code| available_locales.contains(lang_code))
            .unwrap_or("en")
    };

    rust_i18n::set_locale(lang);
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
