//! # Shim Module / 垫片模块
//!
//! This module provides the interception layer of Pseudoloc: the facade
//! matching the gettext call surface and the interface through which the
//! real localization backend is reached.
//!
//! 此模块提供 Pseudoloc 的拦截层：与 gettext 调用面匹配的门面，
//! 以及用于访问真实本地化后端的接口。

pub mod backend;
pub mod facade;

// Re-exports
pub use backend::{EnglishRules, LocaleBackend, LocaleCategory};
pub use facade::PseudoGettext;
