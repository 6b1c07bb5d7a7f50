//! # Core Module / 核心模块
//!
//! This module contains the pseudo-translation engine of Pseudoloc,
//! including the glyph substitution table, the transform functions,
//! mode selection and the message cache.
//!
//! 此模块包含 Pseudoloc 的伪翻译引擎，
//! 包括字形替换表、变换函数、模式选择和消息缓存。

pub mod cache;
pub mod glyph;
pub mod mode;
pub mod transform;

// Re-exports
pub use cache::MessageCache;
pub use mode::Mode;
