//! # Mode Selector Unit Tests / 模式选择器单元测试
//!
//! Unit tests for configuration-value mapping and environment resolution
//! of the transform mode.
//!
//! 变换模式的配置值映射和环境解析的单元测试。

use pseudoloc::core::mode::{Mode, MODE_ENV_VAR};

#[cfg(test)]
mod config_value_tests {
    use super::*;

    #[test]
    fn test_recognized_values() {
        assert_eq!(Mode::from_config_value(Some("ltr")), Mode::Decorate);
        assert_eq!(Mode::from_config_value(Some("rtl")), Mode::MarkReverse);
        assert_eq!(Mode::from_config_value(Some("malkovich")), Mode::Placeholder);
    }

    #[test]
    fn test_absent_value_selects_default() {
        assert_eq!(Mode::from_config_value(None), Mode::Decorate);
    }

    #[test]
    fn test_unrecognized_value_selects_default() {
        assert_eq!(Mode::from_config_value(Some("bidi")), Mode::Decorate);
        assert_eq!(Mode::from_config_value(Some("")), Mode::Decorate);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert_eq!(Mode::from_config_value(Some("RTL")), Mode::Decorate);
        assert_eq!(Mode::from_config_value(Some("Malkovich")), Mode::Decorate);
    }

    #[test]
    fn test_whitespace_is_not_trimmed() {
        assert_eq!(Mode::from_config_value(Some(" rtl")), Mode::Decorate);
        assert_eq!(Mode::from_config_value(Some("rtl ")), Mode::Decorate);
    }

    #[test]
    fn test_default_mode_is_decorate() {
        assert_eq!(Mode::default(), Mode::Decorate);
    }
}

#[cfg(test)]
mod env_resolution_tests {
    use super::*;

    #[test]
    fn test_from_env_reads_the_variable() {
        temp_env::with_var(MODE_ENV_VAR, Some("rtl"), || {
            assert_eq!(Mode::from_env(), Mode::MarkReverse);
        });
        temp_env::with_var(MODE_ENV_VAR, Some("malkovich"), || {
            assert_eq!(Mode::from_env(), Mode::Placeholder);
        });
    }

    #[test]
    fn test_from_env_unset_defaults() {
        temp_env::with_var_unset(MODE_ENV_VAR, || {
            assert_eq!(Mode::from_env(), Mode::Decorate);
        });
    }

    #[test]
    fn test_from_env_garbage_defaults() {
        temp_env::with_var(MODE_ENV_VAR, Some("definitely-not-a-mode"), || {
            assert_eq!(Mode::from_env(), Mode::Decorate);
        });
    }
}

#[cfg(test)]
mod dispatch_tests {
    use super::*;

    #[test]
    fn test_apply_dispatches_to_the_selected_transform() {
        assert_eq!(Mode::Decorate.apply("Hi"), "[ Ĥí ]");
        assert_eq!(Mode::Placeholder.apply("Hi"), "Malkovich");
        let reversed = Mode::MarkReverse.apply("Hi");
        assert_eq!(reversed.chars().count(), 4);
    }
}
