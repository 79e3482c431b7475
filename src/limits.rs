/// Default match budget ceiling. Large enough that no line the shell accepts
/// can exhaust it.
pub const DEFAULT_BUDGET: usize = 65_535;

/// Bounds applied when compiling patterns and scanning input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum pattern characters before the terminator.
    pub max_pattern_len: usize,
    /// Maximum input characters before the terminator.
    pub max_input_len: usize,
    /// Most characters a single anchored match may consume.
    pub budget: usize,
    /// Reject `*` over an expression that can match the empty string instead
    /// of cutting the repetition short at match time.
    pub strict_repetition: bool,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_pattern_len: 1024,
            max_input_len: DEFAULT_BUDGET,
            budget: DEFAULT_BUDGET,
            strict_repetition: false,
        }
    }
}
