use crate::board::eval::EvalProfile;

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u32 = 5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchParams {
    /// Plies to search; 0 is treated as 1
    pub depth: u32,
    pub profile: EvalProfile,
    /// Worker threads for the root split; 1 searches on the calling thread
    pub threads: usize,
}

impl SearchParams {
    #[must_use]
    pub fn with_depth(depth: u32) -> Self {
        SearchParams {
            depth,
            ..SearchParams::default()
        }
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            depth: DEFAULT_DEPTH,
            profile: EvalProfile::BALANCED,
            threads: 1,
        }
    }
}
