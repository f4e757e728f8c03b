//! Profile correction.
//!
//! Some hardware decoders refuse H.264 streams that declare a level above
//! 4.1. The extracted stream is patched in place by overwriting the level
//! byte of the first sequence parameter set.

mod profile;

pub use profile::{
    correct_profile, replay_invocation, ProfileError, ProfileResult, CORRECT_PROFILE_ONLY_FLAG,
    LEVEL, LEVEL_OFFSET,
};
