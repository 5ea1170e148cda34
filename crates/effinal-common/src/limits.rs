//! Centralized limits and thresholds.

/// Remaining stack (in bytes) below which recursive tree walks switch to a
/// freshly allocated stack segment.
///
/// Front ends may hand over arbitrarily deep trees (long `a = b = c = ...`
/// chains, deeply nested lambdas). The scanner and the printer grow the stack
/// instead of bailing out, so every reachable node is still visited.
pub const STACK_RED_ZONE: usize = 64 * 1024;

/// Size of each stack segment allocated once the red zone is reached.
pub const STACK_GROWTH: usize = 1024 * 1024;

/// Maximum number of characters of assignment text embedded in a message.
///
/// Longer texts are cut at a char boundary and suffixed with `...`.
pub const MAX_MESSAGE_SNIPPET_CHARS: usize = 200;
