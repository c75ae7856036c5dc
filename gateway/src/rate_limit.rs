//! Rate Limiter Module
//!
//! Fixed-window call limiting per (caller, operation) pair. A window stores
//! only a start timestamp and a counter, giving O(1) space per key.
//!
//! ## Window semantics
//!
//! The window resets when `now - window_start > window_seconds` (strict
//! inequality): a call landing exactly at `window_start + window_seconds`
//! opens a fresh window and is admitted. On rejection the stored window is
//! left untouched.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Env, Storage, Timestamp};
use cw_storage_plus::Map;

use crate::error::ContractError;

// ============================================================================
// Constants
// ============================================================================

/// Operation key for request submission
pub const OP_SUBMIT: &str = "submit";

/// Default maximum submissions per caller per window
pub const DEFAULT_MAX_CALLS_PER_WINDOW: u32 = 10;

/// Default window length in seconds (1 hour)
pub const DEFAULT_WINDOW_SECONDS: u64 = 3_600;

// ============================================================================
// Data Structures
// ============================================================================

/// Per-operation rate limit configuration
#[cw_serde]
pub struct RateLimitConfig {
    /// Maximum admitted calls per caller within one window
    pub max_calls_per_window: u32,
    /// Window length in seconds
    pub window_seconds: u64,
    /// When false, calls are admitted without counting
    pub enabled: bool,
}

impl RateLimitConfig {
    pub fn default_submit() -> Self {
        Self {
            max_calls_per_window: DEFAULT_MAX_CALLS_PER_WINDOW,
            window_seconds: DEFAULT_WINDOW_SECONDS,
            enabled: true,
        }
    }

    pub fn validate(&self) -> Result<(), ContractError> {
        if self.enabled && self.max_calls_per_window == 0 {
            return Err(ContractError::InvalidRateLimitConfig {
                reason: "max_calls_per_window must be positive when enabled".to_string(),
            });
        }
        if self.enabled && self.window_seconds == 0 {
            return Err(ContractError::InvalidRateLimitConfig {
                reason: "window_seconds must be positive when enabled".to_string(),
            });
        }
        Ok(())
    }
}

/// Window tracking for a (caller, operation) pair
#[cw_serde]
pub struct RateLimitWindow {
    /// Timestamp when the current window started
    pub window_start: Timestamp,
    /// Admitted calls in the current window
    pub count: u32,
}

impl RateLimitWindow {
    fn fresh(now: Timestamp) -> Self {
        Self {
            window_start: now,
            count: 0,
        }
    }

    fn expired(&self, now: Timestamp, window_seconds: u64) -> bool {
        now.seconds() > self.window_start.seconds() + window_seconds
    }
}

// ============================================================================
// Storage
// ============================================================================

/// Per-operation rate limit configurations
/// Key: operation key, Value: RateLimitConfig
pub const RATE_LIMITS: Map<&str, RateLimitConfig> = Map::new("rate_limits");

/// Window tracking
/// Key: (caller, operation key), Value: RateLimitWindow
pub const RATE_WINDOWS: Map<(&Addr, &str), RateLimitWindow> = Map::new("rate_windows");

// ============================================================================
// Admission
// ============================================================================

/// Admit or reject a call attempt, counting it on admit.
///
/// Missing configuration means the operation is unthrottled.
pub fn check_and_count(
    storage: &mut dyn Storage,
    env: &Env,
    caller: &Addr,
    operation: &str,
) -> Result<(), ContractError> {
    let config = RATE_LIMITS.may_load(storage, operation)?;

    let Some(config) = config else {
        return Ok(());
    };

    if !config.enabled {
        return Ok(());
    }

    let now = env.block.time;
    let key = (caller, operation);

    let mut window = RATE_WINDOWS
        .may_load(storage, key)?
        .unwrap_or_else(|| RateLimitWindow::fresh(now));

    if window.expired(now, config.window_seconds) {
        window = RateLimitWindow::fresh(now);
    }

    if window.count >= config.max_calls_per_window {
        return Err(ContractError::RateLimited {
            operation: operation.to_string(),
            max_calls: config.max_calls_per_window,
            window_seconds: config.window_seconds,
        });
    }

    window.count += 1;
    RATE_WINDOWS.save(storage, key, &window)?;

    Ok(())
}

/// Remaining admissible calls for a (caller, operation) pair.
///
/// Applies the same window-expiry logic as [`check_and_count`] without
/// mutating the stored window.
pub fn remaining_calls(
    storage: &dyn Storage,
    now: Timestamp,
    caller: &Addr,
    operation: &str,
) -> Result<Option<u32>, ContractError> {
    let config = RATE_LIMITS.may_load(storage, operation)?;

    let Some(config) = config else {
        return Ok(None);
    };

    if !config.enabled {
        return Ok(None);
    }

    let window = RATE_WINDOWS.may_load(storage, (caller, operation))?;

    let remaining = match window {
        Some(w) if !w.expired(now, config.window_seconds) => {
            config.max_calls_per_window.saturating_sub(w.count)
        }
        _ => config.max_calls_per_window,
    };

    Ok(Some(remaining))
}
