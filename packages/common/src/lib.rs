//! Common - Shared Types for Cipher Gateway Contracts
//!
//! This package provides shared type definitions used across the
//! Cipher Gateway smart contracts.

pub mod payload;

pub use payload::EncryptedPayload;
