//! # Warden Testkit
//!
//! Testing utilities for the Warden API.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: Fake worlds, senders and player sessions
//! - **Recording backends**: Providers that log every call they receive
//! - **Conformance checks**: Contract obligations any backend can be run against
//! - **Generators**: Proptest strategies for property-based testing
//!
//! ## Conformance
//!
//! Run the checks against a backend under test:
//!
//! ```rust
//! use std::sync::Arc;
//! use warden_store::{MemoryChat, MemoryConfig, MemoryPermission};
//! use warden_testkit::{conformance, FakePlayer};
//!
//! let perms = Arc::new(MemoryPermission::new(MemoryConfig::default()));
//! let chat = MemoryChat::new(perms.clone(), MemoryConfig::default());
//!
//! conformance::check_permission(perms.as_ref()).unwrap();
//! conformance::check_chat(&chat, &FakePlayer::new("Steve", "world")).unwrap();
//! ```
//!
//! ## Forwarding
//!
//! The recording backends make the online forms observable:
//!
//! ```rust
//! use std::sync::Arc;
//! use warden_chat::ChatExt;
//! use warden_testkit::{FakePlayer, RecordingChat, RecordingPermission};
//!
//! let chat = RecordingChat::new(Arc::new(RecordingPermission::new()));
//! let player = FakePlayer::new("Alex", "world_nether");
//!
//! chat.player_prefix_online(&player);
//! let calls = chat.take_calls();
//! assert_eq!(calls[0].world.name(), Some("world_nether"));
//! ```

pub mod conformance;
pub mod fixtures;
pub mod generators;
pub mod recording;

pub use conformance::{ConformanceFailure, Outcome};
pub use fixtures::{FakePlayer, FakeSender, FakeWorld};
pub use recording::{Call, RecordingChat, RecordingPermission, Subject};
