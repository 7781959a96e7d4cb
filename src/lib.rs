//! # groceries
//!
//! A minimal, scriptable grocery list manager.
//!
//! Lists are plain JSON or CSV files, so they stay human-readable and easy to
//! edit by hand or feed into other tools.
//!
//! ## Features
//!
//! - **Merging**: Adding an item that already exists in the same category sums the quantities
//! - **Categories**: Items are grouped by a normalized category when listed
//! - **Two Formats**: JSON records or CSV rows behind the same [`Storage`] contract
//! - **Atomic Saves**: The whole list is rewritten after every change
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod item;
pub mod list;
pub mod logging;
pub mod storage;

pub use config::{set_home_override, Config};
pub use error::{Error, Result};
pub use item::Item;
pub use list::{GroceryList, Grouped, SharedGroceryList};
pub use storage::{Format, Storage};
