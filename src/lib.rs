//! finance-visualizer - personal spending tracker with budgets and insights
//!
//! This library provides the core of the `finviz` command: recording
//! expenses by category, keeping one budget per category and month, and
//! deriving reports from the recorded data.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, budgets, categories, money, periods)
//! - `storage`: JSON file storage layer
//! - `services`: Validated create/update/delete operations
//! - `reports`: Aggregation, budget comparison, insights and the dashboard summary
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML output
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use finance_visualizer::config::{FinvizPaths, Settings};
//! use finance_visualizer::reports::InsightReport;
//! use finance_visualizer::storage::Storage;
//!
//! let paths = FinvizPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::open(paths)?;
//! let report = InsightReport::generate(&storage, Period::current(), &settings)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FinanceError, FinanceResult};
