// SPDX-License-Identifier: MPL-2.0
//! `agency_desk` is the back-office shell of an agency network's legal
//! records, built with the Iced GUI framework.
//!
//! It hosts the record sections (agencies, agents, contracts, trademarks and
//! the rest), user preferences with Fluent localization, and the toast
//! notification system every screen reports its outcomes through.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod ui;
