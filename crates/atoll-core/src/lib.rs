//! Atoll Core Library
//!
//! Domain logic for the atoll routing tool: the island network (a weighted,
//! directed graph), shortest-route discovery, and capacity-bounded resource
//! distribution along shortest routes.

pub mod chart;
pub mod error;
pub mod logging;
pub mod sea;
