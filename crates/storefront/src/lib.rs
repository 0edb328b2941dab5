//! # Popcorn Culture
//!
//! Core of the Popcorn Culture storefront page: the product catalog and its
//! category filter, the cart with its transient notice, and the scroll-driven
//! transform of the 3D hero vessel.
//!
//! - **[model]**: plain data ([`Product`](model::Product), [`Category`](model::Category),
//!   [`CartEntry`](model::CartEntry), the published [`StorefrontView`](model::StorefrontView)).
//! - **[catalog]**, **[cart]**, **[notice]**: synchronous stores, usable without a runtime.
//! - **[storefront_actor]**: the single owner of all page state.
//! - **[clients]**: the typed client the rendering layer talks to.
//! - **[vessel]**: pure per-frame transform math plus the rotation spring.
//! - **[lifecycle]**, **[config]**: start-up, shutdown and tunables.

pub mod cart;
pub mod catalog;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod notice;
pub mod storefront_actor;
pub mod vessel;
