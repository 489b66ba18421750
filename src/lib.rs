//! Folio: a personal portfolio page rendered in the browser from static JSON.
//!
//! The core (fetch, render, visit counter) is target-independent and talks to
//! the page through [`page::Page`]. The `web` module binds it to the DOM when
//! built for `wasm32`; native builds add the content manager and preview server.

pub mod config;
pub mod error;
pub mod fetch;
pub mod interact;
pub mod models;
pub mod page;
pub mod render;
pub mod sections;
pub mod visit;

#[cfg(not(target_arch = "wasm32"))]
pub mod manage;
#[cfg(not(target_arch = "wasm32"))]
pub mod serve;

#[cfg(target_arch = "wasm32")]
pub mod web;
