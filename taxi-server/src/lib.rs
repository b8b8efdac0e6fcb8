//! Taxi terminal finder server.
//!
//! A web service that answers: "Where is the best taxi terminal for me to
//! walk to, given where I am and where I want to go?"

pub mod cache;
pub mod catalog;
pub mod domain;
pub mod geocode;
pub mod routing;
pub mod search;
pub mod web;
