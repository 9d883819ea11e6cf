//! Route handlers organized by resource

pub mod contact;
pub mod health;
pub mod pages;
